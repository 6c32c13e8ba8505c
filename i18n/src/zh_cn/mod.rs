// 好友关系操作及其结果
pub const FRIEND_GRAPH: &str = r#"
send_request = 发送好友请求
accept_request = 同意好友请求
reject_request = 拒绝好友请求
unfriend = 删除好友

invalid = 无效的请求: { $reason }
busy = 正在处理中, 请稍候
mutation_failed = { $action }失败: { $reason }
refresh_failed = 已保存, 但当前页面可能不是最新的, 请刷新
sync_failed = 加载好友列表失败: { $reason }
network = 网络错误: { $reason }
convert = 数据异常: { $reason }
"#;
