use fluent::{FluentBundle, FluentResource};
use unic_langid::langid;

/// format a fluent message, falling back to the key itself
/// when the bundle has no such message
#[macro_export]
macro_rules! tr {
    ($bundle:expr, $key:expr) => {{
        match $bundle.get_message($key).and_then(|message| message.value()) {
            Some(pattern) => {
                let mut errors = Vec::new();
                $bundle
                    .format_pattern(pattern, None, &mut errors)
                    .to_string()
            }
            None => $key.to_string(),
        }
    }};
    ($bundle:expr, $key:expr, $($arg_name:expr => $arg_value:expr),* $(,)?) => {{
        match $bundle.get_message($key).and_then(|message| message.value()) {
            Some(pattern) => {
                let mut args = fluent::FluentArgs::new();
                $(
                    args.set($arg_name, $arg_value);
                )*

                let mut errors = Vec::new();
                $bundle
                    .format_pattern(pattern, Some(&args), &mut errors)
                    .to_string()
            }
            None => $key.to_string(),
        }
    }};
}

pub fn create_bundle(content: impl Into<String>) -> FluentBundle<FluentResource> {
    let lang_id = langid!("en-US");
    let mut bundle = FluentBundle::new(vec![lang_id]);
    // messages end up in plain text, not in a bidi aware renderer
    bundle.set_use_isolating(false);
    let resource = match FluentResource::try_new(content.into()) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            log::error!("parse fluent resource error: {:?}", errors);
            resource
        }
    };
    if let Err(errors) = bundle.add_resource(resource) {
        log::error!("add fluent resource error: {:?}", errors);
    }

    bundle
}
