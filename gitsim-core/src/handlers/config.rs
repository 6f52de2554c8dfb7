use super::Context;
use crate::error::{Error, Result};
use crate::parser::ConfigAction;
use tracing::debug;

pub(super) fn config(ctx: &mut Context<'_>, action: ConfigAction) -> Result<String> {
    match action {
        ConfigAction::List => {
            let lines: Vec<String> = ctx
                .config
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            if lines.is_empty() {
                Ok("No configuration found".to_string())
            } else {
                Ok(lines.join("\n"))
            }
        }
        ConfigAction::Get(key) => ctx
            .config
            .get(&key)
            .map(str::to_string)
            .ok_or(Error::UnsetConfigKey(key)),
        ConfigAction::Set { key, value } => {
            debug!(key = %key, "config updated");
            let line = format!("Configuration set: {key} = {value}");
            ctx.config.set(key, value);
            Ok(line)
        }
    }
}
