//! Environment variable and tilde expansion for config strings.

use crate::ConfigError;

/// Expand `${VAR}` references and a leading `~` in a config string.
///
/// `field` names the config field for error reporting (e.g. `output.dir`).
pub(crate) fn expand_str(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::full(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: err.to_string(),
        })
}
