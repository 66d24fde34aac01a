use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    MissingVariable(&'static str),
    #[error("config.invalid_variable: {0}")]
    InvalidVariable(&'static str),
}

/// Reads a variable and parses it, falling back to `default` when unset.
pub fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidVariable(name)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_default_when_unset() {
        let lookup = |_: &str| None;
        assert_eq!(parse_or(&lookup, "SESSION_MAX_AGE_SECS", 10_u64), Ok(10));
    }

    #[test]
    fn should_parse_value_when_set() {
        let lookup = |_: &str| Some(" 42 ".to_string());
        assert_eq!(parse_or(&lookup, "SESSION_MAX_AGE_SECS", 10_u64), Ok(42));
    }

    #[test]
    fn should_reject_unparsable_value() {
        let lookup = |_: &str| Some("soon".to_string());
        assert_eq!(
            parse_or(&lookup, "SESSION_MAX_AGE_SECS", 10_u64),
            Err(ConfigError::InvalidVariable("SESSION_MAX_AGE_SECS"))
        );
    }
}
