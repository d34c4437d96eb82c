use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidNumber {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}
