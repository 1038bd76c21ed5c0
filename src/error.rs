use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display("failed to read config file")]
    ReadFile,
    #[display("failed to parse config: {reason}")]
    Parse { reason: String },
    #[display("invalid config: {field}")]
    Validation { field: String },
}

#[derive(Debug, Display, Error)]
pub enum InputError {
    #[display("failed to read signal payload")]
    ReadFile,
    #[display("failed to parse signal payload: {reason}")]
    Parse { reason: String },
    #[display("missing required field: {field}")]
    MissingField { field: String },
}
