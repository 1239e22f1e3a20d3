use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

impl From<toml::de::Error> for CommonError {
    fn from(e: toml::de::Error) -> Self {
        CommonError::Config(e.to_string())
    }
}
