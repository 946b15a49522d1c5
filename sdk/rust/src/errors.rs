use tracing_subscriber::util::TryInitError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid log filtering directive: {0}")]
    InvalidLogDirective(#[from] tracing_subscriber::filter::ParseError),
    #[error("A global logger is already installed")]
    LoggerAlreadyInstalled(#[from] TryInitError),
}
