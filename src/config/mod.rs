pub mod settings;

pub use settings::{Config, ConfigError, LoggingConfig, OutputConfig, SyncConfig};
