use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{CalculatorSettings, Config, LoggingSettings, OutputFormat, OutputSettings};

/// The file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "elasticity.toml";

/// Largest number of decimal places the renderer accepts.
pub const MAX_PRECISION: usize = 10;

/// Loads the application configuration.
///
/// Sources are layered in order: built-in defaults, then the TOML file, then
/// environment variables prefixed with `ELASTICITY` (e.g. `ELASTICITY__OUTPUT__PRECISION=2`).
/// With `path` set the file must exist; otherwise `elasticity.toml` is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path)
            .format(config::FileFormat::Toml)
            .required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE)
            .format(config::FileFormat::Toml)
            .required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("ELASTICITY")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

impl Config {
    /// Checks constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.precision > MAX_PRECISION {
            return Err(ConfigError::ValidationError(format!(
                "output.precision must be at most {}, got {}",
                MAX_PRECISION, self.output.precision
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
