use core_types::SelectionPolicy;
use serde::Deserialize;

/// The root configuration structure for the entire application.
///
/// Every section is optional; a missing section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calculator: CalculatorSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

/// Parameters for the elasticity calculation itself.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Which two observations of a longer series feed the midpoint formula.
    pub selection: SelectionPolicy,
}

/// How results are rendered by the command line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Decimal places used for the elasticity value.
    pub precision: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            precision: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// A `tracing` filter directive, used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
