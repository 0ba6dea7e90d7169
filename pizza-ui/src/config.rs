use std::{fmt, path::PathBuf};

/// Startup settings for the order screen host, collected from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory with `pizzas.csv`, `sizes.csv` and `toppings.csv`.
    /// The built-in menu is used when unset.
    pub catalog_dir: Option<PathBuf>,
    pub logging: LogConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    /// Any `EnvFilter` directive; `RUST_LOG` wins when set.
    pub level: String,
    /// Mirror log records to stderr.
    pub console: bool,
    /// Append log records to this file.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: false,
            file: None,
        }
    }
}

impl fmt::Display for AppConfig {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let catalog = self
            .catalog_dir
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "built-in".to_string());
        let log_file = self
            .logging
            .file
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "none".to_string());

        writeln!(f, "Catalog:      {catalog}")?;
        writeln!(f, "Log level:    {}", self.logging.level)?;
        writeln!(f, "Log console:  {}", self.logging.console)?;
        write!(f, "Log file:     {log_file}")
    }
}
