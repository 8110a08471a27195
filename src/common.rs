//! Common functionality shared across the CLI surface

use clap::Args;

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "GRAPH_SCC_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common component display arguments
#[derive(Args, Debug, Clone)]
pub struct DisplayArgs {
    /// Maximum number of components to list in the human report (shows all
    /// by default)
    #[arg(long, env = "GRAPH_SCC_MAX_COMPONENTS")]
    pub max_components: Option<usize>,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::GraphSccError>;
}
