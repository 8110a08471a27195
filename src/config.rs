//! Analyze command configuration

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::common::ConfigBuilder;
use crate::error::GraphSccError;

/// Configuration for one component-analysis run
///
/// This struct contains all options for reading an edge-list file,
/// partitioning it into strongly connected components, and reporting the
/// result.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Path to the edge-list input file
    pub input: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Where to write the report (stdout if None)
    pub output: Option<PathBuf>,
    /// Suppress progress reporting on stderr
    pub quiet: bool,
    /// Maximum number of components shown by the human report (None = all)
    pub max_components: Option<usize>,
}

impl AnalyzeConfig {
    pub fn builder() -> AnalyzeConfigBuilder {
        AnalyzeConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct AnalyzeConfigBuilder {
    input: Option<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<Option<PathBuf>>,
    quiet: Option<bool>,
    max_components: Option<Option<usize>>,
}

impl AnalyzeConfigBuilder {
    pub fn new() -> Self {
        Self {
            input: None,
            format: None,
            output: None,
            quiet: None,
            max_components: None,
        }
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }

    pub fn with_max_components(mut self, max_components: Option<usize>) -> Self {
        self.max_components = Some(max_components);
        self
    }
}

impl ConfigBuilder for AnalyzeConfigBuilder {
    type Config = AnalyzeConfig;

    fn build(self) -> Result<Self::Config, GraphSccError> {
        Ok(AnalyzeConfig {
            input: self.input.ok_or_else(|| GraphSccError::ConfigurationError {
                message: "Missing required field: input".to_string(),
            })?,
            format: self
                .format
                .ok_or_else(|| GraphSccError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                })?,
            output: self
                .output
                .ok_or_else(|| GraphSccError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                })?,
            quiet: self.quiet.ok_or_else(|| GraphSccError::ConfigurationError {
                message: "Missing required field: quiet".to_string(),
            })?,
            max_components: self.max_components.ok_or_else(|| {
                GraphSccError::ConfigurationError {
                    message: "Missing required field: max_components".to_string(),
                }
            })?,
        })
    }
}

impl TryFrom<Cli> for AnalyzeConfig {
    type Error = GraphSccError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        AnalyzeConfig::builder()
            .with_input(cli.input)
            .with_format(cli.format.format)
            .with_output(cli.output)
            .with_quiet(cli.quiet)
            .with_max_components(cli.display.max_components)
            .build()
    }
}
