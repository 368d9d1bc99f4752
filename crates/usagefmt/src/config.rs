//! Command-level configuration and spec loading.
//!
//! A [`CommandSpec`] bundles a [`CommandConfig`] with the option and
//! parameter descriptors of one command. It can be built in code or loaded
//! from YAML or JSON:
//!
//! ```yaml
//! command:
//!   name: cat
//!   abbreviate_synopsis: true
//!   description: Concatenate FILE(s), or standard input, to standard output.
//!   footer: Copyright(c) 2017
//! options:
//!   - names: ["-A", "--show-all"]
//!     flag: true
//!     description: equivalent to -vET
//! parameters:
//!   - name: files
//!     value_label: FILE
//!     arity: "0..*"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, UsageError};
use crate::help::Help;
use crate::label::DEFAULT_SEPARATOR;
use crate::model::{lines, OptionDescriptor, ParameterDescriptor};
use usagefmt_table::DEFAULT_USAGE_WIDTH;

/// Program name shown when none is configured.
pub const DEFAULT_COMMAND_NAME: &str = "<main class>";

/// Returns the width of the attached terminal, or 80 when there is none.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_USAGE_WIDTH)
}

/// Settings shared by every section of one command's help.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Program name. Defaults to `<main class>`.
    pub name: Option<String>,
    #[serde(deserialize_with = "lines")]
    pub header: Vec<String>,
    #[serde(deserialize_with = "lines")]
    pub description: Vec<String>,
    #[serde(deserialize_with = "lines")]
    pub footer: Vec<String>,
    /// Render `name [OPTIONS] <params>` instead of listing every option.
    pub abbreviate_synopsis: bool,
    /// Literal synopsis lines, used verbatim when set.
    pub custom_synopsis: Option<Vec<String>>,
    /// Text between an option name and its value label.
    pub separator: String,
    /// Marker shown in front of required options.
    pub required_option_marker: char,
    /// Add a `Default: <value>` row under options that have a default.
    pub show_default_values: bool,
    /// Line-width budget for the synopsis and the option table.
    pub usage_width: usize,
}

impl Default for CommandConfig {
    fn default() -> Self {
        CommandConfig {
            name: None,
            header: Vec::new(),
            description: Vec::new(),
            footer: Vec::new(),
            abbreviate_synopsis: false,
            custom_synopsis: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            required_option_marker: ' ',
            show_default_values: true,
            usage_width: DEFAULT_USAGE_WIDTH,
        }
    }
}

impl CommandConfig {
    pub fn new(name: impl Into<String>) -> Self {
        CommandConfig {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// The program name, or `<main class>` when unset.
    pub fn command_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_COMMAND_NAME)
    }

    /// Append one header line.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Append one description line.
    pub fn description(mut self, line: impl Into<String>) -> Self {
        self.description.push(line.into());
        self
    }

    /// Append one footer line.
    pub fn footer(mut self, line: impl Into<String>) -> Self {
        self.footer.push(line.into());
        self
    }

    pub fn abbreviate_synopsis(mut self, abbreviate: bool) -> Self {
        self.abbreviate_synopsis = abbreviate;
        self
    }

    pub fn custom_synopsis<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_synopsis = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn required_option_marker(mut self, marker: char) -> Self {
        self.required_option_marker = marker;
        self
    }

    pub fn show_default_values(mut self, show: bool) -> Self {
        self.show_default_values = show;
        self
    }

    pub fn usage_width(mut self, width: usize) -> Self {
        self.usage_width = width;
        self
    }

    /// Use the current terminal width as the line-width budget.
    pub fn fit_terminal(self) -> Self {
        let width = terminal_width();
        self.usage_width(width)
    }
}

/// One command: its configuration plus declared options and parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    #[serde(default)]
    pub command: CommandConfig,
    #[serde(default)]
    pub options: Vec<OptionDescriptor>,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl CommandSpec {
    pub fn new(command: CommandConfig) -> Self {
        CommandSpec {
            command,
            options: Vec::new(),
            parameters: Vec::new(),
        }
    }

    pub fn option(mut self, option: OptionDescriptor) -> Self {
        self.options.push(option);
        self
    }

    pub fn parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Parse a spec from YAML.
    ///
    /// # Errors
    ///
    /// Fails on malformed YAML or a descriptor that violates its invariants.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let spec: CommandSpec = serde_yaml::from_str(yaml)?;
        spec.validate()?;
        debug!(
            options = spec.options.len(),
            parameters = spec.parameters.len(),
            "loaded command spec from YAML"
        );
        Ok(spec)
    }

    /// Parse a spec from JSON.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or a descriptor that violates its invariants.
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: CommandSpec = serde_json::from_str(json)?;
        spec.validate()?;
        debug!(
            options = spec.options.len(),
            parameters = spec.parameters.len(),
            "loaded command spec from JSON"
        );
        Ok(spec)
    }

    /// Load a spec from a file. `.json` files are read as JSON, everything
    /// else as YAML.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Check every descriptor.
    ///
    /// # Errors
    ///
    /// Returns the first descriptor error found.
    pub fn validate(&self) -> Result<()> {
        for option in &self.options {
            option.validate()?;
        }
        for parameter in &self.parameters {
            parameter.validate()?;
        }
        if self.command.usage_width == 0 {
            return Err(UsageError::InvalidDescriptor(
                "usage_width must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// A help renderer over this spec.
    pub fn help(&self) -> Help<'_> {
        Help::new(&self.command, &self.options, &self.parameters)
    }
}
