//! Value-label renderers: the placeholder text for an option's or a
//! positional parameter's value.
//!
//! ```rust
//! use usagefmt::{DefaultValueLabelRenderer, OptionDescriptor, ValueLabelRenderer};
//!
//! let labels = DefaultValueLabelRenderer::new("=");
//! let file = OptionDescriptor::new(["-f", "--file"]);
//! assert_eq!(labels.render_option(&file), "=<file>");
//!
//! let verbose = OptionDescriptor::switch(["-v"]);
//! assert_eq!(labels.render_option(&verbose), "");
//! ```

use crate::config::CommandConfig;
use crate::model::{OptionDescriptor, ParameterDescriptor};

/// Separator used between an option name and its value label unless configured.
pub const DEFAULT_SEPARATOR: &str = "=";

/// Renders value placeholders.
///
/// `render_option` produces the text placed right after an option name,
/// separator included. `render_parameter` produces the label shown for a
/// positional parameter, which never carries a separator.
pub trait ValueLabelRenderer {
    fn render_option(&self, option: &OptionDescriptor) -> String;

    fn render_parameter(&self, parameter: &ParameterDescriptor) -> String;

    /// The text `render_option` puts before the label.
    fn separator(&self) -> &str {
        ""
    }
}

/// Label of an option: its value label, else `<fallback>`.
pub(crate) fn option_label(option: &OptionDescriptor) -> String {
    match &option.value_label {
        Some(label) => label.clone(),
        None => format!("<{}>", option.fallback_name()),
    }
}

/// Label of a parameter: its value label, else `<fallback>`.
pub(crate) fn parameter_label(parameter: &ParameterDescriptor) -> String {
    match &parameter.value_label {
        Some(label) => label.clone(),
        None => format!("<{}>", parameter.fallback_label),
    }
}

/// Renders `<separator><label>` for options and `<label>` for parameters.
///
/// With a single-space separator an option renders as ` <label>`, so names
/// read `-c <count>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultValueLabelRenderer {
    separator: String,
}

impl DefaultValueLabelRenderer {
    pub fn new(separator: impl Into<String>) -> Self {
        DefaultValueLabelRenderer {
            separator: separator.into(),
        }
    }

    /// Uses the command's configured separator.
    pub fn from_config(config: &CommandConfig) -> Self {
        Self::new(config.separator.clone())
    }
}

impl Default for DefaultValueLabelRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl ValueLabelRenderer for DefaultValueLabelRenderer {
    fn render_option(&self, option: &OptionDescriptor) -> String {
        if option.is_flag() {
            return String::new();
        }
        format!("{}{}", self.separator, option_label(option))
    }

    fn render_parameter(&self, parameter: &ParameterDescriptor) -> String {
        parameter_label(parameter)
    }

    fn separator(&self) -> &str {
        &self.separator
    }
}

/// Renders bare labels with no angle brackets and no configuration.
///
/// Options get a single leading space (`-p proto`). Parameters get the bare
/// label (`host1`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinimalValueLabelRenderer;

impl ValueLabelRenderer for MinimalValueLabelRenderer {
    fn render_option(&self, option: &OptionDescriptor) -> String {
        if option.is_flag() {
            return String::new();
        }
        let label = option
            .value_label
            .as_deref()
            .unwrap_or_else(|| option.fallback_name());
        format!(" {}", label)
    }

    fn render_parameter(&self, parameter: &ParameterDescriptor) -> String {
        parameter
            .value_label
            .clone()
            .unwrap_or_else(|| parameter.fallback_label.clone())
    }

    fn separator(&self) -> &str {
        " "
    }
}
