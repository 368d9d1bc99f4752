//! Synopsis builder: the one-line (or wrapped) usage summary.
//!
//! The detailed form lists required boolean flags as one cluster (`-AVX`),
//! optional ones as another (`[-avx]`), then every other option in the order
//! given, then positional parameters by index. The abbreviated form is
//! `name [OPTIONS]` followed by the positional parameters. A custom synopsis
//! replaces both.
//!
//! ```rust
//! use usagefmt::{CommandConfig, OptionDescriptor, SynopsisBuilder};
//!
//! let config = CommandConfig::default();
//! let options = vec![
//!     OptionDescriptor::switch(["--verbose", "-v"]),
//!     OptionDescriptor::new(["--count", "-c"]).required(true),
//! ];
//! let synopsis = SynopsisBuilder::new(&config).detailed(&options, &[]);
//! assert_eq!(synopsis, "<main class> [-v] -c=<count>\n");
//! ```

use tracing::debug;
use usagefmt_table::{display_width, LINE_SEPARATOR};

use crate::config::CommandConfig;
use crate::label::{option_label, parameter_label};
use crate::model::{OptionDescriptor, ParameterDescriptor};

/// How an option's value appears in the synopsis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ValueShape {
    /// `-x`
    Flag,
    /// `-x=<l>`
    One,
    /// `-x[=<l>]`, or `-x [<l>]` with a space separator
    ZeroOrOne,
    /// `-x[=<l>...]`
    ZeroOrMany,
    /// `-x=<l> [<l>...]`
    OneOrMany,
}

impl ValueShape {
    fn of(option: &OptionDescriptor) -> Self {
        let arity = option.arity;
        if option.is_flag() || arity.max() == Some(0) {
            return ValueShape::Flag;
        }
        match (arity.min(), arity.allows_many()) {
            (0, false) => ValueShape::ZeroOrOne,
            (0, true) => ValueShape::ZeroOrMany,
            (_, false) => ValueShape::One,
            (_, true) => ValueShape::OneOrMany,
        }
    }
}

/// Builds synopsis text for one command.
#[derive(Clone, Copy, Debug)]
pub struct SynopsisBuilder<'a> {
    config: &'a CommandConfig,
    cluster_flags: bool,
}

impl<'a> SynopsisBuilder<'a> {
    pub fn new(config: &'a CommandConfig) -> Self {
        SynopsisBuilder {
            config,
            cluster_flags: true,
        }
    }

    /// Whether single-letter boolean flags are grouped into `-abc` clusters
    /// (default true).
    pub fn cluster_flags(mut self, cluster: bool) -> Self {
        self.cluster_flags = cluster;
        self
    }

    /// The synopsis the configuration asks for: custom lines if set, else
    /// the abbreviated or the detailed form.
    pub fn build<'o, I>(&self, options: I, parameters: &[ParameterDescriptor]) -> String
    where
        I: IntoIterator<Item = &'o OptionDescriptor>,
    {
        if let Some(lines) = &self.config.custom_synopsis {
            return lines
                .iter()
                .map(|line| format!("{}{}", line, LINE_SEPARATOR))
                .collect();
        }
        if self.config.abbreviate_synopsis {
            self.abbreviated(options, parameters)
        } else {
            self.detailed(options, parameters)
        }
    }

    /// `name [OPTIONS] <parameters>`.
    pub fn abbreviated<'o, I>(&self, options: I, parameters: &[ParameterDescriptor]) -> String
    where
        I: IntoIterator<Item = &'o OptionDescriptor>,
    {
        let mut tokens = Vec::new();
        if options.into_iter().any(|o| !o.hidden) {
            tokens.push("[OPTIONS]".to_string());
        }
        tokens.extend(
            parameters
                .iter()
                .filter(|p| !p.hidden)
                .map(positional_token),
        );
        self.wrap(&tokens)
    }

    /// Every visible option and positional parameter, with clusters first.
    ///
    /// Options keep the order they are given in.
    pub fn detailed<'o, I>(&self, options: I, parameters: &[ParameterDescriptor]) -> String
    where
        I: IntoIterator<Item = &'o OptionDescriptor>,
    {
        let mut required_cluster = Vec::new();
        let mut optional_cluster = Vec::new();
        let mut rest = Vec::new();
        for option in options.into_iter().filter(|o| !o.hidden) {
            let letter = option.short_letter().filter(|_| self.cluster_flags);
            match letter {
                Some(letter) if option.is_flag() => {
                    if option.required {
                        required_cluster.push(letter);
                    } else {
                        optional_cluster.push(letter);
                    }
                }
                _ => rest.push(option),
            }
        }

        let mut tokens = Vec::new();
        if !required_cluster.is_empty() {
            required_cluster.sort_unstable();
            tokens.push(format!("-{}", String::from_iter(required_cluster)));
        }
        if !optional_cluster.is_empty() {
            optional_cluster.sort_unstable();
            tokens.push(format!("[-{}]", String::from_iter(optional_cluster)));
        }
        tokens.extend(rest.into_iter().map(|o| self.option_token(o)));

        let mut positionals: Vec<&ParameterDescriptor> = parameters
            .iter()
            .filter(|p| !p.hidden && p.show_in_synopsis)
            .collect();
        positionals.sort_by_key(|p| p.index.min());
        tokens.extend(positionals.into_iter().map(positional_token));

        self.wrap(&tokens)
    }

    fn option_token(&self, option: &OptionDescriptor) -> String {
        let name = option.shortest_name();
        let sep = self.config.separator.as_str();
        let label = option_label(option);
        let token = match ValueShape::of(option) {
            ValueShape::Flag => name.to_string(),
            ValueShape::One => format!("{}{}{}", name, sep, label),
            ValueShape::ZeroOrOne if sep == " " => format!("{} [{}]", name, label),
            ValueShape::ZeroOrOne => format!("{}[{}{}]", name, sep, label),
            ValueShape::ZeroOrMany => format!("{}[{}{}...]", name, sep, label),
            ValueShape::OneOrMany => format!("{}{}{} [{}...]", name, sep, label, label),
        };
        if option.required {
            token
        } else {
            format!("[{}]", token)
        }
    }

    /// Joins `name` and the tokens, breaking lines that would run past the
    /// usage width. Continuation lines line up under the first token.
    fn wrap(&self, tokens: &[String]) -> String {
        let name = self.config.command_name();
        let indent = " ".repeat(display_width(name) + 1);
        let budget = self.config.usage_width;

        let mut text = String::new();
        let mut line = name.to_string();
        let mut line_has_token = false;
        for token in tokens.iter().filter(|t| !t.is_empty()) {
            if line_has_token && display_width(&line) + 1 + display_width(token) > budget {
                debug!(width = budget, "wrapping synopsis");
                text.push_str(&line);
                text.push_str(LINE_SEPARATOR);
                line = format!("{}{}", indent, token);
            } else {
                line.push(' ');
                line.push_str(token);
            }
            line_has_token = true;
        }
        text.push_str(&line);
        text.push_str(LINE_SEPARATOR);
        text
    }
}

/// A positional label repeated once per required occurrence, then
/// `[label...]` when unbounded or one `[label]` per optional occurrence.
fn positional_token(parameter: &ParameterDescriptor) -> String {
    let label = parameter_label(parameter);
    let min = parameter.arity.min();
    let mut parts: Vec<String> = std::iter::repeat(label.clone()).take(min).collect();
    match parameter.arity.max() {
        None => parts.push(format!("[{}...]", label)),
        Some(max) => parts.extend((min..max).map(|_| format!("[{}]", label))),
    }
    parts.join(" ")
}
