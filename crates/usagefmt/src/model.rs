//! Descriptor model: the plain data the renderers consume.
//!
//! An [`OptionDescriptor`] or [`ParameterDescriptor`] describes one option or
//! positional parameter exactly as declared: names, arity, labels and
//! description lines. How those values were obtained (derive macros, clap
//! introspection, a YAML file) is not this crate's concern.
//!
//! Descriptors deserialize from YAML or JSON. Ranges are written as strings
//! (`"1"`, `"0..1"`, `"1..*"`, `"4.."`) or plain integers, and descriptions
//! as a single string or a list of lines:
//!
//! ```rust
//! use usagefmt::{OptionDescriptor, Range};
//!
//! let option: OptionDescriptor = serde_yaml::from_str(r#"
//! names: ["-c", "--count"]
//! arity: "1..*"
//! description: how many times
//! "#).unwrap();
//!
//! assert_eq!(option.arity, Range::at_least(1));
//! assert_eq!(option.description, vec!["how many times"]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, UsageError};

/// An inclusive range of counts, possibly unbounded at the top.
///
/// Used both for arity (how many values an option or parameter takes) and
/// for positional indexes (which argument positions a parameter captures).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeRaw", into = "RangeRaw")]
pub struct Range {
    min: usize,
    max: Option<usize>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RangeRaw {
    Exact(usize),
    Text(String),
}

impl From<Range> for RangeRaw {
    fn from(range: Range) -> Self {
        match range.max {
            Some(max) if max == range.min => RangeRaw::Exact(max),
            _ => RangeRaw::Text(range.to_string()),
        }
    }
}

impl TryFrom<RangeRaw> for Range {
    type Error = UsageError;

    fn try_from(raw: RangeRaw) -> Result<Self> {
        match raw {
            RangeRaw::Exact(n) => Ok(Range::exactly(n)),
            RangeRaw::Text(s) => s.parse(),
        }
    }
}

impl Range {
    /// A range holding exactly `n`.
    pub const fn exactly(n: usize) -> Self {
        Range {
            min: n,
            max: Some(n),
        }
    }

    /// A range from `min` with no upper bound.
    pub const fn at_least(min: usize) -> Self {
        Range { min, max: None }
    }

    /// A bounded range.
    ///
    /// # Errors
    ///
    /// Fails when `min > max`.
    pub fn between(min: usize, max: usize) -> Result<Self> {
        if min > max {
            return Err(UsageError::InvalidRange(format!("{}..{}", min, max)));
        }
        Ok(Range {
            min,
            max: Some(max),
        })
    }

    /// Lower bound.
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Upper bound, `None` when unbounded.
    pub const fn max(&self) -> Option<usize> {
        self.max
    }

    /// True when there is no upper bound.
    pub const fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    /// True when more than one occurrence is allowed.
    pub fn allows_many(&self) -> bool {
        self.max.map_or(true, |max| max > 1)
    }

    /// Upper bound as a sort key, with unbounded sorting last.
    pub(crate) fn max_key(&self) -> usize {
        self.max.unwrap_or(usize::MAX)
    }
}

impl FromStr for Range {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = || UsageError::InvalidRange(s.to_string());
        if text == "*" {
            return Ok(Range::at_least(0));
        }
        match text.split_once("..") {
            Some((min, max)) => {
                let min = min.trim().parse::<usize>().map_err(|_| invalid())?;
                match max.trim() {
                    "" | "*" => Ok(Range::at_least(min)),
                    max => {
                        let max = max.parse::<usize>().map_err(|_| invalid())?;
                        Range::between(min, max).map_err(|_| invalid())
                    }
                }
            }
            None => text.parse().map(Range::exactly).map_err(|_| invalid()),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{}", max),
            Some(max) => write!(f, "{}..{}", self.min, max),
            None => write!(f, "{}..*", self.min),
        }
    }
}

/// Accepts either a single string or a list of strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Deserializes a field that may be written as one line or a list of lines.
pub(crate) fn lines<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(line) => vec![line],
        OneOrMany::Many(lines) => lines,
    })
}

/// Strips leading option prefix characters: `--file` becomes `file`.
fn bare_name(name: &str) -> &str {
    name.trim_start_matches(['-', '/'])
}

/// Describes one option as declared.
///
/// `names` keeps declaration order, and the first name is the primary
/// name. Help tables and synopses display names shortest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OptionRaw")]
pub struct OptionDescriptor {
    /// All names in declaration order, e.g. `["-f", "--file"]`.
    pub names: Vec<String>,
    pub required: bool,
    pub arity: Range,
    /// Placeholder shown for the value, e.g. `FILE`. Defaults to `<fallback>`.
    pub value_label: Option<String>,
    /// Derived name used when there is no value label. Defaults to the
    /// longest option name without its dashes.
    pub fallback_label: Option<String>,
    pub description: Vec<String>,
    /// Default value as display text, shown as `Default: ...` when enabled.
    pub default_value: Option<String>,
    pub hidden: bool,
    /// Boolean switch. Together with a zero minimum arity, the option never shows a value label.
    pub flag: bool,
    /// Help or version request option; listed after all others.
    pub usage_help: bool,
}

#[derive(Deserialize)]
struct OptionRaw {
    names: Vec<String>,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    arity: Option<Range>,
    #[serde(default)]
    value_label: Option<String>,
    #[serde(default)]
    fallback_label: Option<String>,
    #[serde(default, deserialize_with = "lines")]
    description: Vec<String>,
    #[serde(default)]
    default_value: Option<String>,
    #[serde(default)]
    hidden: bool,
    #[serde(default)]
    flag: bool,
    #[serde(default)]
    usage_help: bool,
}

impl TryFrom<OptionRaw> for OptionDescriptor {
    type Error = UsageError;

    fn try_from(raw: OptionRaw) -> Result<Self> {
        let default_arity = if raw.flag {
            Range::exactly(0)
        } else {
            Range::exactly(1)
        };
        let option = OptionDescriptor {
            names: raw.names,
            required: raw.required,
            arity: raw.arity.unwrap_or(default_arity),
            value_label: raw.value_label,
            fallback_label: raw.fallback_label,
            description: raw.description,
            default_value: raw.default_value,
            hidden: raw.hidden,
            flag: raw.flag,
            usage_help: raw.usage_help,
        };
        option.validate()?;
        Ok(option)
    }
}

impl OptionDescriptor {
    /// An option taking exactly one value.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OptionDescriptor {
            names: names.into_iter().map(Into::into).collect(),
            required: false,
            arity: Range::exactly(1),
            value_label: None,
            fallback_label: None,
            description: Vec::new(),
            default_value: None,
            hidden: false,
            flag: false,
            usage_help: false,
        }
    }

    /// A boolean switch with arity 0.
    pub fn switch<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OptionDescriptor {
            flag: true,
            arity: Range::exactly(0),
            ..Self::new(names)
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn arity(mut self, arity: Range) -> Self {
        self.arity = arity;
        self
    }

    pub fn value_label(mut self, label: impl Into<String>) -> Self {
        self.value_label = Some(label.into());
        self
    }

    pub fn fallback_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_label = Some(label.into());
        self
    }

    /// Append one description line.
    pub fn description(mut self, line: impl Into<String>) -> Self {
        self.description.push(line.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn usage_help(mut self, usage_help: bool) -> Self {
        self.usage_help = usage_help;
        self
    }

    /// First declared name.
    pub fn primary_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }

    /// Names ordered shortest first, ties kept in declaration order.
    pub fn names_shortest_first(&self) -> Vec<&str> {
        crate::order::shortest_first(&self.names)
    }

    /// The shortest name, used in synopses and for sorting.
    pub fn shortest_name(&self) -> &str {
        self.names_shortest_first().first().copied().unwrap_or_default()
    }

    /// The letter of a single-character short name such as `-v`, if there is one.
    pub fn short_letter(&self) -> Option<char> {
        let mut chars = self.shortest_name().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some('-'), Some(letter), None) if letter != '-' => Some(letter),
            _ => None,
        }
    }

    /// True for boolean switches that never take a value.
    pub fn is_flag(&self) -> bool {
        self.flag && self.arity.min() == 0
    }

    /// Derived name used for `<label>` placeholders.
    pub fn fallback_name(&self) -> &str {
        if let Some(label) = &self.fallback_label {
            return label;
        }
        self.names
            .iter()
            .map(|name| bare_name(name))
            .max_by_key(|name| name.chars().count())
            .unwrap_or_default()
    }

    /// First description line, or `""`.
    pub fn first_description(&self) -> &str {
        self.description.first().map(String::as_str).unwrap_or_default()
    }

    /// Check the descriptor invariants.
    ///
    /// # Errors
    ///
    /// Fails when there are no names or a name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.names.is_empty() {
            return Err(UsageError::InvalidDescriptor(
                "option has no names".to_string(),
            ));
        }
        if self.names.iter().any(|n| n.trim().is_empty()) {
            return Err(UsageError::InvalidDescriptor(format!(
                "option {:?} has a blank name",
                self.names
            )));
        }
        Ok(())
    }
}

/// Describes one positional parameter as declared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ParameterRaw")]
pub struct ParameterDescriptor {
    /// Argument positions captured, e.g. `0`, `3..4` or `4..`.
    pub index: Range,
    pub arity: Range,
    pub value_label: Option<String>,
    /// Derived name shown when there is no value label.
    pub fallback_label: String,
    pub description: Vec<String>,
    pub hidden: bool,
    /// Whether the detailed synopsis lists this parameter.
    pub show_in_synopsis: bool,
}

#[derive(Deserialize)]
struct ParameterRaw {
    #[serde(alias = "name")]
    fallback_label: String,
    #[serde(default)]
    index: Option<Range>,
    #[serde(default)]
    arity: Option<Range>,
    #[serde(default)]
    value_label: Option<String>,
    #[serde(default, deserialize_with = "lines")]
    description: Vec<String>,
    #[serde(default)]
    hidden: bool,
    #[serde(default = "show_in_synopsis_default")]
    show_in_synopsis: bool,
}

fn show_in_synopsis_default() -> bool {
    true
}

impl TryFrom<ParameterRaw> for ParameterDescriptor {
    type Error = UsageError;

    fn try_from(raw: ParameterRaw) -> Result<Self> {
        let parameter = ParameterDescriptor {
            index: raw.index.unwrap_or(Range::at_least(0)),
            arity: raw.arity.unwrap_or(Range::exactly(1)),
            value_label: raw.value_label,
            fallback_label: raw.fallback_label,
            description: raw.description,
            hidden: raw.hidden,
            show_in_synopsis: raw.show_in_synopsis,
        };
        parameter.validate()?;
        Ok(parameter)
    }
}

impl ParameterDescriptor {
    /// A required single-value parameter at any position.
    pub fn new(fallback_label: impl Into<String>) -> Self {
        ParameterDescriptor {
            index: Range::at_least(0),
            arity: Range::exactly(1),
            value_label: None,
            fallback_label: fallback_label.into(),
            description: Vec::new(),
            hidden: false,
            show_in_synopsis: true,
        }
    }

    pub fn index(mut self, index: Range) -> Self {
        self.index = index;
        self
    }

    pub fn arity(mut self, arity: Range) -> Self {
        self.arity = arity;
        self
    }

    pub fn value_label(mut self, label: impl Into<String>) -> Self {
        self.value_label = Some(label.into());
        self
    }

    /// Append one description line.
    pub fn description(mut self, line: impl Into<String>) -> Self {
        self.description.push(line.into());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn show_in_synopsis(mut self, show: bool) -> Self {
        self.show_in_synopsis = show;
        self
    }

    /// First description line, or `""`.
    pub fn first_description(&self) -> &str {
        self.description.first().map(String::as_str).unwrap_or_default()
    }

    /// Check the descriptor invariants.
    ///
    /// # Errors
    ///
    /// Fails when the fallback label is blank.
    pub fn validate(&self) -> Result<()> {
        if self.fallback_label.trim().is_empty() {
            return Err(UsageError::InvalidDescriptor(
                "positional parameter has a blank name".to_string(),
            ));
        }
        Ok(())
    }
}
