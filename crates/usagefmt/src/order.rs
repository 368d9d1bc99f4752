//! Orderings for option names and option lists.
//!
//! All sorts here are stable, so options that compare equal keep their
//! declaration order.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::OptionDescriptor;

/// Orders names shortest first, keeping declaration order between names of
/// equal length.
///
/// ```rust
/// use usagefmt::order::shortest_first;
///
/// assert_eq!(shortest_first(&["--verbose", "-v", "-V"]), vec!["-v", "-V", "--verbose"]);
/// ```
pub fn shortest_first<S: AsRef<str>>(names: &[S]) -> Vec<&str> {
    let mut sorted: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    sorted.sort_by_key(|name| name.chars().count());
    sorted
}

/// Compares options by their shortest name, case-insensitively.
///
/// Names equal apart from case put the lowercase one first. Usage-help
/// options always sort after every other option.
pub fn by_shortest_name(a: &OptionDescriptor, b: &OptionDescriptor) -> Ordering {
    let (name_a, name_b) = (a.shortest_name(), b.shortest_name());
    let by_name = name_a
        .to_uppercase()
        .cmp(&name_b.to_uppercase())
        .then_with(|| name_b.cmp(name_a));
    a.usage_help.cmp(&b.usage_help).then(by_name)
}

/// Compares options by maximum arity (unbounded last), then minimum arity,
/// then [`by_shortest_name`].
pub fn by_arity(a: &OptionDescriptor, b: &OptionDescriptor) -> Ordering {
    a.arity
        .max_key()
        .cmp(&b.arity.max_key())
        .then_with(|| a.arity.min().cmp(&b.arity.min()))
        .then_with(|| by_shortest_name(a, b))
}

/// How an option list is ordered before rendering.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionOrder {
    /// Declaration order.
    #[default]
    Declared,
    /// [`by_shortest_name`].
    ShortestName,
    /// [`by_arity`].
    Arity,
    /// A caller-supplied comparison.
    #[serde(skip)]
    Custom(fn(&OptionDescriptor, &OptionDescriptor) -> Ordering),
}

impl fmt::Debug for OptionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionOrder::Declared => f.write_str("Declared"),
            OptionOrder::ShortestName => f.write_str("ShortestName"),
            OptionOrder::Arity => f.write_str("Arity"),
            OptionOrder::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl OptionOrder {
    /// Returns the options in this order without touching the input.
    pub fn sorted<'a>(&self, options: &'a [OptionDescriptor]) -> Vec<&'a OptionDescriptor> {
        let mut sorted: Vec<&OptionDescriptor> = options.iter().collect();
        match self {
            OptionOrder::Declared => {}
            OptionOrder::ShortestName => sorted.sort_by(|a, b| by_shortest_name(a, b)),
            OptionOrder::Arity => sorted.sort_by(|a, b| by_arity(a, b)),
            OptionOrder::Custom(compare) => sorted.sort_by(|a, b| compare(a, b)),
        }
        sorted
    }
}
