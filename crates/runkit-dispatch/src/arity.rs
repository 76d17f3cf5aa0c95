//! Sub-command arity contracts.
//!
//! Each runnable declares, per sub-command, how many trailing arguments it
//! accepts. The dispatcher checks a call against that declaration before the
//! runnable ever sees it, so new runnables opt into validation just by
//! returning a [`SubcommandTable`].
//!
//! The textual form of an [`Arity`] is the one used by the scaffolding DSL:
//!
//! | Text    | Arity                  |
//! |---------|------------------------|
//! | `none`  | [`Arity::NoArgs`]      |
//! | `i`     | [`Arity::AtLeastOne`]  |
//! | `3`     | [`Arity::Exact`]`(3)`  |

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use thiserror::Error;

/// How many trailing arguments a sub-command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly `n` arguments.
    Exact(usize),
    /// No arguments at all.
    NoArgs,
    /// One or more arguments.
    AtLeastOne,
}

impl Arity {
    /// Checks `actual` arguments given to `subcommand` against this arity.
    pub fn check(&self, subcommand: &str, actual: usize) -> Result<(), ArityError> {
        match *self {
            Arity::AtLeastOne if actual == 0 => Err(ArityError::RequiresAtLeastOne {
                subcommand: subcommand.to_string(),
            }),
            Arity::NoArgs if actual > 0 => Err(ArityError::AcceptsNoArguments {
                subcommand: subcommand.to_string(),
                actual,
            }),
            Arity::Exact(expected) if actual != expected => Err(ArityError::WrongCount {
                subcommand: subcommand.to_string(),
                expected,
                actual,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::NoArgs => write!(f, "none"),
            Arity::AtLeastOne => write!(f, "i"),
        }
    }
}

/// An arity token that is none of `none`, `i` or a base-10 count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{0}] is not a valid argument length type")]
pub struct ParseArityError(pub String);

impl FromStr for Arity {
    type Err = ParseArityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Arity::NoArgs),
            "i" => Ok(Arity::AtLeastOne),
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => digits
                .parse()
                .map(Arity::Exact)
                .map_err(|_| ParseArityError(s.to_string())),
            _ => Err(ParseArityError(s.to_string())),
        }
    }
}

/// A call that does not satisfy a sub-command's declared arity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArityError {
    #[error("'{subcommand}' requires at least one argument")]
    RequiresAtLeastOne { subcommand: String },

    #[error("'{subcommand}' accepts no arguments, {actual} given")]
    AcceptsNoArguments { subcommand: String, actual: usize },

    #[error("'{subcommand}' expects {expected} argument(s), {actual} given")]
    WrongCount {
        subcommand: String,
        expected: usize,
        actual: usize,
    },
}

/// Ordered mapping from sub-command name to [`Arity`].
///
/// Declaration order is preserved for listing and code generation. Inserting
/// a name that is already present replaces its arity in place.
///
/// ```
/// use runkit_dispatch::{Arity, SubcommandTable};
///
/// let table = SubcommandTable::new()
///     .with("create-route", Arity::Exact(4))
///     .with("list", Arity::NoArgs);
///
/// assert_eq!(table.get("list"), Some(Arity::NoArgs));
/// assert_eq!(table.names().collect::<Vec<_>>(), ["create-route", "list"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubcommandTable {
    entries: IndexMap<String, Arity>,
}

impl SubcommandTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, arity: Arity) -> Self {
        self.insert(name, arity);
        self
    }

    /// Adds or replaces a sub-command.
    pub fn insert(&mut self, name: impl Into<String>, arity: Arity) {
        self.entries.insert(name.into(), arity);
    }

    /// Arity declared for `name`, if any.
    pub fn get(&self, name: &str) -> Option<Arity> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Arity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), *a))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tables are equal when they declare the same entries in the same order.
impl PartialEq for SubcommandTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for SubcommandTable {}

impl<S: Into<String>> FromIterator<(S, Arity)> for SubcommandTable {
    fn from_iter<I: IntoIterator<Item = (S, Arity)>>(iter: I) -> Self {
        let mut table = SubcommandTable::new();
        for (name, arity) in iter {
            table.insert(name, arity);
        }
        table
    }
}

/// Validates the arguments following `subcommand` against `table`.
///
/// Only names present in the table are checked; an unknown name passes,
/// leaving it to the caller to decide whether that is an error.
pub fn validate(table: &SubcommandTable, subcommand: &str, args: &[String]) -> Result<(), ArityError> {
    match table.get(subcommand) {
        Some(arity) => arity.check(subcommand, args.len()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_accepts_matching_count() {
        let table = SubcommandTable::new().with("x", Arity::Exact(2));
        assert!(validate(&table, "x", &args(&["a", "b"])).is_ok());
    }

    #[test]
    fn exact_rejects_too_few_and_too_many() {
        let table = SubcommandTable::new().with("x", Arity::Exact(2));

        assert_eq!(
            validate(&table, "x", &args(&["a"])),
            Err(ArityError::WrongCount {
                subcommand: "x".into(),
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            validate(&table, "x", &args(&["a", "b", "c"])),
            Err(ArityError::WrongCount {
                subcommand: "x".into(),
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn exact_zero_behaves_like_no_args_count() {
        let table = SubcommandTable::new().with("x", Arity::Exact(0));
        assert!(validate(&table, "x", &[]).is_ok());
        assert!(matches!(
            validate(&table, "x", &args(&["a"])),
            Err(ArityError::WrongCount { expected: 0, .. })
        ));
    }

    #[test]
    fn no_args() {
        let table = SubcommandTable::new().with("x", Arity::NoArgs);
        assert!(validate(&table, "x", &[]).is_ok());
        assert_eq!(
            validate(&table, "x", &args(&["a"])),
            Err(ArityError::AcceptsNoArguments {
                subcommand: "x".into(),
                actual: 1
            })
        );
    }

    #[test]
    fn at_least_one() {
        let table = SubcommandTable::new().with("x", Arity::AtLeastOne);
        assert_eq!(
            validate(&table, "x", &[]),
            Err(ArityError::RequiresAtLeastOne {
                subcommand: "x".into()
            })
        );
        assert!(validate(&table, "x", &args(&["a"])).is_ok());
        assert!(validate(&table, "x", &args(&["a", "b"])).is_ok());
    }

    #[test]
    fn unknown_subcommand_is_not_validated() {
        let table = SubcommandTable::new().with("x", Arity::NoArgs);
        assert!(validate(&table, "y", &args(&["a", "b"])).is_ok());
    }

    #[test]
    fn parse_tokens() {
        assert_eq!("none".parse::<Arity>(), Ok(Arity::NoArgs));
        assert_eq!("i".parse::<Arity>(), Ok(Arity::AtLeastOne));
        assert_eq!("4".parse::<Arity>(), Ok(Arity::Exact(4)));
        assert_eq!("0".parse::<Arity>(), Ok(Arity::Exact(0)));
    }

    #[test]
    fn parse_rejects_other_forms() {
        for token in ["xyz", "", "-1", "+4", "4.0", "NONE", " i", "99999999999999999999999"] {
            assert_eq!(
                token.parse::<Arity>(),
                Err(ParseArityError(token.to_string())),
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn display_matches_dsl_tokens() {
        assert_eq!(Arity::Exact(3).to_string(), "3");
        assert_eq!(Arity::NoArgs.to_string(), "none");
        assert_eq!(Arity::AtLeastOne.to_string(), "i");
    }

    #[test]
    fn table_preserves_order_and_replaces_in_place() {
        let mut table = SubcommandTable::new()
            .with("b", Arity::NoArgs)
            .with("a", Arity::Exact(1));
        table.insert("b", Arity::AtLeastOne);

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![("b", Arity::AtLeastOne), ("a", Arity::Exact(1))]
        );
    }

    #[test]
    fn table_equality_respects_declaration_order() {
        let ab = SubcommandTable::new()
            .with("a", Arity::NoArgs)
            .with("b", Arity::Exact(2));
        let ba = SubcommandTable::new()
            .with("b", Arity::Exact(2))
            .with("a", Arity::NoArgs);

        assert_eq!(ab, ab.clone());
        assert_ne!(ab, ba);
        assert_eq!(ab.names().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn table_from_iterator() {
        let table: SubcommandTable = [("list", Arity::NoArgs), ("add", Arity::Exact(1))]
            .into_iter()
            .collect();
        assert!(table.contains("add"));
        assert!(!table.contains("remove"));
        assert!(!table.is_empty());
    }
}
