//! The sub-command shorthand used by `create-runnable`.
//!
//! `create-route:4,list:none,watch:i` declares three sub-commands taking
//! four arguments, no arguments, and at least one argument.

use runkit_dispatch::{Arity, SubcommandTable};

use super::error::GenerationError;

/// Parses the shorthand into a table, keeping declaration order.
///
/// Blank input is an empty table. Whitespace around entries, names and
/// arity tokens is ignored. A name may be declared only once.
pub fn parse(dsl: &str) -> Result<SubcommandTable, GenerationError> {
    let mut table = SubcommandTable::new();
    if dsl.trim().is_empty() {
        return Ok(table);
    }

    for entry in dsl.split(',') {
        let entry = entry.trim();
        let (name, arity) = entry
            .split_once(':')
            .ok_or_else(|| GenerationError::MalformedEntry(entry.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(GenerationError::MalformedEntry(entry.to_string()));
        }
        if table.contains(name) {
            return Err(GenerationError::DuplicateSubcommand(name.to_string()));
        }
        let arity = arity
            .trim()
            .parse::<Arity>()
            .map_err(|err| GenerationError::InvalidArityToken(err.0))?;
        table.insert(name, arity);
    }

    Ok(table)
}

/// Fully qualified Rust expression for an arity.
pub fn arity_literal(arity: Arity) -> String {
    match arity {
        Arity::Exact(n) => format!("runkit_dispatch::Arity::Exact({})", n),
        Arity::NoArgs => "runkit_dispatch::Arity::NoArgs".to_string(),
        Arity::AtLeastOne => "runkit_dispatch::Arity::AtLeastOne".to_string(),
    }
}

/// Renders a table as a `SubcommandTable` builder chain, one `.with` per
/// line, indented to sit inside a method body.
pub fn render(table: &SubcommandTable) -> String {
    let mut out = String::from("SubcommandTable::new()");
    for (name, arity) in table.iter() {
        out.push_str(&format!(
            "\n            .with({:?}, {})",
            name,
            arity_literal(arity)
        ));
    }
    out
}
