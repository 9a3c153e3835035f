use core::fmt;
use std::fmt::Display;

use tracing::trace;

use crate::{protocol::argument::Argument, types::TranslatorResult};

use super::{literal::LiteralEncoder, symbols::SymbolMapper};

/// The steps emitted so far, as target text.
///
/// A script only grows: fragments are appended one step at a time and the
/// text is never parsed or rewritten. Cloning it is how a fork is seeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script(String);

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends an already rendered `.<name>(<args>)` fragment.
    pub(crate) fn push_fragment(&mut self, fragment: String) {
        trace!(fragment = %fragment, "appending step");
        self.0.push_str(&fragment);
    }

    /// A new script holding this one plus the step. `self` is left as it was,
    /// including when encoding fails.
    pub fn with_step(
        &self,
        symbols: &dyn SymbolMapper,
        encoder: &LiteralEncoder<'_>,
        step_name: &str,
        args: &[Argument],
    ) -> TranslatorResult<Script> {
        let script = append_step(&self.0, symbols, encoder, step_name, args)?;
        trace!(script = %script, "forked script with step");
        Ok(Script(script))
    }
}

impl Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `.<mapped name>(<encoded args>)`. Step names are not checked against a
/// known step set.
pub fn step_fragment(
    symbols: &dyn SymbolMapper,
    encoder: &LiteralEncoder<'_>,
    step_name: &str,
    args: &[Argument],
) -> TranslatorResult<String> {
    Ok(format!(
        ".{}({})",
        symbols.map_name(step_name),
        encoder.encode_args(args)?
    ))
}

/// Returns `current` with the step fragment appended.
pub fn append_step(
    current: &str,
    symbols: &dyn SymbolMapper,
    encoder: &LiteralEncoder<'_>,
    step_name: &str,
    args: &[Argument],
) -> TranslatorResult<String> {
    let fragment = step_fragment(symbols, encoder, step_name, args)?;
    let mut script = String::with_capacity(current.len() + fragment.len());
    script.push_str(current);
    script.push_str(&fragment);
    Ok(script)
}
