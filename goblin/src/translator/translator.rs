use core::fmt;
use std::{fmt::Display, sync::Arc};

use tracing::debug;

use crate::{
    config::TranslatorConfig,
    protocol::argument::Argument,
    traversal::{graph_traversal::GraphTraversal, source::GraphTraversalSource},
    types::TranslatorResult,
};

use super::{
    literal::LiteralEncoder,
    script::{step_fragment, Script},
    symbols::{JavaSymbols, SymbolMapper},
};

/// Anything that owns a translator and can have a new one bound to it.
pub trait TranslatorHost {
    fn translator(&self) -> &Translator;
    fn bind_translator(&mut self, translator: Translator);
}

/// Accumulates the target script of one traversal.
///
/// Every translator is owned by exactly one traversal or traversal source.
/// Steps on that owner append in place with [`Translator::add_step`]; steps
/// that hand back a new owner go through [`Translator::add_spawn_step`] or
/// [`Translator::add_source`], which fork a fresh instance and leave this
/// one untouched. [`Translator::fork`] is the only way to copy a script.
pub struct Translator {
    alias: String,
    anonymous_alias: String,
    source_language: String,
    target_language: String,
    lambda_prefix: String,
    symbols: Arc<dyn SymbolMapper>,
    script: Script,
}

impl Translator {
    pub fn new(alias: &str, source_language: &str, target_language: &str) -> Self {
        Self::from_config(&TranslatorConfig::new(alias, source_language, target_language))
    }

    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self {
            alias: config.alias.clone(),
            anonymous_alias: config.anonymous_alias.clone(),
            source_language: config.source_language.clone(),
            target_language: config.target_language.clone(),
            lambda_prefix: config.lambda_prefix.clone(),
            symbols: Arc::new(JavaSymbols),
            script: Script::new(),
        }
    }

    /// Replaces the symbol mapper. Forks and anonymous translators inherit it.
    pub fn with_symbols(self, symbols: Arc<dyn SymbolMapper>) -> Self {
        Self { symbols, ..self }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// The emitted steps, without the root alias.
    pub fn script(&self) -> &str {
        self.script.as_str()
    }

    /// The full program: root alias followed by the script.
    pub fn program(&self) -> String {
        format!("{}{}", self.alias, self.script)
    }

    pub fn encoder(&self) -> LiteralEncoder<'_> {
        LiteralEncoder::new(self.symbols.as_ref()).with_lambda_prefix(&self.lambda_prefix)
    }

    pub fn encode_args(&self, args: &[Argument]) -> TranslatorResult<String> {
        self.encoder().encode_args(args)
    }

    /// Appends a step to this translator's own script.
    pub fn add_step(&mut self, step_name: &str, args: &[Argument]) -> TranslatorResult<()> {
        let fragment = step_fragment(self.symbols.as_ref(), &self.encoder(), step_name, args)?;
        self.script.push_fragment(fragment);
        Ok(())
    }

    /// A new instance with the same root, dialect and a copy of the script.
    pub fn fork(&self) -> Translator {
        self.derive(&self.alias, self.script.clone())
    }

    /// A new instance whose script is this one's plus the step. This
    /// translator is not changed.
    pub fn fork_with_step(&self, step_name: &str, args: &[Argument]) -> TranslatorResult<Translator> {
        let script = self
            .script
            .with_step(self.symbols.as_ref(), &self.encoder(), step_name, args)?;
        Ok(self.derive(&self.alias, script))
    }

    /// Same root and dialect with an empty script. Holds the place of a
    /// traversal or source until a spawn step binds its real translator.
    pub fn detached(&self) -> Translator {
        self.derive(&self.alias, Script::new())
    }

    /// Binds a fork carrying the new step to `traversal`. This translator
    /// and its owner are left as they were.
    pub fn add_spawn_step(
        &self,
        traversal: &mut GraphTraversal,
        step_name: &str,
        args: &[Argument],
    ) -> TranslatorResult<()> {
        debug!(alias = %self.alias, step = step_name, "spawning traversal");
        self.spawn_into(traversal, step_name, args)
    }

    /// Same as [`Translator::add_spawn_step`], for a traversal source.
    pub fn add_source(
        &self,
        traversal_source: &mut GraphTraversalSource,
        source_name: &str,
        args: &[Argument],
    ) -> TranslatorResult<()> {
        debug!(alias = %self.alias, step = source_name, "spawning traversal source");
        self.spawn_into(traversal_source, source_name, args)
    }

    fn spawn_into(
        &self,
        host: &mut impl TranslatorHost,
        step_name: &str,
        args: &[Argument],
    ) -> TranslatorResult<()> {
        let forked = self.fork_with_step(step_name, args)?;
        host.bind_translator(forked);
        Ok(())
    }

    /// A fresh translator rooted at the anonymous alias. Only the dialect
    /// carries over; the script starts empty.
    pub fn anonymous_traversal_translator(&self) -> Translator {
        debug!(alias = %self.anonymous_alias, "new anonymous traversal translator");
        self.derive(&self.anonymous_alias, Script::new())
    }

    fn derive(&self, alias: &str, script: Script) -> Translator {
        Translator {
            alias: alias.to_string(),
            anonymous_alias: self.anonymous_alias.clone(),
            source_language: self.source_language.clone(),
            target_language: self.target_language.clone(),
            lambda_prefix: self.lambda_prefix.clone(),
            symbols: Arc::clone(&self.symbols),
            script,
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::from_config(&TranslatorConfig::default())
    }
}

impl Display for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.alias, self.script)
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("alias", &self.alias)
            .field("source_language", &self.source_language)
            .field("target_language", &self.target_language)
            .field("script", &self.script)
            .finish()
    }
}
