use core::fmt;
use std::fmt::Display;

use crate::{
    config::TranslatorConfig,
    protocol::argument::Argument,
    translator::translator::{Translator, TranslatorHost},
    types::TranslatorResult,
};

use super::{anonymous::AnonymousTraversals, graph_traversal::GraphTraversal};

/// The root every traversal is spawned from, `g` by default.
///
/// A source is never changed after construction: configuration calls return
/// a new source, and traversal starts return a new [`GraphTraversal`], both
/// with a forked translator.
#[derive(Debug)]
pub struct GraphTraversalSource {
    translator: Translator,
}

impl GraphTraversalSource {
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self::new(Translator::from_config(config))
    }

    pub fn script(&self) -> &str {
        self.translator.script()
    }

    pub fn program(&self) -> String {
        self.translator.program()
    }

    pub fn anonymous(&self) -> AnonymousTraversals<'_> {
        AnonymousTraversals::new(&self.translator)
    }

    // ------------------------------------------------------------
    // configuration
    // ------------------------------------------------------------

    /// Returns a new source with a source-level step appended to a fork of
    /// this source's script.
    pub fn with_source_step(&self, source_name: &str, args: Vec<Argument>) -> TranslatorResult<Self> {
        let mut source = GraphTraversalSource::new(self.translator.detached());
        self.translator.add_source(&mut source, source_name, &args)?;
        Ok(source)
    }

    pub fn with_bulk(&self, args: Vec<Argument>) -> TranslatorResult<Self> {
        self.with_source_step("with_bulk", args)
    }

    pub fn with_path(&self, args: Vec<Argument>) -> TranslatorResult<Self> {
        self.with_source_step("with_path", args)
    }

    pub fn with_sack(&self, args: Vec<Argument>) -> TranslatorResult<Self> {
        self.with_source_step("with_sack", args)
    }

    pub fn with_side_effect(&self, args: Vec<Argument>) -> TranslatorResult<Self> {
        self.with_source_step("with_side_effect", args)
    }

    pub fn with_strategies(&self, args: Vec<Argument>) -> TranslatorResult<Self> {
        self.with_source_step("with_strategies", args)
    }

    pub fn without_strategies(&self, args: Vec<Argument>) -> TranslatorResult<Self> {
        self.with_source_step("without_strategies", args)
    }

    pub fn with_computer(&self, args: Vec<Argument>) -> TranslatorResult<Self> {
        self.with_source_step("with_computer", args)
    }

    // ------------------------------------------------------------
    // traversal starts
    // ------------------------------------------------------------

    /// Returns a new traversal whose script is this source's script plus the
    /// start step.
    pub fn spawn(&self, step_name: &str, args: Vec<Argument>) -> TranslatorResult<GraphTraversal> {
        let mut traversal = GraphTraversal::new(self.translator.detached());
        self.translator.add_spawn_step(&mut traversal, step_name, &args)?;
        Ok(traversal)
    }

    pub fn v(&self, args: Vec<Argument>) -> TranslatorResult<GraphTraversal> {
        self.spawn("V", args)
    }

    pub fn e(&self, args: Vec<Argument>) -> TranslatorResult<GraphTraversal> {
        self.spawn("E", args)
    }

    pub fn add_v(&self, args: Vec<Argument>) -> TranslatorResult<GraphTraversal> {
        self.spawn("add_v", args)
    }

    pub fn add_e(&self, args: Vec<Argument>) -> TranslatorResult<GraphTraversal> {
        self.spawn("add_e", args)
    }

    pub fn inject(&self, args: Vec<Argument>) -> TranslatorResult<GraphTraversal> {
        self.spawn("inject", args)
    }
}

impl TranslatorHost for GraphTraversalSource {
    fn translator(&self) -> &Translator {
        &self.translator
    }

    fn bind_translator(&mut self, translator: Translator) {
        self.translator = translator;
    }
}

impl Display for GraphTraversalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.translator)
    }
}
