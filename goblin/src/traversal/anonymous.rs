use crate::translator::translator::Translator;

use super::graph_traversal::GraphTraversal;

/// Starts anonymous (`__`) traversals for nesting inside another
/// traversal's steps, e.g. `where(__.out("knows"))`.
///
/// Each traversal it starts gets a brand-new translator from
/// [`Translator::anonymous_traversal_translator`]; nothing from the
/// parent's script carries over. The step starters (`out`, `has`, ...) are
/// generated next to the matching [`GraphTraversal`] steps.
pub struct AnonymousTraversals<'a> {
    parent: &'a Translator,
}

impl<'a> AnonymousTraversals<'a> {
    pub fn new(parent: &'a Translator) -> Self {
        Self { parent }
    }

    /// An anonymous traversal with no steps yet.
    pub fn start(&self) -> GraphTraversal {
        GraphTraversal::new(self.parent.anonymous_traversal_translator())
    }
}
