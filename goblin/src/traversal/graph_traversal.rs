use core::fmt;
use std::fmt::Display;

use crate::{
    protocol::argument::Argument,
    translator::translator::{Translator, TranslatorHost},
    types::TranslatorResult,
};

use super::anonymous::AnonymousTraversals;

/// A traversal under construction. It owns its translator; every step
/// consumes the traversal and hands it back with the step appended.
#[derive(Debug)]
pub struct GraphTraversal {
    translator: Translator,
}

impl GraphTraversal {
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// Appends any step by its host name. The name goes through the symbol
    /// mapper, so steps without a dedicated method work the same way.
    pub fn step(mut self, step_name: &str, args: Vec<Argument>) -> TranslatorResult<Self> {
        self.translator.add_step(step_name, &args)?;
        Ok(self)
    }

    pub fn script(&self) -> &str {
        self.translator.script()
    }

    pub fn program(&self) -> String {
        self.translator.program()
    }

    /// Starts anonymous traversals in this traversal's dialect.
    pub fn anonymous(&self) -> AnonymousTraversals<'_> {
        AnonymousTraversals::new(&self.translator)
    }

    pub fn into_translator(self) -> Translator {
        self.translator
    }
}

impl TranslatorHost for GraphTraversal {
    fn translator(&self) -> &Translator {
        &self.translator
    }

    fn bind_translator(&mut self, translator: Translator) {
        self.translator = translator;
    }
}

impl Display for GraphTraversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.translator)
    }
}

/// Generates a step method on [`GraphTraversal`] and a matching starter on
/// [`AnonymousTraversals`] for every `method => "host_name"` pair.
macro_rules! traversal_steps {
    ($($(#[$doc:meta])* $method:ident => $step:literal),* $(,)?) => {
        impl GraphTraversal {
            $(
                $(#[$doc])*
                pub fn $method(self, args: Vec<Argument>) -> TranslatorResult<Self> {
                    self.step($step, args)
                }
            )*
        }

        impl AnonymousTraversals<'_> {
            $(
                $(#[$doc])*
                pub fn $method(&self, args: Vec<Argument>) -> TranslatorResult<GraphTraversal> {
                    self.start().$method(args)
                }
            )*
        }
    };
}

traversal_steps! {
    // graph steps
    /// Mid-traversal `V()`
    v => "V",
    out => "out",
    in_ => "in_",
    both => "both",
    out_e => "out_e",
    in_e => "in_e",
    both_e => "both_e",
    out_v => "out_v",
    in_v => "in_v",
    both_v => "both_v",
    other_v => "other_v",
    add_v => "add_v",
    add_e => "add_e",
    from_ => "from_",
    to => "to",

    // filters
    has => "has",
    has_label => "has_label",
    has_id => "has_id",
    has_key => "has_key",
    has_value => "has_value",
    has_not => "has_not",
    is => "is_",
    not => "not_",
    and => "and_",
    or => "or_",
    where_ => "where_",
    filter => "filter_",
    dedup => "dedup",
    limit => "limit",
    range => "range_",
    tail => "tail",
    coin => "coin",
    sample => "sample",
    simple_path => "simple_path",
    cyclic_path => "cyclic_path",

    // maps
    id => "id_",
    label => "label",
    key => "key",
    value => "value",
    values => "values",
    value_map => "value_map",
    properties => "properties",
    property => "property",
    constant => "constant",
    identity => "identity",
    map => "map_",
    flat_map => "flat_map",
    path => "path",
    project => "project",
    select => "select",
    unfold => "unfold",
    fold => "fold",
    count => "count",
    sum => "sum_",
    max => "max_",
    min => "min_",
    mean => "mean",
    group => "group",
    group_count => "group_count",
    order => "order",
    /// Modulates the previous step, e.g. `order().by(...)`
    by => "by",
    as_ => "as_",
    match_ => "match_",

    // branches
    choose => "choose",
    option => "option",
    optional => "optional",
    union => "union",
    coalesce => "coalesce",
    local => "local",
    repeat => "repeat",
    until => "until",
    emit => "emit",
    times => "times",
    loops => "loops",

    // side effects
    side_effect => "side_effect",
    aggregate => "aggregate",
    store => "store",
    cap => "cap",
    subgraph => "subgraph",
    tree => "tree",
    sack => "sack",
    barrier => "barrier",
    inject => "inject",
    drop => "drop",
}
