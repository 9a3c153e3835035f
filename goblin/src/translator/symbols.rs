use std::borrow::Cow;

/// Maps host-side step, token and type names onto target identifiers.
///
/// Implementations must be deterministic, total over any input, and a
/// projection: mapping an already mapped name returns it unchanged.
pub trait SymbolMapper: Send + Sync {
    fn map_name<'a>(&self, name: &'a str) -> Cow<'a, str>;
}

/// Host names that carry a trailing underscore because the bare word is
/// reserved on the host side.
const KEYWORD_ESCAPES: &[(&str, &str)] = &[
    ("all_", "all"),
    ("and_", "and"),
    ("as_", "as"),
    ("filter_", "filter"),
    ("from_", "from"),
    ("global_", "global"),
    ("id_", "id"),
    ("in_", "in"),
    ("is_", "is"),
    ("list_", "list"),
    ("loop_", "loop"),
    ("map_", "map"),
    ("match_", "match"),
    ("max_", "max"),
    ("min_", "min"),
    ("not_", "not"),
    ("or_", "or"),
    ("range_", "range"),
    ("set_", "set"),
    ("sum_", "sum"),
    ("where_", "where"),
    ("with_", "with"),
];

/// Java-style identifiers, as Gremlin's Groovy and Java dialects expect.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaSymbols;

impl SymbolMapper for JavaSymbols {
    fn map_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if let Some((_, mapped)) = KEYWORD_ESCAPES.iter().find(|(escaped, _)| *escaped == name) {
            return Cow::Borrowed(*mapped);
        }
        match to_camel_case(name) {
            Some(camel) => Cow::Owned(camel),
            None => Cow::Borrowed(name),
        }
    }
}

/// `has_label` -> `hasLabel`. Only names made of non-empty segments that
/// start with a lowercase letter are converted, anything else is left as is.
fn to_camel_case(s: &str) -> Option<String> {
    if !s.contains('_') || !s.starts_with(|c: char| c.is_ascii_lowercase()) {
        return None;
    }
    let mut result = String::with_capacity(s.len());
    for (i, segment) in s.split('_').enumerate() {
        if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        if i == 0 {
            result.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.push_str(chars.as_str());
        }
    }

    Some(result)
}
