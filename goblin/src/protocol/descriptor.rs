use num::BigInt;
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::TranslatorConfig,
    translator::translator::{Translator, TranslatorHost},
    traversal::{graph_traversal::GraphTraversal, source::GraphTraversalSource},
    types::{TranslatorError, TranslatorResult},
};

use super::{
    argument::{Argument, Binding, RawExpression},
    lambda::Lambda,
    predicate::P,
    tokens::{Barrier, Cardinality, Column, Direction, EnumToken, Operator, Order, Pop, Scope, T},
};

/// A traversal described as JSON.
///
/// ```json
/// {
///     "source_steps": [{ "name": "with_bulk", "args": [false] }],
///     "steps": [
///         { "name": "V" },
///         { "name": "has", "args": ["age", { "@type": "p", "operator": "gt", "value": 30 }] },
///         { "name": "where_", "args": [{ "@type": "anonymous", "steps": [{ "name": "out" }] }] }
///     ]
/// }
/// ```
///
/// The first entry of `steps` starts the traversal off the source.
#[derive(Debug, Deserialize)]
pub struct TraversalDescriptor {
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub source_steps: Vec<StepDescriptor>,
    pub steps: Vec<StepDescriptor>,
}

#[derive(Debug, Deserialize)]
pub struct StepDescriptor {
    pub name: String,
    #[serde(default)]
    pub args: Vec<ArgumentDescriptor>,
}

/// Plain JSON values map onto the obvious arguments; everything else is an
/// object tagged with `@type`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ArgumentDescriptor {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Boolean(bool),
    Null,
    Tagged(TaggedArgument),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "@type", rename_all = "snake_case")]
pub enum TaggedArgument {
    /// Integers outside 64 bits, as decimal digits
    Bigint { value: String },
    Barrier { value: String },
    Column { value: String },
    Cardinality { value: String },
    Order { value: String },
    Direction { value: String },
    Scope { value: String },
    T { value: String },
    Pop { value: String },
    Operator { value: String },
    Enum { type_name: String, value: String },
    P {
        operator: String,
        value: Box<ArgumentDescriptor>,
        #[serde(default)]
        other: Option<Box<ArgumentDescriptor>>,
    },
    Lambda {
        source: String,
        #[serde(default)]
        arity: Option<usize>,
    },
    Binding { key: String, value: Box<ArgumentDescriptor> },
    Raw { parts: Vec<ArgumentDescriptor> },
    List { values: Vec<ArgumentDescriptor> },
    Anonymous {
        #[serde(default)]
        steps: Vec<StepDescriptor>,
    },
}

impl TraversalDescriptor {
    pub fn from_json(json: &str) -> TranslatorResult<Self> {
        Ok(sonic_rs::from_str::<TraversalDescriptor>(json)?)
    }

    /// Builds the described traversal and returns its program text.
    pub fn translate(&self, config: &TranslatorConfig) -> TranslatorResult<String> {
        let config = match &self.alias {
            Some(alias) => TranslatorConfig {
                alias: alias.clone(),
                ..config.clone()
            },
            None => config.clone(),
        };

        let mut source = GraphTraversalSource::from_config(&config);
        for step in &self.source_steps {
            let args = step.arguments(source.translator())?;
            source = source.with_source_step(&step.name, args)?;
        }

        let mut steps = self.steps.iter();
        let start = steps
            .next()
            .ok_or_else(|| TranslatorError::InvalidDescriptor("traversal has no steps".to_string()))?;
        let args = start.arguments(source.translator())?;
        let mut traversal = source.spawn(&start.name, args)?;
        for step in steps {
            let args = step.arguments(traversal.translator())?;
            traversal = traversal.step(&step.name, args)?;
        }
        debug!(steps = self.steps.len(), "translated traversal descriptor");

        Ok(traversal.program())
    }
}

impl StepDescriptor {
    fn arguments(&self, parent: &Translator) -> TranslatorResult<Vec<Argument>> {
        self.args.iter().map(|arg| arg.to_argument(parent)).collect()
    }
}

impl ArgumentDescriptor {
    /// `parent` supplies the dialect for nested anonymous traversals.
    pub fn to_argument(&self, parent: &Translator) -> TranslatorResult<Argument> {
        let argument = match self {
            ArgumentDescriptor::Text(text) => Argument::Text(text.clone()),
            ArgumentDescriptor::Integer(value) => Argument::from(*value),
            ArgumentDescriptor::Unsigned(value) => Argument::from(*value),
            ArgumentDescriptor::Float(value) => float_argument(*value)?,
            ArgumentDescriptor::Boolean(value) => Argument::from(*value),
            ArgumentDescriptor::Null => Argument::other("null"),
            ArgumentDescriptor::Tagged(tagged) => tagged.to_argument(parent)?,
        };
        Ok(argument)
    }
}

/// JSON integers past 64 bits only reach us as rounded floats, so whole
/// numbers outside the `i64`/`u64` range are refused instead of truncated.
fn float_argument(value: f64) -> TranslatorResult<Argument> {
    const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;
    const I64_BOUND: f64 = -9_223_372_036_854_775_808.0;
    if value.is_finite() && value.fract() == 0.0 && (value >= U64_BOUND || value <= I64_BOUND) {
        return Err(TranslatorError::InvalidDescriptor(format!(
            "integer {:?} does not fit in 64 bits; pass it as {{\"@type\": \"bigint\", \"value\": \"<digits>\"}}",
            value
        )));
    }
    Ok(Argument::from(value))
}

fn token<V>(kind: &str, value: &str, lookup: fn(&str) -> Option<V>) -> TranslatorResult<V> {
    lookup(value).ok_or_else(|| {
        TranslatorError::InvalidDescriptor(format!("unknown {} token '{}'", kind, value))
    })
}

impl TaggedArgument {
    fn to_argument(&self, parent: &Translator) -> TranslatorResult<Argument> {
        let argument = match self {
            TaggedArgument::Bigint { value } => {
                let value = value.trim().parse::<BigInt>().map_err(|e| {
                    TranslatorError::InvalidDescriptor(format!("invalid bigint '{}': {}", value, e))
                })?;
                Argument::Integer(value)
            }
            TaggedArgument::Barrier { value } => token("barrier", value, Barrier::from_name)?.into(),
            TaggedArgument::Column { value } => token("column", value, Column::from_name)?.into(),
            TaggedArgument::Cardinality { value } => {
                token("cardinality", value, Cardinality::from_name)?.into()
            }
            TaggedArgument::Order { value } => token("order", value, Order::from_name)?.into(),
            TaggedArgument::Direction { value } => {
                token("direction", value, Direction::from_name)?.into()
            }
            TaggedArgument::Scope { value } => token("scope", value, Scope::from_name)?.into(),
            TaggedArgument::T { value } => token("t", value, T::from_name)?.into(),
            TaggedArgument::Pop { value } => token("pop", value, Pop::from_name)?.into(),
            TaggedArgument::Operator { value } => {
                token("operator", value, Operator::from_name)?.into()
            }
            TaggedArgument::Enum { type_name, value } => {
                EnumToken::new(type_name.clone(), value.clone()).into()
            }
            TaggedArgument::P {
                operator,
                value,
                other,
            } => {
                let value = value.to_argument(parent)?;
                let predicate = match other {
                    Some(subject) => P::chained(subject.to_argument(parent)?, operator.clone(), value),
                    None => P::new(operator.clone(), value),
                };
                predicate.into()
            }
            TaggedArgument::Lambda { source, arity } => match arity {
                Some(arity) => Lambda::new(*arity, source.clone()).into(),
                None => Lambda::from_producer(|| source.clone())?.into(),
            },
            TaggedArgument::Binding { key, value } => {
                Binding::new(key.clone(), value.to_argument(parent)?).into()
            }
            TaggedArgument::Raw { parts } => RawExpression::new(
                parts
                    .iter()
                    .map(|part| part.to_argument(parent))
                    .collect::<TranslatorResult<Vec<_>>>()?,
            )
            .into(),
            TaggedArgument::List { values } => Argument::List(
                values
                    .iter()
                    .map(|value| value.to_argument(parent))
                    .collect::<TranslatorResult<Vec<_>>>()?,
            ),
            TaggedArgument::Anonymous { steps } => {
                let mut traversal = GraphTraversal::new(parent.anonymous_traversal_translator());
                for step in steps {
                    let args = step.arguments(parent)?;
                    traversal = traversal.step(&step.name, args)?;
                }
                traversal.into()
            }
        };
        Ok(argument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(json: &str) -> TranslatorResult<String> {
        TraversalDescriptor::from_json(json)?.translate(&TranslatorConfig::default())
    }

    #[test]
    fn test_plain_values() {
        let program = translate(
            r#"{"steps": [
                {"name": "V"},
                {"name": "has", "args": ["name", "marko"]},
                {"name": "has", "args": ["weight", 0.5]},
                {"name": "has", "args": ["active", true, null]},
                {"name": "limit", "args": [18446744073709551615]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            program,
            "g.V().has(\"name\", \"marko\").has(\"weight\", 0.5).has(\"active\", true, null)\
             .limit(18446744073709551615L)"
        );
    }

    #[test]
    fn test_tagged_values() {
        let program = translate(
            r#"{"steps": [
                {"name": "V", "args": [{"@type": "bigint", "value": "-99999999999999999999"}]},
                {"name": "order"},
                {"name": "by", "args": ["age", {"@type": "order", "value": "decr"}]},
                {"name": "sack", "args": [{"@type": "operator", "value": "sum"}]},
                {"name": "barrier", "args": [{"@type": "barrier", "value": "norm_sack"}]},
                {"name": "select", "args": [{"@type": "pop", "value": "all"}, {"@type": "column", "value": "keys"}]},
                {"name": "property", "args": [{"@type": "cardinality", "value": "single"}, "k", {"@type": "binding", "key": "v", "value": 1}]},
                {"name": "to", "args": [{"@type": "direction", "value": "OUT"}, {"@type": "t", "value": "id"}, {"@type": "scope", "value": "global"}]},
                {"name": "with_", "args": [{"@type": "enum", "type_name": "WithOptions", "value": "tokens"}]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            program,
            "g.V(Long(-99999999999999999999)).order().by(\"age\", Order.decr).sack(Operator.sum)\
             .barrier(Barrier.normSack).select(Pop.all, Column.keys).property(Cardinality.single, \"k\", v)\
             .to(Direction.OUT, T.id, Scope.global).with(WithOptions.tokens)"
        );
    }

    #[test]
    fn test_predicates_lambdas_raw_and_anonymous() {
        let program = translate(
            r#"{"alias": "social", "source_steps": [{"name": "with_sack", "args": [1]}], "steps": [
                {"name": "V"},
                {"name": "has", "args": ["age", {"@type": "p", "operator": "lt", "value": 40,
                    "other": {"@type": "p", "operator": "gt", "value": 20}}]},
                {"name": "where_", "args": [{"@type": "anonymous", "steps": [{"name": "out_e", "args": ["knows"]}]}]},
                {"name": "map", "args": [{"@type": "lambda", "source": "lambda x: x.get()"}]},
                {"name": "math", "args": [{"@type": "raw", "parts": ["a", {"@type": "enum", "type_name": "Op", "value": "plus"}]}]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            program,
            "social.withSack(Long(1)).V().has(\"age\", P.gt(Long(20)).lt(Long(40)))\
             .where(__.outE(\"knows\")).map(OneArgLambda(lambda x: x.get())).math(\"a\"Op.plus)"
        );
    }

    #[test]
    fn test_explicit_arity_is_checked_at_encoding() {
        let err = translate(
            r#"{"steps": [{"name": "V"}, {"name": "map", "args": [{"@type": "lambda", "source": "f", "arity": 3}]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TranslatorError::UnsupportedLambdaArity { arity: 3, .. }));
    }

    #[test]
    fn test_malformed_lambda_source() {
        let err = translate(
            r#"{"steps": [{"name": "V"}, {"name": "map", "args": [{"@type": "lambda", "source": "x -> x"}]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TranslatorError::MalformedLambdaSource(_)));
    }

    #[test]
    fn test_integers_past_64_bits_are_refused() {
        let err = translate(r#"{"steps": [{"name": "V", "args": [123456789012345678901234]}]}"#).unwrap_err();
        match err {
            TranslatorError::InvalidDescriptor(msg) => assert!(msg.contains("bigint")),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(matches!(
            translate(r#"{"steps": [{"name": "V", "args": [-9223372036854775809]}]}"#),
            Err(TranslatorError::InvalidDescriptor(_))
        ));

        let program = translate(
            r#"{"steps": [{"name": "V", "args": [{"@type": "bigint", "value": "123456789012345678901234"}]}]}"#,
        )
        .unwrap();
        assert_eq!(program, "g.V(123456789012345678901234L)");
    }

    #[test]
    fn test_64_bit_bounds_and_fractions_still_translate() {
        let program = translate(
            r#"{"steps": [{"name": "V", "args": [-9223372036854775808, 18446744073709551615, 2.5]}]}"#,
        )
        .unwrap();
        assert_eq!(
            program,
            "g.V(Long(-9223372036854775808), 18446744073709551615L, 2.5)"
        );
    }

    #[test]
    fn test_list_operands() {
        let program = translate(
            r#"{"steps": [{"name": "V"}, {"name": "has", "args": ["name",
                {"@type": "p", "operator": "within", "value": {"@type": "list", "values": ["marko", "josh"]}}]}]}"#,
        )
        .unwrap();
        assert_eq!(program, "g.V().has(\"name\", P.within(\"marko\", \"josh\"))");
    }

    #[test]
    fn test_unknown_token() {
        let err = translate(r#"{"steps": [{"name": "order", "args": [{"@type": "order", "value": "up"}]}]}"#)
            .unwrap_err();
        match err {
            TranslatorError::InvalidDescriptor(msg) => assert!(msg.contains("'up'")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_steps() {
        assert!(matches!(
            translate(r#"{"steps": []}"#),
            Err(TranslatorError::InvalidDescriptor(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(translate("{"), Err(TranslatorError::Json(_))));
    }
}
