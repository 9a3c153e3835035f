use itertools::Itertools;
use num::BigInt;
use tracing::debug;

use crate::{
    protocol::{argument::Argument, lambda::Lambda, predicate::P},
    types::{TranslatorError, TranslatorResult},
};

use super::symbols::{JavaSymbols, SymbolMapper};

/// Renders step arguments as target-syntax literals.
///
/// | argument          | literal                         |
/// |-------------------|---------------------------------|
/// | text              | `"marko"`                       |
/// | integer <= i64    | `Long(5)`                       |
/// | integer > i64     | `9223372036854775808L`          |
/// | barrier, column, cardinality, enum | `Order.decr`   |
/// | predicate         | `P.gt(Long(5))`, `P.gt(Long(1)).and(P.lt(Long(9)))` |
/// | lambda            | `OneArgLambda(lambda x: x)`     |
/// | binding           | its name only                   |
/// | raw expression    | parts back to back              |
/// | value list        | `Long(1), Long(10)`             |
/// | anything else     | its generic textual conversion  |
pub struct LiteralEncoder<'a> {
    symbols: &'a dyn SymbolMapper,
    lambda_prefix: &'a str,
}

impl<'a> LiteralEncoder<'a> {
    pub fn new(symbols: &'a dyn SymbolMapper) -> Self {
        Self {
            symbols,
            lambda_prefix: "",
        }
    }

    pub fn with_lambda_prefix(self, lambda_prefix: &'a str) -> Self {
        Self {
            lambda_prefix,
            ..self
        }
    }

    pub fn encode_arg(&self, arg: &Argument) -> TranslatorResult<String> {
        let mut out = String::new();
        self.write_arg(&mut out, arg)?;
        Ok(out)
    }

    /// Renders an argument list: nothing for no arguments, otherwise the
    /// encodings joined by `", "` in their original order.
    pub fn encode_args(&self, args: &[Argument]) -> TranslatorResult<String> {
        match args {
            [] => Ok(String::new()),
            [arg] => self.encode_arg(arg),
            _ => args
                .iter()
                .map(|arg| self.encode_arg(arg))
                .process_results(|mut encoded| encoded.join(", ")),
        }
    }

    fn write_arg(&self, out: &mut String, arg: &Argument) -> TranslatorResult<()> {
        match arg {
            Argument::Text(text) => {
                out.push('"');
                out.push_str(text);
                out.push('"');
            }
            Argument::Integer(value) => write_integer(out, value),
            Argument::Barrier(barrier) => {
                self.write_constant(out, barrier.type_name(), barrier.name())
            }
            Argument::Column(column) => self.write_constant(out, column.type_name(), column.name()),
            Argument::Cardinality(cardinality) => {
                self.write_constant(out, cardinality.type_name(), cardinality.name())
            }
            Argument::Enum(token) => self.write_constant(out, &token.type_name, &token.name),
            Argument::Predicate(predicate) => self.write_predicate(out, predicate)?,
            Argument::Lambda(lambda) => self.write_lambda(out, lambda)?,
            Argument::Binding(binding) => out.push_str(&binding.key),
            Argument::Raw(raw) => {
                for part in &raw.parts {
                    self.write_arg(out, part)?;
                }
            }
            Argument::List(values) => out.push_str(&self.encode_args(values)?),
            Argument::Other(text) => {
                debug!(text = %text, "argument encoded with the generic fallback");
                out.push_str(text);
            }
        }
        Ok(())
    }

    fn write_constant(&self, out: &mut String, type_name: &str, name: &str) {
        out.push_str(&self.symbols.map_name(type_name));
        out.push('.');
        out.push_str(&self.symbols.map_name(name));
    }

    fn write_predicate(&self, out: &mut String, predicate: &P) -> TranslatorResult<()> {
        match &predicate.other {
            Some(subject) => self.write_arg(out, subject)?,
            None => out.push('P'),
        }
        out.push('.');
        out.push_str(&self.symbols.map_name(&predicate.operator));
        out.push('(');
        self.write_arg(out, &predicate.value)?;
        out.push(')');
        Ok(())
    }

    fn write_lambda(&self, out: &mut String, lambda: &Lambda) -> TranslatorResult<()> {
        let marker = match lambda.arity() {
            0 => "ZeroArgLambda",
            1 => "OneArgLambda",
            2 => "TwoArgLambda",
            arity => {
                return Err(TranslatorError::UnsupportedLambdaArity {
                    arity,
                    lambda: lambda.source().to_string(),
                })
            }
        };
        out.push_str(self.lambda_prefix);
        out.push_str(marker);
        out.push('(');
        out.push_str(lambda.source());
        out.push(')');
        Ok(())
    }
}

/// Integers past the signed 64-bit range get the overflow suffix, the rest
/// are boxed so the target does not narrow them to a 32-bit int.
fn write_integer(out: &mut String, value: &BigInt) {
    if *value > BigInt::from(i64::MAX) {
        out.push_str(&format!("{}L", value));
    } else {
        out.push_str(&format!("Long({})", value));
    }
}

/// Encodes one argument with the default Java symbol mapping.
pub fn encode_arg(arg: &Argument) -> TranslatorResult<String> {
    LiteralEncoder::new(&JavaSymbols).encode_arg(arg)
}

/// Encodes an argument list with the default Java symbol mapping.
pub fn encode_args(args: &[Argument]) -> TranslatorResult<String> {
    LiteralEncoder::new(&JavaSymbols).encode_args(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        args,
        protocol::{
            argument::{Binding, RawExpression},
            tokens::{Barrier, Cardinality, Column, Direction, EnumToken, Operator, Order, Pop, Scope, T},
        },
    };

    fn encode(arg: impl Into<Argument>) -> String {
        encode_arg(&arg.into()).unwrap()
    }

    #[test]
    fn test_text_is_quoted_verbatim() {
        assert_eq!(encode("marko"), "\"marko\"");
        assert_eq!(encode(""), "\"\"");
        assert_eq!(encode("it's"), "\"it's\"");
    }

    #[test]
    fn test_integers_within_range_are_boxed() {
        assert_eq!(encode(0), "Long(0)");
        assert_eq!(encode(5u8), "Long(5)");
        assert_eq!(encode(-42i64), "Long(-42)");
        assert_eq!(encode(i64::MAX), "Long(9223372036854775807)");
    }

    #[test]
    fn test_integers_past_i64_get_suffix() {
        assert_eq!(encode(i64::MAX as u64 + 1), "9223372036854775808L");
        assert_eq!(encode(u128::MAX), format!("{}L", u128::MAX));
    }

    #[test]
    fn test_large_negative_integers_stay_boxed() {
        assert_eq!(encode(i128::MIN), format!("Long({})", i128::MIN));
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(encode(Barrier::NormSack), "Barrier.normSack");
        assert_eq!(encode(Column::Values), "Column.values");
        assert_eq!(encode(Cardinality::Set), "Cardinality.set");
        assert_eq!(encode(Order::Decr), "Order.decr");
        assert_eq!(encode(Direction::Both), "Direction.BOTH");
        assert_eq!(encode(Scope::Global), "Scope.global");
        assert_eq!(encode(T::Label), "T.label");
        assert_eq!(encode(Pop::All), "Pop.all");
        assert_eq!(encode(Operator::AddAll), "Operator.addAll");
    }

    #[test]
    fn test_custom_enum_token_is_mapped() {
        assert_eq!(encode(EnumToken::new("Order", "key_incr")), "Order.keyIncr");
    }

    #[test]
    fn test_self_contained_predicate() {
        assert_eq!(encode(P::gt(5)), "P.gt(Long(5))");
        assert_eq!(encode(P::eq("josh")), "P.eq(\"josh\")");
        assert_eq!(encode(P::not_(P::within(["a", "b"]))), "P.not(P.within(\"a\", \"b\"))");
    }

    #[test]
    fn test_chained_predicate() {
        let q1 = P::gt(5);
        let q2 = P::lt(10);
        let expected = format!("{}.and({})", encode(q1.clone()), encode(q2.clone()));
        assert_eq!(encode(q1.and_(q2)), expected);
        assert_eq!(expected, "P.gt(Long(5)).and(P.lt(Long(10)))");
    }

    #[test]
    fn test_chained_predicate_recurses() {
        let p = P::gt(1).and_(P::lt(9)).or_(P::eq(20));
        assert_eq!(encode(p), "P.gt(Long(1)).and(P.lt(Long(9))).or(P.eq(Long(20)))");
    }

    #[test]
    fn test_multi_valued_predicates() {
        assert_eq!(encode(P::between(1, 10)), "P.between(Long(1), Long(10))");
        assert_eq!(encode(P::inside(0, 5)), "P.inside(Long(0), Long(5))");
    }

    #[test]
    fn test_value_list_is_comma_separated() {
        assert_eq!(
            encode(P::within(["a", "b", "c"])),
            "P.within(\"a\", \"b\", \"c\")"
        );
        assert_eq!(encode(Argument::List(vec![])), "");
        assert_eq!(encode(P::without([1])), "P.without(Long(1))");
    }

    #[test]
    fn test_lambdas_are_tagged_by_arity() {
        let one = Lambda::from_producer(|| "lambda x: x+1").unwrap();
        let two = Lambda::from_producer(|| "lambda x,y: x+y").unwrap();
        let zero = Lambda::from_producer(|| "lambda: 42").unwrap();
        assert_eq!(encode(one), "OneArgLambda(lambda x: x+1)");
        assert_eq!(encode(two), "TwoArgLambda(lambda x,y: x+y)");
        assert_eq!(encode(zero), "ZeroArgLambda(lambda: 42)");
    }

    #[test]
    fn test_three_arg_lambda_fails() {
        let three = Lambda::from_producer(|| "lambda x,y,z: x").unwrap();
        match encode_arg(&three.into()) {
            Err(TranslatorError::UnsupportedLambdaArity { arity, lambda }) => {
                assert_eq!(arity, 3);
                assert_eq!(lambda, "lambda x,y,z: x");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_lambda_prefix() {
        let encoder = LiteralEncoder::new(&JavaSymbols).with_lambda_prefix("Jython");
        let lambda = Argument::from(Lambda::new(1, "lambda x: x"));
        assert_eq!(encoder.encode_arg(&lambda).unwrap(), "JythonOneArgLambda(lambda x: x)");
    }

    #[test]
    fn test_binding_renders_name_only() {
        assert_eq!(encode(Binding::new("x", 100)), "x");
    }

    #[test]
    fn test_raw_expression_concatenates() {
        let raw = RawExpression::default().push("a").push(Argument::other("+")).push(P::gt(1));
        assert_eq!(encode(raw), "\"a\"+P.gt(Long(1))");
    }

    #[test]
    fn test_fallback_uses_textual_conversion() {
        assert_eq!(encode(1.5f64), "1.5");
        assert_eq!(encode(false), "false");
        assert_eq!(encode(Argument::other("anything(")), "anything(");
    }

    #[test]
    fn test_encode_args() {
        assert_eq!(encode_args(&args![]).unwrap(), "");
        assert_eq!(encode_args(&args!["name"]).unwrap(), encode("name"));
        assert_eq!(
            encode_args(&args!["name", 29]).unwrap(),
            format!("{}, {}", encode("name"), encode(29))
        );
        assert_eq!(encode_args(&args![1, 2, 3]).unwrap(), "Long(1), Long(2), Long(3)");
    }

    #[test]
    fn test_encode_args_propagates_lambda_error() {
        let args = args!["ok", Lambda::new(4, "lambda a,b,c,d: a")];
        assert!(matches!(
            encode_args(&args),
            Err(TranslatorError::UnsupportedLambdaArity { arity: 4, .. })
        ));
    }
}
