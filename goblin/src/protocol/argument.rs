use std::fmt::Display;

use num::BigInt;

use crate::traversal::graph_traversal::GraphTraversal;

use super::{
    lambda::Lambda,
    predicate::P,
    tokens::{Barrier, Cardinality, Column, Direction, EnumToken, Operator, Order, Pop, Scope, T},
};

/// A step argument, as consumed by the literal encoder.
///
/// The variants are listed in encoding precedence order. `Other` is the
/// lossy escape hatch: it carries the generic textual conversion of any
/// value outside the closed set and is emitted verbatim, so it may or may
/// not be valid target syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Text(String),
    Integer(BigInt),
    Barrier(Barrier),
    Column(Column),
    Cardinality(Cardinality),
    Enum(EnumToken),
    Predicate(P),
    Lambda(Lambda),
    Binding(Binding),
    Raw(RawExpression),
    /// Operand list of a multi-valued predicate, rendered `a, b, c`
    List(Vec<Argument>),
    Other(String),
}

impl Argument {
    /// Generic textual conversion for values outside the closed set.
    pub fn other(value: impl Display) -> Self {
        Argument::Other(value.to_string())
    }
}

/// A named binding. Only the name is rendered; the bound value is resolved
/// when the script is executed.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub key: String,
    pub value: Box<Argument>,
}

impl Binding {
    pub fn new(key: impl Into<String>, value: impl Into<Argument>) -> Self {
        Self {
            key: key.into(),
            value: Box::new(value.into()),
        }
    }
}

impl<V: Into<Argument>> From<(&str, V)> for Binding {
    fn from((key, value): (&str, V)) -> Self {
        Binding::new(key, value)
    }
}

/// Parts rendered back to back with no separator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawExpression {
    pub parts: Vec<Argument>,
}

impl RawExpression {
    pub fn new(parts: Vec<Argument>) -> Self {
        Self { parts }
    }

    pub fn push(mut self, part: impl Into<Argument>) -> Self {
        self.parts.push(part.into());
        self
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Text(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Text(value)
    }
}

impl From<&String> for Argument {
    fn from(value: &String) -> Self {
        Argument::Text(value.clone())
    }
}

macro_rules! integer_argument {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Argument::Integer(BigInt::from(value))
                }
            }
        )+
    };
}

integer_argument!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Argument {
    fn from(value: BigInt) -> Self {
        Argument::Integer(value)
    }
}

// Floats keep a decimal point so `1.0` stays a floating literal.
impl From<f32> for Argument {
    fn from(value: f32) -> Self {
        Argument::Other(format!("{:?}", value))
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Argument::Other(format!("{:?}", value))
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Argument::Other(value.to_string())
    }
}

impl From<Barrier> for Argument {
    fn from(value: Barrier) -> Self {
        Argument::Barrier(value)
    }
}

impl From<Column> for Argument {
    fn from(value: Column) -> Self {
        Argument::Column(value)
    }
}

impl From<Cardinality> for Argument {
    fn from(value: Cardinality) -> Self {
        Argument::Cardinality(value)
    }
}

impl From<EnumToken> for Argument {
    fn from(value: EnumToken) -> Self {
        Argument::Enum(value)
    }
}

macro_rules! enum_argument {
    ($($ty:ident),+) => {
        $(
            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Argument::Enum(EnumToken::from(value))
                }
            }
        )+
    };
}

enum_argument!(Order, Direction, Scope, T, Pop, Operator);

impl From<P> for Argument {
    fn from(value: P) -> Self {
        Argument::Predicate(value)
    }
}

impl From<Lambda> for Argument {
    fn from(value: Lambda) -> Self {
        Argument::Lambda(value)
    }
}

impl From<Binding> for Argument {
    fn from(value: Binding) -> Self {
        Argument::Binding(value)
    }
}

impl From<RawExpression> for Argument {
    fn from(value: RawExpression) -> Self {
        Argument::Raw(value)
    }
}

/// Nested traversals have no literal form of their own and fall back to
/// their program text, e.g. `__.out("knows")`.
impl From<GraphTraversal> for Argument {
    fn from(value: GraphTraversal) -> Self {
        Argument::Other(value.program())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_conversions() {
        assert_eq!(Argument::from("marko"), Argument::Text("marko".to_string()));
        assert_eq!(Argument::from(String::from("marko")), Argument::Text("marko".to_string()));
    }

    #[test]
    fn test_integers_are_exact() {
        assert_eq!(Argument::from(u128::MAX), Argument::Integer(BigInt::from(u128::MAX)));
        assert_eq!(Argument::from(-3i8), Argument::Integer(BigInt::from(-3)));
    }

    #[test]
    fn test_floats_and_booleans_fall_back() {
        assert_eq!(Argument::from(1.0f64), Argument::Other("1.0".to_string()));
        assert_eq!(Argument::from(0.5f32), Argument::Other("0.5".to_string()));
        assert_eq!(Argument::from(true), Argument::Other("true".to_string()));
    }

    #[test]
    fn test_tokens_land_in_their_own_variants() {
        assert!(matches!(Argument::from(Barrier::NormSack), Argument::Barrier(_)));
        assert!(matches!(Argument::from(Column::Keys), Argument::Column(_)));
        assert!(matches!(Argument::from(Cardinality::List), Argument::Cardinality(_)));
        assert!(matches!(Argument::from(Order::Decr), Argument::Enum(_)));
    }

    #[test]
    fn test_binding_from_pair() {
        let binding = Binding::from(("x", 1));
        assert_eq!(binding.key, "x");
        assert_eq!(*binding.value, Argument::from(1));
    }

    #[test]
    fn test_raw_expression_push() {
        let raw = RawExpression::default().push("a").push(1);
        assert_eq!(raw.parts, vec![Argument::from("a"), Argument::from(1)]);
    }
}
