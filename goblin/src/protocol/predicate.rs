use super::argument::Argument;

/// A predicate: an operator applied to a value, optionally chained onto a
/// subject.
///
/// Self-contained predicates render as `P.<op>(<value>)`. Chained ones
/// render as `<subject>.<op>(<value>)`, where the subject is any argument
/// (usually another predicate), so `P::gt(5).and_(P::lt(10))` becomes
/// `P.gt(Long(5)).and(P.lt(Long(10)))`.
#[derive(Debug, Clone, PartialEq)]
pub struct P {
    pub operator: String,
    pub value: Box<Argument>,
    pub other: Option<Box<Argument>>,
}

impl P {
    pub fn new(operator: impl Into<String>, value: impl Into<Argument>) -> Self {
        Self {
            operator: operator.into(),
            value: Box::new(value.into()),
            other: None,
        }
    }

    pub fn chained(
        subject: impl Into<Argument>,
        operator: impl Into<String>,
        value: impl Into<Argument>,
    ) -> Self {
        Self {
            operator: operator.into(),
            value: Box::new(value.into()),
            other: Some(Box::new(subject.into())),
        }
    }

    pub fn eq(value: impl Into<Argument>) -> Self {
        Self::new("eq", value)
    }

    pub fn neq(value: impl Into<Argument>) -> Self {
        Self::new("neq", value)
    }

    pub fn lt(value: impl Into<Argument>) -> Self {
        Self::new("lt", value)
    }

    pub fn lte(value: impl Into<Argument>) -> Self {
        Self::new("lte", value)
    }

    pub fn gt(value: impl Into<Argument>) -> Self {
        Self::new("gt", value)
    }

    pub fn gte(value: impl Into<Argument>) -> Self {
        Self::new("gte", value)
    }

    pub fn inside(first: impl Into<Argument>, second: impl Into<Argument>) -> Self {
        Self::new("inside", value_list([first.into(), second.into()]))
    }

    pub fn outside(first: impl Into<Argument>, second: impl Into<Argument>) -> Self {
        Self::new("outside", value_list([first.into(), second.into()]))
    }

    pub fn between(first: impl Into<Argument>, second: impl Into<Argument>) -> Self {
        Self::new("between", value_list([first.into(), second.into()]))
    }

    pub fn within<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Argument>,
    {
        Self::new("within", value_list(values.into_iter().map(Into::into)))
    }

    pub fn without<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Argument>,
    {
        Self::new("without", value_list(values.into_iter().map(Into::into)))
    }

    pub fn not_(predicate: P) -> Self {
        Self::new("not_", predicate)
    }

    pub fn and_(self, other: P) -> Self {
        Self::chained(self, "and_", other)
    }

    pub fn or_(self, other: P) -> Self {
        Self::chained(self, "or_", other)
    }
}

/// Multi-valued operators take their operands as one list so they render
/// as `P.between(Long(1), Long(10))`.
fn value_list(values: impl IntoIterator<Item = Argument>) -> Argument {
    Argument::List(values.into_iter().collect())
}
