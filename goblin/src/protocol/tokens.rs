use std::{
    borrow::Cow,
    fmt::{self, Display},
};

/// Declares a closed set of named constants. The type name and member
/// names are the host-side spellings; the symbol mapper turns them into
/// target identifiers at encoding time.
macro_rules! tokens {
    (
        $(#[$meta:meta])*
        $ty:ident => $type_name:literal {
            $($variant:ident => $name:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $ty {
            $($variant),+
        }

        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn type_name(&self) -> &'static str {
                $type_name
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }

            /// Looks a member up by its host name, with or without the
            /// trailing keyword escape (`all_` and `all` both resolve).
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|token| token.name() == name || token.name().trim_end_matches('_') == name)
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}.{}", self.type_name(), self.name())
            }
        }
    };
}

tokens! {
    /// Sack barrier functions.
    Barrier => "Barrier" {
        NormSack => "norm_sack",
    }
}

tokens! {
    /// Selects the keys or values of a map entry.
    Column => "Column" {
        Keys => "keys",
        Values => "values",
    }
}

tokens! {
    /// Vertex property cardinality.
    Cardinality => "Cardinality" {
        Single => "single",
        List => "list_",
        Set => "set_",
    }
}

tokens! {
    Order => "Order" {
        Incr => "incr",
        Decr => "decr",
        Shuffle => "shuffle",
    }
}

tokens! {
    Direction => "Direction" {
        Out => "OUT",
        In => "IN",
        Both => "BOTH",
    }
}

tokens! {
    Scope => "Scope" {
        Global => "global_",
        Local => "local",
    }
}

tokens! {
    /// Element tokens.
    T => "T" {
        Id => "id",
        Label => "label",
        Key => "key",
        Value => "value",
    }
}

tokens! {
    Pop => "Pop" {
        First => "first",
        Last => "last",
        All => "all_",
        Mixed => "mixed",
    }
}

tokens! {
    /// Sack and side-effect operators.
    Operator => "Operator" {
        Sum => "sum_",
        Minus => "minus",
        Mult => "mult",
        Div => "div",
        Min => "min_",
        Max => "max_",
        Assign => "assign",
        And => "and_",
        Or => "or_",
        AddAll => "add_all",
        SumLong => "sum_long",
    }
}

/// A generic named constant: any enum-like value that renders as
/// `<TypeName>.<NAME>`. The well-known token enums convert into it, and
/// callers can build their own for enums this crate does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumToken {
    pub type_name: Cow<'static, str>,
    pub name: Cow<'static, str>,
}

impl EnumToken {
    pub fn new(type_name: impl Into<Cow<'static, str>>, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

macro_rules! into_enum_token {
    ($($ty:ident),+) => {
        $(
            impl From<$ty> for EnumToken {
                fn from(token: $ty) -> Self {
                    EnumToken::new(token.type_name(), token.name())
                }
            }
        )+
    };
}

into_enum_token!(Order, Direction, Scope, T, Pop, Operator);
