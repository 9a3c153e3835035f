pub mod macros {
    #[macro_export]
    /// Creates the argument list of a step from heterogeneous values.
    /// Every value goes through `Argument::from`, so anything with a
    /// `From` conversion into an argument can be mixed freely.
    ///
    /// ## Example Use
    /// ```rust
    /// use goblin::args;
    /// use goblin::protocol::argument::Argument;
    /// use goblin::protocol::tokens::Order;
    ///
    /// let arguments: Vec<Argument> = args!["name", 29, Order::Decr];
    ///
    /// assert_eq!(arguments.len(), 3);
    /// ```
    macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::protocol::argument::Argument>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![
            $(
            $crate::protocol::argument::Argument::from($value),
            )+
        ]
    };
}
}

#[cfg(test)]
mod tests {
    use crate::{
        args,
        protocol::{argument::Argument, predicate::P},
    };

    #[test]
    fn test_empty_args() {
        let arguments = args![];
        assert!(arguments.is_empty());
    }

    #[test]
    fn test_mixed_args_keep_order() {
        let arguments = args!["age", P::gt(30), 7u8];
        assert_eq!(arguments.len(), 3);
        assert_eq!(arguments[0], Argument::Text("age".to_string()));
        assert!(matches!(arguments[1], Argument::Predicate(_)));
        assert!(matches!(arguments[2], Argument::Integer(_)));
    }
}
