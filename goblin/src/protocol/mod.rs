pub mod argument;
pub mod descriptor;
pub mod lambda;
pub mod predicate;
pub mod tokens;
