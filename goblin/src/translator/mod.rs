pub mod literal;
pub mod script;
pub mod symbols;
pub mod translator;
