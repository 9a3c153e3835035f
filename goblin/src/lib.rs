pub mod config;
pub mod macros;
pub mod protocol;
pub mod translator;
pub mod traversal;
pub mod types;

pub use translator::literal::{encode_arg, encode_args};
