pub mod anonymous;
pub mod graph_traversal;
pub mod source;
