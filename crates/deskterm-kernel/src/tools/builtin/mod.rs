//! Built-in terminal commands.
//!
//! One module per command. Each `run` receives arguments whose arity has
//! already been checked against the command table.

pub mod cat;
pub mod echo;
pub mod help;
pub mod ls;
pub mod rm;
pub mod touch;
pub mod write;
