//! minargs-parser, a minimal tokenizer for command line arguments.
//!
//! A single left-to-right scan classifies each token as a positional, a flag occurrence or part
//! of the remainder after `--`, and records a trace of every token consumed.
#![deny(missing_docs)]

pub mod input;
pub mod lexer;
pub mod parser;
pub mod process;
pub mod split;

pub use input::parse_value;
pub use lexer::Tokens;
pub use parser::{
    Error, Item, Kind, Options, ParsedArgs, Payload, Value, parse, parse_invocation,
};
pub use process::{Host, Invocation};
pub use split::split;
