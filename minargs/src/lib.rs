//! minargs, a minimal tokenizer for command line arguments.
#![deny(missing_docs)]

pub use minargs_parser as parser;

pub use parser::{
    Host, Invocation, Item, Kind, Options, ParsedArgs, Payload, Value, parse, parse_invocation,
    parse_value, split,
};

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// An error comes from the parsing of arguments.
    #[error(transparent)]
    Parser(#[from] parser::Error),
}

/// Parse the arguments of the running process, skipping the program path.
pub fn parse_env(options: &Options) -> Result<ParsedArgs, Error> {
    Ok(parse_invocation(&Invocation::current(), options)?)
}
