//! A parser for collecting options, positionals and the remainder from a token stream.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::lexer::{Arg, Tokens, split_shorts};
use crate::process::Invocation;

/// Defines the possible errors that may occur during parsing of arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// Strict mode was requested for an input that is not a list of arguments.
    #[error("strict mode requires a list of arguments")]
    Usage,

    /// Strict mode met an option, after alias resolution, that is not declared as known.
    #[error("unknown option `{name}`")]
    UnknownOption {
        /// Canonical name of the offending option.
        name: String,
    },
}

/// Parser configuration. Every field is optional and defaults to off or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    /// Alternate names mapped to their canonical option name.
    pub alias: IndexMap<String, String>,

    /// Options that are expected. Primed in the result and enforced by `strict`.
    pub known: IndexSet<String>,

    /// Fail on any option that is not `known`.
    pub strict: bool,

    /// Options whose occurrences accumulate in [`ParsedArgs::values`].
    #[serde(alias = "multiples")]
    pub multiple: IndexSet<String>,

    /// Take a following non-flag token as the value of a flag without `=value`.
    pub positional_values: bool,

    /// Treat `--` as a positional and keep scanning instead of stopping.
    pub recursive: bool,
}

impl Options {
    /// Create options with every field defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` as an alternate name for `target`.
    pub fn alias(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.alias.insert(name.into(), target.into());
        self
    }

    /// Declare an expected option.
    pub fn known(mut self, name: impl Into<String>) -> Self {
        self.known.insert(name.into());
        self
    }

    /// Reject unknown options.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Declare an option that accumulates its values.
    pub fn multiple(mut self, name: impl Into<String>) -> Self {
        self.multiple.insert(name.into());
        self
    }

    /// Capture the token following a flag as its value.
    pub fn positional_values(mut self, positional_values: bool) -> Self {
        self.positional_values = positional_values;
        self
    }

    /// Keep scanning past `--`.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Resolve a name to its canonical form. Unmapped names, and names mapped to an empty
    /// target, resolve to themselves.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        match self.alias.get(name) {
            Some(target) if !target.is_empty() => target.as_str(),
            _ => name,
        }
    }
}

/// Value projection of an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// The last value seen.
    One(String),

    /// Every value seen, in order. Used for options declared as `multiple`.
    Many(Vec<String>),
}

/// Kind of an entry in the parse trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Leading entry that belongs to the program rather than to the user.
    Process,

    /// Long flag.
    Argument,

    /// Short flag, one per character of a bundle.
    Short,

    /// Positional, including `-` and `--`.
    Positional,

    /// Token consumed as the value of the preceding flag.
    Value,
}

/// Payload of an entry in the parse trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// The token as written.
    Raw(String),

    /// A flag as written (before alias resolution) and the value it received.
    Flag {
        /// Name as written.
        name: String,

        /// Value, empty when none was given.
        value: String,
    },
}

/// One elementary token consumed by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Position in the input.
    pub index: usize,

    /// What the token was classified as.
    #[serde(rename = "type")]
    pub kind: Kind,

    /// What was recorded for it.
    pub value: Payload,
}

impl Item {
    fn raw(index: usize, kind: Kind, value: impl Into<String>) -> Self {
        Item {
            index,
            kind,
            value: Payload::Raw(value.into()),
        }
    }
}

/// Defines the result of argument parsing, keyed by canonical option names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedArgs {
    args: IndexMap<String, Vec<String>>,
    present: IndexMap<String, bool>,
    values: IndexMap<String, Value>,
    positionals: Vec<String>,
    remainder: Vec<String>,
    argv: Vec<Item>,
}

impl ParsedArgs {
    /// Try to parse the input arguments.
    pub fn try_parse<S: AsRef<str>>(argv: &[S], options: &Options) -> Result<Self, Error> {
        Parser::new(options).run(Tokens::new(argv))
    }

    /// Try to parse the user supplied part of a process invocation. The leading program
    /// entries are recorded in the trace only.
    pub fn try_parse_invocation(invocation: &Invocation, options: &Options) -> Result<Self, Error> {
        let start = invocation.start();
        let mut parser = Parser::new(options);

        for (index, arg) in invocation.argv()[..start].iter().enumerate() {
            parser.out.argv.push(Item::raw(index, Kind::Process, arg.as_str()));
        }

        parser.run(Tokens::starting_at(invocation.argv(), start))
    }

    /// Every value of every option occurrence, in order.
    #[inline(always)]
    pub fn args(&self) -> &IndexMap<String, Vec<String>> {
        &self.args
    }

    /// Get all values for the given option.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.args.get(name).map(Vec::as_slice)
    }

    /// Get the last value for the given option.
    pub fn get_one(&self, name: &str) -> Option<&str> {
        self.args.get(name).and_then(|v| v.last()).map(String::as_str)
    }

    /// Check if the given option occurred.
    #[inline(always)]
    pub fn contains(&self, name: &str) -> bool {
        self.present.get(name).copied().unwrap_or(false)
    }

    /// Existence of options, including known options that did not occur.
    #[inline(always)]
    pub fn present(&self) -> &IndexMap<String, bool> {
        &self.present
    }

    /// Values of options, honoring `multiple`.
    #[inline(always)]
    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    /// Tokens without option semantics.
    #[inline(always)]
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Tokens after a terminating `--`, left unparsed.
    #[inline(always)]
    pub fn remainder(&self) -> &[String] {
        &self.remainder
    }

    /// Trace of every token consumed.
    #[inline(always)]
    pub fn argv(&self) -> &[Item] {
        &self.argv
    }
}

/// Parse a list of arguments.
pub fn parse<S: AsRef<str>>(argv: &[S], options: &Options) -> Result<ParsedArgs, Error> {
    ParsedArgs::try_parse(argv, options)
}

/// Parse the user supplied part of a process invocation.
pub fn parse_invocation(invocation: &Invocation, options: &Options) -> Result<ParsedArgs, Error> {
    ParsedArgs::try_parse_invocation(invocation, options)
}

struct Parser<'o> {
    options: &'o Options,
    out: ParsedArgs,
}

impl<'o> Parser<'o> {
    fn new(options: &'o Options) -> Self {
        let mut out = ParsedArgs::default();

        for name in &options.known {
            let empty = if options.multiple.contains(name) {
                Value::Many(Vec::new())
            } else {
                Value::One(String::new())
            };

            out.present.insert(name.clone(), false);
            out.values.insert(name.clone(), empty);
        }

        Parser { options, out }
    }

    fn run<S: AsRef<str>>(mut self, mut tokens: Tokens<'_, S>) -> Result<ParsedArgs, Error> {
        while let Some((index, arg)) = tokens.next() {
            trace!(index, ?arg, "classified token");

            match arg {
                Arg::Positional(value) => self.positional(index, value),

                Arg::Dash => self.positional(index, "-"),

                Arg::DoubleDash => {
                    self.out.argv.push(Item::raw(index, Kind::Positional, "--"));

                    if self.options.recursive {
                        self.out.positionals.push("--".to_owned());
                        continue;
                    }

                    self.out.remainder = tokens
                        .rest()
                        .iter()
                        .map(|s| s.as_ref().to_owned())
                        .collect();
                    break;
                }

                Arg::Shorts { names, value } => {
                    let (leading, last) = split_shorts(names);

                    for short in leading {
                        self.store(index, Kind::Short, short, String::new())?;
                    }

                    self.resolve_value(index, Kind::Short, last, value, &mut tokens)?;
                }

                Arg::Long { name, value } => {
                    self.resolve_value(index, Kind::Argument, name, value, &mut tokens)?;
                }
            }
        }

        debug!(
            options = self.out.args.len(),
            positionals = self.out.positionals.len(),
            remainder = self.out.remainder.len(),
            "parsed arguments"
        );

        Ok(self.out)
    }

    fn positional(&mut self, index: usize, value: &str) {
        self.out.positionals.push(value.to_owned());
        self.out.argv.push(Item::raw(index, Kind::Positional, value));
    }

    fn resolve_value<S: AsRef<str>>(
        &mut self,
        index: usize,
        kind: Kind,
        name: &str,
        value: Option<&str>,
        tokens: &mut Tokens<'_, S>,
    ) -> Result<(), Error> {
        if let Some(value) = value {
            return self.store(index, kind, name, value.to_owned());
        }

        if self.options.positional_values {
            if let Some((at, value)) = tokens.next_value() {
                self.store(index, kind, name, value.to_owned())?;
                self.out.argv.push(Item::raw(at, Kind::Value, value));
                return Ok(());
            }
        }

        self.store(index, kind, name, String::new())
    }

    fn store(&mut self, index: usize, kind: Kind, name: &str, value: String) -> Result<(), Error> {
        let canonical = self.options.resolve(name);

        if self.options.strict && !self.options.known.contains(canonical) {
            return Err(Error::UnknownOption {
                name: canonical.to_owned(),
            });
        }

        trace!(name, canonical, value = value.as_str(), "storing option");

        self.out
            .args
            .entry(canonical.to_owned())
            .or_default()
            .push(value.clone());

        self.out.present.insert(canonical.to_owned(), true);

        if self.options.multiple.contains(canonical) {
            let slot = self
                .out
                .values
                .entry(canonical.to_owned())
                .or_insert_with(|| Value::Many(Vec::new()));

            if let Value::Many(values) = slot {
                values.push(value.clone());
            }
        } else {
            self.out
                .values
                .insert(canonical.to_owned(), Value::One(value.clone()));
        }

        self.out.argv.push(Item {
            index,
            kind,
            value: Payload::Flag {
                name: name.to_owned(),
                value,
            },
        });

        Ok(())
    }
}
