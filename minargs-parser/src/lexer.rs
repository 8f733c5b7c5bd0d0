//! A lexer for classifying tokens from a command line.

/// Shape of a single raw token. Only store the names, not the hyphens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arg<'a> {
    /// Positional (i.e. everything that does not start with a hyphen).
    Positional(&'a str),

    /// A bare `-`, conventionally standing for stdin or stdout.
    Dash,

    /// A bare `--`, marking the end of options.
    DoubleDash,

    /// One or more bundled short flags (e.g. -v, -abc or -o=out).
    Shorts {
        /// Characters between the hyphen and the first `=`, if any.
        names: &'a str,

        /// Everything after the first `=`.
        value: Option<&'a str>,
    },

    /// A long flag (e.g. --verbose or --output=out).
    Long {
        /// Name between the hyphens and the first `=`, if any.
        name: &'a str,

        /// Everything after the first `=`.
        value: Option<&'a str>,
    },
}

impl<'a> Arg<'a> {
    /// Classify a raw token.
    pub fn classify(input: &'a str) -> Self {
        if !Self::is_flag(input) {
            return Arg::Positional(input);
        }

        match input {
            "-" => Arg::Dash,
            "--" => Arg::DoubleDash,
            _ => {
                if let Some(rest) = input.strip_prefix("--") {
                    let (name, value) = split_value(rest);
                    Arg::Long { name, value }
                } else {
                    let (names, value) = split_value(&input[1..]);
                    Arg::Shorts { names, value }
                }
            }
        }
    }

    /// Evaluate if the token string looks like a flag. A bare `-` does too, which keeps it from
    /// being taken as the value of a preceding flag.
    #[inline(always)]
    pub fn is_flag(input: &str) -> bool {
        input.starts_with('-')
    }
}

/// Split once on the first `=`. The value may contain further `=` characters.
fn split_value(input: &str) -> (&str, Option<&str>) {
    match input.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (input, None),
    }
}

/// Split a short bundle into the leading names, which never take a value, and the last name.
///
/// An empty bundle (e.g. from `-=x`) yields no leading names and an empty last name.
pub fn split_shorts(names: &str) -> (impl Iterator<Item = &str>, &str) {
    let last = names.char_indices().next_back().map_or(0, |(i, _)| i);
    let (leading, last) = names.split_at(last);

    let leading = leading
        .char_indices()
        .map(move |(i, c)| &leading[i..i + c.len_utf8()]);

    (leading, last)
}

/// Defines a cursor that is responsible for streaming classified tokens from the command line.
///
/// It acts like a forward iterator that also knows each token's position in the original input.
#[derive(Clone, Debug)]
pub struct Tokens<'a, S> {
    argv: &'a [S],
    cursor: usize,
}

impl<'a, S: AsRef<str>> Tokens<'a, S> {
    /// Create a new cursor at the start of the command line input.
    pub fn new(argv: &'a [S]) -> Self {
        Self::starting_at(argv, 0)
    }

    /// Create a new cursor that skips the first `cursor` tokens.
    pub fn starting_at(argv: &'a [S], cursor: usize) -> Self {
        Tokens {
            argv,
            cursor: cursor.min(argv.len()),
        }
    }

    /// Position of the next token to be read.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Take the next token as a value, unless it looks like a flag or the input is exhausted.
    pub fn next_value(&mut self) -> Option<(usize, &'a str)> {
        let arg = self.argv.get(self.cursor)?.as_ref();

        if Arg::is_flag(arg) {
            return None;
        }

        let index = self.cursor;
        self.cursor += 1;
        Some((index, arg))
    }

    /// Retrieve the tokens that have not been read yet.
    #[inline(always)]
    pub fn rest(&self) -> &'a [S] {
        &self.argv[self.cursor..]
    }
}

impl<'a, S: AsRef<str>> Iterator for Tokens<'a, S> {
    type Item = (usize, Arg<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let arg = self.argv.get(self.cursor)?.as_ref();
        let index = self.cursor;
        self.cursor += 1;

        Some((index, Arg::classify(arg)))
    }
}
