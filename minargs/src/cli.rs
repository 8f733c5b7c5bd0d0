//! Command line flags of the `minargs` binary.

use clap::Parser;

use minargs::Options;

#[derive(Debug, Parser)]
#[command(name = "minargs")]
#[command(version, about = "Tokenize a string of command line arguments", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// The string of arguments to be parsed
    #[arg(long, value_name = "STRING", allow_hyphen_values = true)]
    pub args: Option<String>,

    /// Define an argument that should support multiples
    #[arg(short, long, value_name = "OPTION")]
    pub multiple: Vec<String>,

    /// Define an alias between two option names
    #[arg(short, long, value_name = "ALIAS:OPTION", value_parser = parse_alias)]
    pub alias: Vec<(String, String)>,

    /// Define an option that is expected
    #[arg(short, long, value_name = "OPTION")]
    pub known: Vec<String>,

    /// Define whether unknown options should error
    #[arg(short, long)]
    pub strict: bool,

    /// Define whether to capture positional values
    #[arg(short, long = "positionalValues")]
    pub positional_values: bool,

    /// Define whether `--` markers are kept as positionals
    #[arg(short, long)]
    pub recursive: bool,

    /// Parse the input as a JSON document
    #[arg(long)]
    pub json: bool,

    /// Display usage information
    #[arg(short, long)]
    pub help: bool,
}

impl Cli {
    /// Build the parser options from the flags.
    pub fn options(&self) -> Options {
        let mut options = Options::new()
            .strict(self.strict)
            .positional_values(self.positional_values)
            .recursive(self.recursive);

        for (alias, name) in &self.alias {
            options = options.alias(alias, name);
        }

        for name in &self.known {
            options = options.known(name);
        }

        for name in &self.multiple {
            options = options.multiple(name);
        }

        options
    }
}

/// Parse an `<alias>:<option>` pair.
fn parse_alias(input: &str) -> Result<(String, String), String> {
    match input.split_once(':') {
        Some((alias, name)) if !alias.is_empty() && !name.is_empty() => {
            Ok((alias.to_owned(), name.to_owned()))
        }
        _ => Err(format!("expected <alias>:<option>, got `{input}`")),
    }
}
