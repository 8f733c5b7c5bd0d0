use core::panic;

use minargs_parser::{Options, ParsedArgs};

struct MyArgs {
    output: String,
    verbose: bool,
    files: Vec<String>,
}

fn main() {
    let argv = &["-v", "--output", "out.txt", "a.txt", "b.txt"];

    let options = Options::new()
        .alias("v", "verbose")
        .alias("o", "output")
        .positional_values(true);

    let parsed = ParsedArgs::try_parse(argv, &options).expect("must be parsed");

    let args = MyArgs {
        output: parsed.get_one("output").expect("must be present").to_owned(),
        verbose: parsed.contains("verbose"),
        files: parsed.positionals().to_vec(),
    };

    if "out.txt" != args.output {
        panic!("invalid output");
    }

    if !args.verbose {
        panic!("invalid verbose");
    }

    if args.files != ["a.txt", "b.txt"] {
        panic!("invalid files");
    }
}
