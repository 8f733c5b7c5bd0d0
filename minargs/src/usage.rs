//! Plain text usage table.

const COLUMNS: [usize; 3] = [28, 40, 50];

/// (name, short alias, usage, description)
const FLAGS: [(&str, Option<char>, &str, &str); 9] = [
    (
        "args",
        None,
        r#"minargs --args="<string of arguments>""#,
        "The string of arguments to be parsed",
    ),
    (
        "multiple",
        Some('m'),
        "minargs --multiple <option>",
        "Define an argument that should support multiples",
    ),
    (
        "alias",
        Some('a'),
        "minargs --alias <alias>:<option>",
        "Define an alias between two option names",
    ),
    (
        "known",
        Some('k'),
        "minargs --known <option>",
        "Define an option that is expected",
    ),
    (
        "strict",
        Some('s'),
        "minargs --known <option> --strict",
        "Default: false - Define whether unknown options should error (use alongside `--known`)",
    ),
    (
        "positionalValues",
        Some('p'),
        "minargs --positionalValues",
        "Default: false - Define whether to capture positional values",
    ),
    (
        "recursive",
        Some('r'),
        "minargs --recursive",
        "Default: false - Define whether `--` markers are kept as positionals",
    ),
    (
        "json",
        None,
        "minargs --json",
        "Default: false - Parse the input as a JSON array of arguments",
    ),
    (
        "help",
        Some('h'),
        "minargs --help",
        "Display usage information",
    ),
];

/// Render the usage table.
pub fn render() -> String {
    let mut lines = vec![
        "Usage:".to_owned(),
        String::new(),
        r#"  minargs --args="<arguments to be parsed>" [<options>]"#.to_owned(),
        String::new(),
        "  or...".to_owned(),
        String::new(),
        r#"  echo "<arguments to be parsed>" | minargs [<options>]"#.to_owned(),
        String::new(),
        row(&["Options:", "Usage:", "Description:"]),
        String::new(),
    ];

    for (name, alias, usage, description) in FLAGS {
        let alias = alias.map(|c| format!("-{c}, ")).unwrap_or_default();
        let option = format!("  {alias}--{name}");
        lines.push(row(&[option.as_str(), usage, description]));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Pad each cell to its column width, never truncating.
fn row(cells: &[&str]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(COLUMNS)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();

    cells.join(" ").trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn it_should_pad_columns() {
        let line = row(&["a", "b", "c"]);

        assert_that!(line.find('b'), eq(Some(29)));
        assert_that!(line.find('c'), eq(Some(70)));
        assert_that!(line.ends_with('c'), eq(true));
    }

    #[test]
    fn it_should_not_truncate_long_cells() {
        let long = "x".repeat(40);
        let line = row(&[long.as_str(), "b"]);

        assert_that!(line, eq(&format!("{long} b")));
    }

    #[test]
    fn it_should_list_every_flag() {
        let text = render();

        for (name, _, _, _) in FLAGS {
            assert_that!(text.contains(&format!("--{name} ")), eq(true));
        }

        assert_that!(text.contains("  -m, --multiple"), eq(true));
        assert_that!(text.starts_with("Usage:\n"), eq(true));
    }
}
