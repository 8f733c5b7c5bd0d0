//! Parsing of dynamically typed input, such as a JSON document.

use serde_json::{Number, Value};
use tracing::debug;

use crate::parser::{Error, Options, ParsedArgs};

/// Parse a dynamically typed list of arguments.
///
/// Anything that is not an array yields an empty result, unless `strict` is set, in which case
/// it fails with [`Error::Usage`]. Array elements that are not strings are coerced with
/// [`coerce`].
pub fn parse_value(input: &Value, options: &Options) -> Result<ParsedArgs, Error> {
    let Some(items) = input.as_array() else {
        if options.strict {
            return Err(Error::Usage);
        }

        debug!("input is not a list of arguments");
        return Ok(ParsedArgs::default());
    };

    let argv: Vec<String> = items.iter().map(coerce).collect();
    ParsedArgs::try_parse(&argv, options)
}

/// Convert any value to the string it stands for on a command line. Never fails.
pub fn coerce(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                item => coerce(item),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

// Integral floats print without a fractional part (e.g. `1.0` as `1`).
fn number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }

    if let Some(u) = n.as_u64() {
        return u.to_string();
    }

    n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn it_should_return_empty_result_for_non_lists() {
        for input in [json!("argv"), json!(""), json!(null), json!({}), json!(42)] {
            let res = parse_value(&input, &Options::new());
            assert_that!(res, eq(&Ok(ParsedArgs::default())));
        }
    }

    #[test]
    fn it_should_not_prime_known_options_for_non_lists() {
        let res = parse_value(&json!(null), &Options::new().known("foo"));
        assert_that!(res, eq(&Ok(ParsedArgs::default())));
    }

    #[test]
    fn it_should_fail_for_non_lists_in_strict_mode() {
        let res = parse_value(&json!({}), &Options::new().strict(true));
        assert_that!(res, eq(&Err(Error::Usage)));
    }

    #[test]
    fn it_should_parse_lists() {
        let args = parse_value(&json!(["--foo=bar", "baz"]), &Options::new()).unwrap();

        assert_that!(args.get_one("foo"), eq(Some("bar")));
        assert_that!(args.positionals(), eq(&["baz".to_owned()][..]));
    }

    #[test]
    fn it_should_coerce_non_strings() {
        let input = json!([{}, [], null, true, 1.5, 2.0, -3, ["a", null, 1]]);
        let args = parse_value(&input, &Options::new()).unwrap();

        let expected: Vec<String> = [
            "[object Object]",
            "",
            "null",
            "true",
            "1.5",
            "2",
            "-3",
            "a,,1",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        // `-3` is a short flag named `3`.
        let positionals: Vec<String> = expected.iter().filter(|s| *s != "-3").cloned().collect();
        assert_that!(args.positionals(), eq(&positionals[..]));
        assert_that!(args.contains("3"), eq(true));
    }
}
