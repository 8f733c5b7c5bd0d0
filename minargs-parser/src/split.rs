//! Splitting of a raw command string into arguments, the way a shell would quote them.
//!
//! Whitespace outside quotes separates arguments. A quoted argument (`"a b"` or `'a b'`) runs to
//! the next quote of the same style and loses its quotes. Quotes inside an argument that starts
//! unquoted (`--foo="a b"`) are kept verbatim. There is no escape processing, and an unterminated
//! quote is ignored.

/// Split a command string into arguments.
pub fn split(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = input;

    while let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
        rest = &rest[start..];

        let (token, len) = next_token(rest);
        if let Some(token) = token {
            out.push(token.to_owned());
        }

        rest = &rest[len..];
    }

    out
}

#[inline(always)]
fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Length of the run of unquoted, non-whitespace characters.
fn word(input: &str) -> usize {
    input
        .find(|c: char| c.is_whitespace() || is_quote(c))
        .unwrap_or(input.len())
}

/// Length of the quoted group at the start of the input, quotes included, if it is closed.
fn quoted(input: &str) -> Option<usize> {
    let quote = input.chars().next().filter(|c| is_quote(*c))?;
    input[1..].find(quote).map(|end| end + 2)
}

/// Read one token from a non-empty input that does not start with whitespace. Returns the token,
/// if any, and the number of bytes consumed.
fn next_token(input: &str) -> (Option<&str>, usize) {
    if input.starts_with(is_quote) {
        return match quoted(input) {
            Some(len) => (Some(&input[1..len - 1]), len),
            None => (None, 1),
        };
    }

    let mut end = word(input);

    while let Some(len) = quoted(&input[end..]) {
        end += len;
        end += word(&input[end..]);
    }

    (Some(&input[..end]), end)
}
