//! Failure message layout
//!
//! Messages start with a newline so that a test runner printing `assertion failed: {message}`
//! shows the comparison on its own lines. Values are indented by two spaces, on every line,
//! so multi-line values stay visually grouped under their label.
use crate::info::AssertionInfo;

const INDENT: &str = "  ";

pub(crate) fn actual_is_null() -> String {
    "\nExpecting actual not to be null".to_string()
}

pub(crate) fn should_have_name(actual: &str, expected: &str, actual_name: Option<&str>) -> String {
    let actual_name = actual_name.map_or_else(|| "null".to_string(), quote);
    format!(
        "\nExpecting\n{actual}\nto have name:\n{expected}\nbut had:\n{actual_name}",
        actual = indent(actual),
        expected = indent(&quote(expected)),
        actual_name = indent(&actual_name),
    )
}

/// Final message for an assertion failure: the overriding message wins over the
/// generated one, and the description (if any) is prefixed to whichever is used.
pub(crate) fn assertion_failure(info: &AssertionInfo, generated: String) -> String {
    let message = info
        .overriding_message()
        .map_or(generated, ToString::to_string);
    match info.description() {
        Some(description) => format!("[{description}] {message}"),
        None => message,
    }
}

fn quote(value: &str) -> String {
    format!("\"{value}\"")
}

fn indent(contents: &str) -> String {
    prefix_lines(contents, |_, _| String::from(INDENT))
}

/// Prefixes each line of input.
///
/// Each line of the provided string slice will be passed to the provided function along with
/// the index of the line. The function should return a string that will be prepended to the line.
///
/// An empty string still receives a prefix so an empty value is visibly indented.
fn prefix_lines<F: Fn(usize, &str) -> String>(contents: &str, f: F) -> String {
    // `split_inclusive` yields nothing for the empty string
    if contents.is_empty() {
        f(0, "")
    } else {
        contents
            .split_inclusive('\n')
            .enumerate()
            .map(|(line_index, line)| f(line_index, line) + line)
            .collect()
    }
}
