//! Domain-specific assertion macros for struct-filter harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that show the
//! rendered markup, so a broken form is visible in the test output.

/// Assert that `needle` occurs exactly `n` times in `html`.
///
/// ```rust
/// assert_count!(html, "<form ", 1);
/// ```
#[macro_export]
macro_rules! assert_count {
    ($html:expr, $needle:expr, $n:expr) => {{
        let html: &str = &$html;
        let needle: &str = $needle;
        let actual = html.matches(needle).count();
        if actual != $n {
            panic!(
                "assert_count! failed:\n  needle:   {:?}\n  expected: {}\n  actual:   {}\n  html: {}",
                needle, $n, actual, html
            );
        }
    }};
}

/// Assert that the rendered form offers exactly `values` for `column`, in
/// that order.
///
/// ```rust
/// assert_options!(html, "books", "author", ["a", "b"]);
/// ```
#[macro_export]
macro_rules! assert_options {
    ($html:expr, $schema:expr, $column:expr, [$($value:expr),* $(,)?]) => {{
        let html: &str = &$html;
        let expected: Vec<String> = vec![$(String::from($value)),*];
        let actual = $crate::common::assertions::options(html, $schema, $column);
        pretty_assertions::assert_eq!(actual, expected, "options of {}.{}", $schema, $column);
    }};
}

/// Option values of one column group, in document order, unescaped only for
/// the entities the renderer emits.
pub fn options(html: &str, schema: &str, column: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut i = 0;
    loop {
        let needle = format!(r#"id="__{schema}.{column}-{i}""#);
        let Some(at) = html.find(&needle) else {
            break;
        };
        let before = &html[..at];
        let value_at = before.rfind(r#"value=""#).expect("radio has a value") + r#"value=""#.len();
        let end = value_at + html[value_at..].find('"').expect("value is quoted");
        values.push(unescape(&html[value_at..end]));
        i += 1;
    }
    values
}

fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
