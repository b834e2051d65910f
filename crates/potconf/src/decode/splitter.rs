//! Key/value splitting for content lines seen outside an array.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split<'a> {
    /// `key=value`; `value` is trimmed and still carries its quotes
    Scalar { key: &'a str, value: &'a str },
    /// `key=[...`; `rest` is everything after the opening bracket
    ArrayOpen { key: &'a str, rest: &'a str },
    /// No `=` or an empty key
    Malformed,
}

#[inline]
#[cfg(feature = "perf_memchr")]
fn find_first_eq(s: &str) -> Option<usize> {
    memchr::memchr(b'=', s.as_bytes())
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_first_eq(s: &str) -> Option<usize> {
    s.as_bytes().iter().position(|&b| b == b'=')
}

/// Splits on the first `=` only; later `=` belong to the value.
pub fn split(line: &str) -> Split<'_> {
    let Some(idx) = find_first_eq(line) else {
        return Split::Malformed;
    };
    let key = line[..idx].trim();
    if key.is_empty() {
        return Split::Malformed;
    }
    let value = line[idx + 1..].trim();
    match value.strip_prefix('[') {
        Some(rest) => Split::ArrayOpen { key, rest },
        None => Split::Scalar { key, value },
    }
}
