use crate::error::{Error, Result};

fn unrepresentable(key: &str, reason: &'static str) -> Error {
    Error::Unrepresentable {
        key: key.to_string(),
        reason,
    }
}

/// A key survives a round trip only if the splitter hands it back unchanged.
pub fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(unrepresentable(key, "empty key"));
    }
    if key.contains('=') {
        return Err(unrepresentable(key, "key contains `=`"));
    }
    if key.starts_with('#') {
        return Err(unrepresentable(key, "key starts with `#`"));
    }
    if key.contains('\n') {
        return Err(unrepresentable(key, "key contains a line break"));
    }
    if key.trim() != key {
        return Err(unrepresentable(key, "key has surrounding whitespace"));
    }
    Ok(())
}

pub fn check_text(key: &str, text: &str) -> Result<()> {
    if text.contains('\n') {
        return Err(unrepresentable(key, "value contains a line break"));
    }
    Ok(())
}

/// Scalars have no escapes: the decoder strips one quote from each end and
/// keeps everything in between.
pub fn quote_scalar_into(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('"');
    out.push_str(s);
    out.push('"');
}

pub fn escape_and_quote_into(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
