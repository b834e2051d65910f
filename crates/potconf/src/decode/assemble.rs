//! Turning pending parser state into table entries.

use crate::decode::state::ParserState;
use crate::value::{ConfigTable, ConfigValue};

/// Strips one leading and one trailing `"`, each only if present.
pub fn unquote_scalar(raw: &str) -> &str {
    let s = raw.strip_prefix('"').unwrap_or(raw);
    s.strip_suffix('"').unwrap_or(s)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Committed {
    Inserted,
    Overwrote,
}

/// Commits the pending scalar under the pending key.
pub fn commit_scalar(state: &mut ParserState, table: &mut ConfigTable) -> Committed {
    let value = ConfigValue::Scalar(unquote_scalar(&state.pending_scalar).to_string());
    commit(state, table, value)
}

/// Commits the collected elements of a just-closed array.
pub fn commit_array(state: &mut ParserState, table: &mut ConfigTable) -> Committed {
    let value = ConfigValue::Array(core::mem::take(&mut state.pending_elements));
    commit(state, table, value)
}

fn commit(state: &mut ParserState, table: &mut ConfigTable, value: ConfigValue) -> Committed {
    let key = core::mem::take(&mut state.pending_key);
    log::trace!("commit {key} = {value:?}");
    let previous = table.insert(key, value);
    state.reset();
    match previous {
        Some(_) => Committed::Overwrote,
        None => Committed::Inserted,
    }
}
