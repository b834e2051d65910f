//! Character-level tokenizer for array bodies.
//!
//! Elements are double-quoted; a backslash inside a quote makes the next
//! character literal and is itself dropped. Outside quotes only `"` and `]`
//! mean anything, so separators and whitespace between elements are ignored.
//! The state lives in [`ParserState`] and survives line ends, which is how an
//! array (or a single element) spans several lines.

use crate::decode::state::{Mode, ParserState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenState {
    #[default]
    Outside,
    InQuote,
    /// Inside a quote, right after a backslash
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Skip,
    OpenQuote,
    Push(char),
    EmitElement,
    CloseArray,
}

/// One step of the machine. Pure, so every transition can be checked alone.
#[inline]
pub fn transition(state: TokenState, ch: char) -> (TokenState, Action) {
    match (state, ch) {
        (TokenState::Outside, '"') => (TokenState::InQuote, Action::OpenQuote),
        (TokenState::Outside, ']') => (TokenState::Outside, Action::CloseArray),
        (TokenState::Outside, _) => (TokenState::Outside, Action::Skip),
        (TokenState::InQuote, '\\') => (TokenState::Escape, Action::Skip),
        (TokenState::InQuote, '"') => (TokenState::Outside, Action::EmitElement),
        (TokenState::InQuote, c) => (TokenState::InQuote, Action::Push(c)),
        (TokenState::Escape, c) => (TokenState::InQuote, Action::Push(c)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fed {
    /// Line consumed, array still open
    Open,
    /// `]` seen; `end` is the byte offset just past it
    Closed { end: usize },
}

/// Runs `text` through the machine. Stops right after the closing `]`.
///
/// Does nothing when `state` is not inside an array.
pub fn feed(state: &mut ParserState, text: &str, line: usize) -> Fed {
    let Mode::Array {
        opened_at,
        token: mut current,
        mut quote_opened_at,
    } = state.mode
    else {
        return Fed::Open;
    };

    for (idx, ch) in text.char_indices() {
        let (next, action) = transition(current, ch);
        current = next;
        match action {
            Action::Skip => {}
            Action::OpenQuote => {
                quote_opened_at = line;
                state.pending_scalar.clear();
            }
            Action::Push(c) => state.pending_scalar.push(c),
            Action::EmitElement => {
                quote_opened_at = 0;
                let element = core::mem::take(&mut state.pending_scalar);
                state.pending_elements.push(element);
            }
            Action::CloseArray => {
                if !state.pending_scalar.is_empty() {
                    let element = core::mem::take(&mut state.pending_scalar);
                    state.pending_elements.push(element);
                }
                state.mode = Mode::Idle;
                return Fed::Closed {
                    end: idx + ch.len_utf8(),
                };
            }
        }
    }

    state.mode = Mode::Array {
        opened_at,
        token: current,
        quote_opened_at,
    };
    Fed::Open
}
