use crate::decode::machine::TokenState;

/// Whether the parser is between entries or inside an open array.
///
/// Quote tracking only exists inside `Array`, so a quote can never be open
/// while the parser is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Array {
        /// Line holding the opening `[`
        opened_at: usize,
        token: TokenState,
        /// Line holding the `"` of the element being read; 0 when outside a quote
        quote_opened_at: usize,
    },
}

/// State carried across characters and lines of a single parse.
///
/// Inside an array, `pending_scalar` is the buffer of the element being read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    pub mode: Mode,
    pub pending_key: String,
    /// Raw scalar text, or the element buffer while a quote is open
    pub pending_scalar: String,
    pub pending_elements: Vec<String>,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_array(&self) -> bool {
        matches!(self.mode, Mode::Array { .. })
    }

    pub fn in_quote(&self) -> bool {
        matches!(
            self.mode,
            Mode::Array {
                token: TokenState::InQuote | TokenState::Escape,
                ..
            }
        )
    }

    pub fn escape_pending(&self) -> bool {
        matches!(
            self.mode,
            Mode::Array {
                token: TokenState::Escape,
                ..
            }
        )
    }

    pub fn open_array(&mut self, key: &str, line: usize) {
        self.pending_key.clear();
        self.pending_key.push_str(key);
        self.mode = Mode::Array {
            opened_at: line,
            token: TokenState::Outside,
            quote_opened_at: 0,
        };
    }

    /// Clears everything belonging to the entry just committed.
    pub fn reset(&mut self) {
        self.mode = Mode::Idle;
        self.pending_key.clear();
        self.pending_scalar.clear();
        self.pending_elements.clear();
    }
}
