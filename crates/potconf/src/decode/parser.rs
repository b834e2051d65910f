use crate::decode::assemble::{Committed, commit_array, commit_scalar};
use crate::decode::machine::{self, Fed, TokenState};
use crate::decode::scanner::{self, LineKind, ScannedLine};
use crate::decode::splitter::{self, Split};
use crate::decode::state::{Mode, ParserState};
use crate::error::{Error, Result};
use crate::value::ConfigTable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Physical lines seen
    pub lines: usize,
    pub content_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
    /// Content lines skipped for lacking `=` or a key
    pub malformed_lines: usize,
    /// Characters run through the array tokenizer
    pub chars: usize,
    pub entries: usize,
    pub overwrites: usize,
}

/// Push parser: feed it lines, then call [`Parser::finish`].
#[derive(Debug, Default)]
pub struct Parser {
    state: ParserState,
    table: ConfigTable,
    stats: ParseStats,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one raw line (without its `\n`).
    pub fn feed_line(&mut self, raw: &str) {
        let number = self.stats.lines + 1;
        self.feed(ScannedLine {
            number,
            kind: scanner::classify(raw),
        });
    }

    pub fn feed(&mut self, line: ScannedLine<'_>) {
        self.stats.lines = line.number;
        match line.kind {
            LineKind::Blank => self.stats.blank_lines += 1,
            LineKind::Comment => self.stats.comment_lines += 1,
            LineKind::Content(text) => {
                self.stats.content_lines += 1;
                if self.state.in_array() {
                    self.feed_array(text, line.number);
                } else {
                    self.feed_entry(text, line.number);
                }
            }
        }
    }

    fn feed_entry(&mut self, text: &str, number: usize) {
        match splitter::split(text) {
            Split::Malformed => {
                self.stats.malformed_lines += 1;
                log::warn!("line {number}: skipping line without `key=`");
            }
            Split::Scalar { key, value } => {
                self.state.pending_key.push_str(key);
                self.state.pending_scalar.push_str(value);
                let committed = commit_scalar(&mut self.state, &mut self.table);
                self.record(committed, number);
            }
            Split::ArrayOpen { key, rest } => {
                log::trace!("line {number}: array `{key}` opened");
                self.state.open_array(key, number);
                self.feed_array(rest, number);
            }
        }
    }

    fn feed_array(&mut self, text: &str, number: usize) {
        match machine::feed(&mut self.state, text, number) {
            Fed::Open => self.stats.chars += text.chars().count(),
            Fed::Closed { end } => {
                self.stats.chars += text[..end].chars().count();
                let trailing = text[end..].trim();
                if !trailing.is_empty() {
                    log::debug!("line {number}: ignoring `{trailing}` after closing `]`");
                }
                let committed = commit_array(&mut self.state, &mut self.table);
                self.record(committed, number);
            }
        }
    }

    fn record(&mut self, committed: Committed, number: usize) {
        self.stats.entries += 1;
        if committed == Committed::Overwrote {
            self.stats.overwrites += 1;
            log::debug!("line {number}: key redefined, keeping the later value");
        }
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Entries committed so far.
    pub fn table(&self) -> &ConfigTable {
        &self.table
    }

    /// Ends the input. The table is returned even when the input ended inside
    /// an array; the entry being read at that point is not part of it.
    pub fn finish(self) -> (ConfigTable, Result<()>) {
        let outcome = match self.state.mode {
            Mode::Idle => Ok(()),
            Mode::Array {
                token: TokenState::InQuote | TokenState::Escape,
                quote_opened_at,
                ..
            } => Err(Error::UnterminatedQuote {
                line: quote_opened_at,
            }),
            Mode::Array {
                token: TokenState::Outside,
                opened_at,
                ..
            } => Err(Error::UnterminatedArray { line: opened_at }),
        };
        (self.table, outcome)
    }
}

pub fn parse_partial(input: &str) -> (ConfigTable, Result<()>) {
    let mut parser = Parser::new();
    for line in scanner::iter(input) {
        parser.feed(line);
    }
    parser.finish()
}

pub fn parse_to_table(input: &str) -> Result<ConfigTable> {
    let (table, outcome) = parse_partial(input);
    outcome.map(|()| table)
}
