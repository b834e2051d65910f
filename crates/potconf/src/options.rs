/// How the encoder lays out array values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayLayout {
    /// `key=["a", "b"]` on a single line
    #[default]
    Inline,
    /// `key=[` followed by one element per line and a closing `]`
    Multiline,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub array_layout: ArrayLayout,
    /// Indentation of elements in multiline arrays (default: 4 spaces)
    pub indent: usize,
    /// Emit an empty line between entries
    pub blank_line_between_entries: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            array_layout: ArrayLayout::Inline,
            indent: 4,
            blank_line_between_entries: false,
        }
    }
}
