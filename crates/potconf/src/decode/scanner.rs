#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    /// 1-based physical line number
    pub number: usize,
    pub kind: LineKind<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    /// Trimmed line text
    Content(&'a str),
}

impl LineKind<'_> {
    pub fn is_skipped(&self) -> bool {
        !matches!(self, LineKind::Content(_))
    }
}

/// Classifies one raw line.
///
/// Surrounding whitespace (including a stray `\r`) is trimmed first; an empty
/// result is blank, a leading `#` makes a comment.
pub fn classify(raw: &str) -> LineKind<'_> {
    let body = raw.trim();
    if body.is_empty() {
        LineKind::Blank
    } else if body.starts_with('#') {
        LineKind::Comment
    } else {
        LineKind::Content(body)
    }
}

pub fn scan<'a>(input: &'a str) -> Vec<ScannedLine<'a>> {
    iter(input).collect()
}

pub struct LineIter<'a> {
    rest: &'a str,
    number: usize,
}

pub fn iter<'a>(input: &'a str) -> LineIter<'a> {
    LineIter {
        rest: input,
        number: 0,
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = ScannedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        self.number += 1;
        let raw = match self.rest.find('\n') {
            Some(pos) => {
                let (raw, remaining) = self.rest.split_at(pos + 1);
                self.rest = remaining;
                &raw[..pos]
            }
            None => core::mem::take(&mut self.rest),
        };
        Some(ScannedLine {
            number: self.number,
            kind: classify(raw),
        })
    }
}
