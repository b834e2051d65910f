pub struct LineWriter {
    out: String,
    indent_cache: String,
}

impl LineWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            indent_cache: String::new(),
        }
    }

    fn write_indent(&mut self, indent: usize) {
        if indent == 0 {
            return;
        }
        if self.indent_cache.len() < indent {
            self.indent_cache
                .extend(core::iter::repeat_n(' ', indent - self.indent_cache.len()));
        }
        self.out.push_str(&self.indent_cache[..indent]);
    }

    fn write_key(&mut self, key: &str) {
        self.out.push_str(key);
        self.out.push('=');
    }

    pub fn line_scalar(&mut self, key: &str, value: &str) {
        self.write_key(key);
        crate::encode::primitives::quote_scalar_into(&mut self.out, value);
        self.out.push('\n');
    }

    pub fn line_array_inline(&mut self, key: &str, items: &[String]) {
        self.write_key(key);
        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            crate::encode::primitives::escape_and_quote_into(&mut self.out, item);
        }
        self.out.push(']');
        self.out.push('\n');
    }

    pub fn line_array_open(&mut self, key: &str) {
        self.write_key(key);
        self.out.push('[');
        self.out.push('\n');
    }

    pub fn line_element(&mut self, indent: usize, item: &str, last: bool) {
        self.write_indent(indent);
        crate::encode::primitives::escape_and_quote_into(&mut self.out, item);
        if !last {
            self.out.push(',');
        }
        self.out.push('\n');
    }

    pub fn line_array_close(&mut self) {
        self.out.push(']');
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for LineWriter {
    fn default() -> Self {
        Self::new()
    }
}
