//! Line-oriented text buffer with indentation.

pub(crate) struct SourceWriter {
    output: String,
    indent_level: u32,
    indent_str: &'static str,
}

impl SourceWriter {
    pub(crate) fn new() -> Self {
        SourceWriter {
            output: String::with_capacity(4096),
            indent_level: 0,
            indent_str: "    ",
        }
    }

    /// Write one indented line.
    pub(crate) fn line(&mut self, text: &str) {
        self.write_indent();
        self.output.push_str(text);
        self.write_line();
    }

    pub(crate) fn blank_line(&mut self) {
        self.write_line();
    }

    /// Write `header {` and indent.
    pub(crate) fn open_block(&mut self, header: &str) {
        self.write_indent();
        self.output.push_str(header);
        self.output.push_str(" {");
        self.write_line();
        self.increase_indent();
    }

    pub(crate) fn close_block(&mut self) {
        self.decrease_indent();
        self.line("}");
    }

    pub(crate) fn write_line(&mut self) {
        self.output.push('\n');
    }

    pub(crate) fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(self.indent_str);
        }
    }

    pub(crate) const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub(crate) const fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub(crate) fn finish(self) -> String {
        self.output
    }
}
