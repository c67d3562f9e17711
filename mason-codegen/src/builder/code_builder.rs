//! Indented text output for rendered fragments.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates lines of source at a tracked nesting depth.
///
/// Syntax nodes never write to the builder directly: they describe
/// themselves as [`CodeFragment`]s and [`emit`](Self::emit) lays those out.
///
/// # Example
///
/// ```
/// use mason_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::java();
/// builder.emit(&[CodeFragment::braced(
///     "public class Person {",
///     vec![CodeFragment::line("private String name;")],
/// )][..]);
///
/// assert_eq!(builder.build(), "public class Person {\n    private String name;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// A builder using the conventional Java indent of four spaces.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Write `s` at the current depth, followed by a newline.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Blank lines carry no indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Lay out every fragment of `node`.
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                for inner in body {
                    self.apply_fragment(inner);
                }
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
        }
    }

    /// The source written so far.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nested;

    impl Renderable for Nested {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::braced(
                "class Outer {",
                vec![
                    CodeFragment::braced("static class Inner {", vec![]),
                    CodeFragment::Blank,
                    CodeFragment::line("int x;"),
                ],
            )]
        }
    }

    #[test]
    fn test_push_lines() {
        let mut builder = CodeBuilder::java();
        builder
            .push_line("void run() {")
            .push_indent()
            .push_line("return;")
            .push_dedent()
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "void run() {\n    return;\n}\n");
    }

    #[test]
    fn test_emit_nested_blocks() {
        let mut builder = CodeBuilder::java();
        builder.emit(&Nested);
        assert_eq!(
            builder.build(),
            "class Outer {\n    static class Inner {\n    }\n\n    int x;\n}\n"
        );
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.emit(&Nested);
        assert!(builder.build().contains("\n\tstatic class Inner {\n\t}\n"));
    }

    #[test]
    fn test_block_without_close() {
        let mut builder = CodeBuilder::java();
        builder.emit(
            &[CodeFragment::Block {
                header: "case 1:".into(),
                body: vec![CodeFragment::line("break;")],
                close: None,
            }][..],
        );
        assert_eq!(builder.build(), "case 1:\n    break;\n");
    }
}
