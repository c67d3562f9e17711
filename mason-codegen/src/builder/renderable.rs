//! Fragments: the layout-free form of rendered syntax.

/// A piece of generated source, before indentation is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// A header, an indented body, and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// A block closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some("}".to_string()),
        }
    }
}

/// Syntax nodes that describe themselves as fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braced_block() {
        let block = CodeFragment::braced("class A {", vec![CodeFragment::line("int x;")]);
        assert_eq!(
            block,
            CodeFragment::Block {
                header: "class A {".to_string(),
                body: vec![CodeFragment::Line("int x;".to_string())],
                close: Some("}".to_string()),
            }
        );
    }

    #[test]
    fn test_slice_concatenates() {
        let fragments = [CodeFragment::line("a;"), CodeFragment::Blank].to_fragments();
        assert_eq!(fragments, [CodeFragment::line("a;"), CodeFragment::Blank]);
    }
}
