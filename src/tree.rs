//! The syntax tree seen by the chunker.
//!
//! Chunking only needs node boundaries and children, so it is written against
//! [`SyntaxNode`] rather than a concrete parser. Tree-sitter nodes implement it
//! out of the box.

/// A node of a concrete syntax tree.
///
/// Children must be returned in source order and lie within the parent's
/// byte range.
pub trait SyntaxNode: Sized {
    /// Byte offset where the node starts.
    fn start_byte(&self) -> usize;

    /// Byte offset where the node ends (exclusive).
    fn end_byte(&self) -> usize;

    /// The grammar's name for this node.
    fn kind(&self) -> &str;

    /// Direct children, in source order.
    fn children(&self) -> Vec<Self>;

    /// Length of the node in bytes.
    fn byte_len(&self) -> usize {
        self.end_byte().saturating_sub(self.start_byte())
    }
}

impl SyntaxNode for tree_sitter::Node<'_> {
    fn start_byte(&self) -> usize {
        tree_sitter::Node::start_byte(self)
    }

    fn end_byte(&self) -> usize {
        tree_sitter::Node::end_byte(self)
    }

    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        let children = tree_sitter::Node::children(self, &mut cursor).collect();
        children
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A hand-built tree for exercising the chunker without a grammar.

    use super::SyntaxNode;

    #[derive(Debug, Clone)]
    pub struct TestNode {
        pub start: usize,
        pub end: usize,
        pub children: Vec<TestNode>,
    }

    impl TestNode {
        pub fn leaf(start: usize, end: usize) -> Self {
            Self {
                start,
                end,
                children: vec![],
            }
        }

        pub fn branch(start: usize, end: usize, children: Vec<TestNode>) -> Self {
            Self {
                start,
                end,
                children,
            }
        }
    }

    impl<'a> SyntaxNode for &'a TestNode {
        fn start_byte(&self) -> usize {
            self.start
        }

        fn end_byte(&self) -> usize {
            self.end
        }

        fn kind(&self) -> &str {
            if self.children.is_empty() {
                "leaf"
            } else {
                "branch"
            }
        }

        fn children(&self) -> Vec<Self> {
            let node: &'a TestNode = *self;
            node.children.iter().collect()
        }
    }
}
