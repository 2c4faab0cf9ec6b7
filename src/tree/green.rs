//! Bridge to rowan green trees.
//!
//! A finished [`Tree`] knows spans but not text. Pairing it with the source it
//! was parsed from yields a lossless rowan CST: every padding run becomes a
//! token of the caller's trivia kind, and text past the root's end is kept as
//! trailing trivia, so `SyntaxNode::text()` reproduces the source exactly.

use std::borrow::Cow;

use rowan::{GreenNode, GreenToken, Language, NodeOrToken};
use text_size::{TextRange, TextSize};

use super::node::{Tree, TreeKind};
use crate::base::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SaplingLanguage {}

impl Language for SaplingLanguage {
    type Kind = Symbol;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<SaplingLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<SaplingLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<SaplingLanguage>;

type GreenElement = NodeOrToken<GreenNode, GreenToken>;

/// Nodes under construction, innermost last.
struct GreenSink<'s> {
    source: &'s str,
    trivia: Symbol,
    cursor: TextSize,
    open: Vec<(Symbol, Vec<GreenElement>)>,
}

impl GreenSink<'_> {
    fn text(&self, range: TextRange) -> Cow<'_, str> {
        let len = self.source.len();
        let start = usize::from(range.start()).min(len);
        let end = usize::from(range.end()).min(len);
        String::from_utf8_lossy(&self.source.as_bytes()[start..end])
    }

    fn token(&mut self, kind: Symbol, range: TextRange) {
        if range.is_empty() && kind == self.trivia {
            return;
        }
        let token = GreenToken::new(kind.into(), &self.text(range));
        if let Some((_, children)) = self.open.last_mut() {
            children.push(token.into());
        }
        self.cursor = range.end();
    }

    fn finish_node(&mut self) -> Option<GreenNode> {
        let (kind, children) = self.open.pop()?;
        let node = GreenNode::new(kind.into(), children);
        match self.open.last_mut() {
            Some((_, parent)) => {
                parent.push(node.into());
                None
            }
            None => Some(node),
        }
    }

    /// Appends `trees` to the innermost open node. Nesting is tracked on
    /// `open` rather than the call stack.
    fn emit(&mut self, trees: &[Tree]) {
        enum Step<'a> {
            Enter(&'a Tree),
            Finish,
        }

        let mut pending: Vec<Step<'_>> = trees.iter().rev().map(Step::Enter).collect();
        while let Some(step) = pending.pop() {
            let tree = match step {
                Step::Finish => {
                    self.finish_node();
                    continue;
                }
                Step::Enter(tree) => tree,
            };
            match tree.kind() {
                TreeKind::Internal(children) => {
                    self.open.push((tree.symbol(), Vec::with_capacity(children.len())));
                    pending.push(Step::Finish);
                    pending.extend(children.iter().rev().map(Step::Enter));
                }
                TreeKind::Leaf | TreeKind::Error(_) => {
                    let range = tree.range_at(self.cursor);
                    self.token(self.trivia, TextRange::new(self.cursor, range.start()));
                    self.token(tree.symbol(), range);
                }
            }
        }
    }
}

impl Tree {
    /// Builds a lossless rowan green tree over `source`.
    ///
    /// Leading padding of each token is emitted as a `trivia` token in front
    /// of it.
    pub fn to_green(&self, source: &str, trivia: Symbol) -> GreenNode {
        let mut sink = GreenSink {
            source,
            trivia,
            cursor: TextSize::new(0),
            open: vec![(self.symbol(), Vec::new())],
        };
        match self.kind() {
            TreeKind::Internal(children) => sink.emit(children),
            _ => sink.emit(std::slice::from_ref(self)),
        }
        let end = TextSize::try_from(source.len()).unwrap_or(TextSize::new(u32::MAX));
        if end > sink.cursor {
            sink.token(trivia, TextRange::new(sink.cursor, end));
        }
        sink.finish_node()
            .unwrap_or_else(|| GreenNode::new(self.symbol().into(), std::iter::empty()))
    }

    /// [`to_green`](Self::to_green) wrapped in a rowan root node.
    pub fn to_syntax(&self, source: &str, trivia: Symbol) -> SyntaxNode {
        SyntaxNode::new_root(self.to_green(source, trivia))
    }
}
