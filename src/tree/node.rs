//! Tree node representation.

use std::fmt;
use std::sync::Arc;

use text_size::{TextRange, TextSize};

use crate::base::Symbol;

/// Shared handle to an immutable syntax tree node.
///
/// Cloning retains the node and dropping releases it; children are released
/// when the last handle to their parent goes away. Nothing about a node
/// changes after construction, so the same node can sit in a previous tree
/// and on a live parse stack at once.
#[derive(Clone)]
pub struct Tree {
    data: Arc<TreeData>,
}

struct TreeData {
    symbol: Symbol,
    offset: TextSize,
    size: TextSize,
    kind: TreeKind,
}

/// The three shapes a node can take.
#[derive(Debug, PartialEq, Eq)]
pub enum TreeKind {
    /// A token built by the lexer.
    Leaf,
    /// A nonterminal with its children in source order.
    Internal(Box<[Tree]>),
    /// A syntax error; covers the input discarded while recovering.
    Error(ErrorInfo),
}

/// Diagnostic payload of an error node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorInfo {
    found: Option<u8>,
    found_offset: TextSize,
    expected: Box<[Symbol]>,
}

impl ErrorInfo {
    /// `found_offset` is relative to the start of the error node.
    pub fn new(found: Option<u8>, found_offset: TextSize, mut expected: Vec<Symbol>) -> Self {
        expected.sort_unstable();
        expected.dedup();
        Self {
            found,
            found_offset,
            expected: expected.into_boxed_slice(),
        }
    }

    /// The byte the parser could not handle; `None` at end of input.
    pub fn found(&self) -> Option<u8> {
        self.found
    }

    /// Position of [`found`](Self::found) relative to the error node's start.
    pub fn found_offset(&self) -> TextSize {
        self.found_offset
    }

    /// Symbols that would have been accepted instead, sorted.
    pub fn expected(&self) -> &[Symbol] {
        &self.expected
    }
}

impl Tree {
    pub fn leaf(symbol: Symbol, offset: TextSize, size: TextSize) -> Self {
        Self::new(symbol, offset, size, TreeKind::Leaf)
    }

    /// Builds a nonterminal. Its offset is the first child's offset and its
    /// size runs to the end of the last child; with no children the node is
    /// empty.
    pub fn internal(symbol: Symbol, children: Vec<Tree>) -> Self {
        let offset = children.first().map(Tree::offset).unwrap_or_default();
        let total: TextSize = children.iter().map(Tree::total_len).sum();
        Self::new(
            symbol,
            offset,
            total - offset,
            TreeKind::Internal(children.into_boxed_slice()),
        )
    }

    pub fn error(offset: TextSize, size: TextSize, info: ErrorInfo) -> Self {
        Self::new(Symbol::ERROR, offset, size, TreeKind::Error(info))
    }

    fn new(symbol: Symbol, offset: TextSize, size: TextSize, kind: TreeKind) -> Self {
        Self {
            data: Arc::new(TreeData {
                symbol,
                offset,
                size,
                kind,
            }),
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.data.symbol
    }

    /// Padding between the previous sibling (or point) and this node.
    pub fn offset(&self) -> TextSize {
        self.data.offset
    }

    /// Bytes covered by the node itself.
    pub fn size(&self) -> TextSize {
        self.data.size
    }

    /// `offset + size`: how far this node moves the cursor.
    pub fn total_len(&self) -> TextSize {
        self.data.offset + self.data.size
    }

    pub fn kind(&self) -> &TreeKind {
        &self.data.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.data.kind, TreeKind::Leaf)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.data.kind, TreeKind::Error(_))
    }

    pub fn error_info(&self) -> Option<&ErrorInfo> {
        match &self.data.kind {
            TreeKind::Error(info) => Some(info),
            _ => None,
        }
    }

    /// Children in source order; empty for leaves and error nodes.
    pub fn children(&self) -> &[Tree] {
        match &self.data.kind {
            TreeKind::Internal(children) => children,
            _ => &[],
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Range of this node when it is a root (left edge 0).
    pub fn range(&self) -> TextRange {
        self.range_at(TextSize::new(0))
    }

    /// Absolute range of this node given its absolute left edge.
    pub fn range_at(&self, left_edge: TextSize) -> TextRange {
        TextRange::at(left_edge + self.data.offset, self.data.size)
    }

    /// Children paired with their absolute left edges, given this node's.
    pub fn children_at(&self, left_edge: TextSize) -> impl Iterator<Item = (TextSize, &Tree)> {
        let mut edge = left_edge;
        self.children().iter().map(move |child| {
            let child_edge = edge;
            edge += child.total_len();
            (child_edge, child)
        })
    }

    /// Children paired with their absolute ranges, given this node's left edge.
    pub fn child_ranges(&self, left_edge: TextSize) -> impl Iterator<Item = (TextRange, &Tree)> {
        self.children_at(left_edge)
            .map(|(edge, child)| (child.range_at(edge), child))
    }

    /// Takes another handle on this node.
    pub fn retain(&self) -> Tree {
        self.clone()
    }

    /// Gives up this handle. Children are released once no handle remains.
    pub fn release(self) {
        drop(self);
    }

    /// Number of live handles on this node.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }

    /// Whether both handles point at the very same node.
    pub fn ptr_eq(&self, other: &Tree) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

// Equality, formatting and drop all walk with an explicit stack: a
// left-recursive list is as deep as it is long.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.ptr_eq(right) {
                continue;
            }
            let (a, b) = (&*left.data, &*right.data);
            if a.symbol != b.symbol || a.offset != b.offset || a.size != b.size {
                return false;
            }
            match (&a.kind, &b.kind) {
                (TreeKind::Leaf, TreeKind::Leaf) => {}
                (TreeKind::Error(x), TreeKind::Error(y)) if x == y => {}
                (TreeKind::Internal(xs), TreeKind::Internal(ys)) if xs.len() == ys.len() => {
                    pending.extend(xs.iter().zip(ys.iter()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Tree {}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'a> {
            Node(&'a Tree),
            Text(&'static str),
        }

        let mut pending = vec![Step::Node(self)];
        while let Some(step) = pending.pop() {
            let tree = match step {
                Step::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Step::Node(tree) => tree,
            };
            let data = &tree.data;
            write!(f, "{}@{}+{}", data.symbol.0, u32::from(data.offset), u32::from(data.size))?;
            match &data.kind {
                TreeKind::Leaf => {}
                TreeKind::Error(info) => write!(f, "!{:?}", info)?,
                TreeKind::Internal(children) => {
                    f.write_str("[")?;
                    pending.push(Step::Text("]"));
                    for (index, child) in children.iter().enumerate().rev() {
                        pending.push(Step::Node(child));
                        if index > 0 {
                            pending.push(Step::Text(", "));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl Drop for TreeData {
    fn drop(&mut self) {
        let TreeKind::Internal(children) = &mut self.kind else {
            return;
        };
        let mut pending = std::mem::take(children).into_vec();
        while let Some(tree) = pending.pop() {
            if let Some(mut data) = Arc::into_inner(tree.data) {
                if let TreeKind::Internal(children) = &mut data.kind {
                    pending.extend(std::mem::take(children).into_vec());
                }
            }
        }
    }
}
