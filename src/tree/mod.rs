//! Immutable, shared syntax trees.
//!
//! A [`Tree`] is a cheap-to-clone handle over an immutable node. Nodes do not
//! store absolute positions: each one records the bytes of padding before it
//! (`offset`) and the bytes it covers (`size`). Absolute ranges are recovered
//! by summing along a path from the root, which is what lets an unchanged
//! subtree be shared between the tree before an edit and the tree after it.
//!
//! ```text
//! left edge      start          end
//!     |<- offset ->|<-- size --->|
//! ```

mod green;
mod node;
mod walk;

pub use green::{SaplingLanguage, SyntaxElement, SyntaxNode, SyntaxToken};
pub use node::{ErrorInfo, Tree, TreeKind};
pub use walk::Preorder;
