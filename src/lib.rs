//! # sapling
//!
//! Runtime core of a table-driven incremental LR parser.
//!
//! A grammar compiler produces a [`ParseTable`] and a [`Recognizer`]; this
//! crate runs them over an [`Input`] to build an immutable, shareable
//! [`Tree`], recovers from syntax errors without aborting, and reparses
//! edited text by reusing the unaffected prefix of the previous tree.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! document  → Text + tree, edits and incremental reparse
//!   ↓
//! parser    → ParseTable, ParseStack, LR driver, recovery, breakdown
//!   ↓
//! lexer     → Input sources, chunked byte cursor, Recognizer
//!   ↓
//! tree      → Shared immutable nodes, traversal, rowan bridge
//!   ↓
//! base      → Primitives (Symbol, StateId, LexState, InputEdit, TextSize)
//! ```

// ============================================================================
// MODULES (dependency order: base → tree → lexer → parser → document)
// ============================================================================

/// Foundation types: Symbol, StateId, InputEdit, TextRange
pub mod base;

/// Parser settings
pub mod config;

/// Error types for table construction and parsing
pub mod error;

/// Shared immutable syntax trees
pub mod tree;

/// Input sources and the chunked lexer
pub mod lexer;

/// Parse table, stack and the LR driver
pub mod parser;

/// Source text with incremental reparsing
pub mod document;

// Re-export commonly needed items
pub use base::{InputEdit, LexState, StateId, Symbol, TextRange, TextSize};
pub use config::{ParserConfig, Whitespace};
pub use document::Document;
pub use error::{ParseError, TableError};
pub use lexer::{Input, Lexer, ReadInput, Recognizer, StrInput};
pub use parser::{ParseAction, ParseTable, ParseTableBuilder, Parser, SyntaxError, syntax_errors};
pub use tree::{ErrorInfo, SyntaxNode, Tree, TreeKind};
