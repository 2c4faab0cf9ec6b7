//! Table-driven incremental LR parser
//!
//! ## Architecture
//!
//! ```text
//! Input (chunks)
//!     ↓
//! Lexer + Recognizer → Leaf trees
//!     ↓
//! Parser (shift / reduce / accept) ←→ ParseStack
//!     ↓                 ↘ error recovery
//! Tree (immutable, shared)
//! ```
//!
//! ## Incremental Reparsing
//!
//! When text changes, we:
//! 1. Break the previous tree down onto the stack up to the edit
//! 2. Lex again from the end of the reused prefix
//! 3. Share every reused node between the old and the new tree

mod breakdown;
mod diagnostics;
#[allow(clippy::module_inception)]
mod parser;
mod recovery;
mod stack;
mod table;

pub use diagnostics::{SyntaxError, syntax_errors};
pub use parser::{Parser, Reuse};
pub use stack::{ParseStack, StackEntry};
pub use table::{ParseAction, ParseTable, ParseTableBuilder, Reduction};
