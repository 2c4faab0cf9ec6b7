//! Chunked byte lexer over an abstract input source.
//!
//! The lexer never decides what a token is. A [`Recognizer`] (generated
//! from the grammar elsewhere) drives it byte by byte through
//! [`Lexer::lookahead`] and [`Lexer::advance`] and reports the symbol it
//! matched; the lexer turns that into a leaf with the right offset and size.
//!
//! ## Positions
//!
//! ```text
//!  prev token   whitespace   token
//! ...xxxxxxx|              |xxxxxx|
//!           ^ token_end    ^ token_start  ^ position
//! ```

mod input;
#[allow(clippy::module_inception)]
mod lexer;

pub use input::{Input, ReadInput, StrInput};
pub use lexer::{Lexer, Recognizer};
