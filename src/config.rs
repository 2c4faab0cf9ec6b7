//! Parser configuration.

use std::fmt;

/// Classifies the bytes [`Lexer::skip_whitespace`](crate::lexer::Lexer::skip_whitespace)
/// folds into the next token's offset.
#[derive(Clone, Copy, Default)]
pub enum Whitespace {
    /// ASCII whitespace: space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`.
    #[default]
    Ascii,
    /// Nothing is skipped; the recognizer sees every byte.
    None,
    /// A caller-supplied classifier.
    Custom(fn(u8) -> bool),
}

impl Whitespace {
    pub fn is_whitespace(&self, byte: u8) -> bool {
        match self {
            Self::Ascii => matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r'),
            Self::None => false,
            Self::Custom(classify) => classify(byte),
        }
    }
}

impl fmt::Debug for Whitespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii => f.write_str("Ascii"),
            Self::None => f.write_str("None"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Settings shared by every parse a [`Parser`](crate::parser::Parser) runs.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    pub whitespace: Whitespace,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }
}
