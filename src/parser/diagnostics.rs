//! Turning error nodes into readable diagnostics.

use std::fmt;

use text_size::{TextRange, TextSize};

use super::table::ParseTable;
use crate::base::Symbol;
use crate::tree::{ErrorInfo, Tree};

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    /// Input covered by the error node.
    pub range: TextRange,
    /// Where the unexpected input starts.
    pub found_at: TextSize,
    pub found: Option<u8>,
    /// Tokens that would have been accepted.
    pub expected: Vec<Symbol>,
}

impl SyntaxError {
    /// Describes the error node at `range`, naming symbols through `table`.
    ///
    /// Only tokens are listed as expected: nonterminals and the reserved
    /// `ERROR` symbol say nothing useful to a reader.
    pub fn from_node(range: TextRange, info: &ErrorInfo, table: &ParseTable) -> Self {
        let mut message = match info.found() {
            Some(byte) => format!("unexpected {}", describe_byte(byte)),
            None => "unexpected end of input".to_string(),
        };
        let expected: Vec<Symbol> = info
            .expected()
            .iter()
            .copied()
            .filter(|&symbol| symbol != Symbol::ERROR && table.is_terminal(symbol))
            .collect();
        let names: Vec<&str> = expected
            .iter()
            .map(|&symbol| table.symbol_name(symbol))
            .collect();
        if let Some((last, rest)) = names.split_last() {
            message.push_str(", expected ");
            if !rest.is_empty() {
                message.push_str(&rest.join(", "));
                message.push_str(" or ");
            }
            message.push_str(last);
        }
        Self {
            message,
            range,
            found_at: range.start() + info.found_offset(),
            found: info.found(),
            expected,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", u32::from(self.found_at), self.message)
    }
}

fn describe_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", byte as char)
    } else {
        format!("byte {:#04x}", byte)
    }
}

/// Every syntax error in `tree`, in source order.
pub fn syntax_errors(tree: &Tree, table: &ParseTable) -> Vec<SyntaxError> {
    tree.errors()
        .map(|(range, info)| SyntaxError::from_node(range, info, table))
        .collect()
}
