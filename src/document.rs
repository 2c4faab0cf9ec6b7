//! A source text together with its current tree.
//!
//! [`Document`] is the usual way to drive incremental parsing: it applies
//! each text edit, derives the matching [`InputEdit`], and reparses with the
//! previous tree so unchanged structure is shared.

use std::ops::Range;

use text_size::{TextRange, TextSize};
use tracing::debug;

use crate::base::{InputEdit, Symbol};
use crate::error::ParseError;
use crate::lexer::{Recognizer, StrInput};
use crate::parser::{Parser, SyntaxError, syntax_errors};
use crate::tree::{SyntaxNode, Tree};

pub struct Document<'t, R: ?Sized> {
    parser: Parser<'t, R>,
    text: String,
    tree: Tree,
}

impl<'t, R: Recognizer + ?Sized> Document<'t, R> {
    /// Parses `text` from scratch.
    pub fn new(mut parser: Parser<'t, R>, text: impl Into<String>) -> Result<Self, ParseError> {
        let text = text.into();
        let tree = parser.parse(&mut StrInput::new(&text))?;
        Ok(Self { parser, text, tree })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Replaces the text in `range` with `replacement` and reparses.
    ///
    /// Text and tree change together: on any error both stay as they were.
    pub fn edit(&mut self, range: TextRange, replacement: &str) -> Result<&Tree, ParseError> {
        let span: Range<usize> = range.into();
        if !self.text.is_char_boundary(span.start) || !self.text.is_char_boundary(span.end) {
            return Err(ParseError::InvalidEdit(range));
        }
        let new_length = TextSize::try_from(replacement.len()).map_err(|_| ParseError::InvalidEdit(range))?;
        let edit = InputEdit::replace(range, new_length);
        debug!(?edit, "applying edit");

        let mut text = String::with_capacity(self.text.len() - span.len() + replacement.len());
        text.push_str(&self.text[..span.start]);
        text.push_str(replacement);
        text.push_str(&self.text[span.end..]);
        let tree = self
            .parser
            .reparse(&mut StrInput::new(&text), &self.tree, edit)?;

        self.text = text;
        self.tree = tree;
        Ok(&self.tree)
    }

    pub fn insert(&mut self, position: TextSize, text: &str) -> Result<&Tree, ParseError> {
        self.edit(TextRange::empty(position), text)
    }

    pub fn delete(&mut self, range: TextRange) -> Result<&Tree, ParseError> {
        self.edit(range, "")
    }

    pub fn syntax_errors(&self) -> Vec<SyntaxError> {
        syntax_errors(&self.tree, self.parser.table())
    }

    /// Lossless rowan view of the current text and tree.
    pub fn syntax(&self, trivia: Symbol) -> SyntaxNode {
        self.tree.to_syntax(&self.text, trivia)
    }
}
