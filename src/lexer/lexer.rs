//! Byte cursor and token construction.

use std::fmt;
use std::io;

use text_size::TextSize;
use tracing::{trace, warn};

use super::input::Input;
use crate::base::{LexState, Symbol};
use crate::config::Whitespace;
use crate::tree::Tree;

/// Grammar-specific token recognition.
///
/// Starting from `state`, a recognizer inspects [`Lexer::lookahead`], calls
/// [`Lexer::advance`] for every byte that belongs to the token, and returns
/// the matched symbol. When nothing matches it returns [`Symbol::ERROR`].
/// Whitespace has already been skipped and the input is not at its end.
pub trait Recognizer {
    fn recognize(&self, state: LexState, lexer: &mut Lexer<'_>) -> Symbol;
}

impl<F> Recognizer for F
where
    F: Fn(LexState, &mut Lexer<'_>) -> Symbol,
{
    fn recognize(&self, state: LexState, lexer: &mut Lexer<'_>) -> Symbol {
        self(state, lexer)
    }
}

/// Cursor over the chunks of an [`Input`].
///
/// End of stream is represented by a one-byte chunk holding NUL, so
/// [`lookahead`](Self::lookahead) always has something to return.
pub struct Lexer<'i> {
    input: &'i mut dyn Input,
    chunk: Vec<u8>,
    chunk_start: TextSize,
    position_in_chunk: usize,
    token_start: TextSize,
    token_end: TextSize,
    token_first_byte: Option<u8>,
    at_end: bool,
    whitespace: Whitespace,
    failure: Option<io::Error>,
}

fn len_of(len: usize) -> TextSize {
    TextSize::try_from(len).unwrap_or(TextSize::new(u32::MAX))
}

impl<'i> Lexer<'i> {
    /// Seeks `input` to `start` and loads the first chunk. Positions reported
    /// by the lexer are absolute, so tokens built from here on get offsets
    /// relative to `start`.
    pub fn new(input: &'i mut dyn Input, start: TextSize, whitespace: Whitespace) -> Self {
        let mut lexer = Self {
            input,
            chunk: Vec::new(),
            chunk_start: start,
            position_in_chunk: 0,
            token_start: start,
            token_end: start,
            token_first_byte: None,
            at_end: false,
            whitespace,
            failure: None,
        };
        match lexer.input.seek(start) {
            Ok(()) => lexer.fill(),
            Err(err) => lexer.fail(err),
        }
        lexer
    }

    fn fill(&mut self) {
        if let Err(err) = self.input.read(&mut self.chunk) {
            self.fail(err);
            return;
        }
        self.position_in_chunk = 0;
        if self.chunk.is_empty() {
            self.at_end = true;
            self.chunk.push(0);
        }
    }

    fn fail(&mut self, err: io::Error) {
        warn!(error = %err, position = u32::from(self.position()), "input failed, treating as end of input");
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        self.at_end = true;
        self.chunk.clear();
        self.chunk.push(0);
        self.position_in_chunk = 0;
    }

    /// Absolute position of the current byte.
    pub fn position(&self) -> TextSize {
        self.chunk_start + len_of(self.position_in_chunk)
    }

    /// Current byte without consuming it; NUL at end of input.
    pub fn lookahead(&self) -> u8 {
        self.chunk.get(self.position_in_chunk).copied().unwrap_or(0)
    }

    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    /// Moves one byte forward, pulling the next chunk when this one is used
    /// up. Does nothing at end of input.
    pub fn advance(&mut self) {
        if self.at_end {
            return;
        }
        if self.position_in_chunk + 1 < self.chunk.len() {
            self.position_in_chunk += 1;
        } else {
            self.chunk_start += len_of(self.chunk.len());
            self.fill();
        }
    }

    /// Skips whitespace and marks the start of the next token here.
    pub fn skip_whitespace(&mut self) {
        while !self.at_end && self.whitespace.is_whitespace(self.lookahead()) {
            self.advance();
        }
        self.token_start = self.position();
        self.token_first_byte = (!self.at_end).then(|| self.lookahead());
    }

    /// Turns everything since the token start into a leaf. Padding skipped
    /// since the previous token becomes the leaf's offset.
    pub fn build_token(&mut self, symbol: Symbol) -> Tree {
        let position = self.position();
        let size = position - self.token_start;
        let offset = self.token_start - self.token_end;
        self.token_end = position;
        trace!(
            symbol = symbol.0,
            start = u32::from(self.token_start),
            size = u32::from(size),
            "token"
        );
        Tree::leaf(symbol, offset, size)
    }

    /// Scans one token starting in `state`.
    ///
    /// At end of input this yields the [`Symbol::END`] leaf. Error tokens,
    /// and every token scanned in [`LexState::ERROR`], are never empty: if the
    /// recognizer consumed nothing, the current byte becomes an error token.
    pub fn lex<R: Recognizer + ?Sized>(&mut self, recognizer: &R, state: LexState) -> Tree {
        self.skip_whitespace();
        if self.at_end {
            return self.build_token(Symbol::END);
        }
        let mut symbol = recognizer.recognize(state, self);
        let stalled = self.position() == self.token_start;
        if stalled && (symbol == Symbol::ERROR || state == LexState::ERROR) {
            self.advance();
            symbol = Symbol::ERROR;
        }
        self.build_token(symbol)
    }

    /// Where the most recent token started.
    pub fn token_start(&self) -> TextSize {
        self.token_start
    }

    /// Where the most recent token ended.
    pub fn token_end(&self) -> TextSize {
        self.token_end
    }

    /// First byte of the most recent token, `None` if it started at end of
    /// input.
    pub fn token_first_byte(&self) -> Option<u8> {
        self.token_first_byte
    }

    /// The first input failure, if any. The lexer treats a failure as end of
    /// input; callers decide whether that is acceptable.
    pub fn take_failure(&mut self) -> Option<io::Error> {
        self.failure.take()
    }
}

impl fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position())
            .field("token_start", &self.token_start)
            .field("token_end", &self.token_end)
            .field("at_end", &self.at_end)
            .finish_non_exhaustive()
    }
}
