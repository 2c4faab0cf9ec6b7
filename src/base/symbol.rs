/// Identifies a terminal or nonterminal.
///
/// The lexer and the parse table share one namespace. Two values are
/// reserved: [`Symbol::ERROR`] (unrecognized input, and the symbol of error
/// nodes) and [`Symbol::END`] (end of input). Grammar symbols start at
/// [`Symbol::FIRST_GRAMMAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(pub u16);

impl Symbol {
    pub const ERROR: Symbol = Symbol(0);
    pub const END: Symbol = Symbol(1);
    pub const FIRST_GRAMMAR: Symbol = Symbol(2);

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_reserved(self) -> bool {
        self.0 < Self::FIRST_GRAMMAR.0
    }
}

impl From<Symbol> for rowan::SyntaxKind {
    fn from(symbol: Symbol) -> Self {
        rowan::SyntaxKind(symbol.0)
    }
}

impl From<rowan::SyntaxKind> for Symbol {
    fn from(raw: rowan::SyntaxKind) -> Self {
        Symbol(raw.0)
    }
}

/// A parse-table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub u16);

impl StateId {
    /// State of the empty stack; parsing starts here.
    pub const ROOT: StateId = StateId(0);

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Start state handed to a [`Recognizer`](crate::lexer::Recognizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LexState(pub u16);

impl LexState {
    /// Permissive start state used while recovering from a syntax error.
    pub const ERROR: LexState = LexState(u16::MAX);
}

impl Default for LexState {
    fn default() -> Self {
        LexState(0)
    }
}
