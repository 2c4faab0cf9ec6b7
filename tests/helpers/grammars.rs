//! Hand-built LR tables for small grammars.
//!
//! `ARITHMETIC`:
//!
//! ```text
//! expr := expr PLUS NUM | NUM
//! ```
//!
//! `PRECEDENCE` binds `TIMES` tighter than `PLUS`:
//!
//! ```text
//! expr := expr PLUS term | term
//! term := term TIMES NUM | NUM
//! ```
//!
//! `STATEMENTS` adds statements and an error production, with the list
//! rule collapsing so a program's statements end up as siblings:
//!
//! ```text
//! program := program stmt    (collapse program)
//!          | stmt
//! stmt    := expr SEMI | ERROR SEMI
//! expr    := expr PLUS NUM | NUM
//! ```

use once_cell::sync::Lazy;
use sapling::{LexState, Lexer, ParseTable, ParseTableBuilder, Parser, Recognizer, StrInput, Symbol, Tree};

/// Tokens shared by both grammars.
pub struct Tokens {
    pub num: Symbol,
    pub plus: Symbol,
    pub semi: Option<Symbol>,
    pub times: Option<Symbol>,
}

impl Recognizer for Tokens {
    fn recognize(&self, _state: LexState, lexer: &mut Lexer<'_>) -> Symbol {
        match (lexer.lookahead(), self.semi, self.times) {
            (b'0'..=b'9', _, _) => {
                while lexer.lookahead().is_ascii_digit() {
                    lexer.advance();
                }
                self.num
            }
            (b'+', _, _) => {
                lexer.advance();
                self.plus
            }
            (b';', Some(semi), _) => {
                lexer.advance();
                semi
            }
            (b'*', _, Some(times)) => {
                lexer.advance();
                times
            }
            _ => Symbol::ERROR,
        }
    }
}

pub struct Grammar {
    pub table: ParseTable,
    pub tokens: Tokens,
    pub trivia: Symbol,
}

impl Grammar {
    pub fn parser(&self) -> Parser<'_, Tokens> {
        Parser::new(&self.table, &self.tokens)
    }

    pub fn parse(&self, text: &str) -> Tree {
        self.parser()
            .parse(&mut StrInput::new(text))
            .expect("in-memory input never fails")
    }

    pub fn symbol(&self, name: &str) -> Symbol {
        self.table
            .symbol(name)
            .unwrap_or_else(|| panic!("unknown symbol {}", name))
    }
}

pub static ARITHMETIC: Lazy<Grammar> = Lazy::new(|| {
    let mut b = ParseTableBuilder::new();
    let num = b.symbol("NUM");
    let plus = b.symbol("PLUS");
    let expr = b.symbol("expr");
    let trivia = b.symbol("WS");

    let [s0, s1, s2, s3, s4] = [b.state(), b.state(), b.state(), b.state(), b.state()];
    b.shift(s0, num, s1).shift(s0, expr, s2);
    b.reduce_on(s1, &[plus, Symbol::END], expr, 1, &[]);
    b.shift(s2, plus, s3).accept(s2, Symbol::END);
    b.shift(s3, num, s4);
    b.reduce_on(s4, &[plus, Symbol::END], expr, 3, &[]);

    Grammar {
        table: b.build().expect("arithmetic table is valid"),
        tokens: Tokens {
            num,
            plus,
            semi: None,
            times: None,
        },
        trivia,
    }
});

pub static STATEMENTS: Lazy<Grammar> = Lazy::new(|| {
    let mut b = ParseTableBuilder::new();
    let num = b.symbol("NUM");
    let plus = b.symbol("PLUS");
    let semi = b.symbol("SEMI");
    let expr = b.symbol("expr");
    let stmt = b.symbol("stmt");
    let program = b.symbol("program");
    let trivia = b.symbol("WS");
    let error = Symbol::ERROR;

    let states: Vec<_> = (0..11).map(|_| b.state()).collect();
    let s = |i: usize| states[i];
    let follow_program = [Symbol::END, num, error];
    let follow_expr = [semi, plus];

    b.shift(s(0), program, s(1))
        .shift(s(0), stmt, s(2))
        .shift(s(0), expr, s(3))
        .shift(s(0), error, s(4))
        .shift(s(0), num, s(5));
    b.accept(s(1), Symbol::END)
        .shift(s(1), stmt, s(6))
        .shift(s(1), expr, s(3))
        .shift(s(1), error, s(4))
        .shift(s(1), num, s(5));
    b.reduce_on(s(2), &follow_program, program, 1, &[]);
    b.shift(s(3), semi, s(7)).shift(s(3), plus, s(8));
    b.shift(s(4), semi, s(9));
    b.reduce_on(s(5), &follow_expr, expr, 1, &[]);
    b.reduce_on(s(6), &follow_program, program, 2, &[true, false]);
    b.reduce_on(s(7), &follow_program, stmt, 2, &[]);
    b.shift(s(8), num, s(10));
    b.reduce_on(s(9), &follow_program, stmt, 2, &[]);
    b.reduce_on(s(10), &follow_expr, expr, 3, &[]);

    Grammar {
        table: b.build().expect("statements table is valid"),
        tokens: Tokens {
            num,
            plus,
            semi: Some(semi),
            times: None,
        },
        trivia,
    }
});

pub static PRECEDENCE: Lazy<Grammar> = Lazy::new(|| {
    let mut b = ParseTableBuilder::new();
    let num = b.symbol("NUM");
    let plus = b.symbol("PLUS");
    let times = b.symbol("TIMES");
    let expr = b.symbol("expr");
    let term = b.symbol("term");
    let trivia = b.symbol("WS");
    let end = Symbol::END;

    let states: Vec<_> = (0..8).map(|_| b.state()).collect();
    let s = |i: usize| states[i];

    b.shift(s(0), num, s(3)).shift(s(0), expr, s(1)).shift(s(0), term, s(2));
    b.accept(s(1), end).shift(s(1), plus, s(4));
    b.reduce_on(s(2), &[end, plus], expr, 1, &[]).shift(s(2), times, s(5));
    b.reduce_on(s(3), &[end, plus, times], term, 1, &[]);
    b.shift(s(4), num, s(3)).shift(s(4), term, s(6));
    b.shift(s(5), num, s(7));
    b.reduce_on(s(6), &[end, plus], expr, 3, &[]).shift(s(6), times, s(5));
    b.reduce_on(s(7), &[end, plus, times], term, 3, &[]);

    Grammar {
        table: b.build().expect("precedence table is valid"),
        tokens: Tokens {
            num,
            plus,
            semi: None,
            times: Some(times),
        },
        trivia,
    }
});
