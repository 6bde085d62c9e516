// Copyright 2025 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Character-level cursor and lexical rules.
//!
//! The scanner keeps a one-character lookahead over the source text;
//! `None` means end of input.  Whitespace is never significant: each
//! lexical rule consumes the whitespace trailing its token.

use std::str::CharIndices;

use crate::common::EquationResult;
use crate::eqn_err;

#[cfg(test)]
mod test;

pub(crate) struct Scanner<'input> {
    text: &'input str,
    chars: CharIndices<'input>,
    lookahead: Option<(usize, char)>,
}

impl<'input> Scanner<'input> {
    pub(crate) fn new(text: &'input str) -> Self {
        let mut s = Scanner {
            text,
            chars: text.char_indices(),
            lookahead: None,
        };
        s.bump();
        s.skip_whitespace();
        s
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        self.lookahead = self.chars.next();
        self.lookahead
    }

    /// The current lookahead character, or `None` at end of input.
    pub(crate) fn peek(&self) -> Option<char> {
        self.lookahead.map(|(_, c)| c)
    }

    /// Byte offset of the lookahead, used for error spans.
    pub(crate) fn offset(&self) -> usize {
        match self.lookahead {
            Some((idx, _)) => idx,
            None => self.text.len(),
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while let Some((_, c)) = self.lookahead {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    /// Consume a required punctuation character (parens, operators),
    /// plus any whitespace trailing it.
    pub(crate) fn expect_char(&mut self, expected: char) -> EquationResult<()> {
        match self.lookahead {
            Some((_, c)) if c == expected => {
                self.bump();
                self.skip_whitespace();
                Ok(())
            }
            _ => {
                let pos = self.offset();
                eqn_err!(ExpectedCharacter, pos, pos + 1, format!("'{expected}'"))
            }
        }
    }

    fn take_while<F>(&mut self, mut keep_going: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        loop {
            match self.lookahead {
                Some((idx, c)) => {
                    if keep_going(c) {
                        self.bump();
                    } else {
                        return idx;
                    }
                }
                None => {
                    return self.text.len();
                }
            }
        }
    }

    /// A digit run, optionally followed by a single `.` and another
    /// (possibly empty) digit run -- `123.` is legal and equals 123.0.
    /// The accumulated slice is parsed with `str::parse`, so the decimal
    /// point is always `.` regardless of locale.
    pub(crate) fn read_number(&mut self) -> EquationResult<f64> {
        let start = self.offset();
        match self.lookahead {
            Some((_, c)) if is_digit(c) => {}
            _ => {
                return eqn_err!(ExpectedNumber, start, start + 1);
            }
        }

        self.take_while(is_digit);
        if let Some((_, '.')) = self.lookahead {
            self.bump();
            self.take_while(is_digit);
        }
        let end = self.offset();
        self.skip_whitespace();

        match self.text[start..end].parse::<f64>() {
            Ok(n) => Ok(n),
            Err(_) => eqn_err!(ExpectedNumber, start, end),
        }
    }

    /// An identifier: a letter, then letters or digits.  Returns the
    /// name along with its span.
    pub(crate) fn read_name(&mut self) -> EquationResult<(&'input str, usize, usize)> {
        let start = self.offset();
        match self.lookahead {
            Some((_, c)) if is_name_start(c) => {}
            _ => {
                return eqn_err!(ExpectedName, start, start + 1);
            }
        }

        self.take_while(is_name_continue);
        let end = self.offset();
        self.skip_whitespace();

        Ok((&self.text[start..end], start, end))
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub(crate) fn is_name_start(c: char) -> bool {
    c.is_alphabetic()
}

fn is_name_continue(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit()
}

/// The numeric value of a decimal digit character: `'7'` maps to 7.
pub fn digit_value(c: char) -> u32 {
    c as u32 - '0' as u32
}
