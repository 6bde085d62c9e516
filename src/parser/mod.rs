// Copyright 2025 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Hand-written recursive descent parser with fused evaluation.
//!
//! Each grammar rule consumes the tokens of its production and returns
//! the computed value directly, so there is no intermediate syntax tree.
//! Precedence is encoded in the call nesting: `expression` calls `term`
//! calls `factor`, which makes `*` and `/` bind tighter than `+` and `-`
//! without a precedence table.
//!
//! ```text
//! Expression := [ ('+' | '-') ] Term ( ('+' | '-') Term )*
//! Term       := Factor ( ('*' | '/') Factor )*
//! Factor     := '(' Expression ')'
//!             | Name [ '(' Expression ')' ]
//!             | Number
//! ```

use std::collections::HashMap;

use crate::builtins::{Function, default_functions};
use crate::common::EquationResult;
use crate::eqn_err;
use crate::scanner::{Scanner, is_name_start};


/// A parser bound to one expression string and its environment.
///
/// The variable and function tables are populated by the caller and only
/// read during a parse.  Each call to [`Parser::parse`] runs over a fresh
/// cursor, so repeated parses against an unchanged environment yield
/// identical results.
pub struct Parser {
    text: String,
    variables: HashMap<String, f64>,
    functions: HashMap<String, Function>,
}

impl Parser {
    /// Create a parser for `expression` with an empty variable
    /// environment and the default built-in function table.
    pub fn new(expression: &str) -> Self {
        Parser {
            text: expression.to_owned(),
            variables: HashMap::new(),
            functions: default_functions(),
        }
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn define_variable(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_owned(), value);
    }

    /// Register a unary function under `name`, replacing any previous
    /// binding (including a built-in).
    pub fn define_function<F>(&mut self, name: &str, f: F)
    where
        F: Fn(f64) -> f64 + 'static,
    {
        self.functions.insert(name.to_owned(), Box::new(f));
    }

    pub fn variables(&self) -> &HashMap<String, f64> {
        &self.variables
    }

    /// Evaluate the expression against the current environment.
    ///
    /// The whole input must be consumed: leftover input after the
    /// top-level expression fails with `ExtraToken` rather than silently
    /// evaluating a prefix.
    pub fn parse(&self) -> EquationResult<f64> {
        let mut eval = Evaluator {
            scanner: Scanner::new(&self.text),
            variables: &self.variables,
            functions: &self.functions,
        };

        let result = eval.expression()?;

        if eval.scanner.peek().is_some() {
            let start = eval.scanner.offset();
            return eqn_err!(ExtraToken, start, self.text.len());
        }

        Ok(result)
    }
}

/// One-shot convenience: build a parser for `expression` and parse it
/// once against the built-in functions alone.
pub fn eval(expression: &str) -> EquationResult<f64> {
    Parser::new(expression).parse()
}

/// Per-parse state: the cursor plus shared references into the
/// environment.  Dropped when `Parser::parse` returns.
struct Evaluator<'a> {
    scanner: Scanner<'a>,
    variables: &'a HashMap<String, f64>,
    functions: &'a HashMap<String, Function>,
}

impl Evaluator<'_> {
    fn expression(&mut self) -> EquationResult<f64> {
        // a leading sign is an implicit 0 on the left: -x == 0 - x
        let mut result = match self.scanner.peek() {
            Some('+') | Some('-') => 0.0,
            _ => self.term()?,
        };

        while let Some(op @ ('+' | '-')) = self.scanner.peek() {
            self.scanner.expect_char(op)?;
            let rhs = self.term()?;
            if op == '+' {
                result += rhs;
            } else {
                result -= rhs;
            }
        }

        Ok(result)
    }

    fn term(&mut self) -> EquationResult<f64> {
        let mut result = self.factor()?;

        while let Some(op @ ('*' | '/')) = self.scanner.peek() {
            self.scanner.expect_char(op)?;
            let rhs = self.factor()?;
            if op == '*' {
                result *= rhs;
            } else {
                // division by zero is not guarded: IEEE-754 semantics
                // (infinities, NaN) propagate to the caller
                result /= rhs;
            }
        }

        Ok(result)
    }

    fn factor(&mut self) -> EquationResult<f64> {
        match self.scanner.peek() {
            Some('(') => {
                self.scanner.expect_char('(')?;
                let result = self.expression()?;
                self.scanner.expect_char(')')?;
                Ok(result)
            }
            Some(c) if is_name_start(c) => {
                let (name, start, end) = self.scanner.read_name()?;
                if self.scanner.peek() == Some('(') {
                    self.scanner.expect_char('(')?;
                    let functions = self.functions;
                    let Some(f) = functions.get(name) else {
                        return eqn_err!(UnknownFunction, start, end, name.to_owned());
                    };
                    let arg = self.expression()?;
                    self.scanner.expect_char(')')?;
                    Ok(f(arg))
                } else {
                    match self.variables.get(name) {
                        Some(value) => Ok(*value),
                        None => eqn_err!(UnknownVariable, start, end, name.to_owned()),
                    }
                }
            }
            _ => self.scanner.read_number(),
        }
    }
}
