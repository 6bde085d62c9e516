// Copyright 2025 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Evaluate arithmetic expressions given as text.
//!
//! Expressions support integer and decimal literals, named variables,
//! named unary functions (built-in and caller-supplied), parentheses,
//! and `+ - * /` with standard precedence.  Parsing and evaluation are
//! fused: each grammar rule computes its `f64` result directly, without
//! building a syntax tree.
//!
//! ```
//! use equation_engine::{Parser, eval};
//!
//! assert_eq!(Ok(21.0), eval("(1+2) * (3+4)"));
//!
//! let mut parser = Parser::new("radius * pi2");
//! parser.define_variable("radius", 3.0);
//! parser.define_variable("pi2", 2.0 * std::f64::consts::PI);
//! assert_eq!(Ok(3.0 * 2.0 * std::f64::consts::PI), parser.parse());
//! ```

#![forbid(unsafe_code)]

pub mod common;

mod builtins;
mod parser;
mod scanner;

pub use self::builtins::{Function, is_builtin_fn};
pub use self::common::{EquationError, EquationResult, ErrorCode};
pub use self::parser::{Parser, eval};
pub use self::scanner::digit_value;
