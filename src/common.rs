// Copyright 2025 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::{error, fmt, result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ExpectedCharacter,
    ExpectedNumber,
    ExpectedName,
    UnknownVariable,
    UnknownFunction,
    ExtraToken,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ErrorCode::*;
        let name = match self {
            ExpectedCharacter => "expected_character",
            ExpectedNumber => "expected_number",
            ExpectedName => "expected_name",
            UnknownVariable => "unknown_variable",
            UnknownFunction => "unknown_function",
            ExtraToken => "extra_token",
        };

        write!(f, "{name}")
    }
}

/// A parse failure: the byte span of the offending input plus what went
/// wrong.  Expressions are strings typed by humans -- u16 is long enough.
/// `details` names the expected character or the unbound identifier;
/// callers branch on `code`, not on the rendered message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EquationError {
    pub start: u16,
    pub end: u16,
    pub code: ErrorCode,
    pub details: Option<String>,
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.details {
            Some(ref details) => write!(f, "{}:{}:{} -- {}", self.start, self.end, self.code, details),
            None => write!(f, "{}:{}:{}", self.start, self.end, self.code),
        }
    }
}

impl error::Error for EquationError {}

pub type EquationResult<T> = result::Result<T, EquationError>;

#[macro_export]
macro_rules! eqn_err(
    ($code:tt, $start:expr, $end:expr) => {{
        use $crate::common::{EquationError, ErrorCode};
        Err(EquationError {
            start: $start as u16,
            end: $end as u16,
            code: ErrorCode::$code,
            details: None,
        })
    }};
    ($code:tt, $start:expr, $end:expr, $details:expr) => {{
        use $crate::common::{EquationError, ErrorCode};
        Err(EquationError {
            start: $start as u16,
            end: $end as u16,
            code: ErrorCode::$code,
            details: Some($details),
        })
    }};
);

#[test]
fn test_error_display() {
    let err = EquationError {
        start: 4,
        end: 5,
        code: ErrorCode::ExpectedCharacter,
        details: Some("')'".to_owned()),
    };
    assert_eq!("4:5:expected_character -- ')'", format!("{err}"));

    let err = EquationError {
        start: 0,
        end: 1,
        code: ErrorCode::ExpectedNumber,
        details: None,
    };
    assert_eq!("0:1:expected_number", format!("{err}"));
}

#[test]
fn test_eqn_err_macro() {
    let err: EquationResult<f64> = eqn_err!(ExtraToken, 3usize, 4usize);
    assert_eq!(
        Err(EquationError {
            start: 3,
            end: 4,
            code: ErrorCode::ExtraToken,
            details: None,
        }),
        err
    );
}
