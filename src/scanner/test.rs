// Copyright 2025 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use super::{Scanner, digit_value, is_name_start};
use crate::common::{EquationError, ErrorCode};

#[test]
fn test_new_skips_leading_whitespace() {
    let s = Scanner::new("  \t\n x");
    assert_eq!(Some('x'), s.peek());
    assert_eq!(5, s.offset());
}

#[test]
fn test_empty_input_is_at_end() {
    let s = Scanner::new("");
    assert_eq!(None, s.peek());
    assert_eq!(0, s.offset());

    let s = Scanner::new("   ");
    assert_eq!(None, s.peek());
    assert_eq!(3, s.offset());
}

#[test]
fn test_bump_advances_one_char() {
    let mut s = Scanner::new("ab");
    assert_eq!(Some('a'), s.peek());
    assert_eq!(Some((1, 'b')), s.bump());
    assert_eq!(None, s.bump());
    // bumping past the end stays at the end
    assert_eq!(None, s.bump());
    assert_eq!(2, s.offset());
}

#[test]
fn test_expect_char() {
    let mut s = Scanner::new("(  1");
    assert_eq!(Ok(()), s.expect_char('('));
    // trailing whitespace was consumed along with the paren
    assert_eq!(Some('1'), s.peek());
    assert_eq!(3, s.offset());
}

#[test]
fn test_expect_char_mismatch() {
    let mut s = Scanner::new("1)");
    assert_eq!(
        Err(EquationError {
            start: 0,
            end: 1,
            code: ErrorCode::ExpectedCharacter,
            details: Some("'('".to_owned()),
        }),
        s.expect_char('(')
    );
    // a failed expect consumes nothing
    assert_eq!(Some('1'), s.peek());
}

#[test]
fn test_expect_char_at_end_of_input() {
    let mut s = Scanner::new("1");
    assert_eq!(Ok(1.0), s.read_number());
    assert_eq!(
        Err(EquationError {
            start: 1,
            end: 2,
            code: ErrorCode::ExpectedCharacter,
            details: Some("')'".to_owned()),
        }),
        s.expect_char(')')
    );
}

#[test]
fn test_read_number() {
    assert_eq!(Ok(1.0), Scanner::new("1.0").read_number());
    assert_eq!(Ok(1.1), Scanner::new("1.1").read_number());
    assert_eq!(Ok(123.0), Scanner::new("123.").read_number());
    assert_eq!(Ok(123.456), Scanner::new("123.456").read_number());
    assert_eq!(Ok(0.0), Scanner::new("0").read_number());
}

#[test]
fn test_read_number_stops_at_non_digit() {
    let mut s = Scanner::new("12a");
    assert_eq!(Ok(12.0), s.read_number());
    assert_eq!(Some('a'), s.peek());

    // only one decimal point is consumed
    let mut s = Scanner::new("1.2.3");
    assert_eq!(Ok(1.2), s.read_number());
    assert_eq!(Some('.'), s.peek());
}

#[test]
fn test_read_number_requires_digit() {
    assert_eq!(
        Err(EquationError {
            start: 0,
            end: 1,
            code: ErrorCode::ExpectedNumber,
            details: None,
        }),
        Scanner::new("x1").read_number()
    );
    // a bare point is not a number
    assert!(Scanner::new(".5").read_number().is_err());
    assert!(Scanner::new("").read_number().is_err());
}

#[test]
fn test_read_name() {
    let mut s = Scanner::new("foo123  +");
    assert_eq!(Ok(("foo123", 0, 6)), s.read_name());
    assert_eq!(Some('+'), s.peek());

    let mut s = Scanner::new("id(");
    assert_eq!(Ok(("id", 0, 2)), s.read_name());
    assert_eq!(Some('('), s.peek());
}

#[test]
fn test_read_name_requires_letter() {
    assert_eq!(
        Err(EquationError {
            start: 0,
            end: 1,
            code: ErrorCode::ExpectedName,
            details: None,
        }),
        Scanner::new("1abc").read_name()
    );
    assert!(Scanner::new("_foo").read_name().is_err());
    assert!(Scanner::new("").read_name().is_err());
}

#[test]
fn test_name_start_classification() {
    assert!(is_name_start('a'));
    assert!(is_name_start('Z'));
    // any Unicode letter, matching the variable-name contract
    assert!(is_name_start('å'));
    assert!(!is_name_start('_'));
    assert!(!is_name_start('3'));
    assert!(!is_name_start('('));
}

#[test]
fn test_digit_value() {
    for (i, c) in "0123456789".chars().enumerate() {
        assert_eq!(i as u32, digit_value(c));
    }
}
