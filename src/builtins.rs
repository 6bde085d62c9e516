// Copyright 2025 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::HashMap;

/// A named unary function, f64 to f64.  Boxed so callers can register
/// capturing closures as well as plain `fn`s.
pub type Function = Box<dyn Fn(f64) -> f64>;

pub fn is_builtin_fn(name: &str) -> bool {
    matches!(name, "id" | "log" | "log10" | "abs" | "exp")
}

/// The function table every parser starts with.  `log` is the natural
/// logarithm.  Callers may override any entry.
pub(crate) fn default_functions() -> HashMap<String, Function> {
    let mut fns: HashMap<String, Function> = HashMap::new();
    fns.insert("id".to_owned(), Box::new(|x| x));
    fns.insert("log".to_owned(), Box::new(f64::ln));
    fns.insert("log10".to_owned(), Box::new(f64::log10));
    fns.insert("abs".to_owned(), Box::new(f64::abs));
    fns.insert("exp".to_owned(), Box::new(f64::exp));
    fns
}

#[test]
fn test_is_builtin_fn() {
    assert!(is_builtin_fn("id"));
    assert!(is_builtin_fn("log"));
    assert!(is_builtin_fn("log10"));
    assert!(!is_builtin_fn("ln"));
    assert!(!is_builtin_fn("log2"));
    assert!(!is_builtin_fn(""));
}

#[test]
fn test_default_functions() {
    let fns = default_functions();
    assert_eq!(5, fns.len());
    for name in fns.keys() {
        assert!(is_builtin_fn(name));
    }

    assert_eq!(42.0, fns["id"](42.0));
    assert_eq!(0.0, fns["log"](1.0));
    assert_eq!(2.0, fns["log10"](100.0));
    assert_eq!(322.0, fns["abs"](-322.0));
    assert_eq!(1.0, fns["exp"](0.0));
}
