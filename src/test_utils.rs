//! Test utilities: string leaves and combine functions.
//!
//! String concatenation keeps expected values readable: the root of
//! `["A", "B", "C"]` is literally `"ABC"`.

/// Order-sensitive combine: plain string concatenation.
pub(crate) fn concat(left: &String, right: &String) -> String {
    format!("{left}{right}")
}

/// One single-character leaf per character of `s`.
pub(crate) fn letters(s: &str) -> Vec<String> {
    s.chars().map(String::from).collect()
}

/// Distinct delimited leaves `"0|"`, `"1|"`, ... so that substituting any
/// leaf or sibling changes the concatenated root.
pub(crate) fn numbered_leaves(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{i}|")).collect()
}
