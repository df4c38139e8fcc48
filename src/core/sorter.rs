//! Numeric-aware string sorting.
//!
//! Digit runs are compared by value by left-padding every run to the length
//! of the longest run in the input, then comparing the padded strings.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn digit_runs() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"[0-9]+").expect("digit pattern is valid"))
}

/// Left-pad every digit run in `content` with zeros to at least `width` digits.
///
/// Runs already longer than `width` are left untouched.
pub fn pad_start_digits(content: &str, width: usize) -> String {
    digit_runs()
        .replace_all(content, |caps: &Captures| format!("{:0>width$}", &caps[0], width = width))
        .into_owned()
}

/// Length of the longest digit run across all strings, if any.
fn longest_digit_run<S: AsRef<str>>(strings: &[S]) -> Option<usize> {
    strings
        .iter()
        .flat_map(|s| digit_runs().find_iter(s.as_ref()))
        .map(|m| m.as_str().len())
        .max()
}

/// Sort strings so embedded numbers compare by value (`file2` before `file10`).
///
/// Input without any digits is returned in its original order. Strings whose
/// padded forms are equal keep their relative order.
pub fn natural_sort(mut strings: Vec<String>) -> Vec<String> {
    let Some(width) = longest_digit_run(&strings) else {
        return strings;
    };

    strings.sort_by_cached_key(|s| pad_start_digits(s, width));
    strings
}
