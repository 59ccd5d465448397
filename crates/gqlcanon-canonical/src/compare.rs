//! Name comparators.
//!
//! Two orderings exist and are applied asymmetrically on purpose: type
//! names, field/argument/enum-value keys, interface lists, and union
//! members use the camelCase-aware comparator, while directive names and
//! directive location tags use the plain comparator. The asymmetry matches
//! the display convention this crate reproduces; call sites must not
//! unify the two.

use std::cmp::Ordering;

/// Compares two names word-by-word after splitting at every
/// lowercase-to-uppercase boundary.
///
/// Word sequences are compared position by position up to the shorter
/// length; the first unequal pair decides. A full tie (one sequence is a
/// prefix of the other, or the words are identical) falls back to
/// [`plain_cmp`] of the original names, so `foo` sorts before `fooBar`
/// before `fooBarBaz`.
pub fn camel_case_cmp(left: &str, right: &str) -> Ordering {
    let left_words = split_camel_case(left);
    let right_words = split_camel_case(right);
    for (left_word, right_word) in left_words.iter().zip(right_words.iter()) {
        match left_word.cmp(right_word) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }
    plain_cmp(left, right)
}

/// Compares two full names by code point, with no word splitting.
pub fn plain_cmp(left: &str, right: &str) -> Ordering {
    left.cmp(right)
}

/// Splits a name at every ASCII lowercase-to-uppercase boundary.
///
/// Characters are neither removed nor case-folded; `fooBarBaz` becomes
/// `["foo", "Bar", "Baz"]` and a name without boundaries is one word.
fn split_camel_case(name: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut prev_lowercase = false;
    for (idx, ch) in name.char_indices() {
        if prev_lowercase && ch.is_ascii_uppercase() {
            words.push(&name[start..idx]);
            start = idx;
        }
        prev_lowercase = ch.is_ascii_lowercase();
    }
    words.push(&name[start..]);
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_case_boundaries() {
        assert_eq!(split_camel_case("fooBarBaz"), vec!["foo", "Bar", "Baz"]);
        assert_eq!(split_camel_case("foo"), vec!["foo"]);
        assert_eq!(split_camel_case("FooBar"), vec!["FooBar"]);
        assert_eq!(split_camel_case("HTTPServer"), vec!["HTTPServer"]);
        assert_eq!(split_camel_case(""), vec![""]);
    }

    #[test]
    fn prefix_word_sequence_sorts_first() {
        let mut names = vec!["fooBar", "foo", "fooBarBaz"];
        names.sort_by(|a, b| camel_case_cmp(a, b));
        assert_eq!(names, vec!["foo", "fooBar", "fooBarBaz"]);
    }

    #[test]
    fn camel_and_plain_orderings_diverge() {
        // Plain comparison puts the digit first ('1' < 'B'); the camel
        // comparator compares "foo" against "foo1" and puts fooBar first.
        assert_eq!(plain_cmp("foo1", "fooBar"), Ordering::Less);
        assert_eq!(camel_case_cmp("foo1", "fooBar"), Ordering::Greater);
    }

    #[test]
    fn identical_names_tie() {
        assert_eq!(camel_case_cmp("fooBar", "fooBar"), Ordering::Equal);
        assert_eq!(plain_cmp("fooBar", "fooBar"), Ordering::Equal);
    }

    #[test]
    fn plain_cmp_orders_uppercase_before_lowercase() {
        let mut tags = vec!["FIELD", "enum_value", "ARGUMENT_DEFINITION"];
        tags.sort_by(|a, b| plain_cmp(a, b));
        assert_eq!(tags, vec!["ARGUMENT_DEFINITION", "FIELD", "enum_value"]);
    }
}
