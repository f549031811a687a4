use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if !c.is_alphanumeric() {
        1
    } else if c.is_numeric() {
        2
    } else {
        3
    }
}

/// Base letters, ignoring case and accents.
fn primary(value: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

/// Letters with their accents, ignoring case.
fn secondary(value: &str) -> impl Iterator<Item = char> + '_ {
    value.nfd().flat_map(char::to_lowercase)
}

/// Case of the letters, lower case first.
fn tertiary(value: &str) -> impl Iterator<Item = bool> + '_ {
    value.nfd().filter(|c| !is_combining_mark(*c)).map(char::is_uppercase)
}

/// Compare two strings in a human friendly order: letters are compared ignoring case and accents first,
/// then the accents and finally the case (lower case first) break the ties.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| secondary(a).cmp(secondary(b)))
        .then_with(|| tertiary(a).cmp(tertiary(b)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod test {
    use super::*;
    use ranger_test::test;

    fn sorted(values: &[&str]) -> Vec<String> {
        let mut values: Vec<String> = values.iter().map(ToString::to_string).collect();
        values.sort_by(|a, b| locale_cmp(a, b));
        values
    }

    #[test]
    fn case_is_ignored_before_letters() {
        assert_eq!(sorted(&["banana", "Cherry", "apple"]), vec!["apple", "banana", "Cherry"]);
        assert_eq!(locale_cmp("Zoe", "adam"), Ordering::Greater);
    }

    #[test]
    fn accents_are_ignored_before_letters() {
        assert_eq!(sorted(&["Zoe", "Émile", "Eve"]), vec!["Émile", "Eve", "Zoe"]);
        assert_eq!(locale_cmp("Núñez", "Nunez"), Ordering::Greater);
        assert_eq!(locale_cmp("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn lower_case_comes_first_on_tie() {
        assert_eq!(locale_cmp("smith", "Smith"), Ordering::Less);
        assert_eq!(locale_cmp("Smith", "Smith"), Ordering::Equal);
    }

    #[test]
    fn empty_string_comes_first() {
        assert_eq!(sorted(&["a", "", "B"]), vec!["", "a", "B"]);
    }

    #[test]
    fn separators_and_digits_precede_letters() {
        assert_eq!(sorted(&["ab", "a b", "a1", "a-b"]), vec!["a b", "a-b", "a1", "ab"]);
    }
}
