//! # Name Casing
//!
//! Converts free-form, human-entered names ("nom de famille", "Période gelée")
//! into the identifier forms used across generated files:
//!
//! | Function              | `"test de classe"` | `"FreezePeriod"`   |
//! |-----------------------|--------------------|--------------------|
//! | [`to_pascal_case`]    | `TestDeClasse`     | `Freezeperiod`     |
//! | [`to_camel_case`]     | `testDeClasse`     | `freezeperiod`     |
//! | [`to_kebab_case`]     | `test de classes`  | `freeze-periods`   |
//! | [`to_snake_case`]     | `test de classe`   | `freeze_period`    |
//!
//! Every function first runs [`clean_string`], so accents are folded to their
//! base letter and anything outside `[A-Za-z0-9 ]` is dropped. None of them fail.
//!
//! [`to_kebab_case`] always appends a trailing `s`. Generated REST routes depend
//! on that exact plural, irregular nouns included.

use serde::Serialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// All casing variants of one raw name, as produced by [`generate_name_variants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameVariantSet {
    /// The cleaned input
    pub original: String,
    #[serde(rename = "PascalCase")]
    pub pascal_case: String,
    #[serde(rename = "camelCase")]
    pub camel_case: String,
    /// Cleaned, lower-cased, with all whitespace removed
    pub lowercase: String,
}

/// Fold accents, drop everything that is not an ASCII letter, digit or space, then trim.
#[must_use]
pub fn clean_string(s: &str) -> String {
    let kept: String = s
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();
    kept.trim().to_string()
}

// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `"test de classe"` → `"TestDeClasse"`
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    clean_string(s).split_whitespace().map(capitalize).collect()
}

/// `"nom de famille"` → `"nomDeFamille"`
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    let cleaned = clean_string(s);
    let mut words = cleaned.split_whitespace();
    match words.next() {
        Some(first) => {
            let mut out = first.to_lowercase();
            out.extend(words.map(capitalize));
            out
        }
        None => String::new(),
    }
}

// Inserts `sep` before every ASCII uppercase letter except a leading one.
fn split_on_uppercase(s: &str, sep: char) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push(sep);
        }
        out.push(c);
    }
    out.to_lowercase()
}

/// `"FreezePeriod"` → `"freeze-periods"`
///
/// Pluralisation is a bare `s` suffix, so an empty name yields `"s"`.
#[must_use]
pub fn to_kebab_case(s: &str) -> String {
    let mut kebab = split_on_uppercase(&clean_string(s), '-');
    kebab.push('s');
    kebab
}

/// `"createdAt"` → `"created_at"`
///
/// Unlike the other converters this does not clean its input; it is applied
/// to identifiers that are already camelCase (template filter `snake_case`).
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    split_on_uppercase(s, '_')
}

/// Produce every casing variant of `name` in one call.
#[must_use]
pub fn generate_name_variants(name: &str) -> NameVariantSet {
    let cleaned = clean_string(name);
    NameVariantSet {
        pascal_case: to_pascal_case(&cleaned),
        camel_case: to_camel_case(&cleaned),
        lowercase: cleaned
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase(),
        original: cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_string_strips_accents_and_punctuation() {
        assert_eq!(clean_string("  Période gelée!  "), "Periode gelee");
        assert_eq!(clean_string("l'été — 2024"), "lete  2024");
        assert_eq!(clean_string("¿¡!?"), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("test de classe"), "TestDeClasse");
        assert_eq!(to_pascal_case("  multiple   spaces "), "MultipleSpaces");
        assert_eq!(to_pascal_case("iPhone case"), "IphoneCase");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("nom de famille"), "nomDeFamille");
        assert_eq!(to_camel_case("User"), "user");
        assert_eq!(to_camel_case("Éléphant rose"), "elephantRose");
        assert_eq!(to_camel_case("!!!"), "");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("FreezePeriod"), "freeze-periods");
        assert_eq!(to_kebab_case("user"), "users");
        assert_eq!(to_kebab_case(""), "s");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("createdAt"), "created_at");
        assert_eq!(to_snake_case("UserAccount"), "user_account");
        assert_eq!(to_snake_case("id"), "id");
    }

    #[test]
    fn test_generate_name_variants() {
        let v = generate_name_variants("Acmé Corp");
        assert_eq!(v.original, "Acme Corp");
        assert_eq!(v.pascal_case, "AcmeCorp");
        assert_eq!(v.camel_case, "acmeCorp");
        assert_eq!(v.lowercase, "acmecorp");
    }

    #[test]
    fn test_pascal_case_output_is_alphanumeric() {
        let inputs = [
            "hello world",
            "çà et là",
            "tab\tseparated",
            "~!@#$%^&*()_+{}|:\"<>?",
            "Ünïcödé naïve façade",
            "123 numbers 456",
        ];
        for input in inputs {
            let out = to_pascal_case(input);
            assert!(
                out.chars().all(|c| c.is_ascii_alphanumeric()),
                "{input:?} produced {out:?}"
            );
        }
    }
}
