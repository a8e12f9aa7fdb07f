//! Closed grammatical categories and the six-case form container.

use serde::{Deserialize, Serialize};

/// The six grammatical cases of Russian, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// Именительный, "who/what"
    Nominative,
    /// Родительный, "of whom/what"
    Genitive,
    /// Дательный, "to whom/what"
    Dative,
    /// Винительный, "whom/what" (direct object)
    Accusative,
    /// Творительный, "with whom/what"
    Instrumental,
    /// Предложный, "about whom/what"
    Prepositional,
}

impl Case {
    /// All cases in canonical order.
    pub const ALL: [Case; 6] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
    ];

    /// Position of this case in the canonical order.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Grammatical gender. Applies to singular forms only; plural ordinal
/// suffixes ignore gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Мужской род
    Masculine,
    /// Женский род
    Feminine,
    /// Средний род
    Neuter,
}

/// Singular/plural axis, independent from gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plurality {
    /// One item
    Singular,
    /// More than one item
    Plural,
}

/// Animacy distinction; affects the accusative of the numerals 1–4 and of
/// animate noun paradigms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animacy {
    /// Одушевленное
    Animate,
    /// Неодушевленное
    Inanimate,
}

/// Count-agreement category of a quantity, deciding which noun form the
/// quantity selects ("один рубль" / "два рубля" / "пять рублей").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountCategory {
    /// Ends in 1 (but not 11)
    One,
    /// Ends in 2–4 (but not 12–14)
    Few,
    /// Everything else, including the teens
    Many,
}

/// Classify a quantity for count agreement. Teens always take the many-form.
pub fn count_category(n: u64) -> CountCategory {
    if (11..=14).contains(&(n % 100)) {
        return CountCategory::Many;
    }
    match n % 10 {
        1 => CountCategory::One,
        2..=4 => CountCategory::Few,
        _ => CountCategory::Many,
    }
}

/// One surface form per grammatical case, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseForms([String; 6]);

impl CaseForms {
    /// Build by rendering each case in canonical order.
    pub fn from_fn(mut render: impl FnMut(Case) -> String) -> Self {
        CaseForms(Case::ALL.map(&mut render))
    }

    /// The form for one case.
    pub fn get(&self, case: Case) -> &str {
        &self.0[case.index()]
    }

    /// Join all six forms with a separator, in canonical order.
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }

    /// Iterate the forms in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_case_order() {
        assert_eq!(Case::Nominative.index(), 0);
        assert_eq!(Case::Prepositional.index(), 5);
        assert_eq!(Case::ALL[3], Case::Accusative);
    }

    #[test]
    fn test_count_category() {
        assert_eq!(count_category(1), CountCategory::One);
        assert_eq!(count_category(21), CountCategory::One);
        assert_eq!(count_category(2), CountCategory::Few);
        assert_eq!(count_category(34), CountCategory::Few);
        assert_eq!(count_category(5), CountCategory::Many);
        assert_eq!(count_category(0), CountCategory::Many);
        // Teens are always many, even though they end in 1-4
        assert_eq!(count_category(11), CountCategory::Many);
        assert_eq!(count_category(12), CountCategory::Many);
        assert_eq!(count_category(114), CountCategory::Many);
    }

    #[test]
    fn test_case_forms_access_and_join() {
        let forms = CaseForms::from_fn(|c| format!("f{}", c.index()));
        assert_eq!(forms.get(Case::Dative), "f2");
        assert_eq!(forms.join(":"), "f0:f1:f2:f3:f4:f5");
    }
}
