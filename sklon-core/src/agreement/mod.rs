//! Quantity/noun agreement.
//!
//! Combines a quantity with a noun paradigm across all six cases, with
//! currency presets resolved ahead of the embedded lexicon.

mod currency;
mod lexicon;

pub use currency::{currency, currency_tokens, Currency};
pub use lexicon::{lexicon_words, lookup};

use crate::cardinal::{self, Decimal};
use crate::error::{DeclineError, Result};
use crate::grammar::{count_category, Animacy, Case, CaseForms, CountCategory, Gender};

/// Twelve surface forms of a noun plus its agreement-relevant categories.
#[derive(Debug, Clone)]
pub struct NounParadigm {
    gender: Gender,
    animacy: Animacy,
    singular: [String; 6],
    plural: [String; 6],
}

impl NounParadigm {
    /// Build a paradigm from its forms in canonical case order.
    pub fn new(
        gender: Gender,
        animacy: Animacy,
        singular: [String; 6],
        plural: [String; 6],
    ) -> Self {
        NounParadigm {
            gender,
            animacy,
            singular,
            plural,
        }
    }

    /// Grammatical gender of the noun.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Animacy of the noun.
    pub fn animacy(&self) -> Animacy {
        self.animacy
    }

    /// The noun form selected by a count in a given case
    /// ("один рубль" / "два рубля" / "пять рублей").
    pub fn agree_form(&self, case: Case, count: u64) -> &str {
        match count_category(count) {
            CountCategory::One => &self.singular[case.index()],
            CountCategory::Few => match case {
                Case::Nominative => &self.singular[Case::Genitive.index()],
                Case::Accusative => match self.animacy {
                    // "вижу двух человек" but "вижу два стола"
                    Animacy::Animate => &self.plural[Case::Genitive.index()],
                    Animacy::Inanimate => &self.singular[Case::Genitive.index()],
                },
                _ => &self.plural[case.index()],
            },
            CountCategory::Many => match case {
                Case::Nominative | Case::Accusative => &self.plural[Case::Genitive.index()],
                _ => &self.plural[case.index()],
            },
        }
    }
}

/// Agree a quantity with a noun paradigm across all six cases.
///
/// An integral quantity renders "<count> <noun-form>" per case; a
/// fractional quantity keeps the noun in the genitive singular
/// ("пять целых три десятых метра").
pub fn agree(value: &Decimal, paradigm: &NounParadigm) -> CaseForms {
    if value.fraction().is_some() {
        let genitive = &paradigm.singular[Case::Genitive.index()];
        return CaseForms::from_fn(|case| {
            let quantity =
                cardinal::render_decimal(value, case, paradigm.gender(), paradigm.animacy());
            format!("{quantity} {genitive}")
        });
    }

    let count = value.integer();
    CaseForms::from_fn(|case| {
        let quantity =
            cardinal::render_unsigned(count, case, paradigm.gender(), paradigm.animacy());
        let noun = paradigm.agree_form(case, count);
        let form = format!("{quantity} {noun}");
        if value.is_negative() {
            format!("минус {form}")
        } else {
            form
        }
    })
}

/// Agree a quantity with a currency preset, rendering the minor part when
/// the value carries fractional digits ("пять рублей тридцать копеек").
pub fn agree_currency(value: &Decimal, currency: &Currency) -> CaseForms {
    let major_count = value.integer();
    let minor_count = value.minor_units(currency.minor_digits());

    CaseForms::from_fn(|case| {
        let major = currency.major();
        let quantity =
            cardinal::render_unsigned(major_count, case, major.gender(), major.animacy());
        let mut form = format!("{quantity} {}", major.agree_form(case, major_count));
        if let Some(minor_count) = minor_count {
            let minor = currency.minor();
            let minor_quantity =
                cardinal::render_unsigned(minor_count, case, minor.gender(), minor.animacy());
            form.push_str(&format!(
                " {minor_quantity} {}",
                minor.agree_form(case, minor_count)
            ));
        }
        form
    })
}

/// Resolve a noun token and agree the quantity with it.
///
/// The four currency literals take precedence over the lexicon, matching
/// the request dispatcher's contract.
pub fn decline_with_noun(value: &Decimal, noun: &str) -> Result<CaseForms> {
    if let Some(preset) = currency(noun) {
        return Ok(agree_currency(value, preset));
    }
    match lookup(noun) {
        Some(paradigm) => Ok(agree(value, paradigm)),
        None => Err(DeclineError::UnknownNoun(noun.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_currency_counts() {
        let forms = decline_with_noun(&dec("1"), "рубль").unwrap();
        assert_eq!(forms.get(Case::Nominative), "один рубль");
        let forms = decline_with_noun(&dec("2"), "рубль").unwrap();
        assert_eq!(forms.get(Case::Nominative), "два рубля");
        let forms = decline_with_noun(&dec("5"), "рубль").unwrap();
        assert_eq!(forms.get(Case::Nominative), "пять рублей");
        let forms = decline_with_noun(&dec("12"), "рубль").unwrap();
        assert_eq!(forms.get(Case::Nominative), "двенадцать рублей");
    }

    #[test]
    fn test_currency_minor_part() {
        let forms = decline_with_noun(&dec("5.30"), "рубль").unwrap();
        assert_eq!(
            forms.get(Case::Nominative),
            "пять рублей тридцать копеек"
        );
        let forms = decline_with_noun(&dec("1.01"), "доллар").unwrap();
        assert_eq!(forms.get(Case::Nominative), "один доллар один цент");
    }

    #[test]
    fn test_currency_oblique() {
        let forms = decline_with_noun(&dec("5"), "доллар").unwrap();
        assert_eq!(forms.get(Case::Dative), "пяти долларам");
        assert_eq!(forms.get(Case::Instrumental), "пятью долларами");
    }

    #[test]
    fn test_lexicon_nouns() {
        let forms = decline_with_noun(&dec("21"), "книга").unwrap();
        assert_eq!(forms.get(Case::Nominative), "двадцать одна книга");
        let forms = decline_with_noun(&dec("3"), "стол").unwrap();
        assert_eq!(forms.get(Case::Nominative), "три стола");
        let forms = decline_with_noun(&dec("5"), "год").unwrap();
        assert_eq!(forms.get(Case::Nominative), "пять лет");
    }

    #[test]
    fn test_fractional_noun_takes_genitive_singular() {
        let forms = decline_with_noun(&dec("5.3"), "метр").unwrap();
        assert_eq!(
            forms.get(Case::Nominative),
            "пять целых три десятых метра"
        );
    }

    #[test]
    fn test_unknown_noun() {
        assert_eq!(
            decline_with_noun(&dec("5"), "абракадабра"),
            Err(DeclineError::UnknownNoun("абракадабра".to_string()))
        );
    }
}
