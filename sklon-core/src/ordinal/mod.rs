//! Ordinal numeral declension.
//!
//! Decomposes an integer into named components (units, teens, tens,
//! hundreds, and the power-of-ten grouping words) and inflects the
//! dominant component for the requested case, gender and plurality.
//! Per Russian convention only the final word of a compound ordinal is
//! inflected; any higher-magnitude remainder is rendered as an
//! uninflected cardinal prefix ("сто двадцатый").

mod suffix;
mod tables;

use crate::cardinal;
use crate::error::{DeclineError, Result};
use crate::grammar::{Animacy, Case, CaseForms, Gender, Plurality};

use suffix::OrdinalStem;
use tables::{exponent_word, named_word, EXPONENTS, MULTIPLIERS, WORDS, ZERO_WORD};

/// Decline a non-negative integer as an ordinal numeral.
///
/// # Errors
///
/// Returns [`DeclineError::InvalidNumber`] for negative input.
pub fn decline(number: i64, case: Case, gender: Gender, plurality: Plurality) -> Result<String> {
    if number < 0 {
        return Err(DeclineError::InvalidNumber(number.to_string()));
    }
    Ok(decline_unchecked(number, case, gender, plurality))
}

/// All six case forms for a fixed gender and plurality, in canonical order.
pub fn decline_all(number: i64, gender: Gender, plurality: Plurality) -> Result<CaseForms> {
    if number < 0 {
        return Err(DeclineError::InvalidNumber(number.to_string()));
    }
    Ok(CaseForms::from_fn(|case| {
        decline_unchecked(number, case, gender, plurality)
    }))
}

pub(crate) fn decline_unchecked(
    number: i64,
    case: Case,
    gender: Gender,
    plurality: Plurality,
) -> String {
    // Simple numeral: zero, a named word, or a bare exponent.
    if number == 0 {
        return OrdinalStem::new(0, ZERO_WORD).inflect(case, gender, plurality);
    }
    if let Some(word) = named_word(number).or_else(|| exponent_word(number)) {
        return OrdinalStem::new(number, word).inflect(case, gender, plurality);
    }

    compound(number, case, gender)
}

/// Compound numeral: find the dominant component, inflect it, and render
/// whatever remains as a cardinal prefix. The requested plurality applies
/// only to simple numerals, so the dominant component here is singular.
fn compound(mut number: i64, case: Case, gender: Gender) -> String {
    let mut ordinal_part: Option<String> = None;

    // Exponent-aligned: scan largest-first so higher magnitudes win.
    for &(exponent, _) in EXPONENTS.iter().rev() {
        if number >= exponent && number % exponent == 0 {
            let mut count = (number / exponent) % 1000;
            number -= count * exponent;

            // Greedy multiplier prefix, one descending sweep. A residue of
            // one is implicit: count 1 has no fragment ("тысячный").
            let mut prefix = String::new();
            for &(multiplier, fragment) in MULTIPLIERS.iter().rev() {
                if count >= multiplier {
                    prefix.push_str(fragment);
                    count -= multiplier;
                }
            }
            debug_assert!(count <= 1, "multiplier sweep left residue {count}");

            let inflected = decline_unchecked(exponent, case, gender, Plurality::Singular);
            ordinal_part = Some(format!("{prefix}{inflected}"));
            break;
        }
    }

    // Named-word fallback: walk the table in its native ascending order and
    // take the first candidate passing the tie-break filters.
    if ordinal_part.is_none() {
        for &(word_number, _) in WORDS {
            if number < word_number {
                continue;
            }
            if word_number <= 9 {
                // Never pick a digit word when the low digit is zero.
                if number % 10 == 0 {
                    continue;
                }
                // The candidate must match the actual low digit.
                if number % 10 > word_number {
                    continue;
                }
                // Prefer a teen word when the low two digits name one.
                if named_word(number % 100).is_some() && number % 100 > word_number {
                    continue;
                }
            } else if word_number <= 90 && number % 100 > word_number {
                continue;
            }
            ordinal_part = Some(decline_unchecked(word_number, case, gender, Plurality::Singular));
            number -= word_number;
            break;
        }
    }

    let ordinal_part = ordinal_part.unwrap_or_default();

    // The tens/units remainder is rendered in uninflected cardinal form.
    if number > 0 {
        let remainder = cardinal::render(number, Case::Nominative, gender, Animacy::Inanimate);
        format!("{remainder} {ordinal_part}")
    } else {
        ordinal_part
    }
}
