//! Cardinal numeral declension.
//!
//! Renders integers and decimal values in all six cases, with gender and
//! animacy agreement on the numerals 1–4 and count agreement on the
//! power-of-thousand grouping nouns.

mod tables;

use std::fmt;
use std::str::FromStr;

use crate::error::{DeclineError, Result};
use crate::grammar::{count_category, Animacy, Case, CaseForms, CountCategory, Gender, Plurality};
use crate::ordinal;

use tables::{hundreds, teen, tens, unit, whole_part, SCALES, ZERO};

/// The particle prepended to negative values.
const MINUS: &str = "минус";

/// Render one case form of an integer.
pub fn render(value: i64, case: Case, gender: Gender, animacy: Animacy) -> String {
    if value < 0 {
        format!("{MINUS} {}", render_unsigned(value.unsigned_abs(), case, gender, animacy))
    } else {
        render_unsigned(value as u64, case, gender, animacy)
    }
}

/// All six case forms of an integer, in canonical order.
pub fn decline(value: i64, gender: Gender, animacy: Animacy) -> CaseForms {
    CaseForms::from_fn(|case| render(value, case, gender, animacy))
}

/// All six case forms of a decimal value.
///
/// An integral value declines like [`decline`]; a fractional value renders
/// as "<int> целых <frac> <denominator>" with feminine agreement on both
/// numeric parts, the denominator being an ordinal form ("десятая",
/// "сотых") produced by the ordinal engine.
pub fn decline_decimal(value: &Decimal, gender: Gender, animacy: Animacy) -> CaseForms {
    CaseForms::from_fn(|case| render_decimal(value, case, gender, animacy))
}

/// Render one case form of a decimal value.
pub fn render_decimal(value: &Decimal, case: Case, gender: Gender, animacy: Animacy) -> String {
    let Some(fraction) = value.fraction() else {
        let body = render_unsigned(value.integer(), case, gender, animacy);
        return if value.is_negative() {
            format!("{MINUS} {body}")
        } else {
            body
        };
    };

    // Fractions force feminine agreement: "целая" and the ordinal
    // denominator are feminine adjective forms.
    let int_part = render_unsigned(value.integer(), case, Gender::Feminine, Animacy::Inanimate);
    let whole = whole_part(case, value.integer());
    let frac_part = render_unsigned(fraction.count, case, Gender::Feminine, Animacy::Inanimate);
    let denominator = denominator_form(fraction.denominator, case, fraction.count);

    let body = format!("{int_part} {whole} {frac_part} {denominator}");
    if value.is_negative() {
        format!("{MINUS} {body}")
    } else {
        body
    }
}

fn denominator_form(denominator: i64, case: Case, count: u64) -> String {
    match count_category(count) {
        CountCategory::One => {
            ordinal::decline_unchecked(denominator, case, Gender::Feminine, Plurality::Singular)
        }
        _ => {
            let case = match case {
                Case::Nominative | Case::Accusative => Case::Genitive,
                other => other,
            };
            ordinal::decline_unchecked(denominator, case, Gender::Feminine, Plurality::Plural)
        }
    }
}

pub(crate) fn render_unsigned(value: u64, case: Case, gender: Gender, animacy: Animacy) -> String {
    if value == 0 {
        return ZERO[case.index()].to_string();
    }

    // Base-1000 digits, lowest group first.
    let mut groups = Vec::new();
    let mut rest = value;
    while rest > 0 {
        groups.push(rest % 1000);
        rest /= 1000;
    }

    let mut words: Vec<&'static str> = Vec::new();
    for scale in (0..groups.len()).rev() {
        let group = groups[scale];
        if group == 0 {
            continue;
        }
        let (group_gender, group_animacy) = if scale == 0 {
            (gender, animacy)
        } else {
            (SCALES[scale - 1].gender, Animacy::Inanimate)
        };
        push_group(group, case, group_gender, group_animacy, &mut words);
        if scale > 0 {
            words.push(SCALES[scale - 1].form(case, group));
        }
    }
    words.join(" ")
}

/// Append the words of one 1..=999 group.
fn push_group(group: u64, case: Case, gender: Gender, animacy: Animacy, out: &mut Vec<&'static str>) {
    let h = group / 100;
    let rest = group % 100;
    if h > 0 {
        out.push(hundreds(h, case));
    }
    if (10..=19).contains(&rest) {
        out.push(teen(rest, case));
    } else {
        let t = rest / 10;
        let u = rest % 10;
        if t >= 2 {
            out.push(tens(t, case));
        }
        if u > 0 {
            out.push(unit(u, case, gender, animacy));
        }
    }
}

/// The fractional part of a [`Decimal`]: the digit count and the
/// power-of-ten denominator it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    /// Numerator read from the fractional digits ("30" → 30)
    pub count: u64,
    /// 10, 100, 1000 or 10000, by digit count
    pub denominator: i64,
}

/// A parsed decimal value: sign, integer part and optional fraction.
///
/// At most four fractional digits are honored (десятых … десятитысячных);
/// longer fractions are rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    negative: bool,
    integer: u64,
    fraction_digits: Option<String>,
}

impl Decimal {
    /// Construct from an integer.
    pub fn from_int(value: i64) -> Self {
        Decimal {
            negative: value < 0,
            integer: value.unsigned_abs(),
            fraction_digits: None,
        }
    }

    /// Whether the value carries a minus sign.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The integer part, sign dropped.
    pub fn integer(&self) -> u64 {
        self.integer
    }

    /// The fractional part, if any digits were present.
    pub fn fraction(&self) -> Option<Fraction> {
        let digits = self.fraction_digits.as_deref()?;
        let count = digits.parse().ok()?;
        Some(Fraction {
            count,
            denominator: 10i64.pow(digits.len() as u32),
        })
    }

    /// The fractional digits scaled to a fixed width ("3" → 30 for
    /// width 2), used for currency minor units. `None` when integral.
    pub fn minor_units(&self, width: usize) -> Option<u64> {
        let digits = self.fraction_digits.as_deref()?;
        let mut padded = digits.to_string();
        while padded.len() < width {
            padded.push('0');
        }
        padded[..width].parse().ok()
    }
}

impl FromStr for Decimal {
    type Err = DeclineError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let err = || DeclineError::InvalidNumber(s.to_string());

        let (negative, digits) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token.strip_prefix('+').unwrap_or(token)),
        };

        // Accept both the dot and the comma as the decimal separator.
        let mut parts = digits.splitn(2, ['.', ',']);
        let int_token = parts.next().unwrap_or("");
        let frac_token = parts.next();

        if int_token.is_empty() || !int_token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let integer: u64 = int_token.parse().map_err(|_| err())?;

        let fraction_digits = match frac_token {
            None | Some("") => None,
            Some(frac) => {
                if frac.len() > 4 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(err());
                }
                Some(frac.to_string())
            }
        };

        Ok(Decimal {
            negative,
            integer,
            fraction_digits,
        })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.integer)?;
        if let Some(digits) = &self.fraction_digits {
            write!(f, ".{digits}")?;
        }
        Ok(())
    }
}
