//! Line-oriented request dispatch.
//!
//! One record is `value[:modifier]*` optionally followed by `|noun`.
//! Modifiers select case, gender, plurality, the ordinal engine, or the
//! all-forms rendering; unknown modifiers are ignored and leave the
//! defaults (nominative, masculine, singular, cardinal) in effect.
//! Every failure is caught at the record boundary and replaced by the
//! failure token, so a bad record never poisons its batch siblings.

use crate::agreement;
use crate::cardinal::{self, Decimal};
use crate::error::{DeclineError, Result};
use crate::grammar::{Animacy, Case, Gender, Plurality};
use crate::ordinal;

/// Separator between records of one request message.
pub const BATCH_SEPARATOR: &str = ";";
/// Separator between the value field and the noun field.
pub const FIELD_SEPARATOR: &str = "|";
/// Separator between the value and its modifier tokens.
pub const MODIFIER_SEPARATOR: &str = ":";
/// Separator between the six case forms of an all-forms reply.
pub const CASE_LIST_SEPARATOR: &str = ":";
/// Literal substituted for a record that failed to process.
pub const FAILURE_TOKEN: &str = "error";
/// Reserved request body that terminates the server loop.
pub const SHUTDOWN_SENTINEL: &str = "exit";

/// Wire token of a grammatical case.
pub fn case_token(case: Case) -> &'static str {
    match case {
        Case::Nominative => "им",
        Case::Genitive => "рд",
        Case::Dative => "дт",
        Case::Accusative => "вн",
        Case::Instrumental => "тв",
        Case::Prepositional => "пр",
    }
}

/// Wire token of a grammatical gender.
pub fn gender_token(gender: Gender) -> &'static str {
    match gender {
        Gender::Masculine => "мр",
        Gender::Feminine => "жр",
        Gender::Neuter => "ср",
    }
}

#[derive(Debug, Clone, Copy)]
struct RecordOptions {
    case: Case,
    gender: Gender,
    plurality: Plurality,
    ordinal: bool,
    all_cases: bool,
}

impl Default for RecordOptions {
    fn default() -> Self {
        RecordOptions {
            case: Case::Nominative,
            gender: Gender::Masculine,
            plurality: Plurality::Singular,
            ordinal: false,
            all_cases: false,
        }
    }
}

impl RecordOptions {
    /// Apply one modifier token. Trailing digits are stripped first so
    /// alternate spellings of a label ("им2") match its base form;
    /// anything unrecognized is silently ignored.
    fn apply(&mut self, token: &str) {
        let token = token.trim_end_matches(|c: char| c.is_ascii_digit());
        match token {
            "им" => self.case = Case::Nominative,
            "рд" => self.case = Case::Genitive,
            "дт" => self.case = Case::Dative,
            "вн" => self.case = Case::Accusative,
            "тв" => self.case = Case::Instrumental,
            "пр" => self.case = Case::Prepositional,
            "мр" => self.gender = Gender::Masculine,
            "жр" => self.gender = Gender::Feminine,
            "ср" => self.gender = Gender::Neuter,
            "мн" => self.plurality = Plurality::Plural,
            "all" => self.all_cases = true,
            "ordinal" => self.ordinal = true,
            _ => {}
        }
    }
}

/// Process one record, never failing: any error becomes [`FAILURE_TOKEN`].
pub fn process_record(record: &str) -> String {
    try_record(record).unwrap_or_else(|_| FAILURE_TOKEN.to_string())
}

/// Process a whole request message: split into records, process each in
/// order, and re-join the results in the same order.
pub fn process_batch(batch: &str) -> String {
    batch
        .split(BATCH_SEPARATOR)
        .map(process_record)
        .collect::<Vec<_>>()
        .join(BATCH_SEPARATOR)
}

fn try_record(record: &str) -> Result<String> {
    let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();

    let mut parts = fields[0].split(MODIFIER_SEPARATOR);
    let value_token = parts.next().unwrap_or_default();
    let mut opts = RecordOptions::default();
    for token in parts {
        opts.apply(token);
    }

    match fields.len() {
        1 => render_bare(value_token, &opts),
        2 => render_with_noun(value_token, fields[1], &opts),
        n => Err(DeclineError::MalformedRecord(n)),
    }
}

fn render_bare(value_token: &str, opts: &RecordOptions) -> Result<String> {
    if opts.ordinal {
        let number = parse_ordinal_token(value_token)?;
        if opts.all_cases {
            let forms = ordinal::decline_all(number, opts.gender, opts.plurality)?;
            Ok(forms.join(CASE_LIST_SEPARATOR))
        } else {
            ordinal::decline(number, opts.case, opts.gender, opts.plurality)
        }
    } else {
        let value: Decimal = value_token.parse()?;
        let forms = cardinal::decline_decimal(&value, opts.gender, Animacy::Inanimate);
        if opts.all_cases {
            Ok(forms.join(CASE_LIST_SEPARATOR))
        } else {
            Ok(forms.get(opts.case).to_string())
        }
    }
}

fn render_with_noun(value_token: &str, noun: &str, opts: &RecordOptions) -> Result<String> {
    if opts.ordinal {
        // The noun rides along uninflected after each ordinal form.
        let number = parse_ordinal_token(value_token)?;
        if opts.all_cases {
            let forms = ordinal::decline_all(number, opts.gender, opts.plurality)?;
            let joined: Vec<String> = forms.iter().map(|form| format!("{form} {noun}")).collect();
            Ok(joined.join(CASE_LIST_SEPARATOR))
        } else {
            let form = ordinal::decline(number, opts.case, opts.gender, opts.plurality)?;
            Ok(format!("{form} {noun}"))
        }
    } else {
        let value: Decimal = value_token.parse()?;
        let forms = agreement::decline_with_noun(&value, noun)?;
        if opts.all_cases {
            Ok(forms.join(CASE_LIST_SEPARATOR))
        } else {
            Ok(forms.get(opts.case).to_string())
        }
    }
}

/// Ordinal tokens may carry grouping punctuation ("1.000.000"); strip it
/// before parsing. Cardinal tokens keep their separators; there the dot
/// is a decimal point.
fn parse_ordinal_token(token: &str) -> Result<i64> {
    let cleaned: String = token.chars().filter(|c| *c != '.' && *c != ',').collect();
    cleaned
        .parse()
        .map_err(|_| DeclineError::InvalidNumber(token.to_string()))
}
