//! Fixed currency presets.
//!
//! Four literals are recognized on the wire: рубль, доллар, евро, юань.
//! Each carries a major and a minor paradigm; the minor part renders only
//! when the requested value has fractional digits.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::NounParadigm;
use crate::grammar::{Animacy, Gender};

/// A currency preset: major unit, minor unit, minor digit width.
#[derive(Debug, Clone)]
pub struct Currency {
    major: NounParadigm,
    minor: NounParadigm,
}

impl Currency {
    /// The major-unit paradigm ("рубль").
    pub fn major(&self) -> &NounParadigm {
        &self.major
    }

    /// The minor-unit paradigm ("копейка").
    pub fn minor(&self) -> &NounParadigm {
        &self.minor
    }

    /// Number of fractional digits the minor unit spans.
    pub fn minor_digits(&self) -> usize {
        2
    }
}

static CURRENCIES: OnceLock<HashMap<&'static str, Currency>> = OnceLock::new();

/// The recognized currency literals, in wire order.
pub fn currency_tokens() -> [&'static str; 4] {
    ["рубль", "доллар", "евро", "юань"]
}

/// Look up a currency preset by its wire literal.
pub fn currency(token: &str) -> Option<&'static Currency> {
    CURRENCIES.get_or_init(build).get(token)
}

fn paradigm(gender: Gender, singular: [&str; 6], plural: [&str; 6]) -> NounParadigm {
    NounParadigm::new(
        gender,
        Animacy::Inanimate,
        singular.map(str::to_string),
        plural.map(str::to_string),
    )
}

fn build() -> HashMap<&'static str, Currency> {
    let kopeck = || {
        paradigm(
            Gender::Feminine,
            ["копейка", "копейки", "копейке", "копейку", "копейкой", "копейке"],
            ["копейки", "копеек", "копейкам", "копейки", "копейками", "копейках"],
        )
    };
    let cent = || {
        paradigm(
            Gender::Masculine,
            ["цент", "цента", "центу", "цент", "центом", "центе"],
            ["центы", "центов", "центам", "центы", "центами", "центах"],
        )
    };

    let mut map = HashMap::new();
    map.insert(
        "рубль",
        Currency {
            major: paradigm(
                Gender::Masculine,
                ["рубль", "рубля", "рублю", "рубль", "рублем", "рубле"],
                ["рубли", "рублей", "рублям", "рубли", "рублями", "рублях"],
            ),
            minor: kopeck(),
        },
    );
    map.insert(
        "доллар",
        Currency {
            major: paradigm(
                Gender::Masculine,
                ["доллар", "доллара", "доллару", "доллар", "долларом", "долларе"],
                ["доллары", "долларов", "долларам", "доллары", "долларами", "долларах"],
            ),
            minor: cent(),
        },
    );
    map.insert(
        "евро",
        Currency {
            // Indeclinable masculine loanword: one surface form throughout.
            major: paradigm(
                Gender::Masculine,
                ["евро"; 6],
                ["евро"; 6],
            ),
            minor: cent(),
        },
    );
    map.insert(
        "юань",
        Currency {
            major: paradigm(
                Gender::Masculine,
                ["юань", "юаня", "юаню", "юань", "юанем", "юане"],
                ["юани", "юаней", "юаням", "юани", "юанями", "юанях"],
            ),
            minor: paradigm(
                Gender::Masculine,
                ["фэнь", "фэня", "фэню", "фэнь", "фэнем", "фэне"],
                ["фэни", "фэней", "фэням", "фэни", "фэнями", "фэнях"],
            ),
        },
    );
    map
}
