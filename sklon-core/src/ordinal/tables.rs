//! Static name tables for ordinal decomposition.
//!
//! All three tables are ordered ascending by magnitude. Scan direction
//! matters: the compound fallback walks `WORDS` in this order (smallest
//! eligible component owns the inflection), while the exponent and
//! multiplier scans walk their tables largest-first.

/// Base ordinal word for the zero numeral.
pub(crate) const ZERO_WORD: &str = "нулевой";

/// Named ordinal base words: units, teens, round tens, round hundreds.
/// Masculine nominative singular; the last two characters are the
/// strippable "-ый/-ой" ending (3 is the sole irregular, see suffix.rs).
pub(crate) const WORDS: &[(i64, &str)] = &[
    (1, "первый"),
    (2, "второй"),
    (3, "третий"),
    (4, "четвертый"),
    (5, "пятый"),
    (6, "шестой"),
    (7, "седьмой"),
    (8, "восьмой"),
    (9, "девятый"),
    (10, "десятый"),
    (11, "одиннадцатый"),
    (12, "двенадцатый"),
    (13, "тринадцатый"),
    (14, "четырнадцатый"),
    (15, "пятнадцатый"),
    (16, "шестнадцатый"),
    (17, "семнадцатый"),
    (18, "восемнадцатый"),
    (19, "девятнадцатый"),
    (20, "двадцатый"),
    (30, "тридцатый"),
    (40, "сороковой"),
    (50, "пятидесятый"),
    (60, "шестидесятый"),
    (70, "семидесятый"),
    (80, "восьмидесятый"),
    (90, "девяностый"),
    (100, "сотый"),
    (200, "двухсотый"),
    (300, "трехсотый"),
    (400, "четырехсотый"),
    (500, "пятисотый"),
    (600, "шестисотый"),
    (700, "семисотый"),
    (800, "восемисотый"),
    (900, "девятисотый"),
];

/// Ordinal base words for the power-of-ten grouping magnitudes.
pub(crate) const EXPONENTS: &[(i64, &str)] = &[
    (1_000, "тысячный"),
    (1_000_000, "миллионный"),
    (1_000_000_000, "миллиардный"),
    (1_000_000_000_000, "триллионный"),
];

/// Genitive-style prefix fragments for exponent counts
/// ("двух" + "тысячный" = 2000th). A count of 1 has no entry: the bare
/// exponent word is already the 1-count form.
pub(crate) const MULTIPLIERS: &[(i64, &str)] = &[
    (2, "двух"),
    (3, "трех"),
    (4, "четырех"),
    (5, "пяти"),
    (6, "шести"),
    (7, "седьми"),
    (8, "восьми"),
    (9, "девяти"),
    (10, "десяти"),
    (11, "одиннадцати"),
    (12, "двенадцати"),
    (13, "тринадцати"),
    (14, "четырнадцати"),
    (15, "пятнадцати"),
    (16, "шестнадцати"),
    (17, "семнадцати"),
    (18, "восемнадцати"),
    (19, "девятнадцати"),
    (20, "двадцати"),
    (30, "тридцати"),
    (40, "сорока"),
    (50, "пятьдесяти"),
    (60, "шестьдесяти"),
    (70, "семьдесяти"),
    (80, "восемьдесяти"),
    (90, "девяности"),
    (100, "сто"),
    (200, "двухста"),
    (300, "трехста"),
    (400, "четырехста"),
    (500, "пятиста"),
    (600, "шестиста"),
    (700, "семиста"),
    (800, "восемиста"),
    (900, "девятиста"),
];

/// Look up the named ordinal word for an exact magnitude.
pub(crate) fn named_word(n: i64) -> Option<&'static str> {
    WORDS
        .iter()
        .find(|&&(magnitude, _)| magnitude == n)
        .map(|&(_, word)| word)
}

/// Look up the exponent ordinal word for an exact magnitude.
pub(crate) fn exponent_word(n: i64) -> Option<&'static str> {
    EXPONENTS
        .iter()
        .find(|&&(magnitude, _)| magnitude == n)
        .map(|&(_, word)| word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_ascending() {
        assert!(WORDS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(EXPONENTS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(MULTIPLIERS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_lookups() {
        assert_eq!(named_word(1), Some("первый"));
        assert_eq!(named_word(300), Some("трехсотый"));
        assert_eq!(named_word(21), None);
        assert_eq!(exponent_word(1_000), Some("тысячный"));
        assert_eq!(exponent_word(999), None);
    }

    #[test]
    fn test_every_word_has_a_strippable_ending() {
        for &(n, word) in WORDS.iter().chain(EXPONENTS) {
            assert!(
                word.chars().count() > 2,
                "word for {n} is too short to carry an ending"
            );
        }
    }
}
