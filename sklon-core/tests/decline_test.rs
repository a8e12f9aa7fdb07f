//! Integration tests exercising the public declension API end to end.

use sklon_core::{cardinal, ordinal, process_batch, process_record};
use sklon_core::{Animacy, Case, Gender, Plurality};

#[test]
fn test_reference_ordinal_forms() {
    let nom =
        |n| ordinal::decline(n, Case::Nominative, Gender::Masculine, Plurality::Singular).unwrap();
    assert_eq!(nom(0), "нулевой");
    assert_eq!(nom(1), "первый");
    assert_eq!(nom(3), "третий");
    assert_eq!(nom(1_000), "тысячный");
    assert_eq!(nom(2_000), "двухтысячный");
    assert_eq!(
        ordinal::decline(3, Case::Dative, Gender::Feminine, Plurality::Singular).unwrap(),
        "третьей"
    );
}

#[test]
fn test_all_forms_rendering_matches_single_case_calls() {
    // The all-forms rendering must equal the per-case calls position by
    // position, in canonical case order.
    for &n in &[0, 3, 7, 21, 40, 113, 344, 1_000, 2_000, 234_000, 1_000_001] {
        for gender in [Gender::Masculine, Gender::Feminine, Gender::Neuter] {
            for plurality in [Plurality::Singular, Plurality::Plural] {
                let all = ordinal::decline_all(n, gender, plurality).unwrap();
                for case in Case::ALL {
                    assert_eq!(
                        all.get(case),
                        ordinal::decline(n, case, gender, plurality).unwrap(),
                        "n={n} case={case:?} gender={gender:?} plurality={plurality:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_decline_terminates_across_magnitudes() {
    let samples = [
        0,
        9,
        10,
        19,
        20,
        99,
        100,
        101,
        110,
        111,
        999,
        1_000,
        1_001,
        999_999,
        1_000_000,
        1_000_001,
        123_456_789,
        1_000_000_000_000,
        5_000_000_000_000_000,
        i64::MAX,
    ];
    for n in samples {
        for case in Case::ALL {
            let word =
                ordinal::decline(n, case, Gender::Masculine, Plurality::Singular).unwrap();
            assert!(!word.is_empty(), "empty ordinal for {n} in {case:?}");
            let cardinal_word = cardinal::render(n, case, Gender::Masculine, Animacy::Inanimate);
            assert!(!cardinal_word.is_empty(), "empty cardinal for {n} in {case:?}");
        }
    }
}

#[test]
fn test_only_final_word_of_compound_ordinal_inflects() {
    // "сто тринадцатому": the remainder stays in nominative cardinal shape.
    assert_eq!(
        ordinal::decline(113, Case::Dative, Gender::Masculine, Plurality::Singular).unwrap(),
        "сто тринадцатому"
    );
    assert_eq!(
        ordinal::decline(344, Case::Genitive, Gender::Feminine, Plurality::Singular).unwrap(),
        "триста сорок четвертой"
    );
}

#[test]
fn test_dispatcher_reference_records() {
    assert_eq!(process_record("5:ordinal"), "пятый");
    assert_eq!(process_record("5:ordinal:жр"), "пятая");
    assert_eq!(
        process_record("5:ordinal:жр:all"),
        "пятая:пятой:пятой:пятую:пятой:пятой"
    );
    assert_eq!(process_record("abc"), "error");
    assert_eq!(process_record("1|2|3"), "error");
}

#[test]
fn test_batch_round_trip() {
    let reply = process_batch("5:ordinal;5|рубль;abc;2000:ordinal");
    assert_eq!(reply, "пятый;пять рублей;error;двухтысячный");
}
