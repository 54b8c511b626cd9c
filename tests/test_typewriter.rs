//! Integration tests for the typewriter state machine.
//!
//! Tests cover:
//! - The reference timeline (two phrases, 100 ms per character, 2 s hold)
//! - The prefix and monotonicity invariants across many ticks
//! - Multi-byte (accented) phrases
//! - Degenerate phrase lists

mod common;

use std::time::Duration;

use common::*;

#[test]
fn test_reference_timeline() {
    // Phrases ["A", "BB"], speed 100 ms/char, hold 2000 ms.
    let mut tw = reference_typewriter(&["A", "BB"]);

    let type_delay = Duration::from_millis(100);
    let hold_delay = Duration::from_millis(2000);

    // 1. Initially empty, about to type.
    assert_eq!(tw.text(), "");
    assert_eq!(tw.phase(), Phase::Typing);
    assert_eq!(tw.delay(), type_delay);

    // 2. One tick shows the full first phrase, then the hold starts.
    tw.tick();
    assert_eq!(tw.text(), "A");
    assert_eq!(tw.phase(), Phase::Holding);
    assert_eq!(tw.delay(), hold_delay);

    // 3. The hold tick only transitions; the text is untouched.
    tw.tick();
    assert_eq!(tw.text(), "A");
    assert_eq!(tw.phase(), Phase::Deleting);
    assert_eq!(tw.delay(), type_delay);

    // 4. Deleting the single character advances to the next phrase.
    tw.tick();
    assert_eq!(tw.text(), "");
    assert_eq!(tw.phase(), Phase::Typing);

    // 5. "BB" builds up over two ticks, then holds.
    tw.tick();
    assert_eq!(tw.text(), "B");
    assert_eq!(tw.phase(), Phase::Typing);
    tw.tick();
    assert_eq!(tw.text(), "BB");
    assert_eq!(tw.phase(), Phase::Holding);

    // 6. Hold, delete twice, and the cycle wraps back to "A".
    tw.tick();
    assert_eq!(tw.phase(), Phase::Deleting);
    tw.tick();
    assert_eq!(tw.text(), "B");
    tw.tick();
    assert_eq!(tw.text(), "");
    assert_eq!(tw.phase(), Phase::Typing);
    tw.tick();
    assert_eq!(tw.text(), "A");
}

#[test]
fn test_text_is_always_a_phrase_prefix() {
    let phrases = ["Desenvolvedor Frontend", "Consultor SAP ABAP"];
    let mut tw = reference_typewriter(&phrases);

    for _ in 0..500 {
        tw.tick();
        let text = tw.text();
        assert!(
            phrases.iter().any(|phrase| phrase.starts_with(text)),
            "displayed text {text:?} is not a prefix of any phrase"
        );
    }
}

#[test]
fn test_length_is_monotonic_within_phases() {
    let mut tw = reference_typewriter(&["alpha", "beta"]);

    for _ in 0..300 {
        let phase_before = tw.phase();
        let len_before = tw.text().chars().count();
        tw.tick();
        let len_after = tw.text().chars().count();

        match (phase_before, tw.phase()) {
            (Phase::Typing, Phase::Typing) => assert_eq!(len_after, len_before + 1),
            (Phase::Deleting, Phase::Deleting) => assert_eq!(len_after, len_before - 1),
            (Phase::Holding, _) => assert_eq!(len_after, len_before),
            _ => {}
        }
    }
}

#[test]
fn test_accented_phrases_stay_on_char_boundaries() {
    let mut tw = reference_typewriter(&["portfólio", "conversão"]);

    // Ticking through several full cycles must never split a code point;
    // any panic here would come from slicing inside a multi-byte char.
    for _ in 0..200 {
        tw.tick();
        let _ = tw.text().to_string();
    }
}

#[test]
fn test_empty_phrase_list_is_inert() {
    let mut tw = Typewriter::new(Vec::<String>::new(), TypewriterConfig::default());

    assert_eq!(tw.text(), "");
    for _ in 0..10 {
        tw.tick();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
    }
}
