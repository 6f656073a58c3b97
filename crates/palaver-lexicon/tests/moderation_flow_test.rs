//! Moderation flow tests
//!
//! Drives the engine the way the message path does: load lexicons at
//! startup, analyze traffic, mutate through the admin surface, analyze
//! again.

use palaver_lexicon::{
    LexiconConfig, TrieKind, ValidationError, WordProtectionEngine,
};

fn startup_engine() -> WordProtectionEngine {
    WordProtectionEngine::with_config(&LexiconConfig {
        banned_words: vec!["viagra".into(), "lottery".into()],
        banned_replacement: "***".into(),
        spam_patterns: vec!["free money".into(), "act now".into()],
        dictionary_words: vec![
            "buy".into(),
            "cheap".into(),
            "now".into(),
            "hello".into(),
            "world".into(),
            "receive".into(),
        ],
    })
}

#[test]
fn dirty_message_is_flagged_and_filtered() {
    let engine = startup_engine();
    let analysis = engine.analyze_message("buy cheap viagra now").unwrap();

    assert!(!analysis.is_clean);
    assert_eq!(analysis.banned_words.len(), 1);
    assert_eq!(analysis.banned_words[0].word, "viagra");
    assert_eq!(analysis.banned_words[0].replacement, "***");
    assert_eq!(analysis.filtered_message, "buy cheap *** now");
}

#[test]
fn clean_message_passes_through_unchanged() {
    let engine = startup_engine();
    let analysis = engine.analyze_message("hello world").unwrap();

    assert!(analysis.is_clean);
    assert!(analysis.banned_words.is_empty());
    assert!(analysis.spam_matches.is_empty());
    assert!(analysis.spelling.is_empty());
    assert_eq!(analysis.filtered_message, "hello world");
}

#[test]
fn spam_match_marks_unclean_even_with_clean_words() {
    let engine = startup_engine();
    let analysis = engine.analyze_message("hello act now world").unwrap();

    assert!(!analysis.is_clean);
    assert_eq!(analysis.spam_matches.len(), 1);
    assert_eq!(analysis.spam_matches[0].pattern, "act now");
    // Spam is reported, never rewritten.
    assert_eq!(analysis.filtered_message, "hello act now world");
}

#[test]
fn newly_banned_word_takes_effect_immediately() {
    let mut engine = startup_engine();

    assert!(engine.analyze_message("total grift").unwrap().banned_words.is_empty());

    engine.add_banned_word("grift", "[removed]").unwrap();
    let analysis = engine.analyze_message("total grift").unwrap();
    assert_eq!(analysis.banned_words.len(), 1);
    assert_eq!(analysis.filtered_message, "total [removed]");

    assert!(engine.remove_banned_word("grift"));
    assert!(engine.analyze_message("total grift").unwrap().banned_words.is_empty());
}

#[test]
fn user_dictionary_feeds_autocomplete_but_not_spell_check() {
    let mut engine = startup_engine();
    engine.add_user_word("u-42", "palaverite").unwrap();

    let completions = engine.autocomplete("palav", TrieKind::User);
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].word, "palaverite");

    // Spell-check consults only the shared dictionary.
    let analysis = engine.analyze_message("palaverite").unwrap();
    assert_eq!(analysis.spelling.len(), 1);
}

#[test]
fn stats_track_admin_mutations() {
    let mut engine = startup_engine();
    let before = engine.stats();
    assert_eq!(before.banned_words, 2);
    assert_eq!(before.total_words, 2 + 2 + 6);

    engine.add_banned_word("grift", "***").unwrap();
    engine.add_user_word("u-42", "palaverite").unwrap();

    let after = engine.stats();
    assert_eq!(after.banned_words, 3);
    assert_eq!(after.user_words, 1);
    assert_eq!(after.total_words, before.total_words + 2);
}

#[test]
fn analysis_requires_a_non_blank_message() {
    let engine = startup_engine();
    assert_eq!(engine.analyze_message("\t \n"), Err(ValidationError::EmptyMessage));
}
