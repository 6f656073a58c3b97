//! The four-lexicon message analysis engine.
//!
//! Owns independent tries for banned words, spam patterns, the shared
//! dictionary, and per-user words. Word lists are supplied once at
//! construction ([`LexiconConfig`]); afterwards the lexicons change only
//! through the explicit admin operations.
//!
//! Absent words are never errors: every check yields empty results when
//! nothing matches.

use serde::{Deserialize, Serialize};

use crate::distance::levenshtein;
use crate::error::ValidationError;
use crate::trie::{Suggestion, Trie};

/// Replacement rendered for banned words when none is configured.
pub const DEFAULT_REPLACEMENT: &str = "***";

/// Edit-distance ceiling for spell-check candidates.
const MAX_EDIT_DISTANCE: usize = 2;

/// Spell-check suggestions returned per misspelled word.
const MAX_SPELLING_SUGGESTIONS: usize = 5;

/// Autocomplete suggestions returned per query.
const AUTOCOMPLETE_LIMIT: usize = 10;

/// Spam scanning examines at most this many leading characters.
///
/// The substring scan is quadratic in message length; the cap keeps a
/// pathological message from dominating analysis time.
const MAX_SCAN_LEN: usize = 4096;

/// Which lexicon an autocomplete query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrieKind {
    /// Banned-word lexicon.
    Banned,
    /// Spam-pattern lexicon.
    Spam,
    /// Per-user dictionary.
    User,
    /// Shared dictionary.
    Dictionary,
}

/// Metadata attached to lexicon entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WordMeta {
    /// A banned word and the text rendered in its place.
    Banned {
        /// Replacement shown instead of the word.
        replacement: String,
    },
    /// A spam pattern.
    Spam,
    /// A shared-dictionary word.
    Dictionary,
    /// A user-dictionary word.
    User {
        /// Identifier of the user who added the word.
        owner: String,
    },
}

/// Word lists consumed at process start.
#[derive(Debug, Clone)]
pub struct LexiconConfig {
    /// Words to filter out of messages.
    pub banned_words: Vec<String>,
    /// Replacement rendered for every banned word.
    pub banned_replacement: String,
    /// Substrings flagged as spam.
    pub spam_patterns: Vec<String>,
    /// Dictionary backing spell-check and autocomplete.
    pub dictionary_words: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            banned_words: Vec::new(),
            banned_replacement: DEFAULT_REPLACEMENT.to_owned(),
            spam_patterns: Vec::new(),
            dictionary_words: Vec::new(),
        }
    }
}

/// A banned token found in a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannedWordHit {
    /// The offending token, lowercased and stripped of punctuation.
    pub word: String,
    /// Text to render in its place.
    pub replacement: String,
}

/// A spam pattern found in a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpamMatch {
    /// The matched substring, lowercased.
    pub pattern: String,
}

/// A dictionary word proposed for a misspelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingSuggestion {
    /// The proposed word.
    pub word: String,
    /// Edit distance from the misspelled token.
    pub distance: usize,
}

/// A token that failed spell-check, with its suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingIssue {
    /// The token as it appeared, stripped of punctuation.
    pub word: String,
    /// Dictionary words within the edit-distance ceiling, closest first.
    pub suggestions: Vec<SpellingSuggestion>,
}

/// Outcome of a spell-check lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCheck {
    /// Whether the word is in the dictionary.
    pub correct: bool,
    /// Suggestions for incorrect words; empty for correct ones.
    pub suggestions: Vec<SpellingSuggestion>,
}

/// Full analysis of one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAnalysis {
    /// Banned tokens found.
    pub banned_words: Vec<BannedWordHit>,
    /// Spam substrings found, duplicates included.
    pub spam_matches: Vec<SpamMatch>,
    /// Tokens that failed spell-check.
    pub spelling: Vec<SpellingIssue>,
    /// The message with banned tokens replaced; equals the input when
    /// none were found.
    pub filtered_message: String,
    /// True iff no banned words and no spam patterns were found.
    /// Spelling issues alone do not mark a message unclean.
    pub is_clean: bool,
}

/// Word counts per lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconStats {
    /// Distinct banned words.
    pub banned_words: usize,
    /// Distinct spam patterns.
    pub spam_patterns: usize,
    /// Distinct shared-dictionary words.
    pub dictionary_words: usize,
    /// Distinct user-dictionary words.
    pub user_words: usize,
    /// Sum of the four counts.
    pub total_words: usize,
}

/// Content moderation over four independent lexicons.
#[derive(Debug, Clone, Default)]
pub struct WordProtectionEngine {
    banned: Trie<WordMeta>,
    spam: Trie<WordMeta>,
    dictionary: Trie<WordMeta>,
    user: Trie<WordMeta>,
}

impl WordProtectionEngine {
    /// Creates an engine with empty lexicons.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine pre-loaded from `config`.
    pub fn with_config(config: &LexiconConfig) -> Self {
        let mut engine = Self::new();
        let banned: Vec<&str> = config.banned_words.iter().map(String::as_str).collect();
        let spam: Vec<&str> = config.spam_patterns.iter().map(String::as_str).collect();
        let dictionary: Vec<&str> = config.dictionary_words.iter().map(String::as_str).collect();
        engine.load_banned_words(&banned, &config.banned_replacement);
        engine.load_spam_patterns(&spam);
        engine.load_dictionary(&dictionary);
        engine
    }

    /// Loads banned words, all sharing `replacement`. Empty entries are
    /// skipped.
    pub fn load_banned_words(&mut self, words: &[&str], replacement: &str) {
        for word in words {
            let meta = WordMeta::Banned { replacement: replacement.to_owned() };
            if self.banned.insert(word, Some(meta)).is_err() {
                tracing::warn!(lexicon = "banned", "skipping empty word-list entry");
            }
        }
        tracing::debug!(count = self.banned.len(), "banned lexicon loaded");
    }

    /// Loads spam patterns. Empty entries are skipped.
    pub fn load_spam_patterns(&mut self, patterns: &[&str]) {
        for pattern in patterns {
            if self.spam.insert(pattern, Some(WordMeta::Spam)).is_err() {
                tracing::warn!(lexicon = "spam", "skipping empty word-list entry");
            }
        }
        tracing::debug!(count = self.spam.len(), "spam lexicon loaded");
    }

    /// Loads dictionary words. Empty entries are skipped.
    pub fn load_dictionary(&mut self, words: &[&str]) {
        for word in words {
            if self.dictionary.insert(word, Some(WordMeta::Dictionary)).is_err() {
                tracing::warn!(lexicon = "dictionary", "skipping empty word-list entry");
            }
        }
        tracing::debug!(count = self.dictionary.len(), "dictionary loaded");
    }

    /// Adds words to `owner`'s personal dictionary. Empty entries are
    /// skipped.
    pub fn add_user_words(&mut self, owner: &str, words: &[&str]) {
        for word in words {
            let meta = WordMeta::User { owner: owner.to_owned() };
            if self.user.insert(word, Some(meta)).is_err() {
                tracing::warn!(lexicon = "user", "skipping empty word-list entry");
            }
        }
    }

    /// Adds one banned word with its replacement.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyWord`] for an empty `word`.
    pub fn add_banned_word(&mut self, word: &str, replacement: &str) -> Result<(), ValidationError> {
        self.banned.insert(word, Some(WordMeta::Banned { replacement: replacement.to_owned() }))
    }

    /// Removes a banned word; returns whether it was present.
    pub fn remove_banned_word(&mut self, word: &str) -> bool {
        self.banned.delete(word)
    }

    /// Adds one word to `owner`'s personal dictionary.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyWord`] for an empty `word`.
    pub fn add_user_word(&mut self, owner: &str, word: &str) -> Result<(), ValidationError> {
        self.user.insert(word, Some(WordMeta::User { owner: owner.to_owned() }))
    }

    /// Finds banned tokens in `text`.
    ///
    /// Tokens are whitespace-separated; each is stripped to its
    /// alphanumeric-and-underscore stem before the exact, case-insensitive
    /// lookup.
    pub fn check_banned_words(&self, text: &str) -> Vec<BannedWordHit> {
        text.split_whitespace()
            .filter_map(|token| {
                let stem = stem(token);
                if stem.is_empty() {
                    return None;
                }
                let hit = self.banned.search(&stem)?;
                let replacement = match hit.meta {
                    Some(WordMeta::Banned { replacement }) => replacement.clone(),
                    _ => DEFAULT_REPLACEMENT.to_owned(),
                };
                Some(BannedWordHit { word: stem.to_lowercase(), replacement })
            })
            .collect()
    }

    /// Replaces each banned token's stem with its configured replacement.
    ///
    /// Punctuation around the stem survives; clean tokens pass through
    /// untouched. Tokens are re-joined with single spaces.
    pub fn filter_message(&self, text: &str) -> String {
        let filtered: Vec<String> = text
            .split_whitespace()
            .map(|token| {
                let stem = stem(token);
                if stem.is_empty() {
                    return token.to_owned();
                }
                match self.banned.search(&stem) {
                    Some(hit) => {
                        let replacement = match hit.meta {
                            Some(WordMeta::Banned { replacement }) => replacement.as_str(),
                            _ => DEFAULT_REPLACEMENT,
                        };
                        token.replacen(&stem, replacement, 1)
                    }
                    None => token.to_owned(),
                }
            })
            .collect();
        filtered.join(" ")
    }

    /// Finds every spam-pattern occurrence in `text`.
    ///
    /// Tests all substrings of length at least 3 of the lowercased
    /// message (every start/end offset pair) against the spam lexicon
    /// and reports every match, overlapping duplicates included. Only the
    /// first `MAX_SCAN_LEN` (4096) characters are scanned.
    pub fn check_spam_patterns(&self, text: &str) -> Vec<SpamMatch> {
        let lower = text.to_lowercase();
        let chars: Vec<char> = lower.chars().collect();
        let scan = &chars[..chars.len().min(MAX_SCAN_LEN)];

        let mut matches = Vec::new();
        for start in 0..scan.len() {
            for end in (start + 3)..=scan.len() {
                let candidate: String = scan[start..end].iter().collect();
                if self.spam.search(&candidate).is_some() {
                    matches.push(SpamMatch { pattern: candidate });
                }
            }
        }
        matches
    }

    /// Spell-checks one word against the shared dictionary.
    ///
    /// An exact (case-insensitive) hit is correct. Otherwise every
    /// dictionary word within edit distance 2 becomes a candidate, sorted
    /// by distance ascending then frequency descending, truncated to the
    /// top 5.
    pub fn spell_check(&self, word: &str) -> SpellCheck {
        let lower = word.to_lowercase();
        if self.dictionary.search(&lower).is_some() {
            return SpellCheck { correct: true, suggestions: Vec::new() };
        }

        let mut candidates: Vec<(usize, u64, String)> = self
            .dictionary
            .all_words()
            .into_iter()
            .filter_map(|entry| {
                let distance = levenshtein(&lower, &entry.word);
                (distance <= MAX_EDIT_DISTANCE).then_some((distance, entry.frequency, entry.word))
            })
            .collect();
        candidates.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));
        candidates.truncate(MAX_SPELLING_SUGGESTIONS);

        SpellCheck {
            correct: false,
            suggestions: candidates
                .into_iter()
                .map(|(distance, _, word)| SpellingSuggestion { word, distance })
                .collect(),
        }
    }

    /// Runs the full analysis over one message.
    ///
    /// Spell-check covers only tokens whose stem is longer than two
    /// characters. The filtered message differs from the input only when
    /// banned words were found.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyMessage`] for empty or whitespace-only
    /// input.
    pub fn analyze_message(&self, text: &str) -> Result<MessageAnalysis, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }

        let banned_words = self.check_banned_words(text);
        let spam_matches = self.check_spam_patterns(text);

        let mut spelling = Vec::new();
        for token in text.split_whitespace() {
            let stem = stem(token);
            if stem.chars().count() > 2 {
                let result = self.spell_check(&stem);
                if !result.correct {
                    spelling.push(SpellingIssue { word: stem, suggestions: result.suggestions });
                }
            }
        }

        let filtered_message = if banned_words.is_empty() {
            text.to_owned()
        } else {
            self.filter_message(text)
        };
        let is_clean = banned_words.is_empty() && spam_matches.is_empty();

        tracing::debug!(
            banned = banned_words.len(),
            spam = spam_matches.len(),
            misspelled = spelling.len(),
            is_clean,
            "message analyzed"
        );

        Ok(MessageAnalysis { banned_words, spam_matches, spelling, filtered_message, is_clean })
    }

    /// Autocompletes `prefix` against the lexicon `kind` selects.
    pub fn autocomplete(&self, prefix: &str, kind: TrieKind) -> Vec<Suggestion<WordMeta>> {
        let trie = match kind {
            TrieKind::Banned => &self.banned,
            TrieKind::Spam => &self.spam,
            TrieKind::User => &self.user,
            TrieKind::Dictionary => &self.dictionary,
        };
        trie.suggestions(prefix, AUTOCOMPLETE_LIMIT)
    }

    /// Word counts per lexicon.
    pub fn stats(&self) -> LexiconStats {
        let banned_words = self.banned.len();
        let spam_patterns = self.spam.len();
        let dictionary_words = self.dictionary.len();
        let user_words = self.user.len();
        LexiconStats {
            banned_words,
            spam_patterns,
            dictionary_words,
            user_words,
            total_words: banned_words + spam_patterns + dictionary_words + user_words,
        }
    }
}

/// Strips every character outside `[A-Za-z0-9_]` from a token.
fn stem(token: &str) -> String {
    token.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_').collect()
}
