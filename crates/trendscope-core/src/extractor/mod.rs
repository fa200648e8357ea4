//! Keyword extractor stage: noun-phrase chunking over collected snippets
//!
//! Chunking is lexicon-driven: maximal runs of tokens that are not chunk
//! boundaries (function words, frequent verbs, adverbs) form candidate noun
//! phrases, mirroring what a POS-based chunker produces on news prose.
//! Phrases are lower-cased and counted across all snippets; the top five by
//! raw frequency are returned, ties broken by first appearance.

mod lexicon;

pub use lexicon::ChunkLexicon;

use crate::collector::Snippet;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Number of ranked phrases returned by extraction
pub const TOP_PHRASES: usize = 5;

/// Phrase emitted when the chunking lexicon failed to load
pub const MODEL_UNAVAILABLE_SENTINEL: &str = "<model unavailable>";

lazy_static! {
    static ref SENTENCE_SPLIT_RE: Regex = Regex::new(r"[.!?;:…\n]+").unwrap();
}

/// A lower-cased noun phrase with its occurrence count across all snippets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPhrase {
    pub phrase: String,
    pub count: u32,
}

impl RankedPhrase {
    pub fn new(phrase: impl Into<String>, count: u32) -> Self {
        Self {
            phrase: phrase.into(),
            count,
        }
    }
}

// The request boundary expects keywords as [phrase, count] pairs, so the
// struct serializes as a two-element tuple rather than a map.
impl Serialize for RankedPhrase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.phrase, self.count).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RankedPhrase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (phrase, count) = <(String, u32)>::deserialize(deserializer)?;
        Ok(Self { phrase, count })
    }
}

/// Noun-phrase extractor over snippet sequences
pub struct Extractor {
    lexicon: Option<ChunkLexicon>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Create an extractor, loading the embedded chunking lexicon
    pub fn new() -> Self {
        let lexicon = ChunkLexicon::load();
        if lexicon.is_none() {
            tracing::warn!("Chunking lexicon unavailable; extraction will return the sentinel");
        }
        Self { lexicon }
    }

    /// Create an extractor with an explicit (possibly absent) lexicon
    pub fn with_lexicon(lexicon: Option<ChunkLexicon>) -> Self {
        Self { lexicon }
    }

    /// Extract the top ranked noun phrases across all snippets.
    ///
    /// With the lexicon unavailable this returns exactly the sentinel pair
    /// for any input, so downstream stages never see a malformed shape.
    /// An empty snippet sequence (lexicon present) yields an empty list.
    pub fn extract(&self, snippets: &[Snippet]) -> Vec<RankedPhrase> {
        let Some(ref lexicon) = self.lexicon else {
            return vec![RankedPhrase::new(MODEL_UNAVAILABLE_SENTINEL, 1)];
        };

        // Stable counting: phrases keep their first-seen position so that
        // the stable sort below breaks count ties by first appearance.
        let mut ordered: Vec<RankedPhrase> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for snippet in snippets {
            for phrase in noun_chunks(lexicon, &snippet.text) {
                match index.get(&phrase) {
                    Some(&i) => ordered[i].count += 1,
                    None => {
                        index.insert(phrase.clone(), ordered.len());
                        ordered.push(RankedPhrase::new(phrase, 1));
                    }
                }
            }
        }

        ordered.sort_by(|a, b| b.count.cmp(&a.count));
        ordered.truncate(TOP_PHRASES);
        ordered
    }
}

/// Chunk one text into lower-cased noun phrases, in order of appearance
fn noun_chunks(lexicon: &ChunkLexicon, text: &str) -> Vec<String> {
    let mut chunks = Vec::new();

    for sentence in SENTENCE_SPLIT_RE.split(text) {
        let mut run: Vec<String> = Vec::new();
        for raw in sentence.split_whitespace() {
            let token = normalize_token(raw);
            if token.is_empty() || lexicon.is_boundary(&token) {
                flush_run(lexicon, &mut run, &mut chunks);
                continue;
            }
            run.push(token);
        }
        flush_run(lexicon, &mut run, &mut chunks);
    }

    chunks
}

/// Close out the current token run, keeping it only if it contains at
/// least one non-determiner token
fn flush_run(lexicon: &ChunkLexicon, run: &mut Vec<String>, chunks: &mut Vec<String>) {
    if !run.is_empty() && run.iter().any(|t| !lexicon.is_determiner(t)) {
        chunks.push(run.join(" "));
    }
    run.clear();
}

/// Strip edge punctuation and apostrophes, keep inner hyphens, lower-case
fn normalize_token(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric())
        .replace(['\u{2019}', '\''], "")
        .to_lowercase()
}
