//! Embedded English lexicon backing the noun-phrase chunker

use std::collections::HashSet;

const LEXICON_SOURCE: &str = include_str!("english.txt");

/// Word lists the chunker consults while scanning running text
#[derive(Debug, Clone)]
pub struct ChunkLexicon {
    boundaries: HashSet<String>,
    determiners: HashSet<String>,
}

impl ChunkLexicon {
    /// Load the embedded lexicon. Returns `None` when the resource is
    /// missing or malformed; the extractor then degrades per its contract.
    pub fn load() -> Option<Self> {
        Self::parse(LEXICON_SOURCE)
    }

    fn parse(source: &str) -> Option<Self> {
        let mut boundaries = HashSet::new();
        let mut determiners = HashSet::new();
        let mut section: Option<&str> = None;

        for line in source.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line {
                "[boundary]" => section = Some("boundary"),
                "[determiner]" => section = Some("determiner"),
                words => {
                    let target = match section {
                        Some("boundary") => &mut boundaries,
                        Some("determiner") => &mut determiners,
                        // words before any section header mean a corrupt resource
                        _ => return None,
                    };
                    for word in words.split_whitespace() {
                        target.insert(word.to_lowercase());
                    }
                }
            }
        }

        if boundaries.is_empty() || determiners.is_empty() {
            return None;
        }
        Some(Self {
            boundaries,
            determiners,
        })
    }

    /// Does this token terminate a noun-phrase run?
    pub fn is_boundary(&self, token: &str) -> bool {
        self.boundaries.contains(token)
    }

    /// May this token appear inside a chunk but never alone?
    pub fn is_determiner(&self, token: &str) -> bool {
        self.determiners.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_lexicon_loads() {
        let lexicon = ChunkLexicon::load().expect("embedded lexicon should parse");
        assert!(lexicon.is_boundary("use"));
        assert!(lexicon.is_boundary("of"));
        assert!(lexicon.is_determiner("the"));
        assert!(!lexicon.is_boundary("networks"));
    }

    #[test]
    fn test_empty_source_is_unavailable() {
        assert!(ChunkLexicon::parse("").is_none());
        assert!(ChunkLexicon::parse("# comments only\n").is_none());
    }

    #[test]
    fn test_words_outside_sections_are_rejected() {
        assert!(ChunkLexicon::parse("stray words\n[boundary]\nof\n[determiner]\nthe\n").is_none());
    }

    #[test]
    fn test_sections_parse_independently() {
        let lexicon = ChunkLexicon::parse("[boundary]\nis are\n[determiner]\nthe\n").unwrap();
        assert!(lexicon.is_boundary("is"));
        assert!(lexicon.is_boundary("are"));
        assert!(lexicon.is_determiner("the"));
        assert!(!lexicon.is_determiner("is"));
    }
}
