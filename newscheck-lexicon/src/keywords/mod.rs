// newscheck-lexicon/src/keywords/mod.rs
use daachorse::DoubleArrayAhoCorasick;
extern crate alloc;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Errors raised while building keyword automata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// A keyword was empty after trimming.
    EmptyKeyword,
    /// The automaton could not be constructed.
    Automaton(String),
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::EmptyKeyword => write!(f, "keyword lists must not contain empty entries"),
            LexiconError::Automaton(msg) => write!(f, "failed to build keyword automaton: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LexiconError {}

/// Case-insensitive substring matcher over a fixed keyword list.
///
/// Keywords are lowercased and de-duplicated on construction; the haystack is
/// lowercased per call. A keyword is counted at most once no matter how often
/// it occurs in the text.
pub struct KeywordMatcher {
    automaton: Option<DoubleArrayAhoCorasick<usize>>,
    keywords: Vec<String>,
}

impl fmt::Debug for KeywordMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordMatcher")
         .field("automaton", &"<DoubleArrayAhoCorasick>")
         .field("keywords", &self.keywords)
         .finish()
    }
}

impl KeywordMatcher {
    pub fn new<I, S>(keywords: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for kw in keywords {
            let kw = kw.as_ref();
            if kw.trim().is_empty() {
                return Err(LexiconError::EmptyKeyword);
            }
            // Surrounding spaces are part of the pattern: " un " only matches the standalone word.
            let lowered = kw.to_lowercase();
            if !normalized.contains(&lowered) {
                normalized.push(lowered);
            }
        }

        // daachorse rejects an empty pattern set, so an empty category simply never matches.
        let automaton = if normalized.is_empty() {
            None
        } else {
            let built = DoubleArrayAhoCorasick::new(normalized.iter().map(String::as_str))
                .map_err(|e| LexiconError::Automaton(e.to_string()))?;
            Some(built)
        };

        Ok(Self { automaton, keywords: normalized })
    }

    /// The normalized (lowercased, de-duplicated) keywords.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns the keywords found in `text`, in keyword-list order.
    pub fn matched<'a>(&'a self, text: &str) -> Vec<&'a str> {
        let seen = self.scan(text);
        self.keywords
            .iter()
            .zip(seen)
            .filter_map(|(kw, hit)| if hit { Some(kw.as_str()) } else { None })
            .collect()
    }

    /// Number of distinct keywords occurring in `text`.
    pub fn count(&self, text: &str) -> u32 {
        self.scan(text).into_iter().filter(|hit| *hit).count() as u32
    }

    fn scan(&self, text: &str) -> Vec<bool> {
        let mut seen = vec![false; self.keywords.len()];
        let automaton = match &self.automaton {
            Some(a) => a,
            None => return seen,
        };

        let lowered = text.to_lowercase();
        // Overlapping search: "un" must still count inside "united states".
        for matched in automaton.find_overlapping_iter(lowered.as_bytes()) {
            if let Some(slot) = seen.get_mut(matched.value()) {
                *slot = true;
            }
        }
        seen
    }
}

/// Per-category keyword hit counts for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub global: u32,
    pub country: u32,
    pub history: u32,
}

/// The three keyword categories used by the verdict policy.
#[derive(Debug)]
pub struct Lexicon {
    global: KeywordMatcher,
    country: KeywordMatcher,
    history: KeywordMatcher,
}

impl Lexicon {
    pub fn new<S: AsRef<str>>(global: &[S], country: &[S], history: &[S]) -> Result<Self, LexiconError> {
        Ok(Self {
            global: KeywordMatcher::new(global)?,
            country: KeywordMatcher::new(country)?,
            history: KeywordMatcher::new(history)?,
        })
    }

    pub fn count(&self, text: &str) -> CategoryCounts {
        CategoryCounts {
            global: self.global.count(text),
            country: self.country.count(text),
            history: self.history.count(text),
        }
    }

    pub fn global(&self) -> &KeywordMatcher {
        &self.global
    }

    pub fn country(&self) -> &KeywordMatcher {
        &self.country
    }

    pub fn history(&self) -> &KeywordMatcher {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_substring_match() {
        let matcher = KeywordMatcher::new(["ISRO", "NASA"]).unwrap();
        assert_eq!(matcher.count("isro and Nasa teams"), 2);
        assert_eq!(matcher.count("nothing here"), 0);
    }

    #[test]
    fn test_keyword_counts_once_despite_repeats() {
        let matcher = KeywordMatcher::new(["BBC"]).unwrap();
        assert_eq!(matcher.count("BBC reports BBC said bbc"), 1);
    }

    #[test]
    fn test_substring_inside_word_matches() {
        // "un" sits inside "launches"; matching is plain substring, not word-bounded.
        let matcher = KeywordMatcher::new(["UN", "ISRO"]).unwrap();
        assert_eq!(matcher.matched("ISRO launches Chandrayaan-3"), vec!["un", "isro"]);
    }

    #[test]
    fn test_padded_keyword_keeps_its_spaces() {
        let matcher = KeywordMatcher::new([" UN "]).unwrap();
        assert_eq!(matcher.keywords(), &[" un ".to_string()]);
        assert_eq!(matcher.count("ISRO launches Chandrayaan"), 0);
        assert_eq!(matcher.count("The UN votes today"), 1);
    }

    #[test]
    fn test_padded_and_bare_keywords_are_distinct() {
        let matcher = KeywordMatcher::new(["UN", " UN "]).unwrap();
        assert_eq!(matcher.keywords().len(), 2);
        assert_eq!(matcher.count("launches"), 1);
    }

    #[test]
    fn test_overlapping_keywords_all_count() {
        let matcher = KeywordMatcher::new(["United States", "UN", "states"]).unwrap();
        assert_eq!(matcher.count("the united states"), 3);
    }

    #[test]
    fn test_duplicate_keywords_are_merged() {
        let matcher = KeywordMatcher::new(["UN", "un", "Un"]).unwrap();
        assert_eq!(matcher.keywords().len(), 1);
        assert_eq!(matcher.count("un"), 1);
    }

    #[test]
    fn test_empty_list_never_matches() {
        let matcher = KeywordMatcher::new(Vec::<&str>::new()).unwrap();
        assert_eq!(matcher.count("anything"), 0);
    }

    #[test]
    fn test_empty_keyword_is_rejected() {
        assert_eq!(KeywordMatcher::new(["ok", "  "]).unwrap_err(), LexiconError::EmptyKeyword);
    }

    #[test]
    fn test_lexicon_counts_each_category() {
        let lexicon = Lexicon::new(&["NASA"], &["India", "Japan"], &["1947", "freedom"]).unwrap();
        let counts = lexicon.count("India got freedom in 1947");
        assert_eq!(counts, CategoryCounts { global: 0, country: 1, history: 2 });
    }
}
