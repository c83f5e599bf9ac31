use std::collections::HashSet;
use std::convert::Infallible;
use std::str::FromStr;

/// Decides whether a word may be [played](crate::GameState::play). Lookups ignore case.
///
/// Implemented for [`WordList`], for a [`HashSet`] of words, and for any closure
/// `Fn(&str) -> bool` so that callers can plug in their own storage.
pub trait Dictionary {
    /// Whether `word` is a valid word.
    fn contains(&self, word: &str) -> bool;
}

/// An in-memory set of uppercase words.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// # Returns
    ///
    /// A [`WordList`] holding every non-empty, trimmed word of `words` in uppercase.
    pub fn from_words<I, S>(words: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    /// The number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        WordList {
            words: iter
                .into_iter()
                .map(|word| word.as_ref().trim().to_ascii_uppercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }
}

impl FromStr for WordList {
    type Err = Infallible;

    /// Reads one word per line. Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.lines().collect())
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }
}

impl Dictionary for HashSet<String> {
    /// Checks `word` as given, in uppercase, and in lowercase, then falls back to comparing
    /// every entry ignoring case.
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
            || HashSet::contains(self, &word.to_ascii_uppercase())
            || HashSet::contains(self, &word.to_ascii_lowercase())
            || self.iter().any(|entry| entry.eq_ignore_ascii_case(word))
    }
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, word: &str) -> bool {
        self(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use map_macro::hash_set;

    #[test]
    fn word_list_from_str() {
        let words: WordList = "cat\n\n  Dog \nCAT\r\nbird"
            .parse()
            .expect("parse should return Ok");

        assert_eq!(3, words.len());
        assert!(words.contains("CAT"));
        assert!(words.contains("dog"));
        assert!(words.contains("Bird"));
        assert!(!words.contains("CATS"));
        assert!(!words.contains(""));
    }

    #[test]
    fn word_list_from_words() {
        let words = WordList::from_words(["art", "rat", "tar"]);

        assert_eq!(3, words.len());
        assert!(words.contains("TAR"));
        assert!(WordList::default().is_empty());
    }

    #[test]
    fn hash_set_ignores_case() {
        let words: HashSet<String> =
            hash_set! {"cat".to_owned(), "DOG".to_owned(), "Bird".to_owned()};

        assert!(Dictionary::contains(&words, "CAT"));
        assert!(Dictionary::contains(&words, "dog"));
        assert!(Dictionary::contains(&words, "BIRD"));
        assert!(Dictionary::contains(&words, "bIrD"));
        assert!(!Dictionary::contains(&words, "Fish"));
    }

    #[test]
    fn closure_dictionary() {
        let dictionary = |word: &str| word.len() > 2;

        assert!(dictionary.contains("CAT"));
        assert!(!dictionary.contains("AT"));
    }
}
