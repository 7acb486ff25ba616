use crate::board::N;
use crate::letterset::LetterSet;
use crate::Error;
use log::info;
use rustc_hash::{FxHashMap, FxHashSet};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::read_to_string;
use std::path::Path;
use std::time::Instant;

type LetterMap = FxHashMap<LetterSet, Vec<u32>>;

/// Stores the legal words and performs various lookups.
///
/// All words are upper case, 15 or fewer letters, and contain only the
/// letters `A..=Z` (no hyphens, no apostrophes). Besides the plain word set
/// the dictionary holds three maps from a [`LetterSet`] to the words
/// expressible with those letters:
///
/// * the exact map: `JELLO` is listed under `{EJLO}`;
/// * the one blank map: `JELLO` is listed under `{JLO}`, `{ELO}`, `{EJO}`
///   and `{EJL}`, for lookups when the rack has one blank tile;
/// * the two blank map: `JELLO` is listed under `{LO}`, `{JO}`, `{JL}`,
///   `{EO}`, `{EL}` and `{EJ}`, for lookups with two blank tiles.
///
/// The maps are built once and are read-only afterwards.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dictionary {
    words: Vec<String>,
    word_set: FxHashSet<String>,
    exact: LetterMap,
    one_blank: LetterMap,
    two_blanks: LetterMap,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {}/{}/{} letter keys>",
            self.words.len(),
            self.exact.len(),
            self.one_blank.len(),
            self.two_blanks.len()
        )
    }
}

impl Dictionary {
    /// Build a dictionary from a list of words.
    ///
    /// Words that can not be used in scrabble are silently dropped: words
    /// with hyphens or other non-letter characters, words longer than the
    /// board, duplicates, and empty strings. The remaining words are upper
    /// cased and indexed.
    pub fn from_words<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = Instant::now();
        let mut dictionary = Dictionary::default();
        for word in words {
            let word = word.as_ref().trim().to_ascii_uppercase();
            if !Self::is_suitable(&word) || dictionary.word_set.contains(&word) {
                continue;
            }
            dictionary.index_word(&word);
        }
        info!(
            "dictionary: {} words, {}/{}/{} letter keys, built in {:?}",
            dictionary.words.len(),
            dictionary.exact.len(),
            dictionary.one_blank.len(),
            dictionary.two_blanks.len(),
            before.elapsed()
        );
        dictionary
    }

    /// Read the dictionary from a file of whitespace-separated words.
    ///
    /// ## Errors
    /// If the file can not be read.
    pub fn from_file<P: AsRef<Path>>(wordfile: P) -> Result<Dictionary, Error> {
        let contents = read_to_string(&wordfile).map_err(|source| Error::ReadError {
            path: wordfile.as_ref().display().to_string(),
            source,
        })?;
        Ok(Self::from_words(contents.split_whitespace()))
    }

    #[cfg(feature = "bincode")]
    /// Deserialize a previously serialized dictionary from `file`.
    ///
    /// ## Errors
    /// If the file can not be read or its contents can not be deserialized.
    pub fn deserialize_from<P: AsRef<Path>>(file: P) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let path = file.as_ref().display().to_string();
        let reader = File::open(&file)
            .map(BufReader::new)
            .map_err(|source| Error::ReadError {
                path: path.clone(),
                source,
            })?;
        bincode::deserialize_from(reader).map_err(|_| Error::DictionaryCodingError(path))
    }

    #[cfg(feature = "bincode")]
    /// Serialize the dictionary to `file` with bincode.
    ///
    /// ## Errors
    /// If the file can not be written.
    pub fn serialize_to<P: AsRef<Path>>(&self, file: P) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let path = file.as_ref().display().to_string();
        let writer = File::create(&file)
            .map(BufWriter::new)
            .map_err(|source| Error::ReadError {
                path: path.clone(),
                source,
            })?;
        bincode::serialize_into(writer, self)
            .map_err(|_| Error::DictionaryCodingError(path))
    }

    fn is_suitable(word: &str) -> bool {
        !word.is_empty() && word.len() <= N && word.bytes().all(|b| b.is_ascii_alphabetic())
    }

    fn index_word(&mut self, word: &str) {
        let id = self.words.len() as u32;
        let key = LetterSet::from_word(word);
        self.exact.entry(key).or_default().push(id);
        for sub in key.without_one() {
            self.one_blank.entry(sub).or_default().push(id);
        }
        for sub in key.without_two() {
            self.two_blanks.entry(sub).or_default().push(id);
        }
        self.words.push(word.to_string());
        self.word_set.insert(word.to_string());
    }

    /// Returns whether `word` is valid for scrabble.
    pub fn has_word(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    /// The number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words that can be formed from a subset of `available` letters,
    /// with `blanks` wildcard tiles filling in for up to two missing
    /// letters. The result is deduplicated and ordered by word insertion,
    /// so repeated calls see the same order.
    ///
    /// ## Errors
    /// If `blanks` is more than 2, which the precomputed maps do not cover.
    pub fn words_for(&self, available: LetterSet, blanks: usize) -> Result<Vec<&str>, Error> {
        let map = match blanks {
            0 => &self.exact,
            1 => &self.one_blank,
            2 => &self.two_blanks,
            n => return Err(Error::TooManyBlanks(n)),
        };
        let mut ids: Vec<u32> = available
            .subsets()
            .filter_map(|subset| map.get(&subset))
            .flatten()
            .copied()
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids
            .into_iter()
            .map(|id| self.words[id as usize].as_str())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["HELLO", "HELL", "JELLO", "OK"];

    fn test_dictionary() -> Dictionary {
        Dictionary::from_words(WORDS)
    }

    #[test]
    fn test_has_word() {
        let dictionary = test_dictionary();
        assert_eq!(dictionary.len(), 4);
        for &word in WORDS {
            assert!(dictionary.has_word(word));
        }
        assert!(!dictionary.has_word("HELLS"));
    }

    #[test]
    fn test_unsuitable_words_dropped() {
        let dictionary = Dictionary::from_words(&[
            "ok",
            "don't",
            "x-ray",
            "straightforwardly", // longer than the board
            "",
            "OK",
        ]);
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.has_word("OK"));
    }

    #[test]
    fn test_exact_lookup() -> Result<(), Error> {
        let dictionary = test_dictionary();
        // every subset of the available letters is tried
        let found = dictionary.words_for(LetterSet::from_word("EHJLOX"), 0)?;
        assert_eq!(found, vec!["HELLO", "HELL", "JELLO"]);
        // a word is only reachable when all its letters are available
        let found = dictionary.words_for(LetterSet::from_word("EHL"), 0)?;
        assert_eq!(found, vec!["HELL"]);
        Ok(())
    }

    #[test]
    fn test_one_blank_lookup() -> Result<(), Error> {
        let dictionary = test_dictionary();
        // one blank fills in for the missing O
        let found = dictionary.words_for(LetterSet::from_word("EHL"), 1)?;
        assert_eq!(found, vec!["HELLO", "HELL"]);
        Ok(())
    }

    #[test]
    fn test_two_blank_lookup() -> Result<(), Error> {
        let dictionary = test_dictionary();
        let found = dictionary.words_for(LetterSet::from_word("EH"), 2)?;
        assert_eq!(found, vec!["HELLO", "HELL"]);
        // HELL is reachable too: blanks stand in for the E and the H
        let found = dictionary.words_for(LetterSet::from_word("JL"), 2)?;
        assert_eq!(found, vec!["HELL", "JELLO"]);
        Ok(())
    }

    #[test]
    fn test_too_many_blanks() {
        let dictionary = test_dictionary();
        assert!(matches!(
            dictionary.words_for(LetterSet::from_word("EH"), 3),
            Err(Error::TooManyBlanks(3))
        ));
    }

    #[test]
    fn test_key_properties() {
        let dictionary = test_dictionary();
        for (id, word) in dictionary.words.iter().enumerate() {
            let key = LetterSet::from_word(word);
            assert!(dictionary.exact[&key].contains(&(id as u32)));
            for dropped in key.iter() {
                let sub = key.without(dropped);
                assert!(dictionary.one_blank[&sub].contains(&(id as u32)));
            }
        }
    }
}
