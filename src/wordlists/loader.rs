//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{WordList, WordListError};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Blank lines are ignored. Lines that are not valid 5-letter words are skipped
/// with a warning rather than failing the whole list.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_session::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        tracing::warn!(path = %path.display(), skipped, "skipped invalid word list entries");
    }
    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");

    Ok(WordList::new(words))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_session::wordlists::loader::words_from_slice;
/// use wordle_session::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_skips_blank_and_invalid_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\n\n  slate  \nnope\ntr4ce\nTRACE").unwrap();

        let list = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = list.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "TRACE"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }
}
