use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::record::WordRecord;

/// Builds a corpus from a text file holding one word per line.
///
/// The file is memory-mapped and scanned as raw bytes; a trailing `\r` is
/// stripped so CRLF files load cleanly, and blank lines are skipped. Every
/// word gets `variants` hash variants computed on the spot.
pub fn load_words(path: impl AsRef<Path>, variants: usize) -> Result<Corpus> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // Safety: the mapping is read-only and dropped before this call returns
    // the corpus; the corpus owns copies of the word bytes.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut corpus = Corpus::new();
    for line in mmap.split(|&b| b == b'\n') {
        let word = match line.last() {
            Some(&b'\r') => &line[..line.len() - 1],
            _ => line,
        };
        if word.is_empty() {
            continue;
        }
        corpus.add(WordRecord::new(word, variants)?);
    }
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_word_file(name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("hashvariants-{}-{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_load_one_word_per_line() {
        let path = temp_word_file("plain.txt", b"Hello\nworld\nballynamoney\n");
        let corpus = load_words(&path, 5).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.max_variants(), 5);
        assert_eq!(corpus.hash_column(0).unwrap()[0], 111);
        let words: Vec<&[u8]> = corpus.iter().map(|r| r.word()).collect();
        assert_eq!(words, vec![&b"Hello"[..], b"world", b"ballynamoney"]);
    }

    #[test]
    fn test_load_skips_blank_lines_and_crlf() {
        let path = temp_word_file("crlf.txt", b"Hello\r\n\r\n\nworld\r\n");
        let corpus = load_words(&path, 2).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.iter().next().unwrap().word(), b"Hello");
    }

    #[test]
    fn test_load_without_trailing_newline() {
        let path = temp_word_file("notrail.txt", b"Hello\nworld");
        let corpus = load_words(&path, 1).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_words("/definitely/not/here.txt", 3).unwrap_err();
        match err {
            Error::Read { path, .. } => {
                assert_eq!(path, std::path::Path::new("/definitely/not/here.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
