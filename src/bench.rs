//! Timing helpers for comparing backends against a sorted word list.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::error::DictionaryError;
use crate::normalize::normalize;
use crate::source::WordSource;

/// Baseline lookup: the dictionary as a sorted vector searched by bisection.
#[derive(Debug, Default)]
pub struct Reference {
    words: Vec<String>,
}

impl Reference {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Ok(Self::from_source(WordSource::open(path)?))
    }

    pub fn from_source(source: WordSource) -> Self {
        let mut words = source.map(|w| normalize(&w)).collect::<Vec<_>>();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn check(&self, word: &str) -> bool {
        self.words.binary_search(&normalize(word)).is_ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub elapsed: Duration,
    /// Misspelled words seen in a single pass.
    pub misspelled: usize,
}

impl Measurement {
    /// This measurement's time as a percentage of `reference`.
    pub fn percent_of(&self, reference: &Measurement) -> f64 {
        if reference.elapsed.is_zero() {
            return 0.0;
        }
        self.elapsed.as_secs_f64() / reference.elapsed.as_secs_f64() * 100.0
    }
}

/// Checks every word `iterations` times and reports the total time spent.
pub fn measure<F>(check: F, words: &[String], iterations: usize) -> Measurement
where
    F: Fn(&str) -> bool,
{
    let mut elapsed = Duration::ZERO;
    let mut misspelled = 0;
    for _ in 0..iterations.max(1) {
        let started = Instant::now();
        misspelled = words.iter().filter(|w| !check(w.as_str())).count();
        elapsed += started.elapsed();
    }
    Measurement {
        elapsed,
        misspelled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{BackendKind, Dictionary};

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn reference_is_sorted_and_deduplicated() {
        let reference = Reference::from_source(WordSource::from_text("pear Apple apple fig"));
        assert_eq!(reference.len(), 3);
        assert!(reference.check("APPLE"));
        assert!(reference.check("fig"));
        assert!(!reference.check("grape"));
        assert!(Reference::default().is_empty());
    }

    #[test]
    fn reference_load_reports_missing_files() {
        assert!(Reference::load("invalid.txt").is_err());
    }

    #[test]
    fn backends_agree_with_reference() {
        let dictionary = "alice was beginning to get very tired";
        let text = words("Alice was Beginning to feel very sleepy and tired");
        let reference = Reference::from_source(WordSource::from_text(dictionary));
        let expected = measure(|w| reference.check(w), &text, 2);
        assert_eq!(expected.misspelled, 3);

        for kind in BackendKind::ALL {
            let mut dict = Dictionary::new(kind);
            dict.load_words(WordSource::from_text(dictionary));
            let measured = measure(|w| dict.check(w), &text, 2);
            assert_eq!(measured.misspelled, expected.misspelled, "{kind}");
        }
    }

    #[test]
    fn zero_iterations_still_run_once() {
        let m = measure(|_| false, &words("a b c"), 0);
        assert_eq!(m.misspelled, 3);
    }

    #[test]
    fn percent_of_reference() {
        let reference = Measurement {
            elapsed: Duration::from_millis(200),
            misspelled: 0,
        };
        let fast = Measurement {
            elapsed: Duration::from_millis(50),
            misspelled: 0,
        };
        assert!((fast.percent_of(&reference) - 25.0).abs() < 1e-9);
        let zero = Measurement {
            elapsed: Duration::ZERO,
            misspelled: 0,
        };
        assert_eq!(fast.percent_of(&zero), 0.0);
    }
}
