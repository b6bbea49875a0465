//! Word to phone expansion, and phone to word reconstruction.
//!
//! `AlignmentIndex` is a snapshot of a `Lexicon`. `words2phones` expands a sentence with the
//! primary pronunciation of each word. `phones2words` goes the other way. It segments a phone
//! sequence into dictionary words, tolerating up to `max_distance` phone edits.
//!
//! The reconstruction is a depth first search over alignment states. A state is a position in
//! the input, the word currently open (if any) with an offset into its pronunciation, the
//! edits used so far and the previous step. From a state inside a word the search may:
//!
//! * match the next input token against the next phone of the word, at no cost,
//! * substitute the next input token for a different phone, directly after a match,
//! * insert the word's next phone without consuming input, unless the last step deleted,
//! * delete the next input token, unless the last step was a deletion or substitution.
//!
//! A word whose pronunciation is used up closes, and any dictionary word can open next. The
//! step restrictions keep a single edit from being reached along many equivalent paths.
//! Different paths can still spell the same words, and every path is reported. The same word
//! sequence may appear several times in one bucket, and in more than one bucket.
//!
use std::collections::HashMap;
use std::ops::Index;

use crate::phonecodes::alphabet::{Alphabet, Language};
use crate::phonecodes::error::{PhoneError, Result};
use crate::phonecodes::lexicon::{Lexicon, Pronunciation};

/// The largest edit budget `phones2words` accepts.
pub const MAX_DISTANCE: usize = 32;

/// Word sequences found by `phones2words`, grouped by edit distance.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidates {
    /// `buckets[d]` holds the word sequences at exactly `d` edits, sorted.
    pub buckets: Vec<Vec<Vec<String>>>,
}

impl Candidates {
    /// The largest distance searched.
    pub fn max_distance(&self) -> usize {
        self.buckets.len().saturating_sub(1)
    }

    /// Total number of word sequences across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|b| b.is_empty())
    }

    /// Iterates over `(distance, words)` in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Vec<String>)> {
        self.buckets
            .iter()
            .enumerate()
            .flat_map(|(d, bucket)| bucket.iter().map(move |words| (d, words)))
    }
}

impl Index<usize> for Candidates {
    type Output = Vec<Vec<String>>;

    fn index(&self, distance: usize) -> &Self::Output {
        &self.buckets[distance]
    }
}

/// The step taken to reach a search state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Start,
    Match,
    Substitute,
    Insert,
    Delete,
}

/// Lookup structures over a lexicon, for sentence level queries.
///
/// Rebuild it if the lexicon changes.
#[derive(Debug)]
pub struct AlignmentIndex {
    language: Language,
    alphabet: Alphabet,

    // Word -> variants, primary first.
    pronunciations: HashMap<String, Vec<Pronunciation>>,

    // Every (word, variant), in lexicon order. The search opens words in this order.
    candidates: Vec<(String, Pronunciation)>,

    // First phone -> indexes into `candidates`.
    by_first_phone: HashMap<String, Vec<usize>>,
}

impl AlignmentIndex {
    pub fn new(lexicon: &Lexicon) -> AlignmentIndex {
        let mut result = AlignmentIndex {
            language: lexicon.language().clone(),
            alphabet: lexicon.alphabet(),
            pronunciations: HashMap::with_capacity(lexicon.len()),
            candidates: vec![],
            by_first_phone: HashMap::new(),
        };
        for entry in lexicon.entries() {
            result
                .pronunciations
                .insert(entry.word.clone(), entry.variants.clone());
            for variant in &entry.variants {
                let c = result.candidates.len();
                if let Some(first) = variant.first() {
                    result.by_first_phone.entry(first.clone()).or_default().push(c);
                }
                result.candidates.push((entry.word.clone(), variant.clone()));
            }
        }
        log::debug!(
            "indexed {} words with {} pronunciations",
            result.pronunciations.len(),
            result.candidates.len()
        );
        return result;
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Returns the variants of `word`, primary first.
    pub fn pronunciations(&self, word: &str) -> Option<&[Pronunciation]> {
        self.pronunciations.get(word).map(|v| v.as_slice())
    }

    /// Concatenates the primary pronunciation of each word.
    ///
    /// Fails with `UnknownWord` on the first word missing from the lexicon.
    pub fn words2phones<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<String>> {
        self.expand(words, None)
    }

    /// Like `words2phones`, with the alphabet's word boundary token between words.
    pub fn words2phones_with_boundaries<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<String>> {
        self.expand(words, Some(self.alphabet.word_boundary()))
    }

    fn expand<S: AsRef<str>>(&self, words: &[S], boundary: Option<&str>) -> Result<Vec<String>> {
        let mut result = vec![];
        for (n, word) in words.iter().enumerate() {
            let word = word.as_ref();
            let primary = self
                .pronunciations
                .get(word)
                .and_then(|variants| variants.first())
                .ok_or_else(|| PhoneError::UnknownWord(word.to_string()))?;
            if n > 0 {
                if let Some(token) = boundary {
                    result.push(token.to_string());
                }
            }
            result.extend(primary.iter().cloned());
        }
        return Ok(result);
    }

    /// Finds the word sequences whose pronunciations are within `max_distance` phone edits of
    /// `phones`.
    ///
    /// Boundary tokens in `phones` are ignored. The result has one bucket per distance from 0
    /// to `max_distance`, each sorted. Fails with `NoCandidates` if every bucket is empty, and
    /// with `InvalidParam` if `max_distance` is above `MAX_DISTANCE`.
    pub fn phones2words<S: AsRef<str>>(&self, phones: &[S], max_distance: usize) -> Result<Candidates> {
        if max_distance > MAX_DISTANCE {
            return Err(PhoneError::InvalidParam {
                key: "max_distance".to_string(),
                msg: format!("{} is above the limit of {}", max_distance, MAX_DISTANCE),
            });
        }
        let boundary = self.alphabet.word_boundary().trim();
        let input: Vec<&str> = phones
            .iter()
            .map(|p| p.as_ref())
            .filter(|p| !p.trim().is_empty() && *p != boundary)
            .collect();

        let mut search = Search {
            index: self,
            input,
            max_distance,
            words: vec![],
            buckets: vec![vec![]; max_distance + 1],
            states: 0,
        };
        search.between_words(0, 0, Step::Start);
        log::debug!(
            "phones2words visited {} states for {} phones",
            search.states,
            search.input.len()
        );

        let mut buckets = search.buckets;
        for bucket in buckets.iter_mut() {
            bucket.sort();
        }
        let result = Candidates { buckets };
        if result.is_empty() {
            return Err(PhoneError::NoCandidates { max_distance });
        }
        return Ok(result);
    }
}

/// State for one `phones2words` query.
struct Search<'a> {
    index: &'a AlignmentIndex,
    input: Vec<&'a str>,
    max_distance: usize,

    // Indexes into `index.candidates` of the words closed or open so far.
    words: Vec<usize>,
    buckets: Vec<Vec<Vec<String>>>,
    states: usize,
}

impl<'a> Search<'a> {
    /// No word is open; the next token at `i` starts a new word.
    fn between_words(&mut self, i: usize, cost: usize, prev: Step) {
        self.states += 1;
        let index = self.index;
        if i == self.input.len() {
            let words = self
                .words
                .iter()
                .map(|&c| index.candidates[c].0.clone())
                .collect();
            self.buckets[cost].push(words);
        }

        if cost < self.max_distance {
            for c in 0..index.candidates.len() {
                self.open(c, i, cost, prev);
            }
        } else if let Some(token) = self.input.get(i).copied() {
            // Out of budget, so only words that match from their first phone can follow.
            if let Some(matching) = index.by_first_phone.get(token) {
                for &c in matching {
                    self.open(c, i, cost, prev);
                }
            }
        }
    }

    fn open(&mut self, c: usize, i: usize, cost: usize, prev: Step) {
        self.words.push(c);
        self.within_word(c, i, 0, cost, prev);
        self.words.pop();
    }

    /// Word `c` is open at phone `j`, input is at `i`.
    fn within_word(&mut self, c: usize, i: usize, j: usize, cost: usize, prev: Step) {
        self.states += 1;
        let index = self.index;
        let pron = &index.candidates[c].1;
        if j == pron.len() {
            self.between_words(i, cost, prev);
            return;
        }

        let phone = pron[j].as_str();
        let next = self.input.get(i).copied();
        if next == Some(phone) {
            self.within_word(c, i + 1, j + 1, cost, Step::Match);
        }
        if cost >= self.max_distance {
            return;
        }
        if let Some(token) = next {
            if token != phone && prev == Step::Match {
                self.within_word(c, i + 1, j + 1, cost + 1, Step::Substitute);
            }
        }
        if prev != Step::Delete {
            self.within_word(c, i, j + 1, cost + 1, Step::Insert);
        }
        if next.is_some() && matches!(prev, Step::Start | Step::Match | Step::Insert) {
            self.within_word(c, i + 1, j, cost + 1, Step::Delete);
        }
    }
}
