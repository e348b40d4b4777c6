//! Text vectorization
//!
//! Tokenization with stop-word removal and stemming, and a TF-IDF vectorizer
//! that learns its vocabulary and document frequencies at fit time.

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};

/// Fixed English stop-word list, sorted for binary search.
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "but", "by", "can", "could", "did", "do",
    "does", "for", "from", "had", "has", "have", "he", "her", "here", "him",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "me",
    "my", "no", "not", "of", "on", "or", "our", "out", "she", "so", "some",
    "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "to", "up", "was", "we", "were", "what", "when", "where", "which",
    "who", "will", "with", "would", "you", "your",
];

/// Tokenizer shared by fit and transform
pub struct Tokenizer {
    stemmer: Stemmer,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Lowercase, split on non-alphanumeric, drop stop words, stem.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .filter(|s| STOP_WORDS.binary_search(s).is_err())
            .map(|s| self.stemmer.stem(s).to_string())
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// A sparse feature vector: (vocabulary index, weight) pairs sorted by index
pub type SparseVector = Vec<(usize, f64)>;

/// TF-IDF vectorizer
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    tokenizer: Tokenizer,
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            tokenizer: Tokenizer::new(),
        }
    }

    /// Learn the vocabulary and inverse document frequencies from the
    /// training documents only.
    pub fn fit(&mut self, documents: &[String]) {
        let n_documents = documents.len();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens = self.tokenizer.tokenize(doc);
            let unique: HashSet<String> = tokens.into_iter().collect();

            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        // Indices follow sorted term order so repeated fits on the same
        // documents produce identical vocabularies and weights
        let mut terms: Vec<&String> = document_frequency.keys().collect();
        terms.sort_unstable();

        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for term in terms {
            let df = document_frequency[term];
            let index = vocabulary.len();
            vocabulary.insert(term.clone(), index);
            // Smoothed IDF: log((N + 1) / (df + 1)) + 1
            idf.push(((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
    }

    /// Transform text into a sparse TF-IDF vector. Tokens outside the
    /// learned vocabulary are dropped.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();

        for token in self.tokenizer.tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index]))
            .collect();
        vector.sort_by_key(|&(index, _)| index);
        vector
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_are_sorted() {
        let mut sorted = STOP_WORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, STOP_WORDS);
    }

    #[test]
    fn test_tokenizer_drops_stop_words() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("the money is here");
        assert!(!tokens.iter().any(|t| t == "the"));
        assert!(!tokens.iter().any(|t| t == "is"));
        assert!(tokens.iter().any(|t| t.starts_with("monei") || t == "money"));
    }

    #[test]
    fn test_tokenizer_lowercases_and_splits_punctuation() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("WIN!!! Money, now.");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], "win");
    }

    #[test]
    fn test_fit_builds_vocabulary_from_training_only() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&["win money".to_string(), "meeting schedule".to_string()]);
        assert_eq!(vectorizer.vocabulary_size(), 4);

        // A token never seen at fit time contributes nothing
        let vector = vectorizer.transform("lottery jackpot");
        assert!(vector.is_empty());
    }

    #[test]
    fn test_transform_weights_repeated_terms_higher() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.fit(&["money money money".to_string(), "meeting".to_string()]);

        let once = vectorizer.transform("money");
        let thrice = vectorizer.transform("money money money");
        assert_eq!(once.len(), 1);
        assert_eq!(thrice.len(), 1);
        assert!(thrice[0].1 > once[0].1);
    }

    #[test]
    fn test_fit_is_reproducible_across_instances() {
        let docs: Vec<String> = vec![
            "win money click now".to_string(),
            "meeting schedule lunch agenda".to_string(),
            "lottery winner prize claim".to_string(),
            "win lottery money prize".to_string(),
        ];

        let mut first = TfIdfVectorizer::new();
        let mut second = TfIdfVectorizer::new();
        first.fit(&docs);
        second.fit(&docs);

        // Identical index assignment and weights, not just the same set
        let text = "win money lottery agenda claim";
        assert_eq!(first.transform(text), second.transform(text));
    }

    #[test]
    fn test_rare_terms_get_higher_idf() {
        let mut vectorizer = TfIdfVectorizer::new();
        let docs: Vec<String> = vec![
            "money offer".to_string(),
            "money meeting".to_string(),
            "money lunch".to_string(),
        ];
        vectorizer.fit(&docs);

        let common = vectorizer.transform("money");
        let rare = vectorizer.transform("lunch");
        assert!(rare[0].1 > common[0].1);
    }
}
