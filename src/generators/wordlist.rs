// src/generators/wordlist.rs
use lazy_static::lazy_static;

const COMMON_WORDS: [&str; 64] = [
    "correct", "horse", "battery", "staple", "apple", "banana", "orange", "grape",
    "table", "chair", "house", "window", "door", "book", "paper", "pencil",
    "computer", "keyboard", "mouse", "screen", "phone", "camera", "music", "video",
    "garden", "flower", "tree", "grass", "water", "fire", "earth", "wind",
    "mountain", "ocean", "river", "forest", "desert", "island", "bridge", "road",
    "happy", "brave", "quick", "smart", "strong", "gentle", "bright", "calm",
    "magic", "wonder", "dream", "smile", "laugh", "peace", "hope", "love",
    "cloud", "storm", "rainbow", "sunshine", "moonlight", "starlight", "crystal", "diamond",
];

lazy_static! {
    /// Shared, read-only word list used by the readable and passphrase generators.
    pub static ref WORD_LIST: WordList = WordList::from_words(COMMON_WORDS.iter().copied());
}

/// Ordered list of distinct, non-empty lowercase words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut list: Vec<String> = Vec::new();
        for word in words {
            let word = word.trim().to_lowercase();
            if word.is_empty() || list.contains(&word) {
                continue;
            }
            list.push(word);
        }
        Self { words: list }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}
