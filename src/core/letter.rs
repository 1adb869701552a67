//! Guessable letters.
//!
//! A `Letter` is always an uppercase ASCII letter `A..=Z`. Construction
//! normalizes case, so the rest of the engine never has to.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{EngineError, Result};

/// An uppercase ASCII letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// The 26 letters in alphabetical order.
    pub const ALPHABET: [Letter; 26] = {
        let mut letters = [Letter(b'A'); 26];
        let mut i = 0;
        while i < 26 {
            letters[i] = Letter(b'A' + i as u8);
            i += 1;
        }
        letters
    };

    /// Create a letter from a character, normalizing to uppercase.
    ///
    /// ```
    /// use hangman_engine::core::Letter;
    ///
    /// assert_eq!(Letter::new('k').unwrap(), Letter::new('K').unwrap());
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase() as u8))
        } else {
            Err(EngineError::InvalidLetter(c))
        }
    }

    /// Iterate over all 26 letters.
    pub fn all() -> impl Iterator<Item = Letter> {
        Self::ALPHABET.into_iter()
    }

    /// The uppercase character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based position in the alphabet.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// True for A, E, I, O and U.
    #[must_use]
    pub const fn is_vowel(self) -> bool {
        matches!(self.0, b'A' | b'E' | b'I' | b'O' | b'U')
    }
}

impl TryFrom<char> for Letter {
    type Error = EngineError;

    fn try_from(c: char) -> Result<Self> {
        Letter::new(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for Letter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let c = char::deserialize(deserializer)?;
        Letter::new(c).map_err(serde::de::Error::custom)
    }
}

/// Parse a word into letters.
///
/// Returns `EngineError::InvalidWord` if the word is empty or contains
/// anything other than ASCII letters.
pub fn parse_word(word: &str) -> Result<Vec<Letter>> {
    let letters: Option<Vec<Letter>> = word.chars().map(|c| Letter::new(c).ok()).collect();
    match letters {
        Some(letters) if !letters.is_empty() => Ok(letters),
        _ => Err(EngineError::InvalidWord(word.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_case() {
        let lower = Letter::new('q').unwrap();
        let upper = Letter::new('Q').unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.as_char(), 'Q');
    }

    #[test]
    fn test_rejects_non_letters() {
        for c in ['1', '_', ' ', 'é', '!'] {
            assert!(matches!(Letter::new(c), Err(EngineError::InvalidLetter(x)) if x == c));
        }
    }

    #[test]
    fn test_alphabet() {
        let all: Vec<_> = Letter::all().collect();
        assert_eq!(all.len(), 26);
        assert_eq!(all[0].as_char(), 'A');
        assert_eq!(all[25].as_char(), 'Z');
        for (i, letter) in all.iter().enumerate() {
            assert_eq!(letter.index(), i);
        }
    }

    #[test]
    fn test_vowels() {
        let vowels: String = Letter::all().filter(|l| l.is_vowel()).map(char::from).collect();
        assert_eq!(vowels, "AEIOU");
    }

    #[test]
    fn test_parse_word() {
        let letters = parse_word("Kiwi").unwrap();
        let text: String = letters.iter().map(|l| l.as_char()).collect();
        assert_eq!(text, "KIWI");

        assert!(parse_word("").is_err());
        assert!(parse_word("star fruit").is_err());
    }

    #[test]
    fn test_serde() {
        let letter = Letter::new('m').unwrap();
        let json = serde_json::to_string(&letter).unwrap();
        assert_eq!(json, "\"M\"");

        let back: Letter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, letter);

        assert!(serde_json::from_str::<Letter>("\"3\"").is_err());
    }
}
