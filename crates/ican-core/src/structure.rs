//! Parsing and compilation of BCAN structure strings.
//!
//! A structure string is a sequence of three-character blocks: one pattern
//! letter selecting a character class, followed by a two-digit repeat count.
//! `F04F04A12` describes four digits, four digits, then twelve alphanumerics.
//!
//! [`Structure::parse`] rejects malformed strings up front; the resulting
//! [`Structure`] then compiles infallibly in practice into a [`BcanMatcher`],
//! an anchored regular expression with one capture group per block.
use std::fmt;

use regex::Regex;

/// The character class selected by a structure block's pattern letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternClass {
    /// `A`: digits and letters of either case.
    Alphanumeric,
    /// `B`: digits and uppercase letters.
    UpperAlphanumeric,
    /// `C`: letters of either case.
    Alphabetic,
    /// `H`: hexadecimal digits of either case.
    Hex,
    /// `F`: digits only.
    Numeric,
    /// `L`: lowercase letters.
    Lowercase,
    /// `U`: uppercase letters.
    Uppercase,
    /// `W`: lowercase letters and digits.
    LowerAlphanumeric,
}

impl PatternClass {
    /// Maps a pattern letter to its class.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Self::Alphanumeric),
            'B' => Some(Self::UpperAlphanumeric),
            'C' => Some(Self::Alphabetic),
            'H' => Some(Self::Hex),
            'F' => Some(Self::Numeric),
            'L' => Some(Self::Lowercase),
            'U' => Some(Self::Uppercase),
            'W' => Some(Self::LowerAlphanumeric),
            _ => None,
        }
    }

    /// Returns the pattern letter for this class.
    pub fn letter(self) -> char {
        match self {
            Self::Alphanumeric => 'A',
            Self::UpperAlphanumeric => 'B',
            Self::Alphabetic => 'C',
            Self::Hex => 'H',
            Self::Numeric => 'F',
            Self::Lowercase => 'L',
            Self::Uppercase => 'U',
            Self::LowerAlphanumeric => 'W',
        }
    }

    /// Returns the body of the regex bracket expression for this class.
    pub fn regex_class(self) -> &'static str {
        match self {
            Self::Alphanumeric => "0-9A-Za-z",
            Self::UpperAlphanumeric => "0-9A-Z",
            Self::Alphabetic => "A-Za-z",
            Self::Hex => "0-9A-Fa-f",
            Self::Numeric => "0-9",
            Self::Lowercase => "a-z",
            Self::Uppercase => "A-Z",
            Self::LowerAlphanumeric => "0-9a-z",
        }
    }

    /// Returns `true` if `ch` belongs to this class.
    pub fn contains(self, ch: char) -> bool {
        match self {
            Self::Alphanumeric => ch.is_ascii_alphanumeric(),
            Self::UpperAlphanumeric => ch.is_ascii_digit() || ch.is_ascii_uppercase(),
            Self::Alphabetic => ch.is_ascii_alphabetic(),
            Self::Hex => ch.is_ascii_hexdigit(),
            Self::Numeric => ch.is_ascii_digit(),
            Self::Lowercase => ch.is_ascii_lowercase(),
            Self::Uppercase => ch.is_ascii_uppercase(),
            Self::LowerAlphanumeric => ch.is_ascii_digit() || ch.is_ascii_lowercase(),
        }
    }
}

/// Errors produced when a structure string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    /// The structure string contains no blocks.
    #[error("structure is empty")]
    Empty,

    /// The structure length is not a multiple of three.
    #[error("structure {structure:?} has length {len}, which is not a multiple of 3")]
    Misaligned {
        /// The rejected structure string.
        structure: String,
        /// Its length in bytes.
        len: usize,
    },

    /// A block starts with a letter that names no character class.
    #[error("block {index} of structure {structure:?} uses unknown pattern letter {letter:?}")]
    UnknownPattern {
        /// The rejected structure string.
        structure: String,
        /// Zero-based block index.
        index: usize,
        /// The offending letter.
        letter: char,
    },

    /// A block's repeat count is not two decimal digits.
    #[error("block {index} of structure {structure:?} has invalid repeat count {count:?}")]
    InvalidRepeat {
        /// The rejected structure string.
        structure: String,
        /// Zero-based block index.
        index: usize,
        /// The two characters found in place of the count.
        count: String,
    },

    /// The regex engine refused the generated pattern.
    #[error("structure {structure:?} could not be compiled: {detail}")]
    Compile {
        /// The structure being compiled.
        structure: String,
        /// The regex engine's message.
        detail: String,
    },
}

/// One block of a structure: a character class repeated a fixed number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Allowed characters.
    pub class: PatternClass,
    /// Exact number of characters, `0..=99`.
    pub repeats: usize,
}

/// A parsed, well-formed structure string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    source: String,
    blocks: Vec<Block>,
}

impl Structure {
    /// Parses a structure string into its blocks.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError`] when the string is empty, its length is not a
    /// multiple of three, a pattern letter is unknown, or a count is not two
    /// decimal digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use ican_core::structure::{PatternClass, Structure};
    ///
    /// let structure = Structure::parse("U04F10").expect("well-formed");
    /// assert_eq!(structure.blocks().len(), 2);
    /// assert_eq!(structure.blocks()[0].class, PatternClass::Uppercase);
    /// assert_eq!(structure.bcan_length(), 14);
    /// ```
    pub fn parse(source: &str) -> Result<Self, StructureError> {
        if source.is_empty() {
            return Err(StructureError::Empty);
        }
        let bytes = source.as_bytes();
        if bytes.len() % 3 != 0 {
            return Err(StructureError::Misaligned {
                structure: source.to_owned(),
                len: bytes.len(),
            });
        }

        let mut blocks = Vec::with_capacity(bytes.len() / 3);
        for (index, chunk) in bytes.chunks(3).enumerate() {
            let letter = char::from(chunk[0]);
            let Some(class) = PatternClass::from_letter(letter) else {
                return Err(StructureError::UnknownPattern {
                    structure: source.to_owned(),
                    index,
                    letter: source
                        .get(index * 3..)
                        .and_then(|rest| rest.chars().next())
                        .unwrap_or(letter),
                });
            };

            let count = &chunk[1..];
            if !count.iter().all(u8::is_ascii_digit) {
                return Err(StructureError::InvalidRepeat {
                    structure: source.to_owned(),
                    index,
                    count: String::from_utf8_lossy(count).into_owned(),
                });
            }
            let repeats = usize::from(count[0] - b'0') * 10 + usize::from(count[1] - b'0');
            blocks.push(Block { class, repeats });
        }

        Ok(Self {
            source: source.to_owned(),
            blocks,
        })
    }

    /// Returns the original structure string.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the parsed blocks, in order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the total number of characters a matching BCAN must have.
    pub fn bcan_length(&self) -> usize {
        self.blocks.iter().map(|b| b.repeats).sum()
    }

    /// Returns the anchored regex source for this structure.
    ///
    /// ```
    /// use ican_core::structure::Structure;
    ///
    /// let structure = Structure::parse("F03F07F02").expect("well-formed");
    /// assert_eq!(structure.to_pattern(), "^([0-9]{3})([0-9]{7})([0-9]{2})$");
    /// ```
    pub fn to_pattern(&self) -> String {
        let mut pattern = String::from("^");
        for block in &self.blocks {
            pattern.push_str(&format!(
                "([{}]{{{}}})",
                block.class.regex_class(),
                block.repeats
            ));
        }
        pattern.push('$');
        pattern
    }

    /// Compiles this structure into a [`BcanMatcher`].
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::Compile`] if the regex engine rejects the
    /// generated pattern. Patterns built from parsed blocks are always valid,
    /// so this is only reachable through engine limits.
    pub fn compile(&self) -> Result<BcanMatcher, StructureError> {
        let regex = Regex::new(&self.to_pattern()).map_err(|e| StructureError::Compile {
            structure: self.source.clone(),
            detail: e.to_string(),
        })?;
        tracing::trace!(structure = %self.source, "compiled bcan matcher");
        Ok(BcanMatcher {
            regex,
            block_count: self.blocks.len(),
        })
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// A compiled structure: recognises a bare BCAN and splits it into blocks.
///
/// Matching is anchored at both ends; a candidate with any leading or trailing
/// character outside the blocks is rejected.
#[derive(Debug, Clone)]
pub struct BcanMatcher {
    regex: Regex,
    block_count: usize,
}

impl BcanMatcher {
    /// Returns `true` if `bcan` matches the whole structure.
    pub fn is_match(&self, bcan: &str) -> bool {
        self.regex.is_match(bcan)
    }

    /// Splits a matching `bcan` into its block substrings.
    ///
    /// Returns `None` when `bcan` does not match.
    ///
    /// ```
    /// use ican_core::structure::Structure;
    ///
    /// let matcher = Structure::parse("F03F07F02").and_then(|s| s.compile()).expect("compiles");
    /// assert_eq!(matcher.blocks("539007547034"), Some(vec!["539", "0075470", "34"]));
    /// assert_eq!(matcher.blocks("53900754703"), None);
    /// ```
    pub fn blocks<'a>(&self, bcan: &'a str) -> Option<Vec<&'a str>> {
        let captures = self.regex.captures(bcan)?;
        (1..=self.block_count)
            .map(|i| captures.get(i).map(|m| m.as_str()))
            .collect()
    }

    /// Returns the number of blocks (capture groups) in the structure.
    pub fn block_count(&self) -> usize {
        self.block_count
    }
}
