//! Typed input and output values shared by every algorithm unit.
//!
//! Raw input arrives as `serde_json::Value` from an adapter; the validator
//! turns it into an [`Input`] according to the unit's declared [`InputShape`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared structure of the input a unit accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputShape {
    /// Integers, optionally with a sort order. May be empty.
    IntegerSequence,
    /// Integers, at least one.
    NonEmptyIntegerSequence,
    /// Integers plus a target value.
    SearchQuery,
    /// Like `SearchQuery`, but the values must be non-decreasing.
    SortedSearchQuery,
    /// Adjacency list plus a start node.
    Graph,
    /// Text plus a non-empty pattern.
    TextWithPattern,
    /// Free text of at most [`MAX_TEXT_CHARS`](crate::validator::MAX_TEXT_CHARS) characters.
    Text,
    /// A single integer `>= 0`.
    NonNegativeInteger,
    /// An optional RNG seed.
    Seed,
    /// A toy RSA action: a seeded round trip, or encrypt/decrypt under caller keys.
    RsaRequest,
}

impl InputShape {
    /// Human-readable description used by listings and validation messages.
    pub fn describe(self) -> &'static str {
        match self {
            Self::IntegerSequence => "sequence of integers, e.g. [5,3,1] or {\"values\":[5,3,1],\"order\":\"descending\"}",
            Self::NonEmptyIntegerSequence => "non-empty sequence of integers, e.g. [5,2,2,9,1]",
            Self::SearchQuery => "{\"values\":[...], \"target\": integer}",
            Self::SortedSearchQuery => "{\"values\":[non-decreasing...], \"target\": integer}",
            Self::Graph => "{\"adjacency\":[[neighbours]...], \"start\": node}",
            Self::TextWithPattern => "{\"text\": string, \"pattern\": non-empty string}",
            Self::Text => "string of at most 500 characters, e.g. \"racecar\"",
            Self::NonNegativeInteger => "integer >= 0, e.g. 10",
            Self::Seed => "null, a seed integer or {\"seed\": integer}",
            Self::RsaRequest => concat!(
                "{\"message\": string, \"bits\": 8..=31, \"seed\": integer}, ",
                "{\"action\": \"encrypt\", \"message\": string, \"public_key\": [e, n]} or ",
                "{\"action\": \"decrypt\", \"cipher\": [integers], \"private_key\": [d, n]}"
            ),
        }
    }
}

/// Direction requested for an ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// `true` when `a` may precede `b` under this order.
    #[inline]
    pub fn in_order(self, a: i64, b: i64) -> bool {
        match self {
            Self::Ascending => a <= b,
            Self::Descending => a >= b,
        }
    }
}

/// Validated input handed to a unit's computation function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Sequence { values: Vec<i64>, order: SortOrder },
    Search { values: Vec<i64>, target: i64 },
    Graph { adjacency: Vec<Vec<usize>>, start: usize },
    Pattern { text: String, pattern: String },
    Text(String),
    Integer(u64),
    Seed(u64),
    Rsa(RsaAction),
}

/// What a toy RSA run does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RsaAction {
    /// Generate keys from `seed`, then encrypt and decrypt `message`.
    RoundTrip { message: String, bits: u32, seed: u64 },
    /// Encrypt `message` under a caller's public key `(e, n)`.
    Encrypt { message: String, public_key: (u64, u64) },
    /// Decrypt `cipher` under a caller's private key `(d, n)`.
    Decrypt { cipher: Vec<u64>, private_key: (u64, u64) },
}

impl Input {
    /// Rough size of the input, used for listings and sweep reports.
    pub fn size(&self) -> usize {
        match self {
            Self::Sequence { values, .. } | Self::Search { values, .. } => values.len(),
            Self::Graph { adjacency, .. } => adjacency.len(),
            Self::Pattern { text, .. } | Self::Text(text) => text.chars().count(),
            Self::Integer(n) => *n as usize,
            Self::Seed(_) => 52,
            Self::Rsa(RsaAction::RoundTrip { message, .. } | RsaAction::Encrypt { message, .. }) => {
                message.len()
            }
            Self::Rsa(RsaAction::Decrypt { cipher, .. }) => cipher.len(),
        }
    }
}

/// Summary statistics of an integer sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub smallest: i64,
    pub largest: i64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    /// Most frequent values in ascending order; `None` when every value is unique.
    pub mode: Option<Vec<i64>>,
}

/// Keys and ciphertext of one toy RSA round trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaTranscript {
    /// `(e, n)`
    pub public_key: (u64, u64),
    /// `(d, n)`
    pub private_key: (u64, u64),
    pub cipher: Vec<u64>,
    pub decrypted: String,
}

/// Output produced by a successful computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Output {
    Sequence(Vec<i64>),
    Index(Option<usize>),
    Visit(Vec<usize>),
    Positions(Vec<usize>),
    Integer(u128),
    Palindromes { found: Vec<String>, count: usize },
    Statistics(Summary),
    Deck(Vec<String>),
    Rsa(RsaTranscript),
    Cipher(Vec<u64>),
    Plaintext(String),
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(values) => write!(f, "Sorted: {}", join(values)),
            Self::Index(Some(index)) => write!(f, "Found at index {}", index),
            Self::Index(None) => write!(f, "Not found"),
            Self::Visit(order) => write!(f, "Visit order: {}", join(order)),
            Self::Positions(positions) if positions.is_empty() => write!(f, "No matches"),
            Self::Positions(positions) => write!(f, "Matches at: {}", join(positions)),
            Self::Integer(value) => write!(f, "{}", value),
            Self::Palindromes { found, count } => {
                let preview = join(&found[..found.len().min(10)]);
                write!(f, "{} palindromic substrings: {}", count, preview)?;
                if found.len() > 10 {
                    write!(f, " ... (+{} more)", found.len() - 10)?;
                }
                Ok(())
            }
            Self::Statistics(s) => {
                write!(
                    f,
                    "smallest={} largest={} median={} q1={} q3={} mode=",
                    s.smallest, s.largest, s.median, s.q1, s.q3
                )?;
                match &s.mode {
                    Some(mode) => write!(f, "[{}]", join(mode)),
                    None => write!(f, "none"),
                }
            }
            Self::Deck(cards) => write!(f, "Shuffled deck: {}", join(cards)),
            Self::Rsa(t) => write!(
                f,
                "public (e,n)={:?} private (d,n)={:?} cipher=[{}] decrypted={:?}",
                t.public_key,
                t.private_key,
                join(&t.cipher),
                t.decrypted
            ),
            Self::Cipher(values) => write!(f, "Cipher: [{}]", join(values)),
            Self::Plaintext(text) => write!(f, "Decrypted: {:?}", text),
        }
    }
}
