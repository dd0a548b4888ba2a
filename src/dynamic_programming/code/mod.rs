//! Dynamic programming implementations.

mod palindromes;

pub use palindromes::palindromic_substrings;
