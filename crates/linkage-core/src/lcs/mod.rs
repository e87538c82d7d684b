//! Repeated Longest Common Substring comparator
//!
//! Rather than stopping at the single longest common substring, the
//! comparator extracts it from both values and searches again, until no
//! remaining common substring reaches the configured minimum length. The
//! total extracted length divided by the shorter value's length is the score.
//! Lengths count UTF-16 code units.
//!
//! Extraction is greedy, so the result depends on which value is scanned
//! as rows. Scores are therefore computed in both directions and averaged.
//!
//! # Example
//!
//! ```rust
//! use linkage_core::{Comparator, LongestCommonSubstring};
//!
//! let lcs = LongestCommonSubstring::new();
//! assert_eq!(lcs.compare("abcdef", "xyabcdefz"), 1.0);
//! assert!((lcs.compare("ab12cd", "xy12zw") - 1.0 / 3.0).abs() < 1e-9);
//! ```

mod scorer;
mod substring;

pub use scorer::LongestCommonSubstring;
pub use substring::{longest_common_substring, SubstringMatch};
