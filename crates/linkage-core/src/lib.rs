//! Linkage Core
//!
//! Field-value comparators for record linkage and deduplication. A matching
//! engine calls a [`Comparator`] once per field pair and weighs the returned
//! score in `[0.0, 1.0]` against its own thresholds.
//!
//! # Features
//!
//! - `logging` - `logging::init` for hosts that want a `tracing-subscriber` setup
//!
//! # Example
//!
//! ```rust
//! use linkage_core::{Comparator, LcsConfig, LongestCommonSubstring};
//!
//! let config = LcsConfig::from_json(r#"{"minimum-length": 3}"#).unwrap();
//! let lcs = LongestCommonSubstring::with_config(config).unwrap();
//!
//! assert_eq!(lcs.compare("ab12cd", "xy12zw"), 0.0);
//! assert!(lcs.compare_values(Some("John Smith"), None).is_err());
//! ```

pub mod comparator;
pub mod config;
pub mod error;
pub mod lcs;
#[cfg(feature = "logging")]
pub mod logging;

// Re-export main types at crate root
pub use comparator::Comparator;
pub use config::{LcsConfig, LcsConfigBuilder, DEFAULT_MINIMUM_LENGTH};
pub use error::{LinkageError, Result};
pub use lcs::{longest_common_substring, LongestCommonSubstring, SubstringMatch};
