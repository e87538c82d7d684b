//! LongestCommonSubstring - repeated extraction scorer

use tracing::{debug, trace};

use super::substring::longest_common_substring;
use crate::comparator::Comparator;
use crate::config::LcsConfig;
use crate::error::Result;

/// Repeated longest common substring comparator.
///
/// Safe to share across threads: comparisons only read the configuration,
/// and changing it requires exclusive access.
#[derive(Debug, Clone, Default)]
pub struct LongestCommonSubstring {
    config: LcsConfig,
}

impl LongestCommonSubstring {
    /// Create a comparator with the default minimum length (2)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a validated configuration
    pub fn with_config(config: LcsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create with a custom minimum length
    pub fn with_minimum_length(minimum_length: usize) -> Result<Self> {
        Self::with_config(LcsConfig::builder().minimum_length(minimum_length).build()?)
    }

    pub fn config(&self) -> &LcsConfig {
        &self.config
    }

    pub fn minimum_length(&self) -> usize {
        self.config.minimum_length
    }

    /// Change the minimum length. Rejected values leave the current one in place.
    pub fn set_minimum_length(&mut self, minimum_length: usize) -> Result<()> {
        let config = LcsConfig { minimum_length };
        config.validate()?;
        self.config = config;
        debug!(minimum_length = self.config.minimum_length, "minimum length set");
        Ok(())
    }

    /// Score of `s1` against `s2` in one direction only.
    ///
    /// Repeatedly removes the longest common substring from both values
    /// until none of at least the minimum length is left, then divides the
    /// removed length by the length of the shorter original value, all
    /// measured in UTF-16 code units. The
    /// result depends on argument order; [`Comparator::compare`] averages
    /// both orders.
    pub fn directional_score(&self, s1: &str, s2: &str) -> f64 {
        // lengths and offsets count UTF-16 code units
        let mut a: Vec<u16> = s1.encode_utf16().collect();
        let mut b: Vec<u16> = s2.encode_utf16().collect();

        let shortlen = a.len().min(b.len());
        if shortlen == 0 {
            return 0.0;
        }

        let mut removed = 0;
        while let Some(found) = longest_common_substring(&a, &b) {
            if found.len < self.config.minimum_length {
                break;
            }
            trace!(
                len = found.len,
                start_a = found.start_a,
                start_b = found.start_b,
                "extracting common substring"
            );
            a.drain(found.range_a());
            b.drain(found.range_b());
            removed += found.len;
        }

        removed as f64 / shortlen as f64
    }
}

impl Comparator for LongestCommonSubstring {
    fn compare(&self, s1: &str, s2: &str) -> f64 {
        if s1 == s2 {
            return 1.0;
        }
        if s1.is_empty() || s2.is_empty() {
            return 0.0;
        }

        (self.directional_score(s1, s2) + self.directional_score(s2, s1)) / 2.0
    }

    fn is_tokenized(&self) -> bool {
        true
    }
}
