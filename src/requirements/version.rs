//! Lenient dotted version comparison.
//!
//! Host runtimes report versions like `7.0.15-1+deb.sury.org~trusty+1` or
//! `4.8-alpha-39357-src`. Only the leading numeric dot-components take part
//! in ordering; everything from the first other character on is ignored.

use std::cmp::Ordering;
use std::fmt;

/// A version reduced to its leading numeric components.
///
/// Comparison pads the shorter version with zeros, so `4.8` and `4.8.0`
/// are equal.
#[derive(Debug, Clone, Default)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Parse a version string. Never fails; a string without a numeric
    /// prefix yields the empty version, which compares equal to `0`.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let trimmed = trimmed
            .strip_prefix(|c: char| c == 'v' || c == 'V')
            .unwrap_or(trimmed);

        let end = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(trimmed.len());

        let components = trimmed[..end]
            .split('.')
            .filter(|s| !s.is_empty())
            // Digit-only segments only fail to parse on overflow.
            .map(|s| s.parse().unwrap_or(u64::MAX))
            .collect();

        Self { components }
    }

    /// The numeric components in order.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Whether `current >= required` after lenient parsing of both.
    pub fn at_least(current: &str, required: &str) -> bool {
        Self::parse(current) >= Self::parse(required)
    }

    fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            match self.component(i).cmp(&other.component(i)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(u64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}
