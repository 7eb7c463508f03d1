//! Similarity function family
//!
//! The family is a closed set of named strategies. Each strategy maps two
//! strings to an integer score in `0..=100` and declares whether it folds
//! case on its own. Requesting a case-sensitive comparison with a
//! case-folding strategy is allowed but downgraded, see [`resolve`].

pub mod fuzz;

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named similarity strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum FuzzyAlgorithm {
    /// Plain indel ratio
    #[default]
    Simple,
    /// Best window of the longer string
    Partial,
    /// Token set comparison
    TokenSet,
    /// Sorted token comparison
    TokenSort,
    /// Token set comparison using partial ratio
    PartialTokenSet,
    /// Sorted token comparison using partial ratio
    PartialTokenSort,
    /// Processed ratio, ASCII only
    Quick,
    /// Processed ratio, Unicode preserved
    UQuick,
    /// Weighted best-of, ASCII only
    Weighted,
    /// Weighted best-of, Unicode preserved
    UWeighted,
}

impl FuzzyAlgorithm {
    /// Every strategy in registry order
    pub const ALL: [FuzzyAlgorithm; 10] = [
        FuzzyAlgorithm::Simple,
        FuzzyAlgorithm::Partial,
        FuzzyAlgorithm::TokenSet,
        FuzzyAlgorithm::TokenSort,
        FuzzyAlgorithm::PartialTokenSet,
        FuzzyAlgorithm::PartialTokenSort,
        FuzzyAlgorithm::Quick,
        FuzzyAlgorithm::UQuick,
        FuzzyAlgorithm::Weighted,
        FuzzyAlgorithm::UWeighted,
    ];

    /// Registry name
    pub fn name(self) -> &'static str {
        match self {
            FuzzyAlgorithm::Simple => "simple",
            FuzzyAlgorithm::Partial => "partial",
            FuzzyAlgorithm::TokenSet => "token_set",
            FuzzyAlgorithm::TokenSort => "token_sort",
            FuzzyAlgorithm::PartialTokenSet => "partial_token_set",
            FuzzyAlgorithm::PartialTokenSort => "partial_token_sort",
            FuzzyAlgorithm::Quick => "quick",
            FuzzyAlgorithm::UQuick => "u_quick",
            FuzzyAlgorithm::Weighted => "weighted",
            FuzzyAlgorithm::UWeighted => "u_weighted",
        }
    }

    /// True if the strategy lower-cases its input regardless of settings
    pub fn ignores_case(self) -> bool {
        !matches!(self, FuzzyAlgorithm::Simple | FuzzyAlgorithm::Partial)
    }

    /// Score two strings as given
    pub fn score(self, a: &str, b: &str) -> u8 {
        match self {
            FuzzyAlgorithm::Simple => fuzz::ratio(a, b),
            FuzzyAlgorithm::Partial => fuzz::partial_ratio(a, b),
            FuzzyAlgorithm::TokenSet => fuzz::token_set_ratio(a, b),
            FuzzyAlgorithm::TokenSort => fuzz::token_sort_ratio(a, b),
            FuzzyAlgorithm::PartialTokenSet => fuzz::partial_token_set_ratio(a, b),
            FuzzyAlgorithm::PartialTokenSort => fuzz::partial_token_sort_ratio(a, b),
            FuzzyAlgorithm::Quick => fuzz::quick_ratio(a, b),
            FuzzyAlgorithm::UQuick => fuzz::unicode_quick_ratio(a, b),
            FuzzyAlgorithm::Weighted => fuzz::weighted_ratio(a, b),
            FuzzyAlgorithm::UWeighted => fuzz::unicode_weighted_ratio(a, b),
        }
    }

    /// Score two strings, lower-casing both first unless `case_sensitive`
    pub fn compare(self, a: &str, b: &str, case_sensitive: bool) -> u8 {
        if case_sensitive {
            self.score(a, b)
        } else {
            self.score(&a.to_lowercase(), &b.to_lowercase())
        }
    }

    fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|alg| alg.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for FuzzyAlgorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == s)
            .ok_or_else(|| CoreError::UnknownAlgorithm {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

impl TryFrom<String> for FuzzyAlgorithm {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for FuzzyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Notice that a case-sensitive request was overridden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseOverride {
    /// Strategy that folds case on its own
    pub algorithm: FuzzyAlgorithm,
}

impl fmt::Display for CaseOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} algorithm lower cases input by default. This overrides case_sensitive setting.",
            self.algorithm
        )
    }
}

/// Effective comparison settings after [`resolve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Strategy to score with
    pub algorithm: FuzzyAlgorithm,
    /// Whether scoring is effectively case sensitive
    pub case_sensitive: bool,
    /// Present when the requested case sensitivity was dropped
    pub warning: Option<CaseOverride>,
}

/// Combine a strategy with a requested case sensitivity
///
/// Pure; callers decide how to surface the warning.
pub fn resolve(algorithm: FuzzyAlgorithm, case_sensitive: bool) -> Resolution {
    if case_sensitive && algorithm.ignores_case() {
        Resolution {
            algorithm,
            case_sensitive: false,
            warning: Some(CaseOverride { algorithm }),
        }
    } else {
        Resolution {
            algorithm,
            case_sensitive,
            warning: None,
        }
    }
}
