//! Boundary ignore rules
//!
//! After refinement a matched span is trimmed so that it neither starts
//! nor ends on a token matched by an ignore rule. The rule set is closed:
//! unknown names are rejected when parsed instead of being skipped.

use crate::doc::Token;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Token category that may be trimmed from a span edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum IgnoreRule {
    /// Whitespace-only tokens
    Space,
    /// Punctuation-only tokens
    Punct,
    /// Stop words
    Stop,
}

impl IgnoreRule {
    /// Every rule, in canonical order
    pub const ALL: [IgnoreRule; 3] = [IgnoreRule::Space, IgnoreRule::Punct, IgnoreRule::Stop];

    /// Check the rule against a token
    pub fn matches(self, token: &Token) -> bool {
        match self {
            IgnoreRule::Space => token.is_space(),
            IgnoreRule::Punct => token.is_punct(),
            IgnoreRule::Stop => token.is_stop(),
        }
    }

    /// Configuration name
    pub fn name(self) -> &'static str {
        match self {
            IgnoreRule::Space => "space",
            IgnoreRule::Punct => "punct",
            IgnoreRule::Stop => "stop",
        }
    }
}

impl FromStr for IgnoreRule {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "space" => Ok(IgnoreRule::Space),
            "punct" => Ok(IgnoreRule::Punct),
            "stop" => Ok(IgnoreRule::Stop),
            _ => Err(CoreError::UnknownIgnoreRule {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for IgnoreRule {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for IgnoreRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Deduplicated set of ignore rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<IgnoreRule>", into = "Vec<IgnoreRule>")]
pub struct IgnoreSet {
    rules: SmallVec<[IgnoreRule; 3]>,
}

impl IgnoreSet {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set holding every rule
    pub fn all() -> Self {
        IgnoreRule::ALL.into_iter().collect()
    }

    /// Parse rule names, failing on the first unknown one
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| name.as_ref().parse::<IgnoreRule>())
            .collect()
    }

    /// Add a rule unless already present
    pub fn insert(&mut self, rule: IgnoreRule) {
        if !self.rules.contains(&rule) {
            self.rules.push(rule);
        }
    }

    /// Rules of `self` followed by the rules of `other` not already present
    pub fn union(&self, other: &IgnoreSet) -> IgnoreSet {
        let mut merged = self.clone();
        for &rule in &other.rules {
            merged.insert(rule);
        }
        merged
    }

    /// True if any rule matches the token
    pub fn matches(&self, token: &Token) -> bool {
        self.rules.iter().any(|rule| rule.matches(token))
    }

    /// Check membership
    pub fn contains(&self, rule: IgnoreRule) -> bool {
        self.rules.contains(&rule)
    }

    /// True if the set holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Iterate over rules in insertion order
    pub fn iter(&self) -> impl Iterator<Item = IgnoreRule> + '_ {
        self.rules.iter().copied()
    }
}

impl FromIterator<IgnoreRule> for IgnoreSet {
    fn from_iter<T: IntoIterator<Item = IgnoreRule>>(iter: T) -> Self {
        let mut set = IgnoreSet::new();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}

impl From<Vec<IgnoreRule>> for IgnoreSet {
    fn from(rules: Vec<IgnoreRule>) -> Self {
        rules.into_iter().collect()
    }
}

impl From<IgnoreSet> for Vec<IgnoreRule> {
    fn from(set: IgnoreSet) -> Self {
        set.rules.into_vec()
    }
}

/// Global ignore rules plus optional per-edge additions
///
/// The effective rules for an edge are the union of the global set and
/// that edge's override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreConfig {
    /// Rules applied to both edges
    #[serde(default = "IgnoreSet::all")]
    pub ignores: IgnoreSet,
    /// Extra rules for the left edge
    #[serde(default)]
    pub left_ignores: Option<IgnoreSet>,
    /// Extra rules for the right edge
    #[serde(default)]
    pub right_ignores: Option<IgnoreSet>,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            ignores: IgnoreSet::all(),
            left_ignores: None,
            right_ignores: None,
        }
    }
}

impl IgnoreConfig {
    /// Configuration that never trims
    pub fn none() -> Self {
        Self {
            ignores: IgnoreSet::new(),
            left_ignores: None,
            right_ignores: None,
        }
    }

    /// Use `ignores` as the global set
    pub fn with_ignores(mut self, ignores: IgnoreSet) -> Self {
        self.ignores = ignores;
        self
    }

    /// Add left-edge rules
    pub fn with_left_ignores(mut self, left: IgnoreSet) -> Self {
        self.left_ignores = Some(left);
        self
    }

    /// Add right-edge rules
    pub fn with_right_ignores(mut self, right: IgnoreSet) -> Self {
        self.right_ignores = Some(right);
        self
    }

    /// Effective rules for the left edge
    pub fn left_rules(&self) -> IgnoreSet {
        match &self.left_ignores {
            Some(left) => self.ignores.union(left),
            None => self.ignores.clone(),
        }
    }

    /// Effective rules for the right edge
    pub fn right_rules(&self) -> IgnoreSet {
        match &self.right_ignores {
            Some(right) => self.ignores.union(right),
            None => self.ignores.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rule_names() {
        assert_eq!("space".parse::<IgnoreRule>().unwrap(), IgnoreRule::Space);
        assert_eq!("punct".parse::<IgnoreRule>().unwrap(), IgnoreRule::Punct);
        assert_eq!("stop".parse::<IgnoreRule>().unwrap(), IgnoreRule::Stop);
    }

    #[test]
    fn test_unknown_rule_is_an_error() {
        match IgnoreSet::from_names(["space", "digits"]) {
            Err(CoreError::UnknownIgnoreRule { name }) => assert_eq!(name, "digits"),
            other => panic!("Expected UnknownIgnoreRule, got {other:?}"),
        }
    }

    #[test]
    fn test_set_deduplicates() {
        let set = IgnoreSet::from_names(["stop", "stop", "punct"]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![IgnoreRule::Stop, IgnoreRule::Punct]
        );
    }

    #[test]
    fn test_edge_rules_are_unions() {
        let config = IgnoreConfig::none()
            .with_ignores(IgnoreSet::from_names(["space"]).unwrap())
            .with_left_ignores(IgnoreSet::from_names(["stop", "space"]).unwrap());

        let left = config.left_rules();
        assert_eq!(left.len(), 2);
        assert!(left.contains(IgnoreRule::Stop));

        let right = config.right_rules();
        assert_eq!(right.len(), 1);
        assert!(!right.contains(IgnoreRule::Stop));
    }

    #[test]
    fn test_matches_token() {
        let set = IgnoreSet::from_names(["punct"]).unwrap();
        assert!(set.matches(&Token::new(",").with_punct(true)));
        assert!(!set.matches(&Token::new("the").with_stop(true)));
        assert!(!IgnoreSet::new().matches(&Token::new(",").with_punct(true)));
    }
}
