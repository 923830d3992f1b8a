//! Masking policy and evaluation
//!
//! A [`MaskingPolicy`] holds four rule sets checked in a fixed order; the
//! first rule that matches decides:
//!
//! 1. `never_mask` exact name → not masked
//! 2. `always_mask` exact name → masked
//! 3. any safe pattern → not masked
//! 4. any mask pattern → masked
//! 5. otherwise → not masked
//!
//! Field names are compared in hyphenated form.

use super::patterns::{
    compile_patterns, CompiledPattern, DEFAULT_ALWAYS_MASK, DEFAULT_MASK_PATTERNS,
    DEFAULT_NEVER_MASK, DEFAULT_SAFE_PATTERNS,
};
use crate::domain::result::Result;
use indexmap::IndexSet;
use std::fmt;

/// The rule that produced a masking decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskRule {
    NeverMask,
    AlwaysMask,
    SafePattern(String),
    MaskPattern(String),
    Default,
}

impl fmt::Display for MaskRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskRule::NeverMask => write!(f, "never-mask list"),
            MaskRule::AlwaysMask => write!(f, "always-mask list"),
            MaskRule::SafePattern(label) => write!(f, "safe pattern {label}"),
            MaskRule::MaskPattern(label) => write!(f, "mask pattern {label}"),
            MaskRule::Default => write!(f, "default"),
        }
    }
}

/// Outcome of evaluating one field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskDecision {
    /// Whether the value must be treated as a secret
    pub masked: bool,
    /// Rule that decided
    pub rule: MaskRule,
}

impl MaskDecision {
    fn new(masked: bool, rule: MaskRule) -> Self {
        Self { masked, rule }
    }
}

/// Masking rules for one run
///
/// Built from the defaults plus caller additions. Additions extend the exact
/// name lists only; patterns are fixed.
#[derive(Debug, Clone)]
pub struct MaskingPolicy {
    always_mask: IndexSet<String>,
    never_mask: IndexSet<String>,
    mask_patterns: Vec<CompiledPattern>,
    safe_patterns: Vec<CompiledPattern>,
}

impl MaskingPolicy {
    /// Policy with only the built-in rules
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            always_mask: DEFAULT_ALWAYS_MASK.iter().map(|s| s.to_string()).collect(),
            never_mask: DEFAULT_NEVER_MASK.iter().map(|s| s.to_string()).collect(),
            mask_patterns: compile_patterns(DEFAULT_MASK_PATTERNS)?,
            safe_patterns: compile_patterns(DEFAULT_SAFE_PATTERNS)?,
        })
    }

    /// Built-in policy extended with comma-separated `mask-fields` and `safe-fields`
    ///
    /// ```
    /// use azure_config_loader::masking::MaskingPolicy;
    ///
    /// let policy = MaskingPolicy::from_inputs(Some("build-number, "), Some("public-token")).unwrap();
    /// assert!(policy.should_mask("build-number"));
    /// assert!(!policy.should_mask("public-token"));
    /// ```
    pub fn from_inputs(mask_fields: Option<&str>, safe_fields: Option<&str>) -> Result<Self> {
        let mut policy = Self::builtin()?;
        if let Some(list) = mask_fields {
            policy.extend_always_mask(list);
        }
        if let Some(list) = safe_fields {
            policy.extend_never_mask(list);
        }
        Ok(policy)
    }

    /// Adds comma-separated names to the always-mask list
    pub fn extend_always_mask(&mut self, list: &str) {
        self.always_mask.extend(split_field_list(list));
    }

    /// Adds comma-separated names to the never-mask list
    pub fn extend_never_mask(&mut self, list: &str) {
        self.never_mask.extend(split_field_list(list));
    }

    /// Evaluates the rules in order and reports which one decided
    pub fn evaluate(&self, field_name: &str) -> MaskDecision {
        if self.never_mask.contains(field_name) {
            return MaskDecision::new(false, MaskRule::NeverMask);
        }
        if self.always_mask.contains(field_name) {
            return MaskDecision::new(true, MaskRule::AlwaysMask);
        }
        if let Some(pattern) = self.safe_patterns.iter().find(|p| p.is_match(field_name)) {
            return MaskDecision::new(false, MaskRule::SafePattern(pattern.label.clone()));
        }
        if let Some(pattern) = self.mask_patterns.iter().find(|p| p.is_match(field_name)) {
            return MaskDecision::new(true, MaskRule::MaskPattern(pattern.label.clone()));
        }
        MaskDecision::new(false, MaskRule::Default)
    }

    /// Whether the value of `field_name` must be treated as a secret
    pub fn should_mask(&self, field_name: &str) -> bool {
        self.evaluate(field_name).masked
    }

    /// Exact names that are always masked
    pub fn always_mask(&self) -> impl Iterator<Item = &str> {
        self.always_mask.iter().map(String::as_str)
    }

    /// Exact names that are never masked
    pub fn never_mask(&self) -> impl Iterator<Item = &str> {
        self.never_mask.iter().map(String::as_str)
    }
}

/// Whether the value of `field_name` must be treated as a secret under `policy`
pub fn should_mask(field_name: &str, policy: &MaskingPolicy) -> bool {
    policy.should_mask(field_name)
}

fn split_field_list(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
}
