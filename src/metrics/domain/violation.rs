use serde::{Deserialize, Serialize};

use crate::shared::Result;

/// Enforcement level of a policy violation, ordered from least to most
/// severe.
///
/// `Info` is also the fold target for violations whose state is missing
/// from the source data; they stay in the totals at the lowest
/// enforcement level instead of disappearing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationState {
    #[default]
    Info,
    Warn,
    Fail,
}

impl std::fmt::Display for ViolationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationState::Info => write!(f, "INFO"),
            ViolationState::Warn => write!(f, "WARN"),
            ViolationState::Fail => write!(f, "FAIL"),
        }
    }
}

/// Category of the policy rule a violation belongs to.
///
/// The categories are mutually exclusive. `Operational` is the
/// catch-all category and the fold target when the type is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationType {
    License,
    Security,
    #[default]
    Operational,
}

impl std::fmt::Display for ViolationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationType::License => write!(f, "LICENSE"),
            ViolationType::Security => write!(f, "SECURITY"),
            ViolationType::Operational => write!(f, "OPERATIONAL"),
        }
    }
}

/// Audit decision recorded against a policy violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationAnalysisState {
    #[default]
    NotSet,
    Approved,
    Rejected,
}

impl ViolationAnalysisState {
    /// Whether an audit decision has been explicitly recorded
    pub fn is_recorded(&self) -> bool {
        !matches!(self, ViolationAnalysisState::NotSet)
    }
}

/// A policy violation: the association between a component and a policy
/// rule it breaches.
///
/// Violations are produced by policy evaluation and mutated by the
/// violation-audit workflow; this core only reads them. State and type
/// are optional at the storage boundary and fold to `Info` and
/// `Operational` respectively when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyViolation {
    policy_name: String,
    #[serde(default)]
    state: Option<ViolationState>,
    #[serde(default, rename = "type")]
    violation_type: Option<ViolationType>,
    #[serde(default)]
    analysis: ViolationAnalysisState,
    #[serde(default)]
    suppressed: bool,
}

impl PolicyViolation {
    /// Creates a non-suppressed, unaudited violation
    ///
    /// # Errors
    /// Returns an error if `policy_name` is empty.
    pub fn new(
        policy_name: impl Into<String>,
        state: ViolationState,
        violation_type: ViolationType,
    ) -> Result<Self> {
        let policy_name = policy_name.into();
        if policy_name.trim().is_empty() {
            anyhow::bail!("Policy name cannot be empty");
        }

        Ok(Self {
            policy_name,
            state: Some(state),
            violation_type: Some(violation_type),
            analysis: ViolationAnalysisState::NotSet,
            suppressed: false,
        })
    }

    /// Records an audit decision on the violation
    pub fn with_analysis(mut self, state: ViolationAnalysisState) -> Self {
        self.analysis = state;
        self
    }

    /// Marks the violation as suppressed
    pub fn suppress(mut self) -> Self {
        self.suppressed = true;
        self
    }

    pub fn policy_name(&self) -> &str {
        &self.policy_name
    }

    /// Enforcement bucket for this violation; missing states fold to
    /// `Info`.
    pub fn state(&self) -> ViolationState {
        self.state.unwrap_or_default()
    }

    /// Type bucket for this violation; missing types fold to
    /// `Operational`.
    pub fn violation_type(&self) -> ViolationType {
        self.violation_type.unwrap_or_default()
    }

    pub fn analysis(&self) -> ViolationAnalysisState {
        self.analysis
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Whether an audit decision has been recorded for this violation
    pub fn is_audited(&self) -> bool {
        self.analysis.is_recorded()
    }
}
