use serde::{Deserialize, Serialize};

use crate::shared::Result;

/// Severity of a vulnerability, ordered from least to most severe.
///
/// `Unassigned` doubles as the fold target for findings whose severity
/// is missing from the source data: a finding without a usable severity
/// still counts towards the totals, it just lands in the bottom bucket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    #[default]
    Unassigned,
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Unassigned => write!(f, "UNASSIGNED"),
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Triage decision recorded against a finding.
///
/// `NotSet` is the default for findings nobody has looked at. Every
/// other variant means a decision exists, including `InTriage`: the
/// finding has entered the audit workflow even if no terminal verdict
/// was reached yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisState {
    #[default]
    NotSet,
    InTriage,
    Exploitable,
    Resolved,
    FalsePositive,
    NotAffected,
}

impl AnalysisState {
    /// Whether a triage decision has been explicitly recorded
    pub fn is_recorded(&self) -> bool {
        !matches!(self, AnalysisState::NotSet)
    }
}

/// A vulnerability finding: the association between a component and a
/// known vulnerability.
///
/// Findings are created by ingestion and mutated by the triage
/// workflow; this core only reads them. The severity is optional at
/// the storage boundary (nullable column upstream) and folds to
/// `Unassigned` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    vuln_id: String,
    #[serde(default)]
    severity: Option<Severity>,
    #[serde(default)]
    analysis: AnalysisState,
    #[serde(default)]
    suppressed: bool,
}

impl Finding {
    /// Creates a non-suppressed, unaudited finding
    ///
    /// # Errors
    /// Returns an error if `vuln_id` is empty.
    pub fn new(vuln_id: impl Into<String>, severity: Severity) -> Result<Self> {
        let vuln_id = vuln_id.into();
        if vuln_id.trim().is_empty() {
            anyhow::bail!("Vulnerability identifier cannot be empty");
        }

        Ok(Self {
            vuln_id,
            severity: Some(severity),
            analysis: AnalysisState::NotSet,
            suppressed: false,
        })
    }

    /// Records a triage decision on the finding
    pub fn with_analysis(mut self, state: AnalysisState) -> Self {
        self.analysis = state;
        self
    }

    /// Marks the finding as suppressed
    ///
    /// Suppression is independent of the analysis state; a finding can
    /// be suppressed without any triage decision and vice versa.
    pub fn suppress(mut self) -> Self {
        self.suppressed = true;
        self
    }

    pub fn vuln_id(&self) -> &str {
        &self.vuln_id
    }

    /// Severity bucket for this finding; missing severities fold to
    /// `Unassigned` so the finding is never dropped from the totals.
    pub fn severity(&self) -> Severity {
        self.severity.unwrap_or_default()
    }

    pub fn analysis(&self) -> AnalysisState {
        self.analysis
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Whether a triage decision has been recorded for this finding
    pub fn is_audited(&self) -> bool {
        self.analysis.is_recorded()
    }
}
