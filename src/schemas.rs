//! Plain-data types for papers, credibility reports, and bookmarks.
//!
//! Wire names are camelCase to match the JSON contract the provider is
//! instructed to emit. Everything the model may omit is defaulted so a
//! sparse-but-valid response still deserializes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::{AcademicField, DocumentType};

/// A submitted research document, by search result or upload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub document_type: DocumentType,
    pub field: AcademicField,
}

/// Qualitative band derived from totalScore / max weight sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rating {
    Exemplary,
    Strong,
    Moderate,
    Weak,
    VeryPoor,
    #[default]
    Invalid,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Exemplary => "Exemplary",
            Rating::Strong => "Strong",
            Rating::Moderate => "Moderate",
            Rating::Weak => "Weak",
            Rating::VeryPoor => "Very Poor",
            Rating::Invalid => "Invalid",
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Unrecognized rating strings from the provider become Invalid rather than
// failing the whole payload.
impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "Exemplary" => Rating::Exemplary,
            "Strong" => Rating::Strong,
            "Moderate" => Rating::Moderate,
            "Weak" => Rating::Weak,
            "Very Poor" => Rating::VeryPoor,
            _ => Rating::Invalid,
        })
    }
}

/// One scored axis of the credibility assessment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredibilityComponent {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub max_score: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub evidence: Vec<String>,
}

/// Six components plus the derived total and rating band
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredibilityScore {
    #[serde(default)]
    pub methodological_rigor: CredibilityComponent,
    #[serde(default)]
    pub data_transparency: CredibilityComponent,
    #[serde(default)]
    pub source_quality: CredibilityComponent,
    #[serde(default)]
    pub author_credibility: CredibilityComponent,
    #[serde(default)]
    pub statistical_validity: CredibilityComponent,
    #[serde(default)]
    pub logical_consistency: CredibilityComponent,
    pub total_score: f64,
    #[serde(default)]
    pub rating: Rating,
}

/// A single detected bias. The type/severity labels come from the model
/// and are carried through as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasDetection {
    #[serde(rename = "type", default)]
    pub bias_type: String,
    #[serde(default)]
    pub evidence: String,
    #[serde(default)]
    pub severity: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasAnalysis {
    #[serde(default)]
    pub biases: Vec<BiasDetection>,
    #[serde(default)]
    pub overall_level: String,
    #[serde(default)]
    pub justification: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchFundamentals {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub journal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default)]
    pub publication_date: String,
    #[serde(default)]
    pub article_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Methodology {
    #[serde(default)]
    pub study_design: String,
    #[serde(default)]
    pub sample_size: String,
    #[serde(default)]
    pub population: String,
    #[serde(default)]
    pub sampling_method: String,
    #[serde(default)]
    pub setting: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intervention: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_groups: Option<String>,
    #[serde(default)]
    pub outcomes_measures: Vec<String>,
    #[serde(default)]
    pub statistical_methods: Vec<String>,
    #[serde(default)]
    pub study_duration: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Findings {
    #[serde(default)]
    pub primary_findings: Vec<String>,
    #[serde(default)]
    pub secondary_findings: Vec<String>,
    #[serde(default)]
    pub effect_sizes: Vec<String>,
    #[serde(default)]
    pub clinical_significance: String,
    #[serde(default)]
    pub unexpected_findings: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limitations {
    #[serde(default)]
    pub author_acknowledged: Vec<String>,
    #[serde(default)]
    pub methodological_identified: Vec<String>,
    #[serde(default)]
    pub severity: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conclusions {
    #[serde(default)]
    pub primary_conclusion: String,
    #[serde(default)]
    pub supported_by_data: bool,
    #[serde(default)]
    pub practical_implications: Vec<String>,
    #[serde(default)]
    pub future_research_needed: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub generalizability: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyFindings {
    #[serde(default)]
    pub fundamentals: ResearchFundamentals,
    #[serde(default)]
    pub research_question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypothesis: Option<String>,
    #[serde(default)]
    pub methodology: Methodology,
    #[serde(default)]
    pub findings: Findings,
    #[serde(default)]
    pub limitations: Limitations,
    #[serde(default)]
    pub conclusions: Conclusions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerspectiveAssumptions {
    #[serde(default)]
    pub stated: Vec<String>,
    #[serde(default)]
    pub unstated: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerspectiveContext {
    #[serde(default)]
    pub geographic: String,
    #[serde(default)]
    pub temporal: String,
    #[serde(default)]
    pub institutional: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchPerspective {
    #[serde(default)]
    pub theoretical_framework: String,
    #[serde(default)]
    pub paradigm: String,
    #[serde(default)]
    pub disciplinary_perspective: String,
    #[serde(default)]
    pub epistemological_stance: String,
    #[serde(default)]
    pub assumptions: PerspectiveAssumptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideological_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_reflexivity: Option<String>,
    #[serde(default)]
    pub context: PerspectiveContext,
}

/// Complete report for one analysis request. Immutable once created;
/// user notes live on the bookmark wrapper, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub paper: Paper,
    pub credibility: CredibilityScore,
    #[serde(default)]
    pub bias: BiasAnalysis,
    #[serde(default)]
    pub key_findings: KeyFindings,
    #[serde(default)]
    pub perspective: ResearchPerspective,
    pub timestamp: DateTime<Utc>,
}

/// A saved analysis with optional free-text notes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkedPaper {
    pub id: String,
    pub analysis: AnalysisResult,
    pub bookmarked_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
