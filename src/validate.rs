//! Provider response validation and score normalization.
//!
//! The provider is instructed to return bare JSON but is not guaranteed to
//! comply, so the first balanced `{...}` span is pulled out of the raw text
//! before parsing. A totalScore above the framework's weight budget is
//! clamped and its rating band recomputed; an in-bounds response passes
//! through with the provider-supplied rating untouched. That asymmetry is
//! intentional and pinned by tests.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, ScholarLensError};
use crate::framework::FrameworkGuidelines;
use crate::schemas::{BiasAnalysis, CredibilityScore, KeyFindings, Rating, ResearchPerspective};

/// The analysis portion of a provider reply, before paper metadata is attached
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    pub credibility: CredibilityScore,
    #[serde(default)]
    pub bias: BiasAnalysis,
    #[serde(default)]
    pub key_findings: KeyFindings,
    #[serde(default)]
    pub perspective: ResearchPerspective,
}

/// Extract the first balanced `{...}` span from raw provider text.
///
/// Tolerates prose or markdown fences around the object. Braces inside JSON
/// string literals do not count toward the balance.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (idx, ch) in raw[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..start + idx + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Rating band for a score against the weight budget
pub fn rating_for_score(total_score: f64, max_weight: f64) -> Rating {
    if total_score >= max_weight * 0.9 {
        Rating::Exemplary
    } else if total_score >= max_weight * 0.75 {
        Rating::Strong
    } else if total_score >= max_weight * 0.5 {
        Rating::Moderate
    } else if total_score >= max_weight * 0.25 {
        Rating::Weak
    } else if total_score > 0.0 {
        Rating::VeryPoor
    } else {
        Rating::Invalid
    }
}

/// Parse, check, and normalize a raw provider reply against the framework
/// that produced the prompt.
pub fn validate_response(
    raw: &str,
    framework: &FrameworkGuidelines,
) -> Result<AnalysisPayload> {
    let span = extract_json_object(raw).ok_or_else(|| ScholarLensError::Parse {
        message: "no JSON object found in provider response".to_string(),
    })?;

    let value: serde_json::Value =
        serde_json::from_str(span).map_err(|e| ScholarLensError::Parse {
            message: format!("provider JSON did not parse: {}", e),
        })?;

    let credibility = value
        .get("credibility")
        .ok_or_else(|| ScholarLensError::Schema {
            message: "missing credibility assessment".to_string(),
        })?;

    // A totalScore of exactly 0 is present, not missing
    let total = credibility
        .get("totalScore")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| ScholarLensError::Schema {
            message: "missing credibility totalScore".to_string(),
        })?;

    let mut payload: AnalysisPayload =
        serde_json::from_value(value).map_err(|e| ScholarLensError::Parse {
            message: format!("provider payload did not match expected shape: {}", e),
        })?;

    let max_weight = framework.weights.total();
    if total > max_weight {
        warn!(
            total_score = total,
            max_weight, "credibility score exceeds maximum weight, capping"
        );
        payload.credibility.total_score = max_weight;
        payload.credibility.rating = rating_for_score(max_weight, max_weight);
    }

    Ok(payload)
}
