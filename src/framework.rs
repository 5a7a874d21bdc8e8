//! Scoring framework registry: weight maxima per document type, qualitative
//! guidance per academic field.
//!
//! The lookup is total. Every (type, field) pair resolves to a guideline set;
//! `Unknown` and `Interdisciplinary` are ordinary rows, not error paths. The
//! six weight maxima always sum to 10.0 for every type, redistributed by what
//! that genre can actually demonstrate (theoretical work shifts budget to
//! logical consistency, empirical work to rigor and statistics).

use serde::{Deserialize, Serialize};

use crate::classify::{AcademicField, DocumentType};

/// Maximum achievable score per credibility axis, summing to 10.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkWeights {
    pub methodological_rigor: f64,
    pub data_transparency: f64,
    pub source_quality: f64,
    pub author_credibility: f64,
    pub statistical_validity: f64,
    pub logical_consistency: f64,
}

impl FrameworkWeights {
    /// The score budget: sum of the six maxima
    pub fn total(&self) -> f64 {
        self.methodological_rigor
            + self.data_transparency
            + self.source_quality
            + self.author_credibility
            + self.statistical_validity
            + self.logical_consistency
    }

    /// Weight row for a document type. Field does not move the numbers, only
    /// the prose guidance.
    pub fn for_type(ty: DocumentType) -> Self {
        let (mr, dt, sq, ac, sv, lc) = match ty {
            DocumentType::Article => (2.5, 2.0, 1.5, 1.0, 2.0, 1.0),
            DocumentType::Review => (1.5, 1.5, 3.0, 1.5, 1.0, 1.5),
            DocumentType::Book => (1.0, 1.0, 2.5, 2.5, 0.5, 2.5),
            DocumentType::Dissertation => (3.0, 2.0, 1.5, 1.0, 1.5, 1.0),
            DocumentType::Proposal => (2.5, 1.0, 2.0, 1.5, 1.0, 2.0),
            DocumentType::CaseStudy => (2.5, 2.5, 1.5, 1.0, 1.0, 1.5),
            DocumentType::Essay => (0.5, 0.5, 2.5, 2.0, 0.5, 4.0),
            DocumentType::Theoretical => (1.0, 0.5, 2.0, 1.5, 0.5, 4.5),
            DocumentType::Preprint => (2.5, 2.5, 1.5, 1.5, 1.5, 0.5),
            DocumentType::Conference => (2.0, 1.5, 1.5, 1.5, 2.0, 1.5),
            DocumentType::Unknown => (2.0, 1.5, 2.0, 1.5, 1.5, 1.5),
        };
        Self {
            methodological_rigor: mr,
            data_transparency: dt,
            source_quality: sq,
            author_credibility: ac,
            statistical_validity: sv,
            logical_consistency: lc,
        }
    }
}

/// Scoring weights plus field-adapted qualitative guidance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkGuidelines {
    pub weights: FrameworkWeights,
    pub assessment_focus: Vec<String>,
    pub bias_priorities: Vec<String>,
}

impl FrameworkGuidelines {
    /// Resolve guidelines for a (type, field) pair. Never fails.
    pub fn for_document(ty: DocumentType, field: AcademicField) -> Self {
        Self {
            weights: FrameworkWeights::for_type(ty),
            assessment_focus: assessment_focus(field)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            bias_priorities: bias_priorities(field)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

fn assessment_focus(field: AcademicField) -> &'static [&'static str] {
    match field {
        AcademicField::NaturalSciences => &[
            "Reproducibility of experimental design",
            "Measurement instrument validity and calibration",
            "Statistical power relative to sample size",
            "Control of confounding variables",
        ],
        AcademicField::Engineering => &[
            "Technical feasibility and design justification",
            "Scalability beyond laboratory conditions",
            "Cost-benefit and risk assessment completeness",
            "Practical implementation constraints",
        ],
        AcademicField::Medical => &[
            "Patient safety and ethical compliance",
            "Statistical power for clinical significance",
            "Blinding and randomization adequacy",
            "Adverse event reporting completeness",
        ],
        AcademicField::Agricultural => &[
            "Representativeness of environmental conditions",
            "Seasonal and regional variation handling",
            "Plot and sample size appropriateness",
            "Economic feasibility and sustainability",
        ],
        AcademicField::SocialSciences => &[
            "Sampling representativeness",
            "Self-report validity and social desirability effects",
            "Generalizability beyond the studied context",
            "Consideration of alternative explanations",
        ],
        AcademicField::Humanities => &[
            "Interpretive coherence and evidence grounding",
            "Source authenticity and provenance",
            "Scholarly apparatus of citations and references",
            "Awareness of the author's interpretive stance",
        ],
        AcademicField::FormalSciences => &[
            "Completeness of logical proofs",
            "Axiom adequacy and justification",
            "Clarity and necessity of assumptions",
            "Appropriateness of generalizability claims",
        ],
        AcademicField::Interdisciplinary => &[
            "Quality of integration across disciplines",
            "Method appropriateness for the combined fields",
            "Resolution of disciplinary tensions",
            "Whether the interdisciplinary approach adds value",
        ],
    }
}

fn bias_priorities(field: AcademicField) -> &'static [&'static str] {
    match field {
        AcademicField::NaturalSciences => &[
            "Confirmation bias in experimental interpretation",
            "Publication bias toward positive results",
            "Measurement bias from instrumentation choices",
        ],
        AcademicField::Engineering => &[
            "Funding bias from industry sponsorship",
            "Reporting bias toward successful prototypes",
            "Selection bias in benchmark choices",
        ],
        AcademicField::Medical => &[
            "Funding and conflict-of-interest bias",
            "Selection bias in patient recruitment",
            "Reporting bias in adverse events",
        ],
        AcademicField::Agricultural => &[
            "Selection bias in site and season choice",
            "Funding bias from agrochemical sponsorship",
            "Reporting bias toward favorable yields",
        ],
        AcademicField::SocialSciences => &[
            "Sampling and selection bias",
            "Demographic bias in participant pools",
            "Confirmation bias in qualitative coding",
        ],
        AcademicField::Humanities => &[
            "Citation bias toward a single school of thought",
            "Confirmation bias in source selection",
            "Cultural and ideological framing bias",
        ],
        AcademicField::FormalSciences => &[
            "Selection bias in example and counterexample choice",
            "Publication bias toward novel results",
            "Citation bias within subfields",
        ],
        AcademicField::Interdisciplinary => &[
            "Disciplinary dominance bias",
            "Selection bias in which fields are integrated",
            "Confirmation bias across methodological traditions",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_ten_for_every_pair() {
        for ty in DocumentType::ALL {
            for field in AcademicField::ALL {
                let g = FrameworkGuidelines::for_document(ty, field);
                let total = g.weights.total();
                assert!(
                    (total - 10.0).abs() < 0.01,
                    "weights for {:?}/{:?} sum to {}",
                    ty,
                    field,
                    total
                );
            }
        }
    }

    #[test]
    fn theoretical_work_weights_logic_highest() {
        let w = FrameworkWeights::for_type(DocumentType::Theoretical);
        assert!(w.logical_consistency > w.methodological_rigor);
        assert!(w.logical_consistency > w.statistical_validity);
    }

    #[test]
    fn empirical_work_weights_rigor_and_statistics() {
        let w = FrameworkWeights::for_type(DocumentType::Article);
        assert!(w.methodological_rigor >= 2.0);
        assert!(w.statistical_validity >= 2.0);
    }

    #[test]
    fn guidance_is_total_and_nonempty() {
        for field in AcademicField::ALL {
            let g = FrameworkGuidelines::for_document(DocumentType::Unknown, field);
            assert!(!g.assessment_focus.is_empty());
            assert!(!g.bias_priorities.is_empty());
        }
    }

    #[test]
    fn weights_depend_on_type_not_field() {
        let a = FrameworkGuidelines::for_document(DocumentType::Review, AcademicField::Medical);
        let b =
            FrameworkGuidelines::for_document(DocumentType::Review, AcademicField::Humanities);
        assert_eq!(a.weights, b.weights);
    }
}
