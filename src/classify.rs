//! Document type and academic field classification from keyword signals.
//!
//! Classification never fails: when no candidate scores above the minimum
//! threshold the type falls back to `Unknown` and the field to
//! `Interdisciplinary`. Deterministic by construction (pure functions over
//! the input text, fixed candidate order for tie-breaking).

use serde::{Deserialize, Serialize};

/// Closed set of document genres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    Article,
    Review,
    Book,
    Dissertation,
    Proposal,
    CaseStudy,
    Essay,
    Theoretical,
    Preprint,
    Conference,
    Unknown,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Article => "article",
            DocumentType::Review => "review",
            DocumentType::Book => "book",
            DocumentType::Dissertation => "dissertation",
            DocumentType::Proposal => "proposal",
            DocumentType::CaseStudy => "case-study",
            DocumentType::Essay => "essay",
            DocumentType::Theoretical => "theoretical",
            DocumentType::Preprint => "preprint",
            DocumentType::Conference => "conference",
            DocumentType::Unknown => "unknown",
        }
    }

    /// All classifiable types, most specific first. Order matters: it is the
    /// tie-break when two candidates score equally.
    pub const CANDIDATES: [DocumentType; 10] = [
        DocumentType::Review,
        DocumentType::Dissertation,
        DocumentType::Proposal,
        DocumentType::CaseStudy,
        DocumentType::Preprint,
        DocumentType::Conference,
        DocumentType::Book,
        DocumentType::Theoretical,
        DocumentType::Essay,
        DocumentType::Article,
    ];

    pub const ALL: [DocumentType; 11] = [
        DocumentType::Article,
        DocumentType::Review,
        DocumentType::Book,
        DocumentType::Dissertation,
        DocumentType::Proposal,
        DocumentType::CaseStudy,
        DocumentType::Essay,
        DocumentType::Theoretical,
        DocumentType::Preprint,
        DocumentType::Conference,
        DocumentType::Unknown,
    ];
}

/// Closed set of disciplinary domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcademicField {
    NaturalSciences,
    Engineering,
    Medical,
    Agricultural,
    SocialSciences,
    Humanities,
    FormalSciences,
    Interdisciplinary,
}

impl AcademicField {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcademicField::NaturalSciences => "natural-sciences",
            AcademicField::Engineering => "engineering",
            AcademicField::Medical => "medical",
            AcademicField::Agricultural => "agricultural",
            AcademicField::SocialSciences => "social-sciences",
            AcademicField::Humanities => "humanities",
            AcademicField::FormalSciences => "formal-sciences",
            AcademicField::Interdisciplinary => "interdisciplinary",
        }
    }

    /// Human-readable name ("natural sciences")
    pub fn display_name(&self) -> String {
        self.as_str().replace('-', " ")
    }

    pub const CANDIDATES: [AcademicField; 7] = [
        AcademicField::Medical,
        AcademicField::Agricultural,
        AcademicField::NaturalSciences,
        AcademicField::Engineering,
        AcademicField::FormalSciences,
        AcademicField::SocialSciences,
        AcademicField::Humanities,
    ];

    pub const ALL: [AcademicField; 8] = [
        AcademicField::NaturalSciences,
        AcademicField::Engineering,
        AcademicField::Medical,
        AcademicField::Agricultural,
        AcademicField::SocialSciences,
        AcademicField::Humanities,
        AcademicField::FormalSciences,
        AcademicField::Interdisciplinary,
    ];
}

/// A title keyword hit counts this much more than a body hit
const TITLE_WEIGHT: usize = 3;
/// Candidates scoring below this resolve to the fallback value
const MIN_SIGNAL: usize = 1;

fn type_keywords(ty: DocumentType) -> &'static [&'static str] {
    match ty {
        DocumentType::Review => &[
            "systematic review",
            "literature review",
            "meta-analysis",
            "scoping review",
            "review of the literature",
            "studies were included",
            "prisma",
        ],
        DocumentType::Dissertation => &[
            "dissertation",
            "thesis",
            "in partial fulfillment",
            "doctoral",
            "degree of doctor",
            "committee chair",
        ],
        DocumentType::Proposal => &[
            "research proposal",
            "proposed study",
            "we propose to",
            "specific aims",
            "anticipated outcomes",
            "project timeline",
        ],
        DocumentType::CaseStudy => &[
            "case study",
            "case report",
            "case series",
            "single case",
            "the case of",
        ],
        DocumentType::Preprint => &[
            "preprint",
            "arxiv",
            "biorxiv",
            "medrxiv",
            "not yet peer reviewed",
            "has not been peer reviewed",
        ],
        DocumentType::Conference => &[
            "proceedings",
            "conference paper",
            "conference on",
            "workshop on",
            "symposium",
            "presented at",
        ],
        DocumentType::Book => &[
            "isbn",
            "chapter",
            "handbook",
            "textbook",
            "first edition",
            "second edition",
            "university press",
        ],
        DocumentType::Theoretical => &[
            "theorem",
            "we prove",
            "proposition",
            "conceptual framework",
            "theoretical model",
            "axiomatic",
        ],
        DocumentType::Essay => &[
            "essay",
            "i argue",
            "this essay",
            "in this piece",
            "opinion",
        ],
        DocumentType::Article => &[
            "abstract",
            "introduction",
            "methods",
            "results",
            "discussion",
            "journal",
            "doi",
            "peer-reviewed",
            "we conducted",
        ],
        DocumentType::Unknown => &[],
    }
}

fn field_keywords(field: AcademicField) -> &'static [&'static str] {
    match field {
        AcademicField::Medical => &[
            "patient",
            "clinical",
            "treatment",
            "disease",
            "diagnosis",
            "randomized",
            "placebo",
            "therapy",
            "dose",
            "hospital",
            "symptom",
        ],
        AcademicField::Agricultural => &[
            "crop",
            "soil",
            "yield",
            "irrigation",
            "livestock",
            "fertilizer",
            "agronomy",
            "cultivar",
            "harvest",
            "farm",
        ],
        AcademicField::NaturalSciences => &[
            "physics",
            "chemistry",
            "biology",
            "quantum",
            "molecule",
            "genome",
            "species",
            "ecosystem",
            "particle",
            "climate",
            "geology",
        ],
        AcademicField::Engineering => &[
            "engineering",
            "prototype",
            "software",
            "hardware",
            "circuit",
            "manufacturing",
            "throughput",
            "latency",
            "sensor",
            "control system",
        ],
        AcademicField::FormalSciences => &[
            "theorem",
            "proof",
            "lemma",
            "logic",
            "mathematics",
            "computation",
            "algebra",
            "axiom",
            "complexity",
            "algorithm",
        ],
        AcademicField::SocialSciences => &[
            "survey",
            "participants",
            "interview",
            "social",
            "behavior",
            "policy",
            "economic",
            "education",
            "psychology",
            "questionnaire",
            "community",
        ],
        AcademicField::Humanities => &[
            "history",
            "literature",
            "philosophy",
            "culture",
            "narrative",
            "archive",
            "discourse",
            "ethics",
            "manuscript",
            "historiography",
        ],
        AcademicField::Interdisciplinary => &[],
    }
}

/// Weighted occurrence count of a keyword set across title and body
fn keyword_score(keywords: &[&str], title_lower: &str, text_lower: &str) -> usize {
    let mut score = 0;
    for kw in keywords {
        score += title_lower.matches(kw).count() * TITLE_WEIGHT;
        score += text_lower.matches(kw).count();
    }
    score
}

/// Classify the document genre from its text and title
pub fn classify_document_type(text: &str, title: &str) -> DocumentType {
    let title_lower = title.to_lowercase();
    let text_lower = text.to_lowercase();

    let mut best = DocumentType::Unknown;
    let mut best_score = 0usize;
    for ty in DocumentType::CANDIDATES {
        let score = keyword_score(type_keywords(ty), &title_lower, &text_lower);
        if score > best_score {
            best = ty;
            best_score = score;
        }
    }

    if best_score >= MIN_SIGNAL {
        best
    } else {
        DocumentType::Unknown
    }
}

/// Classify the disciplinary domain from its text and title
pub fn classify_academic_field(text: &str, title: &str) -> AcademicField {
    let title_lower = title.to_lowercase();
    let text_lower = text.to_lowercase();

    let mut best = AcademicField::Interdisciplinary;
    let mut best_score = 0usize;
    for field in AcademicField::CANDIDATES {
        let score = keyword_score(field_keywords(field), &title_lower, &text_lower);
        if score > best_score {
            best = field;
            best_score = score;
        }
    }

    if best_score >= MIN_SIGNAL {
        best
    } else {
        AcademicField::Interdisciplinary
    }
}

/// Classify both axes at once
pub fn classify(text: &str, title: &str) -> (DocumentType, AcademicField) {
    (
        classify_document_type(text, title),
        classify_academic_field(text, title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(classify_document_type("", ""), DocumentType::Unknown);
        assert_eq!(
            classify_academic_field("", ""),
            AcademicField::Interdisciplinary
        );
    }

    #[test]
    fn title_alone_carries_signal() {
        // Empty body, strong title keyword
        assert_eq!(
            classify_document_type("", "A Dissertation on Soil Microbiomes"),
            DocumentType::Dissertation
        );
    }

    #[test]
    fn medical_text_classifies_as_medical() {
        let text = "We enrolled 120 patients in a randomized placebo-controlled \
                    trial. Treatment arms were blinded and clinical outcomes \
                    were assessed at the hospital.";
        assert_eq!(
            classify_academic_field(text, "Outcomes of a new therapy"),
            AcademicField::Medical
        );
    }

    #[test]
    fn review_beats_article_on_specific_signal() {
        let text = "Abstract. Introduction. We performed a systematic review \
                    following PRISMA guidelines. Results and discussion follow.";
        assert_eq!(
            classify_document_type(text, "A systematic review of irrigation practices"),
            DocumentType::Review
        );
    }

    #[test]
    fn title_hits_outweigh_body_hits() {
        // One title hit (x3) must beat two body hits
        let text = "patient patient";
        assert_eq!(
            classify_academic_field(text, "Crop yield under drought"),
            AcademicField::Agricultural
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let text = "We propose to study quantum effects in photosynthesis. \
                    Specific aims are listed with a project timeline.";
        let title = "Research proposal: quantum biology";
        let first = classify(text, title);
        for _ in 0..10 {
            assert_eq!(classify(text, title), first);
        }
    }
}
