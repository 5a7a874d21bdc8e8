//! Assessment prompt construction.
//!
//! Two builders: the full-text prompt embeds document metadata, the six
//! weight maxima (each echoed as its own instruction line), the field's focus
//! areas and bias priorities, the truncated document text, and the JSON
//! schema the provider must emit with no surrounding prose. The abstract-only
//! prompt is the conservative variant used when too little text was
//! extracted. Both are pure string functions.

use crate::classify::{AcademicField, DocumentType};
use crate::framework::FrameworkGuidelines;

/// Document text beyond this many characters is cut from the prompt
pub const MAX_DOCUMENT_CHARS: usize = 150_000;
/// Appended when the document text was truncated
pub const CONTINUATION_MARKER: &str = "[... document continues ...]";
/// Extracted text at or below this length routes to the abstract-only prompt
pub const FULL_TEXT_THRESHOLD: usize = 1000;

/// Everything the full-text builder needs, borrowed from the caller
#[derive(Debug, Clone)]
pub struct PromptContext<'a> {
    pub title: &'a str,
    pub document_type: DocumentType,
    pub field: AcademicField,
    pub framework: &'a FrameworkGuidelines,
    pub full_text: &'a str,
}

/// Human-readable profile of a document type used in prompt prose
struct TypeProfile {
    name: &'static str,
    category: &'static str,
    description: &'static str,
    priorities: &'static str,
}

fn type_profile(ty: DocumentType) -> TypeProfile {
    match ty {
        DocumentType::Article => TypeProfile {
            name: "Research Article",
            category: "publication",
            description: "Peer-reviewed original research with methods, results, and discussion",
            priorities:
                "methodological rigor, statistical validity, data transparency, and peer review status",
        },
        DocumentType::Review => TypeProfile {
            name: "Literature Review",
            category: "synthesis",
            description: "Comprehensive synthesis of published research on a topic",
            priorities:
                "source quality, comprehensiveness, synthesis methodology, and author expertise",
        },
        DocumentType::Book => TypeProfile {
            name: "Book",
            category: "monograph",
            description: "Extended scholarly work, typically comprehensive treatment of a topic",
            priorities:
                "author credibility, logical coherence, comprehensiveness, and evidence quality",
        },
        DocumentType::Dissertation => TypeProfile {
            name: "Dissertation/Thesis",
            category: "academic work",
            description: "Original research submitted for degree requirement",
            priorities:
                "methodological rigor, research novelty, advisor quality, and ethical compliance",
        },
        DocumentType::Proposal => TypeProfile {
            name: "Research Proposal",
            category: "prospective work",
            description: "Plan for future research with proposed methodology",
            priorities: "feasibility, preliminary evidence, timeline realism, and innovation",
        },
        DocumentType::CaseStudy => TypeProfile {
            name: "Case Study",
            category: "empirical work",
            description: "In-depth analysis of specific case(s) or situation(s)",
            priorities:
                "case selection justification, triangulation, researcher reflexivity, and data quality",
        },
        DocumentType::Essay => TypeProfile {
            name: "Essay",
            category: "argumentative work",
            description: "Author's perspective and argument on a topic",
            priorities:
                "logical argument coherence, source quality, acknowledgment of opposing views",
        },
        DocumentType::Theoretical => TypeProfile {
            name: "Theoretical Work",
            category: "conceptual work",
            description: "Development or critique of theory without empirical data",
            priorities:
                "logical consistency, theoretical coherence, conceptual clarity, and falsifiability",
        },
        DocumentType::Preprint => TypeProfile {
            name: "Preprint",
            category: "preliminary publication",
            description: "Manuscript shared before peer review",
            priorities:
                "preliminary validation, author track record, clarity of peer review status",
        },
        DocumentType::Conference => TypeProfile {
            name: "Conference Paper",
            category: "conference contribution",
            description: "Research presented at academic conference",
            priorities:
                "conference selectivity, peer review rigor, preliminary nature, and innovation",
        },
        DocumentType::Unknown => TypeProfile {
            name: "Unknown Document",
            category: "unidentified work",
            description: "Document type could not be determined",
            priorities:
                "format completeness, author identification, claims substantiation, logical coherence",
        },
    }
}

fn field_guidance(field: AcademicField) -> &'static str {
    match field {
        AcademicField::NaturalSciences => {
            "FOR NATURAL SCIENCES:\n\
             - Emphasize reproducibility and experimental design rigor\n\
             - Assess measurement instrument calibration and validity\n\
             - Evaluate statistical power for sample sizes\n\
             - Check for control of confounding variables\n\
             - Consider generalizability across conditions"
        }
        AcademicField::Engineering => {
            "FOR ENGINEERING:\n\
             - Prioritize technical feasibility and design justification\n\
             - Assess scalability from laboratory to real-world application\n\
             - Evaluate cost-benefit analysis completeness\n\
             - Check for safety and risk assessment\n\
             - Consider practical implementation constraints"
        }
        AcademicField::Medical => {
            "FOR MEDICAL RESEARCH:\n\
             - Prioritize patient safety and ethical compliance\n\
             - Assess statistical power for clinical significance\n\
             - Evaluate blinding and randomization adequacy\n\
             - Check for adverse event reporting completeness\n\
             - Consider conflict of interest and funding source"
        }
        AcademicField::Agricultural => {
            "FOR AGRICULTURAL RESEARCH:\n\
             - Emphasize environmental condition representation\n\
             - Assess seasonal and regional variation handling\n\
             - Evaluate sample/plot size appropriacy\n\
             - Check for economic feasibility consideration\n\
             - Consider sustainability implications"
        }
        AcademicField::SocialSciences => {
            "FOR SOCIAL SCIENCES:\n\
             - Prioritize sampling representativeness\n\
             - Assess self-report validity and social desirability bias\n\
             - Evaluate context adequacy for generalizing\n\
             - Check for alternative explanation consideration\n\
             - Consider cultural sensitivity and bias awareness"
        }
        AcademicField::Humanities => {
            "FOR HUMANITIES:\n\
             - Emphasize interpretive coherence and evidence grounding\n\
             - Assess source authenticity and provenance\n\
             - Evaluate scholarly apparatus (citations, references)\n\
             - Check for awareness of own interpretive biases\n\
             - Consider historiographical appropriateness"
        }
        AcademicField::FormalSciences => {
            "FOR FORMAL SCIENCES:\n\
             - Prioritize logical proof completeness\n\
             - Assess axiom adequacy and justification\n\
             - Evaluate assumption clarity and necessity\n\
             - Check for generalizability claims appropriateness\n\
             - Consider practical computational implications"
        }
        AcademicField::Interdisciplinary => {
            "FOR INTERDISCIPLINARY WORK:\n\
             - Evaluate integration quality across disciplines\n\
             - Assess method appropriateness for combined fields\n\
             - Check for disciplinary tension resolution\n\
             - Consider whether interdisciplinary approach adds value\n\
             - Assess clarity of disciplinary assumptions"
        }
    }
}

/// Truncate at a char boundary and mark the cut
fn bounded_text(full_text: &str) -> String {
    if full_text.chars().count() > MAX_DOCUMENT_CHARS {
        let cut: String = full_text.chars().take(MAX_DOCUMENT_CHARS).collect();
        format!("{} {}", cut, CONTINUATION_MARKER)
    } else {
        full_text.to_string()
    }
}

/// Build the full assessment prompt for a classified document
pub fn build_assessment_prompt(ctx: &PromptContext<'_>) -> String {
    let profile = type_profile(ctx.document_type);
    let guidance = field_guidance(ctx.field);
    let w = &ctx.framework.weights;
    let max_weight = w.total();
    let title = if ctx.title.is_empty() {
        "Unknown"
    } else {
        ctx.title
    };
    let field_name = ctx.field.display_name();
    let focus = ctx.framework.assessment_focus.join("\n  - ");
    let biases = ctx.framework.bias_priorities.join("\n  - ");

    let mut prompt = format!(
        "You are a research assessment expert analyzing the following academic {category}.\n\
         \n\
         DOCUMENT INFORMATION:\n\
         - Title: {title}\n\
         - Document Type: {name} ({description})\n\
         - Academic Field: {field_name}\n\
         \n\
         ASSESSMENT FRAMEWORK CONTEXT:\n\
         {guidance}\n\
         \n\
         CREDIBILITY ASSESSMENT COMPONENTS (total possible: {max_weight:.1} points):\n\
         Assessment weight/priority for this {name} in {field_name}:\n\
         - Methodological Rigor: Maximum score {mr}\n\
         - Data Transparency: Maximum score {dt}\n\
         - Source Quality: Maximum score {sq}\n\
         - Author Credibility: Maximum score {ac}\n\
         - Statistical Validity: Maximum score {sv}\n\
         - Logical Consistency: Maximum score {lc}\n\
         \n\
         ASSESSMENT FOCUS AREAS:\n\
         \x20 - {focus}\n\
         \n\
         PRIMARY BIAS CONCERNS FOR THIS FIELD:\n\
         \x20 - {biases}\n\
         \n\
         DOCUMENT TEXT:\n\
         {text}\n\
         \n\
         ANALYSIS TASK:\n\
         Provide a comprehensive assessment with the following JSON structure:\n\n",
        category = profile.category,
        title = title,
        name = profile.name,
        description = profile.description,
        field_name = field_name,
        guidance = guidance,
        max_weight = max_weight,
        mr = w.methodological_rigor,
        dt = w.data_transparency,
        sq = w.source_quality,
        ac = w.author_credibility,
        sv = w.statistical_validity,
        lc = w.logical_consistency,
        focus = focus,
        biases = biases,
        text = bounded_text(ctx.full_text),
    );

    prompt.push_str(&response_schema(ctx, &profile, max_weight));
    prompt.push_str(&critical_instructions(ctx, &profile, max_weight));
    prompt
}

/// The JSON shape the provider must return, with per-component score bounds
fn response_schema(ctx: &PromptContext<'_>, profile: &TypeProfile, max_weight: f64) -> String {
    let w = &ctx.framework.weights;
    let title = if ctx.title.is_empty() {
        "Unknown"
    } else {
        ctx.title
    };
    let component = |key: &str, max: f64| {
        format!(
            "    \"{key}\": {{\n\
             \x20     \"score\": <0-{max}>,\n\
             \x20     \"maxScore\": {max},\n\
             \x20     \"description\": \"<brief explanation>\",\n\
             \x20     \"evidence\": [\"<specific evidence 1>\", \"<specific evidence 2>\"]\n\
             \x20   }},\n"
        )
    };

    let mut schema = String::from("{\n  \"credibility\": {\n");
    schema.push_str(&component("methodologicalRigor", w.methodological_rigor));
    schema.push_str(&component("dataTransparency", w.data_transparency));
    schema.push_str(&component("sourceQuality", w.source_quality));
    schema.push_str(&component("authorCredibility", w.author_credibility));
    schema.push_str(&component("statisticalValidity", w.statistical_validity));
    schema.push_str(&component("logicalConsistency", w.logical_consistency));
    schema.push_str(&format!(
        "    \"totalScore\": <sum of above scores, should not exceed {max_weight:.1}>,\n\
         \x20   \"rating\": \"<Exemplary|Strong|Moderate|Weak|Very Poor|Invalid>\"\n\
         \x20 }},\n"
    ));
    schema.push_str(
        "  \"bias\": {\n\
         \x20   \"biases\": [\n\
         \x20     {\n\
         \x20       \"type\": \"<Selection|Confirmation|Publication|Reporting|Funding|Citation|Demographic|Measurement>\",\n\
         \x20       \"evidence\": \"<specific evidence from document>\",\n\
         \x20       \"severity\": \"<Low|Medium|High>\"\n\
         \x20     }\n\
         \x20   ],\n\
         \x20   \"overallLevel\": \"<Low|Medium|High>\",\n\
         \x20   \"justification\": \"<synthesis of identified biases>\"\n\
         \x20 },\n",
    );
    schema.push_str(&format!(
        "  \"keyFindings\": {{\n\
         \x20   \"fundamentals\": {{\n\
         \x20     \"title\": \"{title}\",\n\
         \x20     \"authors\": [\"<author1>\", \"<author2>\"],\n\
         \x20     \"journal\": \"<journal name or publisher>\",\n\
         \x20     \"doi\": \"<DOI if available>\",\n\
         \x20     \"publicationDate\": \"<YYYY-MM-DD>\",\n\
         \x20     \"articleType\": \"{article_type}\"\n\
         \x20   }},\n\
         \x20   \"researchQuestion\": \"<main research question>\",\n\
         \x20   \"hypothesis\": \"<stated hypothesis if present>\",\n\
         \x20   \"methodology\": {{\n\
         \x20     \"studyDesign\": \"<design type>\",\n\
         \x20     \"sampleSize\": \"<sample size if applicable>\",\n\
         \x20     \"population\": \"<target population>\",\n\
         \x20     \"samplingMethod\": \"<how subjects/samples selected>\",\n\
         \x20     \"setting\": \"<research setting>\",\n\
         \x20     \"intervention\": \"<intervention if applicable>\",\n\
         \x20     \"comparisonGroups\": \"<comparison groups if any>\",\n\
         \x20     \"outcomesMeasures\": [\"<outcome 1>\", \"<outcome 2>\"],\n\
         \x20     \"statisticalMethods\": [\"<method 1>\", \"<method 2>\"],\n\
         \x20     \"studyDuration\": \"<duration or timeframe>\"\n\
         \x20   }},\n\
         \x20   \"findings\": {{\n\
         \x20     \"primaryFindings\": [\"<finding 1>\", \"<finding 2>\"],\n\
         \x20     \"secondaryFindings\": [\"<finding 1>\"],\n\
         \x20     \"effectSizes\": [\"<effect size 1>\"],\n\
         \x20     \"clinicalSignificance\": \"<practical significance assessment>\",\n\
         \x20     \"unexpectedFindings\": [\"<unexpected result 1>\"]\n\
         \x20   }},\n\
         \x20   \"limitations\": {{\n\
         \x20     \"authorAcknowledged\": [\"<limitation 1>\", \"<limitation 2>\"],\n\
         \x20     \"methodologicalIdentified\": [\"<identified limitation 1>\"],\n\
         \x20     \"severity\": \"<Minor|Moderate|Major>\"\n\
         \x20   }},\n\
         \x20   \"conclusions\": {{\n\
         \x20     \"primaryConclusion\": \"<main conclusion stated>\",\n\
         \x20     \"supportedByData\": <true|false>,\n\
         \x20     \"practicalImplications\": [\"<implication 1>\", \"<implication 2>\"],\n\
         \x20     \"futureResearchNeeded\": [\"<gap 1>\", \"<gap 2>\"],\n\
         \x20     \"recommendations\": [\"<recommendation 1>\"],\n\
         \x20     \"generalizability\": \"<assessment of generalizability>\"\n\
         \x20   }}\n\
         \x20 }},\n",
        title = title,
        article_type = profile.name,
    ));
    schema.push_str(
        "  \"perspective\": {\n\
         \x20   \"theoreticalFramework\": \"<theoretical framework used>\",\n\
         \x20   \"paradigm\": \"<Positivist|Interpretivist|Critical|Pragmatic>\",\n\
         \x20   \"disciplinaryPerspective\": \"<disciplinary tradition>\",\n\
         \x20   \"epistemologicalStance\": \"<how knowledge is defined>\",\n\
         \x20   \"assumptions\": {\n\
         \x20     \"stated\": [\"<stated assumption 1>\"],\n\
         \x20     \"unstated\": [\"<unstated assumption 1>\"]\n\
         \x20   },\n\
         \x20   \"ideologicalPosition\": \"<any ideological stance detected>\",\n\
         \x20   \"authorReflexivity\": \"<author's acknowledgment of own role>\",\n\
         \x20   \"context\": {\n\
         \x20     \"geographic\": \"<geographic context>\",\n\
         \x20     \"temporal\": \"<temporal/historical context>\",\n\
         \x20     \"institutional\": \"<institutional context>\"\n\
         \x20   }\n\
         \x20 }\n\
         }\n\n",
    );
    schema
}

fn critical_instructions(
    ctx: &PromptContext<'_>,
    profile: &TypeProfile,
    max_weight: f64,
) -> String {
    let w = &ctx.framework.weights;
    format!(
        "CRITICAL INSTRUCTIONS:\n\
         1. All scores must use the weighted scale provided (not 0-10)\n\
         2. IMPORTANT: totalScore must never exceed {max_weight:.1} - this is the maximum possible assessment weight\n\
         3. Each component must stay within its specified maximum (e.g., methodologicalRigor max: {mr})\n\
         4. Rate with accuracy - do not inflate scores\n\
         5. Focus on what IS in the document, not what should be there\n\
         6. For {name}, prioritize assessment of: {priorities}\n\
         7. Consider field-specific expectations for {field}\n\
         8. If information is unavailable, indicate this in evidence\n\
         9. Be specific: cite examples, direct quotes, or clear evidence\n\
         10. Return ONLY valid JSON, no additional text before or after\n",
        max_weight = max_weight,
        mr = w.methodological_rigor,
        name = profile.name,
        priorities = profile.priorities,
        field = ctx.field.as_str(),
    )
}

/// Conservative prompt used when too little text was extracted
pub fn build_abstract_only_prompt(
    title: &str,
    abstract_text: &str,
    document_type: DocumentType,
    field: AcademicField,
) -> String {
    let title = if title.is_empty() { "Unknown" } else { title };
    format!(
        "Analyze the following academic abstract and provide assessment based on the information available.\n\
         \n\
         DOCUMENT INFORMATION:\n\
         - Title: {title}\n\
         - Document Type: {ty}\n\
         - Academic Field: {field}\n\
         \n\
         NOTE: Full document text is unavailable. Assessment is based on abstract only. \
         Be conservative in scores and indicate where full text would be needed for proper assessment.\n\
         \n\
         ABSTRACT:\n\
         {abstract_text}\n\
         \n\
         Provide your assessment in the same JSON format as requested, but indicate in evidence \
         fields where full document review would strengthen the assessment.",
        title = title,
        ty = document_type.as_str(),
        field = field.display_name(),
        abstract_text = abstract_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(framework: &'a FrameworkGuidelines, text: &'a str) -> PromptContext<'a> {
        PromptContext {
            title: "Quantum Effects in Photosynthesis",
            document_type: DocumentType::Article,
            field: AcademicField::NaturalSciences,
            framework,
            full_text: text,
        }
    }

    #[test]
    fn prompt_echoes_each_weight_maximum() {
        let fw = FrameworkGuidelines::for_document(
            DocumentType::Article,
            AcademicField::NaturalSciences,
        );
        let prompt = build_assessment_prompt(&ctx(&fw, "some text"));
        assert!(prompt.contains("- Methodological Rigor: Maximum score 2.5"));
        assert!(prompt.contains("- Data Transparency: Maximum score 2"));
        assert!(prompt.contains("- Logical Consistency: Maximum score 1"));
        assert!(prompt.contains("total possible: 10.0 points"));
    }

    #[test]
    fn prompt_contains_schema_and_instructions() {
        let fw = FrameworkGuidelines::for_document(
            DocumentType::Article,
            AcademicField::NaturalSciences,
        );
        let prompt = build_assessment_prompt(&ctx(&fw, "some text"));
        assert!(prompt.contains("\"credibility\""));
        assert!(prompt.contains("\"totalScore\""));
        // The schema hint is soft, the numbered instruction is hard
        assert!(prompt.contains("should not exceed 10.0"));
        assert!(prompt.contains("must never exceed 10.0"));
        assert!(prompt.contains("\"rating\": \"<Exemplary|Strong|Moderate|Weak|Very Poor|Invalid>\""));
        assert!(prompt.contains("Return ONLY valid JSON"));
        assert!(prompt.contains("FOR NATURAL SCIENCES:"));
    }

    #[test]
    fn long_documents_are_truncated_with_marker() {
        let fw = FrameworkGuidelines::for_document(
            DocumentType::Article,
            AcademicField::NaturalSciences,
        );
        let long_text = "a".repeat(MAX_DOCUMENT_CHARS + 10_000);
        let prompt = build_assessment_prompt(&ctx(&fw, &long_text));
        assert!(prompt.contains(CONTINUATION_MARKER));
        // Bounded independent of input size: well under the input length
        assert!(prompt.len() < MAX_DOCUMENT_CHARS + 10_000);

        let longer = "a".repeat(MAX_DOCUMENT_CHARS + 500_000);
        let prompt2 = build_assessment_prompt(&ctx(&fw, &longer));
        assert_eq!(prompt.len(), prompt2.len());
    }

    #[test]
    fn short_documents_are_not_marked() {
        let fw = FrameworkGuidelines::for_document(
            DocumentType::Article,
            AcademicField::NaturalSciences,
        );
        let prompt = build_assessment_prompt(&ctx(&fw, "short body"));
        assert!(!prompt.contains(CONTINUATION_MARKER));
        assert!(prompt.contains("short body"));
    }

    #[test]
    fn abstract_only_prompt_flags_its_basis() {
        let prompt = build_abstract_only_prompt(
            "Set Theory Notes",
            "An abstract about ordinals.",
            DocumentType::Theoretical,
            AcademicField::FormalSciences,
        );
        assert!(prompt.contains("Assessment is based on abstract only."));
        assert!(prompt.contains("Be conservative in scores"));
        assert!(prompt.contains("- Document Type: theoretical"));
        assert!(prompt.contains("- Academic Field: formal sciences"));
    }

    #[test]
    fn empty_title_renders_unknown() {
        let fw =
            FrameworkGuidelines::for_document(DocumentType::Unknown, AcademicField::Interdisciplinary);
        let context = PromptContext {
            title: "",
            document_type: DocumentType::Unknown,
            field: AcademicField::Interdisciplinary,
            framework: &fw,
            full_text: "text",
        };
        let prompt = build_assessment_prompt(&context);
        assert!(prompt.contains("- Title: Unknown"));
    }
}
