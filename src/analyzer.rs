//! Analysis orchestration: classify, select a framework, build the prompt,
//! call the provider once, validate, assemble the report.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use tracing::{debug, info};

use crate::classify;
use crate::clients::ChatProvider;
use crate::error::Result;
use crate::framework::FrameworkGuidelines;
use crate::prompt::{self, FULL_TEXT_THRESHOLD, PromptContext};
use crate::schemas::{AnalysisResult, Paper};
use crate::validate::validate_response;

/// Fixed system instruction; the user message carries everything adaptive
const SYSTEM_PROMPT: &str = "You are an expert research analyst specializing in \
    adaptive assessment frameworks. Analyze research documents and return valid \
    JSON responses only. Do not include any text before or after the JSON.";

/// Abstract fallback keeps at most this many characters of extracted text
const ABSTRACT_CHARS: usize = 1000;

/// One document to analyze. Title falls back to the file name upstream, so
/// it is never empty by the time it gets here; text may be empty.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub title: String,
    pub text: String,
    pub id: Option<String>,
    pub authors: Vec<String>,
    pub abstract_text: Option<String>,
    pub year: Option<i32>,
}

impl AnalysisRequest {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            id: None,
            authors: Vec::new(),
            abstract_text: None,
            year: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = Some(abstract_text.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// Sequences the four pure stages around the single provider call
pub struct Analyzer {
    provider: Arc<dyn ChatProvider>,
}

impl Analyzer {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult> {
        let (document_type, field) = classify::classify(&request.text, &request.title);
        debug!(
            document_type = document_type.as_str(),
            field = field.as_str(),
            title = %request.title,
            "document classified"
        );

        let framework = FrameworkGuidelines::for_document(document_type, field);

        let abstract_text = request.abstract_text.clone().unwrap_or_else(|| {
            request.text.chars().take(ABSTRACT_CHARS).collect()
        });

        let prompt = if request.text.chars().count() > FULL_TEXT_THRESHOLD {
            prompt::build_assessment_prompt(&PromptContext {
                title: &request.title,
                document_type,
                field,
                framework: &framework,
                full_text: &request.text,
            })
        } else {
            // Too little extracted text for a full review; score conservatively
            prompt::build_abstract_only_prompt(&request.title, &abstract_text, document_type, field)
        };

        let raw = self.provider.complete(SYSTEM_PROMPT, &prompt).await?;
        let payload = validate_response(&raw, &framework)?;

        let paper = Paper {
            id: request
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            title: request.title,
            authors: request.authors,
            journal: None,
            doi: None,
            abstract_text: if abstract_text.is_empty() {
                None
            } else {
                Some(abstract_text)
            },
            url: None,
            year: request.year.or_else(|| Some(Utc::now().year())),
            document_type,
            field,
        };

        info!(
            paper_id = %paper.id,
            total_score = payload.credibility.total_score,
            rating = payload.credibility.rating.as_str(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            paper,
            credibility: payload.credibility,
            bias: payload.bias,
            key_findings: payload.key_findings,
            perspective: payload.perspective,
            timestamp: Utc::now(),
        })
    }
}
