//! # AI-Assisted Text Analysis
//!
//! This crate provides a client that assembles natural-language prompts
//! from user text and form options, sends them to a configurable inference
//! provider, and shapes the responses into typed reports — including
//! splitting a single response into named sections on literal markers.

pub mod errors;
pub mod prompts;
pub mod providers;
pub mod sections;
pub mod types;

pub use errors::AssistError;
pub use types::{AssistantClient, AssistantClientBuilder};

use crate::prompts::tasks::*;
use crate::sections::{
    split_sections, CORRECTION_MARKERS, EVALUATION_MARKERS, NO_CORRECTIONS_FALLBACK,
    NO_EVALUATION_FALLBACK,
};
use crate::types::{
    AnalysisReport, CorrectionReport, DocumentKind, DocumentPart, EvaluationReport,
    GeneratedSection, ReferenceKind, ReferenceStyle, ToneOptions, TopicBriefing,
};
use regex::Regex;
use tracing::debug;

/// Fills a tone template with the selected options, substituting the user's
/// text last.
fn fill_tone_template(template: &str, text: &str, options: &ToneOptions) -> String {
    template
        .replace("{tone}", options.tone.label())
        .replace("{tone_lower}", &options.tone.label().to_lowercase())
        .replace("{kind}", options.kind.label())
        .replace("{kind_lower}", &options.kind.label().to_lowercase())
        .replace("{technical}", options.technical_level.label())
        .replace(
            "{technical_lower}",
            &options.technical_level.label().to_lowercase(),
        )
        .replace("{formality}", options.formality_level.label())
        .replace(
            "{formality_lower}",
            &options.formality_level.label().to_lowercase(),
        )
        .replace("{statistics}", options.statistics_level.label())
        .replace(
            "{statistics_lower}",
            &options.statistics_level.label().to_lowercase(),
        )
        .replace("{text}", text)
}

impl AssistantClient {
    /// Runs the full own-text analysis.
    ///
    /// Each document part is generated with its own inference call, in
    /// order, followed by one corrections call whose response is split into
    /// the fixed correction sections. Every call is sequential; the first
    /// failure aborts the report.
    pub async fn analyze_text(
        &self,
        text: &str,
        model: &str,
    ) -> Result<AnalysisReport, AssistError> {
        let mut sections = Vec::with_capacity(DocumentPart::ALL.len());
        for part in DocumentPart::ALL {
            let prompt = ANALYSIS_SECTION_PROMPT
                .replace("{part}", part.label())
                .replace("{text}", text);
            debug!(part = part.label(), "--> Requesting analysis section");
            let generated = self.invoker.invoke(&prompt, model).await?;
            sections.push(GeneratedSection {
                part,
                text: generated,
            });
        }

        let corrections_prompt = CORRECTIONS_PROMPT.replace("{text}", text);
        let raw = self.invoker.invoke(&corrections_prompt, model).await?;
        debug!("<-- Corrections response: {} bytes", raw.len());
        let corrections = CorrectionReport::from_sections(split_sections(
            &raw,
            CORRECTION_MARKERS,
            NO_CORRECTIONS_FALLBACK,
        ));

        Ok(AnalysisReport {
            sections,
            corrections,
        })
    }

    /// Transforms the whole text into the requested tone and document kind.
    pub async fn transform_tone(
        &self,
        text: &str,
        options: &ToneOptions,
        model: &str,
    ) -> Result<String, AssistError> {
        let prompt = fill_tone_template(TONE_TRANSFORM_PROMPT, text, options);
        self.invoker.invoke(&prompt, model).await
    }

    /// Regenerates a single document part of a tone transformation.
    pub async fn transform_tone_section(
        &self,
        text: &str,
        part: DocumentPart,
        options: &ToneOptions,
        model: &str,
    ) -> Result<String, AssistError> {
        let template = TONE_SECTION_PROMPT.replace("{part}", part.label());
        let prompt = fill_tone_template(&template, text, options);
        self.invoker.invoke(&prompt, model).await
    }

    /// Reviews a transformed text for coherence, style, and grammar issues.
    /// The response is free-form and returned as-is.
    pub async fn review_tone(&self, text: &str, model: &str) -> Result<String, AssistError> {
        let prompt = TONE_REVIEW_PROMPT.replace("{text}", text);
        self.invoker.invoke(&prompt, model).await
    }

    /// Generates ten numbered research hypothesis options for a topic.
    pub async fn hypothesis_options(
        &self,
        topic: &str,
        model: &str,
    ) -> Result<String, AssistError> {
        let prompt = TOPIC_HYPOTHESES_PROMPT.replace("{topic}", topic);
        self.invoker.invoke(&prompt, model).await
    }

    /// Builds the research briefing for a chosen hypothesis: statistics,
    /// references, then a proposed outline, each with its own call.
    pub async fn topic_briefing(
        &self,
        hypothesis: &str,
        model: &str,
    ) -> Result<TopicBriefing, AssistError> {
        let statistics = self
            .invoker
            .invoke(
                &TOPIC_STATISTICS_PROMPT.replace("{hypothesis}", hypothesis),
                model,
            )
            .await?;
        let references = self
            .invoker
            .invoke(
                &TOPIC_REFERENCES_PROMPT.replace("{hypothesis}", hypothesis),
                model,
            )
            .await?;
        let outline = self
            .invoker
            .invoke(
                &TOPIC_OUTLINE_PROMPT.replace("{hypothesis}", hypothesis),
                model,
            )
            .await?;

        Ok(TopicBriefing {
            statistics,
            references,
            outline,
        })
    }

    /// Evaluates a text across the fixed grading dimensions and splits the
    /// response into the evaluation sections.
    pub async fn evaluate_text(
        &self,
        text: &str,
        model: &str,
    ) -> Result<EvaluationReport, AssistError> {
        let prompt = EVALUATION_PROMPT.replace("{text}", text);
        let raw = self.invoker.invoke(&prompt, model).await?;
        debug!("<-- Evaluation response: {} bytes", raw.len());
        Ok(EvaluationReport::from_sections(split_sections(
            &raw,
            EVALUATION_MARKERS,
            NO_EVALUATION_FALLBACK,
        )))
    }

    /// Converts a text into a LaTeX document of the given kind.
    ///
    /// Models often wrap the document in a fenced code block; the fenced
    /// content is unwrapped when present.
    pub async fn latex_document(
        &self,
        text: &str,
        kind: DocumentKind,
        model: &str,
    ) -> Result<String, AssistError> {
        let prompt = LATEX_PROMPT
            .replace("{kind}", kind.label())
            .replace("{kind_lower}", &kind.label().to_lowercase())
            .replace("{text}", text);
        let raw = self.invoker.invoke(&prompt, model).await?;

        let re = Regex::new(r"```(?:latex|tex)?\n?([\s\S]*?)```")?;
        let code = re
            .captures(&raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| raw.trim().to_string());

        Ok(code)
    }

    /// Formats a bibliographic reference from the collected form fields.
    ///
    /// `fields` is an ordered list of `(label, value)` pairs; blank values
    /// are skipped rather than sent as empty lines.
    pub async fn format_reference(
        &self,
        style: ReferenceStyle,
        kind: ReferenceKind,
        fields: &[(String, String)],
        model: &str,
    ) -> Result<String, AssistError> {
        let field_info = fields
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<String>>()
            .join("\n");

        let prompt = REFERENCE_PROMPT
            .replace("{style}", style.label())
            .replace("{kind_lower}", &kind.label().to_lowercase())
            .replace("{fields}", &field_info);

        self.invoker.invoke(&prompt, model).await
    }
}
