use crate::errors::AssistError;
use crate::providers::model::Invoker;
use crate::sections::{NO_CORRECTIONS_FALLBACK, NO_EVALUATION_FALLBACK};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A client for running assistant tasks against an inference provider.
#[derive(Clone)]
pub struct AssistantClient {
    pub(crate) invoker: Box<dyn Invoker>,
}

impl fmt::Debug for AssistantClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantClient")
            .field("invoker", &self.invoker)
            .finish_non_exhaustive()
    }
}

/// A builder for creating `AssistantClient` instances.
#[derive(Default)]
pub struct AssistantClientBuilder {
    invoker: Option<Box<dyn Invoker>>,
}

impl AssistantClientBuilder {
    /// Creates a new `AssistantClientBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inference provider used for every task.
    pub fn invoker(mut self, invoker: Box<dyn Invoker>) -> Self {
        self.invoker = Some(invoker);
        self
    }

    /// Builds the `AssistantClient`, failing if no provider was supplied.
    pub fn build(self) -> Result<AssistantClient, AssistError> {
        let invoker = self.invoker.ok_or(AssistError::MissingInvoker)?;
        Ok(AssistantClient { invoker })
    }
}

/// The document parts generated during own-text analysis and per-section
/// tone transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentPart {
    Hypothesis,
    MainBulletPoints,
    MostImportantDataPoints,
    Summary,
    Abstract,
    Introduction,
    BodyText,
    Conclusion,
    Appendix,
}

impl DocumentPart {
    /// Every part, in the order they are generated and displayed.
    pub const ALL: [DocumentPart; 9] = [
        DocumentPart::Hypothesis,
        DocumentPart::MainBulletPoints,
        DocumentPart::MostImportantDataPoints,
        DocumentPart::Summary,
        DocumentPart::Abstract,
        DocumentPart::Introduction,
        DocumentPart::BodyText,
        DocumentPart::Conclusion,
        DocumentPart::Appendix,
    ];

    /// The name used for this part inside prompt templates.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentPart::Hypothesis => "hypothesis",
            DocumentPart::MainBulletPoints => "main bullet points",
            DocumentPart::MostImportantDataPoints => "most important data points",
            DocumentPart::Summary => "summary",
            DocumentPart::Abstract => "abstract",
            DocumentPart::Introduction => "introduction",
            DocumentPart::BodyText => "body text",
            DocumentPart::Conclusion => "conclusion",
            DocumentPart::Appendix => "appendix",
        }
    }
}

/// The writing styles offered by the tone transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Academic,
    Technical,
    Simple,
    Descriptive,
    Narrative,
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Academic => "Academic",
            Tone::Technical => "Technical",
            Tone::Simple => "Simple",
            Tone::Descriptive => "Descriptive",
            Tone::Narrative => "Narrative",
        }
    }
}

/// The document kinds a text can be shaped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Report,
    Summary,
    AcademicPaper,
    PressRelease,
    TechnicalManual,
    Thesis,
    Article,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Report => "Report",
            DocumentKind::Summary => "Summary",
            DocumentKind::AcademicPaper => "Academic Paper",
            DocumentKind::PressRelease => "Press Release",
            DocumentKind::TechnicalManual => "Technical Manual",
            DocumentKind::Thesis => "Thesis",
            DocumentKind::Article => "Article",
        }
    }
}

/// A five-step intensity scale used for the tone transform controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::VeryLow => "Very Low",
            Level::Low => "Low",
            Level::Moderate => "Moderate",
            Level::High => "High",
            Level::VeryHigh => "Very High",
        }
    }
}

/// Options controlling a tone transformation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneOptions {
    pub tone: Tone,
    pub kind: DocumentKind,
    pub technical_level: Level,
    pub formality_level: Level,
    pub statistics_level: Level,
}

/// The citation styles supported by the reference formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceStyle {
    Apa,
    Mla,
    Chicago,
}

impl ReferenceStyle {
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceStyle::Apa => "APA",
            ReferenceStyle::Mla => "MLA",
            ReferenceStyle::Chicago => "Chicago",
        }
    }
}

/// The kinds of source a reference can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    JournalArticle,
    Book,
    Website,
    ConferencePaper,
    Thesis,
    Report,
}

impl ReferenceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceKind::JournalArticle => "Journal Article",
            ReferenceKind::Book => "Book",
            ReferenceKind::Website => "Website",
            ReferenceKind::ConferencePaper => "Conference Paper",
            ReferenceKind::Thesis => "Thesis/Dissertation",
            ReferenceKind::Report => "Report",
        }
    }
}

/// One generated document part from an own-text analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedSection {
    pub part: DocumentPart,
    pub text: String,
}

/// The full result of an own-text analysis: every document part plus the
/// sectioned corrections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub sections: Vec<GeneratedSection>,
    pub corrections: CorrectionReport,
}

/// The corrections for a text, one field per fixed correction key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionReport {
    pub spelling: String,
    pub grammar: String,
    pub coherence: String,
    pub style: String,
    pub order: String,
    pub proposed: String,
}

impl CorrectionReport {
    pub(crate) fn from_sections(mut sections: HashMap<String, String>) -> Self {
        let mut take = |key: &str| {
            sections
                .remove(key)
                .unwrap_or_else(|| NO_CORRECTIONS_FALLBACK.to_string())
        };
        Self {
            spelling: take("spelling"),
            grammar: take("grammar"),
            coherence: take("coherence"),
            style: take("style"),
            order: take("order"),
            proposed: take("proposed"),
        }
    }
}

/// The graded evaluation of a text, one field per fixed evaluation key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub spelling: String,
    pub grammar: String,
    pub style: String,
    pub coherence: String,
    pub overall: String,
}

impl EvaluationReport {
    pub(crate) fn from_sections(mut sections: HashMap<String, String>) -> Self {
        let mut take = |key: &str| {
            sections
                .remove(key)
                .unwrap_or_else(|| NO_EVALUATION_FALLBACK.to_string())
        };
        Self {
            spelling: take("spelling"),
            grammar: take("grammar"),
            style: take("style"),
            coherence: take("coherence"),
            overall: take("overall"),
        }
    }
}

/// The research briefing generated for a chosen hypothesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicBriefing {
    pub statistics: String,
    pub references: String,
    pub outline: String,
}
