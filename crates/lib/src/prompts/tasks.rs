//! # Default Task Prompts
//!
//! This module contains the hardcoded prompt templates for all application
//! tasks. Placeholders of the form `{name}` are substituted before the
//! prompt is sent; the user's text is always substituted last so literal
//! braces in it are never re-expanded.

// --- Own-Text Analysis ---

pub const ANALYSIS_SECTION_PROMPT: &str = r#"Analyze the following text and generate the {part} section.

Text to analyze:
{text}

If the text doesn't contain a clear {part}, respond with: "This text doesn't contain a {part}."

Otherwise, please provide only the {part} for this text. Be concise and relevant."#;

pub const CORRECTIONS_PROMPT: &str = r#"Analyze the following text for various corrections and improvements:

Text to analyze:
{text}

Please provide analysis in the following format:

SPELLING CORRECTIONS:
[Evaluate spelling, identify errors, and provide suggestions]

GRAMMAR CORRECTIONS:
[Evaluate grammar, identify errors, and provide suggestions]

COHERENCE CORRECTIONS:
[Evaluate coherence, identify errors, and provide suggestions]

STYLE CORRECTIONS:
[Evaluate style, identify errors, and provide suggestions]

ORDER CORRECTIONS:
[Evaluate the order of ideas in the document, identify errors, and provide suggestions]

PROPOSED CORRECTION:
[Provide a corrected version of the text that addresses all the above issues to make it clearer]"#;

// --- Tone Transform ---

pub const TONE_TRANSFORM_PROMPT: &str = r#"Transform the following text according to these specifications:

Style: {tone}
Text Type: {kind}
Technical Vocabulary Level: {technical}
Formality Level: {formality}
Use of Numbers and Statistics: {statistics}

Original text:
{text}

Instructions:
- Write in a {tone_lower} style appropriate for a {kind_lower}
- Use {technical_lower} level technical vocabulary
- Maintain {formality_lower} formality
- Include {statistics_lower} level of numerical data and statistics
- Structure appropriately for a {kind_lower}

Please provide the transformed text."#;

pub const TONE_SECTION_PROMPT: &str = r#"Transform the following text according to these specifications:

Style: {tone}
Text Type: {kind}
Technical Vocabulary Level: {technical}
Formality Level: {formality}
Use of Numbers and Statistics: {statistics}

Generate the {part} section for this text type.

Original text:
{text}

Instructions:
- Write in a {tone_lower} style appropriate for a {kind_lower}
- Use {technical_lower} level technical vocabulary
- Maintain {formality_lower} formality
- Include {statistics_lower} level of numerical data and statistics
- Structure appropriately for a {kind_lower}
- If the section doesn't apply to this text type, respond with: "This section doesn't apply to a {kind_lower}."

Provide only the {part} portion."#;

pub const TONE_REVIEW_PROMPT: &str = r#"Analyze the following text for corrections:

Text:
{text}

Provide analysis in this format:

COHERENCE: [Analysis and suggestions]
STYLE: [Analysis and suggestions]
GRAMMAR: [Analysis and suggestions]
OTHER CORRECTIONS: [Any other improvements needed]"#;

// --- Topic Explorer ---

pub const TOPIC_HYPOTHESES_PROMPT: &str = r#"Generate 10 different research hypothesis options for the topic: {topic}

Each hypothesis should be:
- Specific and testable
- Relevant to the topic
- Academically sound
- Numbered from 1 to 10

Format as:
1. [First hypothesis]
2. [Second hypothesis]
...
10. [Tenth hypothesis]"#;

pub const TOPIC_STATISTICS_PROMPT: &str = r#"Provide main statistics and data points related to this hypothesis: {hypothesis}

Include:
- Relevant numerical data
- Key statistics
- Important metrics
- Sample sizes or populations when relevant
- Any significant findings from existing research

Present this information in a clear, organized manner."#;

pub const TOPIC_REFERENCES_PROMPT: &str = r#"Provide the most important academic references and sources that a researcher should check
for this hypothesis: {hypothesis}

Include:
- Key academic papers or studies
- Important books on the topic
- Relevant journals
- Government or institutional reports
- Online databases or resources

Format as a list with brief descriptions of why each source is important."#;

pub const TOPIC_OUTLINE_PROMPT: &str = r#"Create a detailed proposed outline for a research text based on this hypothesis: {hypothesis}

The outline should include:
- Introduction section with subsections
- Literature review structure
- Methodology section
- Results/Analysis section
- Discussion section
- Conclusion section
- References section

Format as a hierarchical outline with main sections and subsections.
Make it detailed enough that a researcher can use it as a framework to write their paper."#;

// --- Text Evaluation ---

pub const EVALUATION_PROMPT: &str = r#"Evaluate the following text comprehensively across multiple dimensions. Provide grades from 0 to 10 and specific corrections where needed.

Text to evaluate:
{text}

Please provide your evaluation in this exact format:

SPELLING EVALUATION:
Grade: [0-10]
Corrections: [List spelling errors and corrections, or "No spelling errors found"]

GRAMMAR EVALUATION:
Grade: [0-10]
Corrections: [List grammar errors and corrections, or "No grammar errors found"]

STYLE EVALUATION:
Grade: [0-10]
Text Type Detected: [e.g., Academic paper, Report, Blog post, etc.]
Style Analysis: [Analysis of writing style and suggestions for improvement]

COHERENCE EVALUATION:
Grade: [0-10]
Corrections: [List coherence issues and suggestions, or "Text is coherent"]

OVERALL EVALUATION:
Grade: [0-10]
Overall Corrections: [Summary of main issues and recommendations for improvement]"#;

// --- LaTeX Generation ---

pub const LATEX_PROMPT: &str = r#"Convert the following text into properly formatted LaTeX code suitable for RMarkdown that can be knitted into a PDF.

Document Type: {kind}

Text to convert:
{text}

Requirements:
1. Create a complete LaTeX document structure appropriate for a {kind_lower}
2. Include proper document class and packages
3. Format any equations, numbers, or special formatting appropriately
4. Add proper sectioning (\section, \subsection, etc.)
5. Include title, author, date fields that can be customized
6. Use proper LaTeX formatting for lists, emphasis, etc.
7. Add comments explaining key formatting choices
8. Make it compatible with RMarkdown output: pdf_document

Provide only the LaTeX code that can be copied and pasted into RMarkdown."#;

// --- Reference Formatting ---

pub const REFERENCE_PROMPT: &str = r#"Create a properly formatted reference in {style} style for a {kind_lower}.

Reference Information:
{fields}

Requirements:
1. Follow {style} formatting guidelines exactly
2. Include all provided information in the correct order
3. Use proper punctuation, italics, and formatting
4. Include DOI if provided
5. Handle missing information appropriately
6. Provide only the formatted reference

Format the reference exactly as it should appear in a reference list."#;
