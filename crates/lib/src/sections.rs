//! # Marker-Based Section Splitting
//!
//! The corrections and evaluation prompts instruct the model to answer under
//! literal headings such as `SPELLING EVALUATION:`. This module slices one
//! response into the named sections found between those headings.

use std::collections::HashMap;

/// Fallback text for a corrections key whose marker is absent.
pub const NO_CORRECTIONS_FALLBACK: &str = "No corrections needed.";

/// Fallback text for an evaluation key whose marker is absent.
pub const NO_EVALUATION_FALLBACK: &str = "No evaluation available for this section.";

/// The headings emitted by the corrections prompt, in declaration order.
pub const CORRECTION_MARKERS: &[(&str, &str)] = &[
    ("SPELLING CORRECTIONS:", "spelling"),
    ("GRAMMAR CORRECTIONS:", "grammar"),
    ("COHERENCE CORRECTIONS:", "coherence"),
    ("STYLE CORRECTIONS:", "style"),
    ("ORDER CORRECTIONS:", "order"),
    ("PROPOSED CORRECTION:", "proposed"),
];

/// The headings emitted by the evaluation prompt, in declaration order.
pub const EVALUATION_MARKERS: &[(&str, &str)] = &[
    ("SPELLING EVALUATION:", "spelling"),
    ("GRAMMAR EVALUATION:", "grammar"),
    ("STYLE EVALUATION:", "style"),
    ("COHERENCE EVALUATION:", "coherence"),
    ("OVERALL EVALUATION:", "overall"),
];

/// Splits `source` into sections delimited by literal markers.
///
/// Each entry in `markers` is a `(marker, key)` pair. Only the first
/// occurrence of a marker counts, and slicing follows the order the markers
/// occur in the text, not the order they are declared in. The extracted
/// value for a marker runs from the end of the marker to the start of the
/// next found marker (or end of text), trimmed of surrounding whitespace.
/// A key whose marker never occurs maps to `fallback`.
///
/// Markers are matched verbatim with no escaping, so a marker string that
/// happens to appear inside ordinary content still starts a section.
pub fn split_sections(
    source: &str,
    markers: &[(&str, &str)],
    fallback: &str,
) -> HashMap<String, String> {
    let mut found: Vec<(usize, &str, &str)> = markers
        .iter()
        .filter_map(|&(marker, key)| source.find(marker).map(|pos| (pos, marker, key)))
        .collect();
    found.sort_by_key(|&(pos, _, _)| pos);

    let mut sections = HashMap::new();
    for (i, &(pos, marker, key)) in found.iter().enumerate() {
        let start = pos + marker.len();
        // A marker overlapping the previous one would invert the range;
        // such a section is empty.
        let end = found
            .get(i + 1)
            .map_or(source.len(), |&(next, _, _)| next)
            .max(start);
        sections.insert(key.to_string(), source[start..end].trim().to_string());
    }

    for &(_, key) in markers {
        sections
            .entry(key.to_string())
            .or_insert_with(|| fallback.to_string());
    }

    sections
}
