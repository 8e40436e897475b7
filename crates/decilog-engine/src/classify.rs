use decilog_types::InputType;

// Rules are checked in this fixed order; the first match wins.
const DATA_ANALYSIS_KEYWORDS: [&str; 3] = ["trend", "analysis", "logs"];
const FEEDBACK_KEYWORDS: [&str; 3] = ["survey", "comment", "complaint"];

/// Classify the evidence behind a decision from its free-text description.
///
/// Matching is case-insensitive substring search against the whole text,
/// no tokenization. Text with no keyword hits (including the empty string)
/// classifies as `Observation`.
pub fn classify_input_type(inputs_used: &str) -> InputType {
    let text = inputs_used.to_lowercase();

    if DATA_ANALYSIS_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        InputType::DataAnalysis
    } else if FEEDBACK_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        InputType::Feedback
    } else {
        InputType::Observation
    }
}
