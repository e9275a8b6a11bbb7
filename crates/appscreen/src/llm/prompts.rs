//! Prompt templates for relevance screening.

use crate::record::AppRecord;

/// Fixed inclusion/exclusion criteria sent with every review prompt.
pub const RUBRIC: &str = r#"
Decide if an app is RELEVANT (include) or NOT RELEVANT (exclude) for asthma/rhinitis/hay fever support.
Follow these rules:
1) Category: Prefer Medical, Health & Fitness, or Weather. However, if Category is Lifestyle or Productivity but the Title/Description clearly indicates asthma symptom tracking, INCLUDE.
2) Updates: If the update date is missing, look for clues in the description. If the app mentions modern iPhone features, assume it is active.
3) Evidence-based: Strictly EXCLUDE homeopathy/alternative medicine.
4) Relevance: The app must be for tracking, monitoring, or forecasting asthma/hay fever/rhinitis symptoms.
Return a JSON object with fields: include (true/false) and reason (short, under 200 chars).
"#;

/// Build the review prompt for one app record.
///
/// Pure and deterministic: the same record always yields byte-identical
/// prompt text.
pub fn review_prompt(record: &AppRecord) -> String {
    let updated = record.updated.as_deref().unwrap_or("unknown");

    format!(
        "You are reviewing scraped app metadata. Decide include/exclude.\n\
         App index: {}\n\
         Title: {}\n\
         Genre: {}\n\
         Updated: {}\n\
         Description:\n{}\n\n\
         Criteria:\n{}\n\
         Respond with JSON only.",
        record.index, record.title, record.genre, updated, record.description, RUBRIC
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> AppRecord {
        AppRecord {
            index: 7,
            title: "Asthma Log".to_string(),
            description: "Daily symptom tracker with peak-flow entries.".to_string(),
            genre: "Medical".to_string(),
            updated: Some("2024-05-01".to_string()),
        }
    }

    #[test]
    fn test_prompt_contains_record_fields_and_rubric() {
        let prompt = review_prompt(&make_record());

        assert!(prompt.contains("App index: 7"));
        assert!(prompt.contains("Title: Asthma Log"));
        assert!(prompt.contains("Genre: Medical"));
        assert!(prompt.contains("Updated: 2024-05-01"));
        assert!(prompt.contains("peak-flow entries"));
        assert!(prompt.contains(RUBRIC));
        assert!(prompt.ends_with("Respond with JSON only."));
    }

    #[test]
    fn test_prompt_deterministic() {
        let record = make_record();
        assert_eq!(review_prompt(&record), review_prompt(&record));
    }

    #[test]
    fn test_missing_updated_shown_as_unknown() {
        let mut record = make_record();
        record.updated = None;
        assert!(review_prompt(&record).contains("Updated: unknown"));
    }
}
