//! Description mini-language tokenizer and classifier.
//!
//! # Responsibility
//! - Split a raw description into its verbatim description segment and the
//!   optional metadata segment after the first `"##"`.
//! - Classify `;`-separated metadata tokens into a structured update the
//!   task applies atomically.
//!
//! # Invariants
//! - Parsing is pure and never fails; unrecognized tokens become tags.
//! - Keyword matching is case-sensitive (`Important` is a tag, `important`
//!   is a priority flag).

use crate::model::due_date::DueDate;
use crate::model::status::Status;

/// Separates the description segment from the metadata segment.
pub const METADATA_DELIMITER: &str = "##";

/// Separates tokens within the metadata segment.
pub const TOKEN_SEPARATOR: char = ';';

/// Structured result of a metadata parse.
///
/// Field semantics on application: priority flags are OR-ed into the task's
/// current priority, the last status/due-date token wins, and `tags` holds
/// the plain tokens in first-seen order (already deduplicated among
/// themselves; the task deduplicates against existing tags again).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataUpdate {
    pub status: Option<Status>,
    pub important: bool,
    pub urgent: bool,
    pub due_date: Option<DueDate>,
    pub tags: Vec<String>,
}

/// Splits a raw description on the first metadata delimiter.
///
/// Returns the verbatim description segment (trailing whitespace preserved)
/// and, when a delimiter is present, everything after it.
pub fn split_description(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once(METADATA_DELIMITER) {
        Some((description, segment)) => (description, Some(segment)),
        None => (raw, None),
    }
}

/// Tokenizes and classifies one metadata segment.
///
/// Tokens are trimmed; empty tokens are skipped. Recognized keywords:
/// `important`, `urgent`, the four status names (`todo`, `up next`,
/// `in progress`, `done`) and the relative date keywords of
/// [`relative_due_date`]. Anything else becomes a tag.
pub fn parse_metadata(segment: &str) -> MetadataUpdate {
    let mut update = MetadataUpdate::default();
    for token in segment.split(TOKEN_SEPARATOR) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token {
            "important" => update.important = true,
            "urgent" => update.urgent = true,
            "todo" => update.status = Some(Status::Todo),
            "up next" => update.status = Some(Status::UpNext),
            "in progress" => update.status = Some(Status::InProgress),
            "done" => update.status = Some(Status::Done),
            other => match relative_due_date(other) {
                Some(due_date) => update.due_date = Some(due_date),
                None => {
                    if !update.tags.iter().any(|tag| tag == other) {
                        update.tags.push(other.to_string());
                    }
                }
            },
        }
    }
    update
}

/// Resolves a relative date keyword against the current local day.
///
/// The recognized keyword set is exactly `today` and `tomorrow`, both due at
/// 23:59. This function is the single place to extend when more keywords are
/// wanted.
pub fn relative_due_date(token: &str) -> Option<DueDate> {
    match token {
        "today" => Some(DueDate::today()),
        "tomorrow" => Some(DueDate::tomorrow()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_metadata, split_description, MetadataUpdate};
    use crate::model::due_date::DueDate;
    use crate::model::status::Status;

    #[test]
    fn split_keeps_description_verbatim() {
        let (description, segment) = split_description("Register for the course. ## cpsc210");
        assert_eq!(description, "Register for the course. ");
        assert_eq!(segment, Some(" cpsc210"));
    }

    #[test]
    fn split_without_delimiter_has_no_segment() {
        let (description, segment) = split_description("plain description");
        assert_eq!(description, "plain description");
        assert_eq!(segment, None);
    }

    #[test]
    fn split_uses_first_delimiter_only() {
        let (description, segment) = split_description("a ## b ## c");
        assert_eq!(description, "a ");
        assert_eq!(segment, Some(" b ## c"));
    }

    #[test]
    fn keywords_classify_into_flags_status_and_due_date() {
        let update = parse_metadata(" cpsc210; tomorrow; important; urgent; in progress");
        assert!(update.important);
        assert!(update.urgent);
        assert_eq!(update.status, Some(Status::InProgress));
        assert_eq!(update.due_date, Some(DueDate::tomorrow()));
        assert_eq!(update.tags, vec!["cpsc210".to_string()]);
    }

    #[test]
    fn empty_tokens_are_skipped() {
        assert_eq!(parse_metadata(" ;; ; "), MetadataUpdate::default());
    }

    #[test]
    fn keyword_matching_is_case_sensitive() {
        let update = parse_metadata("Important; TODO; Tomorrow");
        assert!(!update.important);
        assert_eq!(update.status, None);
        assert_eq!(update.due_date, None);
        assert_eq!(
            update.tags,
            vec![
                "Important".to_string(),
                "TODO".to_string(),
                "Tomorrow".to_string()
            ]
        );
    }

    #[test]
    fn repeated_tokens_collapse() {
        let update = parse_metadata("important; tag3; important; tag3");
        assert!(update.important);
        assert_eq!(update.tags, vec!["tag3".to_string()]);
    }

    #[test]
    fn last_status_token_wins() {
        let update = parse_metadata("done; up next");
        assert_eq!(update.status, Some(Status::UpNext));
    }
}
