//! Field constraints for task payloads and ids.

use shared::TaskPayload;

use crate::error::TaskError;

const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 100;
const DESCRIPTION_MAX: usize = 500;

/// Rejects payloads with a missing/blank title, a trimmed title shorter than 3
/// characters, a title longer than 100, or a description longer than 500.
/// Lengths are counted in characters, not bytes.
pub fn validate_payload(payload: &TaskPayload) -> Result<(), TaskError> {
    let title = payload.title.as_deref().unwrap_or("");
    if title.trim().is_empty() {
        return Err(TaskError::Validation("title is required".into()));
    }
    if title.trim().chars().count() < TITLE_MIN {
        return Err(TaskError::Validation(format!(
            "title must be at least {TITLE_MIN} characters"
        )));
    }
    if title.chars().count() > TITLE_MAX {
        return Err(TaskError::Validation(format!(
            "title must not exceed {TITLE_MAX} characters"
        )));
    }
    if let Some(description) = &payload.description {
        if description.chars().count() > DESCRIPTION_MAX {
            return Err(TaskError::Validation(format!(
                "description must not exceed {DESCRIPTION_MAX} characters"
            )));
        }
    }
    Ok(())
}

pub fn validate_id(id: i64) -> Result<(), TaskError> {
    if id <= 0 {
        return Err(TaskError::Validation(
            "id must be a positive number".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str) -> TaskPayload {
        TaskPayload {
            title: Some(title.to_string()),
            ..TaskPayload::default()
        }
    }

    #[test]
    fn accepts_a_well_formed_payload() {
        let p = TaskPayload {
            title: Some("Buy milk".into()),
            description: Some("2%".into()),
            completed: false,
        };
        assert!(validate_payload(&p).is_ok());
    }

    #[test]
    fn rejects_missing_or_blank_titles() {
        for p in [TaskPayload::default(), payload(""), payload("   ")] {
            assert!(matches!(
                validate_payload(&p),
                Err(TaskError::Validation(_))
            ));
        }
    }

    #[test]
    fn rejects_titles_shorter_than_three_after_trimming() {
        for title in ["ab", "  ab  ", "x"] {
            assert!(matches!(
                validate_payload(&payload(title)),
                Err(TaskError::Validation(_))
            ));
        }
        assert!(validate_payload(&payload("abc")).is_ok());
    }

    #[test]
    fn rejects_titles_longer_than_a_hundred() {
        assert!(validate_payload(&payload(&"x".repeat(100))).is_ok());
        assert!(matches!(
            validate_payload(&payload(&"x".repeat(101))),
            Err(TaskError::Validation(_))
        ));
    }

    #[test]
    fn rejects_descriptions_longer_than_five_hundred() {
        let mut p = payload("Buy milk");
        p.description = Some("d".repeat(500));
        assert!(validate_payload(&p).is_ok());
        p.description = Some("d".repeat(501));
        assert!(matches!(
            validate_payload(&p),
            Err(TaskError::Validation(_))
        ));
    }

    #[test]
    fn length_is_counted_in_characters() {
        // 100 multi-byte characters is still within the limit
        assert!(validate_payload(&payload(&"á".repeat(100))).is_ok());
    }

    #[test]
    fn rejects_non_positive_ids() {
        assert!(matches!(validate_id(0), Err(TaskError::Validation(_))));
        assert!(matches!(validate_id(-5), Err(TaskError::Validation(_))));
        assert!(validate_id(1).is_ok());
    }
}
