use serde::Serialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, FieldError};
use crate::models::career::CareerOption;
use crate::models::user::UserRow;
use crate::quiz::scoring::{rank_categories, score_answers};
use crate::repository::{TestSubmission, UserRepository};

/// Flat XP award for a completed test.
pub const XP_PER_TEST: i32 = 100;

const ANSWERS_FIELD: &str = "answers";

#[derive(Debug, Serialize)]
pub struct QuizOutcome {
    pub career_options: Vec<CareerOption>,
    pub xp_gained: i32,
}

const EMPTY_ANSWERS: &str = "Answers must be a non-empty array";

/// Field errors for a decoded answer list: the list and each entry must be non-empty.
fn answer_errors(answers: &[String]) -> Vec<FieldError> {
    if answers.is_empty() {
        return vec![FieldError::new(ANSWERS_FIELD, EMPTY_ANSWERS)];
    }
    answers
        .iter()
        .enumerate()
        .filter(|(_, a)| a.is_empty())
        .map(|(i, _)| {
            FieldError::new(
                format!("{ANSWERS_FIELD}[{i}]"),
                "Each answer must be a non-empty string",
            )
        })
        .collect()
}

/// Converts a raw `answers` payload into a list of non-empty strings.
pub fn parse_answers(raw: Option<&Value>) -> Result<Vec<String>, AppError> {
    let Some(Value::Array(items)) = raw else {
        return Err(AppError::field(ANSWERS_FIELD, EMPTY_ANSWERS));
    };

    // Non-strings decode to "" so they are reported at their index below.
    let answers: Vec<String> = items
        .iter()
        .map(|item| item.as_str().unwrap_or_default().to_string())
        .collect();
    check_answers(&answers)?;
    Ok(answers)
}

fn check_answers(answers: &[String]) -> Result<(), AppError> {
    let errors = answer_errors(answers);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Scores a submission, appends the test result and applies it to the user.
///
/// Not idempotent: every call adds `XP_PER_TEST` and a result row. Callers
/// that must allow a single submission check `test_completed` first.
pub async fn submit_answers(
    users: &dyn UserRepository,
    user_id: Uuid,
    answers: Vec<String>,
) -> Result<(QuizOutcome, UserRow), AppError> {
    check_answers(&answers)?;

    let scores = score_answers(&answers);
    let career_options = rank_categories(&scores);

    let submission = TestSubmission {
        answers,
        career_options,
        xp_gained: XP_PER_TEST,
    };
    let user = users.record_test_result(user_id, &submission).await?;

    info!(
        "User {user_id} completed the career test: top category {}",
        submission
            .career_options
            .first()
            .map(|o| o.id.as_str())
            .unwrap_or("none")
    );

    Ok((
        QuizOutcome {
            career_options: submission.career_options,
            xp_gained: XP_PER_TEST,
        },
        user,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::career::CareerCategory;
    use crate::repository::memory::InMemoryUserRepository;
    use crate::repository::NewUser;
    use serde_json::json;

    async fn seeded() -> (InMemoryUserRepository, Uuid) {
        let repo = InMemoryUserRepository::new();
        let user = repo
            .create(NewUser {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                password_hash: "hash".into(),
            })
            .await
            .unwrap();
        (repo, user.id)
    }

    fn technical() -> Vec<String> {
        ["logical", "computer", "coding", "innovation"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_submit_updates_user() {
        let (repo, id) = seeded().await;
        let (outcome, user) = submit_answers(&repo, id, technical()).await.unwrap();

        assert_eq!(outcome.xp_gained, 100);
        assert_eq!(outcome.career_options[0].id, CareerCategory::Technical);
        assert_eq!(outcome.career_options[0].score, 10);
        assert!(user.test_completed);
        assert_eq!(user.xp, 100);
        assert_eq!(user.career_options(), outcome.career_options.as_slice());
        assert_eq!(repo.test_results(id).await.unwrap().len(), 1);
    }

    /// The engine has no resubmission guard of its own.
    #[tokio::test]
    async fn test_double_submit_doubles_xp() {
        let (repo, id) = seeded().await;
        submit_answers(&repo, id, technical()).await.unwrap();
        let (_, user) = submit_answers(&repo, id, technical()).await.unwrap();

        assert_eq!(user.xp, 200);
        assert_eq!(repo.test_results(id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_user_is_not_found() {
        let (repo, _) = seeded().await;
        let err = submit_answers(&repo, Uuid::new_v4(), technical())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_answers_rejected_before_side_effects() {
        let (repo, id) = seeded().await;
        let err = submit_answers(&repo, id, vec![]).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = submit_answers(&repo, id, vec!["logical".into(), String::new()])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let user = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(user.xp, 0);
        assert!(!user.test_completed);
    }

    #[test]
    fn test_parse_and_submit_report_same_errors() {
        let raw = parse_answers(Some(&json!(["logical", 7, ""]))).unwrap_err();
        let decoded = check_answers(&["logical".into(), String::new(), String::new()]).unwrap_err();
        let (AppError::Validation(raw), AppError::Validation(decoded)) = (raw, decoded) else {
            panic!("expected validation errors");
        };
        assert_eq!(raw, decoded);
        assert_eq!(raw[0].field, "answers[1]");
        assert_eq!(raw[1].field, "answers[2]");
    }

    #[test]
    fn test_parse_answers_shapes() {
        assert!(parse_answers(None).is_err());
        assert!(parse_answers(Some(&json!([]))).is_err());
        assert!(parse_answers(Some(&json!("logical"))).is_err());
        assert!(parse_answers(Some(&json!(["logical", 3]))).is_err());
        assert!(parse_answers(Some(&json!(["logical", ""]))).is_err());
        assert_eq!(
            parse_answers(Some(&json!(["logical", "studio"]))).unwrap(),
            vec!["logical".to_string(), "studio".to_string()]
        );
    }

    #[test]
    fn test_parse_answers_reports_bad_index() {
        match parse_answers(Some(&json!(["logical", 7]))) {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "answers[1]");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
