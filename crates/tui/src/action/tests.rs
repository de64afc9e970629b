use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nomad_client::ClientError;
use secrecy::SecretString;

use super::*;

fn redacted(action: &Action) -> String {
    format!("{:?}", RedactedAction(action))
}

#[test]
fn test_token_is_never_logged() {
    let action = Action::SaveToken(Some(SecretString::new(
        "3b1b2c4e-secret-token".to_string().into(),
    )));
    let output = redacted(&action);
    assert!(!output.contains("secret-token"));
    assert_eq!(output, "SaveToken(<redacted>)");
}

#[test]
fn test_location_query_is_redacted() {
    let output = redacted(&Action::Visit("/jobs?search=customer-42".to_string()));
    assert!(output.starts_with("Visit(/jobs?<18 chars, hash="));
    assert!(!output.contains("customer-42"));

    assert_eq!(redacted(&Action::Visit("/jobs/run".to_string())), "Visit(/jobs/run)");
}

#[test]
fn test_typed_characters_are_redacted() {
    let key = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
    let output = redacted(&Action::Input(key));
    assert!(!output.contains("'p'"));

    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert!(redacted(&Action::Input(enter)).starts_with("Input(Enter, "));
}

#[test]
fn test_jobs_loaded_shows_counts_only() {
    let ok = Action::JobsLoaded {
        request_id: 3,
        result: Ok(Vec::new()),
    };
    assert_eq!(redacted(&ok), "JobsLoaded(request_id=3, <0 jobs>)");

    let err = Action::JobsLoaded {
        request_id: 4,
        result: Err(Arc::new(ClientError::ApiError {
            status: 403,
            url: "http://localhost:4646/v1/jobs".to_string(),
            message: "Permission denied".to_string(),
        })),
    };
    assert_eq!(
        redacted(&err),
        "JobsLoaded(request_id=4, <error status=Some(403)>)"
    );
}

#[test]
fn test_refresh_uses_debug() {
    assert_eq!(redacted(&Action::RefreshJobs), "RefreshJobs");
}

#[test]
fn test_plain_variants_use_debug() {
    assert_eq!(redacted(&Action::Quit), "Quit");
    assert_eq!(
        redacted(&Action::LoadJobs {
            namespace: "default".to_string(),
            request_id: 1
        }),
        "LoadJobs { namespace: \"default\", request_id: 1 }"
    );
}
