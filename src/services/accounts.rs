use thiserror::Error;
use crate::models::{LearningStyle, UserProfile};

const TOKEN_PREFIX: &str = "demo_token_";

/// Id handed to every freshly registered account
pub const REGISTERED_USER_ID: u32 = 999;

/// Errors that can occur when verifying a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Invalid token")]
    Malformed,

    #[error("User not found")]
    UnknownUser(u32),
}

/// Demo directory: each profile with its plaintext password
fn demo_accounts() -> Vec<(UserProfile, &'static str)> {
    vec![(
        UserProfile {
            id: 1,
            email: "alex@example.com".to_string(),
            username: "alex_student".to_string(),
            learning_style: Some(LearningStyle::Visual),
            assessment_completed: true,
        },
        "password123",
    )]
}

/// Check a credential pair against the demo directory
///
/// Returns `None` for any mismatch, without saying which field was wrong.
pub fn authenticate(email: &str, password: &str) -> Option<UserProfile> {
    demo_accounts()
        .into_iter()
        .find(|(profile, secret)| profile.email == email && *secret == password)
        .map(|(profile, _)| profile)
}

/// Look up a demo account by id
pub fn find_by_id(id: u32) -> Option<UserProfile> {
    demo_accounts()
        .into_iter()
        .map(|(profile, _)| profile)
        .find(|profile| profile.id == id)
}

/// Profile for a newly registered account
///
/// Registrations are not stored, so the profile is returned once and never
/// resolves through `find_by_id`.
pub fn registered_profile(email: &str, username: &str) -> UserProfile {
    UserProfile {
        id: REGISTERED_USER_ID,
        email: email.to_string(),
        username: username.to_string(),
        learning_style: None,
        assessment_completed: false,
    }
}

/// Issue a demo token for a user: `demo_token_{id}_{unix_seconds}`
pub fn issue_token(user_id: u32) -> String {
    format!("{}{}_{}", TOKEN_PREFIX, user_id, chrono::Utc::now().timestamp())
}

/// Parse the user id out of a demo token
pub fn parse_token(token: &str) -> Result<u32, TokenError> {
    let rest = token.strip_prefix(TOKEN_PREFIX).ok_or(TokenError::Malformed)?;
    let id = rest.split('_').next().ok_or(TokenError::Malformed)?;
    id.parse().map_err(|_| TokenError::Malformed)
}

/// Resolve a bearer token to the profile it was issued for
pub fn verify_token(token: &str) -> Result<UserProfile, TokenError> {
    let id = parse_token(token)?;
    find_by_id(id).ok_or(TokenError::UnknownUser(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_demo_account() {
        let profile = authenticate("alex@example.com", "password123").unwrap();
        assert_eq!(profile.id, 1);
        assert_eq!(profile.learning_style, Some(LearningStyle::Visual));
    }

    #[test]
    fn test_authenticate_rejects_mismatch() {
        assert!(authenticate("alex@example.com", "wrong").is_none());
        assert!(authenticate("nobody@example.com", "password123").is_none());
    }

    #[test]
    fn test_issued_token_round_trips() {
        let token = issue_token(1);
        assert!(token.starts_with("demo_token_1_"));
        assert_eq!(verify_token(&token).unwrap().username, "alex_student");
    }

    #[test]
    fn test_parse_token_rejects_garbage() {
        assert_eq!(parse_token("abc"), Err(TokenError::Malformed));
        assert_eq!(parse_token("demo_token_x_1"), Err(TokenError::Malformed));
        assert_eq!(parse_token("demo_token_"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_registered_user_does_not_resolve() {
        let token = issue_token(REGISTERED_USER_ID);
        assert_eq!(verify_token(&token), Err(TokenError::UnknownUser(999)));
    }
}
