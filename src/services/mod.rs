// Service exports
pub mod accounts;
pub mod catalog;

pub use accounts::{authenticate, issue_token, registered_profile, verify_token, TokenError};
pub use catalog::{assessment_questions, content_catalog, dashboard_overview, find_content, recommendations};
