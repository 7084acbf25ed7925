use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct AuthRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Payload collected by the three-step registration wizard.
///
/// Only `full_name`, `email`, `institution` and `profile_picture` end up in the
/// session; the rest is accepted and dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    // personal
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub profile_picture: Option<String>,

    // academic
    pub institution: String,
    pub course: String,
    pub matric_number: String,
    pub entry_year: String,
    pub graduation_year: String,
    pub degree: String,
    pub secondary_school: String,
    pub secondary_location: String,
    pub secondary_years: String,

    // professional
    pub occupation: String,
    pub company: String,
    pub linkedin: String,
    pub open_to_mentorship: bool,
    pub show_profile_publicly: bool,
    pub agree_to_terms: bool,
}
