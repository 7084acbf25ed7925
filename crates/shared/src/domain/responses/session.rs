use crate::model::Session;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub user: Session,
    /// View the client should navigate to next.
    pub redirect: String,
}

impl From<Session> for SessionResponse {
    fn from(user: Session) -> Self {
        let redirect = user.role.home_path().to_string();
        Self { user, redirect }
    }
}
