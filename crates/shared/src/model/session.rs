use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Storage key holding the serialized session record.
pub const SESSION_KEY: &str = "gradlink_user";

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Institution,
    Admin,
}

impl Role {
    /// Landing view for the role after sign-in.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::User => "/dashboard",
            Role::Institution => "/institution",
            Role::Admin => "/admin",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Institution => "institution",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user, as held in memory and mirrored to durable storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub is_demo: bool,
    pub profile_completion: u8,
    pub is_online: bool,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    /// Applies every field present in `update`, leaving the rest untouched.
    pub fn merge(&mut self, update: SessionUpdate) {
        let SessionUpdate {
            id,
            name,
            email,
            institution,
            profile_picture,
            role,
            is_demo,
            profile_completion,
            is_online,
            last_seen,
        } = update;

        if let Some(id) = id {
            self.id = id;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(institution) = institution {
            self.institution = institution;
        }
        if let Some(profile_picture) = profile_picture {
            self.profile_picture = profile_picture;
        }
        if let Some(role) = role {
            self.role = role;
        }
        if let Some(is_demo) = is_demo {
            self.is_demo = is_demo;
        }
        if let Some(profile_completion) = profile_completion {
            self.profile_completion = profile_completion;
        }
        if let Some(is_online) = is_online {
            self.is_online = is_online;
        }
        if let Some(last_seen) = last_seen {
            self.last_seen = last_seen;
        }
    }
}

/// Partial session record. `None` leaves the field unchanged; for the optional
/// fields an explicit JSON `null` (`Some(None)`) clears them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, nullable)]
    pub institution: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, nullable)]
    pub profile_picture: Option<Option<String>>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub is_demo: Option<bool>,
    #[serde(default)]
    pub profile_completion: Option<u8>,
    #[serde(default)]
    pub is_online: Option<bool>,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
}

// Only runs when the key is present, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// What subscribers of the session store observe.
#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
    pub user: Option<Session>,
    pending: usize,
}

impl SessionSnapshot {
    /// A snapshot that is still waiting for rehydration.
    pub(crate) fn restoring() -> Self {
        Self {
            user: None,
            pending: 1,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub(crate) fn begin(&mut self) {
        self.pending += 1;
    }

    pub(crate) fn finish(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Session {
        Session {
            id: "demo-user".into(),
            name: "Demo User".into(),
            email: "demo@gradlink.ng".into(),
            institution: Some("University of Lagos".into()),
            profile_picture: None,
            role: Role::User,
            is_demo: true,
            profile_completion: 75,
            is_online: true,
            last_seen: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["isDemo"], true);
        assert_eq!(value["profileCompletion"], 75);
        assert_eq!(value["role"], "user");
        assert!(value.get("profilePicture").is_none());
    }

    #[test]
    fn missing_demo_flag_defaults_to_false() {
        let raw = r#"{
            "id": "admin-user",
            "name": "Admin User",
            "email": "admin@gradlink.ng",
            "role": "admin",
            "profileCompletion": 100,
            "isOnline": true,
            "lastSeen": "2024-05-01T12:00:00Z"
        }"#;

        let session: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(session.role, Role::Admin);
        assert!(!session.is_demo);
        assert_eq!(session.institution, None);
    }

    #[test]
    fn merge_only_touches_named_fields() {
        let mut session = sample();
        session.merge(SessionUpdate {
            name: Some("Ada".into()),
            profile_completion: Some(80),
            ..Default::default()
        });

        let mut expected = sample();
        expected.name = "Ada".into();
        expected.profile_completion = 80;
        assert_eq!(session, expected);
    }

    #[test]
    fn explicit_null_clears_optional_fields() {
        let update: SessionUpdate =
            serde_json::from_str(r#"{"institution": null, "name": "Ada"}"#).unwrap();
        assert_eq!(update.institution, Some(None));
        assert_eq!(update.profile_picture, None);

        let mut session = sample();
        session.profile_picture = Some("data:image/png;base64,AAAA".into());
        session.merge(update);

        assert_eq!(session.institution, None);
        assert_eq!(session.name, "Ada");
        assert_eq!(
            session.profile_picture.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn home_paths_follow_role() {
        assert_eq!(Role::User.home_path(), "/dashboard");
        assert_eq!(Role::Institution.home_path(), "/institution");
        assert_eq!(Role::Admin.home_path(), "/admin");
        assert_eq!(Role::Institution.to_string(), "institution");
    }

    #[test]
    fn loading_tracks_pending_operations() {
        let mut snapshot = SessionSnapshot::restoring();
        assert!(snapshot.is_loading());
        snapshot.begin();
        snapshot.finish();
        assert!(snapshot.is_loading());
        snapshot.finish();
        assert!(!snapshot.is_loading());
        snapshot.finish();
        assert!(!snapshot.is_loading());
    }
}
