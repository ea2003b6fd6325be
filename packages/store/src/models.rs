//! # Portal data model
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Role`] | Account kind chosen at signup, `seeker` or `employer`. |
//! | [`UserRecord`] | A user as returned by the users collaborator and as persisted in the session. |
//! | [`NewUser`] | Body of the `POST /users` request sent on signup. |
//! | [`Credentials`] | Login form buffer. |
//! | [`ProfileEdit`] | Profile form buffer merged back into the session record on save. |
//!
//! [`UserRecord`] keeps every field the collaborator sent, including ones this
//! crate does not know about, so a session written back after a profile merge
//! is the collaborator's record plus the client-side edits.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_TITLE: &str = "Software Engineer";
pub const DEFAULT_BIO: &str =
    "Passionate developer with 5+ years of experience in building scalable web applications.";
pub const DEFAULT_LOCATION: &str = "San Francisco, CA";
pub const DEFAULT_PHONE: &str = "+1 (555) 123-4567";

/// Account kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Seeker,
    Employer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Seeker => "seeker",
            Role::Employer => "employer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Seeker => "Job Seeker",
            Role::Employer => "Employer",
        }
    }
}

/// A user record owned by the collaborator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Collaborator-assigned identifier; numeric or string depending on the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Fields the collaborator returned that have no typed counterpart.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Uppercase first letter of the name, `'?'` when the name is empty.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?')
    }

    /// Overwrite the editable profile fields. The email is never touched.
    pub fn merge_profile(&mut self, edit: &ProfileEdit) {
        self.name = edit.name.clone();
        self.title = Some(edit.title.clone());
        self.bio = Some(edit.bio.clone());
        self.location = Some(edit.location.clone());
        self.phone = Some(edit.phone.clone());
    }

    /// Whether the record carries the fields every view relies on.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

/// Signup request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Login form buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Profile form buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileEdit {
    pub name: String,
    /// Shown read-only; ignored by [`UserRecord::merge_profile`].
    pub email: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub phone: String,
}

impl Default for ProfileEdit {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            title: DEFAULT_TITLE.to_string(),
            bio: DEFAULT_BIO.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            phone: DEFAULT_PHONE.to_string(),
        }
    }
}

impl ProfileEdit {
    /// Seed the form from a session record, keeping placeholders for missing fields.
    pub fn from_record(record: &UserRecord) -> Self {
        let defaults = Self::default();
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            title: record.title.clone().unwrap_or(defaults.title),
            bio: record.bio.clone().unwrap_or(defaults.bio),
            location: record.location.clone().unwrap_or(defaults.location),
            phone: record.phone.clone().unwrap_or(defaults.phone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_keeps_unknown_fields() {
        let raw = json!({
            "id": "7f3a",
            "name": "Ada",
            "email": "ada@example.com",
            "password": "secret",
            "role": "employer",
            "company": "Analytical Engines"
        });

        let record: UserRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(record.role, Role::Employer);
        assert_eq!(record.id, Some(json!("7f3a")));
        assert_eq!(record.extra.get("company"), Some(&json!("Analytical Engines")));

        // Written back unchanged
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }

    #[test]
    fn test_missing_role_defaults_to_seeker() {
        let record: UserRecord =
            serde_json::from_value(json!({"name": "A", "email": "a@x.com", "password": "p"}))
                .unwrap();
        assert_eq!(record.role, Role::Seeker);
        assert_eq!(record.id, None);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let parsed = serde_json::from_value::<UserRecord>(json!({"email": "a@x.com"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_initial() {
        let mut record = UserRecord {
            name: "grace".to_string(),
            ..Default::default()
        };
        assert_eq!(record.initial(), 'G');

        record.name.clear();
        assert_eq!(record.initial(), '?');
    }

    #[test]
    fn test_merge_profile_ignores_email() {
        let mut record = UserRecord {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
            ..Default::default()
        };

        let edit = ProfileEdit {
            name: "Alice".to_string(),
            email: "hijack@x.com".to_string(),
            title: "Staff Engineer".to_string(),
            bio: "Builds things.".to_string(),
            location: "Lisbon".to_string(),
            phone: "+351 000".to_string(),
        };
        record.merge_profile(&edit);

        assert_eq!(record.name, "Alice");
        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.password, "p");
        assert_eq!(record.title.as_deref(), Some("Staff Engineer"));
        assert_eq!(record.location.as_deref(), Some("Lisbon"));
    }

    #[test]
    fn test_profile_edit_seeds_placeholders() {
        let record = UserRecord {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            location: Some("Berlin".to_string()),
            ..Default::default()
        };

        let edit = ProfileEdit::from_record(&record);
        assert_eq!(edit.name, "A");
        assert_eq!(edit.email, "a@x.com");
        assert_eq!(edit.title, DEFAULT_TITLE);
        assert_eq!(edit.location, "Berlin");
        assert_eq!(edit.phone, DEFAULT_PHONE);
    }

    #[test]
    fn test_new_user_body_shape() {
        let body = NewUser {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
            role: Role::Employer,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"name": "A", "email": "a@x.com", "password": "p", "role": "employer"})
        );
    }
}
