//! Current-user model shared between the session API and the frontend

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the session endpoint.
///
/// Absence of the whole struct means "not signed in"; the individual fields
/// are optional on top of that because a session may exist without a
/// completed profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl CurrentUser {
    /// Avatar badge character: first character of the display name,
    /// uppercased, falling back to the literal placeholder 'U'.
    pub fn initial(&self) -> char {
        self.display_name
            .as_deref()
            .and_then(|name| name.chars().next())
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> CurrentUser {
        CurrentUser {
            display_name: Some(name.to_string()),
            email: None,
        }
    }

    #[test]
    fn test_initial_from_display_name() {
        assert_eq!(named("Asha").initial(), 'A');
        assert_eq!(named("ben").initial(), 'B');
    }

    #[test]
    fn test_initial_placeholder_without_name() {
        assert_eq!(CurrentUser::default().initial(), 'U');
        assert_eq!(named("").initial(), 'U');
    }

    #[test]
    fn test_missing_email_is_absence_not_error() {
        let user = named("Asha");
        assert!(user.email.is_none());
        assert_eq!(user.initial(), 'A');
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let user = CurrentUser {
            display_name: Some("Asha".to_string()),
            email: Some("asha@example.com".to_string()),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["displayName"], "Asha");
        assert_eq!(json["email"], "asha@example.com");

        let parsed: CurrentUser = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, CurrentUser::default());
    }
}
