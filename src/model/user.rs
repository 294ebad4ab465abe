use crate::model::CustomProperties;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// API: https://cumulocity.com/api/core/#tag/Users
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_password_change: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_reset_password: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_factor_authentication_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<CustomProperties>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserialize_a_user() -> serde_json::Result<()> {
        let user = serde_json::from_value::<User>(json!({
            "id": "jdoe",
            "userName": "jdoe",
            "email": "jdoe@example.com",
            "enabled": true,
            "twoFactorAuthenticationEnabled": false,
            "customProperties": { "language": "en" },
            "applications": []
        }))?;

        assert_eq!(user.user_name.as_deref(), Some("jdoe"));
        assert_eq!(user.enabled, Some(true));
        assert_eq!(user.two_factor_authentication_enabled, Some(false));
        assert_eq!(user.custom_properties.as_ref().and_then(|p| p.language()).map(String::as_str), Some("en"));

        Ok(())
    }

    #[test]
    fn password_is_only_sent_when_set() -> serde_json::Result<()> {
        let mut user = User {
            user_name: Some("jdoe".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&user)?, json!({ "userName": "jdoe" }));

        user.password = Some("s3cret!".to_string());
        assert_eq!(serde_json::to_value(&user)?, json!({ "userName": "jdoe", "password": "s3cret!" }));
        Ok(())
    }
}
