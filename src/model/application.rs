use serde::{Deserialize, Serialize};

// API: https://cumulocity.com/api/core/#tag/Applications
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<ApplicationAvailability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<ApplicationOwner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ApplicationType>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApplicationOwner {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<TenantReference>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TenantReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationType {
    External,
    Hosted,
    Microservice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationAvailability {
    Market,
    Private,
    Shared,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn deserialize_an_application() -> serde_json::Result<()> {
        let application = serde_json::from_str::<Application>(include_str!("../../tests/resources/application.json"))?;

        assert_eq!(application.name.as_deref(), Some("device-simulator"));
        assert_eq!(application.r#type, Some(ApplicationType::Microservice));
        assert_eq!(application.availability, Some(ApplicationAvailability::Market));
        assert_eq!(application.owner.and_then(|owner| owner.tenant).and_then(|tenant| tenant.id).as_deref(), Some("management"));
        assert_eq!(application.required_roles, Some(vec!["ROLE_INVENTORY_READ".to_string()]));

        Ok(())
    }

    #[rstest]
    #[case::external(json!("EXTERNAL"), true)]
    #[case::hosted(json!("HOSTED"), true)]
    #[case::lowercase(json!("hosted"), false)]
    #[case::unknown(json!("PLUGIN"), false)]
    fn only_declared_types_are_accepted(#[case] wire: serde_json::Value, #[case] accepted: bool) {
        assert_eq!(serde_json::from_value::<ApplicationType>(wire).is_ok(), accepted);
    }
}
