//! Realm descriptor - the root of every identity fixture

use anyhow::{Result, bail};
use serde::Serialize;
use stategraph::Declare;

/// Desired state of an identity realm
///
/// The realm is the root node of the graph: every other descriptor
/// references it by identifier and must carry an explicit dependency edge
/// back to it.
#[derive(Debug, Clone, Serialize)]
pub struct Realm {
    /// Logical declaration name
    pub name: String,
    /// Realm identifier in the identity service
    pub realm: String,
    /// Display name shown on login pages
    pub display_name: Option<String>,
    /// HTML variant of the display name
    pub display_name_html: Option<String>,
    /// Whether the realm accepts logins
    pub enabled: bool,
    /// Lifetime of access codes (e.g. "1h")
    pub access_code_lifespan: Option<String>,
    /// Lifetime of access codes during login flows (e.g. "2h")
    pub access_code_lifespan_login: Option<String>,
    /// Allow logging in with an email address
    pub login_with_email_allowed: bool,
    /// Use the email address as the username at registration
    pub registration_email_as_username: bool,
    /// Theme for the login pages
    pub login_theme: Option<String>,
    /// Theme for the account console
    pub account_theme: Option<String>,
    /// Theme for the admin console
    pub admin_theme: Option<String>,
    /// Theme for outgoing email
    pub email_theme: Option<String>,
}

impl Realm {
    /// Create an enabled realm with the given declaration name and identifier
    pub fn new(name: impl Into<String>, realm: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            realm: realm.into(),
            display_name: None,
            display_name_html: None,
            enabled: true,
            access_code_lifespan: None,
            access_code_lifespan_login: None,
            login_with_email_allowed: false,
            registration_email_as_username: false,
            login_theme: None,
            account_theme: None,
            admin_theme: None,
            email_theme: None,
        }
    }
}

impl Declare for Realm {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "realm"
    }

    fn description(&self) -> String {
        format!("Realm {}", self.realm)
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            bail!("declaration name must not be empty");
        }
        if self.realm.is_empty() {
            bail!("realm identifier must not be empty");
        }
        Ok(())
    }

    fn attributes(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_realm_is_enabled() {
        let realm = Realm::new("demorealm", "demo");
        assert!(realm.enabled);
        assert!(realm.validate().is_ok());
        assert!(realm.references().is_empty());
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let realm = Realm::new("demorealm", "");
        assert!(realm.validate().is_err());
    }

    #[test]
    fn test_attributes_carry_themes() {
        let realm = Realm {
            login_theme: Some("keycloak".to_string()),
            ..Realm::new("demorealm", "demo")
        };

        let attrs = realm.attributes().unwrap();
        assert_eq!(attrs["realm"], "demo");
        assert_eq!(attrs["login_theme"], "keycloak");
        assert_eq!(attrs["account_theme"], serde_json::Value::Null);
    }
}
