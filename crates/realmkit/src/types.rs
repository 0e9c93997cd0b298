//! Shared types for identity-realm descriptors

use serde::{Deserialize, Serialize};

/// Access type of an OpenID client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum AccessType {
    /// Browser client without a secret
    Public,
    /// Server-side client authenticating with a secret
    Confidential,
    /// Resource server that only validates bearer tokens
    BearerOnly,
}

impl AccessType {
    /// The identity service's wire name for this access type
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::Public => "PUBLIC",
            AccessType::Confidential => "CONFIDENTIAL",
            AccessType::BearerOnly => "BEARER-ONLY",
        }
    }
}

impl std::fmt::Display for AccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Initial credential for a user
///
/// Values declared here are throwaway test data. They are handed to the
/// engine verbatim and must never be production secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// The credential value
    pub value: String,
    /// Whether the user must replace it on first login
    pub temporary: bool,
}

impl Credential {
    /// A password the user keeps until they change it themselves
    pub fn permanent(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            temporary: false,
        }
    }

    /// A password that must be replaced on first login
    pub fn temporary(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            temporary: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_type_wire_names() {
        assert_eq!(AccessType::Public.as_str(), "PUBLIC");
        assert_eq!(AccessType::BearerOnly.as_str(), "BEARER-ONLY");

        let json = serde_json::to_value(AccessType::BearerOnly).unwrap();
        assert_eq!(json, "BEARER-ONLY");
    }

    #[test]
    fn test_credential_constructors() {
        let cred = Credential::permanent("pass");
        assert!(!cred.temporary);

        let cred = Credential::temporary("changeme");
        assert!(cred.temporary);
    }
}
