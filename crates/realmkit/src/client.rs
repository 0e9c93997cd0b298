//! OpenID client descriptor

use crate::types::AccessType;
use anyhow::{Result, bail};
use serde::Serialize;
use stategraph::Declare;

/// Desired state of an OpenID client application
#[derive(Debug, Clone, Serialize)]
pub struct OpenidClient {
    /// Logical declaration name
    pub name: String,
    /// Identifier of the owning realm
    pub realm: String,
    /// Client identifier presented during authentication
    pub client_id: String,
    /// Display name of the client
    pub display_name: Option<String>,
    /// Access type (public, confidential, bearer-only)
    pub access_type: AccessType,
    /// Client secret; required unless the client is public
    pub client_secret: Option<String>,
    /// How the client authenticates (e.g. "client-secret")
    pub client_authenticator: Option<String>,
    /// Enable the authorization-code flow
    pub standard_flow_enabled: bool,
    /// Enable the implicit flow
    pub implicit_flow_enabled: bool,
    /// Enable direct access (password) grants
    pub direct_access_grants_enabled: bool,
    /// Enable the service-account (client credentials) grant
    pub service_accounts_enabled: bool,
}

impl OpenidClient {
    /// Create a client with the given access type
    pub fn new(
        name: impl Into<String>,
        realm: impl Into<String>,
        client_id: impl Into<String>,
        access_type: AccessType,
    ) -> Self {
        Self {
            name: name.into(),
            realm: realm.into(),
            client_id: client_id.into(),
            display_name: None,
            access_type,
            client_secret: None,
            client_authenticator: None,
            standard_flow_enabled: true,
            implicit_flow_enabled: false,
            direct_access_grants_enabled: false,
            service_accounts_enabled: false,
        }
    }

    /// Create a public client
    pub fn public(
        name: impl Into<String>,
        realm: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self::new(name, realm, client_id, AccessType::Public)
    }

    /// Create a confidential client with a secret
    pub fn confidential(
        name: impl Into<String>,
        realm: impl Into<String>,
        client_id: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        let mut client = Self::new(name, realm, client_id, AccessType::Confidential);
        client.client_secret = Some(secret.into());
        client
    }

    /// Create a bearer-only client with a secret
    ///
    /// Bearer-only clients never initiate logins; they only validate
    /// tokens, so the login flows are disabled.
    pub fn bearer_only(
        name: impl Into<String>,
        realm: impl Into<String>,
        client_id: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        let mut client = Self::new(name, realm, client_id, AccessType::BearerOnly);
        client.client_secret = Some(secret.into());
        client.standard_flow_enabled = false;
        client
    }
}

impl Declare for OpenidClient {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "openid_client"
    }

    fn description(&self) -> String {
        format!("OpenID client {} in {}", self.client_id, self.realm)
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            bail!("declaration name must not be empty");
        }
        if self.realm.is_empty() {
            bail!("realm reference must not be empty");
        }
        if self.client_id.is_empty() {
            bail!("client_id must not be empty");
        }
        match self.access_type {
            AccessType::Public => {
                if self.client_secret.is_some() {
                    bail!("public clients cannot carry a secret");
                }
            }
            AccessType::Confidential | AccessType::BearerOnly => {
                if self.client_secret.is_none() {
                    bail!("{} clients require a secret", self.access_type);
                }
            }
        }
        Ok(())
    }

    fn attributes(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn references(&self) -> Vec<String> {
        vec![self.realm.clone()]
    }
}
