//! Role descriptor

use anyhow::{Result, bail};
use serde::Serialize;
use stategraph::Declare;

/// Desired state of a role
///
/// A role is scoped either to the realm or to one client. A client-scoped
/// role consumes the owning client's assigned identifier, which is why the
/// client must be declared first.
#[derive(Debug, Clone, Serialize)]
pub struct Role {
    /// Role name; also the logical declaration name
    pub name: String,
    /// Identifier of the owning realm
    pub realm: String,
    /// Identifier of the owning client, or `None` for a realm-level role
    pub client: Option<String>,
    /// Human-readable purpose of the role
    pub description: Option<String>,
}

impl Role {
    /// Create a realm-level role
    pub fn realm_level(name: impl Into<String>, realm: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            realm: realm.into(),
            client: None,
            description: None,
        }
    }

    /// Create a role scoped to a client
    pub fn client_level(
        name: impl Into<String>,
        realm: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            realm: realm.into(),
            client: Some(client.into()),
            description: None,
        }
    }
}

impl Declare for Role {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "role"
    }

    fn description(&self) -> String {
        match &self.client {
            Some(client) => format!("Role {} on {}", self.name, client),
            None => format!("Realm role {} in {}", self.name, self.realm),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            bail!("role name must not be empty");
        }
        if self.realm.is_empty() {
            bail!("realm reference must not be empty");
        }
        if let Some(client) = &self.client
            && client.is_empty()
        {
            bail!("client reference must not be empty");
        }
        Ok(())
    }

    fn attributes(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn references(&self) -> Vec<String> {
        let mut refs = vec![self.realm.clone()];
        refs.extend(self.client.clone());
        refs
    }
}
