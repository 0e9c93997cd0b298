//! User descriptor

use crate::types::Credential;
use anyhow::{Result, bail};
use serde::Serialize;
use stategraph::Declare;

/// Desired state of a user account
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Logical declaration name
    pub name: String,
    /// Identifier of the owning realm
    pub realm: String,
    /// Login name
    pub username: String,
    /// Whether the account can log in
    pub enabled: bool,
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Whether the email address counts as verified
    pub email_verified: bool,
    /// Initial credential; a throwaway test value, never a production secret
    pub initial_password: Option<Credential>,
}

impl User {
    /// Create an enabled user with the given username
    pub fn new(
        name: impl Into<String>,
        realm: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            realm: realm.into(),
            username: username.into(),
            enabled: true,
            first_name: None,
            last_name: None,
            email: None,
            email_verified: false,
            initial_password: None,
        }
    }
}

impl Declare for User {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "user"
    }

    fn description(&self) -> String {
        format!("User {} in {}", self.username, self.realm)
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            bail!("declaration name must not be empty");
        }
        if self.realm.is_empty() {
            bail!("realm reference must not be empty");
        }
        if self.username.is_empty() {
            bail!("username must not be empty");
        }
        if let Some(email) = &self.email
            && !email.contains('@')
        {
            bail!("email address \"{email}\" is not valid");
        }
        if let Some(cred) = &self.initial_password
            && cred.value.is_empty()
        {
            bail!("initial password must not be empty");
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
