//! Role-binding descriptor

use anyhow::{Result, bail};
use serde::Serialize;
use stategraph::Declare;
use std::collections::HashSet;

/// Desired assignment of roles to a user
///
/// Every entry in `roles` must be the assigned identifier of a role
/// declared earlier in the same graph.
#[derive(Debug, Clone, Serialize)]
pub struct RoleBinding {
    /// Logical declaration name
    pub name: String,
    /// Identifier of the owning realm
    pub realm: String,
    /// Identifier of the user receiving the roles
    pub user: String,
    /// Identifiers of the roles to assign
    pub roles: Vec<String>,
    /// Engine semantics: `true` means the listed set is the complete
    /// assignment and anything else is removed; `false` means the listed
    /// roles are ensured present and others are left alone. The engine
    /// interprets this flag; this program only carries it.
    pub exhaustive: bool,
}

impl RoleBinding {
    /// Create a non-exhaustive binding of the given roles to a user
    pub fn new(
        name: impl Into<String>,
        realm: impl Into<String>,
        user: impl Into<String>,
        roles: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            realm: realm.into(),
            user: user.into(),
            roles,
            exhaustive: false,
        }
    }
}

impl Declare for RoleBinding {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "role_binding"
    }

    fn description(&self) -> String {
        format!(
            "Role assignment for {} ({} roles)",
            self.user,
            self.roles.len()
        )
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            bail!("declaration name must not be empty");
        }
        if self.realm.is_empty() {
            bail!("realm reference must not be empty");
        }
        if self.user.is_empty() {
            bail!("user reference must not be empty");
        }
        if self.roles.is_empty() {
            bail!("a role binding must list at least one role");
        }
        let mut seen = HashSet::new();
        for role in &self.roles {
            if role.is_empty() {
                bail!("role references must not be empty");
            }
            if !seen.insert(role) {
                bail!("role \"{role}\" is listed twice");
            }
        }
        Ok(())
    }

    fn attributes(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn references(&self) -> Vec<String> {
        let mut refs = vec![self.realm.clone(), self.user.clone()];
        refs.extend(self.roles.iter().cloned());
        refs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding() -> RoleBinding {
        RoleBinding::new(
            "demouser-roles",
            "realm.demorealm",
            "user.demouser",
            vec!["role.demo-role".to_string()],
        )
    }

    #[test]
    fn test_binding_references_everything_it_names() {
        let b = binding();
        assert!(b.validate().is_ok());
        assert!(!b.exhaustive);
        assert_eq!(
            b.references(),
            ["realm.demorealm", "user.demouser", "role.demo-role"]
        );
    }

    #[test]
    fn test_empty_role_set_rejected() {
        let b = RoleBinding {
            roles: vec![],
            ..binding()
        };
        assert!(b.validate().is_err());
    }

    #[test]
    fn test_duplicate_role_rejected() {
        let b = RoleBinding {
            roles: vec![
                "role.demo-role".to_string(),
                "role.demo-role".to_string(),
            ],
            ..binding()
        };
        assert!(b.validate().is_err());
    }
}
