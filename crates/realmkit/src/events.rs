//! Event-logging configuration for a realm
//!
//! This entity only exists when a fixture opts into event logging, but a
//! conditional declaration still passes its explicit dependency edge to the
//! realm - declaration order matters even when no value flows along the
//! edge.

use anyhow::{Result, bail};
use serde::Serialize;
use stategraph::Declare;

/// Desired state of a realm's event logging
#[derive(Debug, Clone, Serialize)]
pub struct RealmEvents {
    /// Logical declaration name
    pub name: String,
    /// Identifier of the realm being configured
    pub realm: String,
    /// Record login events
    pub events_enabled: bool,
    /// Listeners receiving recorded events (e.g. "jboss-logging")
    pub events_listeners: Vec<String>,
    /// Record admin console operations
    pub admin_events_enabled: bool,
    /// Include representations in recorded admin events
    pub admin_events_details_enabled: bool,
}

impl RealmEvents {
    /// Create an event-logging configuration with login events enabled
    pub fn new(name: impl Into<String>, realm: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            realm: realm.into(),
            events_enabled: true,
            events_listeners: Vec::new(),
            admin_events_enabled: false,
            admin_events_details_enabled: false,
        }
    }
}

impl Declare for RealmEvents {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "realm_events"
    }

    fn description(&self) -> String {
        format!("Event logging for {}", self.realm)
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            bail!("declaration name must not be empty");
        }
        if self.realm.is_empty() {
            bail!("realm reference must not be empty");
        }
        if self.admin_events_details_enabled && !self.admin_events_enabled {
            bail!("admin event details require admin events to be enabled");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_realm() {
        let events = RealmEvents::new("demorealm-events", "realm.demorealm");
        assert_eq!(events.references(), ["realm.demorealm"]);
        assert!(events.validate().is_ok());
    }

    #[test]
    fn test_details_require_admin_events() {
        let events = RealmEvents {
            admin_events_details_enabled: true,
            ..RealmEvents::new("demorealm-events", "realm.demorealm")
        };
        assert!(events.validate().is_err());
    }
}
