//! Declaration trait for desired-state resources
//!
//! A `Declare` describes a resource as it should exist, not as it is.
//! Detecting current state and converging toward the declaration is the
//! apply engine's responsibility; this trait only carries identity,
//! validation, and the serialized attribute record the engine consumes.

use anyhow::Result;
use std::fmt;

/// Core trait for desired-state declarations
///
/// Every resource kind handed to a [`crate::BuildContext`] implements this
/// trait, which provides:
/// - Identity (name, kind, description)
/// - Attribute validation
/// - The serialized desired-state record
/// - The foreign identifiers the declaration consumes
///
/// # Example
///
/// ```ignore
/// use stategraph::Declare;
///
/// #[derive(Debug, serde::Serialize)]
/// struct Bucket {
///     name: String,
///     region: String,
/// }
///
/// impl Declare for Bucket {
///     fn name(&self) -> &str {
///         &self.name
///     }
///
///     fn kind(&self) -> &'static str {
///         "bucket"
///     }
///
///     fn description(&self) -> String {
///         format!("Bucket {} in {}", self.name, self.region)
///     }
///
///     fn validate(&self) -> anyhow::Result<()> {
///         if self.name.is_empty() {
///             anyhow::bail!("bucket name must not be empty");
///         }
///         Ok(())
///     }
///
///     fn attributes(&self) -> anyhow::Result<serde_json::Value> {
///         Ok(serde_json::to_value(self)?)
///     }
/// }
/// ```
pub trait Declare: fmt::Debug {
    /// Logical name of this declaration
    ///
    /// Must be unique within its kind for a given graph. Examples:
    /// - "demorealm" for a realm
    /// - "pam-client" for an OpenID client
    fn name(&self) -> &str;

    /// Resource kind tag
    ///
    /// Used for grouping and addressing. Examples:
    /// - "realm", "realm_events"
    /// - "openid_client", "user", "role", "role_binding"
    fn kind(&self) -> &'static str;

    /// Human-readable description of what this declaration describes
    fn description(&self) -> String;

    /// Validate the declaration's attributes
    ///
    /// Called before the declaration reaches the engine. The default
    /// accepts everything.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Serialize the desired-state attribute record for the engine
    fn attributes(&self) -> Result<serde_json::Value>;

    /// Engine-assigned identifiers this declaration consumes
    ///
    /// Every entry must have been produced by a prior declaration in the
    /// same graph; the build context rejects the declaration otherwise.
    /// This is validation only - ordering edges are always passed
    /// explicitly, never derived from references.
    fn references(&self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Serialize)]
    struct Minimal {
        name: String,
    }

    impl Declare for Minimal {
        fn name(&self) -> &str {
            &self.name
        }

        fn kind(&self) -> &'static str {
            "minimal"
        }

        fn description(&self) -> String {
            format!("Minimal {}", self.name)
        }

        fn attributes(&self) -> Result<serde_json::Value> {
            Ok(serde_json::to_value(self)?)
        }
    }

    #[test]
    fn test_defaults() {
        let m = Minimal {
            name: "a".to_string(),
        };
        assert!(m.validate().is_ok());
        assert!(m.references().is_empty());
        assert_eq!(m.attributes().unwrap()["name"], "a");
    }
}
