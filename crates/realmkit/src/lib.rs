//! # realmkit
//!
//! Typed desired-state descriptors for identity-realm resources.
//!
//! Each descriptor describes one resource kind in an identity-and-access
//! management service - realms, OpenID clients, users, roles, and role
//! bindings - as data to be declared into a [`stategraph`] graph. The
//! descriptors validate their own attributes and name the identifiers they
//! consume; they never talk to the identity service themselves, because the
//! wire protocol belongs to the apply engine's provider.
//!
//! ## Example
//!
//! ```ignore
//! use realmkit::{OpenidClient, Realm};
//! use stategraph::{RecordingEngine, runner};
//!
//! let mut engine = RecordingEngine::new();
//! runner::run(&mut engine, |ctx| {
//!     let realm = ctx.declare(Realm::new("demorealm", "demo"), &[])?;
//!     ctx.declare(
//!         OpenidClient::bearer_only("pam-client", realm.id(), "pam_local", "secret"),
//!         &[&realm],
//!     )?;
//!     Ok(())
//! })?;
//! ```

pub mod binding;
pub mod client;
pub mod events;
pub mod realm;
pub mod role;
pub mod types;
pub mod user;

pub use binding::RoleBinding;
pub use client::OpenidClient;
pub use events::RealmEvents;
pub use realm::Realm;
pub use role::Role;
pub use types::{AccessType, Credential};
pub use user::User;
