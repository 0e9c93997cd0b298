//! The demo realm fixture
//!
//! Declares a throwaway identity-realm configuration for integration
//! testing: one realm, one bearer-only OpenID client, one user, one
//! client-scoped role, and the binding assigning that role to the user.
//! Everything here is literal test data; none of the credentials are
//! production secrets.

use realmkit::{Credential, OpenidClient, Realm, RealmEvents, Role, RoleBinding, User};
use stategraph::{BuildContext, Result};

/// Toggles for the optional parts of the fixture
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Also declare event logging on the realm
    pub event_logging: bool,
}

/// Declare the default fixture
pub fn build(ctx: &mut BuildContext) -> Result<()> {
    build_with(ctx, Options::default())
}

/// Declare the fixture with explicit options
///
/// Declarations are emitted in strict dependency order: the realm first,
/// then everything referencing only the realm, then the role (which needs
/// the client's assigned identifier), then the binding.
pub fn build_with(ctx: &mut BuildContext, opts: Options) -> Result<()> {
    let realm = ctx.declare(
        Realm {
            display_name: Some("demo".to_string()),
            display_name_html: Some("<b>demo</b>".to_string()),
            access_code_lifespan: Some("1h".to_string()),
            access_code_lifespan_login: Some("2h".to_string()),
            login_with_email_allowed: true,
            registration_email_as_username: true,
            login_theme: Some("keycloak".to_string()),
            account_theme: Some("keycloak.v2".to_string()),
            admin_theme: Some("keycloak.v2".to_string()),
            email_theme: Some("keycloak".to_string()),
            ..Realm::new("demorealm", "demo")
        },
        &[],
    )?;

    if opts.event_logging {
        // No value flows back from the events node, but the edge to the
        // realm is still stated so the engine sequences it correctly.
        ctx.declare(
            RealmEvents {
                events_listeners: vec!["jboss-logging".to_string()],
                admin_events_enabled: true,
                ..RealmEvents::new("demorealm-events", realm.id())
            },
            &[&realm],
        )?;
    }

    let client = ctx.declare(
        OpenidClient {
            display_name: Some("pam_local".to_string()),
            client_authenticator: Some("client-secret".to_string()),
            // Test-only credentials; never reuse them outside this fixture.
            ..OpenidClient::bearer_only("pam-client", realm.id(), "pam_local", "verybadsecret")
        },
        &[&realm],
    )?;

    let user = ctx.declare(
        User {
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            email: Some("john@t.co".to_string()),
            email_verified: true,
            initial_password: Some(Credential::permanent("pass")),
            ..User::new("demouser", realm.id(), "demouser")
        },
        &[&realm],
    )?;

    let role = ctx.declare(
        Role {
            description: Some("Grants access to the pam_local demo client".to_string()),
            ..Role::client_level("demo-role", realm.id(), client.id())
        },
        &[&realm, &client],
    )?;

    ctx.declare(
        RoleBinding::new(
            "demouser-roles",
            realm.id(),
            user.id(),
            vec![role.id().to_string()],
        ),
        &[&user, &role],
    )?;

    Ok(())
}
