use admin_console::lifecycle::AdminSystem;
use admin_console::model::{
    EnterpriseProfile, ProfileUser, ProfileUserField, Resource, ResourceField, User, UserField,
};
use admin_console::screen::Notification;
use admin_console::ConsoleError;
use crud_client::tracing::setup_tracing;
use crud_client::{ApiConfig, RestEntity};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), ConsoleError> {
    setup_tracing();

    let config = ApiConfig::from_env()?;
    let system = if std::env::var_os("ADMIN_API_URL").is_some() {
        AdminSystem::connect(&config)?
    } else {
        info!("ADMIN_API_URL not set, using the in-memory backend");
        AdminSystem::in_memory()
    };

    run_session(&system)
        .instrument(tracing::info_span!("session"))
        .await;

    system.shutdown().await?;
    info!("Session finished");
    Ok(())
}

/// A short scripted operator session touching every screen.
async fn run_session(system: &AdminSystem) {
    let mut users = system.user_screen();
    users.open_new();
    users.set_field(UserField::Name("Ana".into()));
    users.set_field(UserField::Login("ana".into()));
    report(users.save().await);
    for missing in users.field_errors() {
        info!(field = %missing.field, message = %missing.message, "Form incomplete");
    }
    users.set_field(UserField::Password("x".into()));
    users.set_field(UserField::Email("a@a.com".into()));
    report(users.save().await);

    let mut resources = system.resource_screen();
    for (name, key) in [("Reports", "REPORTS"), ("Billing", "BILLING"), ("Audit", "AUDIT")] {
        resources.open_new();
        resources.set_field(ResourceField::Name(name.into()));
        resources.set_field(ResourceField::ResourceKey(key.into()));
        report(resources.save().await);
    }
    let listed = match resources.refresh().await {
        Ok(records) => records.to_vec(),
        Err(e) => {
            error!(error = %e, "Could not list resources");
            return;
        }
    };
    info!(count = listed.len(), "Resources listed");

    if let Some(first) = listed.first() {
        resources.edit(first);
        resources.set_field(ResourceField::Name(format!("{} (archived)", first.name)));
        report(resources.save().await);
    }

    resources.confirm_delete(&Resource {
        id: 999,
        ..Resource::default()
    });
    report(resources.delete().await);

    resources.select(listed.into_iter().skip(1).collect());
    resources.confirm_delete_selected();
    report(resources.delete_selected().await);

    let mut profiles = system.profile_screen();
    profiles.open_new();
    profiles.set_field(ProfileUserField::Description("Administrators".into()));
    report(profiles.save().await);

    let mut enterprise_profiles = system.enterprise_profile_screen();
    enterprise_profiles.open_new();
    report(enterprise_profiles.save().await);
    enterprise_profiles.hide_dialog();

    match system.user_client.find_by_login("ana").await {
        Ok(Some(user)) => info!(?user, "Found user by login"),
        Ok(None) => info!("No user with login ana"),
        Err(e) => error!(error = %e, "User lookup failed"),
    }

    let counts = [
        (User::RESOURCE, users.refresh().await.map(<[_]>::len)),
        (Resource::RESOURCE, resources.refresh().await.map(<[_]>::len)),
        (ProfileUser::RESOURCE, profiles.refresh().await.map(<[_]>::len)),
        (
            EnterpriseProfile::RESOURCE,
            enterprise_profiles.refresh().await.map(<[_]>::len),
        ),
    ];
    for (resource, count) in counts {
        match count {
            Ok(count) => info!(resource, count, "Final count"),
            Err(e) => error!(resource, error = %e, "Could not count"),
        }
    }
}

// Notifications log themselves when raised.
fn report(notification: Option<Notification>) {
    if notification.is_none() {
        info!("Nothing sent");
    }
}
