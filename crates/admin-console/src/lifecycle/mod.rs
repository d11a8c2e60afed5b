//! # System Lifecycle
//!
//! [`AdminSystem`] owns one client per resource and, when running without a backend,
//! the resource actors standing in for it.
//!
//! ## Backends
//!
//! | Constructor | Transport | Tasks |
//! |-------------|-----------|-------|
//! | [`AdminSystem::connect`] | HTTP against the configured API root | none |
//! | [`AdminSystem::in_memory`] | one [`ResourceActor`] per resource | four |
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every actor mailbox
//! 2. **Actors detect closure** - `recv()` returns `None` and the loop ends
//! 3. **Await completion** - a panicked or aborted actor surfaces as [`ConsoleError::Actor`]
//!
//! Screens hold clones of the clients, so drop them before calling
//! [`AdminSystem::shutdown`] or the actors keep waiting for messages.

use crate::clients::{EnterpriseProfileClient, ProfileClient, ResourceClient, UserClient};
use crate::error::ConsoleError;
use crate::screen::{EnterpriseProfileScreen, ProfileScreen, ResourceScreen, UserScreen};
use crud_client::{ApiConfig, ResourceActor, RestClient, RestEntity};
use tokio::task::JoinHandle;
use tracing::{error, info};

const MAILBOX_SIZE: usize = 32;

/// The four resource clients of the backoffice, ready to hand to screens.
pub struct AdminSystem {
    pub user_client: UserClient,
    pub resource_client: ResourceClient,
    pub profile_client: ProfileClient,
    pub enterprise_profile_client: EnterpriseProfileClient,

    /// Actor tasks, empty when talking HTTP.
    handles: Vec<JoinHandle<()>>,
}

impl AdminSystem {
    /// Wires every client to the REST backend described by `config`, sharing one
    /// connection pool.
    pub fn connect(config: &ApiConfig) -> Result<Self, ConsoleError> {
        info!(base_url = %config.base_url, "Connecting to REST backend");
        let http = reqwest::Client::new();
        Ok(Self {
            user_client: UserClient::new(RestClient::http_with(http.clone(), config)?),
            resource_client: ResourceClient::new(RestClient::http_with(http.clone(), config)?),
            profile_client: ProfileClient::new(RestClient::http_with(http.clone(), config)?),
            enterprise_profile_client: EnterpriseProfileClient::new(RestClient::http_with(
                http, config,
            )?),
            handles: Vec::new(),
        })
    }

    /// Spawns one in-memory resource actor per resource. Must run inside a tokio runtime.
    pub fn in_memory() -> Self {
        let (user_client, user_handle) = spawn_actor();
        let (resource_client, resource_handle) = spawn_actor();
        let (profile_client, profile_handle) = spawn_actor();
        let (enterprise_profile_client, enterprise_profile_handle) = spawn_actor();
        info!("In-memory backend started");

        Self {
            user_client: UserClient::new(user_client),
            resource_client: ResourceClient::new(resource_client),
            profile_client: ProfileClient::new(profile_client),
            enterprise_profile_client: EnterpriseProfileClient::new(enterprise_profile_client),
            handles: vec![
                user_handle,
                resource_handle,
                profile_handle,
                enterprise_profile_handle,
            ],
        }
    }

    pub fn user_screen(&self) -> UserScreen {
        UserScreen::new(self.user_client.clone())
    }

    pub fn resource_screen(&self) -> ResourceScreen {
        ResourceScreen::new(self.resource_client.clone())
    }

    pub fn profile_screen(&self) -> ProfileScreen {
        ProfileScreen::new(self.profile_client.clone())
    }

    pub fn enterprise_profile_screen(&self) -> EnterpriseProfileScreen {
        EnterpriseProfileScreen::new(self.enterprise_profile_client.clone())
    }

    /// Drops the clients and waits for every actor to stop.
    pub async fn shutdown(self) -> Result<(), ConsoleError> {
        info!("Shutting down admin system...");

        drop(self.user_client);
        drop(self.resource_client);
        drop(self.profile_client);
        drop(self.enterprise_profile_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(ConsoleError::Actor(e.to_string()));
            }
        }

        info!("Admin system shutdown complete.");
        Ok(())
    }
}

fn spawn_actor<T: RestEntity>() -> (RestClient<T>, JoinHandle<()>) {
    let (actor, transport) = ResourceActor::<T>::new(MAILBOX_SIZE);
    let handle = tokio::spawn(actor.run());
    (RestClient::new(transport), handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn shutdown_reports_a_failed_actor() {
        let mut system = AdminSystem::in_memory();
        let stuck = tokio::spawn(std::future::pending::<()>());
        stuck.abort();
        system.handles.push(stuck);

        let err = system.shutdown().await.unwrap_err();
        assert!(matches!(err, ConsoleError::Actor(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn shutdown_stops_every_actor() {
        let system = AdminSystem::in_memory();
        assert_eq!(system.handles.len(), 4);
        system.shutdown().await.unwrap();
    }
}
