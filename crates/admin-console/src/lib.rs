//! # Admin Console
//!
//! Headless backoffice for the four flat resources of the admin backend: users,
//! resources, profiles and enterprise profiles.
//!
//! - **[model]**: record types implementing [`RestEntity`](crud_client::RestEntity).
//! - **[clients]**: one typed client per resource, built on [`crud_client::EntityClient`].
//! - **[screen]**: the list/edit/delete flow of a resource as a [`CrudScreen`](screen::CrudScreen).
//! - **[lifecycle]**: [`AdminSystem`](lifecycle::AdminSystem) wiring the clients to HTTP
//!   or to in-memory resource actors.

pub mod clients;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod screen;

pub use error::ConsoleError;
