//! Per-entity clients: each binds the generic [`RestClient`](crud_client::RestClient)
//! to one record type and maps failures into [`ConsoleError`](crate::ConsoleError).

pub mod enterprise_profile_client;
pub mod profile_client;
pub mod resource_client;
pub mod user_client;

pub use enterprise_profile_client::*;
pub use profile_client::*;
pub use resource_client::*;
pub use user_client::*;
