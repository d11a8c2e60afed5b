//! Flat record types served by the backend, one module per resource.

pub mod enterprise_profile;
pub mod profile_user;
pub mod resource;
pub mod user;

pub use enterprise_profile::*;
pub use profile_user::*;
pub use resource::*;
pub use user::*;
