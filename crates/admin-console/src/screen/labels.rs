//! Display names used in notification texts.

use crate::model::{EnterpriseProfile, ProfileUser, Resource, User};

/// How a record type is called on screen.
pub trait Labeled {
    const SINGULAR: &'static str;
    const PLURAL: &'static str;
}

impl Labeled for User {
    const SINGULAR: &'static str = "User";
    const PLURAL: &'static str = "Users";
}

impl Labeled for Resource {
    const SINGULAR: &'static str = "Resource";
    const PLURAL: &'static str = "Resources";
}

impl Labeled for ProfileUser {
    const SINGULAR: &'static str = "Profile";
    const PLURAL: &'static str = "Profiles";
}

impl Labeled for EnterpriseProfile {
    const SINGULAR: &'static str = "Enterprise profile";
    const PLURAL: &'static str = "Enterprise profiles";
}
