//! # API Configuration
//!
//! Where the REST backend lives and how its `findById` route is spelled.
//!
//! ## Environment Variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `ADMIN_API_URL` | `http://localhost:8080/api/` | API root, every resource hangs off it |
//! | `ADMIN_FIND_BY_ID_ROUTE` | `segment` | `segment` → `/findById/{id}`, `concatenated` → `/findById{id}` |
//!
//! A `.env` file in the working directory is loaded first (via `dotenvy`), real
//! environment variables win over it.

use crate::entity::RecordId;
use crate::error::ConfigError;
use std::str::FromStr;
use tracing::debug;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/";

const BASE_URL_VAR: &str = "ADMIN_API_URL";
const FIND_BY_ID_ROUTE_VAR: &str = "ADMIN_FIND_BY_ID_ROUTE";

/// Spelling of the single-record lookup path.
///
/// Older backends expose the id glued to the verb (`/findById42`), newer ones use a
/// separate segment like `update` and `delete` do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FindByIdRoute {
    #[default]
    Segment,
    Concatenated,
}

impl FindByIdRoute {
    pub fn path(self, id: RecordId) -> String {
        match self {
            Self::Segment => format!("findById/{id}"),
            Self::Concatenated => format!("findById{id}"),
        }
    }
}

impl FromStr for FindByIdRoute {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "segment" => Ok(Self::Segment),
            "concatenated" => Ok(Self::Concatenated),
            other => Err(ConfigError::UnknownRoute(other.to_string())),
        }
    }
}

/// Connection settings shared by every resource client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// API root. Always ends with `/` so resource paths join under it.
    pub base_url: Url,
    pub find_by_id_route: FindByIdRoute,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            find_by_id_route: FindByIdRoute::default(),
        }
    }
}

impl ApiConfig {
    /// Builds a config for the given API root.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            find_by_id_route: FindByIdRoute::default(),
        })
    }

    pub fn with_find_by_id_route(mut self, route: FindByIdRoute) -> Self {
        self.find_by_id_route = route;
        self
    }

    /// Reads the config from the environment (and `.env`), falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let find_by_id_route = match std::env::var(FIND_BY_ID_ROUTE_VAR) {
            Ok(raw) => raw.parse()?,
            Err(_) => FindByIdRoute::default(),
        };

        let config = Self::new(&base_url)?.with_find_by_id_route(find_by_id_route);
        debug!(base_url = %config.base_url, route = ?config.find_by_id_route, "Loaded API config");
        Ok(config)
    }

    /// Base endpoint of one resource, without a trailing slash.
    pub fn endpoint(&self, resource: &str) -> Result<String, ConfigError> {
        let url = self
            .base_url
            .join(resource)
            .map_err(|e| ConfigError::InvalidUrl {
                url: format!("{}{resource}", self.base_url),
                reason: e.to_string(),
            })?;
        Ok(url.as_str().trim_end_matches('/').to_string())
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&normalized).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: "cannot be a base URL".into(),
        });
    }
    Ok(url)
}
