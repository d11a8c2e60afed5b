//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the structured logger for a binary.
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** with spans inline (`find_all{resource="user"}: Fetched records count=3`)
//! - **No module paths**: every client span carries the `resource` field instead
//!
//! ## What Gets Traced
//!
//! - **Client calls**: one span per CRUD operation, failures at `warn`
//! - **Resource actor**: startup, every stored/updated/deleted record, shutdown
//! - **Screens**: notifications raised after each save/delete
//!
//! ```bash
//! RUST_LOG=info cargo run -p admin-console
//!
//! # Show full payloads (passwords are redacted)
//! RUST_LOG=debug cargo run -p admin-console
//!
//! # Only the HTTP client
//! RUST_LOG=crud_client=debug cargo run -p admin-console
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
