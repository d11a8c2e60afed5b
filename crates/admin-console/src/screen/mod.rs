//! # Headless CRUD Screens
//!
//! One [`CrudScreen`] drives the list/edit/delete flow of one resource, without any
//! rendering. A front end only reads its state and forwards operator actions.
//!
//! ## The flow
//!
//! ```text
//! refresh ──► list ──► open_new / edit ──► set_field* ──► save ──┐
//!               ▲                                                │
//!               │        confirm_delete ──► delete ──────────────┤
//!               │  select ──► confirm_delete_selected ──►        │
//!               │                       delete_selected ─────────┤
//!               └──────────── snapshot invalidated ◄─────────────┘
//! ```
//!
//! Every mutation returns a [`Notification`] for the operator and invalidates the
//! [`ListSnapshot`]; the next [`CrudScreen::refresh`] fetches the full list again.
//! Failures never escape as errors or panics: they are logged and reported through
//! an error notification.

pub mod labels;
pub mod notification;
pub mod snapshot;

pub use labels::Labeled;
pub use notification::{Notification, Severity, NOTIFICATION_LIFE};
pub use snapshot::ListSnapshot;

use crate::clients::{EnterpriseProfileClient, ProfileClient, ResourceClient, UserClient};
use crate::error::ConsoleError;
use crate::model::{EnterpriseProfile, ProfileUser, Resource, User};
use crud_client::{EntityClient, Persisted, RecordId, RestEntity};
use tracing::{debug, instrument, warn};

pub type UserScreen = CrudScreen<User, UserClient>;
pub type ResourceScreen = CrudScreen<Resource, ResourceClient>;
pub type ProfileScreen = CrudScreen<ProfileUser, ProfileClient>;
pub type EnterpriseProfileScreen = CrudScreen<EnterpriseProfile, EnterpriseProfileClient>;

/// Which modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    Closed,
    /// Create/edit form for the current record.
    Form,
    /// "Delete this record?" for the current record.
    ConfirmDelete,
    /// "Delete the selected records?"
    ConfirmDeleteSelected,
}

/// A required field left empty in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// State and operations of one resource screen.
pub struct CrudScreen<T, C> {
    client: C,
    records: ListSnapshot<T>,
    form: T,
    dialog: Dialog,
    submitted: bool,
    selection: Vec<T>,
}

impl<T, C> CrudScreen<T, C>
where
    T: RestEntity + Labeled,
    C: EntityClient<T, Error = ConsoleError>,
{
    pub fn new(client: C) -> Self {
        Self {
            client,
            records: ListSnapshot::default(),
            form: T::default(),
            dialog: Dialog::Closed,
            submitted: false,
            selection: Vec::new(),
        }
    }

    // ---- state ----

    pub fn records(&self) -> Option<&[T]> {
        self.records.records()
    }

    pub fn needs_refresh(&self) -> bool {
        self.records.is_stale()
    }

    pub fn form(&self) -> &T {
        &self.form
    }

    pub fn dialog(&self) -> Dialog {
        self.dialog
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn selection(&self) -> &[T] {
        &self.selection
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Empty-field errors of the form, shown only once the operator tried to save.
    pub fn field_errors(&self) -> Vec<FieldError> {
        if !self.submitted {
            return Vec::new();
        }
        let Err(errors) = self.form.validate() else {
            return Vec::new();
        };
        let mut found: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| FieldError {
                    field: field.clone(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is required!")),
                })
            })
            .collect();
        found.sort_by(|a, b| a.field.cmp(&b.field));
        found
    }

    // ---- list ----

    /// Fetches the list if the snapshot was invalidated, otherwise returns the cached one.
    ///
    /// On failure the snapshot stays unset so the next call tries again.
    #[instrument(skip(self), fields(resource = T::RESOURCE))]
    pub async fn refresh(&mut self) -> Result<&[T], ConsoleError> {
        if self.records.is_stale() {
            match self.client.find_all().await {
                Ok(records) => {
                    debug!(count = records.len(), "Loaded list");
                    self.records.load(records);
                }
                Err(e) => {
                    warn!(error = %e, "Could not load list");
                    return Err(e);
                }
            }
        }
        Ok(self.records.records().unwrap_or_default())
    }

    // ---- form ----

    pub fn open_new(&mut self) {
        self.form = T::default();
        self.submitted = false;
        self.dialog = Dialog::Form;
    }

    pub fn edit(&mut self, record: &T) {
        self.form = record.clone();
        self.dialog = Dialog::Form;
    }

    pub fn set_field(&mut self, field: T::Field) {
        self.form.apply(field);
    }

    pub fn hide_dialog(&mut self) {
        self.submitted = false;
        self.dialog = Dialog::Closed;
    }

    /// Validates the form, then creates or updates the record depending on its id.
    ///
    /// Returns `None` when required fields are empty: nothing is sent and
    /// [`CrudScreen::field_errors`] explains what is missing.
    #[instrument(skip(self), fields(resource = T::RESOURCE))]
    pub async fn save(&mut self) -> Option<Notification> {
        self.submitted = true;
        if self.form.validate().is_err() {
            debug!("Form incomplete, nothing sent");
            return None;
        }

        let notification = match self.client.persist(&self.form).await {
            Ok(Persisted::Created(stored)) => {
                debug!(id = stored.id(), "Created");
                Notification::info(format!("{} created successfully!", T::SINGULAR))
            }
            Ok(Persisted::Updated(id)) => {
                debug!(id, "Updated");
                Notification::success(format!("{} updated successfully!", T::SINGULAR))
            }
            Err(e) => {
                let action = if self.form.is_new() { "save" } else { "update" };
                warn!(error = %e, action, "Save failed");
                return Some(Notification::error(format!(
                    "Failed to {action}! {}",
                    e.user_message()
                )));
            }
        };

        self.dialog = Dialog::Closed;
        self.form = T::default();
        self.submitted = false;
        self.records.invalidate();
        Some(notification)
    }

    // ---- delete ----

    pub fn confirm_delete(&mut self, record: &T) {
        self.form = record.clone();
        self.dialog = Dialog::ConfirmDelete;
    }

    /// Deletes the record picked with [`CrudScreen::confirm_delete`].
    #[instrument(skip(self), fields(resource = T::RESOURCE))]
    pub async fn delete(&mut self) -> Option<Notification> {
        if self.form.is_new() {
            return None;
        }
        let id = self.form.id();
        match self.client.delete(id).await {
            Ok(()) => {
                self.dialog = Dialog::Closed;
                self.form = T::default();
                self.selection.retain(|r| r.id() != id);
                self.records.invalidate();
                Some(Notification::success(format!("{} deleted!", T::SINGULAR)))
            }
            Err(e) => {
                warn!(id, error = %e, "Delete failed");
                Some(Notification::error(format!(
                    "Failed to delete {}! {}",
                    T::SINGULAR.to_lowercase(),
                    e.user_message()
                )))
            }
        }
    }

    /// Replaces the multi-selection.
    pub fn select(&mut self, records: Vec<T>) {
        self.selection = records;
    }

    pub fn can_delete_selected(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn confirm_delete_selected(&mut self) {
        if self.can_delete_selected() {
            self.dialog = Dialog::ConfirmDeleteSelected;
        }
    }

    /// Deletes every selected record and waits for all deletes to settle.
    ///
    /// If any delete fails the whole batch is reported as failed, but the records
    /// already deleted stay deleted, so the list is invalidated either way.
    #[instrument(skip(self), fields(resource = T::RESOURCE, selected = self.selection.len()))]
    pub async fn delete_selected(&mut self) -> Option<Notification> {
        if self.selection.is_empty() {
            return None;
        }
        let ids: Vec<RecordId> = self
            .selection
            .iter()
            .filter(|r| !r.is_new())
            .map(RestEntity::id)
            .collect();

        let result = self.client.delete_batch(&ids).await;
        self.records.invalidate();

        match result {
            Ok(deleted) => {
                debug!(deleted, "Selection deleted");
                self.selection.clear();
                self.dialog = Dialog::Closed;
                Some(Notification::success(format!(
                    "{} deleted successfully!",
                    T::PLURAL
                )))
            }
            Err(e) => {
                warn!(error = %e, "Batch delete failed");
                Some(Notification::error(format!(
                    "Failed to delete {}! {}",
                    T::PLURAL.to_lowercase(),
                    e.user_message()
                )))
            }
        }
    }
}
