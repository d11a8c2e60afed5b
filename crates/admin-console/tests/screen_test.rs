//! Screen flows: validation, notifications, dialog state and list invalidation.

use admin_console::clients::{ResourceClient, UserClient};
use admin_console::lifecycle::AdminSystem;
use admin_console::model::{Resource, ResourceField, User, UserField};
use admin_console::screen::{Dialog, FieldError, ResourceScreen, Severity, UserScreen};
use crud_client::mock::MockTransport;
use crud_client::{RequestError, RestEntity};
use std::time::Duration;

fn resource(id: i64, name: &str) -> Resource {
    Resource {
        id,
        ..Resource::new(name, name.to_uppercase())
    }
}

#[tokio::test]
async fn test_create_then_edit_user() {
    let system = AdminSystem::in_memory();
    let mut screen = system.user_screen();
    assert!(screen.refresh().await.unwrap().is_empty());

    screen.open_new();
    assert_eq!(screen.dialog(), Dialog::Form);
    screen.set_field(UserField::Name("Ana".into()));
    screen.set_field(UserField::Login("ana".into()));
    screen.set_field(UserField::Password("x".into()));
    screen.set_field(UserField::Email("a@a.com".into()));

    let created = screen.save().await.expect("save must notify");
    assert_eq!(created.severity, Severity::Info);
    assert_eq!(created.summary, "Success!");
    assert_eq!(created.detail, "User created successfully!");
    assert_eq!(created.life, Duration::from_millis(3000));
    assert_eq!(screen.dialog(), Dialog::Closed);
    assert!(screen.form().is_new());
    assert!(screen.needs_refresh());

    let ana = screen.refresh().await.unwrap()[0].clone();
    assert!(ana.id > 0);
    assert_eq!(ana.login, "ana");

    screen.edit(&ana);
    screen.set_field(UserField::Email("ana@corp.com".into()));
    let updated = screen.save().await.unwrap();
    assert_eq!(updated.severity, Severity::Success);
    assert_eq!(updated.detail, "User updated successfully!");

    let users = screen.refresh().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "ana@corp.com");

    drop(screen);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_incomplete_form_sends_nothing() {
    let mock = MockTransport::<User>::new();
    let mut screen = UserScreen::new(UserClient::new(mock.client()));

    screen.open_new();
    assert!(screen.field_errors().is_empty(), "no errors before the first save");
    screen.set_field(UserField::Name("Ana".into()));
    screen.set_field(UserField::Email("a@a.com".into()));

    assert_eq!(screen.save().await, None);
    assert!(screen.submitted());
    assert_eq!(screen.dialog(), Dialog::Form);
    assert_eq!(
        screen.field_errors(),
        vec![
            FieldError {
                field: "login".into(),
                message: "Login is required!".into(),
            },
            FieldError {
                field: "password".into(),
                message: "Password is required!".into(),
            },
        ]
    );

    screen.hide_dialog();
    assert!(!screen.submitted());
    assert!(screen.field_errors().is_empty());

    // no expectations were registered, so any request would have panicked
    mock.verify();
}

#[tokio::test]
async fn test_backend_failure_becomes_error_notification() {
    let mock = MockTransport::<Resource>::new();
    mock.expect_save()
        .return_err(RequestError::status(500, "Database offline"));
    mock.expect_update(4)
        .return_err(RequestError::Transport("connection refused".into()));
    let mut screen = ResourceScreen::new(ResourceClient::new(mock.client()));

    screen.open_new();
    screen.set_field(ResourceField::Name("Reports".into()));
    screen.set_field(ResourceField::ResourceKey("REPORTS".into()));
    let failed = screen.save().await.unwrap();
    assert!(failed.is_error());
    assert_eq!(failed.summary, "Error!");
    assert_eq!(failed.detail, "Failed to save! Database offline");
    // the form stays open with what was typed
    assert_eq!(screen.dialog(), Dialog::Form);
    assert_eq!(screen.form().name, "Reports");

    screen.edit(&resource(4, "billing"));
    let failed = screen.save().await.unwrap();
    assert_eq!(
        failed.detail,
        "Failed to update! Request failed: connection refused"
    );

    mock.verify();
}

#[tokio::test]
async fn test_refresh_only_fetches_when_invalidated() {
    let mock = MockTransport::<Resource>::new();
    mock.expect_find_all().return_ok(vec![resource(1, "reports")]);
    mock.expect_delete(1).return_ok(());
    mock.expect_find_all().return_ok(vec![]);
    let mut screen = ResourceScreen::new(ResourceClient::new(mock.client()));

    assert!(screen.records().is_none());
    assert_eq!(screen.refresh().await.unwrap().len(), 1);
    // served from the snapshot
    assert_eq!(screen.refresh().await.unwrap().len(), 1);

    screen.confirm_delete(&resource(1, "reports"));
    assert_eq!(screen.dialog(), Dialog::ConfirmDelete);
    let deleted = screen.delete().await.unwrap();
    assert_eq!(deleted.detail, "Resource deleted!");
    assert_eq!(deleted.severity, Severity::Success);
    assert!(screen.records().is_none());

    assert!(screen.refresh().await.unwrap().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_failed_refresh_retries_next_time() {
    let mock = MockTransport::<Resource>::new();
    mock.expect_find_all()
        .return_err(RequestError::Transport("timed out".into()));
    mock.expect_find_all().return_ok(vec![resource(2, "audit")]);
    let mut screen = ResourceScreen::new(ResourceClient::new(mock.client()));

    assert!(screen.refresh().await.is_err());
    assert!(screen.needs_refresh());
    assert_eq!(screen.refresh().await.unwrap()[0].name, "audit");

    mock.verify();
}

#[tokio::test]
async fn test_deleting_missing_resource_keeps_count() {
    let system = AdminSystem::in_memory();
    let mut screen = system.resource_screen();
    for name in ["reports", "billing"] {
        screen.open_new();
        screen.set_field(ResourceField::Name(name.into()));
        screen.set_field(ResourceField::ResourceKey(name.to_uppercase()));
        screen.save().await.unwrap();
    }
    assert_eq!(screen.refresh().await.unwrap().len(), 2);

    screen.confirm_delete(&resource(999, "ghost"));
    let failed = screen.delete().await.unwrap();
    assert!(failed.is_error());
    assert_eq!(
        failed.detail,
        "Failed to delete resource! resource 999 not found"
    );
    assert_eq!(screen.dialog(), Dialog::ConfirmDelete);
    assert_eq!(screen.refresh().await.unwrap().len(), 2);

    drop(screen);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_selected_removes_every_selected_record() {
    let system = AdminSystem::in_memory();
    let mut screen = system.resource_screen();

    screen.confirm_delete_selected();
    assert_eq!(screen.dialog(), Dialog::Closed, "nothing selected");

    for name in ["reports", "billing", "audit", "export"] {
        screen.open_new();
        screen.set_field(ResourceField::Name(name.into()));
        screen.set_field(ResourceField::ResourceKey(name.to_uppercase()));
        screen.save().await.unwrap();
    }
    let all = screen.refresh().await.unwrap().to_vec();

    screen.select(all[..3].to_vec());
    screen.confirm_delete_selected();
    assert_eq!(screen.dialog(), Dialog::ConfirmDeleteSelected);

    let done = screen.delete_selected().await.unwrap();
    assert_eq!(done.severity, Severity::Success);
    assert_eq!(done.detail, "Resources deleted successfully!");
    assert!(screen.selection().is_empty());
    assert_eq!(screen.dialog(), Dialog::Closed);

    let left = screen.refresh().await.unwrap();
    assert_eq!(left, &all[3..]);

    drop(screen);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_partial_batch_failure_reports_error_and_invalidates() {
    let mock = MockTransport::<Resource>::new();
    mock.expect_find_all()
        .return_ok(vec![resource(1, "a"), resource(2, "b"), resource(3, "c")]);
    mock.expect_delete(1).return_ok(());
    mock.expect_delete(2)
        .return_err(RequestError::status(409, "Resource in use"));
    mock.expect_delete(3).return_ok(());
    mock.expect_find_all().return_ok(vec![resource(2, "b")]);
    let mut screen = ResourceScreen::new(ResourceClient::new(mock.client()));

    let all = screen.refresh().await.unwrap().to_vec();
    screen.select(all);
    screen.confirm_delete_selected();

    let failed = screen.delete_selected().await.unwrap();
    assert!(failed.is_error());
    assert_eq!(failed.detail, "Failed to delete resources! Resource in use");
    assert_eq!(screen.selection().len(), 3);
    assert_eq!(screen.dialog(), Dialog::ConfirmDeleteSelected);

    // deletes that went through are visible after the refetch
    assert_eq!(screen.refresh().await.unwrap(), &[resource(2, "b")]);
    mock.verify();
}

#[tokio::test]
async fn test_deleting_one_record_drops_it_from_selection() {
    let system = AdminSystem::in_memory();
    let mut screen = system.resource_screen();
    for name in ["reports", "billing"] {
        screen.open_new();
        screen.set_field(ResourceField::Name(name.into()));
        screen.set_field(ResourceField::ResourceKey(name.to_uppercase()));
        screen.save().await.unwrap();
    }
    let all = screen.refresh().await.unwrap().to_vec();
    screen.select(all.clone());

    screen.confirm_delete(&all[0]);
    screen.delete().await.unwrap();

    assert_eq!(screen.selection(), &all[1..]);

    drop(screen);
    system.shutdown().await.unwrap();
}
