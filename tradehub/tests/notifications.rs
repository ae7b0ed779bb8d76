mod common;

use common::{client, FakePanel, FakeShell};
use tradehub::api::Method;
use tradehub::controllers::notifications::EMPTY_PLACEHOLDER;
use tradehub::controllers::{Badge, NotificationPanel, PanelBody, PanelState, ToastKind};
use tradehub::Config;

fn configured() -> Config {
    Config {
        notifications_url: Some("/api/notifications/".into()),
        unread_count_url: Some("/api/notifications/unread-count/".into()),
        ..Default::default()
    }
}

const TWO_UNREAD: &str = r#"{
    "notifications": [
        {"id": 1, "title": "New follower", "message": "@bob followed you",
         "link": "/profile/bob/", "type": "FOLLOW", "created_at": "2024-03-01 10:00"},
        {"id": 2, "title": "Boost", "message": "Your idea was boosted",
         "link": "", "type": "BOOST", "created_at": "2024-03-01 11:00"}
    ],
    "unread_count": 2
}"#;

#[tokio::test]
async fn opening_renders_rows_and_authoritative_count() {
    let api = client(configured());
    api.transport().reply(200, TWO_UNREAD);
    let panel = NotificationPanel::new(FakePanel::default(), api.clone(), FakeShell::answering(true));

    panel.toggle().await;

    assert_eq!(panel.state(), PanelState::Loaded);
    assert!(panel.view().visible.get());
    let renders = panel.view().renders.borrow();
    match renders.as_slice() {
        [PanelBody::Rows(rows)] => {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].id, "1");
        }
        other => panic!("unexpected renders {other:?}"),
    }
    assert_eq!(panel.view().badge.get(), Some(Badge::Count(2)));
    // The listing carried the count, so the counter endpoint was not hit.
    assert_eq!(api.transport().request_count(), 1);
    let request = api.transport().request(0);
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, "/api/notifications/");
    assert_eq!(request.header("Accept"), Some("application/json"));
    assert_eq!(request.header("X-CSRFToken"), None);
}

#[tokio::test]
async fn listing_without_count_refreshes_badge_separately() {
    let api = client(configured());
    api.transport()
        .reply(200, r#"{"notifications": []}"#)
        .reply(200, r#"{"unread_count": 3}"#);
    let panel = NotificationPanel::new(FakePanel::default(), api.clone(), FakeShell::answering(true));

    panel.open().await;

    assert_eq!(api.transport().request_count(), 2);
    assert_eq!(api.transport().request(1).url, "/api/notifications/unread-count/");
    assert_eq!(panel.unread(), 3);
    assert_eq!(panel.view().badge.get(), Some(Badge::Count(3)));
}

#[tokio::test]
async fn empty_listing_shows_only_the_placeholder() {
    let api = client(configured());
    api.transport()
        .reply(200, r#"{"notifications": [], "unread_count": 0}"#);
    let panel = NotificationPanel::new(FakePanel::default(), api, FakeShell::answering(true));

    panel.open().await;

    assert_eq!(panel.view().renders.borrow().as_slice(), &[PanelBody::Empty]);
    assert_eq!(panel.view().badge.get(), Some(Badge::Hidden));
    assert_eq!(EMPTY_PLACEHOLDER, "No unread notifications");
}

#[tokio::test]
async fn failed_listing_stays_loading_without_toast() {
    let api = client(configured());
    api.transport().reply(500, "Internal Server Error");
    let shell = FakeShell::answering(true);
    let panel = NotificationPanel::new(FakePanel::default(), api, shell.clone());

    panel.open().await;

    assert_eq!(panel.state(), PanelState::Loading);
    assert!(panel.view().renders.borrow().is_empty());
    assert_eq!(panel.view().badge.get(), None);
    assert!(shell.toasts().is_empty());
}

#[tokio::test]
async fn missing_listing_endpoint_is_a_no_op() {
    let api = client(Config::default());
    let panel = NotificationPanel::new(FakePanel::default(), api.clone(), FakeShell::answering(true));

    panel.open().await;

    assert_eq!(api.transport().request_count(), 0);
    assert!(panel.view().visible.get());
    assert!(panel.view().renders.borrow().is_empty());
}

#[tokio::test]
async fn bell_and_outside_clicks_close_the_panel() {
    let api = client(configured());
    api.transport().reply(200, TWO_UNREAD);
    let panel = NotificationPanel::new(FakePanel::default(), api.clone(), FakeShell::answering(true));

    panel.toggle().await;
    panel.toggle().await;
    assert_eq!(panel.state(), PanelState::Closed);
    assert!(!panel.view().visible.get());

    api.transport().reply(200, TWO_UNREAD);
    panel.toggle().await;
    assert_eq!(panel.state(), PanelState::Loaded);
    panel.close();
    assert_eq!(panel.state(), PanelState::Closed);
    // Every open fetched afresh.
    assert_eq!(api.transport().request_count(), 2);
}

#[tokio::test]
async fn mark_read_decrements_and_floors_at_zero() {
    let api = client(configured());
    api.transport()
        .reply(200, r#"{"status": "ok"}"#)
        .reply(200, r#"{"status": "ok"}"#);
    let panel = NotificationPanel::new(FakePanel::default(), api.clone(), FakeShell::answering(true));
    panel.set_unread(1);

    panel.mark_read("4").await;
    assert_eq!(panel.unread(), 0);
    assert_eq!(panel.view().badge.get(), Some(Badge::Hidden));

    panel.mark_read("5").await;
    assert_eq!(panel.unread(), 0);
    assert_eq!(panel.view().badge.get(), Some(Badge::Hidden));
    assert_eq!(panel.view().marked.borrow().as_slice(), &["4", "5"]);

    let request = api.transport().request(0);
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "/api/notifications/mark-read/4/");
    assert_eq!(request.header("X-CSRFToken"), Some("token"));
}

#[tokio::test]
async fn mark_read_uses_configured_base() {
    let api = client(Config {
        mark_read_url_base: Some("/n/0/read/".into()),
        ..configured()
    });
    api.transport().reply(200, r#"{"status": "ok"}"#);
    let panel = NotificationPanel::new(FakePanel::default(), api.clone(), FakeShell::answering(true));
    panel.set_unread(5);

    panel.mark_read("77").await;

    assert_eq!(api.transport().request(0).url, "/n/77/read/");
    assert_eq!(panel.view().badge.get(), Some(Badge::Count(4)));
}

#[tokio::test]
async fn rejected_mark_read_toasts_and_keeps_state() {
    let api = client(configured());
    api.transport()
        .reply(200, r#"{"status": "error", "message": "Invalid request method"}"#);
    let shell = FakeShell::answering(true);
    let panel = NotificationPanel::new(FakePanel::default(), api, shell.clone());
    panel.set_unread(3);

    panel.mark_read("9").await;

    assert_eq!(panel.unread(), 3);
    assert!(panel.view().marked.borrow().is_empty());
    assert_eq!(
        shell.toasts(),
        vec![(
            "Could not mark the notification as read".to_string(),
            ToastKind::Error
        )]
    );
}

#[tokio::test]
async fn network_failure_on_mark_read_toasts() {
    let api = client(configured());
    api.transport().fail();
    let shell = FakeShell::answering(true);
    let panel = NotificationPanel::new(FakePanel::default(), api, shell.clone());
    panel.set_unread(2);

    panel.mark_read("9").await;

    assert_eq!(panel.unread(), 2);
    assert_eq!(shell.toasts().len(), 1);
    assert_eq!(shell.toasts()[0].1, ToastKind::Error);
}

#[tokio::test]
async fn passive_count_refresh_fails_silently() {
    let api = client(configured());
    api.transport().reply(503, "");
    let shell = FakeShell::answering(true);
    let panel = NotificationPanel::new(FakePanel::default(), api, shell.clone());
    panel.set_unread(2);

    panel.sync_unread().await;

    assert_eq!(panel.unread(), 2);
    assert_eq!(panel.view().badge.get(), Some(Badge::Count(2)));
    assert!(shell.toasts().is_empty());
}

#[tokio::test]
async fn count_defaults_to_zero_without_endpoint() {
    let api = client(Config::default());
    let panel = NotificationPanel::new(FakePanel::default(), api.clone(), FakeShell::answering(true));
    panel.set_unread(4);

    panel.sync_unread().await;

    assert_eq!(api.transport().request_count(), 0);
    assert_eq!(panel.view().badge.get(), Some(Badge::Hidden));
}

#[tokio::test]
async fn negative_server_count_is_never_rendered() {
    let api = client(configured());
    api.transport()
        .reply(200, r#"{"notifications": [], "unread_count": -2}"#);
    let panel = NotificationPanel::new(FakePanel::default(), api, FakeShell::answering(true));

    panel.open().await;

    assert_eq!(panel.unread(), 0);
    assert_eq!(panel.view().badge.get(), Some(Badge::Hidden));
}
