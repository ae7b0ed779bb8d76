use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, error, info, warn};

use crate::api::{ApiClient, Transport};
use crate::error::ApiError;
use crate::payloads::Notification;
use crate::utils::clamp_count;

use super::{Shell, ToastKind};

pub const EMPTY_PLACEHOLDER: &str = "No unread notifications";
pub const MARK_READ_LABEL: &str = "Mark as read";
pub const OPEN_LABEL: &str = "Open";

const MARK_READ_REJECTED: &str = "Could not mark the notification as read";
const MARK_READ_NETWORK: &str = "Network error while marking the notification";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Loading,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Hidden,
    Count(u32),
}

impl Badge {
    pub fn for_count(count: u32) -> Self {
        if count == 0 {
            Badge::Hidden
        } else {
            Badge::Count(count)
        }
    }

    /// Raw integer, never abbreviated.
    pub fn text(&self) -> Option<String> {
        match self {
            Badge::Hidden => None,
            Badge::Count(count) => Some(count.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    /// Only the placeholder row, no list container.
    Empty,
    Rows(Vec<Notification>),
}

impl From<Vec<Notification>> for PanelBody {
    fn from(notifications: Vec<Notification>) -> Self {
        if notifications.is_empty() {
            PanelBody::Empty
        } else {
            PanelBody::Rows(notifications)
        }
    }
}

pub fn row_class(notification: &Notification) -> &'static str {
    if notification.is_read {
        "notification-item"
    } else {
        "notification-item unread"
    }
}

/// DOM side of the dropdown: panel visibility, its body and the bell badge.
pub trait PanelView {
    fn show(&self);
    fn hide(&self);
    /// Replaces the whole body; previous rows are discarded.
    fn render(&self, body: &PanelBody);
    /// Drops the unread marker and the mark-read button of one row.
    fn mark_row_read(&self, id: &str);
    fn set_badge(&self, badge: Badge);
}

pub struct NotificationPanel<V, T, S> {
    view: V,
    api: Rc<ApiClient<T>>,
    shell: S,
    state: Cell<PanelState>,
    unread: Cell<u32>,
}

impl<V: PanelView, T: Transport, S: Shell> NotificationPanel<V, T, S> {
    pub fn new(view: V, api: Rc<ApiClient<T>>, shell: S) -> Self {
        Self {
            view,
            api,
            shell,
            state: Cell::new(PanelState::Closed),
            unread: Cell::new(0),
        }
    }

    pub fn state(&self) -> PanelState {
        self.state.get()
    }

    pub fn unread(&self) -> u32 {
        self.unread.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Bell click.
    pub async fn toggle(&self) {
        if self.state.get() == PanelState::Closed {
            self.open().await
        } else {
            self.close()
        }
    }

    pub async fn open(&self) {
        self.state.set(PanelState::Loading);
        self.view.show();
        self.refresh().await;
    }

    /// Hides the panel. An in-flight listing is not cancelled and may still
    /// render into the hidden panel.
    pub fn close(&self) {
        self.state.set(PanelState::Closed);
        self.view.hide();
    }

    pub async fn refresh(&self) {
        let list = match self.api.notifications().await {
            Ok(list) => list,
            Err(ApiError::MissingEndpoint(name)) => {
                debug!("Skipping notification refresh, no {name} endpoint");
                return;
            }
            Err(err) => {
                warn!("Could not load notifications: {err}");
                return;
            }
        };
        info!("Loaded {} notifications", list.notifications.len());
        self.view.render(&PanelBody::from(list.notifications));
        if self.state.get() == PanelState::Loading {
            self.state.set(PanelState::Loaded);
        }
        match list.unread_count {
            Some(count) => self.set_unread(clamp_count(count)),
            None => self.sync_unread().await,
        }
    }

    /// Passive badge refresh; failures are only logged.
    pub async fn sync_unread(&self) {
        match self.api.unread_count().await {
            Ok(count) => self.set_unread(count),
            Err(err) => warn!("Could not refresh unread count: {err}"),
        }
    }

    pub fn set_unread(&self, count: u32) {
        self.unread.set(count);
        self.view.set_badge(Badge::for_count(count));
    }

    pub async fn mark_read(&self, id: &str) {
        if id.is_empty() {
            return;
        }
        match self.api.mark_read(id).await {
            Ok(()) => {
                self.view.mark_row_read(id);
                self.set_unread(self.unread.get().saturating_sub(1));
            }
            Err(err) if err.is_rejection() => {
                warn!("Mark as read rejected for {id}: {err}");
                self.shell.toast(MARK_READ_REJECTED, ToastKind::Error);
            }
            Err(err) => {
                error!("Mark as read error for {id}: {err}");
                self.shell.toast(MARK_READ_NETWORK, ToastKind::Error);
            }
        }
    }
}
