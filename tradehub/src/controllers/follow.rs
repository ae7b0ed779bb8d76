use std::rc::Rc;

use tracing::{error, info, warn};

use crate::api::{ApiClient, Transport};

use super::{Shell, ToastKind};

pub const FOLLOWED: &str = "You are now following this trader";
pub const UNFOLLOWED: &str = "You have unfollowed this trader";
pub const FOLLOW_FAILED: &str = "Could not complete the action";

/// Label and the class swap for a follow button in a given state.
pub struct FollowLabel {
    pub text: &'static str,
    pub add_class: &'static str,
    pub remove_class: &'static str,
}

impl FollowLabel {
    pub fn for_state(following: bool) -> Self {
        if following {
            Self {
                text: "Unfollow",
                add_class: "btn-secondary",
                remove_class: "btn-primary",
            }
        } else {
            Self {
                text: "Follow",
                add_class: "btn-primary",
                remove_class: "btn-secondary",
            }
        }
    }
}

pub trait FollowButton {
    fn username(&self) -> Option<String>;
    fn show_following(&self, following: bool);
}

/// Same toggle discipline as boosts, minus confirmation, particles and the
/// processing lock: overlapping clicks each send their own request.
pub struct FollowController<T, S> {
    api: Rc<ApiClient<T>>,
    shell: S,
}

impl<T: Transport, S: Shell> FollowController<T, S> {
    pub fn new(api: Rc<ApiClient<T>>, shell: S) -> Self {
        Self { api, shell }
    }

    pub async fn on_click<B: FollowButton>(&self, button: &B) {
        let Some(username) = button.username().filter(|u| !u.is_empty()) else {
            return;
        };
        match self.api.toggle_follow(&username).await {
            Ok(reply) => {
                info!("Follow state for {username}: {}", reply.following);
                button.show_following(reply.following);
                let message = if reply.following { FOLLOWED } else { UNFOLLOWED };
                self.shell.toast(message, ToastKind::Success);
            }
            Err(err) => {
                if err.is_rejection() {
                    warn!("Follow toggle rejected for {username}: {err}");
                } else {
                    error!("Follow error for {username}: {err}");
                }
                self.shell
                    .toast(err.user_message(FOLLOW_FAILED), ToastKind::Error);
            }
        }
    }
}
