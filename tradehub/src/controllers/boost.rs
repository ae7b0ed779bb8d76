use std::rc::Rc;

use tracing::{error, info};

use crate::api::{ApiClient, Transport};
use crate::error::ApiError;

use super::effects::{self, Particle, Pulse};
use super::{Shell, ToastKind};

pub const CONFIRM_REMOVE: &str = "Are you sure you want to remove your boost?";
pub const CONFIRM_SPEND: &str = "Do you want to spend one of your daily boosts on this idea?";
pub const NETWORK_ERROR: &str = "Network error";
pub const GENERIC_ERROR: &str = "Something went wrong";

/// One `.boost-btn` element. Its `boosted`/count state only ever changes from a
/// server reply.
pub trait BoostButton {
    fn pub_id(&self) -> Option<String>;
    fn is_boosted(&self) -> bool;
    fn is_processing(&self) -> bool;
    fn set_processing(&self, processing: bool);
    fn set_boosted(&self, boosted: bool);
    fn set_count(&self, count: i64);
    fn pulse(&self, pulse: Pulse);
    /// Spawns the particles; the view removes them after their lifetime.
    fn burst(&self, particles: &[Particle]);
}

pub fn confirmation_message(boosted: bool) -> &'static str {
    if boosted {
        CONFIRM_REMOVE
    } else {
        CONFIRM_SPEND
    }
}

pub struct BoostController<T, S> {
    api: Rc<ApiClient<T>>,
    shell: S,
}

impl<T: Transport, S: Shell> BoostController<T, S> {
    pub fn new(api: Rc<ApiClient<T>>, shell: S) -> Self {
        Self { api, shell }
    }

    /// Click on a boost button. A click while the same button is processing is
    /// dropped, not queued.
    pub async fn on_click<B: BoostButton>(&self, button: &B) {
        if button.is_processing() {
            return;
        }
        let Some(pub_id) = button.pub_id().filter(|id| !id.is_empty()) else {
            return;
        };
        if !self
            .shell
            .confirm(confirmation_message(button.is_boosted()))
        {
            return;
        }

        button.set_processing(true);
        let result = self.api.toggle_boost(&pub_id).await;
        button.set_processing(false);

        match result {
            Ok(reply) => {
                info!("Publication {pub_id} boosted={}", reply.boosted);
                if let Some(count) = reply.boost_count {
                    button.set_count(count);
                }
                button.set_boosted(reply.boosted);
                if reply.boosted {
                    button.pulse(Pulse::Boost);
                    button.burst(&effects::burst(&mut rand::thread_rng()));
                } else {
                    button.pulse(Pulse::Unboost);
                }
            }
            Err(err) => {
                error!("Boost error for {pub_id}: {err}");
                let fallback = match err {
                    ApiError::Rejected { .. } => GENERIC_ERROR,
                    _ => NETWORK_ERROR,
                };
                self.shell
                    .toast(err.user_message(fallback), ToastKind::Error);
            }
        }
    }
}
