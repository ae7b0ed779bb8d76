use std::rc::Rc;

pub use self::boost::{BoostButton, BoostController};
pub use self::follow::{FollowButton, FollowController};
pub use self::forms::{FormField, FormGuard};
pub use self::mobile_menu::{MenuView, MobileMenu};
pub use self::notifications::{Badge, NotificationPanel, PanelBody, PanelState, PanelView};
pub use self::toast::ToastKind;

pub mod boost;
pub mod effects;
pub mod follow;
pub mod forms;
pub mod mobile_menu;
pub mod notifications;
pub mod toast;

/// Page-wide feedback surfaces shared by every controller.
pub trait Shell {
    fn toast(&self, message: &str, kind: ToastKind);

    /// Blocking yes/no question. `false` means the user declined.
    fn confirm(&self, message: &str) -> bool;
}

impl<S: Shell + ?Sized> Shell for Rc<S> {
    fn toast(&self, message: &str, kind: ToastKind) {
        (**self).toast(message, kind)
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}
