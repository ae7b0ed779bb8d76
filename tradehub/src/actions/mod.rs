//! Delegated click routing.
//!
//! The page installs one click listener on `document.body`. Each click is
//! resolved against [`ROUTES`] in declaration order: the first selector that
//! the clicked element (or one of its ancestors) matches decides the handler.

macro_rules! register_actions {
    ($($action:ident => $selector:literal),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Action {
            $(
                $action,
            )*
        }

        /// Selector to action, in priority order.
        pub const ROUTES: &[(&str, Action)] = &[
            $(
                ($selector, Action::$action),
            )*
        ];

        impl Action {
            pub fn selector(&self) -> &'static str {
                match self {
                    $(
                        Action::$action => $selector,
                    )*
                }
            }
        }
    };
}

register_actions!(
    MarkRead => ".mark-read-btn",
    PanelInterior => "#notification-dropdown",
    ToggleBell => "#notification-button",
    ToggleBoost => ".boost-btn",
    ToggleFollow => "#follow-btn",
    ToggleMobileMenu => ".mobile-menu-btn",
    SelectFilter => ".filter-btn",
    CloseWelcome => "#close-welcome-modal",
    OpenWelcome => "[data-open-welcome]",
    CopyText => "[data-copy-text]",
    InPageAnchor => "a[href^=\"#\"]",
);

impl Action {
    /// First route whose selector `matches`, usually `Element::closest`.
    pub fn resolve(mut matches: impl FnMut(&str) -> bool) -> Option<Action> {
        ROUTES
            .iter()
            .find(|(selector, _)| matches(selector))
            .map(|(_, action)| *action)
    }

    /// Clicks on the bell or inside the panel never count as outside clicks.
    pub fn closes_panel(action: Option<Action>) -> bool {
        !matches!(
            action,
            Some(Action::ToggleBell | Action::PanelInterior | Action::MarkRead)
        )
    }
}
