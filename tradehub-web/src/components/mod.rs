pub mod boost;
pub mod filters;
pub mod follow;
pub mod forms;
pub mod mobile_menu;
pub mod notifications;
pub mod reveal;
pub mod scroll;
pub mod styles;
pub mod theme;
pub mod toast;
pub mod welcome;
