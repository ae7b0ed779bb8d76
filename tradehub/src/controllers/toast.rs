use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "alert alert-success",
            ToastKind::Error => "alert alert-error",
        }
    }
}

impl Display for ToastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToastKind::Success => write!(f, "success"),
            ToastKind::Error => write!(f, "error"),
        }
    }
}

/// Fixed container the banners stack in, created on first use.
pub const CONTAINER_CLASS: &str = "messages";
pub const CONTAINER_STYLE: &str =
    "position: fixed; top: 80px; right: 20px; z-index: 1001; width: 320px;";

pub const EXIT_ANIMATION: &str = "slide-out-right 0.3s ease-in forwards";
pub const EXIT_ANIMATION_MS: u32 = 300;

pub const COPIED: &str = "Copied to clipboard!";
pub const COPY_FAILED: &str = "Could not copy";
