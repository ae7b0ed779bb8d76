use tracing::debug;

pub const TOGGLE_CLASS: &str = "mobile-menu-btn";
pub const TOGGLE_GLYPH: &str = "☰";
pub const TOGGLE_STYLE: &str = "display: block; background: none; border: none; color: #8b5cf6; font-size: 1.5rem; cursor: pointer; padding: 0.5rem;";

/// Inline properties applied to `.nav-menu` when opened.
pub const OPEN_MENU_STYLE: [(&str, &str); 13] = [
    ("display", "flex"),
    ("flex-direction", "column"),
    ("position", "absolute"),
    ("top", "100%"),
    ("left", "0"),
    ("right", "0"),
    ("background", "rgba(15, 15, 35, 0.98)"),
    ("border", "1px solid #8b5cf6"),
    ("border-top", "none"),
    ("border-radius", "0 0 15px 15px"),
    ("padding", "1rem"),
    ("gap", "0.5rem"),
    ("z-index", "1001"),
];

pub trait MenuView {
    fn has_toggle(&self) -> bool;
    fn insert_toggle(&self);
    fn remove_toggle(&self);
    fn is_open(&self) -> bool;
    fn set_open(&self, open: bool);
}

pub struct MobileMenu<V> {
    view: V,
    breakpoint: u32,
}

impl<V: MenuView> MobileMenu<V> {
    pub fn new(view: V, breakpoint: u32) -> Self {
        Self { view, breakpoint }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Runs at start-up and on every resize event.
    pub fn on_resize(&self, viewport_width: f64) {
        if viewport_width <= self.breakpoint as f64 {
            if !self.view.has_toggle() {
                debug!("Viewport {viewport_width}px, adding menu toggle");
                self.view.insert_toggle();
            }
        } else {
            self.view.remove_toggle();
        }
    }

    pub fn toggle(&self) {
        self.view.set_open(!self.view.is_open());
    }
}
