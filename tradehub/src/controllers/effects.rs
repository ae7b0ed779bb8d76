//! Cosmetic effects. Headless targets may ignore all of these; none of them
//! feed back into controller state.

use rand::Rng;

pub const PARTICLE_COUNT: usize = 8;
pub const PARTICLE_GLYPHS: [&str; 4] = ["🚀", "⭐", "💫", "✨"];
pub const PARTICLE_CLASS: &str = "boost-particle";

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub glyph: &'static str,
    pub dx: f64,
    pub dy: f64,
}

impl Particle {
    /// Inline style placing the particle at `(x, y)` with its drift vector.
    pub fn style(&self, x: f64, y: f64) -> String {
        format!(
            "left: {x}px; top: {y}px; --dx: {}px; --dy: {}px;",
            self.dx, self.dy
        )
    }
}

/// One burst: drift is ±60px sideways and 30..130px upwards.
pub fn burst<R: Rng + ?Sized>(rng: &mut R) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| Particle {
            glyph: PARTICLE_GLYPHS[rng.gen_range(0..PARTICLE_GLYPHS.len())],
            dx: (rng.gen::<f64>() - 0.5) * 120.0,
            dy: -rng.gen::<f64>() * 100.0 - 30.0,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    Boost,
    Unboost,
}

impl Pulse {
    pub fn animation(&self) -> &'static str {
        match self {
            Pulse::Boost => "boost-effect 0.6s ease-out",
            Pulse::Unboost => "unboost-effect 0.3s ease-out",
        }
    }
}

pub const REVEAL_SELECTOR: &str = ".publication-card, .feature-card, .stat-card, .auth-card, .profile-card, .achievement-card, .menu-item";
pub const REVEAL_ANIMATION: &str = "fade-in-up 0.6s ease-out forwards";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Staggered start for the `index`-th revealed element.
pub fn reveal_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.1)
}

pub const STYLE_ELEMENT_ID: &str = "tradehub-animations";

pub const STYLES: &str = r#"
@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes slide-out-right {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
@keyframes boost-effect {
    0% { transform: scale(1); }
    50% { transform: scale(1.2); }
    100% { transform: scale(1); }
}
@keyframes unboost-effect {
    0% { transform: scale(1); }
    50% { transform: scale(0.8); }
    100% { transform: scale(1); }
}
@keyframes particleFloat {
    0% { transform: translate(0, 0) scale(1); opacity: 1; }
    100% { transform: translate(var(--dx), var(--dy)) scale(0); opacity: 0; }
}
.boost-btn.boosted {
    color: #22c55e !important;
    background: rgba(34, 197, 94, 0.06) !important;
}
.boost-btn.processing {
    opacity: 0.7;
    pointer-events: none;
}
.boost-particle {
    position: absolute;
    pointer-events: none;
    font-size: 12px;
    animation: particleFloat 1s ease-out forwards;
    z-index: 1000;
}
.form-input.error,
.form-textarea.error {
    border-color: #ef4444 !important;
    box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.1) !important;
}
.alert-close {
    background: none;
    border: none;
    color: inherit;
    font-size: 1.2em;
    cursor: pointer;
    padding: 0;
    margin-left: 10px;
    opacity: 0.7;
}
.alert-close:hover {
    opacity: 1;
}
"#;
