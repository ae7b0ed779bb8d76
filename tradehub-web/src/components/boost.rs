use log::warn;
use tradehub::controllers::boost::BoostButton;
use tradehub::controllers::effects::{Particle, Pulse, PARTICLE_CLASS};
use web_sys::{Document, HtmlElement, Window};

use crate::dom::{self, JsResultExt};

pub struct DomBoostButton {
    window: Window,
    document: Document,
    element: HtmlElement,
    particle_lifetime_ms: u32,
}

impl DomBoostButton {
    pub fn new(
        window: Window,
        document: Document,
        element: HtmlElement,
        particle_lifetime_ms: u32,
    ) -> Self {
        Self {
            window,
            document,
            element,
            particle_lifetime_ms,
        }
    }

    fn set_class(&self, class: &str, on: bool) {
        if let Err(err) = self.element.class_list().toggle_with_force(class, on) {
            warn!("Cannot toggle {class} {err:?}");
        }
    }

    fn spawn_particle(&self, particle: &Particle, x: f64, y: f64) -> anyhow::Result<()> {
        let element = dom::create(&self.document, "div", PARTICLE_CLASS)?;
        element.set_text_content(Some(particle.glyph));
        element
            .set_attribute("style", &particle.style(x, y))
            .js_err()?;
        let body = self
            .document
            .body()
            .ok_or(anyhow::anyhow!("Document has no body"))?;
        body.append_child(&element).js_err()?;
        dom::set_timeout(&self.window, self.particle_lifetime_ms, move || element.remove())
    }
}

impl BoostButton for DomBoostButton {
    fn pub_id(&self) -> Option<String> {
        self.element.dataset().get("pubId")
    }

    fn is_boosted(&self) -> bool {
        self.element.class_list().contains("boosted")
    }

    fn is_processing(&self) -> bool {
        self.element.class_list().contains("processing")
    }

    fn set_processing(&self, processing: bool) {
        self.set_class("processing", processing);
    }

    fn set_boosted(&self, boosted: bool) {
        self.set_class("boosted", boosted);
    }

    fn set_count(&self, count: i64) {
        if let Ok(Some(counter)) = self.element.query_selector(".boost-count") {
            counter.set_text_content(Some(count.to_string().as_str()));
        }
    }

    fn pulse(&self, pulse: Pulse) {
        dom::set_style(&self.element, "animation", pulse.animation());
        let element = self.element.clone();
        if let Err(err) = dom::listen_once(&self.element, "animationend", move |_| {
            dom::set_style(&element, "animation", "")
        }) {
            warn!("Cannot reset boost animation {err:?}");
        }
    }

    fn burst(&self, particles: &[Particle]) {
        let rect = self.element.get_bounding_client_rect();
        let x = rect.left() + rect.width() / 2.0;
        let y = rect.top() + rect.height() / 2.0;
        for particle in particles {
            if let Err(err) = self.spawn_particle(particle, x, y) {
                warn!("Cannot spawn boost particle {err:?}");
            }
        }
    }
}
