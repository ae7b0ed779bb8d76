use std::rc::Rc;

use anyhow::anyhow;
use log::{error, info, warn};
use tradehub::api::transport::ReqwestTransport;
use tradehub::controllers::{
    BoostController, FollowController, FormGuard, MobileMenu, NotificationPanel,
};
use tradehub::{Action, ApiClient, Config};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, KeyboardEvent, Window,
};

use crate::bridge;
use crate::components::boost::DomBoostButton;
use crate::components::follow::DomFollowButton;
use crate::components::forms;
use crate::components::mobile_menu::DomMenu;
use crate::components::notifications::DomPanel;
use crate::components::toast::{dismiss_server_alerts, PageShell};
use crate::components::welcome::WelcomeModal;
use crate::components::{filters, reveal, scroll, styles, theme};
use crate::dom;

type Api = ApiClient<ReqwestTransport>;
type SharedShell = Rc<PageShell>;

/// Boots once the DOM is parsed.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        error!("No document to attach to");
        return;
    };
    if document.ready_state() == "loading" {
        let result = dom::listen_once(&document, "DOMContentLoaded", |_| boot());
        if let Err(err) = result {
            error!("Cannot wait for DOMContentLoaded {err:?}");
        }
    } else {
        boot();
    }
}

fn boot() {
    let result = App::new().and_then(|app| {
        let app = Rc::new(app);
        app.init()
    });
    if let Err(err) = result {
        error!("TradeHub UI failed to start {err:?}");
    }
}

pub struct App {
    config: Rc<Config>,
    window: Window,
    document: Document,
    shell: SharedShell,
    panel: NotificationPanel<DomPanel, ReqwestTransport, SharedShell>,
    boost: BoostController<ReqwestTransport, SharedShell>,
    follow: FollowController<ReqwestTransport, SharedShell>,
    menu: MobileMenu<DomMenu>,
    forms: FormGuard<SharedShell>,
    welcome: Option<WelcomeModal>,
}

impl App {
    fn new() -> anyhow::Result<Self> {
        let window = web_sys::window().ok_or(anyhow!("No window"))?;
        let document = window.document().ok_or(anyhow!("No document"))?;
        let config = Rc::new(bridge::load_config());

        let origin = window
            .location()
            .href()
            .map_err(|e| anyhow!("{e:?}"))?;
        let transport = ReqwestTransport::new(&origin)?;
        let csrf = {
            let document = document.clone();
            let injected = config.csrf_token.clone();
            Box::new(move || dom::csrf_token(&document, injected.as_deref()))
        };
        let api: Rc<Api> = Rc::new(ApiClient::new(transport, config.clone(), csrf));

        let shell = Rc::new(PageShell::new(
            window.clone(),
            document.clone(),
            config.toast_lifetime_ms,
        ));

        Ok(Self {
            panel: NotificationPanel::new(DomPanel::locate(&document), api.clone(), shell.clone()),
            boost: BoostController::new(api.clone(), shell.clone()),
            follow: FollowController::new(api, shell.clone()),
            menu: MobileMenu::new(DomMenu::new(document.clone()), config.mobile_breakpoint),
            forms: FormGuard::new(shell.clone()),
            welcome: WelcomeModal::locate(&document),
            config,
            window,
            document,
            shell,
        })
    }

    fn init(self: &Rc<Self>) -> anyhow::Result<()> {
        if let Err(err) = styles::inject(&self.document) {
            warn!("Cannot inject animations {err:?}");
        }
        theme::apply(&self.window, &self.document, &self.config.default_theme);
        dismiss_server_alerts(&self.window, &self.document, self.config.toast_lifetime_ms);

        let body = self.document.body().ok_or(anyhow!("Document has no body"))?;
        let app = self.clone();
        dom::listen(&body, "click", move |event| app.dispatch(event))?;

        let app = self.clone();
        dom::listen(&self.window, "resize", move |_| app.on_resize())?;
        self.on_resize();

        let app = self.clone();
        dom::listen(&self.document, "submit", move |event| app.on_submit(event))?;

        let app = self.clone();
        dom::listen(&self.window, "keydown", move |event| app.on_keydown(event))?;

        if let Err(err) = reveal::observe(&self.document) {
            warn!("Scroll reveal unavailable {err:?}");
        }

        let app = self.clone();
        spawn_local(async move { app.panel.sync_unread().await });

        info!("TradeHub UI initialized");
        Ok(())
    }

    fn dispatch(self: &Rc<Self>, event: Event) {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        let mut hit: Option<Element> = None;
        let action = Action::resolve(|selector| match target.closest(selector) {
            Ok(Some(element)) => {
                hit = Some(element);
                true
            }
            _ => false,
        });
        if Action::closes_panel(action) {
            self.panel.close();
        }
        let (Some(action), Some(hit)) = (action, hit) else {
            return;
        };

        match action {
            Action::ToggleBell => {
                let app = self.clone();
                spawn_local(async move { app.panel.toggle().await });
            }
            Action::PanelInterior => {}
            Action::MarkRead => {
                let Some(id) = hit.get_attribute("data-id").filter(|id| !id.is_empty()) else {
                    return;
                };
                let app = self.clone();
                spawn_local(async move { app.panel.mark_read(&id).await });
            }
            Action::ToggleBoost => {
                let Ok(element) = hit.dyn_into::<HtmlElement>() else {
                    return;
                };
                let button = DomBoostButton::new(
                    self.window.clone(),
                    self.document.clone(),
                    element,
                    self.config.particle_lifetime_ms,
                );
                let app = self.clone();
                spawn_local(async move { app.boost.on_click(&button).await });
            }
            Action::ToggleFollow => {
                let Ok(element) = hit.dyn_into::<HtmlElement>() else {
                    return;
                };
                let button = DomFollowButton(element);
                let app = self.clone();
                spawn_local(async move { app.follow.on_click(&button).await });
            }
            Action::ToggleMobileMenu => self.menu.toggle(),
            Action::SelectFilter => filters::select(&self.document, &hit),
            Action::CloseWelcome => {
                if let Some(welcome) = &self.welcome {
                    welcome.hide();
                }
            }
            Action::OpenWelcome => {
                event.prevent_default();
                if let Some(welcome) = &self.welcome {
                    welcome.show();
                }
            }
            Action::CopyText => {
                let text = hit.get_attribute("data-copy-text").unwrap_or_default();
                let shell = self.shell.clone();
                spawn_local(async move { bridge::copy_to_clipboard(&shell, &text).await });
            }
            Action::InPageAnchor => {
                event.prevent_default();
                scroll::smooth_scroll(&self.document, &hit);
            }
        }
    }

    fn on_resize(&self) {
        if let Ok(width) = self.window.inner_width() {
            if let Some(width) = width.as_f64() {
                self.menu.on_resize(width);
            }
        }
    }

    fn on_submit(&self, event: Event) {
        let Some(form) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        let required = forms::required_fields(&form);
        if !self.forms.on_submit(&required) {
            event.prevent_default();
        }
    }

    fn on_keydown(&self, event: Event) {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if event.key() == "Escape" {
            if let Some(welcome) = &self.welcome {
                welcome.hide();
            }
        }
    }
}
