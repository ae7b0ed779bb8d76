#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tradehub::api::{ApiClient, HttpRequest, HttpResponse, Transport};
use tradehub::controllers::boost::BoostButton;
use tradehub::controllers::effects::{Particle, Pulse};
use tradehub::controllers::follow::FollowButton;
use tradehub::controllers::{Badge, PanelBody, PanelView, Shell, ToastKind};
use tradehub::{ApiError, Config};

pub fn init_tracing() {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_test_writer())
        .try_init();
}

/// Replays scripted responses in order and records every request.
#[derive(Default)]
pub struct FakeTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Transport("connection refused".into())));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn request(&self, index: usize) -> HttpRequest {
        self.requests.borrow()[index].clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".into())))
    }
}

pub fn client(config: Config) -> Rc<ApiClient<FakeTransport>> {
    init_tracing();
    Rc::new(ApiClient::new(
        FakeTransport::default(),
        Rc::new(config),
        Box::new(|| Some("token".to_string())),
    ))
}

pub struct FakeShell {
    pub answer: Cell<bool>,
    pub prompts: RefCell<Vec<String>>,
    pub toasts: RefCell<Vec<(String, ToastKind)>>,
}

impl FakeShell {
    pub fn answering(answer: bool) -> Rc<Self> {
        Rc::new(Self {
            answer: Cell::new(answer),
            prompts: RefCell::default(),
            toasts: RefCell::default(),
        })
    }

    pub fn toasts(&self) -> Vec<(String, ToastKind)> {
        self.toasts.borrow().clone()
    }
}

impl Shell for FakeShell {
    fn toast(&self, message: &str, kind: ToastKind) {
        self.toasts.borrow_mut().push((message.to_string(), kind));
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}

#[derive(Default)]
pub struct FakePanel {
    pub visible: Cell<bool>,
    pub renders: RefCell<Vec<PanelBody>>,
    pub marked: RefCell<Vec<String>>,
    pub badge: Cell<Option<Badge>>,
}

impl PanelView for FakePanel {
    fn show(&self) {
        self.visible.set(true);
    }

    fn hide(&self) {
        self.visible.set(false);
    }

    fn render(&self, body: &PanelBody) {
        self.renders.borrow_mut().push(body.clone());
    }

    fn mark_row_read(&self, id: &str) {
        self.marked.borrow_mut().push(id.to_string());
    }

    fn set_badge(&self, badge: Badge) {
        self.badge.set(Some(badge));
    }
}

pub struct FakeBoostButton {
    pub pub_id: Option<String>,
    pub boosted: Cell<bool>,
    pub count: Cell<i64>,
    pub processing: Cell<bool>,
    pub processing_history: RefCell<Vec<bool>>,
    pub pulses: RefCell<Vec<Pulse>>,
    pub bursts: RefCell<Vec<usize>>,
}

impl FakeBoostButton {
    pub fn new(pub_id: &str, boosted: bool, count: i64) -> Self {
        Self {
            pub_id: Some(pub_id.to_string()).filter(|id| !id.is_empty()),
            boosted: Cell::new(boosted),
            count: Cell::new(count),
            processing: Cell::new(false),
            processing_history: RefCell::default(),
            pulses: RefCell::default(),
            bursts: RefCell::default(),
        }
    }
}

impl BoostButton for FakeBoostButton {
    fn pub_id(&self) -> Option<String> {
        self.pub_id.clone()
    }

    fn is_boosted(&self) -> bool {
        self.boosted.get()
    }

    fn is_processing(&self) -> bool {
        self.processing.get()
    }

    fn set_processing(&self, processing: bool) {
        self.processing.set(processing);
        self.processing_history.borrow_mut().push(processing);
    }

    fn set_boosted(&self, boosted: bool) {
        self.boosted.set(boosted);
    }

    fn set_count(&self, count: i64) {
        self.count.set(count);
    }

    fn pulse(&self, pulse: Pulse) {
        self.pulses.borrow_mut().push(pulse);
    }

    fn burst(&self, particles: &[Particle]) {
        self.bursts.borrow_mut().push(particles.len());
    }
}

pub struct FakeFollowButton {
    pub username: Option<String>,
    pub shown: RefCell<Vec<bool>>,
}

impl FakeFollowButton {
    pub fn new(username: &str) -> Self {
        Self {
            username: Some(username.to_string()).filter(|u| !u.is_empty()),
            shown: RefCell::default(),
        }
    }
}

impl FollowButton for FakeFollowButton {
    fn username(&self) -> Option<String> {
        self.username.clone()
    }

    fn show_following(&self, following: bool) {
        self.shown.borrow_mut().push(following);
    }
}
