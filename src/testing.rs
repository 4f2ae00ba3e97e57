//! In-memory fakes for the page surface and the activities API.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::api::{remove_path, signup_path, ActivityApi, ApiError, MutationResponse};
use crate::config::STATUS_HIDE_DELAY;
use crate::dispatcher::MutationDispatcher;
use crate::loader::DirectoryLoader;
use crate::models::{Activity, Directory, StatusMessage};
use crate::render::{ActivityCard, SelectorOption};
use crate::status::StatusNotifier;
use crate::surface::{ActivitiesContainer, ActivitySelector, Confirmer, HideTimer, SignupForm, StatusBanner, TimerGuard};

pub fn activity(max: u32, participants: &[&str]) -> Activity {
    Activity {
        description: "Aprenda estratégias e participe de torneios".to_string(),
        schedule: "Sextas, 15h30 - 17h".to_string(),
        max_participants: max,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn directory(entries: &[(&str, Activity)]) -> Directory {
    Directory::new(entries.iter().map(|(name, a)| (name.to_string(), a.clone())).collect())
}

pub enum Scripted<T> {
    Ready(T),
    Waiting(oneshot::Receiver<T>),
}

/// API answering from scripted queues and recording every request line
#[derive(Default)]
pub struct FakeApi {
    pub directories: RefCell<VecDeque<Scripted<Result<Directory, ApiError>>>>,
    pub mutations: RefCell<VecDeque<Result<MutationResponse, ApiError>>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn push_directory(&self, result: Result<Directory, ApiError>) {
        self.directories.borrow_mut().push_back(Scripted::Ready(result));
    }

    /// Queue a directory response that completes when the sender fires
    pub fn push_pending_directory(&self) -> oneshot::Sender<Result<Directory, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.directories.borrow_mut().push_back(Scripted::Waiting(rx));
        tx
    }

    pub fn push_mutation(&self, result: Result<MutationResponse, ApiError>) {
        self.mutations.borrow_mut().push_back(result);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn next_mutation(&self) -> Result<MutationResponse, ApiError> {
        self.mutations
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("nothing scripted".to_string())))
    }
}

#[async_trait(?Send)]
impl ActivityApi for FakeApi {
    async fn fetch_directory(&self) -> Result<Directory, ApiError> {
        self.calls.borrow_mut().push("GET /activities".to_string());
        let next = self.directories.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Waiting(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("sender dropped".to_string()))),
            None => Err(ApiError::Transport("nothing scripted".to_string())),
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MutationResponse, ApiError> {
        self.calls.borrow_mut().push(format!("POST {}", signup_path(activity, email)));
        self.next_mutation()
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<MutationResponse, ApiError> {
        self.calls.borrow_mut().push(format!("DELETE {}", remove_path(activity, email)));
        self.next_mutation()
    }
}

#[derive(Default)]
pub struct FakeContainer {
    pub cards: RefCell<Option<Vec<ActivityCard>>>,
    pub failure: RefCell<Option<String>>,
    pub renders: Cell<usize>,
}

impl ActivitiesContainer for FakeContainer {
    fn replace_cards(&self, cards: Vec<ActivityCard>) {
        *self.cards.borrow_mut() = Some(cards);
        *self.failure.borrow_mut() = None;
        self.renders.set(self.renders.get() + 1);
    }

    fn show_failure(&self, notice: &str) {
        *self.cards.borrow_mut() = None;
        *self.failure.borrow_mut() = Some(notice.to_string());
    }
}

#[derive(Default)]
pub struct FakeSelector {
    pub options: RefCell<Vec<SelectorOption>>,
    pub replaced: Cell<usize>,
}

impl ActivitySelector for FakeSelector {
    fn replace_options(&self, options: Vec<SelectorOption>) {
        *self.options.borrow_mut() = options;
        self.replaced.set(self.replaced.get() + 1);
    }
}

#[derive(Default)]
pub struct FakeForm {
    pub email: RefCell<String>,
    pub activity: RefCell<String>,
    pub resets: Cell<usize>,
}

impl FakeForm {
    pub fn fill(&self, activity: &str, email: &str) {
        *self.activity.borrow_mut() = activity.to_string();
        *self.email.borrow_mut() = email.to_string();
    }
}

impl SignupForm for FakeForm {
    fn email(&self) -> String {
        self.email.borrow().clone()
    }

    fn activity(&self) -> String {
        self.activity.borrow().clone()
    }

    fn reset(&self) {
        self.email.borrow_mut().clear();
        self.activity.borrow_mut().clear();
        self.resets.set(self.resets.get() + 1);
    }
}

#[derive(Default)]
pub struct FakeBanner {
    pub message: RefCell<Option<StatusMessage>>,
    pub visible: Cell<bool>,
    pub shows: Cell<usize>,
}

impl StatusBanner for FakeBanner {
    fn show(&self, message: &StatusMessage) {
        *self.message.borrow_mut() = Some(message.clone());
        self.visible.set(true);
        self.shows.set(self.shows.get() + 1);
    }

    fn hide(&self) {
        self.visible.set(false);
    }
}

pub struct FakeConfirmer {
    pub answer: bool,
    pub prompts: RefCell<Vec<String>>,
}

impl FakeConfirmer {
    pub fn answering(answer: bool) -> Self {
        Self { answer, prompts: RefCell::new(Vec::new()) }
    }
}

impl Confirmer for FakeConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer
    }
}

pub struct TimerSlot {
    pub delay: Duration,
    armed: Cell<bool>,
    on_fire: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl TimerSlot {
    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }
}

struct SlotGuard(Rc<TimerSlot>);

impl Drop for SlotGuard {
    fn drop(&mut self) {
        self.0.armed.set(false);
    }
}

/// Timer that only fires when told to
#[derive(Default)]
pub struct FakeTimer {
    pub slots: RefCell<Vec<Rc<TimerSlot>>>,
}

impl FakeTimer {
    /// Fire slot `index` if it is still armed
    pub fn fire(&self, index: usize) {
        let slot = self.slots.borrow()[index].clone();
        if !slot.armed.replace(false) {
            return;
        }
        let on_fire = slot.on_fire.borrow_mut().take();
        if let Some(on_fire) = on_fire {
            on_fire();
        }
    }

    pub fn armed_count(&self) -> usize {
        self.slots.borrow().iter().filter(|s| s.is_armed()).count()
    }
}

impl HideTimer for FakeTimer {
    fn arm(&self, delay: Duration, on_fire: Box<dyn FnOnce()>) -> TimerGuard {
        let slot = Rc::new(TimerSlot { delay, armed: Cell::new(true), on_fire: RefCell::new(Some(on_fire)) });
        self.slots.borrow_mut().push(slot.clone());
        TimerGuard::new(SlotGuard(slot))
    }
}

/// Loader, notifier and dispatcher wired to fakes
pub struct Page {
    pub api: Rc<FakeApi>,
    pub container: Rc<FakeContainer>,
    pub form: Rc<FakeForm>,
    pub banner: Rc<FakeBanner>,
    pub timer: Rc<FakeTimer>,
    pub confirmer: Rc<FakeConfirmer>,
    pub loader: Rc<DirectoryLoader>,
    pub dispatcher: Rc<MutationDispatcher>,
}

/// `confirm` is the operator's answer to every removal prompt
pub fn page(confirm: bool) -> Page {
    let api = Rc::new(FakeApi::default());
    let container = Rc::new(FakeContainer::default());
    let selector = Rc::new(FakeSelector::default());
    let form = Rc::new(FakeForm::default());
    let banner = Rc::new(FakeBanner::default());
    let timer = Rc::new(FakeTimer::default());
    let confirmer = Rc::new(FakeConfirmer::answering(confirm));
    let loader = Rc::new(DirectoryLoader::new(api.clone(), container.clone(), selector));
    let notifier = Rc::new(StatusNotifier::new(banner.clone(), timer.clone(), STATUS_HIDE_DELAY));
    let dispatcher = Rc::new(MutationDispatcher::new(
        api.clone(),
        loader.clone(),
        notifier,
        form.clone(),
        confirmer.clone(),
    ));
    Page { api, container, form, banner, timer, confirmer, loader, dispatcher }
}
