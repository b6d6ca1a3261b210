//! In-memory page host for native controller tests.
//!
//! Records what the controllers write, keeps registered listeners so tests
//! can fire events, and runs timers against a manual clock.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::image_reveal::{RevealHost, RevealStyle};
use crate::search_status::SearchHost;
use crate::theme::ThemeHost;

/// Optional parts of the page markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Part {
    Form,
    Status,
    Spinner,
    Button,
    Input,
    Toggle,
    Storage,
}

pub struct FakeImage {
    complete: Cell<bool>,
    style: Cell<Option<RevealStyle>>,
    revealed_at: Cell<Option<u32>>,
    load_handlers: RefCell<Vec<Rc<dyn Fn()>>>,
}

impl FakeImage {
    fn new(complete: bool) -> Self {
        Self {
            complete: Cell::new(complete),
            style: Cell::new(None),
            revealed_at: Cell::new(None),
            load_handlers: RefCell::new(Vec::new()),
        }
    }

    pub fn style(&self) -> Option<RevealStyle> {
        self.style.get()
    }

    /// Clock time of the most recent switch to the shown style.
    pub fn revealed_at(&self) -> Option<u32> {
        self.revealed_at.get()
    }

    pub fn load_handler_count(&self) -> usize {
        self.load_handlers.borrow().len()
    }
}

struct Timer {
    due_ms: u32,
    task: Box<dyn FnOnce()>,
}

pub struct FakePage {
    parts: BTreeSet<Part>,
    status_text: RefCell<String>,
    spinner_hidden: Cell<Option<bool>>,
    submit_disabled: Cell<bool>,
    submit_handlers: RefCell<Vec<Box<dyn Fn()>>>,
    input_handlers: RefCell<Vec<Box<dyn Fn()>>>,
    toggle_handlers: RefCell<Vec<Box<dyn Fn()>>>,
    root_classes: RefCell<BTreeSet<String>>,
    storage: RefCell<HashMap<String, String>>,
    images: Vec<Rc<FakeImage>>,
    now_ms: Cell<u32>,
    timers: RefCell<Vec<Timer>>,
    frames: RefCell<Vec<Box<dyn FnOnce()>>>,
    body_classes: RefCell<BTreeSet<String>>,
    content_ready: Cell<bool>,
    ready_tasks: RefCell<Vec<Box<dyn FnOnce()>>>,
}

const ALL_PARTS: [Part; 7] =
    [Part::Form, Part::Status, Part::Spinner, Part::Button, Part::Input, Part::Toggle, Part::Storage];

impl FakePage {
    /// A page carrying every element, working storage, and no images.
    pub fn full() -> Self {
        Self::with_parts(&ALL_PARTS)
    }

    /// A page carrying none of the elements the controllers look for.
    pub fn empty() -> Self {
        Self::with_parts(&[])
    }

    fn with_parts(parts: &[Part]) -> Self {
        Self {
            parts: parts.iter().copied().collect(),
            status_text: RefCell::new(String::new()),
            spinner_hidden: Cell::new(None),
            submit_disabled: Cell::new(false),
            submit_handlers: RefCell::new(Vec::new()),
            input_handlers: RefCell::new(Vec::new()),
            toggle_handlers: RefCell::new(Vec::new()),
            root_classes: RefCell::new(BTreeSet::new()),
            storage: RefCell::new(HashMap::new()),
            images: Vec::new(),
            now_ms: Cell::new(0),
            timers: RefCell::new(Vec::new()),
            frames: RefCell::new(Vec::new()),
            body_classes: RefCell::new(BTreeSet::new()),
            content_ready: Cell::new(false),
            ready_tasks: RefCell::new(Vec::new()),
        }
    }

    pub fn without(mut self, part: Part) -> Self {
        self.parts.remove(&part);
        self
    }

    /// Add images under `.images`; `true` marks one as already complete.
    pub fn with_images(mut self, complete: &[bool]) -> Self {
        self.images
            .extend(complete.iter().map(|c| Rc::new(FakeImage::new(*c))));
        self
    }

    pub fn with_stored(self, key: &str, value: &str) -> Self {
        self.storage
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        self
    }

    /// Treat the document as already parsed.
    pub fn already_ready(self) -> Self {
        self.content_ready.set(true);
        self
    }

    fn has(&self, part: Part) -> bool {
        self.parts.contains(&part)
    }

    // ---- inspection -------------------------------------------------------

    pub fn status_text(&self) -> String {
        self.status_text.borrow().clone()
    }

    pub fn spinner_hidden(&self) -> Option<bool> {
        self.spinner_hidden.get()
    }

    pub fn submit_disabled(&self) -> bool {
        self.submit_disabled.get()
    }

    pub fn root_classes(&self) -> BTreeSet<String> {
        self.root_classes.borrow().clone()
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    pub fn body_has_class(&self, class: &str) -> bool {
        self.body_classes.borrow().contains(class)
    }

    pub fn image(&self, index: usize) -> &Rc<FakeImage> {
        &self.images[index]
    }

    pub fn now_ms(&self) -> u32 {
        self.now_ms.get()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    // ---- events -----------------------------------------------------------

    pub fn submit(&self) {
        for handler in self.submit_handlers.borrow().iter() {
            handler();
        }
    }

    pub fn type_input(&self) {
        for handler in self.input_handlers.borrow().iter() {
            handler();
        }
    }

    pub fn click_toggle(&self) {
        for handler in self.toggle_handlers.borrow().iter() {
            handler();
        }
    }

    /// Fire `DOMContentLoaded`.
    pub fn finish_parsing(&self) {
        self.content_ready.set(true);
        let tasks = std::mem::take(&mut *self.ready_tasks.borrow_mut());
        for task in tasks {
            task();
        }
    }

    /// Mark image `index` complete and fire its `load` event.
    pub fn load_image(&self, index: usize) {
        let image = &self.images[index];
        image.complete.set(true);
        let handlers = image.load_handlers.borrow().clone();
        for handler in handlers {
            handler();
        }
    }

    /// Run every pending animation-frame callback.
    pub fn run_frames(&self) {
        let frames = std::mem::take(&mut *self.frames.borrow_mut());
        for frame in frames {
            frame();
        }
    }

    /// Move the clock forward, running timers as they come due.
    pub fn advance(&self, ms: u32) {
        let target = self.now_ms.get() + ms;
        loop {
            let next = {
                let timers = self.timers.borrow();
                timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| t.due_ms)
                    .map(|(i, _)| i)
            };
            let Some(index) = next else {
                break;
            };
            let timer = self.timers.borrow_mut().remove(index);
            self.now_ms.set(timer.due_ms);
            (timer.task)();
        }
        self.now_ms.set(target);
    }
}

impl SearchHost for FakePage {
    fn set_status_text(&self, text: &str) {
        if self.has(Part::Status) {
            *self.status_text.borrow_mut() = text.to_owned();
        }
    }

    fn set_spinner_hidden(&self, hidden: bool) {
        if self.has(Part::Spinner) {
            self.spinner_hidden.set(Some(hidden));
        }
    }

    fn set_submit_disabled(&self, disabled: bool) {
        if self.has(Part::Button) {
            self.submit_disabled.set(disabled);
        }
    }

    fn on_search_submit(&self, handler: Box<dyn Fn()>) {
        if self.has(Part::Form) {
            self.submit_handlers.borrow_mut().push(handler);
        }
    }

    fn on_search_input(&self, handler: Box<dyn Fn()>) {
        if self.has(Part::Input) {
            self.input_handlers.borrow_mut().push(handler);
        }
    }
}

impl ThemeHost for FakePage {
    fn root_has_class(&self, class: &str) -> bool {
        self.root_classes.borrow().contains(class)
    }

    fn set_root_class(&self, class: &str, present: bool) {
        let mut classes = self.root_classes.borrow_mut();
        if present {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }

    fn load_preference(&self, key: &str) -> Option<String> {
        if !self.has(Part::Storage) {
            return None;
        }
        self.storage.borrow().get(key).cloned()
    }

    fn store_preference(&self, key: &str, value: &str) -> bool {
        if !self.has(Part::Storage) {
            return false;
        }
        self.storage
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        true
    }

    fn on_theme_toggle(&self, handler: Box<dyn Fn()>) {
        if self.has(Part::Toggle) {
            self.toggle_handlers.borrow_mut().push(handler);
        }
    }
}

impl RevealHost for FakePage {
    type Image = Rc<FakeImage>;

    fn reveal_images(&self) -> Vec<Rc<FakeImage>> {
        self.images.clone()
    }

    fn set_image_style(&self, image: &Rc<FakeImage>, style: &RevealStyle) {
        image.style.set(Some(*style));
        if *style == RevealStyle::SHOWN {
            image.revealed_at.set(Some(self.now_ms.get()));
        }
    }

    fn image_complete(&self, image: &Rc<FakeImage>) -> bool {
        image.complete.get()
    }

    fn on_image_load(&self, image: &Rc<FakeImage>, handler: Rc<dyn Fn()>) {
        image.load_handlers.borrow_mut().push(handler);
    }

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let due_ms = self.now_ms.get() + delay_ms;
        self.timers.borrow_mut().push(Timer { due_ms, task });
    }

    fn request_frame(&self, task: Box<dyn FnOnce()>) {
        self.frames.borrow_mut().push(task);
    }

    fn add_body_class(&self, class: &str) {
        self.body_classes.borrow_mut().insert(class.to_owned());
    }

    fn on_content_ready(&self, task: Box<dyn FnOnce()>) {
        if self.content_ready.get() {
            task();
        } else {
            self.ready_tasks.borrow_mut().push(task);
        }
    }
}
