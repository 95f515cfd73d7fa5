// core/tests/common/mod.rs
//
// Recording collaborators shared by the integration tests.

#![allow(dead_code)]

use autocomplete_core::{
    Anchor, AutocompleteBox, Choice, DisplayError, FieldBounds, KeyEvent, SuggestionDisplay,
    TextField,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

pub const COUNTRIES: &[&str] = &[
    "Nigeria",
    "Afghanistan",
    "Algeria",
    "American Samoa",
    "Bahamas",
    "Brazil",
    "Cameroon",
    "Denmark",
    "Egypt",
    "Finland",
    "Ivory Coast",
    "Jamaica",
    "Malaysia",
    "Netherlands",
    "Samoa",
    "Senegal",
    "Tunisia",
    "United Kingdom",
    "United States",
    "Vietnam",
    "Yemen",
    "Zambia",
];

/// Text field backed by a string, with fixed bounds.
pub struct TestField {
    text: RefCell<String>,
    bounds: FieldBounds,
    writes: Cell<usize>,
    on_bounds: RefCell<Option<Box<dyn Fn()>>>,
}

impl TestField {
    pub fn new() -> Self {
        Self {
            text: RefCell::new(String::new()),
            bounds: FieldBounds::new(0.0, 0.0, 240.0, 30.0),
            writes: Cell::new(0),
            on_bounds: RefCell::new(None),
        }
    }

    /// Run `hook` whenever the engine asks for the field bounds, which
    /// happens after matching and before anything is presented.
    pub fn on_bounds<H: Fn() + 'static>(&self, hook: H) {
        *self.on_bounds.borrow_mut() = Some(Box::new(hook));
    }

    /// Simulate the user typing a character (applied before key-up).
    pub fn push(&self, ch: char) {
        self.text.borrow_mut().push(ch);
    }

    /// Replace the content as the user would, without counting as a commit.
    pub fn type_over(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }

    /// Number of programmatic `set_text` calls.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl TextField for TestField {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        self.writes.set(self.writes.get() + 1);
        *self.text.borrow_mut() = text.to_string();
    }

    fn bounds(&self) -> FieldBounds {
        if let Some(hook) = self.on_bounds.borrow().as_ref() {
            hook();
        }
        self.bounds
    }
}

/// Everything the engine did to the display, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    Clear,
    Add(String),
    Show(Anchor),
}

/// Popup that records calls and can be scripted to fail or to be slow.
pub struct TestDisplay {
    events: RefCell<Vec<DisplayEvent>>,
    choices: RefCell<Vec<Choice>>,
    results: RefCell<VecDeque<Result<(), DisplayError>>>,
    latency: Cell<Duration>,
}

impl TestDisplay {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            choices: RefCell::new(Vec::new()),
            results: RefCell::new(VecDeque::new()),
            latency: Cell::new(Duration::ZERO),
        }
    }

    /// Queue the outcome of the next `show_at` call (default is `Ok`).
    pub fn fail_next(&self, err: DisplayError) {
        self.results.borrow_mut().push_back(Err(err));
    }

    /// Make `show_at` take this long to resolve.
    pub fn set_latency(&self, latency: Duration) {
        self.latency.set(latency);
    }

    pub fn events(&self) -> Vec<DisplayEvent> {
        self.events.borrow().clone()
    }

    pub fn show_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, DisplayEvent::Show(_)))
            .count()
    }

    /// Labels currently in the popup.
    pub fn labels(&self) -> Vec<String> {
        self.choices
            .borrow()
            .iter()
            .map(|c| c.label().to_string())
            .collect()
    }

    /// Simulate the user picking a choice by label.
    pub fn pick(&self, label: &str) -> bool {
        let choice = {
            let mut choices = self.choices.borrow_mut();
            match choices.iter().position(|c| c.label() == label) {
                Some(pos) => choices.remove(pos),
                None => return false,
            }
        };
        choice.invoke();
        true
    }
}

impl SuggestionDisplay for TestDisplay {
    fn clear(&self) {
        self.events.borrow_mut().push(DisplayEvent::Clear);
        self.choices.borrow_mut().clear();
    }

    fn add_choice(&self, choice: Choice) {
        self.events
            .borrow_mut()
            .push(DisplayEvent::Add(choice.label().to_string()));
        self.choices.borrow_mut().push(choice);
    }

    async fn show_at(&self, anchor: Anchor) -> Result<(), DisplayError> {
        self.events.borrow_mut().push(DisplayEvent::Show(anchor));
        let latency = self.latency.get();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        self.results.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

pub type TestBox = AutocompleteBox<TestField, TestDisplay>;

pub fn countries_box() -> TestBox {
    AutocompleteBox::with_items(TestField::new(), TestDisplay::new(), COUNTRIES.iter().copied())
}

/// Type `text` one character at a time, `interval` apart.
pub async fn type_text(ac: &TestBox, text: &str, interval: Duration) {
    for ch in text.chars() {
        ac.field().push(ch);
        ac.on_key_up(KeyEvent::from(ch));
        tokio::time::sleep(interval).await;
    }
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}
