// core/src/engine.rs
//
// Debounce-and-match engine attached to a text field.
//
// Every qualifying key release supersedes whatever request is still in
// flight and schedules a new one. A request sleeps for the popup delay, reads
// the field, matches against the vocabulary and hands the result to the
// display. Only the request whose id equals `current_request` may touch the
// display or the menu flag.

use crate::config::{is_valid_popup_delay, Config};
use crate::display::{Choice, DisplayError, SuggestionDisplay, TextField};
use crate::filter::should_trigger;
use crate::key_event::KeyEvent;
use crate::matcher::{Matcher, SearchMode};
use crate::vocabulary::Vocabulary;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Where the engine is in its suggestion cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// No request in flight and no menu shown
    #[default]
    Idle,
    /// Waiting out the popup delay
    Pending,
    /// Reading input, matching, and waiting for the display
    Evaluating,
    /// Suggestions are on screen
    Presenting,
}

/// Bookkeeping for the single live request.
#[derive(Debug)]
struct PendingRequest {
    id: u64,
    delay: Duration,
    handle: JoinHandle<()>,
}

/// Text-field autocomplete driven by key-release events.
///
/// The box must be driven from inside a `tokio::task::LocalSet` running on a
/// current-thread runtime: each cycle is a `spawn_local` task, so key intake
/// and the delayed evaluation share one thread and need no locks.
///
/// # Example
///
/// ```no_run
/// # use autocomplete_core::{AutocompleteBox, KeyEvent, TextField, SuggestionDisplay, Choice, Anchor, DisplayError};
/// # struct Field; impl TextField for Field { fn text(&self) -> String { "br".into() } fn set_text(&self, _: &str) {} }
/// # struct Popup; impl SuggestionDisplay for Popup {
/// #     fn clear(&self) {} fn add_choice(&self, _: Choice) {}
/// #     async fn show_at(&self, _: Anchor) -> Result<(), DisplayError> { Ok(()) } }
/// # async fn demo() {
/// let local = tokio::task::LocalSet::new();
/// local.run_until(async {
///     let ac = AutocompleteBox::with_items(Field, Popup, ["Brazil", "Bahamas"]);
///     ac.on_key_up(KeyEvent::Char('r'));
/// }).await;
/// # }
/// ```
pub struct AutocompleteBox<F, D>
where
    F: TextField + 'static,
    D: SuggestionDisplay + 'static,
{
    inner: Rc<Inner<F, D>>,
}

struct Inner<F, D> {
    field: F,
    display: D,
    matcher: Matcher,
    search_mode: Cell<SearchMode>,
    popup_delay: Cell<f32>,
    /// Id of the only request allowed to reach the display
    current_request: Cell<u64>,
    pending: RefCell<Option<PendingRequest>>,
    phase: Cell<Phase>,
    menu_triggered: Cell<bool>,
}

impl<F, D> AutocompleteBox<F, D>
where
    F: TextField + 'static,
    D: SuggestionDisplay + 'static,
{
    /// Create an autocomplete box with an empty vocabulary.
    pub fn new(field: F, display: D) -> Self {
        Self::with_config(field, display, std::iter::empty::<String>(), &Config::default())
    }

    /// Create an autocomplete box with the given vocabulary entries.
    pub fn with_items<I, S>(field: F, display: D, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(field, display, items, &Config::default())
    }

    /// Create an autocomplete box from a vocabulary and a configuration.
    pub fn with_config<I, S>(field: F, display: D, items: I, config: &Config) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let popup_delay = if is_valid_popup_delay(config.popup_delay) {
            config.popup_delay
        } else {
            crate::config::DEFAULT_POPUP_DELAY
        };
        Self {
            inner: Rc::new(Inner {
                field,
                display,
                matcher: Matcher::new(items.into_iter().collect(), config.max_cache_size),
                search_mode: Cell::new(config.search_mode),
                popup_delay: Cell::new(popup_delay),
                current_request: Cell::new(0),
                pending: RefCell::new(None),
                phase: Cell::new(Phase::Idle),
                menu_triggered: Cell::new(false),
            }),
        }
    }

    /// The attached text field.
    pub fn field(&self) -> &F {
        &self.inner.field
    }

    /// The attached suggestion display.
    pub fn display(&self) -> &D {
        &self.inner.display
    }

    // ========== Key intake ==========

    /// Handle a key-release event from the text field.
    ///
    /// Content-changing keys cancel the live request (if any) and schedule a
    /// new one. Returns true if a new cycle was scheduled.
    ///
    /// # Panics
    ///
    /// Panics if called outside a `tokio::task::LocalSet`.
    pub fn on_key_up(&self, key: KeyEvent) -> bool {
        if !should_trigger(&key) {
            return false;
        }
        self.restart();
        true
    }

    /// Handle a key release reported as a raw virtual-key code.
    pub fn on_key_code(&self, code: u32) -> bool {
        self.on_key_up(KeyEvent::from_code(code))
    }

    fn restart(&self) {
        let inner = &self.inner;
        if let Some(previous) = inner.supersede() {
            tracing::debug!(request = previous.id, "superseded by a newer keystroke");
        }

        let id = inner.current_request.get();
        let delay = inner.delay_duration();
        let task = Rc::clone(inner);
        let handle = tokio::task::spawn_local(async move { task.run_cycle(id, delay).await });

        tracing::debug!(request = id, ?delay, "suggestion request pending");
        inner.phase.set(Phase::Pending);
        *inner.pending.borrow_mut() = Some(PendingRequest { id, delay, handle });
    }

    /// Invalidate the live request, if any, without touching the display.
    ///
    /// Returns true if a request was cancelled.
    pub fn cancel_pending(&self) -> bool {
        match self.inner.supersede() {
            Some(previous) => {
                tracing::debug!(request = previous.id, "pending request cancelled");
                if matches!(self.inner.phase.get(), Phase::Pending | Phase::Evaluating) {
                    self.inner.phase.set(Phase::Idle);
                }
                true
            }
            None => false,
        }
    }

    // ========== Selection ==========

    /// Overwrite the text field with a picked suggestion.
    ///
    /// This is what a `Choice` does when invoked. The programmatic text
    /// change does not start a new cycle.
    pub fn commit_selection(&self, label: &str) {
        self.inner.commit_selection(label);
    }

    /// Report that the popup was closed without a pick.
    pub fn menu_dismissed(&self) {
        self.inner.close_menu();
    }

    // ========== Observable state ==========

    /// Whether a suggestion set is currently on screen.
    pub fn is_menu_triggered(&self) -> bool {
        self.inner.menu_triggered.get()
    }

    /// Current cycle phase.
    pub fn phase(&self) -> Phase {
        self.inner.phase.get()
    }

    /// Whether a request is waiting out its delay or still evaluating.
    pub fn has_pending(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }

    /// Delay captured by the live request, if there is one.
    pub fn pending_delay(&self) -> Option<Duration> {
        self.inner.pending.borrow().as_ref().map(|p| p.delay)
    }

    /// Read-only snapshot of the vocabulary.
    pub fn items(&self) -> Rc<Vocabulary> {
        self.inner.matcher.vocabulary()
    }

    /// Match cache statistics as (hits, misses).
    pub fn cache_stats(&self) -> (usize, usize) {
        self.inner.matcher.cache_stats()
    }

    // ========== Configuration ==========

    pub fn search_mode(&self) -> SearchMode {
        self.inner.search_mode.get()
    }

    /// Change the search mode. Takes effect on the next evaluation.
    pub fn set_search_mode(&self, mode: SearchMode) {
        self.inner.search_mode.set(mode);
    }

    /// Popup delay in seconds.
    pub fn popup_delay(&self) -> f32 {
        self.inner.popup_delay.get()
    }

    /// Set the popup delay in seconds.
    ///
    /// Values outside `[0.0, 1.0]` are ignored. Requests already pending
    /// keep the delay they were created with.
    pub fn set_popup_delay(&self, secs: f32) {
        if is_valid_popup_delay(secs) {
            self.inner.popup_delay.set(secs);
        } else {
            tracing::debug!(secs, "ignoring out-of-range popup delay");
        }
    }

    /// Apply search mode and popup delay from a configuration.
    ///
    /// The cache size is fixed at construction.
    pub fn apply_config(&self, config: &Config) {
        self.set_search_mode(config.search_mode);
        self.set_popup_delay(config.popup_delay);
    }

    // ========== Vocabulary ==========

    /// Replace the vocabulary wholesale.
    ///
    /// In-flight requests are left alone; their evaluation reads whichever
    /// vocabulary is current when it runs.
    pub fn replace_items<I, S>(&self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vocabulary: Vocabulary = items.into_iter().collect();
        tracing::debug!(entries = vocabulary.len(), "vocabulary replaced");
        self.inner.matcher.replace(vocabulary);
    }

    /// Items-source change notification. A `None` source is ignored.
    pub fn set_items_source<I, S>(&self, source: Option<I>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(items) = source {
            self.replace_items(items);
        }
    }
}

impl<F, D> Drop for AutocompleteBox<F, D>
where
    F: TextField + 'static,
    D: SuggestionDisplay + 'static,
{
    fn drop(&mut self) {
        if let Some(previous) = self.inner.supersede() {
            previous.handle.abort();
        }
    }
}

impl<F, D> Inner<F, D>
where
    F: TextField + 'static,
    D: SuggestionDisplay + 'static,
{
    /// Bump the request id and release the old request slot.
    fn supersede(&self) -> Option<PendingRequest> {
        self.current_request
            .set(self.current_request.get().wrapping_add(1));
        self.pending.borrow_mut().take()
    }

    fn is_current(&self, id: u64) -> bool {
        self.current_request.get() == id
    }

    fn delay_duration(&self) -> Duration {
        Duration::from_secs_f32(self.popup_delay.get())
    }

    /// Resolve the current request, leaving the engine in `phase`.
    fn settle(&self, id: u64, phase: Phase) {
        if self.is_current(id) {
            self.phase.set(phase);
            self.pending.borrow_mut().take();
        }
    }

    async fn run_cycle(self: Rc<Self>, id: u64, delay: Duration) {
        tokio::time::sleep(delay).await;

        if !self.is_current(id) {
            tracing::debug!(request = id, "discarded after delay");
            return;
        }

        self.phase.set(Phase::Evaluating);
        self.display.clear();
        self.menu_triggered.set(false);

        let text = self.field.text();
        let query = text.trim();
        if query.is_empty() {
            tracing::debug!(request = id, "blank input, nothing to suggest");
            self.settle(id, Phase::Idle);
            return;
        }

        let matches = self.matcher.find(query, self.search_mode.get());
        let anchor = self.field.bounds().bottom_center();

        if !self.is_current(id) {
            tracing::debug!(request = id, "discarded before presenting");
            return;
        }

        tracing::debug!(request = id, query, count = matches.len(), "presenting suggestions");
        for label in matches {
            let owner = Rc::downgrade(&self);
            self.display.add_choice(Choice::new(label, move |picked| {
                if let Some(inner) = owner.upgrade() {
                    inner.commit_selection(picked);
                }
            }));
        }

        match self.display.show_at(anchor).await {
            Ok(()) if self.is_current(id) && self.phase.get() == Phase::Evaluating => {
                self.menu_triggered.set(true);
                self.settle(id, Phase::Presenting);
            }
            Ok(()) => {
                tracing::debug!(request = id, "shown after being superseded");
            }
            Err(DisplayError::TooManyShows) => {
                tracing::debug!(request = id, "display busy, suggestions skipped");
                self.settle(id, Phase::Idle);
            }
            Err(err) => {
                tracing::warn!(request = id, error = %err, "failed to show suggestions");
                self.settle(id, Phase::Idle);
            }
        }
    }

    fn commit_selection(&self, label: &str) {
        tracing::debug!(label, "suggestion selected");
        self.field.set_text(label);
        self.close_menu();
    }

    /// Drop the menu flag. A request still waiting on `show_at` is resolved
    /// here so its late confirmation cannot raise the flag again.
    fn close_menu(&self) {
        self.menu_triggered.set(false);
        match self.phase.get() {
            Phase::Presenting => self.phase.set(Phase::Idle),
            Phase::Evaluating => {
                if let Some(previous) = self.supersede() {
                    tracing::debug!(request = previous.id, "menu closed before show confirmed");
                }
                self.phase.set(Phase::Idle);
            }
            Phase::Idle | Phase::Pending => {}
        }
    }
}
