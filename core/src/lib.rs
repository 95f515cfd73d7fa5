//! autocomplete-core
//!
//! Debounced, cancellable autocomplete suggestions for a text field.
//!
//! The host feeds key-release events into an `AutocompleteBox`. Content keys
//! (letters, digits, numpad digits, space) restart a short quiet period; when
//! it elapses without another keystroke, the field text is matched against
//! the vocabulary and up to six suggestions are handed to the display.
//! Requests made stale by a later keystroke never reach the display.
//!
//! Public API:
//! - `AutocompleteBox` - The debounce-and-match engine
//! - `KeyEvent` / `should_trigger` - Key decoding and the input filter
//! - `Vocabulary` - Set of suggestion strings
//! - `SearchMode` / `Matcher` - Matching predicate and cached matcher
//! - `TextField` / `SuggestionDisplay` - Collaborator traits implemented by hosts
//! - `Config` - Configuration, loadable from TOML

pub mod config;
pub use config::{Config, DEFAULT_POPUP_DELAY};

pub mod display;
pub use display::{Anchor, Choice, DisplayError, FieldBounds, SuggestionDisplay, TextField};

pub mod engine;
pub use engine::{AutocompleteBox, Phase};

pub mod filter;
pub use filter::{should_trigger, should_trigger_code};

pub mod key_event;
pub use key_event::KeyEvent;

pub mod matcher;
pub use matcher::{find_matches, Matcher, SearchMode, MAX_SUGGESTIONS};

pub mod vocabulary;
pub use vocabulary::Vocabulary;
