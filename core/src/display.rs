//! Collaborator interfaces: the text field and the suggestion popup.
//!
//! The engine never renders anything itself. Hosts implement `TextField` for
//! their input widget and `SuggestionDisplay` for their popup/menu widget.
//! Both traits take `&self`; implementations are expected to use interior
//! mutability, as the engine and its pending cycle share them on a single
//! thread.

/// Screen-space rectangle of the text field.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FieldBounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Point centered horizontally on the bottom edge.
    pub fn bottom_center(&self) -> Anchor {
        Anchor {
            x: self.x + self.width / 2.0,
            y: self.y + self.height,
        }
    }
}

/// Where the popup should be placed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

/// The text input widget the engine is attached to.
pub trait TextField {
    /// Current text content, after the last key has been applied.
    fn text(&self) -> String;

    /// Overwrite the text content.
    fn set_text(&self, text: &str);

    /// Position of the field on screen, used to anchor the popup.
    fn bounds(&self) -> FieldBounds {
        FieldBounds::default()
    }
}

/// Errors a display can report from `show_at`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    /// Too many show requests are outstanding; the popup refused this one.
    #[error("too many concurrent show requests")]
    TooManyShows,
    /// The popup could not be shown for some other reason.
    #[error("suggestion display unavailable: {0}")]
    Unavailable(String),
}

/// A single entry in the popup.
///
/// Invoking a choice commits its label to the text field.
pub struct Choice {
    label: String,
    on_invoked: Box<dyn FnOnce(&str)>,
}

impl Choice {
    pub fn new<S, F>(label: S, on_invoked: F) -> Self
    where
        S: Into<String>,
        F: FnOnce(&str) + 'static,
    {
        Self {
            label: label.into(),
            on_invoked: Box::new(on_invoked),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Report that the user picked this choice.
    pub fn invoke(self) {
        (self.on_invoked)(&self.label)
    }
}

impl std::fmt::Debug for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Choice").field("label", &self.label).finish()
    }
}

/// The popup that lists suggestions.
///
/// The engine calls `clear`, then `add_choice` once per suggestion (at most
/// six), then awaits `show_at`. `show_at` should resolve once the popup is
/// visible; picks are reported later through `Choice::invoke`.
#[allow(async_fn_in_trait)]
pub trait SuggestionDisplay {
    /// Remove all choices (and hide the popup if it is showing).
    fn clear(&self);

    /// Append a choice.
    fn add_choice(&self, choice: Choice);

    /// Show the current choices at `anchor`.
    async fn show_at(&self, anchor: Anchor) -> Result<(), DisplayError>;
}
