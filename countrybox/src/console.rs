//! Terminal stand-ins for the text field and the popup menu.

use autocomplete_core::{Anchor, Choice, DisplayError, FieldBounds, SuggestionDisplay, TextField};
use std::cell::{Cell, RefCell};

/// A single-line text field held in memory.
#[derive(Debug, Default)]
pub struct ConsoleField {
    text: RefCell<String>,
}

impl ConsoleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a typed character, as the widget would before key-up.
    pub fn type_char(&self, ch: char) {
        self.text.borrow_mut().push(ch);
    }

    pub fn clear(&self) {
        self.text.borrow_mut().clear();
    }
}

impl TextField for ConsoleField {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
        println!("  field: {}", text);
    }

    fn bounds(&self) -> FieldBounds {
        // One terminal row, as wide as the text plus the prompt
        let width = (self.text.borrow().chars().count() + 2) as f64;
        FieldBounds::new(0.0, 0.0, width, 1.0)
    }
}

/// Popup menu that prints its choices to stdout.
#[derive(Debug, Default)]
pub struct ConsolePopup {
    choices: RefCell<Vec<Choice>>,
    visible: Cell<bool>,
}

impl ConsolePopup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the 1-based `index`th choice. Returns false if there is none.
    pub fn pick(&self, index: usize) -> bool {
        let choice = {
            let mut choices = self.choices.borrow_mut();
            if index == 0 || index > choices.len() || !self.visible.get() {
                return false;
            }
            let choice = choices.remove(index - 1);
            choices.clear();
            choice
        };
        self.visible.set(false);
        choice.invoke();
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

impl SuggestionDisplay for ConsolePopup {
    fn clear(&self) {
        self.choices.borrow_mut().clear();
        self.visible.set(false);
    }

    fn add_choice(&self, choice: Choice) {
        self.choices.borrow_mut().push(choice);
    }

    async fn show_at(&self, anchor: Anchor) -> Result<(), DisplayError> {
        let choices = self.choices.borrow();
        if choices.is_empty() {
            println!("  (no matches)");
        } else {
            let line: Vec<String> = choices
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{}) {}", i + 1, c.label()))
                .collect();
            println!("  suggestions @ col {:.0}: {}", anchor.x, line.join("  "));
        }
        self.visible.set(true);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[tokio::test]
    async fn pick_invokes_choice_once_shown() {
        let popup = ConsolePopup::new();
        let picked = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&picked);
        popup.add_choice(Choice::new("Zambia", move |label| {
            *sink.borrow_mut() = Some(label.to_string())
        }));
        assert!(!popup.pick(1), "hidden popup cannot be picked from");

        popup.show_at(Anchor::default()).await.unwrap();
        assert!(popup.is_visible());
        assert!(!popup.pick(2));
        assert!(popup.pick(1));
        assert_eq!(picked.borrow().as_deref(), Some("Zambia"));
        assert!(!popup.is_visible());
    }

    #[test]
    fn field_accumulates_typed_chars() {
        let field = ConsoleField::new();
        field.type_char('b');
        field.type_char('r');
        assert_eq!(field.text(), "br");
        field.clear();
        assert_eq!(field.text(), "");
    }
}
