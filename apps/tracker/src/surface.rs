//! # Presentation Surface
//!
//! The interface the tracker renders through. Any front end (web view,
//! terminal, test recorder) implements it; the tracker makes no assumption
//! about rendering technology.
//!
//! ## What Flows Where
//! ```text
//! ┌───────────────────────────┐              ┌───────────────────────────┐
//! │         Tracker           │              │   PresentationSurface     │
//! │                           │ ◄─ input ─── │  item_input()             │
//! │                           │              │                           │
//! │                           │ ── items ──► │  populate_item_list()     │
//! │                           │              │  add/update/delete row    │
//! │                           │ ── total ──► │  show_total_calories()    │
//! │                           │ ── mode ───► │  show/clear_edit_state()  │
//! └───────────────────────────┘              └───────────────────────────┘
//! ```

use calorie_core::{Item, ItemId};

/// Raw form contents, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemInput {
    pub name: String,
    pub calories: String,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, calories: impl Into<String>) -> Self {
        ItemInput {
            name: name.into(),
            calories: calories.into(),
        }
    }

    /// Either field is blank; such submissions are ignored.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() || self.calories.trim().is_empty()
    }
}

/// Rendering and input collaborator.
pub trait PresentationSurface {
    /// Reads the item form.
    fn item_input(&self) -> ItemInput;

    /// Renders the full list, replacing what is shown.
    fn populate_item_list(&mut self, items: &[Item]);

    /// Appends one row (and shows the list if hidden).
    fn add_list_item(&mut self, item: &Item);

    /// Re-renders the row for `item.id`.
    fn update_list_item(&mut self, item: &Item);

    /// Removes the row for `id`.
    fn delete_list_item(&mut self, id: ItemId);

    /// Removes every row.
    fn clear_list(&mut self);

    /// Hides the (empty) list.
    fn hide_list(&mut self);

    fn show_total_calories(&mut self, total: i64);

    /// Empties the item form.
    fn clear_input(&mut self);

    /// Loads `item` into the form for editing.
    fn fill_edit_form(&mut self, item: &Item);

    /// Switches the form to edit mode (update / delete / back).
    fn show_edit_state(&mut self);

    /// Switches the form back to add mode.
    fn clear_edit_state(&mut self);
}
