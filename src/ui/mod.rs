//! User interface components and views.

mod components;
pub mod theme;
mod views;

pub use components::{
    render_help_bar, FilterInput, Focus, FocusRing, Popover, PopoverWidth, Selection,
    SelectionEvent, TagInput, TagInputAction,
};
pub use theme::{init_theme, theme, Theme};
pub use views::{PickerAction, PickerView};
