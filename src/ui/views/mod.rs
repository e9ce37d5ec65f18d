//! Screen-level views.

mod picker;

pub use picker::{PickerAction, PickerView};
