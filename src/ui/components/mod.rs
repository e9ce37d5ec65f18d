//! Reusable UI components.

mod filter_input;
mod focus;
mod help_bar;
mod popover;
mod selection;
mod tag_input;

pub use filter_input::FilterInput;
pub use focus::{Focus, FocusRing};
pub use help_bar::render_help_bar;
pub use popover::{Popover, PopoverWidth};
pub use selection::{Selection, SelectionEvent};
pub use tag_input::{TagInput, TagInputAction};
