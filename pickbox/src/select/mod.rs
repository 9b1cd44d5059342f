//! Searchable dropdown select widget.
//!
//! A [`SearchSelect`] owns an option registry, a selection (single or
//! multi), a live substring search filter, and the open/closed interaction
//! state. State lives behind shared handles, so event handlers and the
//! render loop hold clones of the same widget. Hosts drain Change and
//! Search notifications with [`SearchSelect::take_events`] and route
//! outside clicks through a [`DismissRouter`].

pub mod events;
pub mod filter;
pub mod option;
pub mod render;
pub mod selection;
mod state;

pub use events::DismissRouter;
pub use filter::substring_filter;
pub use option::{OptionItem, SelectOption};
pub use render::{MAX_DROPDOWN_ROWS, TagRegion, render};
pub use selection::{SelectMode, Selection};
pub use state::{SearchSelect, SearchSelectId, ValueError};
