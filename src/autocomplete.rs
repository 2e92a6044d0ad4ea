pub mod autocomplete_render;
pub mod autocomplete_state;
pub mod filter;

pub use autocomplete_state::AutocompleteState;
pub use filter::{MAX_SUGGESTIONS, MatchMode, filter_municipalities};
