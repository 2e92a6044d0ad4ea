pub mod input_events;
mod input_state;

pub use input_state::InputState;
