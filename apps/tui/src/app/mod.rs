// App module for the impact dashboard terminal UI
// Handles screen state, key input and API-backed actions

pub mod actions;
pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, FetchRequest};
