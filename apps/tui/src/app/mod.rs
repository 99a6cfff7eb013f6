// App module for the pasture dashboard
// Handles application state and resource loading

pub mod actions;
pub mod input;
pub mod state;

pub use actions::{AppActions, LoadEvent};
pub use input::handle_input;
pub use state::App;
