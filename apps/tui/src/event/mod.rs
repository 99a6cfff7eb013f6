mod headless;
mod loop_handler;

pub use headless::{run_build_origins, run_headless};
pub use loop_handler::run;
