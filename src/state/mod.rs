//! Application state module

mod app_state;
mod forms;
mod message;
mod submission;

pub use app_state::*;
pub use forms::*;
pub use message::*;
pub use submission::*;
