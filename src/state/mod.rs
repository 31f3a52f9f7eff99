//! Application state module

mod app_state;
mod forms;
mod quote;
pub(crate) mod validation;

pub use app_state::*;
pub use forms::*;
pub use quote::*;
