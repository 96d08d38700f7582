mod app;
pub use app::*;

pub mod input;
pub mod restart;

#[cfg(target_arch = "wasm32")]
mod window_resizing;
