// Browser entry points: a session handle for DOM renderers and a launcher
// for the canvas game. Nothing is built on other targets.

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
pub use bindings::*;
