//! Engine for a 2048 variant played on a large grid with a pannable window.
//!
//! [`Board`] slides and merges tiles over the whole grid, [`Window`] tracks
//! the highlighted sub-square, and [`Session`] ties both to a random source
//! and a [`SessionConfig`]. Presentation layers only send [`Command`]s and
//! read back [`Session::grid`] and [`Session::window_bounds`].

mod board;
pub use board::*;

mod config;
pub use config::*;

mod direction;
pub use direction::*;

mod rng;
pub use rng::*;

mod session;
pub use session::*;

mod window;
pub use window::*;
