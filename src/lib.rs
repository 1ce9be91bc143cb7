#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
mod intent;
#[cfg(feature = "std")]
mod logging;
mod players;
pub mod prelude;
mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use intent::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use players::*;
pub use session::*;
