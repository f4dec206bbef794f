//! Rules engine for grid naval combat: hidden ship placement and a
//! hunt/target attack planner.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod catalog;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placer;
mod planner;
mod shape;

pub use catalog::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::{BoardStats, Grid, PlacedShip};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placer::*;
pub use planner::*;
pub use shape::*;
