//! Tile grid rasterization of circles and ellipses.
//!
//! The shape algorithms in [`graphics::midpoint`] and [`graphics::ellipse`]
//! are pure functions producing tile coordinates. [`graphics::dome`] lays
//! those coordinates out on a grid and hands each tile to a
//! [`graphics::tiles::TilePainter`].

#[cfg(test)]
#[macro_use]
extern crate parameterized;

pub mod error;
pub mod geometry;
pub mod graphics;
pub mod input;

pub use crate::error::{Error, Result};
