//! Vector and 4x4 matrix primitives for graphics-style transforms.
//!
//! Matrices are row-major and compose right to left:
//! `translate * rotate * scale` scales a point first.

#[macro_use] extern crate log;

pub mod alg;
pub mod graphics;
pub mod config;
pub mod debug;
pub mod error;

pub use alg::{Vec2, Vec3, Vec4, Mat};
pub use graphics::Color;
pub use error::{Error, Result};
