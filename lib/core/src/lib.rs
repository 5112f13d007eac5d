//! Core domain types and utilities for the amber-relay portfolio site.
//!
//! This crate provides the foundational types shared by the workflow
//! document model and the canvas viewport: the error handling `Result`
//! alias and the 2D geometry primitives both layers speak in.

pub mod error;
pub mod geometry;

pub use error::Result;
pub use geometry::{Bounds, Point, Size};
