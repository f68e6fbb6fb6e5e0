//! Core data types for grid pairing.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Grid`]: The rectangular grid of colored, valued cells with its pairing queries
//! - [`Color`]: The fixed five-entry palette
//! - [`Cell`], [`Pair`]: Coordinates and proposed pairings
//!
//! ## Palette
//!
//! The palette order is part of the grid file format:
//!
//! | Index | Color | Symbol |
//! |-------|-------|--------|
//! | 0     | white | w      |
//! | 1     | red   | r      |
//! | 2     | blue  | b      |
//! | 3     | green | g      |
//! | 4     | black | k      |
//!
//! Black cells are **forbidden**: they never appear in a pair.
//!
//! [`Grid`]: grid::Grid
//! [`Color`]: types::Color
//! [`Cell`]: types::Cell
//! [`Pair`]: types::Pair

pub mod grid;
pub mod types;
