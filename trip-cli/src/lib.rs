//! Command-line front end for the TripCraft calculation core.
//!
//! The binary wires user arguments and CSV input files to the pure
//! functions in `trip-core`, using the reference tables shipped in
//! `trip-data`.

pub mod commands;
pub mod csv_input;
pub mod utils;
