//! Melbourne train station map.
//!
//! Loads a GTFS stop list, collapses duplicate entries for the same
//! station, and serves a themed map with one marker per station.

pub mod config;
pub mod dedup;
pub mod domain;
pub mod map;
pub mod stops;
pub mod web;
