//! Perfhub - Performance Review Platform backend.
//!
//! Implements OKR tracking, 360-degree review cycles, peer feedback,
//! time tracking, and AI-assisted review scoring behind a JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
