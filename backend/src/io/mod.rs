//! # IO Module
//!
//! Adapter layer between HTTP callers and the domain: request extraction,
//! JSON serialization, and mapping domain results onto the DTOs in `shared`.

pub mod rest;

pub use rest::*;
