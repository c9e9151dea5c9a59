//! # REST API Interface Layer
//!
//! HTTP endpoints for the prayer time service. Handlers log the route, hand
//! the request to a domain service, and translate the outcome into a status
//! code and JSON body. No business logic lives here.

pub mod calendar_apis;
pub mod mappers;
pub mod prayer_time_apis;

pub use prayer_time_apis::*;
