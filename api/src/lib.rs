//! # API Layer
//!
//! HTTP surface for the onboarding backend. Routes are thin: they
//! deserialize and validate the request body, call the onboarding
//! service, and translate domain errors into the standard error
//! envelope. All business rules live in `mm_core`.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
