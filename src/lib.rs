//! # Darshan Rust Backend
//!
//! Crowd-prediction engine for a temple/pilgrimage information portal.
//!
//! This crate provides the Rust backend for the temple crowd-prediction
//! system: a deterministic, seeded scoring engine that classifies expected
//! crowd levels per temple and time slot, plus the aggregation layer built on
//! top of it (day/week projections, best-slot selection, cross-temple
//! analytics). The backend exposes a REST API via Axum for the web frontend.
//!
//! ## Features
//!
//! - **Scoring**: Additive, clamped crowd scores from temple category, time
//!   slot, weekend, festival, and weather factors
//! - **Seeded Randomness**: Reproducible hash-then-sine jitter so the same
//!   temple/date/slot always yields the same prediction
//! - **Projections**: Full-day and week-ahead prediction expansion
//! - **Analytics**: Weekly trend, crowd distribution, per-temple slot
//!   comparison, and today's aggregate crowd by slot
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`db`]: Temple roster repository and persistence seam
//! - [`models`]: Calendar helpers and temple domain types
//! - [`services`]: The prediction engine and analytics synthesis
//! - [`routes`]: Route-specific data types
//! - `http`: Axum-based HTTP server and request handlers
//!
//! ## Determinism
//!
//! Every engine entry point is a pure function of its explicit inputs plus
//! fixed static tables. There is no hidden clock access: functions that need
//! a reference "today" take it as a parameter, and the HTTP layer captures
//! the current UTC date once per request.

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
