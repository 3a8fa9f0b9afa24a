//! Temple roster storage.
//!
//! This module provides the repository seam between the prediction endpoints
//! and whatever owns the canonical temple roster, via the Repository pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, tests)                     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository.rs) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │      (in-memory, seeded or TOML-loaded)       │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The hosted relational backend that persists bookings, festivals, and
//! alerts is an external collaborator; nothing here talks SQL. The local
//! repository carries the roster the engine needs, seeded from the built-in
//! reference data or from a TOML roster file (see [`roster`]).

pub mod repositories;
pub mod repository;
pub mod roster;

pub use repositories::LocalRepository;
pub use repository::{RepositoryError, RepositoryResult, TempleRepository};
