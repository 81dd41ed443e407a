//! HTTP server module for the courtmetrics backend.
//!
//! This module provides an axum-based HTTP server that exposes the
//! analytics engine as a REST API. It reuses the service layer, repository
//! pattern, and analytics computations from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and filter validation                  │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (store::services + services)               │
//! │  - Dataset lifecycle and axis validation                  │
//! │  - Heatmap/insight/profile/forecast computation           │
//! └───────────────────┬──────────────────────────────────────┘
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (store)                                 │
//! │  - MemoryRepository                                       │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
