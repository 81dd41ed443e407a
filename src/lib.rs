//! # Courtmetrics Backend
//!
//! Facility-usage analytics engine for a sports-facility management product.
//!
//! This crate generates synthetic per-slot utilization datasets across
//! (day × hour × facility × member tier), aggregates them into hour-by-day
//! heatmap matrices, and derives summary insights (peak hour/day, prime-time
//! vs off-peak deltas, per-facility peaks). The backend exposes a REST API
//! via Axum for the React dashboard.
//!
//! ## Features
//!
//! - **Dataset Generation**: Exhaustive cross-product usage records with an
//!   injectable random source for reproducible samples
//! - **Heatmap Aggregation**: Rectangular hour × day matrices of mean usage
//!   with exact-match facility/tier filtering
//! - **Insights**: Peak detection, cohort averages, and boost percentages
//! - **Profiles & Forecast**: Secondary chart aggregations and a weekly
//!   demand forecast per facility
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifiers and public type re-exports for API consumers
//! - [`config`]: Engine configuration (tuning, operating hours, catalogs)
//! - [`models`]: Calendar primitives, usage records, and dataset types
//! - [`services`]: Pure analytics computations (generate, aggregate, derive)
//! - [`store`]: Repository pattern for dataset storage and lifecycle
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
