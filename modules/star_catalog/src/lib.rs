//! Star catalog module: populates a relational store from an external
//! galaxy-catalog API and serves read endpoints plus per-user favorites.

// === PUBLIC CONTRACT ===
// Pure models other crates consume; no serde, no storage types.
pub mod contract;

// Module configuration (upstream endpoint, caller identity).
pub mod config;

// === INTERNAL LAYERS ===
// Exposed for the server binary and integration tests; the stable surface
// for other consumers is the `contract` module.
pub mod api;
pub mod domain;
pub mod infra;
