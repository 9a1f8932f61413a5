//! Sysfacts — inventories a running desktop Linux installation and serves
//! the aggregated result as a single JSON document over local HTTP.
//!
//! Two layers: `collectors` holds the independent best-effort probes and the
//! report assembly, `api` holds the axum router and error mapping.

pub mod api;
pub mod catalog;
pub mod collectors;
