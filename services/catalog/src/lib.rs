//! HTTP surface of the catalog service.

pub mod adapters;
pub mod web;

/// Listen address used when `BIND_ADDRESS` is unset.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5003";
