//! HTTP surface of the cart service.

pub mod web;

/// Listen address used when `BIND_ADDRESS` is unset.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5001";
