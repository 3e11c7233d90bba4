//! # HTTP Handlers
//!
//! Thin adapters: decode the request, call the product service on the
//! request's session, encode the result.
//!
//! ## Handlers
//! - [`product`] - `/products` CRUD
//! - [`health`] - `/health` liveness check

pub mod health;
pub mod product;
