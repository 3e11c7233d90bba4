//! # shelf-core: Pure Domain Logic for Shelf
//!
//! This crate holds the product model and every rule that can be checked
//! without touching storage.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shelf Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Router (shelf-api)                      │   │
//! │  │    POST/GET/PATCH/DELETE /products/...                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shelf-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌────────────────┐  ┌────────────────┐    │   │
//! │  │   │     types     │  │   validation   │  │     error      │    │   │
//! │  │   │  Product      │  │  name/qty/     │  │ ValidationError│    │   │
//! │  │   │  ProductPatch │  │  price/page    │  │                │    │   │
//! │  │   └───────────────┘  └────────────────┘  └────────────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 shelf-db (Storage + Product Service)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, NewProduct, ProductPatch, Page)
//! - [`error`] - Validation error type
//! - [`validation`] - Field and pagination rules
//!
//! ## Example Usage
//!
//! ```rust
//! use shelf_core::{NewProduct, ProductPatch};
//!
//! let pen = NewProduct::new("Pen", 10, 2.0);
//! assert!(pen.validate().is_ok());
//!
//! let too_many = NewProduct::new("Pen", 1001, 2.0);
//! assert!(too_many.validate().is_err());
//!
//! assert!(ProductPatch::default().is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum product name length, counted in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Smallest quantity a product may hold.
pub const MIN_QUANTITY: i64 = 1;

/// Largest quantity a product may hold.
pub const MAX_QUANTITY: i64 = 1000;

/// Smallest accepted price.
pub const MIN_PRICE: f64 = 1.0;

/// Number of rows returned by a listing when the caller gives no limit.
///
/// The HTTP boundary and [`Page::default`] share this value so there is a
/// single default everywhere.
pub const DEFAULT_LIST_LIMIT: i64 = 100;
