//! # shelf-db: Database Layer for Shelf
//!
//! This crate is the storage gateway and the product service. It uses SQLite
//! through sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shelf Data Flow                                  │
//! │                                                                         │
//! │  HTTP handler (PATCH /products/7)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     shelf-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │   Session     │    │   Schema     │  │   │
//! │  │   │   (pool.rs)   │───►│ (session.rs)  │    │ (schema.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │    │ one conn per  │    │ bootstrap    │  │   │
//! │  │   │ bootstrap()   │    │ request       │    │ products     │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                ▼                                │   │
//! │  │                       ProductRepository                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`session`] - Per-request unit of work
//! - [`schema`] - Product table bootstrap
//! - [`error`] - Database error types
//! - [`repository`] - Product service
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shelf_core::{NewProduct, Page};
//! use shelf_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/shelf.db")).await?;
//!
//! let mut session = db.session().await?;
//! session.products().create(&NewProduct::new("Pen", 10, 2.0)).await?;
//! let newest = session.products().list(Page::default()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
pub use session::Session;
