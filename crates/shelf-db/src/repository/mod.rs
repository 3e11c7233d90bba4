//! # Repository Module
//!
//! Database repository implementations for Shelf.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  session.products().get(7)                                     │
//! │       ▼                                                                 │
//! │  ProductRepository (borrows the session's connection)                  │
//! │  ├── create(&mut self, input)                                          │
//! │  ├── get(&mut self, id)                                                │
//! │  ├── list(&mut self, page)                                             │
//! │  ├── update(&mut self, id, patch)                                      │
//! │  └── delete(&mut self, id)                                             │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD

pub mod product;
