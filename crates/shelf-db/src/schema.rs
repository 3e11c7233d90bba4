//! # Table Bootstrap
//!
//! The schema is one fixed table, so there is no migration history: at
//! startup the table is created if it is missing, and that is all.
//!
//! ## Bootstrap Process
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bootstrap Process                                  │
//! │                                                                         │
//! │  Server Startup                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Look up `products` in sqlite_master                                   │
//! │       │                                                                 │
//! │       ├── present? → done (nothing to do)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS products (...)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Server continues startup (errors are logged by the caller, never      │
//! │  propagated to main)                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Layout
//! | column             | type    | notes                         |
//! |--------------------|---------|-------------------------------|
//! | `product_id`       | INTEGER | primary key, never reused     |
//! | `product_name`     | TEXT    | NOT NULL, UNIQUE              |
//! | `product_quantity` | INTEGER | NOT NULL                      |
//! | `product_price`    | REAL    | NOT NULL                      |

use sqlx::SqlitePool;

use crate::error::DbResult;

/// Name of the product table.
pub const PRODUCT_TABLE: &str = "products";

/// DDL for the product table.
///
/// `AUTOINCREMENT` keeps ids strictly increasing even after the newest row
/// is deleted, so "highest id" always means "most recently created".
const CREATE_PRODUCT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    product_id       INTEGER PRIMARY KEY AUTOINCREMENT,
    product_name     TEXT    NOT NULL UNIQUE,
    product_quantity INTEGER NOT NULL,
    product_price    REAL    NOT NULL
)
"#;

/// Returns whether the product table exists.
pub async fn product_table_exists(pool: &SqlitePool) -> DbResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(PRODUCT_TABLE)
            .fetch_one(pool)
            .await?;

    Ok(count > 0)
}

/// Creates the product table if it is absent.
///
/// ## Returns
/// * `Ok(true)` - The table was created by this call
/// * `Ok(false)` - The table was already there
pub async fn ensure_product_table(pool: &SqlitePool) -> DbResult<bool> {
    if product_table_exists(pool).await? {
        return Ok(false);
    }

    sqlx::query(CREATE_PRODUCT_TABLE).execute(pool).await?;
    Ok(true)
}

// =============================================================================
// Unit Tests
// =============================================================================
