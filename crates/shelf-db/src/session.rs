//! # Session (Unit of Work)
//!
//! A session is one pooled connection scoped to one request.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session Lifecycle                                │
//! │                                                                         │
//! │  db.session().await?          ← acquire (may time out → Storage)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  session.products().create(..)                                         │
//! │  session.products().get(..)    ← any number of operations              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  drop(session)                ← ALWAYS runs: success, `?` early        │
//! │                                  return, panic unwind, cancelled       │
//! │                                  future. Connection goes back to pool. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Release is tied to `Drop`, so there is no explicit `close()` to forget.

use sqlx::pool::PoolConnection;
use sqlx::Sqlite;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::repository::product::ProductRepository;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// A scoped handle to one database connection.
pub struct Session {
    /// Process-unique id, used to correlate log lines.
    id: u64,
    conn: PoolConnection<Sqlite>,
}

impl Session {
    pub(crate) fn new(conn: PoolConnection<Sqlite>) -> Self {
        let id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
        debug!(session = id, "Session acquired");
        Session { id, conn }
    }

    /// Returns the product service bound to this session.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let mut session = db.session().await?;
    /// let pen = session.products().create(&NewProduct::new("Pen", 10, 2.0)).await?;
    /// ```
    pub fn products(&mut self) -> ProductRepository<'_> {
        ProductRepository::new(&mut self.conn)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("id", &self.id).finish()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // The PoolConnection field returns itself to the pool right after this.
        debug!(session = self.id, "Session released");
    }
}
