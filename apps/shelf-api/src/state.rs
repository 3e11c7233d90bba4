//! Shared application state and the per-request session extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shelf_core::DEFAULT_LIST_LIMIT;
use shelf_db::{Database, Session};

use crate::error::ApiError;

/// Shared application state.
///
/// Cloned into every handler; the pool inside [`Database`] is reference
/// counted.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,

    /// `limit` applied when a list request omits it
    pub default_list_limit: i64,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState {
            db,
            default_list_limit: DEFAULT_LIST_LIMIT,
        }
    }

    pub fn with_default_list_limit(mut self, limit: i64) -> Self {
        self.default_list_limit = limit;
        self
    }
}

/// A database session scoped to one request.
///
/// Acquired before the handler body runs and dropped when the handler
/// future completes, which returns the connection to the pool.
///
/// ```rust,ignore
/// async fn handler(DbSession(mut session): DbSession) -> ApiResult<Json<Vec<Product>>> {
///     Ok(Json(session.products().list(Page::default()).await?))
/// }
/// ```
#[derive(Debug)]
pub struct DbSession(pub Session);

impl FromRequestParts<AppState> for DbSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state.db.session().await?;
        Ok(DbSession(session))
    }
}
