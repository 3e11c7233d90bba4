//! # Product Repository
//!
//! The product service: validated CRUD over the `products` table.
//!
//! ## Key Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Operations                                   │
//! │                                                                         │
//! │  create(NewProduct)        validate → INSERT … RETURNING → Product     │
//! │  get(id)                   SELECT → Option<Product>                    │
//! │  list(Page)                validate → ORDER BY id DESC LIMIT/OFFSET    │
//! │  update(id, ProductPatch)  validate → UPDATE … COALESCE … RETURNING    │
//! │                            → Option<Product>                           │
//! │  delete(id)                DELETE → bool                               │
//! │                                                                         │
//! │  Absent rows are None / false, never an error.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::DbResult;
use shelf_core::{NewProduct, Page, Product, ProductPatch};

/// Repository for product database operations.
///
/// Borrowed from a [`Session`](crate::Session); every call runs on the
/// session's connection.
///
/// ## Usage
/// ```rust,ignore
/// let mut session = db.session().await?;
///
/// let pen = session.products().create(&NewProduct::new("Pen", 10, 2.0)).await?;
/// let newest = session.products().list(Page::new(0, 10)).await?;
/// ```
#[derive(Debug)]
pub struct ProductRepository<'s> {
    conn: &'s mut SqliteConnection,
}

impl<'s> ProductRepository<'s> {
    /// Creates a repository over a borrowed connection.
    pub fn new(conn: &'s mut SqliteConnection) -> Self {
        ProductRepository { conn }
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored record, including its assigned id
    /// * `Err(DbError::Validation)` - A field rule failed; nothing was written
    /// * `Err(DbError::ConstraintViolation)` - The name is already taken
    pub async fn create(&mut self, input: &NewProduct) -> DbResult<Product> {
        input.validate()?;

        debug!(name = %input.name, "Creating product");

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (product_name, product_quantity, product_price)
            VALUES (?1, ?2, ?3)
            RETURNING product_id, product_name, product_quantity, product_price
            "#,
        )
        .bind(&input.name)
        .bind(input.quantity)
        .bind(input.price)
        .fetch_one(&mut *self.conn)
        .await?;

        debug!(id = product.id, "Product created");
        Ok(product)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No product has this id
    pub async fn get(&mut self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, product_name, product_quantity, product_price
            FROM products
            WHERE product_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(product)
    }

    /// Lists products, newest first.
    ///
    /// Ordering is by id descending; `page.skip` rows are skipped and at
    /// most `page.limit` rows are returned.
    ///
    /// ## Errors
    /// `DbError::Validation` if `skip` or `limit` is negative.
    pub async fn list(&mut self, page: Page) -> DbResult<Vec<Product>> {
        page.validate()?;

        debug!(skip = page.skip, limit = page.limit, "Listing products");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, product_name, product_quantity, product_price
            FROM products
            ORDER BY product_id DESC
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(&mut *self.conn)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Applies a merge-patch to a product.
    ///
    /// The merge is one `UPDATE` statement: a column takes the patch value
    /// when one was provided and keeps its stored value otherwise. Last
    /// writer wins. An empty patch writes nothing and returns the current
    /// record.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - The record after the update
    /// * `Ok(None)` - No product has this id
    /// * `Err(DbError::Validation)` - A provided field failed its rule
    /// * `Err(DbError::ConstraintViolation)` - The new name is already taken
    pub async fn update(&mut self, id: i64, patch: &ProductPatch) -> DbResult<Option<Product>> {
        patch.validate()?;

        if patch.is_empty() {
            return self.get(id).await;
        }

        debug!(id = id, "Updating product");

        let updated = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                product_name = COALESCE(?2, product_name),
                product_quantity = COALESCE(?3, product_quantity),
                product_price = COALESCE(?4, product_price)
            WHERE product_id = ?1
            RETURNING product_id, product_name, product_quantity, product_price
            "#,
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.quantity)
        .bind(patch.price)
        .fetch_optional(&mut *self.conn)
        .await?;

        if updated.is_none() {
            debug!(id = id, "Product not found for update");
        }

        Ok(updated)
    }

    /// Permanently deletes a product.
    ///
    /// ## Returns
    /// * `Ok(true)` - The row was removed
    /// * `Ok(false)` - No product has this id
    pub async fn delete(&mut self, id: i64) -> DbResult<bool> {
        debug!(id = id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE product_id = ?1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts stored products (for diagnostics and seeding).
    pub async fn count(&mut self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError, Session};
    use shelf_core::{NewProduct, Page, ProductPatch, ValidationError};

    async fn session() -> (Database, Session) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let session = db.session().await.unwrap();
        (db, session)
    }

    async fn seed(session: &mut Session, names: &[&str]) -> Vec<i64> {
        let mut ids = Vec::new();
        for name in names {
            let product = session
                .products()
                .create(&NewProduct::new(*name, 10, 2.0))
                .await
                .unwrap();
            ids.push(product.id);
        }
        ids
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let (_db, mut session) = session().await;

        let created = session
            .products()
            .create(&NewProduct::new("Pen", 10, 2.0))
            .await
            .unwrap();

        assert_eq!(created.name, "Pen");
        assert_eq!(created.quantity, 10);
        assert_eq!(created.price, 2.0);

        let fetched = session.products().get(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_duplicate_name_is_constraint_violation() {
        let (_db, mut session) = session().await;

        session
            .products()
            .create(&NewProduct::new("Pen", 10, 2.0))
            .await
            .unwrap();

        let err = session
            .products()
            .create(&NewProduct::new("Pen", 5, 3.0))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ConstraintViolation { .. }));
        assert_eq!(session.products().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_storage() {
        let (_db, mut session) = session().await;

        let err = session
            .products()
            .create(&NewProduct::new("", 10, 2.0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DbError::Validation(ValidationError::Required { .. })
        ));

        assert_eq!(session.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_quantity_boundaries() {
        let (_db, mut session) = session().await;
        let mut products = session.products();

        for rejected in [0, 1001] {
            let err = products
                .create(&NewProduct::new(format!("q{}", rejected), rejected, 2.0))
                .await
                .unwrap_err();
            assert!(matches!(err, DbError::Validation(_)));
        }

        for accepted in [1, 1000] {
            let product = products
                .create(&NewProduct::new(format!("q{}", accepted), accepted, 2.0))
                .await
                .unwrap();
            assert_eq!(product.quantity, accepted);
        }
    }

    #[tokio::test]
    async fn test_price_boundaries() {
        let (_db, mut session) = session().await;
        let mut products = session.products();

        let err = products
            .create(&NewProduct::new("free", 1, 0.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));

        let product = products
            .create(&NewProduct::new("cheap", 1, 1.0))
            .await
            .unwrap();
        assert_eq!(product.price, 1.0);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let (_db, mut session) = session().await;
        let ids = seed(&mut session, &["P1", "P2", "P3", "P4", "P5"]).await;

        let listed = session.products().list(Page::default()).await.unwrap();
        let listed_ids: Vec<i64> = listed.iter().map(|p| p.id).collect();

        let mut expected = ids.clone();
        expected.reverse();
        assert_eq!(listed_ids, expected);
    }

    #[tokio::test]
    async fn test_list_skip_and_limit() {
        let (_db, mut session) = session().await;
        seed(&mut session, &["P1", "P2", "P3", "P4", "P5"]).await;

        let listed = session.products().list(Page::new(1, 2)).await.unwrap();
        let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();

        // 2nd and 3rd newest
        assert_eq!(names, vec!["P4", "P3"]);
    }

    #[tokio::test]
    async fn test_list_edge_pages() {
        let (_db, mut session) = session().await;
        seed(&mut session, &["P1", "P2"]).await;

        assert!(session.products().list(Page::new(0, 0)).await.unwrap().is_empty());
        assert!(session.products().list(Page::new(5, 10)).await.unwrap().is_empty());
        assert_eq!(
            session.products().list(Page::new(0, i64::MAX)).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_list_rejects_negative_page() {
        let (_db, mut session) = session().await;

        let err = session.products().list(Page::new(-1, 10)).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(ValidationError::Negative { .. })));

        let err = session.products().list(Page::new(0, -1)).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(ValidationError::Negative { .. })));
    }

    #[tokio::test]
    async fn test_update_merges_only_provided_fields() {
        let (_db, mut session) = session().await;
        let ids = seed(&mut session, &["Pen"]).await;

        let updated = session
            .products()
            .update(ids[0], &ProductPatch::default().quantity(20))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, ids[0]);
        assert_eq!(updated.name, "Pen");
        assert_eq!(updated.quantity, 20);
        assert_eq!(updated.price, 2.0);

        let stored = session.products().get(ids[0]).await.unwrap();
        assert_eq!(stored, Some(updated));
    }

    #[tokio::test]
    async fn test_update_with_empty_patch_returns_record_unchanged() {
        let (_db, mut session) = session().await;
        let ids = seed(&mut session, &["Pen"]).await;
        let before = session.products().get(ids[0]).await.unwrap();

        let after = session
            .products()
            .update(ids[0], &ProductPatch::default())
            .await
            .unwrap();

        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_update_validates_provided_fields() {
        let (_db, mut session) = session().await;
        let ids = seed(&mut session, &["Pen"]).await;

        let err = session
            .products()
            .update(ids[0], &ProductPatch::default().price(0.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));

        let stored = session.products().get(ids[0]).await.unwrap().unwrap();
        assert_eq!(stored.price, 2.0);
    }

    #[tokio::test]
    async fn test_rename_onto_existing_name_is_constraint_violation() {
        let (_db, mut session) = session().await;
        let ids = seed(&mut session, &["Pen", "Pencil"]).await;

        let err = session
            .products()
            .update(ids[1], &ProductPatch::default().name("Pen"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ConstraintViolation { .. }));

        // The rejected statement left the row alone and the session usable
        let pencil = session.products().get(ids[1]).await.unwrap().unwrap();
        assert_eq!(pencil.name, "Pencil");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(DbConfig::new(dir.path().join("shelf.db")).max_connections(5))
            .await
            .unwrap();

        let id = {
            let mut session = db.session().await.unwrap();
            let ids = seed(&mut session, &["Pen"]).await;
            ids[0]
        };

        let mut tasks = Vec::new();
        for n in 0..100_i64 {
            let db = db.clone();
            tasks.push(tokio::spawn(async move {
                let mut session = db.session().await?;
                let patch = if n % 2 == 0 {
                    ProductPatch::default().quantity(1 + n % 1000)
                } else {
                    ProductPatch::default().price(1.0 + n as f64)
                };
                let updated = session.products().update(id, &patch).await;
                updated
            }));
        }

        let mut failures = Vec::new();
        for task in tasks {
            match task.await.unwrap() {
                Ok(updated) => assert!(updated.is_some()),
                Err(e) => failures.push(e.to_string()),
            }
        }
        assert!(failures.is_empty(), "updates failed: {:?}", failures);

        // Every patch touched one column; the name was never rewritten
        let mut session = db.session().await.unwrap();
        let pen = session.products().get(id).await.unwrap().unwrap();
        assert_eq!(pen.name, "Pen");
    }

    #[tokio::test]
    async fn test_update_keeps_unpatched_columns_under_interleaving() {
        let (_db, mut session) = session().await;
        let ids = seed(&mut session, &["Pen"]).await;

        session
            .products()
            .update(ids[0], &ProductPatch::default().quantity(7))
            .await
            .unwrap();
        let pen = session
            .products()
            .update(ids[0], &ProductPatch::default().price(9.5))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(pen.quantity, 7);
        assert_eq!(pen.price, 9.5);
    }

    #[tokio::test]
    async fn test_missing_ids_are_absent_not_errors() {
        let (_db, mut session) = session().await;

        assert_eq!(session.products().get(42).await.unwrap(), None);
        assert_eq!(
            session
                .products()
                .update(42, &ProductPatch::default().quantity(5))
                .await
                .unwrap(),
            None
        );
        assert!(!session.products().delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_absent() {
        let (_db, mut session) = session().await;
        let ids = seed(&mut session, &["Pen"]).await;

        assert!(session.products().delete(ids[0]).await.unwrap());
        assert_eq!(session.products().get(ids[0]).await.unwrap(), None);
        assert!(!session.products().delete(ids[0]).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let (_db, mut session) = session().await;
        let ids = seed(&mut session, &["A", "B"]).await;

        session.products().delete(ids[1]).await.unwrap();
        let c = seed(&mut session, &["C"]).await;

        assert!(c[0] > ids[1]);
    }

    #[tokio::test]
    async fn test_pen_scenario() {
        let (_db, mut session) = session().await;
        let mut products = session.products();

        let pen = products.create(&NewProduct::new("Pen", 10, 2.0)).await.unwrap();
        assert_eq!(pen.id, 1);

        let dup = products.create(&NewProduct::new("Pen", 5, 3.0)).await;
        assert!(matches!(dup, Err(DbError::ConstraintViolation { .. })));

        assert_eq!(products.get(1).await.unwrap(), Some(pen.clone()));

        let updated = products
            .update(1, &ProductPatch::default().quantity(20))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.quantity, 20);
        assert_eq!(updated.name, "Pen");
        assert_eq!(updated.price, 2.0);

        assert!(products.delete(1).await.unwrap());
        assert_eq!(products.get(1).await.unwrap(), None);
    }
}
