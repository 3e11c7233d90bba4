//! # Domain Types
//!
//! Core domain types used throughout Shelf.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   NewProduct    │   │  ProductPatch   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (storage)   │   │  name           │   │  name?          │       │
//! │  │  name (unique)  │   │  quantity       │   │  quantity?      │       │
//! │  │  quantity       │   │  price          │   │  price?         │       │
//! │  │  price          │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                        ┌─────────────────┐                              │
//! │                        │      Page       │                              │
//! │                        │  skip, limit    │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by storage when the row is inserted and never changes.
//! Every other field is mutable through [`ProductPatch`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::validation::{
    validate_page, validate_price, validate_product_name, validate_quantity, ValidationResult,
};
use crate::{DEFAULT_LIST_LIMIT, MIN_QUANTITY};

// =============================================================================
// Product
// =============================================================================

/// A product tracked in the inventory.
///
/// Both the JSON keys and the `products` columns carry a `product_` prefix:
/// `{"product_id": 1, "product_name": "Pen", "product_quantity": 10,
/// "product_price": 2.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Identity assigned by storage.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "product_id"))]
    #[serde(rename = "product_id")]
    #[ts(type = "number")]
    pub id: i64,

    /// Display name, unique across all products.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "product_name"))]
    #[serde(rename = "product_name")]
    pub name: String,

    /// Units on hand (1..=1000).
    #[cfg_attr(feature = "sqlx", sqlx(rename = "product_quantity"))]
    #[serde(rename = "product_quantity")]
    #[ts(type = "number")]
    pub quantity: i64,

    /// Unit price (>= 1).
    #[cfg_attr(feature = "sqlx", sqlx(rename = "product_price"))]
    #[serde(rename = "product_price")]
    pub price: f64,
}

// =============================================================================
// New Product
// =============================================================================

/// Payload for creating a product.
///
/// `product_quantity` may be omitted and then defaults to
/// [`MIN_QUANTITY`](crate::MIN_QUANTITY).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    #[serde(rename = "product_name")]
    pub name: String,

    #[serde(rename = "product_quantity", default = "default_quantity")]
    #[ts(type = "number")]
    pub quantity: i64,

    #[serde(rename = "product_price")]
    pub price: f64,
}

fn default_quantity() -> i64 {
    MIN_QUANTITY
}

impl NewProduct {
    /// Creates a new creation payload.
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        NewProduct {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Checks every field against the product rules.
    ///
    /// Fields are checked in declaration order and the first failure wins.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_name(&self.name)?;
        validate_quantity(self.quantity)?;
        validate_price(self.price)?;
        Ok(())
    }
}

// =============================================================================
// Product Patch
// =============================================================================

/// Sparse update payload (merge-patch).
///
/// Each field is independently optional. A field that is `None` was not
/// provided and leaves the stored value untouched; in JSON, an omitted key and
/// an explicit `null` both deserialize to `None`.
///
/// ```text
///   stored:  { product_name: "Pen", product_quantity: 10, product_price: 2 }
///   patch:   { product_quantity: 20 }
///   result:  { product_name: "Pen", product_quantity: 20, product_price: 2 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ProductPatch {
    #[serde(rename = "product_name")]
    pub name: Option<String>,

    #[serde(rename = "product_quantity")]
    #[ts(type = "number | null")]
    pub quantity: Option<i64>,

    #[serde(rename = "product_price")]
    pub price: Option<f64>,
}

impl ProductPatch {
    /// Returns true when no field was provided.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.price.is_none()
    }

    /// Checks the provided fields with the same rules as [`NewProduct`].
    pub fn validate(&self) -> ValidationResult<()> {
        if let Some(name) = &self.name {
            validate_product_name(name)?;
        }
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }

    /// Sets the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the quantity.
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

// =============================================================================
// Page
// =============================================================================

/// Offset pagination for product listings.
///
/// Listings are always ordered newest first (descending id); `skip` rows are
/// dropped from the front and at most `limit` rows are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Page {
    /// Creates a page.
    pub const fn new(skip: i64, limit: i64) -> Self {
        Page { skip, limit }
    }

    /// Rejects negative offsets and limits.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_page(self.skip, self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::new(0, DEFAULT_LIST_LIMIT)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
