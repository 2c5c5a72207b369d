//! Product catalog subsystem.
//!
//! # Data Flow
//! ```text
//! startup
//!     → Catalog::reference() (ten fixed products)
//!     → Arc<Catalog> stored in AppState
//!     → GET /api/products reads it, never writes
//! ```
//!
//! # Design Decisions
//! - The catalog is built once and never mutated, so no lock guards it
//! - Listing order is definition order

pub mod types;

pub use types::{Catalog, Product, ProductList};
