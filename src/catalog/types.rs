//! Catalog types and the fixed product list.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable identifier, unique within the catalog.
    pub id: u32,
    /// Display label.
    pub name: String,
    /// Price in whole currency units.
    pub price: u64,
}

impl Product {
    fn new(id: u32, name: &str, price: u64) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
        }
    }
}

/// Response body of `GET /api/products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
}

/// Immutable, ordered product catalog.
///
/// Cloning is cheap: the products live behind an `Arc<[Product]>`.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// The catalog served by the storefront.
    pub fn reference() -> Self {
        Self::from_products(vec![
            Product::new(1, "高性能筆記型電腦", 35000),
            Product::new(2, "人體工學無線滑鼠", 800),
            Product::new(3, "RGB 機械式鍵盤", 2500),
            Product::new(4, "4K UHD 27吋顯示器", 7000),
            Product::new(5, "USB-C 萬用轉接器", 1200),
            Product::new(6, "降噪耳機", 4000),
            Product::new(7, "智慧型手錶", 9500),
            Product::new(8, "行動電源", 600),
            Product::new(9, "外接硬碟 (2TB)", 2800),
            Product::new(10, "網路攝影機", 1500),
        ])
    }

    fn from_products(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// All products, in definition order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Snapshot of the catalog as a response body.
    pub fn to_product_list(&self) -> ProductList {
        ProductList {
            products: self.products.to_vec(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_reference_catalog_has_ten_products_in_order() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.list().len(), 10);

        let ids: Vec<u32> = catalog.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_products_are_well_formed() {
        let catalog = Catalog::reference();
        let unique: HashSet<u32> = catalog.list().iter().map(|p| p.id).collect();
        assert_eq!(unique.len(), catalog.list().len());

        for product in catalog.list() {
            assert!(product.id > 0);
            assert!(!product.name.is_empty());
        }
    }

    #[test]
    fn test_listing_is_idempotent() {
        let catalog = Catalog::reference();
        let first = catalog.list().to_vec();
        let second = catalog.list().to_vec();
        assert_eq!(first, second);

        // Clones share the same backing slice.
        let clone = catalog.clone();
        assert_eq!(clone.list(), catalog.list());
    }

    #[test]
    fn test_labels_and_prices_are_the_storefront_data() {
        let catalog = Catalog::reference();
        let entries: Vec<(&str, u64)> = catalog
            .list()
            .iter()
            .map(|p| (p.name.as_str(), p.price))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("高性能筆記型電腦", 35000),
                ("人體工學無線滑鼠", 800),
                ("RGB 機械式鍵盤", 2500),
                ("4K UHD 27吋顯示器", 7000),
                ("USB-C 萬用轉接器", 1200),
                ("降噪耳機", 4000),
                ("智慧型手錶", 9500),
                ("行動電源", 600),
                ("外接硬碟 (2TB)", 2800),
                ("網路攝影機", 1500),
            ]
        );
    }

    #[test]
    fn test_product_list_serialization() {
        let body = serde_json::to_value(Catalog::reference().to_product_list()).unwrap();
        let products = body["products"].as_array().unwrap();
        assert_eq!(products.len(), 10);
        assert_eq!(
            products[0],
            serde_json::json!({"id": 1, "name": "高性能筆記型電腦", "price": 35000})
        );
        assert_eq!(products[9]["name"], "網路攝影機");
    }
}
