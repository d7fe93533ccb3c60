//! Seed catalog written on first run.
//!
//! The catalog is static: products are never created, updated, or deleted
//! through the API, so this is the complete product set.

use super::document::{Product, StoreDocument};

/// Build the document written when no data file exists yet.
pub fn seed_document() -> StoreDocument {
    StoreDocument {
        products: seed_products(),
        orders: Vec::new(),
        order_seq: 0,
    }
}

/// The two sample products every fresh install starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Classic White T-Shirt".to_string(),
            category: "t-shirts".to_string(),
            price: 19.99,
            discounted_price: None,
            description: "A comfortable and versatile white t-shirt that goes with everything."
                .to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?q=80&w=500&auto=format&fit=crop"
                    .to_string(),
            ],
            sizes: vec![
                "S".to_string(),
                "M".to_string(),
                "L".to_string(),
                "XL".to_string(),
            ],
            colors: vec![
                "white".to_string(),
                "black".to_string(),
                "gray".to_string(),
            ],
            in_stock: true,
            featured: true,
        },
        Product {
            id: "2".to_string(),
            name: "Slim Fit Jeans".to_string(),
            category: "pants".to_string(),
            price: 49.99,
            discounted_price: Some(39.99),
            description: "Modern slim fit jeans with a comfortable stretch fabric.".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1542272604-787c3835535d?q=80&w=500&auto=format&fit=crop"
                    .to_string(),
            ],
            sizes: vec![
                "28".to_string(),
                "30".to_string(),
                "32".to_string(),
                "34".to_string(),
                "36".to_string(),
            ],
            colors: vec![
                "blue".to_string(),
                "black".to_string(),
                "gray".to_string(),
            ],
            in_stock: true,
            featured: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_two_featured_products_and_no_orders() {
        let doc = seed_document();
        assert_eq!(doc.products.len(), 2);
        assert!(doc.products.iter().all(|p| p.featured));
        assert!(doc.orders.is_empty());
        assert_eq!(doc.order_seq, 0);
    }

    #[test]
    fn seed_product_ids_are_unique() {
        let doc = seed_document();
        let mut ids: Vec<_> = doc.products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), doc.products.len());
    }

    #[test]
    fn seed_contains_one_t_shirt() {
        let doc = seed_document();
        let shirts = doc.products_in_category("t-shirts");
        assert_eq!(shirts.len(), 1);
        assert_eq!(shirts[0].name, "Classic White T-Shirt");
    }
}
