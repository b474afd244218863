use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Implementations can use different storage backends (PostgreSQL for the
/// running service, in-memory for tests and local development).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by id descending
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by id
    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Insert a new product; availability starts as `true`
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Overwrite name, price and availability. `None` when the id is absent.
    async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Flip availability, leaving the other fields untouched. `None` when
    /// the id is absent.
    async fn toggle_availability(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Remove a product; `true` when a row was actually removed
    async fn delete(&self, id: i64) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    rows: HashMap<i64, Product>,
    next_id: i64,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        let mut products: Vec<Product> = store.rows.values().cloned().collect();
        products.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        store.next_id += 1;

        let product = Product {
            id: store.next_id,
            name: input.name,
            price: input.price,
            availability: true,
        };
        store.rows.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        match store.rows.get_mut(&id) {
            Some(product) => {
                product.name = input.name;
                product.price = input.price;
                product.availability = input.availability;

                tracing::info!(product_id = id, "Updated product");
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn toggle_availability(&self, id: i64) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        match store.rows.get_mut(&id) {
            Some(product) => {
                product.availability = !product.availability;

                tracing::info!(
                    product_id = id,
                    availability = product.availability,
                    "Toggled product availability"
                );
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.rows.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_defaults_availability() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(input("Mouse", 50.0)).await.unwrap();
        let second = repo.create(input("Keyboard", 75.0)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.availability);

        let fetched = repo.find_by_id(first.id).await.unwrap();
        assert_eq!(fetched, Some(first));
    }

    #[tokio::test]
    async fn test_list_all_orders_by_id_descending() {
        let repo = InMemoryProductRepository::new();

        for i in 1..=3 {
            repo.create(input(&format!("Product {i}"), i as f64))
                .await
                .unwrap();
        }

        let products = repo.list_all().await.unwrap();
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_update_overwrites_every_field() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Monitor", 300.0)).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateProduct {
                    name: "Curved Monitor".to_string(),
                    price: 450.0,
                    availability: false,
                },
            )
            .await
            .unwrap()
            .expect("product exists");

        assert_eq!(updated.name, "Curved Monitor");
        assert_eq!(updated.price, 450.0);
        assert!(!updated.availability);
    }

    #[tokio::test]
    async fn test_update_missing_id_returns_none() {
        let repo = InMemoryProductRepository::new();

        let result = repo
            .update(
                2000,
                UpdateProduct {
                    name: "Ghost".to_string(),
                    price: 1.0,
                    availability: true,
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_toggle_flips_only_availability() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Webcam", 120.0)).await.unwrap();

        let toggled = repo
            .toggle_availability(created.id)
            .await
            .unwrap()
            .expect("product exists");
        assert!(!toggled.availability);
        assert_eq!(toggled.name, created.name);
        assert_eq!(toggled.price, created.price);

        let toggled_back = repo
            .toggle_availability(created.id)
            .await
            .unwrap()
            .expect("product exists");
        assert!(toggled_back.availability);
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_row_was_removed() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Headset", 90.0)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }
}
