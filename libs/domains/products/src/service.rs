//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer between handlers and the repository.
///
/// Carries the existence branching: a repository answering `None`/`false`
/// for an addressed id becomes [`ProductError::NotFound`] here, so the
/// handlers stay thin.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.create(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i64, input: UpdateProduct) -> ProductResult<Product> {
        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .toggle_availability(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn product(id: i64) -> Product {
        Product {
            id,
            name: "Mouse".to_string(),
            price: 50.0,
            availability: true,
        }
    }

    #[tokio::test]
    async fn test_get_product_maps_absence_to_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .with(eq(2000))
            .returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let result = service.get_product(2000).await;

        assert!(matches!(result, Err(ProductError::NotFound(2000))));
    }

    #[tokio::test]
    async fn test_get_product_returns_existing_row() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(product(id))));

        let service = ProductService::new(repo);
        let found = service.get_product(1).await.unwrap();

        assert_eq!(found.id, 1);
    }

    #[tokio::test]
    async fn test_update_product_maps_absence_to_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let service = ProductService::new(repo);
        let result = service
            .update_product(
                5,
                UpdateProduct {
                    name: "Monitor".to_string(),
                    price: 300.0,
                    availability: true,
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(5))));
    }

    #[tokio::test]
    async fn test_toggle_availability_maps_absence_to_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_toggle_availability().returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let result = service.toggle_availability(9).await;

        assert!(matches!(result, Err(ProductError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_delete_product_maps_false_to_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().with(eq(3)).returning(|_| Ok(false));

        let service = ProductService::new(repo);
        let result = service.delete_product(3).await;

        assert!(matches!(result, Err(ProductError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_delete_product_succeeds_when_row_removed() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().with(eq(3)).returning(|_| Ok(true));

        let service = ProductService::new(repo);
        assert!(service.delete_product(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_repository_errors_pass_through() {
        let mut repo = MockProductRepository::new();
        repo.expect_list_all()
            .returning(|| Err(ProductError::Internal("connection refused".to_string())));

        let service = ProductService::new(repo);
        let result = service.list_products().await;

        assert!(matches!(result, Err(ProductError::Internal(_))));
    }
}
