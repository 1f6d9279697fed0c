use std::path::Path;

use async_trait::async_trait;
use pricebook_catalog::{Product, ProductFilter};
use pricebook_core::repository::ProductRepository;
use pricebook_core::{CoreError, CoreResult};

/// Read-only catalog held in memory
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a JSON array of products
    pub fn from_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::InternalError(format!("reading catalog {}: {}", path.display(), e))
        })?;
        let products: Vec<Product> = serde_json::from_str(&raw).map_err(|e| {
            CoreError::InternalError(format!("parsing catalog {}: {}", path.display(), e))
        })?;

        tracing::info!("Loaded {} products from {}", products.len(), path.display());
        Ok(Self::new(products))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_products(&self, filter: &ProductFilter) -> CoreResult<Vec<Product>> {
        Ok(filter.apply(&self.products))
    }

    async fn get_products(&self, ids: &[String]) -> CoreResult<Vec<Product>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.products.iter().find(|p| &p.id == id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> InMemoryProductRepository {
        let raw = include_str!("../data/products.json");
        InMemoryProductRepository::new(serde_json::from_str(raw).unwrap())
    }

    #[tokio::test]
    async fn test_bundled_catalog_parses() {
        let repo = catalog();
        let all = repo.list_products(&ProductFilter::default()).await.unwrap();
        assert!(!all.is_empty());
        assert!(all.iter().all(|p| p.global_wholesale_price.is_some()));
    }

    #[tokio::test]
    async fn test_get_products_keeps_request_order() {
        let repo = catalog();
        let ids = vec!["3".to_string(), "missing".to_string(), "1".to_string()];
        let found = repo.get_products(&ids).await.unwrap();
        let found_ids: Vec<_> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(found_ids, vec!["3", "1"]);
    }

    #[tokio::test]
    async fn test_filter_by_brand() {
        let repo = catalog();
        let filter = ProductFilter {
            brand: Some("High Garden".to_string()),
            ..Default::default()
        };
        let found = repo.list_products(&filter).await.unwrap();
        assert!(!found.is_empty());
        assert!(found.iter().all(|p| p.brand == "High Garden"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = InMemoryProductRepository::from_path("no/such/products.json")
            .err()
            .unwrap();
        assert!(matches!(err, CoreError::InternalError(_)));
    }
}
