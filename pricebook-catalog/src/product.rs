use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product as seen by the pricing engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub sku_code: String,
    pub brand: String,
    pub category: String,
    pub sub_category: String,
    pub segment: String,
    /// Root of every price resolution chain
    #[serde(default)]
    pub global_wholesale_price: Option<Decimal>,
}

impl Product {
    /// Global wholesale price, with a missing or negative value read as zero.
    pub fn wholesale_price(&self) -> Decimal {
        match self.global_wholesale_price {
            Some(price) if price > Decimal::ZERO => price,
            _ => Decimal::ZERO,
        }
    }
}

/// Catalog query filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Case-insensitive match on title, SKU code or brand
    pub search: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub brand: Option<String>,
    pub segment: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(search) = non_empty(&self.search) {
            let needle = search.to_lowercase();
            let hit = [&product.title, &product.sku_code, &product.brand]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        let exact = [
            (&self.category, &product.category),
            (&self.sub_category, &product.sub_category),
            (&self.brand, &product.brand),
            (&self.segment, &product.segment),
        ];
        exact.iter().all(|(wanted, actual)| match non_empty(wanted) {
            Some(wanted) => wanted == actual.as_str(),
            None => true,
        })
    }

    /// Apply the filter to a product list, keeping catalog order
    pub fn apply<'a, I>(&self, products: I) -> Vec<Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products
            .into_iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

// Query strings send `?brand=` for a cleared dropdown
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, title: &str, brand: &str, segment: &str) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            sku_code: format!("SKU-{}", id),
            brand: brand.to_string(),
            category: "Alcoholic Beverage".to_string(),
            sub_category: "Wine".to_string(),
            segment: segment.to_string(),
            global_wholesale_price: Some(Decimal::from(100)),
        }
    }

    #[test]
    fn test_wholesale_price_defaults_to_zero() {
        let mut p = product("1", "Koyama Riesling", "Koyama Wines", "White");
        p.global_wholesale_price = None;
        assert_eq!(p.wholesale_price(), Decimal::ZERO);

        p.global_wholesale_price = Some(Decimal::from(-5));
        assert_eq!(p.wholesale_price(), Decimal::ZERO);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = vec![
            product("1", "Koyama Riesling", "Koyama Wines", "White"),
            product("2", "Lacourte Brut", "Lacourte-Godbillon", "Sparkling"),
            product("3", "High Garden Pinot", "High Garden", "Red"),
        ];

        let filter = ProductFilter {
            search: Some("koyama".to_string()),
            ..Default::default()
        };
        let ids: Vec<_> = filter.apply(&catalog).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1"]);

        // SKU codes are searchable too
        let filter = ProductFilter {
            search: Some("sku-3".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&catalog).len(), 1);
    }

    #[test]
    fn test_exact_filters_combine() {
        let catalog = vec![
            product("1", "Koyama Riesling", "Koyama Wines", "White"),
            product("2", "Koyama Pinot Noir", "Koyama Wines", "Red"),
        ];

        let filter = ProductFilter {
            brand: Some("Koyama Wines".to_string()),
            segment: Some("Red".to_string()),
            category: Some(String::new()),
            ..Default::default()
        };
        let result = filter.apply(&catalog);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = serde_json::json!({
            "id": "10",
            "title": "High Garden Pinot Noir 2021",
            "skuCode": "HGVPIN216",
            "brand": "High Garden",
            "category": "Alcoholic Beverage",
            "subCategory": "Wine",
            "segment": "Red",
            "globalWholesalePrice": 279.06
        });
        let p: Product = serde_json::from_value(json).unwrap();
        assert_eq!(p.sku_code, "HGVPIN216");
        assert_eq!(p.wholesale_price(), Decimal::new(27906, 2));
    }
}
