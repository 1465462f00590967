use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Product identifier as the service emitted it.
///
/// The service is free to use integers or strings. The original JSON form is
/// kept so ids sent back in `browsing_history` compare equal on the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub brand: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Ready,
}

impl CatalogStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
        }
    }
}

/// Master product list plus the view currently on screen.
///
/// `visible` is always derived from `products`, never from a previous
/// `visible`, so filters do not compose across applications.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    pub status: CatalogStatus,
    products: Vec<Product>,
    visible: Vec<Product>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self {
            status: CatalogStatus::Loading,
            products: Vec::new(),
            visible: Vec::new(),
        }
    }
}

impl CatalogStore {
    /// Installs the startup load result as master list and initial view.
    /// Returns `false` if a catalog was already installed; the store is left
    /// untouched in that case.
    pub fn install(&mut self, products: Vec<Product>) -> bool {
        if self.status == CatalogStatus::Ready {
            return false;
        }
        self.visible = products.clone();
        self.products = products;
        self.status = CatalogStatus::Ready;
        true
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn set_visible(&mut self, visible: Vec<Product>) {
        self.visible = visible;
    }

    pub fn show_all(&mut self) {
        self.visible = self.products.clone();
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        find_product(&self.products, id)
    }

    pub fn is_loaded(&self) -> bool {
        self.status == CatalogStatus::Ready
    }
}

pub fn find_product<'a>(products: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    products.iter().find(|product| &product.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn product(id: i64, price: f64) -> Product {
        Product {
            id: ProductId::Number(id),
            name: format!("p{id}"),
            price,
            category: "A".to_string(),
            brand: String::new(),
        }
    }

    #[test]
    fn product_ids_keep_their_json_form() {
        let numeric: Vec<ProductId> = serde_json::from_str(r#"[1, "prod_7"]"#).unwrap();
        assert_eq!(
            numeric,
            vec![ProductId::Number(1), ProductId::Text("prod_7".to_string())]
        );
        assert_eq!(serde_json::to_string(&numeric).unwrap(), r#"[1,"prod_7"]"#);
    }

    #[test]
    fn product_without_brand_decodes() {
        let product: Product =
            serde_json::from_str(r#"{"id":"p1","name":"Mug","price":9.5,"category":"Home"}"#)
                .unwrap();
        assert_eq!(product.brand, "");
        assert_eq!(product.id.to_string(), "p1");
    }

    #[test]
    fn install_populates_master_and_view_once() {
        let mut store = CatalogStore::default();
        assert_eq!(store.status, CatalogStatus::Loading);

        assert!(store.install(vec![product(1, 10.0), product(2, 20.0)]));
        assert_eq!(store.products().len(), 2);
        assert_eq!(store.visible(), store.products());

        assert!(!store.install(vec![product(3, 30.0)]));
        assert_eq!(store.products().len(), 2);
        assert!(store.find(&ProductId::Number(3)).is_none());
    }

    #[test]
    fn empty_install_still_marks_ready() {
        let mut store = CatalogStore::default();
        assert!(store.install(Vec::new()));
        assert!(store.is_loaded());
        assert!(store.visible().is_empty());
    }
}
