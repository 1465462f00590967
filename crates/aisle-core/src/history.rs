use crate::catalog::find_product;
use crate::catalog::Product;
use crate::catalog::ProductId;

/// Ordered, de-duplicated record of viewed product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowsingHistory {
    ids: Vec<ProductId>,
}

impl BrowsingHistory {
    /// Appends `id` unless already present. Returns whether it was added.
    pub fn record(&mut self, id: ProductId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Maps ids through `catalog` in history order; unknown ids are dropped.
    pub fn resolve(&self, catalog: &[Product]) -> Vec<Product> {
        self.ids
            .iter()
            .filter_map(|id| find_product(catalog, id).cloned())
            .collect()
    }
}
