use serde::Deserialize;
use serde::Serialize;

use crate::catalog::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceRange {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "0-50")]
    UpTo50,
    #[serde(rename = "50-100")]
    From50To100,
    #[serde(rename = "100+")]
    Over100,
}

impl PriceRange {
    pub const ALL: [PriceRange; 4] = [
        PriceRange::All,
        PriceRange::UpTo50,
        PriceRange::From50To100,
        PriceRange::Over100,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::UpTo50 => "0-50",
            Self::From50To100 => "50-100",
            Self::Over100 => "100+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::UpTo50 => "$0 - $50",
            Self::From50To100 => "$50 - $100",
            Self::Over100 => "$100+",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::UpTo50,
            Self::UpTo50 => Self::From50To100,
            Self::From50To100 => Self::Over100,
            Self::Over100 => Self::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Over100,
            Self::UpTo50 => Self::All,
            Self::From50To100 => Self::UpTo50,
            Self::Over100 => Self::From50To100,
        }
    }

    /// Lower bound exclusive, upper bound inclusive: 50 is in `0-50` only.
    pub fn admits(self, price: f64) -> bool {
        match self {
            Self::All => true,
            Self::UpTo50 => price <= 50.0,
            Self::From50To100 => price > 50.0 && price <= 100.0,
            Self::Over100 => price > 100.0,
        }
    }
}

/// User-selected constraints. Replaced wholesale on every change.
///
/// `categories` and `brands` keep insertion order for display; membership is
/// what the filter looks at. `brands` is carried on the wire but never
/// consulted locally.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub price_range: PriceRange,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
}

/// Named field overrides applied on top of a full `Preferences` value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub price_range: Option<PriceRange>,
    pub categories: Option<Vec<String>>,
    pub brands: Option<Vec<String>>,
}

impl PreferencesPatch {
    pub fn price_range(range: PriceRange) -> Self {
        Self {
            price_range: Some(range),
            ..Self::default()
        }
    }

    pub fn categories(categories: Vec<String>) -> Self {
        Self {
            categories: Some(categories),
            ..Self::default()
        }
    }
}

impl Preferences {
    pub fn patched(&self, patch: PreferencesPatch) -> Preferences {
        Preferences {
            price_range: patch.price_range.unwrap_or(self.price_range),
            categories: patch
                .categories
                .unwrap_or_else(|| self.categories.clone()),
            brands: patch.brands.unwrap_or_else(|| self.brands.clone()),
        }
    }

    pub fn with_category_toggled(&self, category: &str) -> Preferences {
        let categories = if self.has_category(category) {
            self.categories
                .iter()
                .filter(|c| c.as_str() != category)
                .cloned()
                .collect()
        } else {
            let mut next = self.categories.clone();
            next.push(category.to_string());
            next
        };
        self.patched(PreferencesPatch::categories(categories))
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// Distinct categories in first-occurrence order. Recomputed on every call.
pub fn available_categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.iter().any(|c| c == &product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}
