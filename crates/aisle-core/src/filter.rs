use crate::catalog::Product;
use crate::preferences::Preferences;

/// Filters the master catalog against `preferences`.
///
/// Always starts from `catalog`, keeps catalog order, and never consults
/// `preferences.brands`.
pub fn apply(catalog: &[Product], preferences: &Preferences) -> Vec<Product> {
    catalog
        .iter()
        .filter(|product| matches(product, preferences))
        .cloned()
        .collect()
}

pub fn matches(product: &Product, preferences: &Preferences) -> bool {
    if !preferences.price_range.admits(product.price) {
        return false;
    }
    preferences.categories.is_empty() || preferences.has_category(&product.category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;
    use crate::preferences::PriceRange;
    use pretty_assertions::assert_eq;

    fn product(id: i64, price: f64, category: &str) -> Product {
        Product {
            id: ProductId::Number(id),
            name: format!("p{id}"),
            price,
            category: category.to_string(),
            brand: format!("brand-{id}"),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, 40.0, "A"),
            product(2, 60.0, "B"),
            product(3, 120.0, "A"),
        ]
    }

    fn prefs(range: PriceRange, categories: &[&str]) -> Preferences {
        Preferences {
            price_range: range,
            categories: categories.iter().map(|c| c.to_string()).collect(),
            brands: Vec::new(),
        }
    }

    fn ids(products: &[Product]) -> Vec<ProductId> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn default_preferences_are_identity() {
        let catalog = catalog();
        assert_eq!(apply(&catalog, &Preferences::default()), catalog);
    }

    #[test]
    fn cheap_bucket_keeps_first_product() {
        let filtered = apply(&catalog(), &prefs(PriceRange::UpTo50, &[]));
        assert_eq!(ids(&filtered), vec![ProductId::Number(1)]);
    }

    #[test]
    fn category_only_filter() {
        let filtered = apply(&catalog(), &prefs(PriceRange::All, &["B"]));
        assert_eq!(ids(&filtered), vec![ProductId::Number(2)]);
    }

    #[test]
    fn bucket_boundaries_are_upper_inclusive() {
        let catalog = vec![
            product(1, 50.0, "A"),
            product(2, 100.0, "A"),
            product(3, 100.01, "A"),
            product(4, 0.0, "A"),
        ];
        assert_eq!(
            ids(&apply(&catalog, &prefs(PriceRange::UpTo50, &[]))),
            vec![ProductId::Number(1), ProductId::Number(4)]
        );
        assert_eq!(
            ids(&apply(&catalog, &prefs(PriceRange::From50To100, &[]))),
            vec![ProductId::Number(2)]
        );
        assert_eq!(
            ids(&apply(&catalog, &prefs(PriceRange::Over100, &[]))),
            vec![ProductId::Number(3)]
        );
    }

    #[test]
    fn every_price_lands_in_exactly_one_bucket() {
        let buckets = [
            PriceRange::UpTo50,
            PriceRange::From50To100,
            PriceRange::Over100,
        ];
        for price in [0.0, 49.99, 50.0, 50.01, 99.5, 100.0, 100.5, 1_000.0] {
            let hits = buckets.iter().filter(|b| b.admits(price)).count();
            assert_eq!(hits, 1, "price {price}");
        }
    }

    #[test]
    fn brands_are_ignored() {
        let mut preferences = prefs(PriceRange::All, &[]);
        preferences.brands = vec!["nobody".to_string()];
        assert_eq!(apply(&catalog(), &preferences).len(), 3);
    }

    #[test]
    fn result_is_exactly_the_matching_subset_in_order() {
        let catalog = vec![
            product(5, 70.0, "B"),
            product(1, 10.0, "A"),
            product(4, 90.0, "A"),
            product(2, 55.0, "C"),
            product(3, 99.0, "B"),
        ];
        for range in PriceRange::ALL {
            for categories in [&[][..], &["A"][..], &["B", "C"][..]] {
                let preferences = prefs(range, categories);
                let filtered = apply(&catalog, &preferences);

                let expected: Vec<Product> = catalog
                    .iter()
                    .filter(|p| {
                        range.admits(p.price)
                            && (categories.is_empty() || categories.contains(&p.category.as_str()))
                    })
                    .cloned()
                    .collect();
                assert_eq!(filtered, expected);
            }
        }
    }

    #[test]
    fn reapplying_does_not_compose() {
        let catalog = catalog();
        let narrowed = apply(&catalog, &prefs(PriceRange::UpTo50, &[]));
        assert_eq!(narrowed.len(), 1);
        let widened = apply(&catalog, &prefs(PriceRange::Over100, &[]));
        assert_eq!(ids(&widened), vec![ProductId::Number(3)]);
    }
}
