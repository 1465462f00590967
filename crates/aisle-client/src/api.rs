use aisle_core::catalog::Product;
use aisle_core::recommendation::RecommendationRequest;
use aisle_core::recommendation::RecommendationResponse;

use crate::contracts::ApiError;

/// The remote catalog service.
pub trait CatalogApi {
    fn base_url(&self) -> &str;

    fn fetch_products(&self) -> Result<Vec<Product>, ApiError>;

    fn fetch_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, ApiError>;
}

/// Startup catalog load. Any failure is logged and yields an empty catalog.
pub fn load_catalog(api: &dyn CatalogApi) -> Vec<Product> {
    match api.fetch_products() {
        Ok(products) => {
            log::info!("fetched {} products from {}", products.len(), api.base_url());
            products
        }
        Err(err) => {
            log::warn!("error fetching products: {err}");
            Vec::new()
        }
    }
}

/// One recommendation round trip. Any failure is logged and yields an empty
/// response.
pub fn request_recommendations(
    api: &dyn CatalogApi,
    request: &RecommendationRequest,
) -> RecommendationResponse {
    match api.fetch_recommendations(request) {
        Ok(response) => {
            log::debug!(
                "service returned {} recommendations (count field {})",
                response.recommendations.len(),
                response.count
            );
            response
        }
        Err(err) => {
            log::warn!("error fetching recommendations: {err}");
            RecommendationResponse::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::Endpoint;
    use aisle_core::catalog::ProductId;
    use aisle_core::preferences::Preferences;
    use aisle_core::recommendation::Recommendation;
    use pretty_assertions::assert_eq;

    struct FixedApi {
        products: Option<Vec<Product>>,
        recommendations: Option<RecommendationResponse>,
    }

    fn decode_error(endpoint: Endpoint) -> ApiError {
        let source = serde_json::from_str::<Vec<Product>>("{").unwrap_err();
        ApiError::Decode { endpoint, source }
    }

    impl CatalogApi for FixedApi {
        fn base_url(&self) -> &str {
            "fixed://"
        }

        fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
            self.products
                .clone()
                .ok_or_else(|| decode_error(Endpoint::Products))
        }

        fn fetch_recommendations(
            &self,
            _request: &RecommendationRequest,
        ) -> Result<RecommendationResponse, ApiError> {
            self.recommendations
                .clone()
                .ok_or_else(|| decode_error(Endpoint::Recommendations))
        }
    }

    fn product(id: i64) -> Product {
        Product {
            id: ProductId::Number(id),
            name: format!("p{id}"),
            price: 10.0,
            category: "A".to_string(),
            brand: String::new(),
        }
    }

    fn request() -> RecommendationRequest {
        RecommendationRequest {
            preferences: Preferences::default(),
            browsing_history: Vec::new(),
        }
    }

    #[test]
    fn load_catalog_passes_products_through() {
        let api = FixedApi {
            products: Some(vec![product(1), product(2)]),
            recommendations: None,
        };
        assert_eq!(load_catalog(&api), vec![product(1), product(2)]);
    }

    #[test]
    fn load_catalog_swallows_errors() {
        let api = FixedApi {
            products: None,
            recommendations: None,
        };
        assert!(load_catalog(&api).is_empty());
    }

    #[test]
    fn request_recommendations_swallows_errors() {
        let api = FixedApi {
            products: None,
            recommendations: None,
        };
        assert_eq!(
            request_recommendations(&api, &request()),
            RecommendationResponse::empty()
        );
    }

    #[test]
    fn request_recommendations_returns_the_response() {
        let response = RecommendationResponse {
            recommendations: vec![Recommendation {
                product: product(3),
                explanation: "Matches your history.".to_string(),
                confidence_score: Some(7.0),
            }],
            count: 1,
        };
        let api = FixedApi {
            products: None,
            recommendations: Some(response.clone()),
        };
        assert_eq!(request_recommendations(&api, &request()), response);
    }

    #[test]
    fn errors_name_their_endpoint() {
        let err = decode_error(Endpoint::Recommendations);
        assert_eq!(err.endpoint(), Endpoint::Recommendations);
        assert!(err.to_string().starts_with("POST /recommendations"));
    }
}
