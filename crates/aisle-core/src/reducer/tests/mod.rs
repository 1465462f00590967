use pretty_assertions::assert_eq;

pub(super) use super::reduce;
pub(super) use crate::actions::RuntimeAction;
pub(super) use crate::actions::ShopAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::catalog::CatalogStatus;
pub(super) use crate::catalog::Product;
pub(super) use crate::catalog::ProductId;
pub(super) use crate::config::Config;
pub(super) use crate::preferences::Preferences;
pub(super) use crate::preferences::PriceRange;
pub(super) use crate::recommendation::Recommendation;
pub(super) use crate::recommendation::RecommendationResponse;
pub(super) use crate::reducer::ShopEffect;
pub(super) use crate::state::LogBuffer;
pub(super) use crate::state::LogEntry;
pub(super) use crate::state::LogLevel;
pub(super) use crate::state::LogSource;
pub(super) use crate::state::Panel;
pub(super) use crate::state::ShopOverlay;
pub(super) use crate::state::ShopState;

mod selection_reconcile;

fn state() -> ShopState {
    ShopState::new(&Config::default())
}

fn product(id: i64, price: f64, category: &str) -> Product {
    Product {
        id: ProductId::Number(id),
        name: format!("Product {id}"),
        price,
        category: category.to_string(),
        brand: "Acme".to_string(),
    }
}

/// `[{1, 40, A}, {2, 60, B}, {3, 120, A}]`
fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, 40.0, "A"),
        product(2, 60.0, "B"),
        product(3, 120.0, "A"),
    ]
}

fn loaded_state() -> ShopState {
    let mut state = state();
    run_runtime(&mut state, RuntimeAction::CatalogLoaded(sample_catalog()));
    state
}

fn recommendation(product: Product, explanation: &str) -> Recommendation {
    Recommendation {
        product,
        explanation: explanation.to_string(),
        confidence_score: None,
    }
}

fn response(recommendations: Vec<Recommendation>) -> RecommendationResponse {
    RecommendationResponse {
        count: recommendations.len(),
        recommendations,
    }
}

fn run_user(state: &mut ShopState, action: UserAction) -> Vec<ShopEffect> {
    reduce(state, ShopAction::User(action))
}

fn run_runtime(state: &mut ShopState, action: RuntimeAction) {
    let effects = reduce(state, ShopAction::Runtime(action));
    assert!(effects.is_empty());
}

fn visible_ids(state: &ShopState) -> Vec<ProductId> {
    state.catalog.visible().iter().map(|p| p.id.clone()).collect()
}

fn assert_selection_in_bounds(state: &ShopState) {
    for panel in [
        Panel::Preferences,
        Panel::History,
        Panel::Catalog,
        Panel::Recommendations,
    ] {
        let len = state.row_count(panel);
        let row = state.row(panel);
        assert_eq!(
            row <= len.saturating_sub(1),
            true,
            "{panel:?} row {row} out of {len}"
        );
    }
}
