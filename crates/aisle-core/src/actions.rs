use crate::catalog::Product;
use crate::catalog::ProductId;
use crate::preferences::Preferences;
use crate::preferences::PriceRange;
use crate::recommendation::RecommendationResponse;
use crate::state::LogEntry;
use crate::state::Panel;

#[derive(Debug, Clone)]
pub enum ShopAction {
    User(UserAction),
    Runtime(RuntimeAction),
}

#[derive(Debug, Clone)]
pub enum UserAction {
    ClickProduct(ProductId),
    ApplyFilter,
    ClearPreferences,
    SetPreferences(Preferences),
    SetPriceRange(PriceRange),
    CyclePriceRange { forward: bool },
    ToggleCategory(String),
    ClearHistory,
    RequestRecommendations,
    ClearRecommendations,
    FocusNext,
    FocusPrev,
    FocusPanel(Panel),
    MoveUp,
    MoveDown,
    Activate,
    ToggleLogs,
    ShowHelp,
    CloseOverlay,
    ClearLogs,
}

#[derive(Debug, Clone)]
pub enum RuntimeAction {
    CatalogLoaded(Vec<Product>),
    RecommendationsResolved {
        request_id: u64,
        response: RecommendationResponse,
    },
    AppendStructuredLog(LogEntry),
}
