use super::actions::RuntimeAction;
use super::actions::ShopAction;
use super::actions::UserAction;
use super::catalog::ProductId;
use super::filter;
use super::preferences::Preferences;
use super::preferences::PreferencesPatch;
use super::recommendation::RecommendationRequest;
use super::state::LogEntry;
use super::state::LogLevel;
use super::state::LogSource;
use super::state::Panel;
use super::state::ShopOverlay;
use super::state::ShopState;

#[derive(Debug, Clone, PartialEq)]
pub enum ShopEffect {
    RequestFrame,
    FetchRecommendations {
        request_id: u64,
        request: RecommendationRequest,
    },
}

pub fn reduce(state: &mut ShopState, action: ShopAction) -> Vec<ShopEffect> {
    match action {
        ShopAction::User(user) => reduce_user(state, user),
        ShopAction::Runtime(runtime) => {
            reduce_runtime(state, runtime);
            Vec::new()
        }
    }
}

fn reduce_user(state: &mut ShopState, action: UserAction) -> Vec<ShopEffect> {
    match action {
        UserAction::ClickProduct(id) => {
            record_click(state, id);
            vec![ShopEffect::RequestFrame]
        }
        UserAction::ApplyFilter => {
            let filtered = filter::apply(state.catalog.products(), &state.preferences);
            append_log(
                state,
                LogLevel::Info,
                format!(
                    "filter {} | categories: {} -> {} of {} products",
                    state.preferences.price_range.as_str(),
                    category_summary(&state.preferences),
                    filtered.len(),
                    state.catalog.products().len()
                ),
            );
            state.catalog.set_visible(filtered);
            state.selection.catalog_row = 0;
            state.selection.catalog_offset = 0;
            vec![ShopEffect::RequestFrame]
        }
        UserAction::ClearPreferences => {
            state.preferences = Preferences::default();
            state.catalog.show_all();
            state.selection.catalog_row = 0;
            state.selection.catalog_offset = 0;
            state.reconcile_selection();
            vec![ShopEffect::RequestFrame]
        }
        UserAction::SetPreferences(preferences) => {
            set_preferences(state, preferences);
            vec![ShopEffect::RequestFrame]
        }
        UserAction::SetPriceRange(range) => {
            let next = state
                .preferences
                .patched(PreferencesPatch::price_range(range));
            set_preferences(state, next);
            vec![ShopEffect::RequestFrame]
        }
        UserAction::CyclePriceRange { forward } => {
            let current = state.preferences.price_range;
            let range = if forward {
                current.next()
            } else {
                current.prev()
            };
            let next = state
                .preferences
                .patched(PreferencesPatch::price_range(range));
            set_preferences(state, next);
            vec![ShopEffect::RequestFrame]
        }
        UserAction::ToggleCategory(category) => {
            let next = state.preferences.with_category_toggled(&category);
            set_preferences(state, next);
            vec![ShopEffect::RequestFrame]
        }
        UserAction::ClearHistory => {
            state.history.clear();
            state.selection.history_row = 0;
            vec![ShopEffect::RequestFrame]
        }
        UserAction::RequestRecommendations => {
            let request_id = state.recommendations.begin();
            state.selection.recommendation_row = 0;
            let request = RecommendationRequest {
                preferences: state.preferences.clone(),
                browsing_history: state.history.ids().to_vec(),
            };
            append_log(
                state,
                LogLevel::Info,
                format!(
                    "recommendation request #{request_id} dispatched ({} viewed)",
                    request.browsing_history.len()
                ),
            );
            vec![
                ShopEffect::FetchRecommendations {
                    request_id,
                    request,
                },
                ShopEffect::RequestFrame,
            ]
        }
        UserAction::ClearRecommendations => {
            state.recommendations.clear();
            state.selection.recommendation_row = 0;
            vec![ShopEffect::RequestFrame]
        }
        UserAction::FocusNext => {
            state.selection.focus = state.selection.focus.next();
            vec![ShopEffect::RequestFrame]
        }
        UserAction::FocusPrev => {
            state.selection.focus = state.selection.focus.prev();
            vec![ShopEffect::RequestFrame]
        }
        UserAction::FocusPanel(panel) => {
            state.selection.focus = panel;
            vec![ShopEffect::RequestFrame]
        }
        UserAction::MoveUp => {
            let panel = state.selection.focus;
            let len = state.row_count(panel);
            if len == 0 {
                return Vec::new();
            }
            let row = state.row_mut(panel);
            *row = if *row == 0 { len - 1 } else { *row - 1 };
            vec![ShopEffect::RequestFrame]
        }
        UserAction::MoveDown => {
            let panel = state.selection.focus;
            let len = state.row_count(panel);
            if len == 0 {
                return Vec::new();
            }
            let row = state.row_mut(panel);
            *row = (*row + 1) % len;
            vec![ShopEffect::RequestFrame]
        }
        UserAction::Activate => activate_selection(state),
        UserAction::ToggleLogs => {
            state.interaction.overlay = match state.interaction.overlay {
                ShopOverlay::Logs => ShopOverlay::None,
                _ => ShopOverlay::Logs,
            };
            vec![ShopEffect::RequestFrame]
        }
        UserAction::ShowHelp => {
            state.interaction.overlay = ShopOverlay::Help;
            vec![ShopEffect::RequestFrame]
        }
        UserAction::CloseOverlay => {
            state.interaction.overlay = ShopOverlay::None;
            vec![ShopEffect::RequestFrame]
        }
        UserAction::ClearLogs => {
            state.logs.clear();
            vec![ShopEffect::RequestFrame]
        }
    }
}

fn activate_selection(state: &mut ShopState) -> Vec<ShopEffect> {
    match state.selection.focus {
        Panel::Catalog => {
            let Some(id) = state.selected_product().map(|p| p.id.clone()) else {
                return Vec::new();
            };
            reduce_user(state, UserAction::ClickProduct(id))
        }
        Panel::Preferences => {
            if state.selection.preferences_row == 0 {
                return reduce_user(state, UserAction::CyclePriceRange { forward: true });
            }
            match state.selected_category() {
                Some(category) => reduce_user(state, UserAction::ToggleCategory(category)),
                None => Vec::new(),
            }
        }
        Panel::History | Panel::Recommendations => Vec::new(),
    }
}

fn record_click(state: &mut ShopState, id: ProductId) {
    let Some(name) = state.catalog.find(&id).map(|p| p.name.clone()) else {
        append_log(
            state,
            LogLevel::Debug,
            format!("ignored click on unknown product {id}"),
        );
        return;
    };
    if state.history.record(id) {
        append_log(state, LogLevel::Debug, format!("viewed {name}"));
    }
}

fn set_preferences(state: &mut ShopState, preferences: Preferences) {
    state.preferences = preferences;
}

fn category_summary(preferences: &Preferences) -> String {
    if preferences.categories.is_empty() {
        "any".to_string()
    } else {
        preferences.categories.join(", ")
    }
}

fn append_log(state: &mut ShopState, level: LogLevel, message: String) {
    state
        .logs
        .append(LogEntry::new(level, LogSource::App, message));
}

fn reduce_runtime(state: &mut ShopState, action: RuntimeAction) {
    match action {
        RuntimeAction::CatalogLoaded(products) => {
            let count = products.len();
            if state.catalog.install(products) {
                append_log(state, LogLevel::Info, format!("catalog loaded: {count} products"));
                state.reconcile_selection();
            } else {
                append_log(
                    state,
                    LogLevel::Warn,
                    format!("ignored repeated catalog load ({count} products)"),
                );
            }
        }
        RuntimeAction::RecommendationsResolved {
            request_id,
            response,
        } => {
            let count = response.recommendations.len();
            state.recommendations.resolve(response.recommendations);
            state.selection.recommendation_row = 0;
            let latest = state.recommendations.last_request_id();
            let message = if request_id == latest {
                format!("recommendation request #{request_id} resolved with {count} items")
            } else {
                format!(
                    "recommendation request #{request_id} resolved with {count} items after #{latest} was dispatched"
                )
            };
            append_log(state, LogLevel::Info, message);
        }
        RuntimeAction::AppendStructuredLog(entry) => {
            state.logs.append(entry);
        }
    }
}

#[cfg(test)]
mod tests;
