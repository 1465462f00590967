use super::*;
use pretty_assertions::assert_eq;

#[test]
fn catalog_cursor_resets_after_apply() {
    let mut state = loaded_state();
    state.selection.catalog_row = 2;

    run_user(&mut state, UserAction::SetPriceRange(PriceRange::UpTo50));
    run_user(&mut state, UserAction::ApplyFilter);

    assert_eq!(state.selection.catalog_row, 0);
    assert_eq!(
        state.selected_product().map(|p| p.id.clone()),
        Some(ProductId::Number(1))
    );
}

#[test]
fn cursor_wraps_in_both_directions() {
    let mut state = loaded_state();
    state.selection.focus = Panel::Catalog;

    run_user(&mut state, UserAction::MoveUp);
    assert_eq!(state.selection.catalog_row, 2);
    run_user(&mut state, UserAction::MoveDown);
    assert_eq!(state.selection.catalog_row, 0);
}

#[test]
fn moving_in_an_empty_panel_is_a_no_op() {
    let mut state = loaded_state();
    state.selection.focus = Panel::Recommendations;

    let effects = run_user(&mut state, UserAction::MoveDown);
    assert!(effects.is_empty());
    assert_eq!(state.selection.recommendation_row, 0);
}

#[test]
fn history_cursor_stays_in_bounds_after_clear() {
    let mut state = loaded_state();
    for id in [1, 2, 3] {
        run_user(&mut state, UserAction::ClickProduct(ProductId::Number(id)));
    }
    state.selection.focus = Panel::History;
    run_user(&mut state, UserAction::MoveUp);
    assert_eq!(state.selection.history_row, 2);

    run_user(&mut state, UserAction::ClearHistory);
    assert_selection_in_bounds(&state);
}

#[test]
fn focus_cycles_through_every_panel() {
    let mut state = state();
    let start = state.selection.focus;
    let mut seen = vec![start];
    for _ in 0..3 {
        run_user(&mut state, UserAction::FocusNext);
        seen.push(state.selection.focus);
    }
    run_user(&mut state, UserAction::FocusNext);
    assert_eq!(state.selection.focus, start);
    assert_eq!(seen.len(), 4);

    run_user(&mut state, UserAction::FocusPrev);
    assert_eq!(state.selection.focus, start.prev());

    run_user(&mut state, UserAction::FocusPanel(Panel::History));
    assert_eq!(state.selection.focus, Panel::History);
}

#[test]
fn catalog_window_moves_only_when_the_cursor_leaves_it() {
    let mut state = loaded_state();
    state.selection.catalog_offset = 1;

    state.selection.catalog_row = 1;
    state.scroll_catalog_into_view(2);
    assert_eq!(state.selection.catalog_offset, 1);

    state.selection.catalog_row = 0;
    state.scroll_catalog_into_view(2);
    assert_eq!(state.selection.catalog_offset, 0);

    state.selection.catalog_row = 2;
    state.scroll_catalog_into_view(2);
    assert_eq!(state.selection.catalog_offset, 1);
}

#[test]
fn applying_a_filter_rewinds_the_catalog_window() {
    let mut state = loaded_state();
    state.selection.catalog_row = 2;
    state.scroll_catalog_into_view(1);
    assert_eq!(state.selection.catalog_offset, 2);

    run_user(&mut state, UserAction::ApplyFilter);
    assert_eq!(state.selection.catalog_offset, 0);
}
