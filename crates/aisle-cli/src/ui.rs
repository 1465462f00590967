use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Terminal;

use aisle_client::api::{load_catalog, request_recommendations};
use aisle_client::http::HttpCatalogApi;
use aisle_core::actions::{RuntimeAction, ShopAction, UserAction};
use aisle_core::catalog::{CatalogStatus, Product};
use aisle_core::recommendation::{RecommendationRequest, RecommendationResponse};
use aisle_core::reducer::{reduce, ShopEffect};
use aisle_core::state::{LogEntry, LogLevel, Panel, ShopOverlay, ShopState};

/// Messages from worker threads and the logger back to the UI loop.
pub(crate) enum UiEvent {
    CatalogLoaded(Vec<Product>),
    RecommendationsResolved {
        request_id: u64,
        response: RecommendationResponse,
    },
    Log(LogEntry),
}

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            crossterm::cursor::Show
        );
    }
}

pub fn run(
    mut state: ShopState,
    api: HttpCatalogApi,
    tx: Sender<UiEvent>,
    rx: Receiver<UiEvent>,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        crossterm::cursor::Hide
    )?;
    let _guard = TuiGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    spawn_catalog_load(api.clone(), tx.clone());
    run_app(&mut terminal, &mut state, &api, &tx, &rx).map_err(|e| e.into())
}

fn spawn_catalog_load(api: HttpCatalogApi, tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let products = load_catalog(&api);
        let _ = tx.send(UiEvent::CatalogLoaded(products));
    });
}

fn spawn_recommendations(
    api: &HttpCatalogApi,
    tx: &Sender<UiEvent>,
    request_id: u64,
    request: RecommendationRequest,
) {
    let api = api.clone();
    let tx = tx.clone();
    thread::spawn(move || {
        let response = request_recommendations(&api, &request);
        let _ = tx.send(UiEvent::RecommendationsResolved {
            request_id,
            response,
        });
    });
}

fn apply_event(state: &mut ShopState, event: UiEvent) {
    let action = match event {
        UiEvent::CatalogLoaded(products) => RuntimeAction::CatalogLoaded(products),
        UiEvent::RecommendationsResolved {
            request_id,
            response,
        } => RuntimeAction::RecommendationsResolved {
            request_id,
            response,
        },
        UiEvent::Log(entry) => RuntimeAction::AppendStructuredLog(entry),
    };
    reduce(state, ShopAction::Runtime(action));
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut ShopState,
    api: &HttpCatalogApi,
    tx: &Sender<UiEvent>,
    rx: &Receiver<UiEvent>,
) -> io::Result<()> {
    loop {
        while let Ok(event) = rx.try_recv() {
            apply_event(state, event);
        }

        let size = terminal.size()?;
        state.scroll_catalog_into_view(catalog_rows(Rect::new(0, 0, size.width, size.height)));
        terminal.draw(|f| ui(f, state))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let effects = match event::read()? {
            Event::Key(key) => match handle_key_event(key, state) {
                KeyHandlerResult::Continue(effects) => effects,
                KeyHandlerResult::Exit => return Ok(()),
            },
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse_event(mouse, state, Rect::new(0, 0, size.width, size.height))
            }
            _ => Vec::new(),
        };

        for effect in effects {
            match effect {
                ShopEffect::FetchRecommendations {
                    request_id,
                    request,
                } => spawn_recommendations(api, tx, request_id, request),
                ShopEffect::RequestFrame => {}
            }
        }
    }
}

#[derive(Debug)]
enum KeyHandlerResult {
    Continue(Vec<ShopEffect>),
    Exit,
}

fn dispatch(state: &mut ShopState, action: UserAction) -> KeyHandlerResult {
    KeyHandlerResult::Continue(reduce(state, ShopAction::User(action)))
}

fn handle_key_event(key: event::KeyEvent, state: &mut ShopState) -> KeyHandlerResult {
    if key.kind != KeyEventKind::Press {
        return KeyHandlerResult::Continue(Vec::new());
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyHandlerResult::Exit;
    }

    match state.interaction.overlay {
        ShopOverlay::Help => handle_help_keys(key, state),
        ShopOverlay::Logs => handle_log_keys(key, state),
        ShopOverlay::None => handle_shop_keys(key, state),
    }
}

fn handle_help_keys(key: event::KeyEvent, state: &mut ShopState) -> KeyHandlerResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => {
            dispatch(state, UserAction::CloseOverlay)
        }
        KeyCode::Char('q') => KeyHandlerResult::Exit,
        _ => KeyHandlerResult::Continue(Vec::new()),
    }
}

fn handle_log_keys(key: event::KeyEvent, state: &mut ShopState) -> KeyHandlerResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('l') => dispatch(state, UserAction::ToggleLogs),
        KeyCode::Char('c') => dispatch(state, UserAction::ClearLogs),
        KeyCode::Char('q') => KeyHandlerResult::Exit,
        _ => KeyHandlerResult::Continue(Vec::new()),
    }
}

fn handle_shop_keys(key: event::KeyEvent, state: &mut ShopState) -> KeyHandlerResult {
    let on_price_row =
        state.selection.focus == Panel::Preferences && state.selection.preferences_row == 0;
    match key.code {
        KeyCode::Char('q') => KeyHandlerResult::Exit,
        KeyCode::Char('a') => dispatch(state, UserAction::ApplyFilter),
        KeyCode::Char('c') => dispatch(state, UserAction::ClearPreferences),
        KeyCode::Char('h') => dispatch(state, UserAction::ClearHistory),
        KeyCode::Char('r') => {
            if state.recommendations.is_loading {
                return KeyHandlerResult::Continue(Vec::new());
            }
            dispatch(state, UserAction::RequestRecommendations)
        }
        KeyCode::Char('x') => {
            if state.recommendations.is_loading || state.recommendations.items.is_empty() {
                return KeyHandlerResult::Continue(Vec::new());
            }
            dispatch(state, UserAction::ClearRecommendations)
        }
        KeyCode::Char('l') => dispatch(state, UserAction::ToggleLogs),
        KeyCode::Char('?') => dispatch(state, UserAction::ShowHelp),
        KeyCode::Char(digit @ '1'..='4') => {
            let panel = match digit {
                '1' => Panel::Preferences,
                '2' => Panel::History,
                '3' => Panel::Catalog,
                _ => Panel::Recommendations,
            };
            dispatch(state, UserAction::FocusPanel(panel))
        }
        KeyCode::Tab => dispatch(state, UserAction::FocusNext),
        KeyCode::BackTab => dispatch(state, UserAction::FocusPrev),
        KeyCode::Up | KeyCode::Char('k') => dispatch(state, UserAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => dispatch(state, UserAction::MoveDown),
        KeyCode::Left if on_price_row => {
            dispatch(state, UserAction::CyclePriceRange { forward: false })
        }
        KeyCode::Right if on_price_row => {
            dispatch(state, UserAction::CyclePriceRange { forward: true })
        }
        KeyCode::Enter | KeyCode::Char(' ') => dispatch(state, UserAction::Activate),
        _ => KeyHandlerResult::Continue(Vec::new()),
    }
}

/// Screen regions shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ShopLayout {
    header: Rect,
    preferences: Rect,
    history: Rect,
    catalog: Rect,
    recommendations: Rect,
    footer: Rect,
}

impl ShopLayout {
    fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(26),
                Constraint::Percentage(44),
                Constraint::Percentage(30),
            ])
            .split(rows[1]);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[0]);
        Self {
            header: rows[0],
            preferences: left[0],
            history: left[1],
            catalog: columns[1],
            recommendations: columns[2],
            footer: rows[2],
        }
    }

    fn panel_at(&self, column: u16, row: u16) -> Option<Panel> {
        [
            (Panel::Preferences, self.preferences),
            (Panel::History, self.history),
            (Panel::Catalog, self.catalog),
            (Panel::Recommendations, self.recommendations),
        ]
        .into_iter()
        .find(|(_, rect)| contains(*rect, column, row))
        .map(|(panel, _)| panel)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

fn inner(rect: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(rect)
}

/// Rows available to catalog entries for a terminal of size `area`.
fn catalog_rows(area: Rect) -> usize {
    inner(ShopLayout::new(area).catalog).height as usize
}

/// First list row shown so that `selected` stays inside `height` rows.
fn list_offset(selected: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    selected.saturating_sub(height - 1)
}

fn handle_mouse_event(
    mouse: event::MouseEvent,
    state: &mut ShopState,
    area: Rect,
) -> Vec<ShopEffect> {
    if state.interaction.overlay != ShopOverlay::None {
        return Vec::new();
    }
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return Vec::new();
    };
    let layout = ShopLayout::new(area);
    let Some(panel) = layout.panel_at(mouse.column, mouse.row) else {
        return Vec::new();
    };

    let mut effects = reduce(state, ShopAction::User(UserAction::FocusPanel(panel)));
    if panel != Panel::Catalog {
        return effects;
    }

    let body = inner(layout.catalog);
    if !contains(body, mouse.column, mouse.row) {
        return effects;
    }
    let index = state.selection.catalog_offset + (mouse.row - body.y) as usize;
    let Some(id) = state.catalog.visible().get(index).map(|p| p.id.clone()) else {
        return effects;
    };
    state.selection.catalog_row = index;
    effects.extend(reduce(
        state,
        ShopAction::User(UserAction::ClickProduct(id)),
    ));
    effects
}

#[derive(Clone, Copy)]
struct UiPalette {
    accent: Color,
    accent_alt: Color,
    success: Color,
    warning: Color,
    danger: Color,
    muted: Color,
    border: Color,
    focus_border: Color,
    selected_bg: Color,
}

const PALETTE: UiPalette = UiPalette {
    accent: Color::Cyan,
    accent_alt: Color::Blue,
    success: Color::Green,
    warning: Color::Yellow,
    danger: Color::Red,
    muted: Color::DarkGray,
    border: Color::Gray,
    focus_border: Color::Cyan,
    selected_bg: Color::Rgb(40, 52, 72),
};

fn get_spinner() -> &'static str {
    let frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let tick = chrono::Utc::now().timestamp_millis() / 100;
    frames[tick.rem_euclid(frames.len() as i64) as usize]
}

fn format_price(price: f64) -> String {
    format!("${price}")
}

fn panel_block(title: String, focused: bool, palette: UiPalette) -> Block<'static> {
    let border = if focused {
        palette.focus_border
    } else {
        palette.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            title,
            Style::default().fg(border).add_modifier(Modifier::BOLD),
        ))
}

fn selected_style(palette: UiPalette) -> Style {
    Style::default()
        .bg(palette.selected_bg)
        .add_modifier(Modifier::BOLD)
}

fn render_empty(f: &mut ratatui::Frame, area: Rect, block: Block<'_>, text: &str) {
    let p = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(PALETTE.muted),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);
    f.render_widget(p, area);
}

fn ui(f: &mut ratatui::Frame, state: &ShopState) {
    let layout = ShopLayout::new(f.area());
    render_header(f, layout.header, state, PALETTE);
    render_preferences(f, layout.preferences, state, PALETTE);
    render_history(f, layout.history, state, PALETTE);
    render_catalog(f, layout.catalog, state, PALETTE);
    render_recommendations(f, layout.recommendations, state, PALETTE);
    render_footer(f, layout.footer, state, PALETTE);

    match state.interaction.overlay {
        ShopOverlay::Logs => render_logs(f, state, PALETTE),
        ShopOverlay::Help => render_help(f, PALETTE),
        ShopOverlay::None => {}
    }
}

fn render_header(f: &mut ratatui::Frame, area: Rect, state: &ShopState, palette: UiPalette) {
    let mut spans = vec![
        Span::styled(
            "Aisle",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " AI product recommendations ",
            Style::default().fg(palette.muted),
        ),
        Span::styled(" | ", Style::default().fg(palette.muted)),
        Span::styled(
            state.header.service_url.to_string(),
            Style::default().fg(palette.accent_alt),
        ),
        Span::styled(" | ", Style::default().fg(palette.muted)),
    ];
    match state.catalog.status {
        CatalogStatus::Loading => spans.push(Span::styled(
            format!("{} {}", get_spinner(), state.catalog.status.label()),
            Style::default().fg(palette.warning),
        )),
        CatalogStatus::Ready => spans.push(Span::styled(
            format!(
                "{} products | {} viewed",
                state.catalog.products().len(),
                state.history.len()
            ),
            Style::default().fg(palette.success),
        )),
    }
    if state.recommendations.is_loading {
        spans.push(Span::styled(" | ", Style::default().fg(palette.muted)));
        spans.push(Span::styled(
            format!("{} recommending", get_spinner()),
            Style::default().fg(palette.warning),
        ));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_preferences(f: &mut ratatui::Frame, area: Rect, state: &ShopState, palette: UiPalette) {
    let focused = state.selection.focus == Panel::Preferences;
    let block = panel_block(Panel::Preferences.label().to_string(), focused, palette);

    let mut items = vec![ListItem::new(Line::from(vec![
        Span::styled("Price ", Style::default().fg(palette.muted)),
        Span::styled("< ", Style::default().fg(palette.muted)),
        Span::styled(
            state.preferences.price_range.label(),
            Style::default().fg(palette.accent),
        ),
        Span::styled(" >", Style::default().fg(palette.muted)),
    ]))];
    for category in state.available_categories() {
        let checked = state.preferences.has_category(&category);
        let (mark, style) = if checked {
            ("[x] ", Style::default().fg(palette.success))
        } else {
            ("[ ] ", Style::default())
        };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(mark, style),
            Span::raw(category),
        ])));
    }

    let body = inner(area);
    let row = state.selection.preferences_row;
    let mut list_state = ListState::default()
        .with_offset(list_offset(row, body.height as usize))
        .with_selected(focused.then_some(row));
    let list = List::new(items)
        .block(block)
        .highlight_style(selected_style(palette));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_history(f: &mut ratatui::Frame, area: Rect, state: &ShopState, palette: UiPalette) {
    let focused = state.selection.focus == Panel::History;
    let products = state.history_products();
    let block = panel_block(
        format!("Browsing History ({})", products.len()),
        focused,
        palette,
    );
    if products.is_empty() {
        render_empty(f, area, block, "Click on products to see them here.");
        return;
    }

    let items: Vec<ListItem> = products
        .iter()
        .map(|product| {
            ListItem::new(Line::from(vec![
                Span::raw(product.name.clone()),
                Span::styled(
                    format!("  {}", format_price(product.price)),
                    Style::default().fg(palette.muted),
                ),
            ]))
        })
        .collect();
    let body = inner(area);
    let row = state.selection.history_row;
    let mut list_state = ListState::default()
        .with_offset(list_offset(row, body.height as usize))
        .with_selected(focused.then_some(row));
    let list = List::new(items)
        .block(block)
        .highlight_style(selected_style(palette));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn catalog_line(product: &Product, viewed: bool, palette: UiPalette) -> Line<'static> {
    let marker = if viewed { "• " } else { "  " };
    let mut detail = product.category.clone();
    if !product.brand.is_empty() {
        detail.push_str(" · ");
        detail.push_str(&product.brand);
    }
    Line::from(vec![
        Span::styled(marker, Style::default().fg(palette.accent)),
        Span::raw(product.name.clone()),
        Span::styled(
            format!("  {}", format_price(product.price)),
            Style::default().fg(palette.success),
        ),
        Span::styled(format!("  {detail}"), Style::default().fg(palette.muted)),
    ])
}

fn render_catalog(f: &mut ratatui::Frame, area: Rect, state: &ShopState, palette: UiPalette) {
    let focused = state.selection.focus == Panel::Catalog;
    let visible = state.catalog.visible();
    let title = if state.catalog.is_loaded() {
        format!(
            "{} ({} of {})",
            Panel::Catalog.label(),
            visible.len(),
            state.catalog.products().len()
        )
    } else {
        Panel::Catalog.label().to_string()
    };
    let block = panel_block(title, focused, palette);

    if !state.catalog.is_loaded() {
        render_empty(f, area, block, "Loading catalog...");
        return;
    }
    if visible.is_empty() {
        render_empty(f, area, block, "No products match your filter.");
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|product| {
            let viewed = state.history.contains(&product.id);
            ListItem::new(catalog_line(product, viewed, palette))
        })
        .collect();
    let mut list_state = ListState::default()
        .with_offset(state.selection.catalog_offset)
        .with_selected(Some(state.selection.catalog_row));
    let highlight = if focused {
        selected_style(palette)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let list = List::new(items).block(block).highlight_style(highlight);
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_recommendations(
    f: &mut ratatui::Frame,
    area: Rect,
    state: &ShopState,
    palette: UiPalette,
) {
    let focused = state.selection.focus == Panel::Recommendations;
    let session = &state.recommendations;
    let block = panel_block(
        format!("{} ({})", Panel::Recommendations.label(), session.items.len()),
        focused,
        palette,
    );
    if session.is_loading {
        render_empty(
            f,
            area,
            block,
            &format!("{} Loading recommendations...", get_spinner()),
        );
        return;
    }
    if session.items.is_empty() {
        render_empty(
            f,
            area,
            block,
            "No recommendations yet. Press r to get recommendations!",
        );
        return;
    }

    let items: Vec<ListItem> = session
        .items
        .iter()
        .map(|rec| {
            let mut heading = vec![
                Span::styled(
                    rec.product.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", format_price(rec.product.price)),
                    Style::default().fg(palette.success),
                ),
            ];
            if let Some(score) = rec.confidence_score {
                heading.push(Span::styled(
                    format!("  score {score}"),
                    Style::default().fg(palette.accent),
                ));
            }
            let mut lines = vec![Line::from(heading)];
            if !rec.explanation.is_empty() {
                lines.push(Line::from(Span::styled(
                    rec.explanation.clone(),
                    Style::default().fg(palette.muted),
                )));
            }
            lines.push(Line::raw(""));
            ListItem::new(lines)
        })
        .collect();
    let mut list_state =
        ListState::default().with_selected(focused.then_some(state.selection.recommendation_row));
    let list = List::new(items)
        .block(block)
        .highlight_style(selected_style(palette));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(f: &mut ratatui::Frame, area: Rect, state: &ShopState, palette: UiPalette) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(palette.accent));
    let hint = |h: &'static str| Span::styled(h, Style::default().fg(palette.muted));
    let mut spans = vec![
        key("Tab"),
        hint(" panel "),
        key("Enter"),
        hint(" select "),
        key("a"),
        hint(" apply "),
        key("c"),
        hint(" clear prefs "),
        key("h"),
        hint(" clear history "),
    ];
    if !state.recommendations.is_loading {
        spans.push(key("r"));
        spans.push(hint(" recommend "));
        if !state.recommendations.items.is_empty() {
            spans.push(key("x"));
            spans.push(hint(" clear recs "));
        }
    }
    spans.extend([
        key("l"),
        hint(" logs "),
        key("?"),
        hint(" help "),
        Span::styled("q", Style::default().fg(palette.warning)),
        hint(" quit"),
    ]);
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn level_color(level: LogLevel, palette: UiPalette) -> Color {
    match level {
        LogLevel::Debug => palette.muted,
        LogLevel::Info => palette.accent,
        LogLevel::Warn => palette.warning,
        LogLevel::Error => palette.danger,
    }
}

fn log_line(entry: &LogEntry, palette: UiPalette) -> Line<'static> {
    let time = entry
        .ts_ms
        .and_then(|ms| i64::try_from(ms).ok())
        .and_then(chrono::DateTime::<chrono::Utc>::from_timestamp_millis)
        .map(|ts| ts.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());
    let mut spans = vec![
        Span::styled(
            format!("{:>4} {time} ", entry.seq),
            Style::default().fg(palette.muted),
        ),
        Span::styled(
            format!("{:<5} ", entry.level.label()),
            Style::default().fg(level_color(entry.level, palette)),
        ),
    ];
    if let Some(context) = &entry.context {
        spans.push(Span::styled(
            format!("{context}: "),
            Style::default().fg(palette.accent_alt),
        ));
    }
    spans.push(Span::raw(entry.message.clone()));
    Line::from(spans)
}

fn render_logs(f: &mut ratatui::Frame, state: &ShopState, palette: UiPalette) {
    let area = centered_rect(80, 70, f.area());
    let height = inner(area).height as usize;
    let mut lines: Vec<Line> = state
        .logs
        .iter()
        .rev()
        .take(height)
        .map(|entry| log_line(entry, palette))
        .collect();
    lines.reverse();
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No log entries.",
            Style::default().fg(palette.muted),
        )));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title(format!("Logs ({}) | c clear | Esc close", state.logs.len()));
    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help(f: &mut ratatui::Frame, palette: UiPalette) {
    let area = centered_rect(60, 70, f.area());
    let rows = [
        ("Tab / Shift-Tab", "cycle panel focus"),
        ("1-4", "focus a panel"),
        ("Up / Down", "move the cursor"),
        ("Enter / Space", "view product, toggle category, cycle price"),
        ("Left / Right", "change the price range"),
        ("a", "apply preferences to the catalog"),
        ("c", "clear preferences"),
        ("h", "clear browsing history"),
        ("r", "get recommendations"),
        ("x", "clear recommendations"),
        ("l", "diagnostics log"),
        ("q / Ctrl-C", "quit"),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("{keys:<16}"), Style::default().fg(palette.accent)),
                Span::raw(*what),
            ])
        })
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title("Help | Esc close");
    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
