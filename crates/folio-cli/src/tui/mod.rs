//! Interactive TUI (Terminal User Interface) for Folio.
//!
//! Provides a responsive global-search interface with:
//! - Real-time search as you type, across projects, blogs, and pages
//! - Navigation through results
//! - Kind cycling (all → projects → blogs → pages)
//! - Enter prints the selected item's link on exit

use crate::app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{Config, ItemKind, SearchableItem, TextQuery};
use ratatui::{prelude::*, widgets::*};
use std::io;
use std::time::{Duration, Instant};

/// TUI application state.
struct TuiApp {
    /// The main application
    app: App,

    /// Current search query string
    query_string: String,

    /// Current search results
    results: Vec<SearchableItem>,

    /// Selected result index
    selected: usize,

    /// Vertical scroll offset
    scroll_offset: usize,

    /// Rows the results list can show, updated on every draw
    visible_height: usize,

    /// Whether we should quit
    should_quit: bool,

    /// Last search time
    last_search_time: Duration,

    /// Active kind filter (None = all kinds)
    kind_filter: Option<ItemKind>,

    /// Link to print after the terminal is restored
    chosen_link: Option<String>,
}

impl TuiApp {
    fn new(app: App) -> Self {
        // Real height arrives with the first draw
        let visible_height = app.config.ui.page_size.max(1);
        TuiApp {
            app,
            query_string: String::new(),
            results: Vec::new(),
            selected: 0,
            scroll_offset: 0,
            visible_height,
            should_quit: false,
            last_search_time: Duration::ZERO,
            kind_filter: None,
            chosen_link: None,
        }
    }

    /// Perform a search with the current query.
    fn search(&mut self) {
        let start = Instant::now();

        let query = TextQuery::new(&self.query_string);
        self.results = self
            .app
            .catalog
            .search_items(&query, self.kind_filter.as_ref())
            .into_iter()
            .cloned()
            .collect();
        self.last_search_time = start.elapsed();

        // Reset selection
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Handle input character.
    fn on_char(&mut self, c: char) {
        self.query_string.push(c);
        self.search();
    }

    /// Handle backspace.
    fn on_backspace(&mut self) {
        self.query_string.pop();
        self.search();
    }

    /// Move selection up.
    fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.ensure_visible();
        }
    }

    /// Move selection down.
    fn select_next(&mut self) {
        if self.selected + 1 < self.results.len() {
            self.selected += 1;
            self.ensure_visible();
        }
    }

    /// Page up.
    fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
        self.ensure_visible();
    }

    /// Page down.
    fn page_down(&mut self, page_size: usize) {
        self.selected = (self.selected + page_size).min(self.results.len().saturating_sub(1));
        self.ensure_visible();
    }

    /// Ensure selected item is visible at the last drawn height.
    fn ensure_visible(&mut self) {
        let visible_height = self.visible_height.max(1);

        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected - visible_height + 1;
        }
    }

    /// Cycle the kind filter: all → projects → blogs → pages → all.
    fn cycle_kind(&mut self) {
        self.kind_filter = match self.kind_filter {
            None => Some(ItemKind::Project),
            Some(ItemKind::Project) => Some(ItemKind::Blog),
            Some(ItemKind::Blog) => Some(ItemKind::Page),
            Some(ItemKind::Page) => None,
        };
        self.search();
    }

    /// Accept the selected item: remember its link and quit.
    fn accept_selected(&mut self) {
        if let Some(item) = self.results.get(self.selected) {
            self.chosen_link = Some(item.link.clone());
            self.should_quit = true;
        }
    }
}

/// Run the TUI application.
pub fn run(config: Config) -> anyhow::Result<()> {
    let app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut tui_app = TuiApp::new(app);

    // Initial search (empty query = full union; the hint screen covers it)
    tui_app.search();

    // Main loop
    let result = run_loop(&mut terminal, &mut tui_app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(link) = tui_app.chosen_link {
        println!("{}", link);
    }

    result
}

/// Main event loop.
fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut TuiApp) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Tab => {
                            app.cycle_kind();
                        }
                        KeyCode::Char(c) => {
                            app.on_char(c);
                        }
                        KeyCode::Backspace => {
                            app.on_backspace();
                        }
                        KeyCode::Up => {
                            app.select_previous();
                        }
                        KeyCode::Down => {
                            app.select_next();
                        }
                        KeyCode::PageUp => {
                            app.page_up(app.visible_height.max(1));
                        }
                        KeyCode::PageDown => {
                            app.page_down(app.visible_height.max(1));
                        }
                        KeyCode::Home => {
                            app.selected = 0;
                            app.scroll_offset = 0;
                        }
                        KeyCode::End => {
                            if !app.results.is_empty() {
                                app.selected = app.results.len() - 1;
                                app.ensure_visible();
                            }
                        }
                        KeyCode::Enter => {
                            app.accept_selected();
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

mod ui {
    use super::*;

    /// Draw the UI.
    pub fn draw(f: &mut Frame, app: &mut TuiApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Search box
                Constraint::Min(10),   // Results
                Constraint::Length(2), // Status bar
            ])
            .split(f.area());

        draw_search_box(f, app, chunks[0]);
        draw_results(f, app, chunks[1]);
        draw_status_bar(f, app, chunks[2]);
    }

    /// Draw the search input box.
    fn draw_search_box(f: &mut Frame, app: &TuiApp, area: Rect) {
        let input = Paragraph::new(app.query_string.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" 🔍 Search projects, blogs, pages "),
            );
        f.render_widget(input, area);

        // Show cursor inside the box, after the last typed character
        let inner_width = area.width.saturating_sub(2);
        let cursor_x = cursor_column(&app.query_string, inner_width.saturating_sub(1));
        f.set_cursor_position(Position::new(area.x + 1 + cursor_x, area.y + 1));
    }

    /// Column of the input cursor: one cell per character, clamped so the
    /// cursor never leaves the input box.
    pub(super) fn cursor_column(query: &str, max_column: u16) -> u16 {
        let chars = query.chars().count().min(u16::MAX as usize) as u16;
        chars.min(max_column)
    }

    /// Draw the results list, or a hint/empty state.
    fn draw_results(f: &mut Frame, app: &mut TuiApp, area: Rect) {
        // Mirror the search modal's behavior: an empty query shows a hint,
        // a query with no matches shows an explicit empty state.
        if app.query_string.trim().is_empty() && app.kind_filter.is_none() {
            let hint = Paragraph::new("Start typing to search...\n\nTab: filter by kind  Esc: close")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(" Results "));
            f.render_widget(hint, area);
            return;
        }

        if app.results.is_empty() {
            let empty = Paragraph::new(format!(
                "No results found for \"{}\"",
                app.query_string.trim()
            ))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Results "));
            f.render_widget(empty, area);
            return;
        }

        let visible_height = area.height.saturating_sub(2) as usize;

        // Scroll against the height actually drawn, in both directions
        app.visible_height = visible_height;
        app.ensure_visible();

        let items: Vec<ListItem> = app
            .results
            .iter()
            .skip(app.scroll_offset)
            .take(visible_height)
            .enumerate()
            .map(|(i, item)| {
                let icon = match item.kind {
                    ItemKind::Project => "📁",
                    ItemKind::Blog => "📄",
                    ItemKind::Page => "➜",
                };

                let line = format!(
                    "{} {} - {} [{}]",
                    icon, item.title, item.description, item.kind
                );

                let style = if i + app.scroll_offset == app.selected {
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                ListItem::new(line).style(style)
            })
            .collect();

        let title = format!(
            " Results ({} found in {:.1}ms) ",
            app.results.len(),
            app.last_search_time.as_secs_f64() * 1000.0
        );

        let results = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

        f.render_widget(results, area);
    }

    /// Draw the status bar.
    fn draw_status_bar(f: &mut Frame, app: &TuiApp, area: Rect) {
        let stats = app.app.catalog.stats();

        let filter = match app.kind_filter {
            None => "All".to_string(),
            Some(kind) => format!("{}s", kind),
        };

        let status = format!(
            "Catalog: {} projects, {} posts, {} pages | Filter: {} | ↑↓:Navigate Enter:Select Tab:Kind Esc:Quit",
            stats.projects, stats.posts, stats.pages, filter
        );

        let status_bar = Paragraph::new(status).style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tui_app() -> TuiApp {
        let app = App::new(Config::default()).unwrap();
        let mut tui_app = TuiApp::new(app);
        tui_app.search(); // empty query = full union
        tui_app
    }

    #[test]
    fn test_scroll_follows_selection_both_ways() {
        let mut app = tui_app();
        assert!(app.results.len() > 12);
        app.visible_height = 5;

        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.selected, 10);
        assert_eq!(app.scroll_offset, 6);

        for _ in 0..8 {
            app.select_previous();
        }
        assert_eq!(app.selected, 2);
        assert_eq!(app.scroll_offset, 2);
    }

    #[test]
    fn test_scroll_uses_drawn_height_not_page_size() {
        let mut app = tui_app();
        // Terminal shorter than the configured page size
        app.app.config.ui.page_size = 50;
        app.visible_height = 3;

        for _ in 0..5 {
            app.select_next();
        }
        assert_eq!(app.selected, 5);
        assert_eq!(app.scroll_offset, 3);
    }

    #[test]
    fn test_cursor_column_counts_chars_and_clamps() {
        assert_eq!(ui::cursor_column("héllo", 40), 5);
        assert_eq!(ui::cursor_column("a long query string", 10), 10);
        assert_eq!(ui::cursor_column("", 40), 0);
    }

    #[test]
    fn test_kind_cycle_wraps() {
        let mut app = tui_app();
        app.cycle_kind();
        assert_eq!(app.kind_filter, Some(ItemKind::Project));
        app.cycle_kind();
        app.cycle_kind();
        app.cycle_kind();
        assert_eq!(app.kind_filter, None);
    }
}
