use anyhow::Result;
use clinic_metrics::{
    city_comparison, derive_clinic_view, ecom_year_over_year, first_time_share,
    format_compact, format_indian, format_multiplier, format_ratio_percent, format_share,
    state_comparison, ClinicRecord, ClinicViewSummary, Dataset, KpiSummary, Ratio, SortKey, Tab,
    ViewState, ZoneFilter,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;
use tracing::{error, info};

pub struct App {
    pub dataset: Dataset,
    pub view: ViewState,
    pub kpis: KpiSummary,
    pub clinic_state: TableState,
    pub zone_state: TableState,
}

impl App {
    pub fn new(dataset: Dataset, view: ViewState) -> Self {
        let kpis = dataset.kpis();

        let mut clinic_state = TableState::default();
        if !dataset.clinics().is_empty() {
            clinic_state.select(Some(0));
        }

        let mut zone_state = TableState::default();
        zone_state.select(Some(0));

        Self {
            dataset,
            view,
            kpis,
            clinic_state,
            zone_state,
        }
    }

    /// Clinic rows for the current selection, recomputed on every call
    pub fn clinic_rows(&self) -> Vec<&ClinicRecord> {
        derive_clinic_view(
            self.dataset.clinics(),
            self.view.sort_key,
            &self.view.zone_filter,
        )
    }

    pub fn selected_clinic(&self) -> Option<&ClinicRecord> {
        self.clinic_state
            .selected()
            .and_then(|i| self.clinic_rows().get(i).copied())
    }

    pub fn next_tab(&mut self) {
        self.view = self.view.with_tab(self.view.tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.view = self.view.with_tab(self.view.tab.previous());
    }

    pub fn cycle_sort_key(&mut self) {
        self.view = self.view.with_sort_key(self.view.sort_key.next());
        self.reset_clinic_selection();
    }

    pub fn cycle_zone_filter(&mut self) {
        let next = self.view.zone_filter.next(&self.dataset.zone_names());
        self.view = self.view.with_zone_filter(next);
        self.reset_clinic_selection();
    }

    pub fn clear_zone_filter(&mut self) {
        self.view = self.view.with_zone_filter(ZoneFilter::All);
        self.reset_clinic_selection();
    }

    fn reset_clinic_selection(&mut self) {
        if self.clinic_rows().is_empty() {
            self.clinic_state.select(None);
        } else {
            self.clinic_state.select(Some(0));
        }
    }

    /// Table cursor and row count for the current tab
    fn active_table(&mut self) -> Option<(&mut TableState, usize)> {
        match self.view.tab {
            Tab::Clinics => {
                let len = self.clinic_rows().len();
                Some((&mut self.clinic_state, len))
            }
            Tab::Zones => {
                let len = self.dataset.zones().len();
                Some((&mut self.zone_state, len))
            }
            Tab::Overview | Tab::OnlineVsOffline => None,
        }
    }

    pub fn next(&mut self) {
        self.move_selection(|i, len| if i >= len - 1 { 0 } else { i + 1 });
    }

    pub fn previous(&mut self) {
        self.move_selection(|i, len| if i == 0 { len - 1 } else { i - 1 });
    }

    pub fn page_down(&mut self) {
        self.move_selection(|i, len| (i + 10).min(len - 1));
    }

    pub fn page_up(&mut self) {
        self.move_selection(|i, _| i.saturating_sub(10));
    }

    pub fn first(&mut self) {
        self.move_selection(|_, _| 0);
    }

    pub fn last(&mut self) {
        self.move_selection(|_, len| len - 1);
    }

    fn move_selection(&mut self, step: impl Fn(usize, usize) -> usize) {
        if let Some((state, len)) = self.active_table() {
            if len == 0 {
                return;
            }
            let i = match state.selected() {
                Some(i) => step(i.min(len - 1), len),
                None => 0,
            };
            state.select(Some(i));
        }
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("dashboard started");
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "dashboard loop failed");
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::BackTab => app.previous_tab(),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_tab();
                    } else {
                        app.next_tab();
                    }
                }
                KeyCode::Char('s') => {
                    app.cycle_sort_key();
                    app.view = app.view.with_tab(Tab::Clinics);
                }
                KeyCode::Char('z') => {
                    app.cycle_zone_filter();
                    app.view = app.view.with_tab(Tab::Clinics);
                }
                KeyCode::Char('c') => app.clear_zone_filter(),
                KeyCode::Char('1') => app.view = app.view.with_tab(Tab::Overview),
                KeyCode::Char('2') => app.view = app.view.with_tab(Tab::Zones),
                KeyCode::Char('3') => app.view = app.view.with_tab(Tab::Clinics),
                KeyCode::Char('4') => app.view = app.view.with_tab(Tab::OnlineVsOffline),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::PageDown => app.page_down(),
                KeyCode::PageUp => app.page_up(),
                KeyCode::Home => app.first(),
                KeyCode::End => app.last(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with tabs
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.view.tab {
        Tab::Overview => render_overview(f, chunks[1], app),
        Tab::Zones => render_zones(f, chunks[1], app),
        Tab::Clinics => render_clinics(f, chunks[1], app),
        Tab::OnlineVsOffline => render_comparison(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    Row::new(titles.iter().map(|h| Cell::from(*h).style(header_style())))
        .style(Style::default().bg(Color::DarkGray))
        .height(1)
}

fn bordered(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(title)
}

fn growth_color(ratio: Ratio) -> Color {
    match ratio {
        Ratio::Value(v) if v < 0.0 => Color::Red,
        Ratio::Value(_) => Color::Green,
        Ratio::NotApplicable => Color::DarkGray,
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, tab) in Tab::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *tab == app.view.tab {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(tab.title().to_string(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Revenue: {}", format_indian(app.kpis.total_revenue)),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  "));
    tab_spans.push(Span::styled(
        format!("MoM {}", format_ratio_percent(app.kpis.mom_growth)),
        Style::default().fg(growth_color(app.kpis.mom_growth)),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_overview(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let kpis = &app.kpis;
    let tiles = vec![
        ("Total Revenue", format_indian(kpis.total_revenue), Color::White),
        ("Quantity", format_compact(Some(kpis.total_quantity as f64)), Color::White),
        ("Appointments", format_compact(Some(kpis.total_appointments as f64)), Color::White),
        ("Show Rate", format_share(kpis.show_pct), Color::Cyan),
        ("MoM Growth", format_ratio_percent(kpis.mom_growth), growth_color(kpis.mom_growth)),
    ];

    let tile_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, tiles.len() as u32); tiles.len()])
        .split(chunks[0]);

    for (tile_area, (label, value, color)) in tile_areas.iter().zip(tiles) {
        let tile = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(tile, *tile_area);
    }

    let header = header_row(&["Month", "Quantity", "Revenue", "Visits", "Appts", "Show %"]);

    let rows = app.dataset.monthly().iter().map(|m| {
        Row::new(vec![
            Cell::from(m.month.clone()),
            Cell::from(format_compact(Some(m.quantity as f64))),
            Cell::from(format_indian(m.revenue)),
            Cell::from(format_compact(Some(m.visits as f64))),
            Cell::from(format_compact(Some(m.appointments as f64))),
            Cell::from(format!("{:.1}%", m.show_pct)),
        ])
        .height(1)
    });

    let title = format!(
        " Monthly Performance (latest: {}) ",
        kpis.latest_month.as_deref().unwrap_or("-")
    );
    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(bordered(title));

    f.render_widget(table, chunks[1]);
}

fn render_zones(f: &mut Frame, area: Rect, app: &mut App) {
    let header = header_row(&[
        "Zone",
        "Clinics",
        "Revenue",
        "Share",
        "Rev/Clinic",
        "Appts",
        "Show %",
    ]);

    let shares = &app.kpis.zone_shares;
    let rows = app.dataset.zones().iter().zip(shares.iter()).map(|(zone, share)| {
        Row::new(vec![
            Cell::from(zone.name.clone()),
            Cell::from(format!("{}", zone.clinics)),
            Cell::from(format_indian(zone.revenue)),
            Cell::from(format_share(share.share)).style(Style::default().fg(Color::Cyan)),
            Cell::from(format_compact(share.revenue_per_clinic.value())),
            Cell::from(format_compact(Some(zone.appointments as f64))),
            Cell::from(format!("{:.1}%", zone.show_pct)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Length(11),
            Constraint::Length(9),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(bordered(format!(
        " Zone Performance - top zone: {} ",
        app.kpis.top_zone.as_deref().unwrap_or("-")
    )))
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.zone_state);
}

fn render_clinics(f: &mut Frame, area: Rect, app: &mut App) {
    let sort_key = app.view.sort_key;
    let view = app.clinic_rows();
    let summary = ClinicViewSummary::from_view(&view);

    let titles = [
        "Clinic", "Zone", "Region", "Revenue", "Qty", "Pincodes", "Cabins", "Show %", "Launched",
    ];
    let sort_column = match sort_key {
        SortKey::Revenue => 3,
        SortKey::Quantity => 4,
        SortKey::Pincodes => 5,
        SortKey::ShowPct => 7,
    };

    let header = Row::new(titles.iter().enumerate().map(|(i, h)| {
        if i == sort_column {
            Cell::from(format!("{} ▼", h)).style(header_style().fg(Color::Green))
        } else {
            Cell::from(*h).style(header_style())
        }
    }))
    .style(Style::default().bg(Color::DarkGray))
    .height(1);

    let rows: Vec<Row> = view
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(truncate(&c.name, 16)),
                Cell::from(c.zone.clone()),
                Cell::from(truncate(&c.region, 12)),
                Cell::from(format_indian(c.revenue)),
                Cell::from(format_compact(Some(c.quantity as f64))),
                Cell::from(format!("{}", c.pincodes)),
                Cell::from(format!("{}", c.cabins)),
                Cell::from(format!("{:.1}%", c.show_pct)),
                Cell::from(c.launch_date.format("%b %Y").to_string()),
            ])
            .height(1)
        })
        .collect();

    let title = format!(
        " Clinics - sort: {} | zone: {} | {} clinics, revenue {}, show {} ",
        sort_key.label(),
        app.view.zone_filter.label(),
        summary.rows,
        format_indian(summary.revenue),
        format_share(summary.show_pct),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(17),
            Constraint::Length(9),
            Constraint::Length(13),
            Constraint::Length(11),
            Constraint::Length(8),
            Constraint::Length(11),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(bordered(title))
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.clinic_state);
}

fn render_comparison(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Percentage(50),
            Constraint::Min(0),
        ])
        .split(area);

    // E-commerce years
    let years = app.dataset.ecom_years();
    let year_rows = years.iter().map(|y| {
        Row::new(vec![
            Cell::from(y.year.clone()),
            Cell::from(format_compact(Some(y.orders as f64))),
            Cell::from(format_compact(Some(y.first_time_orders as f64))),
            Cell::from(format_share(first_time_share(y))),
            Cell::from(format_indian(y.revenue)),
        ])
    });
    let year_table = Table::new(
        year_rows,
        [
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(12),
        ],
    )
    .header(header_row(&["Year", "Orders", "1CX", "1CX %", "Revenue"]))
    .block(bordered(format!(
        " E-commerce - YoY {} ",
        format_ratio_percent(ecom_year_over_year(years))
    )));
    f.render_widget(year_table, chunks[0]);

    // Cities
    let cities = city_comparison(app.dataset.ecom_cities());
    let city_rows = cities.iter().map(|c| {
        Row::new(vec![
            Cell::from(c.city.clone()),
            Cell::from(c.state.clone()),
            Cell::from(format_compact(Some(c.ecom_orders as f64))),
            Cell::from(format_indian(c.ecom_revenue)),
            Cell::from(format_compact(c.clinic_revenue)),
            Cell::from(format_multiplier(c.multiplier)).style(multiplier_style(c.multiplier)),
        ])
    });
    let city_table = Table::new(
        city_rows,
        [
            Constraint::Length(12),
            Constraint::Length(15),
            Constraint::Length(9),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(10),
        ],
    )
    .header(header_row(&["City", "State", "Orders", "Ecom Rev", "Clinic Rev", "Multiplier"]))
    .block(bordered(" Cities ".to_string()));
    f.render_widget(city_table, chunks[1]);

    // States
    let states = state_comparison(app.dataset.states());
    let state_rows = states.iter().map(|s| {
        Row::new(vec![
            Cell::from(s.state.clone()),
            Cell::from(format!("{}", s.clinics)),
            Cell::from(format_indian(s.ecom_revenue)),
            Cell::from(format_indian(s.clinic_revenue)),
            Cell::from(format_multiplier(s.multiplier)).style(multiplier_style(s.multiplier)),
        ])
    });
    let state_table = Table::new(
        state_rows,
        [
            Constraint::Length(15),
            Constraint::Length(8),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(10),
        ],
    )
    .header(header_row(&["State", "Clinics", "Ecom Rev", "Clinic Rev", "Multiplier"]))
    .block(bordered(" States ".to_string()));
    f.render_widget(state_table, chunks[2]);
}

fn multiplier_style(ratio: Ratio) -> Style {
    match ratio {
        Ratio::Value(_) => Style::default().fg(Color::Green),
        Ratio::NotApplicable => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![];

    if app.view.tab == Tab::Clinics {
        let selected = app.clinic_state.selected().map(|i| i + 1).unwrap_or(0);
        status_spans.push(Span::styled(
            format!(" Row: {}/{} ", selected, app.clinic_rows().len()),
            Style::default().fg(Color::Cyan),
        ));
        if let Some(clinic) = app.selected_clinic() {
            status_spans.push(Span::raw(" | "));
            status_spans.push(Span::styled(
                format!(
                    "{} ({} cabins, {} appts)",
                    clinic.name, clinic.cabins, clinic.appointments
                ),
                Style::default().fg(Color::White),
            ));
        }
    }

    if app.view.zone_filter != ZoneFilter::All {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(
            format!("Zone: {}", app.view.zone_filter.label()),
            Style::default().fg(Color::Green),
        ));
        status_spans.push(Span::raw(" ("));
        status_spans.push(Span::styled("c", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" clear)"));
    }

    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" View | "));
    status_spans.push(Span::styled("s", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Sort | "));
    status_spans.push(Span::styled("z", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Zone | "));
    status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Nav | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Dataset::builtin().unwrap(), ViewState::default())
    }

    #[test]
    fn test_tab_cycling() {
        let mut app = app();
        assert_eq!(app.view.tab, Tab::Overview);
        app.next_tab();
        assert_eq!(app.view.tab, Tab::Zones);
        app.previous_tab();
        app.previous_tab();
        assert_eq!(app.view.tab, Tab::OnlineVsOffline);
    }

    #[test]
    fn test_zone_filter_resets_selection() {
        let mut app = app();
        app.view = app.view.with_tab(Tab::Clinics);
        app.last();
        assert_eq!(app.clinic_state.selected(), Some(16));

        app.cycle_zone_filter();
        assert_eq!(app.view.zone_filter, ZoneFilter::Zone("West 1".to_string()));
        assert_eq!(app.clinic_state.selected(), Some(0));
        assert_eq!(app.clinic_rows().len(), 4);

        app.clear_zone_filter();
        assert_eq!(app.clinic_rows().len(), 17);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app();
        app.view = app.view.with_tab(Tab::Clinics);
        app.previous();
        assert_eq!(app.clinic_state.selected(), Some(16));
        app.next();
        assert_eq!(app.clinic_state.selected(), Some(0));
        app.page_down();
        assert_eq!(app.clinic_state.selected(), Some(10));
        app.page_down();
        assert_eq!(app.clinic_state.selected(), Some(16));
        app.page_up();
        assert_eq!(app.clinic_state.selected(), Some(6));
    }

    #[test]
    fn test_selected_clinic_follows_sort() {
        let mut app = app();
        assert_eq!(app.selected_clinic().unwrap().name, "Andheri");

        app.cycle_sort_key(); // quantity
        app.cycle_sort_key(); // showPct
        assert_eq!(app.view.sort_key, SortKey::ShowPct);
        assert_eq!(app.selected_clinic().unwrap().name, "Andheri");

        app.cycle_sort_key(); // pincodes
        app.view = app.view.with_tab(Tab::Clinics);
        app.next();
        assert_eq!(app.selected_clinic().unwrap().name, "Indiranagar");
    }

    #[test]
    fn test_render_clinics_keeps_selection() {
        use ratatui::backend::TestBackend;

        let mut app = app();
        app.view = app.view.with_tab(Tab::Clinics);
        for _ in 0..5 {
            app.next();
        }

        let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
        terminal.draw(|f| ui(f, &mut app)).unwrap();
        terminal.draw(|f| ui(f, &mut app)).unwrap();

        assert_eq!(app.clinic_state.selected(), Some(5));
        assert_eq!(app.selected_clinic().unwrap().name, "Koramangala");

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Row: 6/17"));
    }

    #[test]
    fn test_overview_has_no_cursor() {
        let mut app = app();
        app.next();
        assert_eq!(app.clinic_state.selected(), Some(0));
        assert_eq!(app.zone_state.selected(), Some(0));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Viman Nagar", 16), "Viman Nagar");
        assert_eq!(truncate("Jubilee Hills Extension", 10), "Jubilee...");
    }
}
