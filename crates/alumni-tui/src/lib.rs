// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use alumni_app::{
    ALL_SENTINEL, Alumnus, AppCommand, AppState, Directory, Facet, FacetConstraint, FilterEngine,
    JobPosting, OverlayPayload, OverlayState, ViewKind,
};
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs, Wrap,
};
use std::io;
use std::time::Duration;
use time::Date;
use time::macros::format_description;
use tracing::{info, warn};

pub const DEFAULT_FEATURED_COUNT: usize = 3;
const EMPTY_RESULTS_TEXT: &str = "No alumni match your filters.";
const CURSOR_MARK: &str = ">";

pub trait AppRuntime {
    fn load_directory(&mut self) -> Result<Directory>;

    fn featured_count(&self) -> usize {
        DEFAULT_FEATURED_COUNT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardEntry {
    Alumnus(usize),
    Job(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct QueryEditState {
    active: bool,
}

#[derive(Debug, Clone)]
struct ViewData {
    directory: Directory,
    engine: FilterEngine,
    featured_count: usize,
    dashboard_cursor: usize,
    directory_cursor: usize,
    directory_table: TableState,
    query_edit: QueryEditState,
    help_visible: bool,
}

impl ViewData {
    fn new(directory: Directory, featured_count: usize) -> Self {
        let engine = FilterEngine::new(directory.alumni.clone());
        Self {
            directory,
            engine,
            featured_count,
            dashboard_cursor: 0,
            directory_cursor: 0,
            directory_table: TableState::default(),
            query_edit: QueryEditState::default(),
            help_visible: false,
        }
    }

    fn dashboard_entries(&self) -> Vec<DashboardEntry> {
        let alumni = self.directory.featured_alumni(self.featured_count).len();
        let jobs = self.directory.featured_jobs(self.featured_count).len();
        (0..alumni)
            .map(DashboardEntry::Alumnus)
            .chain((0..jobs).map(DashboardEntry::Job))
            .collect()
    }

    fn clamp_directory_cursor(&mut self) {
        self.directory_cursor = self
            .directory_cursor
            .min(self.engine.result_count().saturating_sub(1));
    }
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    let directory = runtime
        .load_directory()
        .context("load directory before starting the terminal UI")?;
    let mut view_data = ViewData::new(directory, runtime.featured_count());
    info!(
        alumni = view_data.directory.alumni.len(),
        view = state.view().as_str(),
        "starting terminal UI"
    );

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut result = Ok(());
    loop {
        if let Err(error) = terminal.draw(|frame| render(frame, state, &mut view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(Duration::from_millis(120)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if !has_event {
            continue;
        }
        match event::read().context("read event") {
            Ok(Event::Key(key)) => {
                if handle_key_event(state, &mut view_data, key) {
                    break;
                }
            }
            Ok(_) => {}
            Err(error) => {
                result = Err(error);
                break;
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    if let Err(error) = &result {
        warn!(error = %error, "terminal UI exited with error");
    }
    result
}

/// Returns true when the app should quit.
fn handle_key_event(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.query_edit.active {
        handle_query_key(state, view_data, key);
        return false;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
        }
        return false;
    }

    if state.overlay().is_open() {
        return match key.code {
            KeyCode::Esc => {
                state.close_overlay();
                false
            }
            KeyCode::Char('q') => true,
            _ => false,
        };
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return true,
        (KeyCode::Char('?'), _) => view_data.help_visible = true,
        (KeyCode::Char(digit @ '1'..='4'), KeyModifiers::NONE) => {
            let index = digit as usize - '1' as usize;
            state.navigate(ViewKind::ALL[index]);
        }
        (KeyCode::Tab, _) => {
            state.dispatch(AppCommand::NextView);
        }
        (KeyCode::BackTab, _) => {
            state.dispatch(AppCommand::PrevView);
        }
        (KeyCode::Char('j') | KeyCode::Down, _) => move_cursor(state, view_data, 1),
        (KeyCode::Char('k') | KeyCode::Up, _) => move_cursor(state, view_data, -1),
        (KeyCode::Enter, _) => open_selected(state, view_data),
        (KeyCode::Char('n'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            if state.view() == ViewKind::Directory {
                let status = if view_data.engine.criteria().is_unconstrained() {
                    "no filters to clear"
                } else {
                    view_data.engine.clear();
                    view_data.directory_cursor = 0;
                    "filters cleared"
                };
                state.dispatch(AppCommand::SetStatus(status.to_owned()));
            }
        }
        _ if state.view() == ViewKind::Directory => handle_directory_key(state, view_data, key),
        _ => {}
    }
    false
}

fn handle_directory_key(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) {
    let (facet, delta) = match key.code {
        KeyCode::Char('/') => {
            view_data.query_edit.active = true;
            state.dispatch(AppCommand::SetStatus("search: type to filter".to_owned()));
            return;
        }
        KeyCode::Char('t') => {
            let next = !view_data.engine.criteria().mentor_only;
            view_data.engine.set_mentor_only(next);
            view_data.clamp_directory_cursor();
            let label = if next { "mentors only" } else { "all alumni" };
            state.dispatch(AppCommand::SetStatus(label.to_owned()));
            return;
        }
        KeyCode::Char('y') => (Facet::Year, 1),
        KeyCode::Char('Y') => (Facet::Year, -1),
        KeyCode::Char('m') => (Facet::Major, 1),
        KeyCode::Char('M') => (Facet::Major, -1),
        KeyCode::Char('l') => (Facet::Location, 1),
        KeyCode::Char('L') => (Facet::Location, -1),
        _ => return,
    };

    let next = cycle_facet(&view_data.engine, facet, delta);
    let status = format!("{}: {}", facet.label().to_lowercase(), next.as_str());
    view_data.engine.set_facet(facet, next);
    view_data.clamp_directory_cursor();
    state.dispatch(AppCommand::SetStatus(status));
}

fn handle_query_key(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) {
    let mut query = view_data.engine.criteria().query.clone();
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            view_data.query_edit.active = false;
            state.dispatch(AppCommand::ClearStatus);
            return;
        }
        KeyCode::Backspace => {
            query.pop();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => query.clear(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => query.push(ch),
        _ => return,
    }
    view_data.engine.set_query(query);
    view_data.clamp_directory_cursor();
}

/// Option index 0 is the "all" slot; the facet's option list follows it.
fn cycle_facet(engine: &FilterEngine, facet: Facet, delta: isize) -> FacetConstraint {
    let options = engine.options(facet);
    let current = match engine.criteria().facet(facet) {
        FacetConstraint::All => 0,
        FacetConstraint::Only(value) => options
            .iter()
            .position(|option| option == value)
            .map_or(0, |index| index + 1),
    };
    let slots = options.len() as isize + 1;
    let next = (current as isize + delta).rem_euclid(slots) as usize;
    if next == 0 {
        FacetConstraint::All
    } else {
        FacetConstraint::Only(options[next - 1].clone())
    }
}

fn move_cursor(state: &AppState, view_data: &mut ViewData, delta: isize) {
    let (cursor, len) = match state.view() {
        ViewKind::Dashboard => {
            let len = view_data.dashboard_entries().len();
            (&mut view_data.dashboard_cursor, len)
        }
        ViewKind::Directory => {
            let len = view_data.engine.result_count();
            (&mut view_data.directory_cursor, len)
        }
        ViewKind::Events | ViewKind::Profile => return,
    };
    if len == 0 {
        *cursor = 0;
        return;
    }
    let next = (*cursor as isize + delta).clamp(0, len as isize - 1);
    *cursor = next as usize;
}

fn open_selected(state: &mut AppState, view_data: &ViewData) {
    let payload = match state.view() {
        ViewKind::Directory => view_data
            .engine
            .result_at(view_data.directory_cursor)
            .cloned()
            .map(OverlayPayload::Alumnus),
        ViewKind::Dashboard => {
            let entries = view_data.dashboard_entries();
            match entries.get(view_data.dashboard_cursor) {
                Some(DashboardEntry::Alumnus(index)) => view_data
                    .directory
                    .alumni
                    .get(*index)
                    .cloned()
                    .map(OverlayPayload::Alumnus),
                Some(DashboardEntry::Job(index)) => view_data
                    .directory
                    .jobs
                    .get(*index)
                    .cloned()
                    .map(OverlayPayload::Job),
                None => None,
            }
        }
        ViewKind::Events | ViewKind::Profile => None,
    };
    if let Some(payload) = payload {
        state.open_overlay(payload);
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &mut ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let selected = ViewKind::ALL
        .iter()
        .position(|view| *view == state.view())
        .unwrap_or(0);
    let titles = ViewKind::ALL
        .iter()
        .enumerate()
        .map(|(index, view)| format!("{} {}", index + 1, view.label()))
        .collect::<Vec<String>>();
    let tabs = Tabs::new(titles)
        .block(Block::default().title("alumni").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, layout[0]);

    let body_block = Block::default()
        .borders(Borders::ALL)
        .title(state.view().title());
    match state.view() {
        ViewKind::Dashboard => {
            let body = Paragraph::new(render_dashboard_text(view_data))
                .block(body_block)
                .wrap(Wrap { trim: false });
            frame.render_widget(body, layout[1]);
        }
        ViewKind::Directory => render_directory(frame, layout[1], body_block, view_data),
        ViewKind::Events => {
            let body = Paragraph::new(render_events_text(&view_data.directory))
                .block(body_block)
                .wrap(Wrap { trim: false });
            frame.render_widget(body, layout[1]);
        }
        ViewKind::Profile => {
            let body = Paragraph::new(render_profile_text(&view_data.directory))
                .block(body_block)
                .wrap(Wrap { trim: false });
            frame.render_widget(body, layout[1]);
        }
    }

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if let Some(text) = render_overlay_text(state.overlay()) {
        let area = centered_rect(70, 60, frame.area());
        frame.render_widget(Clear, area);
        let overlay = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(state.overlay().title())
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(overlay, area);
    }

    if view_data.help_visible {
        let area = centered_rect(70, 50, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_directory(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    block: Block<'_>,
    view_data: &mut ViewData,
) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);
    frame.render_widget(
        Paragraph::new(render_filter_bar_text(view_data)).style(Style::default().fg(Color::Gray)),
        layout[0],
    );

    let results = view_data.engine.results();
    if results.is_empty() {
        frame.render_widget(Paragraph::new(EMPTY_RESULTS_TEXT), layout[1]);
        return;
    }

    let rows = results
        .iter()
        .map(|alumnus| Row::new(directory_row(alumnus).map(Cell::from)));
    let header = Row::new(["Name", "Class", "Major", "Role", "Location", "Mentor"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(18),
            Constraint::Length(6),
            Constraint::Percentage(20),
            Constraint::Percentage(28),
            Constraint::Percentage(18),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    // The table scrolls its offset so the selected row stays in view.
    view_data
        .directory_table
        .select(Some(view_data.directory_cursor));
    frame.render_stateful_widget(table, layout[1], &mut view_data.directory_table);
}

fn directory_row(alumnus: &Alumnus) -> [String; 6] {
    [
        alumnus.name.clone(),
        alumnus.graduation_year.to_string(),
        alumnus.major.clone(),
        format!("{} @ {}", alumnus.position, alumnus.company),
        alumnus.location.clone(),
        if alumnus.is_mentor { "yes" } else { "" }.to_owned(),
    ]
}

fn render_filter_bar_text(view_data: &ViewData) -> String {
    let engine = &view_data.engine;
    let criteria = engine.criteria();
    let cursor = if view_data.query_edit.active {
        "_"
    } else {
        ""
    };
    let facets = Facet::ALL
        .iter()
        .map(|facet| {
            format!(
                "{}: {}",
                facet.label().to_lowercase(),
                criteria.facet(*facet).as_str()
            )
        })
        .collect::<Vec<String>>()
        .join(" | ");
    let active = match criteria.active_constraints() {
        0 => String::new(),
        1 => " (1 filter)".to_owned(),
        count => format!(" ({count} filters)"),
    };
    format!(
        "search: {}{cursor} | {facets} | mentors only: {}\n{} of {} alumni{active}",
        criteria.query,
        if criteria.mentor_only { "on" } else { "off" },
        engine.result_count(),
        engine.dataset().len(),
    )
}

fn render_dashboard_text(view_data: &ViewData) -> String {
    let directory = &view_data.directory;
    let counts = directory.dashboard_counts();
    let mut lines = vec![
        format!(
            "Alumni: {} | Mentors: {} | Upcoming events: {} | Open jobs: {}",
            counts.alumni, counts.mentors, counts.upcoming_events, counts.open_jobs
        ),
        String::new(),
        "Latest news".to_owned(),
    ];
    if directory.news.is_empty() {
        lines.push("  no news yet".to_owned());
    }
    for item in &directory.news {
        lines.push(format!(
            "  {} ({}): {}",
            item.title,
            format_date(item.published_on),
            item.summary
        ));
    }

    let entries = view_data.dashboard_entries();
    let mark = |entry: DashboardEntry| {
        if entries.get(view_data.dashboard_cursor) == Some(&entry) {
            CURSOR_MARK
        } else {
            " "
        }
    };

    lines.push(String::new());
    lines.push("Featured alumni".to_owned());
    for (index, alumnus) in directory
        .featured_alumni(view_data.featured_count)
        .iter()
        .enumerate()
    {
        lines.push(format!(
            "{} {} | {} @ {}",
            mark(DashboardEntry::Alumnus(index)),
            alumnus.name,
            alumnus.position,
            alumnus.company
        ));
    }

    lines.push(String::new());
    lines.push("Featured jobs".to_owned());
    for (index, job) in directory
        .featured_jobs(view_data.featured_count)
        .iter()
        .enumerate()
    {
        lines.push(format!(
            "{} {} | {} | {}",
            mark(DashboardEntry::Job(index)),
            job.title,
            job.company,
            job.location
        ));
    }
    lines.join("\n")
}

fn render_events_text(directory: &Directory) -> String {
    if directory.events.is_empty() {
        return "No upcoming events.".to_owned();
    }
    directory
        .events
        .iter()
        .map(|event| {
            format!(
                "{} | {} | {}\n    {}",
                format_date(event.date),
                event.title,
                event.location,
                event.description
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn render_profile_text(directory: &Directory) -> String {
    let Some(user) = directory.current_user() else {
        return "No profile available.".to_owned();
    };
    let mut lines = vec![
        format!("Welcome back, {}", user.first_name()),
        String::new(),
    ];
    lines.extend(alumnus_detail_lines(user));
    lines.join("\n")
}

fn render_overlay_text(overlay: &OverlayState) -> Option<String> {
    let lines = match overlay {
        OverlayState::Closed => return None,
        OverlayState::Open(OverlayPayload::Alumnus(alumnus)) => alumnus_detail_lines(alumnus),
        OverlayState::Open(OverlayPayload::Job(job)) => job_detail_lines(job),
    };
    let mut text = lines.join("\n");
    text.push_str("\n\nesc close");
    Some(text)
}

fn alumnus_detail_lines(alumnus: &Alumnus) -> Vec<String> {
    let mut lines = vec![
        alumnus.name.clone(),
        format!("{} at {}", alumnus.position, alumnus.company),
        format!("Location: {}", alumnus.location),
        format!("Class of {} | {}", alumnus.graduation_year, alumnus.major),
    ];
    if alumnus.is_mentor {
        lines.push("Available as a mentor".to_owned());
    }
    if !alumnus.skills.is_empty() {
        lines.push(format!("Skills: {}", alumnus.skills.join(", ")));
    }
    if !alumnus.bio.is_empty() {
        lines.push(String::new());
        lines.push(alumnus.bio.clone());
    }
    lines
}

fn job_detail_lines(job: &JobPosting) -> Vec<String> {
    let mut lines = vec![
        job.title.clone(),
        format!(
            "{} | {} | {}",
            job.company,
            job.location,
            job.employment_type.as_str()
        ),
        format!("Posted {}", format_date(job.posted_at)),
        String::new(),
        job.description.clone(),
    ];
    if !job.requirements.is_empty() {
        lines.push(String::new());
        lines.push("Requirements".to_owned());
        lines.extend(job.requirements.iter().map(|item| format!("  - {item}")));
    }
    lines.push(String::new());
    lines.push(format!("Apply: {}", job.apply_url));
    lines
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.help_visible {
        return "esc/? close help".to_owned();
    }
    if state.overlay().is_open() {
        return "esc close | q quit".to_owned();
    }
    if view_data.query_edit.active {
        return "type to search | backspace | ctrl+u clear | enter/esc done".to_owned();
    }

    let hints = match state.view() {
        ViewKind::Directory => "j/k | enter open | / search | y/m/l facets | t mentors | ctrl+n clear",
        ViewKind::Dashboard => "j/k | enter open",
        ViewKind::Events | ViewKind::Profile => "",
    };
    let mut parts = vec![state.view().label().to_uppercase()];
    if let Some(status) = &state.status_line {
        parts.push(status.clone());
    }
    if !hints.is_empty() {
        parts.push(hints.to_owned());
    }
    parts.push("1-4 tab views | ? help | q quit".to_owned());
    parts.join(" | ")
}

fn help_overlay_text() -> String {
    format!(
        "global: 1-4 views | tab/shift+tab cycle | j/k move | enter open | esc close | ? help | q ctrl+q quit\n\
directory: / search | y/Y year | m/M major | l/L location | t mentors only | ctrl+n clear filters\n\
facets cycle through `{ALL_SENTINEL}` and every value in the directory\n\
details: esc close"
    )
}

fn format_date(date: Date) -> String {
    date.format(&format_description!(
        "[month repr:short] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
