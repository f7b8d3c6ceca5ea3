//! Tabbed layout with an input bar.
//!
//! ```text
//! ┌─[ Course Types ]──[ Courses ]──[ Offerings ]──[ Registration ]─┐
//! │                                                                 │
//! │  (content for the active section)                               │
//! │                                                                 │
//! ├─────────────────────────────────────────────────────────────────┤
//! │ > input bar (label and student sections only)                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │ [2 types · 3 courses · 1 offering · 0 registrations]  F1-F4     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::app::{LabelKind, Section, Selector, SelectorFocus, TuiApp};
use super::dashboard;

/// Draw the full TUI layout.
pub fn draw(f: &mut Frame, app: &TuiApp) {
    let input_height = match app.section {
        Section::CourseTypes | Section::Courses | Section::Registrations => 3,
        Section::Offerings | Section::Activity => 0,
    };
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // tab bar
            Constraint::Min(5),               // content area
            Constraint::Length(input_height), // input bar
            Constraint::Length(1),            // status bar
        ])
        .split(f.area());

    draw_tab_bar(f, app, outer[0]);

    match app.section {
        Section::CourseTypes => draw_labels(f, app, LabelKind::CourseType, outer[1]),
        Section::Courses => draw_labels(f, app, LabelKind::Course, outer[1]),
        Section::Offerings => draw_offerings(f, app, outer[1]),
        Section::Registrations => draw_registrations(f, app, outer[1]),
        Section::Activity => draw_activity(f, app, outer[1]),
    }

    if input_height > 0 {
        draw_input(f, app, outer[2]);
    }
    draw_status(f, app, outer[3]);
}

fn draw_tab_bar(f: &mut Frame, app: &TuiApp, area: Rect) {
    let mut tabs: Vec<(&str, Section, &str)> = vec![
        ("Course Types", Section::CourseTypes, "1"),
        ("Courses", Section::Courses, "2"),
        ("Offerings", Section::Offerings, "3"),
        ("Registration", Section::Registrations, "4"),
    ];
    if app.debug_mode {
        tabs.push(("Activity", Section::Activity, "5"));
    }

    let spans: Vec<Span> = tabs
        .iter()
        .flat_map(|(name, section, num)| {
            let style = if *section == app.section {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            vec![
                Span::styled(format!("[F{num} {name}]"), style),
                Span::raw("  "),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn highlight() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn draw_labels(f: &mut Frame, app: &TuiApp, kind: LabelKind, area: Rect) {
    let pane = match kind {
        LabelKind::CourseType => &app.course_types,
        LabelKind::Course => &app.courses,
    };
    let labels = app.labels_for(kind);

    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let text = if label.is_empty() {
                Span::styled("(empty)", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(label.clone())
            };
            let marker = if pane.editing == Some(i) { "✎ " } else { "  " };
            ListItem::new(Line::from(vec![Span::raw(marker), text]))
        })
        .collect();

    let title = format!(" {} ({}) ", kind.title(), labels.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(highlight());
    let mut state = ListState::default();
    if !labels.is_empty() {
        state.select(Some(pane.selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn selector_widget<'a>(title: &'a str, sel: &Selector, unset: &'a str, focused: bool) -> Paragraph<'a> {
    let value = match sel.value.as_deref() {
        Some(v) => Span::raw(format!("‹ {v} ›")),
        None => Span::styled(format!("‹ {unset} ›"), Style::default().fg(Color::DarkGray)),
    };
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Paragraph::new(Line::from(value)).block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(border),
    )
}

fn draw_offerings(f: &mut Frame, app: &TuiApp, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[0]);

    let pane = &app.offerings;
    f.render_widget(
        selector_widget(
            "Course Type",
            &pane.course_type,
            "select",
            pane.focus == SelectorFocus::CourseType,
        ),
        cols[0],
    );
    f.render_widget(
        selector_widget(
            "Course",
            &pane.course,
            "select",
            pane.focus == SelectorFocus::Course,
        ),
        cols[1],
    );
    f.render_widget(
        selector_widget(
            "Filter",
            &pane.filter,
            "All Types",
            pane.focus == SelectorFocus::Filter,
        ),
        cols[2],
    );

    let visible = app.visible_offerings();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|(_, label)| ListItem::new(label.to_string()))
        .collect();
    let title = format!(
        " Course Offerings ({}/{}) ",
        visible.len(),
        app.session.offerings().len()
    );
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(highlight());
    let mut state = ListState::default();
    if !visible.is_empty() {
        state.select(Some(pane.selected));
    }
    f.render_stateful_widget(list, rows[1], &mut state);
}

fn draw_registrations(f: &mut Frame, app: &TuiApp, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let offerings = app.session.offerings();
    let items: Vec<ListItem> = offerings
        .iter()
        .map(|label| {
            let count = app.session.students_for(label).count();
            ListItem::new(Line::from(vec![
                Span::raw(label.to_string()),
                Span::styled(format!("  ({count})"), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Student Registration ")
                .borders(Borders::ALL),
        )
        .highlight_style(highlight());
    let mut state = ListState::default();
    if !offerings.is_empty() {
        state.select(Some(app.registrations.selected));
    }
    f.render_stateful_widget(list, cols[0], &mut state);

    let (title, students): (String, Vec<ListItem>) = match app.registration_target() {
        Some(target) => (
            format!(" {target} "),
            app.session
                .students_for(target)
                .map(|r| ListItem::new(r.student_name.clone()))
                .collect(),
        ),
        None => (" Students ".into(), Vec::new()),
    };
    f.render_widget(
        List::new(students).block(Block::default().title(title).borders(Borders::ALL)),
        cols[1],
    );
}

fn draw_activity(f: &mut Frame, app: &TuiApp, area: Rect) {
    let height = area.height.saturating_sub(2) as usize;
    let skip = app.event_log.len().saturating_sub(height);
    let items: Vec<ListItem> = app
        .event_log
        .iter()
        .skip(skip)
        .map(|ev| {
            let (tag, color) = if ev.is_applied() {
                ("applied", Color::Green)
            } else {
                ("ignored", Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", dashboard::format_clock(ev.at())),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{tag:<8}"), Style::default().fg(color)),
                Span::raw(ev.action().to_string()),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(Block::default().title(" Activity ").borders(Borders::ALL)),
        area,
    );
}

fn draw_input(f: &mut Frame, app: &TuiApp, area: Rect) {
    let (title, text) = match app.section {
        Section::Registrations => (
            match app.registration_target() {
                Some(target) => format!(" Student Name → {target} "),
                None => " Student Name ".to_string(),
            },
            app.registrations.student_input.as_str(),
        ),
        _ => match app.label_pane() {
            Some((_, pane)) if pane.editing.is_some() => (
                format!(" Editing row {} ", pane.editing.unwrap_or_default() + 1),
                pane.edit_buffer.as_str(),
            ),
            Some((kind, pane)) => (format!(" {} ", kind.placeholder()), pane.input.as_str()),
            None => return,
        },
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(Paragraph::new(text.to_string()).block(block), area);
    let x = inner.x + (text.chars().count() as u16).min(inner.width.saturating_sub(1));
    f.set_cursor_position(Position::new(x, inner.y));
}

fn draw_status(f: &mut Frame, app: &TuiApp, area: Rect) {
    let mut spans = vec![
        Span::styled(" [", Style::default().fg(Color::DarkGray)),
        Span::styled(
            dashboard::format_counts(&app.session),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("]", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
    ];

    if let Some(flash) = &app.flash {
        let color = if flash.applied {
            Color::Green
        } else {
            Color::DarkGray
        };
        spans.push(Span::styled(flash.text.clone(), Style::default().fg(color)));
        spans.push(Span::raw("  "));
    }

    spans.push(Span::styled(
        dashboard::key_hints(app.section, app.is_editing()),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
