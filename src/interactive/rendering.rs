//! TUI rendering with ratatui
//!
//! Layout and widgets for the anagram explorer.

use super::app::{App, MessageStyle};
use crate::output::formatters::describe_query;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 ANAGRAM INDEX - Explorer")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_matches(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_matches(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Anagrams ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(lookup) = &app.current else {
        f.render_widget(Paragraph::new("No lookup yet").block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Word: "),
            Span::styled(
                lookup.word.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", lookup.anagram_key),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
    ];

    if lookup.matches.is_empty() {
        lines.push(Line::from("No anagrams stored."));
    }

    for record in &lookup.matches {
        let style = if record.word() == lookup.word {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if record.is_proper_noun() {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw("  • "),
            Span::styled(record.word().to_string(), style),
            Span::styled(
                format!("  #{}", record.id()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .map(|entry| {
            ListItem::new(format!(
                "{} [{}] → {} match(es)",
                entry.word, entry.anagram_key, entry.matches
            ))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Dictionary stats
            Constraint::Length(3), // Largest group gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_dictionary(f, app, chunks[0]);
    render_largest_group(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_dictionary(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.report {
        Some(report) => {
            let meta = &report.meta;
            vec![
                Line::from(format!("Words:    {}", meta.word_count)),
                Line::from(format!(
                    "Length:   {}-{} (median {})",
                    meta.minimum_word_length, meta.maximum_word_length, meta.median_word_length
                )),
                Line::from(format!("Average:  {:.2}", meta.average_word_length)),
                Line::from(format!("Keys:     {}", report.group_count)),
                Line::from(format!("Groups:   {}", report.anagram_group_count())),
            ]
        }
        None => vec![Line::from("Dictionary is empty")],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Dictionary ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_largest_group(f: &mut Frame, app: &App, area: Rect) {
    let (percent, label) = match app
        .report
        .as_ref()
        .and_then(|r| r.largest_group.as_ref().map(|g| (r, g)))
    {
        Some((report, group)) => {
            let share = group.len() as f64 / report.meta.word_count.max(1) as f64;
            (
                (share * 100.0).min(100.0) as u16,
                format!("{} × {} words", group.anagram_key, group.len()),
            )
        }
        None => (0, "none".to_string()),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Largest Group ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter Word | Enter: Look up ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let options = Paragraph::new(format!("Options: {}", describe_query(&app.query)))
        .alignment(Alignment::Center);
    f.render_widget(options, chunks[0]);

    let help = Paragraph::new("Esc: Quit | ^S: Self | ^P: Proper | ^L: Limit | ^D: Delete")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
