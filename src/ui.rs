//! Drawing - turns a [`RenderState`] into terminal widgets or plain text

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, LOADING_TEXT};
use crate::messages::{RenderState, ViewBody};
use crate::models::{Article, Category};

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let category_rows = if state.categories_enabled() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Header
            Constraint::Length(category_rows), // Category selector
            Constraint::Min(3),                // Body
            Constraint::Length(1),             // Refresh button
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    draw_header(f, chunks[0]);
    if let Some(category) = state.category {
        draw_category_bar(f, category, chunks[1]);
    }
    draw_body(f, state, chunks[2]);
    draw_refresh_button(f, state, chunks[3]);
    draw_status_bar(f, state, chunks[4]);

    if state.show_help {
        draw_help_popup(f, state, area);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(APP_NAME).bold().cyan()).alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_category_bar(f: &mut Frame, selected: Category, area: Rect) {
    let labels: Vec<String> = Category::ALL.iter().map(|c| c.label()).collect();
    let titles: Vec<&str> = labels.iter().map(String::as_str).collect();
    f.render_widget(render_tabs(&titles, selected.index()), area);
}

fn draw_body(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", state.heading()))
        .title_style(Style::default().bold());

    match state.body() {
        ViewBody::Loading => {
            let loading = Paragraph::new(LOADING_TEXT)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(loading, area);
        }
        ViewBody::Error(message) => {
            let error = Paragraph::new(message)
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(error, area);
        }
        ViewBody::Articles(articles) => {
            let items: Vec<ListItem> = articles.iter().map(article_card).collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("> ");

            let mut list_state = ListState::default();
            list_state.select(Some(state.selected_article.min(articles.len() - 1)));
            f.render_stateful_widget(list, area, &mut list_state);
        }
        ViewBody::Empty => {
            let empty = Paragraph::new(state.empty_text())
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
        }
    }
}

/// One card: title, description, source and link, followed by a spacer line
fn article_card(article: &Article) -> ListItem<'static> {
    let lines = vec![
        Line::from(article.display_title().to_string()).bold(),
        Line::from(article.display_description().to_string()),
        Line::from(format!("Source: {}", article.display_source())).dark_gray(),
        Line::from(vec![
            Span::styled("Read more ", Style::default().fg(Color::Blue).bold()),
            Span::styled(
                article.url.clone(),
                Style::default().fg(Color::Blue).underlined(),
            ),
        ]),
        Line::from(""),
    ];
    ListItem::new(lines)
}

fn draw_refresh_button(f: &mut Frame, state: &RenderState, area: Rect) {
    let style = if state.loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    };
    let button = Paragraph::new(Line::from(Span::styled(" Refresh News (r) ", style)));
    f.render_widget(button, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut status = if state.loading {
        format!(" {} ", LOADING_TEXT)
    } else if state.categories_enabled() {
        String::from(" r:refresh | 1-7/←→:category | ↑↓:select | Enter:open | ?:help | q:quit ")
    } else {
        String::from(" r:refresh | ↑↓:select | Enter:open | ?:help | q:quit ")
    };

    if let (Some(updated), Some(ms)) = (state.last_updated, state.last_time_ms) {
        status.push_str(&format!("| updated {} ({}ms) ", updated.format("%H:%M:%S"), ms));
    }

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let mut help_text = String::from(
        r#"
 INTELLIGENT NEWS - Keyboard Shortcuts

 r                  Refresh the current list
 ↑ / ↓  (k / j)     Select article
 Enter / o          Open article in browser
"#,
    );
    if state.categories_enabled() {
        help_text.push_str(
            r#" 1-7                Pick a category
 ← / →  (h / l)     Previous / next category
"#,
        );
    }
    help_text.push_str(&format!(
        r#" ?                  Toggle this help
 q / Ctrl+C         Quit

 Backend: {}

 Press any key to close...
"#,
        state.backend_url
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow).bold())
        .divider("|")
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

/// Plain-text rendering of the same view, used by `--once`
pub fn render_plain(state: &RenderState) -> String {
    let mut out = format!("{}\n{}\n\n", APP_NAME, state.heading());

    match state.body() {
        ViewBody::Loading => out.push_str(LOADING_TEXT),
        ViewBody::Error(message) => out.push_str(message),
        ViewBody::Articles(articles) => {
            let cards: Vec<String> = articles
                .iter()
                .map(|a| {
                    format!(
                        "{}\n{}\nSource: {}\nRead more: {}",
                        a.display_title(),
                        a.display_description(),
                        a.display_source(),
                        a.url
                    )
                })
                .collect();
            out.push_str(&cards.join("\n\n"));
        }
        ViewBody::Empty => out.push_str(state.empty_text()),
    }

    out.push('\n');
    out
}
