//! Form grid and result panel rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::scoring::{Rating, ScoringResult};

use super::app::{FormApp, FormCell};
use super::theme::Theme;

/// The three displayed result lines, formatted exactly as rendered.
pub fn result_lines(result: &ScoringResult) -> [String; 3] {
    [
        format!("Default Probability: {:.2}%", result.probability),
        format!("Credit Score: {}", result.credit_score),
        format!("Rating: {}", result.rating),
    ]
}

/// Render the full form view.
pub fn render(frame: &mut Frame, app: &FormApp) {
    let theme = Theme::default();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(12), // Form grid
            Constraint::Length(5),  // Result panel
            Constraint::Min(0),     // Spacer
            Constraint::Length(1),  // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], &theme);
    render_grid(frame, app, chunks[1], &theme);
    render_result(frame, app, chunks[2], &theme);
    render_footer(frame, chunks[4], &theme);
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Riskform: Credit Risk Modeling",
        theme.title_style(),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(title, area);
}

fn render_grid(frame: &mut Frame, app: &FormApp, area: Rect, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 4])
        .split(area);

    for (row_cells, row_area) in app.grid().iter().zip(rows.iter()) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*row_area);

        for (cell, cell_area) in row_cells.iter().zip(columns.iter()) {
            render_cell(frame, cell, *cell_area, theme);
        }
    }
}

fn render_cell(frame: &mut Frame, cell: &FormCell, area: Rect, theme: &Theme) {
    let widget = Paragraph::new(cell.value.clone())
        .style(theme.value_style(cell.focused))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(cell.label)
                .border_style(theme.cell_border_style(cell.focused)),
        );

    frame.render_widget(widget, area);
}

fn render_result(frame: &mut Frame, app: &FormApp, area: Rect, theme: &Theme) {
    let lines = match app.result() {
        Some(result) => {
            let [probability, score, rating] = result_lines(result);
            vec![
                Line::from(Span::styled(probability, theme.result_style())),
                Line::from(Span::styled(score, theme.result_style())),
                Line::from(Span::styled(
                    rating,
                    Style::default().fg(rating_color(result.rating, theme)),
                )),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Press Enter to calculate risk",
            theme.hint_style(),
        ))],
    };

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Result")
            .border_style(theme.cell_border_style(false)),
    );

    frame.render_widget(panel, area);
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let hints = Paragraph::new(Line::from(Span::styled(
        "Tab/Shift-Tab move  ↑/↓ adjust  ←/→ cycle options  0-9 type  Enter calculate  q quit",
        theme.hint_style(),
    )));

    frame.render_widget(hints, area);
}

fn rating_color(rating: Rating, theme: &Theme) -> ratatui::style::Color {
    match rating {
        Rating::Poor => theme.danger(),
        Rating::Average => theme.warning(),
        Rating::Good | Rating::Excellent => theme.success,
    }
}
