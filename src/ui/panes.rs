//! Rendering logic for each TUI pane

use crate::config::VALUE_RANGE;
use crate::display::{DisplayArray, VisualTag};
use crate::history::RunRecord;
use crate::session::Phase;
use crate::trace::{Algorithm, Operation};
use crate::ui::theme::DEFAULT_THEME;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

const LEGEND: [(VisualTag, &str); 5] = [
    (VisualTag::Default, "Default"),
    (VisualTag::Comparing, "Comparing"),
    (VisualTag::Swapping, "Swapping"),
    (VisualTag::Pivot, "Pivot"),
    (VisualTag::Sorted, "Sorted"),
];

fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Width and gap so that `count` bars fill `width` columns
fn bar_geometry(width: u16, count: usize) -> (u16, u16) {
    let count = count.max(1) as u16;
    let gap = if width >= count * 2 { 1 } else { 0 };
    let bar_width = width.saturating_sub(gap * count.saturating_sub(1)) / count;
    (bar_width.max(1), gap)
}

/// Render the bar chart of the display array, with a legend underneath
pub fn render_bars_pane(frame: &mut Frame, area: Rect, display: &DisplayArray) {
    let block = pane_block(" Array ", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let (bar_width, bar_gap) = bar_geometry(rows[0].width, display.len());
    let bars: Vec<Bar> = display
        .cells()
        .iter()
        .map(|cell| {
            Bar::default()
                .value(u64::from(cell.value))
                .text_value(String::new())
                .style(Style::default().fg(DEFAULT_THEME.tag_color(cell.tag)))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(u64::from(*VALUE_RANGE.end()));
    frame.render_widget(chart, rows[0]);

    let mut legend = Vec::new();
    for (tag, label) in LEGEND {
        legend.push(Span::styled("■ ", Style::default().fg(DEFAULT_THEME.tag_color(tag))));
        legend.push(Span::styled(
            format!("{}   ", label),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(legend)).alignment(Alignment::Center),
        rows[1],
    );
}

/// Current settings and the operation being shown
#[allow(clippy::too_many_arguments)]
pub fn render_controls_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm: Algorithm,
    array_size: usize,
    speed: u8,
    delay_ms: u128,
    last_operation: Option<&Operation>,
    user: Option<&str>,
) {
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default()
        .fg(DEFAULT_THEME.fg)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Algorithm  ", label),
            Span::styled(algorithm.name(), value.fg(DEFAULT_THEME.primary)),
        ]),
        Line::from(vec![
            Span::styled("Size       ", label),
            Span::styled(array_size.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Speed      ", label),
            Span::styled(format!("{}%", speed), value),
            Span::styled(format!("  ({} ms/step)", delay_ms), label),
        ]),
        Line::from(vec![
            Span::styled("User       ", label),
            match user {
                Some(name) => Span::styled(name.to_string(), value),
                None => Span::styled("anonymous", label),
            },
        ]),
        Line::from(""),
    ];

    if let Some(op) = last_operation {
        lines.push(Line::from(vec![
            Span::styled("Last op    ", label),
            describe_operation(op),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(pane_block(" Controls ", false));
    frame.render_widget(paragraph, area);
}

fn describe_operation(op: &Operation) -> Span<'static> {
    match op {
        Operation::Compare { indices: [i, j] } => Span::styled(
            format!("compare [{}] ↔ [{}]", i, j),
            Style::default().fg(DEFAULT_THEME.bar_comparing),
        ),
        Operation::Swap {
            indices: [i, j],
            values: [a, b],
        } => Span::styled(
            format!("swap [{}]={} [{}]={}", i, a, j, b),
            Style::default().fg(DEFAULT_THEME.bar_swapping),
        ),
        Operation::Overwrite { writes } => {
            let text = writes
                .iter()
                .map(|(idx, value)| format!("[{}]={}", idx, value))
                .collect::<Vec<_>>()
                .join(" ");
            Span::styled(
                format!("write {}", text),
                Style::default().fg(DEFAULT_THEME.bar_swapping),
            )
        }
        Operation::Pivot { index } => Span::styled(
            format!("pivot [{}]", index),
            Style::default().fg(DEFAULT_THEME.bar_pivot),
        ),
        Operation::MarkSorted { indices } => Span::styled(
            format!("sorted ×{}", indices.len()),
            Style::default().fg(DEFAULT_THEME.bar_sorted),
        ),
    }
}

/// Description, complexity and characteristics of the selected algorithm
pub fn render_info_pane(frame: &mut Frame, area: Rect, algorithm: Algorithm) {
    let info = algorithm.info();
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let number = Style::default().fg(DEFAULT_THEME.secondary);

    let mut lines = vec![
        Line::from(Span::styled(info.description, Style::default().fg(DEFAULT_THEME.fg))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Time  best ", label),
            Span::styled(info.time.best, number),
            Span::styled("  avg ", label),
            Span::styled(info.time.average, number),
            Span::styled("  worst ", label),
            Span::styled(info.time.worst, number),
        ]),
        Line::from(vec![
            Span::styled("Space ", label),
            Span::styled(info.space, number),
        ]),
    ];
    for trait_line in info.characteristics {
        lines.push(Line::from(vec![
            Span::styled(" • ", Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(*trait_line, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    let title = format!(" {} ", info.name);
    let paragraph = Paragraph::new(lines)
        .block(pane_block(&title, false))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Most recent runs, newest first
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    records: &[RunRecord],
    user: Option<&str>,
) {
    let block = pane_block(" History ", false);

    if user.is_none() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Pass --user <name> to keep a history of runs",
            Style::default().fg(DEFAULT_THEME.comment),
        )))
        .block(block)
        .wrap(Wrap { trim: true });
        frame.render_widget(hint, area);
        return;
    }

    if records.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No runs yet",
            Style::default().fg(DEFAULT_THEME.comment),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = records
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<15}", record.algorithm),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
                Span::styled(
                    format!("{:>3} ", record.array_size),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(
                    format!("{:>10.2} ms", record.elapsed_ms),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Render the status bar
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    current_step: usize,
    total_steps: usize,
    phase: Phase,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: Step info and status
    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", current_step, total_steps),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play/pause ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" → ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⇥/1-5 ", key_style),
        Span::styled(" algo ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" size ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" +/- ", key_style),
        Span::styled(" speed ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" r ", key_style),
        Span::styled(" reset ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
        Span::styled("│", sep_style),
    ];

    let (badge, color) = match phase {
        Phase::Idle => (" IDLE ", DEFAULT_THEME.comment),
        Phase::Running => (" ▶ RUNNING ", DEFAULT_THEME.secondary),
        Phase::Paused => (" ❚❚ PAUSED ", DEFAULT_THEME.primary),
        Phase::Completed => (" DONE ", DEFAULT_THEME.success),
    };
    right_spans.push(Span::styled(
        badge,
        Style::default()
            .bg(color)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_geometry_fills_width() {
        assert_eq!(bar_geometry(100, 20), (4, 1));
        assert_eq!(bar_geometry(30, 20), (1, 0));
        assert_eq!(bar_geometry(10, 0), (10, 1));
    }
}
