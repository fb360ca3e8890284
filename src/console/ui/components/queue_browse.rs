use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::console::domain::models::{MessageRow, VisualState};
use crate::console::domain::selection::{SelectionAggregate, TriState};
use crate::console::ui::components::{Component, format_timestamp};

/// Queue browse: the message rows with their selection checkboxes and
/// optimistic state coloring.
#[derive(Default)]
pub struct QueueBrowsePage {
    queue_id: String,
    total_on_queue: usize,
    rows: Vec<MessageRow>,
    cursor: usize,
    loading: bool,
}

impl QueueBrowsePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_queue_id(&mut self, queue_id: String) {
        self.queue_id = queue_id;
    }

    pub fn set_total_on_queue(&mut self, total: usize) {
        self.total_on_queue = total;
    }

    pub fn set_rows(&mut self, rows: Vec<MessageRow>) {
        self.rows = rows;
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn tri_state_marker(aggregate: &SelectionAggregate) -> &'static str {
        match aggregate.tri_state() {
            TriState::Checked => "[x]",
            TriState::Unchecked => "[ ]",
            TriState::Indeterminate => "[-]",
        }
    }

    fn row_style(row: &MessageRow) -> Style {
        match row.visual_state {
            VisualState::Normal => Style::default(),
            VisualState::Reissued => Style::default().fg(Color::Green),
            VisualState::Deleted => Style::default().fg(Color::Red),
            VisualState::Error => Style::default().fg(Color::Magenta),
        }
    }
}

impl Component for QueueBrowsePage {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let aggregate = SelectionAggregate::compute(&self.rows);
        let mut title = format!(
            "Queue {} ({} on broker) - {}",
            self.queue_id,
            self.total_on_queue,
            aggregate.summary_line()
        );
        if self.loading {
            title.push_str(" [loading...]");
        }

        let header = Row::new(vec![
            Cell::from(Self::tri_state_marker(&aggregate)),
            Cell::from("Sent"),
            Cell::from("Trace Id"),
            Cell::from("From"),
            Cell::from("Message Id"),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let check = if row.selected { "[x]" } else { "[ ]" };
                let mut style = Self::row_style(row);
                if i == self.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Row::new(vec![
                    Cell::from(check),
                    Cell::from(format_timestamp(row.timestamp_millis)),
                    Cell::from(row.trace_id.clone()),
                    Cell::from(row.from.clone()),
                    Cell::from(row.msg_sys_msg_id.clone()),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Length(19),
                Constraint::Min(20),
                Constraint::Min(16),
                Constraint::Min(16),
            ],
        )
        .header(header)
        .block(Block::default().title(Line::from(title)).borders(Borders::ALL));

        f.render_widget(table, area);
    }
}
