use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::console::domain::models::{DestinationSummary, OverviewFilter};
use crate::console::ui::components::Component;

/// Broker overview: the destination table, filterable all/bad.
#[derive(Default)]
pub struct OverviewPage {
    broker_name: String,
    destinations: Vec<DestinationSummary>,
    cursor: usize,
    filter: OverviewFilter,
    loading: bool,
}

impl OverviewPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_broker_name(&mut self, name: String) {
        self.broker_name = name;
    }

    pub fn set_destinations(&mut self, destinations: Vec<DestinationSummary>) {
        self.destinations = destinations;
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub fn set_filter(&mut self, filter: OverviewFilter) {
        self.filter = filter;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

impl Component for OverviewPage {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let filter_label = match self.filter {
            OverviewFilter::All => "all destinations [a]",
            OverviewFilter::Bad => "only bad [b]",
        };
        let mut title = format!("Broker Overview - {} - showing {filter_label}", self.broker_name);
        if self.loading {
            title.push_str(" [loading...]");
        }

        let header = Row::new(vec!["", "Destination", "Messages", "Type"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .destinations
            .iter()
            .enumerate()
            .map(|(i, dest)| {
                let marker = if i == self.cursor { ">" } else { " " };
                let kind = if dest.is_dlq { "DLQ" } else { "queue" };
                let style = if dest.is_dlq && dest.number_of_messages > 0 {
                    Style::default().fg(Color::Red)
                } else if dest.number_of_messages > 0 {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                let row = Row::new(vec![
                    Cell::from(marker),
                    Cell::from(dest.name.clone()),
                    Cell::from(dest.number_of_messages.to_string()),
                    Cell::from(kind),
                ])
                .style(style);
                if i == self.cursor {
                    row.style(style.add_modifier(Modifier::REVERSED))
                } else {
                    row
                }
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Min(30),
                Constraint::Length(10),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(Block::default().title(Line::from(title)).borders(Borders::ALL));

        f.render_widget(table, area);
    }
}
