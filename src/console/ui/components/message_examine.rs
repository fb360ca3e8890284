use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
};

use crate::console::constants::{CALL_MODAL_MARGIN, CALL_MODAL_MAX_WIDTH, EXAMINE_HEADER_HEIGHT};
use crate::console::domain::models::MessageDetails;
use crate::console::ui::components::{Component, format_timestamp};

/// Message examine: the property header, the recorded call stack, and the
/// call modal overlay when one entry is active.
#[derive(Default)]
pub struct MessageExaminePage {
    details: Option<MessageDetails>,
    call_cursor: usize,
    active_modal: Option<usize>,
    scroll_offset: usize,
}

impl MessageExaminePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_details(&mut self, details: Option<MessageDetails>) {
        self.details = details;
    }

    pub fn set_call_cursor(&mut self, cursor: usize) {
        self.call_cursor = cursor;
    }

    pub fn set_active_modal(&mut self, active: Option<usize>) {
        self.active_modal = active;
    }

    fn render_header(&self, f: &mut Frame, area: Rect, details: &MessageDetails) {
        let lines = vec![
            Line::from(format!("Message Id: {}", details.msg_sys_msg_id)),
            Line::from(format!("Queue:      {}", details.queue_id)),
            Line::from(format!("Trace Id:   {}", details.trace_id)),
            Line::from(format!("From:       {}", details.from)),
            Line::from(format!("To:         {}", details.to)),
            Line::from(format!("Sent:       {}", format_timestamp(details.timestamp_millis))),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Examine Message").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_calls(&mut self, f: &mut Frame, area: Rect, details: &MessageDetails) {
        let visible = area.height.saturating_sub(3) as usize;
        // Keep the active row (modal) or the cursor row in view.
        let focus = self.active_modal.unwrap_or(self.call_cursor);
        if focus < self.scroll_offset {
            self.scroll_offset = focus;
        } else if visible > 0 && focus >= self.scroll_offset + visible {
            self.scroll_offset = focus + 1 - visible;
        }

        let header = Row::new(vec!["", "#", "Call", "From", "To"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = details
            .calls
            .iter()
            .skip(self.scroll_offset)
            .take(visible.max(1))
            .map(|call| {
                let active = self.active_modal == Some(call.call_no);
                let hovered = self.active_modal.is_none() && call.call_no == self.call_cursor;
                let marker = if active {
                    "*"
                } else if hovered {
                    ">"
                } else {
                    " "
                };
                let mut style = Style::default();
                if active {
                    style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
                } else if hovered {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Row::new(vec![
                    Cell::from(marker),
                    Cell::from(call.call_no.to_string()),
                    Cell::from(call.call_type.clone()),
                    Cell::from(call.from.clone()),
                    Cell::from(call.to.clone()),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(10),
                Constraint::Min(20),
                Constraint::Min(20),
            ],
        )
        .header(header)
        .block(Block::default().title("Call Trace").borders(Borders::ALL));
        f.render_widget(table, area);
    }

    fn render_modal(&self, f: &mut Frame, area: Rect, details: &MessageDetails, call_no: usize) {
        let Some(call) = details.calls.iter().find(|c| c.call_no == call_no) else {
            return;
        };

        let width = area
            .width
            .saturating_sub(CALL_MODAL_MARGIN * 2)
            .min(CALL_MODAL_MAX_WIDTH);
        let height = area.height.saturating_sub(CALL_MODAL_MARGIN * 2).min(20);
        let modal_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Call ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("#{} {}", call.call_no, call.call_type),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(format!("From: {}", call.from)),
            Line::from(format!("To:   {}", call.to)),
            Line::from(""),
        ];
        lines.extend(call.detail.lines().map(|l| Line::from(l.to_string())));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Up/Down: walk calls  Esc: close",
            Style::default().fg(Color::DarkGray),
        )));

        f.render_widget(Clear, modal_area);
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title("Call and State")
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::Black)),
        );
        f.render_widget(paragraph, modal_area);
    }
}

impl Component for MessageExaminePage {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(details) = self.details.clone() else {
            f.render_widget(
                Paragraph::new("No message loaded")
                    .block(Block::default().borders(Borders::ALL)),
                area,
            );
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(EXAMINE_HEADER_HEIGHT + 1),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_header(f, chunks[0], &details);
        self.render_calls(f, chunks[1], &details);

        if let Some(call_no) = self.active_modal {
            self.render_modal(f, area, &details, call_no);
        }
    }
}
