use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::console::domain::confirm::ConfirmFamily;
use crate::console::domain::gate::ActionAvailability;
use crate::console::domain::models::View;
use crate::console::ui::components::Component;

/// The action affordances: normal buttons, or the confirm/cancel pair of a
/// proposed destructive action (with the limit input for "all" scopes), or
/// nothing while an action is pending.
#[derive(Default)]
pub struct ActionBar {
    view: View,
    availability: ActionAvailability,
    proposed: Option<ConfirmFamily>,
    limit_value: String,
    busy: bool,
    has_message: bool,
}

impl ActionBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn set_availability(&mut self, availability: ActionAvailability) {
        self.availability = availability;
    }

    pub fn set_proposed(&mut self, proposed: Option<ConfirmFamily>) {
        self.proposed = proposed;
    }

    pub fn set_limit_value(&mut self, value: String) {
        self.limit_value = value;
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn set_has_message(&mut self, has_message: bool) {
        self.has_message = has_message;
    }

    fn button(label: &str, enabled: bool) -> Span<'_> {
        if enabled {
            Span::styled(label, Style::default().fg(Color::Cyan))
        } else {
            Span::styled(label, Style::default().fg(Color::DarkGray))
        }
    }

    fn confirm_line(&self, family: ConfirmFamily) -> Line<'static> {
        let label = match family {
            ConfirmFamily::DeleteSelected => "Confirm Delete Selected",
            ConfirmFamily::ReissueAll => "Confirm Reissue All",
            ConfirmFamily::DeleteAll => "Confirm Delete All",
            ConfirmFamily::DeleteSingle => "Confirm Delete",
        };
        let mut spans = vec![
            Span::styled(
                format!("[x] {label}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("[Esc] Cancel", Style::default().fg(Color::Cyan)),
        ];
        if family.uses_limit() {
            spans.push(Span::raw("  Limit messages: "));
            spans.push(Span::styled(
                format!("{}_", self.limit_value),
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }

    fn normal_line(&self) -> Line<'_> {
        if self.busy {
            return Line::from(Span::styled(
                "working...",
                Style::default().fg(Color::DarkGray),
            ));
        }
        match self.view {
            View::BrokerOverview => Line::from(vec![
                Self::button("[u] Update", true),
                Span::raw("  "),
                Self::button("[a] All", true),
                Span::raw("  "),
                Self::button("[b] Bad only", true),
                Span::raw("  "),
                Self::button("[Enter] Browse queue", true),
            ]),
            View::QueueBrowse => Line::from(vec![
                Self::button("[r] Reissue selected", self.availability.reissue_selected),
                Span::raw("  "),
                Self::button("[d] Delete selected", self.availability.delete_selected),
                Span::raw("  "),
                Self::button("[R] Reissue all", self.availability.reissue_all),
                Span::raw("  "),
                Self::button("[D] Delete all", self.availability.delete_all),
                Span::raw("  "),
                Self::button("[u] Update", true),
                Span::raw("  "),
                Self::button("[Space] Select  [a] Select all  [i] Invert", true),
            ]),
            View::MessageExamine => Line::from(vec![
                Self::button("[r] Reissue", true),
                Span::raw("  "),
                Self::button("[d] Delete", true),
                Span::raw("  "),
                Self::button("[Enter] Call details", true),
                Span::raw("  "),
                Self::button("[Esc] Back", true),
            ]),
        }
    }
}

impl Component for ActionBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let line = match self.proposed {
            Some(family) => self.confirm_line(family),
            None => self.normal_line(),
        };
        let paragraph = Paragraph::new(line)
            .block(Block::default().title("Actions").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
