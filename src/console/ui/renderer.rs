use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::console::constants::{ACTION_BAR_HEIGHT, STATUS_LINE_HEIGHT};
use crate::console::domain::models::View;
use crate::console::ui::app_state::AppState;
use crate::console::ui::components::{
    Component, action_bar::ActionBar, message_examine::MessageExaminePage,
    overview::OverviewPage, queue_browse::QueueBrowsePage, status_line::StatusLineView,
};

pub struct Renderer {
    overview: OverviewPage,
    queue_browse: QueueBrowsePage,
    message_examine: MessageExaminePage,
    action_bar: ActionBar,
    status_line: StatusLineView,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            overview: OverviewPage::new(),
            queue_browse: QueueBrowsePage::new(),
            message_examine: MessageExaminePage::new(),
            action_bar: ActionBar::new(),
            status_line: StatusLineView::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(ACTION_BAR_HEIGHT),
                Constraint::Length(STATUS_LINE_HEIGHT),
            ])
            .split(f.area());

        match state.view {
            View::BrokerOverview => {
                self.overview.set_broker_name(state.overview.broker_name.clone());
                self.overview.set_destinations(state.overview.destinations.clone());
                self.overview.set_cursor(state.overview.cursor);
                self.overview.set_filter(state.overview.filter);
                self.overview.set_loading(state.loading);
                self.overview.render(f, chunks[0]);
            }
            View::QueueBrowse => {
                self.queue_browse.set_queue_id(state.queue.queue_id.clone());
                self.queue_browse.set_total_on_queue(state.queue.total_on_queue);
                self.queue_browse.set_rows(state.queue.rows.clone());
                self.queue_browse.set_cursor(state.queue.cursor);
                self.queue_browse.set_loading(state.loading);
                self.queue_browse.render(f, chunks[0]);
            }
            View::MessageExamine => {
                self.message_examine.set_details(state.examine.details.clone());
                self.message_examine.set_call_cursor(state.examine.call_cursor);
                self.message_examine.set_active_modal(state.examine.modal.active());
                self.message_examine.render(f, chunks[0]);
            }
        }

        self.action_bar.set_view(state.view);
        self.action_bar.set_availability(state.availability());
        self.action_bar.set_proposed(state.confirm.proposed());
        self.action_bar.set_limit_value(state.queue.limit_input.clone());
        self.action_bar.set_busy(state.busy());
        self.action_bar.set_has_message(state.status.text.is_some());
        self.action_bar.render(f, chunks[1]);

        self.status_line
            .set_status(state.status.text.clone(), state.status.tone);
        self.status_line.render(f, chunks[2]);
    }
}
