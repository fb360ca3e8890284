pub mod action_bar;
pub mod message_examine;
pub mod overview;
pub mod queue_browse;
pub mod status_line;

use ratatui::{Frame, layout::Rect};

/// A view component. Key handling lives in the key router, so components
/// only render; state is pushed into them by the renderer each frame.
pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// Timestamp rendering for listing columns.
pub fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::format_timestamp;

    #[test]
    fn formats_epoch_millis() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
        assert_eq!(format_timestamp(1_700_000_000_000), "2023-11-14 22:13:20");
    }

    #[test]
    fn out_of_range_millis_render_as_dash() {
        assert_eq!(format_timestamp(i64::MAX), "-");
    }
}
