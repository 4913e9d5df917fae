use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Paragraph, Wrap};

use crate::panels::Feedback;
use crate::ui::style::Theme;

/// Draw a feedback banner coloured by its kind.
pub(crate) fn render_feedback(frame: &mut Frame, area: Rect, feedback: &Feedback, theme: &Theme) {
	let banner = Paragraph::new(format!(" {} ", feedback.message))
		.style(theme.feedback_style(feedback.kind))
		.wrap(Wrap { trim: false });
	frame.render_widget(banner, area);
}
