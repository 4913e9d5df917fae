use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::{Block, Borders, Paragraph},
};
use throbber_widgets_tui::Throbber;

use super::App;
use super::components::{chip_lines, render_feedback, scroll_offset};
use super::state::{PanelMode, SearchFocus};
use crate::panels::{AddField, Feedback};

const SEARCH_TITLE: &str = "Search for Synonyms";
const ADD_TITLE: &str = "Add Synonyms";
const SEARCH_HINTS: &str = "Enter search • Tab results • Ctrl+A add synonyms • Esc quit";
const RESULTS_HINTS: &str = "←/→ choose • Enter search synonym • Tab back to input • Ctrl+A add synonyms";
const ADD_HINTS: &str = "Enter add • Tab next field • Esc back to search";

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		match self.mode {
			PanelMode::Search => self.draw_search(frame, area),
			PanelMode::Add => self.draw_add(frame, area),
		}
	}

	fn draw_search(&mut self, frame: &mut Frame, area: Rect) {
		let feedback = self.search.feedback().cloned();
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				feedback_height(feedback.as_ref()),
				Constraint::Length(3),
				Constraint::Min(0),
				Constraint::Length(1),
			])
			.split(area);

		self.draw_title(frame, layout[0], SEARCH_TITLE);
		if let Some(feedback) = &feedback {
			render_feedback(frame, layout[1], feedback, &self.theme);
		}

		let input_focused = self.search_focus == SearchFocus::Input;
		let block = self.input_block(AddField::Word.label(), input_focused);
		self.search_input
			.render(frame, layout[2], block, input_focused);

		self.draw_results(frame, layout[3]);

		let hints = if input_focused {
			SEARCH_HINTS
		} else {
			RESULTS_HINTS
		};
		self.draw_hints(frame, layout[4], hints);
	}

	fn draw_results(&self, frame: &mut Frame, area: Rect) {
		let synonyms = self.search.synonyms();
		if synonyms.is_empty() || area.height < 3 {
			return;
		}

		let word = self.search.results_word().unwrap_or(self.search.query());
		let title = Line::from(vec![
			Span::raw(" Results for \""),
			Span::styled(word, self.theme.chip),
			Span::raw("\" "),
		]);
		let focused = self.search_focus == SearchFocus::Results;
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.theme.border_style(focused))
			.title(title);
		let inner = block.inner(area);
		let selected = focused.then_some(self.chip_cursor);
		let (lines, selected_line) = chip_lines(synonyms, inner.width, selected, &self.theme);
		let offset = scroll_offset(selected_line, inner.height);

		frame.render_widget(
			Paragraph::new(lines).block(block).scroll((offset, 0)),
			area,
		);
	}

	fn draw_add(&mut self, frame: &mut Frame, area: Rect) {
		let feedback = self.add.feedback().cloned();
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				feedback_height(feedback.as_ref()),
				Constraint::Length(3),
				Constraint::Length(3),
				Constraint::Min(0),
				Constraint::Length(1),
			])
			.split(area);

		self.draw_title(frame, layout[0], ADD_TITLE);
		if let Some(feedback) = &feedback {
			render_feedback(frame, layout[1], feedback, &self.theme);
		}

		for (field, slot) in [(AddField::Word, layout[2]), (AddField::Synonyms, layout[3])] {
			let focused = self.add_focus == field;
			let block = self.input_block(field.label(), focused);
			self.add_input_mut(field).render(frame, slot, block, focused);
		}

		self.draw_hints(frame, layout[5], ADD_HINTS);
	}

	fn draw_title(&mut self, frame: &mut Frame, area: Rect, title: &str) {
		frame.render_widget(Paragraph::new(title).style(self.theme.title), area);

		if self.is_busy() && area.width > 20 {
			let spinner_area = Rect {
				x: area.x + area.width - 12,
				width: 12,
				..area
			};
			let throbber = Throbber::default()
				.label("Working")
				.style(self.theme.muted);
			frame.render_stateful_widget(throbber, spinner_area, &mut self.throbber_state);
		}
	}

	fn draw_hints(&self, frame: &mut Frame, area: Rect, hints: &str) {
		let footer = Paragraph::new(hints)
			.alignment(Alignment::Left)
			.style(self.theme.muted);
		frame.render_widget(footer, area);
	}

	fn input_block(&self, label: &'static str, focused: bool) -> Block<'a> {
		Block::default()
			.borders(Borders::ALL)
			.border_style(self.theme.border_style(focused))
			.title(Span::styled(format!(" {label} "), self.theme.prompt))
	}
}

fn feedback_height(feedback: Option<&Feedback>) -> Constraint {
	if feedback.is_some() {
		Constraint::Length(1)
	} else {
		Constraint::Length(0)
	}
}
