use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use tui_textarea::{CursorMove, TextArea};

/// Single-line text field built on `tui-textarea`.
pub struct TextInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> TextInput<'a> {
	pub fn new(text: impl Into<String>, placeholder: &str) -> Self {
		let mut textarea = TextArea::new(vec![text.into()]);
		textarea.set_placeholder_text(placeholder);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the contents, leaving the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		if self.text() == text {
			return;
		}
		self.textarea.move_cursor(CursorMove::End);
		self.textarea.delete_line_by_head();
		self.textarea.insert_str(text);
	}

	/// Feed an editing key to the field. Returns whether the text changed.
	///
	/// Navigation and submit keys are left to the caller, and line breaks are
	/// never inserted.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = key.modifiers.contains(KeyModifiers::CONTROL)
			&& matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j'));
		if newline
			|| matches!(
				key.code,
				KeyCode::Enter
					| KeyCode::Tab | KeyCode::BackTab
					| KeyCode::Esc | KeyCode::Up
					| KeyCode::Down
			) {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, block: Block<'a>, focused: bool) {
		let cursor = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
		self.textarea.set_block(block);
		frame.render_widget(&self.textarea, area);
	}
}
