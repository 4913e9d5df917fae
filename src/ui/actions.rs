use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::{PanelMode, SearchFocus};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
	Continue,
	Quit,
}

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<KeyOutcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Ok(KeyOutcome::Quit);
		}

		match self.mode {
			PanelMode::Search => Ok(self.handle_search_key(key)),
			PanelMode::Add => {
				self.handle_add_key(key);
				Ok(KeyOutcome::Continue)
			}
		}
	}

	fn handle_search_key(&mut self, key: KeyEvent) -> KeyOutcome {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('a') {
			self.switch_to(PanelMode::Add);
			return KeyOutcome::Continue;
		}

		match self.search_focus {
			SearchFocus::Input => match key.code {
				KeyCode::Esc => return KeyOutcome::Quit,
				KeyCode::Enter => self.request_search(None),
				KeyCode::Tab | KeyCode::Down => self.focus_results(),
				_ => {
					if self.search_input.input(key) {
						self.search.set_query(self.search_input.text().to_string());
					}
				}
			},
			SearchFocus::Results => match key.code {
				KeyCode::Left => self.move_chip_cursor_left(),
				KeyCode::Right => self.move_chip_cursor_right(),
				KeyCode::Home => self.chip_cursor = 0,
				KeyCode::End => {
					self.chip_cursor = self.search.synonyms().len().saturating_sub(1);
				}
				KeyCode::Enter => {
					if let Some(chip) = self.selected_chip().map(str::to_string) {
						self.request_search(Some(&chip));
					}
				}
				KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Esc => {
					self.focus_search_input();
				}
				KeyCode::Char(_) | KeyCode::Backspace => {
					self.focus_search_input();
					if self.search_input.input(key) {
						self.search.set_query(self.search_input.text().to_string());
					}
				}
				_ => {}
			},
		}
		KeyOutcome::Continue
	}

	fn handle_add_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => self.switch_to(PanelMode::Search),
			KeyCode::Enter => self.submit_add(),
			KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
				self.focus_add_field(self.add_focus.next());
			}
			_ => {
				let field = self.add_focus;
				let input = self.add_input_mut(field);
				if input.input(key) {
					let text = input.text().to_string();
					self.add.set_field(field, text);
				}
			}
		}
	}

	fn move_chip_cursor_left(&mut self) {
		self.chip_cursor = self.chip_cursor.saturating_sub(1);
	}

	fn move_chip_cursor_right(&mut self) {
		let len = self.search.synonyms().len();
		if self.chip_cursor + 1 < len {
			self.chip_cursor += 1;
		}
	}
}
