use std::sync::Arc;
use std::time::Duration;

use ratatui::{Terminal, backend::TestBackend};

use crate::api::testing::StubApi;
use crate::ui::{App, PanelMode};

fn render(app: &mut App<'_>, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	let buffer = terminal.backend().buffer();
	let mut view = String::new();
	for y in 0..buffer.area.height {
		for x in 0..buffer.area.width {
			view.push_str(buffer[(x, y)].symbol());
		}
		view.push('\n');
	}
	view
}

#[test]
fn search_panel_renders_heading_and_input() {
	let mut app = App::new(Arc::new(StubApi::default()));
	let view = render(&mut app, 80, 20);

	assert!(view.contains("Search for Synonyms"));
	assert!(view.contains("Search word..."));
	assert!(view.contains("Ctrl+A add synonyms"));
}

#[test]
fn initial_word_is_looked_up_before_first_frame() {
	let api = Arc::new(StubApi::default().with_synonyms("same", ["similar", "alike", "akin"]));
	let mut app = App::new(api);
	app.set_initial_word("same");
	app.initial_results_timeout = Some(Duration::from_secs(2));

	app.hydrate_initial_results();
	let view = render(&mut app, 80, 20);

	assert!(view.contains("Results for \"same\""));
	assert!(view.contains("similar, alike, akin"));
}

#[test]
fn feedback_banner_is_rendered() {
	let api = Arc::new(StubApi::default().failing_lookup("error", 503));
	let mut app = App::new(api);
	app.set_initial_word("error");
	app.initial_results_timeout = Some(Duration::from_secs(2));

	app.hydrate_initial_results();
	let view = render(&mut app, 80, 20);

	assert!(view.contains("No synonyms found for \"error\""));
	assert!(!view.contains("Results for"));
}

#[test]
fn add_panel_renders_both_fields() {
	let mut app = App::new(Arc::new(StubApi::default()));
	app.switch_to(PanelMode::Add);
	let view = render(&mut app, 80, 20);

	assert!(view.contains("Add Synonyms"));
	assert!(view.contains("Synonyms (comma-separated)"));
	assert!(view.contains("Enter a word"));
	assert!(view.contains("Esc back to search"));
}

#[test]
fn small_terminal_does_not_panic() {
	let api = Arc::new(StubApi::default().with_synonyms("same", ["alike"]));
	let mut app = App::new(api);
	app.set_initial_word("same");
	app.initial_results_timeout = Some(Duration::from_secs(2));
	app.hydrate_initial_results();

	render(&mut app, 10, 4);
}

#[test]
fn results_scroll_to_keep_selected_chip_visible() {
	let words: Vec<String> = (0..30).map(|index| format!("word{index:02}")).collect();
	let api = Arc::new(StubApi::default().with_synonyms("same", words));
	let mut app = App::new(api);
	app.set_initial_word("same");
	app.initial_results_timeout = Some(Duration::from_secs(2));
	app.hydrate_initial_results();

	app.focus_results();
	app.chip_cursor = 29;
	let view = render(&mut app, 30, 12);

	assert!(view.contains("word29"));
	assert!(!view.contains("word00"));
}
