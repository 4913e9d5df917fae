use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::ui::style::Theme;

const SEPARATOR: &str = ", ";

/// Spans for every chip, each followed by a separator except the last.
pub(crate) fn chip_spans<'a>(
	synonyms: &'a [String],
	selected: Option<usize>,
	theme: &Theme,
) -> Vec<(Span<'a>, Option<Span<'static>>)> {
	let last = synonyms.len().saturating_sub(1);
	synonyms
		.iter()
		.enumerate()
		.map(|(index, synonym)| {
			let style = if selected == Some(index) {
				theme.chip_selected
			} else {
				theme.chip
			};
			let separator = (index < last).then(|| Span::styled(SEPARATOR, theme.muted));
			(Span::styled(synonym.as_str(), style), separator)
		})
		.collect()
}

/// Lay chips out over as many lines as `width` requires, together with the
/// index of the line holding the selected chip.
///
/// A chip is never split across lines; a chip wider than the whole line gets
/// a line of its own.
pub(crate) fn chip_lines<'a>(
	synonyms: &'a [String],
	width: u16,
	selected: Option<usize>,
	theme: &Theme,
) -> (Vec<Line<'a>>, Option<usize>) {
	let width = usize::from(width.max(1));
	let mut lines = Vec::new();
	let mut current: Vec<Span<'a>> = Vec::new();
	let mut used = 0usize;
	let mut selected_line = None;

	for (index, (chip, separator)) in chip_spans(synonyms, selected, theme)
		.into_iter()
		.enumerate()
	{
		let chip_width = chip.content.width();
		let separator_width = separator
			.as_ref()
			.map(|span| span.content.width())
			.unwrap_or(0);

		if used > 0 && used + chip_width > width {
			lines.push(Line::from(std::mem::take(&mut current)));
			used = 0;
		}

		if selected == Some(index) {
			selected_line = Some(lines.len());
		}
		used += chip_width;
		current.push(chip);
		if let Some(separator) = separator {
			used += separator_width;
			current.push(separator);
		}
	}

	if !current.is_empty() {
		lines.push(Line::from(current));
	}
	(lines, selected_line)
}

/// First line to show so that `selected_line` stays inside `height` rows.
pub(crate) fn scroll_offset(selected_line: Option<usize>, height: u16) -> u16 {
	let Some(line) = selected_line else {
		return 0;
	};
	let visible = usize::from(height.max(1));
	u16::try_from((line + 1).saturating_sub(visible)).unwrap_or(u16::MAX)
}
