use pkgscope_api::SearchResult;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::tui::theme::Theme;
use crate::ui::view::NO_RESULTS_TEXT;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const HEADER_HEIGHT: u16 = 1;

fn column_widths() -> [Constraint; 4] {
	[
		Constraint::Percentage(25),
		Constraint::Percentage(25),
		Constraint::Percentage(28),
		Constraint::Percentage(22),
	]
}

/// Render the results table. An empty slice renders a centred placeholder
/// row beneath the header.
pub fn render_results_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	headers: &[String],
	rows: &[SearchResult],
	theme: &Theme,
) {
	let header = Row::new(headers.iter().map(|header| Cell::from(header.as_str())))
		.style(theme.header_style())
		.height(HEADER_HEIGHT)
		.bottom_margin(1);

	let body: Vec<Row> = rows
		.iter()
		.map(|row| {
			Row::new([
				Cell::from(row.id.as_str()),
				Cell::from(row.author.as_str()),
				Cell::from(row.author_email.as_str()),
				Cell::from(row.dev_status.as_str()),
			])
		})
		.collect();

	let table = Table::new(body, column_widths())
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme);

	const HEADER_AND_DIVIDER_HEIGHT: u16 = HEADER_HEIGHT + 1;
	if rows.is_empty() && area.height > HEADER_AND_DIVIDER_HEIGHT {
		let placeholder_area = Rect {
			y: area.y + HEADER_AND_DIVIDER_HEIGHT,
			height: 1,
			..area
		};
		frame.render_widget(
			Paragraph::new(NO_RESULTS_TEXT)
				.alignment(Alignment::Center)
				.style(theme.empty_style()),
			placeholder_area,
		);
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if HEADER_HEIGHT >= area.height {
		return;
	}
	let separator_area = Rect {
		x: area.x,
		y: area.y + HEADER_HEIGHT,
		width: area.width,
		height: 1,
	};
	let line = "─".repeat(area.width as usize);
	frame.render_widget(
		Paragraph::new(Line::from(line)).style(theme.empty_style()),
		separator_area,
	);
}

/// Render a centred informational line in place of the table.
pub fn render_message(frame: &mut Frame, area: Rect, message: &str, style: ratatui::style::Style) {
	if area.height == 0 {
		return;
	}
	let message_area = Rect {
		y: area.y + area.height.saturating_sub(1) / 2,
		height: 1,
		..area
	};
	frame.render_widget(
		Paragraph::new(message)
			.alignment(Alignment::Center)
			.style(style),
		message_area,
	);
}
