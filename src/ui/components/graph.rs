use pkgscope_api::GraphSummary;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::theme::Theme;
use crate::ui::view::GraphPanel;

/// Render the graph panel: vertex and edge counts grouped by type.
pub fn render_graph_panel(
	frame: &mut Frame,
	area: Rect,
	title: &str,
	panel: GraphPanel<'_>,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::LEFT)
		.border_style(theme.empty_style())
		.title(Span::styled(format!(" {title} "), theme.header_style()));

	let lines = match panel.summary {
		Some(summary) if !summary.is_empty() => summary_lines(summary, theme),
		_ => vec![Line::from(Span::styled("No graph data", theme.empty_style()))],
	};

	frame.render_widget(
		Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
		area,
	);
}

fn summary_lines(summary: &GraphSummary, theme: &Theme) -> Vec<Line<'static>> {
	let mut lines = Vec::new();
	lines.push(Line::from(Span::styled(
		format!("Vertices: {}", summary.vertex_count()),
		theme.highlight_style(),
	)));
	lines.extend(
		summary
			.vertices
			.iter()
			.map(|(kind, count)| Line::from(format!("  {kind}: {count}"))),
	);
	lines.push(Line::default());
	lines.push(Line::from(Span::styled(
		format!("Edges: {}", summary.edge_count()),
		theme.highlight_style(),
	)));
	lines.extend(
		summary
			.edges
			.iter()
			.map(|(kind, count)| Line::from(format!("  {kind}: {count}"))),
	);
	lines
}
