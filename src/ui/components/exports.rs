use pkgscope_api::ExportKind;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::theme::Theme;
use crate::ui::notifications::{NoticeLevel, Notification};

const EXPORTS_WIDTH: u16 = 56;

/// Contents of the bar between the prompt and the results.
pub struct StatusBar<'a> {
	pub show_exports: bool,
	pub notification: Option<&'a Notification>,
}

/// Key bound to each export action.
pub fn export_key(kind: ExportKind) -> &'static str {
	match kind {
		ExportKind::GraphJson => "F2",
		ExportKind::Gml => "F3",
	}
}

/// Render export actions (when visible) on the left and the current
/// notification on the right.
pub fn render_status_bar(frame: &mut Frame, area: Rect, bar: StatusBar<'_>, theme: &Theme) {
	let halves = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Length(EXPORTS_WIDTH), Constraint::Min(1)])
		.split(area);

	let mut spans = Vec::new();
	if bar.show_exports {
		for kind in ExportKind::ALL {
			spans.push(Span::styled(
				format!(" {} ", export_key(kind)),
				theme.header_style(),
			));
			spans.push(Span::raw(format!(" Download {}  ", kind.label())));
		}
	}
	frame.render_widget(Paragraph::new(Line::from(spans)), halves[0]);

	if let Some(notification) = bar.notification {
		let style = match notification.level {
			NoticeLevel::Info => theme.prompt_style(),
			NoticeLevel::Error => theme.error_style(),
		};
		frame.render_widget(
			Paragraph::new(notification.message.as_str())
				.alignment(Alignment::Right)
				.style(style),
			halves[1],
		);
	}
}
