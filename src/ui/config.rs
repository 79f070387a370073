/// Column headers of the results table.
pub const DEFAULT_HEADERS: [&str; 4] = ["Package Name", "Author", "Email", "Development Status"];

/// Text used by the UI when rendering the screen.
#[derive(Debug, Clone)]
pub struct UiConfig {
	pub title: String,
	pub tagline: String,
	pub prompt_label: String,
	pub filter_label: String,
	pub graph_title: String,
	pub headers: Vec<String>,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "pkgscope".to_string(),
			tagline: "Get the perfect Python package for you!".to_string(),
			prompt_label: "Search".to_string(),
			filter_label: "Filter by Status:".to_string(),
			graph_title: "Graph".to_string(),
			headers: DEFAULT_HEADERS.iter().map(|header| header.to_string()).collect(),
		}
	}
}

impl UiConfig {
	/// Replace the table headers, ignoring blank entries. Missing trailing
	/// headers keep their defaults.
	pub fn set_headers<I, S>(&mut self, headers: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let provided: Vec<String> = headers
			.into_iter()
			.map(Into::into)
			.map(|header| header.trim().to_string())
			.collect();
		for (slot, header) in self.headers.iter_mut().zip(provided) {
			if !header.is_empty() {
				*slot = header;
			}
		}
	}
}
