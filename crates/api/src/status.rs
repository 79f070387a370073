use crate::model::SearchResult;

/// Development-status filter offered next to the search prompt.
///
/// Values are the trove classifier strings reported by the service and are
/// compared verbatim against [`SearchResult::dev_status`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
	#[default]
	All,
	Beta,
	ProductionStable,
	Alpha,
	PreAlpha,
}

impl StatusFilter {
	/// Every option, in the order the filter presents them.
	pub const OPTIONS: [StatusFilter; 5] = [
		StatusFilter::All,
		StatusFilter::Beta,
		StatusFilter::ProductionStable,
		StatusFilter::Alpha,
		StatusFilter::PreAlpha,
	];

	/// Classifier value; empty for [`StatusFilter::All`].
	#[must_use]
	pub fn value(self) -> &'static str {
		match self {
			StatusFilter::All => "",
			StatusFilter::Beta => "4 - Beta",
			StatusFilter::ProductionStable => "5 - Production/Stable",
			StatusFilter::Alpha => "3 - Alpha",
			StatusFilter::PreAlpha => "2 - Pre-Alpha",
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			StatusFilter::All => "All",
			StatusFilter::Beta => "Beta",
			StatusFilter::ProductionStable => "Production/Stable",
			StatusFilter::Alpha => "Alpha",
			StatusFilter::PreAlpha => "Pre-Alpha",
		}
	}

	#[must_use]
	pub fn matches(self, result: &SearchResult) -> bool {
		match self {
			StatusFilter::All => true,
			other => result.dev_status == other.value(),
		}
	}

	/// Keep the entries of `results` accepted by this filter, in order.
	#[must_use]
	pub fn apply(self, results: &[SearchResult]) -> Vec<SearchResult> {
		results
			.iter()
			.filter(|result| self.matches(result))
			.cloned()
			.collect()
	}

	#[must_use]
	pub fn next(self) -> Self {
		let index = self.position();
		Self::OPTIONS[(index + 1) % Self::OPTIONS.len()]
	}

	#[must_use]
	pub fn previous(self) -> Self {
		let index = self.position();
		Self::OPTIONS[(index + Self::OPTIONS.len() - 1) % Self::OPTIONS.len()]
	}

	fn position(self) -> usize {
		Self::OPTIONS
			.iter()
			.position(|option| *option == self)
			.unwrap_or(0)
	}

	/// Parse a label, classifier value, or short keyword such as `stable`.
	#[must_use]
	pub fn parse(input: &str) -> Option<Self> {
		let trimmed = input.trim();
		if let Some(option) = Self::OPTIONS
			.iter()
			.find(|option| option.value() == trimmed)
		{
			return Some(*option);
		}
		let key = trimmed.to_ascii_lowercase().replace(['_', ' '], "-");
		match key.as_str() {
			"all" => Some(StatusFilter::All),
			"beta" => Some(StatusFilter::Beta),
			"stable" | "production" | "production/stable" | "production-stable" => {
				Some(StatusFilter::ProductionStable)
			}
			"alpha" => Some(StatusFilter::Alpha),
			"pre-alpha" | "prealpha" => Some(StatusFilter::PreAlpha),
			_ => None,
		}
	}
}
