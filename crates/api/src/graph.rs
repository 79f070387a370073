//! Graph payload handed to the graph panel.
//!
//! The service returns the raw output of a graph query. Vertices carry
//! `v_id`/`v_type`, edges carry `from_id`/`to_id`/`e_type`. The payload is
//! otherwise opaque and is passed through untouched; [`GraphPayload::summary`]
//! only counts what it can recognise.

use std::collections::BTreeMap;

use serde_json::Value;

const UNTYPED_VERTEX: &str = "vertex";
const UNTYPED_EDGE: &str = "edge";

#[derive(Debug, Clone, PartialEq)]
pub struct GraphPayload(Value);

impl GraphPayload {
	#[must_use]
	pub fn new(value: Value) -> Self {
		Self(value)
	}

	#[must_use]
	pub fn as_value(&self) -> &Value {
		&self.0
	}

	/// Count vertices and edges by type anywhere in the payload.
	#[must_use]
	pub fn summary(&self) -> GraphSummary {
		let mut summary = GraphSummary::default();
		collect(&self.0, &mut summary);
		summary
	}
}

/// Vertex and edge counts keyed by their type name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphSummary {
	pub vertices: BTreeMap<String, usize>,
	pub edges: BTreeMap<String, usize>,
}

impl GraphSummary {
	#[must_use]
	pub fn vertex_count(&self) -> usize {
		self.vertices.values().sum()
	}

	#[must_use]
	pub fn edge_count(&self) -> usize {
		self.edges.values().sum()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty() && self.edges.is_empty()
	}
}

fn collect(value: &Value, summary: &mut GraphSummary) {
	match value {
		Value::Object(fields) => {
			if fields.contains_key("v_id") {
				let kind = type_name(fields.get("v_type"), UNTYPED_VERTEX);
				*summary.vertices.entry(kind).or_default() += 1;
			} else if fields.contains_key("from_id") && fields.contains_key("to_id") {
				let kind = type_name(fields.get("e_type"), UNTYPED_EDGE);
				*summary.edges.entry(kind).or_default() += 1;
			}
			for child in fields.values() {
				collect(child, summary);
			}
		}
		Value::Array(items) => {
			for item in items {
				collect(item, summary);
			}
		}
		_ => {}
	}
}

fn type_name(value: Option<&Value>, fallback: &str) -> String {
	value
		.and_then(Value::as_str)
		.filter(|name| !name.is_empty())
		.unwrap_or(fallback)
		.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn counts_typed_vertices_and_nested_edges() {
		let payload = GraphPayload::new(json!({
			"result": [
				{"v_id": "flask", "v_type": "Package", "attributes": {}},
				{"v_id": "django", "v_type": "Package", "attributes": {}},
				{"v_id": "5 - Production/Stable", "v_type": "Dev_Status"}
			],
			"edges": [
				{"e_type": "curr_status", "from_id": "flask", "to_id": "5 - Production/Stable"},
				{"e_type": "curr_status", "from_id": "django", "to_id": "5 - Production/Stable"},
				{"from_id": "flask", "to_id": "werkzeug"}
			]
		}));

		let summary = payload.summary();
		assert_eq!(summary.vertex_count(), 3);
		assert_eq!(summary.vertices["Package"], 2);
		assert_eq!(summary.vertices["Dev_Status"], 1);
		assert_eq!(summary.edge_count(), 3);
		assert_eq!(summary.edges["curr_status"], 2);
		assert_eq!(summary.edges[UNTYPED_EDGE], 1);
	}

	#[test]
	fn untyped_vertices_fall_back_to_generic_name() {
		let payload = GraphPayload::new(json!({"result": [{"v_id": "numpy"}]}));
		assert_eq!(payload.summary().vertices[UNTYPED_VERTEX], 1);
	}

	#[test]
	fn opaque_payload_has_empty_summary() {
		let payload = GraphPayload::new(json!({"result": [], "meta": {"took": 3}}));
		assert!(payload.summary().is_empty());
	}
}
