mod exports;
mod graph;
mod prompt;
mod tables;

pub use exports::{StatusBar, export_key, render_status_bar};
pub use graph::render_graph_panel;
pub use prompt::{PromptContext, render_prompt_with_filter};
pub use tables::{render_message, render_results_table};
