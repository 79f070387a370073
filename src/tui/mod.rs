//! Terminal UI building blocks for rendering `pkgscope`.
//!
//! The submodules here expose the prompt input widget and the colour themes
//! used by the higher level UI orchestration code.

pub mod input;
pub mod theme;
