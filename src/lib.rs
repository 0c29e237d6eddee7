#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `spritegen-rs` is a pixel sprite data model for procedural sprite
//! generation tooling: fixed-size color grids with palette metadata,
//! bounds-checked access, packed export formats, and deterministic SVG
//! rendering.
//!
pub use spritegen_internal::*;
