//! UI module for the Easel shell
//!
//! # Panel Structure
//! - `toolbar` - The three-zone file/edit/view toolbar rendered from the
//!   control registry
//! - `status_bar` - Bottom line: current file, modified indicator, last
//!   action outcome
//! - `modal` - Unsaved-changes confirmation overlay

pub mod modal;
pub mod status_bar;
pub mod toolbar;
