//! growth-diagnosis: Brand growth diagnosis report site
//!
//! Renders pre-computed brand diagnoses (scores, narrative, recommended
//! actions) as a small read-only site:
//! - A registry of report records compiled into the binary
//! - Normalization of every historical record shape into one canonical model
//! - Score tiering shared by every view
//! - HTML pages behind a display-only gate, served over HTTP or exported
//!
//! See DESIGN.md for details.

pub mod config;
pub mod gate;
pub mod model;
pub mod normalize;
pub mod registry;
pub mod render;
pub mod score;
pub mod site;
