//! Style system: deltas, borders and symbolic constants.
//!
//! This module contains:
//! - Typed style deltas resolved from node parameter bags
//! - Border specifications and their shorthand expansion
//! - The constant/alias namespaces and backend constant resolution
//! - Width/unit parsing for column widths

mod border;
mod consts;
mod delta;
mod units;

pub use border::{BorderSpec, Edge, EdgeLine, apply_border};
pub use consts::{Namespace, resolve};
pub use delta::{StyleDelta, StyleUndo};
pub use units::parse_width;
