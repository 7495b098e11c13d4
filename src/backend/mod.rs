//! The abstract document-automation backend.
//!
//! quire drives a host word processor but does not implement one. This
//! module defines the capability set the emitter needs: a constant space,
//! document open/attach/save, selection-relative typing, style reads and
//! writes, table construction and per-edge borders. The session is an
//! explicitly passed value owned by the caller; the emitter borrows it
//! mutably for the whole walk, which makes the single-writer model a
//! compile-time guarantee.

mod trace;

use std::path::Path;

use crate::error::Result;
use crate::style::StyleDelta;

pub use trace::TraceBackend;

/// A backend-native constant value (host automation enums are integers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constant(pub i32);

/// Handle for one open document within a backend session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u32);

/// Handle for one table created within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(pub u32);

/// Addressable part of a document for selection, styling and borders.
///
/// Row, column and cell indices are 1-based, following host automation
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// The current selection / insertion point.
    #[default]
    Selection,
    /// A whole table.
    Table(TableId),
    /// One column of a table.
    Column(TableId, usize),
    /// One row of a table.
    Row(TableId, usize),
    /// One cell of a table (row, column).
    Cell(TableId, usize, usize),
}

/// Concrete values of every style axis at the current selection.
///
/// Read in full before a delta is applied so the undo record can capture
/// the prior value of exactly the axes the delta touches.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    pub bold: bool,
    pub italic: bool,
    pub font: String,
    pub size: f64,
    pub align: Constant,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            font: "Times New Roman".to_string(),
            size: 12.0,
            align: Constant(0),
        }
    }
}

/// One document-automation session.
///
/// All calls are synchronous and block the walker until they return.
/// Mutating calls advance or depend on the current selection, consistent
/// with a real host cursor.
pub trait Backend {
    /// Look up a canonical constant name in the backend's constant space.
    /// Missing names are a fatal configuration error.
    fn load_constant(&mut self, name: &str) -> Result<Constant>;

    /// Open the document at `path`, or create a new one when `path` is
    /// absent or `force_new` is set.
    fn open_document(&mut self, path: Option<&Path>, force_new: bool) -> Result<DocumentId>;

    /// Bind to the host's currently active document.
    fn attach_active(&mut self) -> Result<DocumentId>;

    fn save_document(&mut self, doc: DocumentId, path: &Path) -> Result<()>;

    /// Type text at the insertion point, advancing the selection.
    fn type_text(&mut self, text: &str) -> Result<()>;

    fn type_paragraph_break(&mut self) -> Result<()>;

    /// Table-aware text insertion into the currently selected cell.
    fn type_into_cell(&mut self, text: &str) -> Result<()>;

    /// Collapse the selection to a zero-width insertion point at its end.
    fn collapse_selection_to_end(&mut self) -> Result<()>;

    fn select(&mut self, target: Target) -> Result<()>;

    /// Current values of all style axes at the selection.
    fn selection_style(&self) -> Result<StyleState>;

    /// Write the specified axes of `delta` to `target`. Unspecified axes
    /// must not be touched.
    fn apply_style(&mut self, target: Target, delta: &StyleDelta) -> Result<()>;

    /// Create a `rows` x `cols` table anchored at the current selection.
    fn create_table(&mut self, doc: DocumentId, rows: usize, cols: usize) -> Result<TableId>;

    /// Set a column's preferred width in points.
    fn set_column_width(&mut self, table: TableId, column: usize, points: f64) -> Result<()>;

    /// Set one border edge of `target`. `width` and `color` are absent
    /// exactly when `line` is the no-line style; setting them on such an
    /// edge is invalid on some hosts.
    fn set_border(
        &mut self,
        target: Target,
        edge: Constant,
        line: Constant,
        width: Option<Constant>,
        color: Option<Constant>,
    ) -> Result<()>;

    /// Execute an opaque host-side script.
    fn run_script(&mut self, source: &str) -> Result<()>;
}
