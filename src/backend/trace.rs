//! Scripted reference backend.
//!
//! `TraceBackend` stands in for a real word processor: it carries the
//! host constant space, models the selection as a cursor over an internal
//! segment buffer, tracks current style state, and records every call in
//! order. The CLI uses it to dry-run a tree; the test suite asserts
//! against its trace and rendering. `save_document` renders the assembled
//! document to plain text and only touches the filesystem when
//! persistence is explicitly enabled.

use std::path::{Path, PathBuf};

use phf::phf_map;

use crate::error::{Error, Result};
use crate::style::StyleDelta;

use super::{Backend, Constant, DocumentId, StyleState, TableId, Target};

/// The loaded constant space, with the host's real enum values. Line
/// widths are eighths of a point; colors are BGR integers.
static CONSTANT_SPACE: phf::Map<&'static str, i32> = phf_map! {
    "wdLineStyleNone" => 0,
    "wdLineStyleSingle" => 1,
    "wdLineStyleDot" => 2,
    "wdLineStyleDashSmallGap" => 3,
    "wdLineStyleDashLargeGap" => 4,
    "wdLineStyleDashDot" => 5,
    "wdLineStyleDashDotDot" => 6,
    "wdLineStyleDouble" => 7,
    "wdLineStyleTriple" => 8,
    "wdLineStyleThickThinMedGap" => 13,
    "wdLineWidth025pt" => 2,
    "wdLineWidth050pt" => 4,
    "wdLineWidth075pt" => 6,
    "wdLineWidth100pt" => 8,
    "wdLineWidth150pt" => 12,
    "wdLineWidth225pt" => 18,
    "wdLineWidth300pt" => 24,
    "wdLineWidth450pt" => 36,
    "wdLineWidth600pt" => 48,
    "wdColorAutomatic" => -16777216,
    "wdColorBlack" => 0,
    "wdColorWhite" => 16777215,
    "wdColorRed" => 255,
    "wdColorGreen" => 32768,
    "wdColorBlue" => 16711680,
    "wdColorYellow" => 65535,
    "wdColorGray50" => 8421504,
    "wdBorderTop" => -1,
    "wdBorderLeft" => -2,
    "wdBorderBottom" => -3,
    "wdBorderRight" => -4,
    "wdBorderHorizontal" => -5,
    "wdBorderVertical" => -6,
    "wdAlignParagraphLeft" => 0,
    "wdAlignParagraphCenter" => 1,
    "wdAlignParagraphRight" => 2,
    "wdAlignParagraphJustify" => 3,
};

#[derive(Debug, Clone)]
enum Segment {
    Text(String),
    Table(usize),
}

#[derive(Debug, Clone)]
struct TraceTable {
    cells: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
struct TraceDocument {
    segments: Vec<Segment>,
}

/// A scripted in-memory document session.
#[derive(Debug, Default)]
pub struct TraceBackend {
    trace: Vec<String>,
    documents: Vec<TraceDocument>,
    tables: Vec<TraceTable>,
    active: Option<DocumentId>,
    cursor: Target,
    style: StyleState,
    saved: Vec<(PathBuf, String)>,
    persist: bool,
    fuse: Option<usize>,
}

impl TraceBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `save_document` write renderings to disk in addition to
    /// recording them. Off by default so tests stay filesystem-clean.
    pub fn persist_to_disk(&mut self, persist: bool) {
        self.persist = persist;
    }

    /// Let the next `calls` mutating calls succeed, then fail exactly one.
    pub fn fail_after(&mut self, calls: usize) {
        self.fuse = Some(calls);
    }

    /// Every call recorded so far, in order.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    pub fn active_document(&self) -> Option<DocumentId> {
        self.active
    }

    /// Renderings recorded by `save_document`, in save order.
    pub fn saved(&self) -> &[(PathBuf, String)] {
        &self.saved
    }

    /// Current selection style, for assertions.
    pub fn style(&self) -> &StyleState {
        &self.style
    }

    /// Plain-text rendering of a document: paragraph breaks as newlines,
    /// tables as lines of tab-separated cells.
    pub fn rendered(&self, doc: DocumentId) -> String {
        let Some(document) = self.documents.get(doc.0 as usize) else {
            return String::new();
        };
        let mut out = String::new();
        for segment in &document.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Table(index) => {
                    for row in &self.tables[*index].cells {
                        out.push_str(&row.join("\t"));
                        out.push('\n');
                    }
                }
            }
        }
        out
    }

    fn tick(&mut self) -> Result<()> {
        match self.fuse {
            Some(0) => {
                self.fuse = None;
                Err(Error::Backend("injected backend fault".to_string()))
            }
            Some(remaining) => {
                self.fuse = Some(remaining - 1);
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn push(&mut self, line: String) {
        self.trace.push(line);
    }

    fn active_doc_mut(&mut self) -> Result<&mut TraceDocument> {
        let id = self
            .active
            .ok_or_else(|| Error::Backend("no active document".to_string()))?;
        Ok(&mut self.documents[id.0 as usize])
    }

    fn append_text(&mut self, text: &str) -> Result<()> {
        match self.cursor {
            Target::Cell(table, row, column) => self.append_into_cell(table, row, column, text),
            _ => {
                let document = self.active_doc_mut()?;
                if let Some(Segment::Text(buffer)) = document.segments.last_mut() {
                    buffer.push_str(text);
                } else {
                    document.segments.push(Segment::Text(text.to_string()));
                }
                Ok(())
            }
        }
    }

    fn append_into_cell(
        &mut self,
        table: TableId,
        row: usize,
        column: usize,
        text: &str,
    ) -> Result<()> {
        let cells = &mut self
            .tables
            .get_mut(table.0 as usize)
            .ok_or_else(|| Error::Backend(format!("no such table: {}", table.0)))?
            .cells;
        let cell = cells
            .get_mut(row.wrapping_sub(1))
            .and_then(|cells| cells.get_mut(column.wrapping_sub(1)))
            .ok_or_else(|| {
                Error::Backend(format!("cell {row},{column} out of range in table {}", table.0))
            })?;
        cell.push_str(text);
        Ok(())
    }

    fn label(target: Target) -> String {
        match target {
            Target::Selection => "selection".to_string(),
            Target::Table(table) => format!("table#{}", table.0),
            Target::Column(table, column) => format!("table#{} col {column}", table.0),
            Target::Row(table, row) => format!("table#{} row {row}", table.0),
            Target::Cell(table, row, column) => {
                format!("table#{} cell {row},{column}", table.0)
            }
        }
    }
}

impl Backend for TraceBackend {
    fn load_constant(&mut self, name: &str) -> Result<Constant> {
        let Some(value) = CONSTANT_SPACE.get(name) else {
            return Err(Error::UnknownConstant(name.to_string()));
        };
        self.push(format!("constant({name}) -> {value}"));
        Ok(Constant(*value))
    }

    fn open_document(&mut self, path: Option<&Path>, force_new: bool) -> Result<DocumentId> {
        self.tick()
            .map_err(|_| Error::BackendUnavailable("injected backend fault".to_string()))?;
        let id = DocumentId(self.documents.len() as u32);
        self.documents.push(TraceDocument::default());
        self.active = Some(id);
        self.cursor = Target::Selection;
        let shown = path.map_or_else(|| "(unnamed)".to_string(), |p| p.display().to_string());
        self.push(format!("open({shown}, new={force_new}) -> doc#{}", id.0));
        Ok(id)
    }

    fn attach_active(&mut self) -> Result<DocumentId> {
        self.tick()
            .map_err(|_| Error::BackendUnavailable("injected backend fault".to_string()))?;
        let id = match self.active {
            Some(id) => id,
            None => {
                let id = DocumentId(self.documents.len() as u32);
                self.documents.push(TraceDocument::default());
                self.active = Some(id);
                id
            }
        };
        self.cursor = Target::Selection;
        self.push(format!("attach -> doc#{}", id.0));
        Ok(id)
    }

    fn save_document(&mut self, doc: DocumentId, path: &Path) -> Result<()> {
        self.tick()?;
        let rendering = self.rendered(doc);
        if self.persist {
            std::fs::write(path, &rendering)?;
        }
        self.saved.push((path.to_path_buf(), rendering));
        self.push(format!("save(doc#{}, {})", doc.0, path.display()));
        Ok(())
    }

    fn type_text(&mut self, text: &str) -> Result<()> {
        self.tick()?;
        self.append_text(text)?;
        self.push(format!("type({text:?})"));
        Ok(())
    }

    fn type_paragraph_break(&mut self) -> Result<()> {
        self.tick()?;
        self.append_text("\n")?;
        self.push("para-break".to_string());
        Ok(())
    }

    fn type_into_cell(&mut self, text: &str) -> Result<()> {
        self.tick()?;
        let Target::Cell(table, row, column) = self.cursor else {
            return Err(Error::Backend("no cell selected".to_string()));
        };
        self.append_into_cell(table, row, column, text)?;
        self.push(format!("type-cell({text:?})"));
        Ok(())
    }

    fn collapse_selection_to_end(&mut self) -> Result<()> {
        self.tick()?;
        self.cursor = Target::Selection;
        self.push("collapse-end".to_string());
        Ok(())
    }

    fn select(&mut self, target: Target) -> Result<()> {
        self.tick()?;
        self.cursor = target;
        self.push(format!("select({})", Self::label(target)));
        Ok(())
    }

    fn selection_style(&self) -> Result<StyleState> {
        Ok(self.style.clone())
    }

    fn apply_style(&mut self, target: Target, delta: &StyleDelta) -> Result<()> {
        self.tick()?;
        let label = Self::label(target);
        if let Some(bold) = delta.bold {
            self.push(format!("set({label}, bold={bold})"));
        }
        if let Some(italic) = delta.italic {
            self.push(format!("set({label}, italic={italic})"));
        }
        if let Some(font) = &delta.font {
            self.push(format!("set({label}, font={font:?})"));
        }
        if let Some(size) = delta.size {
            self.push(format!("set({label}, size={size})"));
        }
        if let Some(align) = delta.align {
            self.push(format!("set({label}, align={})", align.0));
        }
        if target == Target::Selection {
            if let Some(bold) = delta.bold {
                self.style.bold = bold;
            }
            if let Some(italic) = delta.italic {
                self.style.italic = italic;
            }
            if let Some(font) = &delta.font {
                self.style.font = font.clone();
            }
            if let Some(size) = delta.size {
                self.style.size = size;
            }
            if let Some(align) = delta.align {
                self.style.align = align;
            }
        }
        Ok(())
    }

    fn create_table(&mut self, doc: DocumentId, rows: usize, cols: usize) -> Result<TableId> {
        self.tick()?;
        let id = TableId(self.tables.len() as u32);
        self.tables.push(TraceTable {
            cells: vec![vec![String::new(); cols]; rows],
        });
        self.documents
            .get_mut(doc.0 as usize)
            .ok_or_else(|| Error::Backend(format!("no such document: {}", doc.0)))?
            .segments
            .push(Segment::Table(id.0 as usize));
        self.push(format!("table(doc#{}, {rows}x{cols}) -> table#{}", doc.0, id.0));
        Ok(id)
    }

    fn set_column_width(&mut self, table: TableId, column: usize, points: f64) -> Result<()> {
        self.tick()?;
        self.push(format!("col-width(table#{}, {column}, {points}pt)", table.0));
        Ok(())
    }

    fn set_border(
        &mut self,
        target: Target,
        edge: Constant,
        line: Constant,
        width: Option<Constant>,
        color: Option<Constant>,
    ) -> Result<()> {
        self.tick()?;
        let mut entry = format!("border({}, edge={}, line={}", Self::label(target), edge.0, line.0);
        if let Some(width) = width {
            entry.push_str(&format!(", width={}", width.0));
        }
        if let Some(color) = color {
            entry.push_str(&format!(", color={}", color.0));
        }
        entry.push(')');
        self.push(entry);
        Ok(())
    }

    fn run_script(&mut self, source: &str) -> Result<()> {
        self.tick()?;
        self.push(format!("script({} chars)", source.chars().count()));
        Ok(())
    }
}
