//! Table construction.
//!
//! Tables are built in two passes: a counting pre-scan determines the
//! backend table's geometry, then the children are re-walked to style
//! columns, rows and cells and to emit cell content through the generic
//! walk. The column count comes from the FIRST row only; later rows wider
//! than that have their excess cells left unvisited, narrower rows leave
//! the remaining backend cells at defaults.

use crate::backend::{Backend, Target};
use crate::error::Result;
use crate::model::{Node, NodeKind, Value};
use crate::style::{self, BorderSpec, StyleDelta, apply_border};

use super::Emitter;

impl<'a, B: Backend + ?Sized> Emitter<'a, B> {
    pub(crate) fn emit_table(&mut self, node: &Node) -> Result<()> {
        let rows: Vec<&Node> = node.children_of_kind(NodeKind::Row).collect();
        let row_count = rows.len();
        let col_count = rows
            .first()
            .map_or(0, |row| row.children_of_kind(NodeKind::Cell).count());
        log::debug!("creating {row_count}x{col_count} table");

        let table = self.backend.create_table(self.doc, row_count, col_count)?;

        if let Some(spec) = BorderSpec::from_params(&node.params) {
            apply_border(self.backend, Target::Table(table), &spec)?;
        }

        for (index, column) in node.children_of_kind(NodeKind::Column).enumerate() {
            let target = Target::Column(table, index + 1);
            let delta = StyleDelta::from_params(&mut *self.backend, &column.params)?;
            if !delta.is_empty() {
                self.backend.apply_style(target, &delta)?;
            }
            if let Some(points) = column_width(column) {
                self.backend.set_column_width(table, index + 1, points)?;
            }
        }

        for (index, &row) in rows.iter().enumerate() {
            let target = Target::Row(table, index + 1);
            let delta = StyleDelta::from_params(&mut *self.backend, &row.params)?;
            if !delta.is_empty() {
                self.backend.apply_style(target, &delta)?;
            }
            if let Some(spec) = BorderSpec::from_params(&row.params) {
                apply_border(self.backend, target, &spec)?;
            }
            self.emit_row_cells(table, index + 1, row, col_count)?;
        }

        // Leave a zero-width insertion point just after the table so
        // sibling emission continues below it.
        self.backend.select(Target::Table(table))?;
        self.backend.collapse_selection_to_end()?;
        Ok(())
    }

    fn emit_row_cells(
        &mut self,
        table: crate::backend::TableId,
        row_index: usize,
        row: &Node,
        col_count: usize,
    ) -> Result<()> {
        for (index, cell) in row.children_of_kind(NodeKind::Cell).take(col_count).enumerate() {
            let target = Target::Cell(table, row_index, index + 1);
            let delta = StyleDelta::from_params(&mut *self.backend, &cell.params)?;
            if !delta.is_empty() {
                self.backend.apply_style(target, &delta)?;
            }
            if let Some(spec) = BorderSpec::from_params(&cell.params) {
                apply_border(self.backend, target, &spec)?;
            }
            self.backend.select(target)?;
            let was_in_cell = std::mem::replace(&mut self.in_cell, true);
            let result = self.emit_cell_contents(cell);
            self.in_cell = was_in_cell;
            result?;
        }
        Ok(())
    }

    /// Emit a cell's own text and children through the generic walk, so
    /// cell content can carry nested formatting and paragraphs.
    fn emit_cell_contents(&mut self, cell: &Node) -> Result<()> {
        if let Some(text) = cell.content() {
            self.add_content(text)?;
        }
        for child in &cell.children {
            self.emit_node(child)?;
        }
        Ok(())
    }
}

fn column_width(column: &Node) -> Option<f64> {
    match column.params.get("width") {
        Some(Value::Num(points)) => Some(*points),
        Some(Value::Str(text)) => {
            let parsed = style::parse_width(text);
            if parsed.is_none() {
                log::warn!("unparseable column width {text:?} ignored");
            }
            parsed
        }
        _ => None,
    }
}
