//! The selection/formatting context.
//!
//! Style application and its reversal bracket a scope as a guaranteed
//! pair: `apply_style` captures the prior value of every axis it changes,
//! and `scoped` restores those axes even when the scope's body fails,
//! re-raising the body's error after the restore has run. Ambient style
//! is never left corrupted by an abort.

use crate::backend::{Backend, Target};
use crate::error::Result;
use crate::style::{StyleDelta, StyleUndo};

use super::Emitter;

impl<'a, B: Backend + ?Sized> Emitter<'a, B> {
    /// Apply a delta to the current selection, capturing prior values of
    /// exactly the touched axes.
    pub(crate) fn apply_style(&mut self, delta: &StyleDelta) -> Result<StyleUndo> {
        if delta.is_empty() {
            return Ok(StyleUndo::default());
        }
        let current = self.backend.selection_style()?;
        let mut undo = StyleUndo::default();
        if delta.bold.is_some() {
            undo.bold = Some(current.bold);
        }
        if delta.italic.is_some() {
            undo.italic = Some(current.italic);
        }
        if delta.font.is_some() {
            undo.font = Some(current.font.clone());
        }
        if delta.size.is_some() {
            undo.size = Some(current.size);
        }
        if delta.align.is_some() {
            undo.align = Some(current.align);
        }
        self.backend.apply_style(Target::Selection, delta)?;
        Ok(undo)
    }

    /// Write the captured values back. Axes the undo record does not
    /// carry are left alone.
    pub(crate) fn restore_style(&mut self, undo: &StyleUndo) -> Result<()> {
        if undo.is_empty() {
            return Ok(());
        }
        self.backend.apply_style(Target::Selection, undo)
    }

    /// Run `body` inside a style scope. The restore always runs; a body
    /// error takes precedence over a restore error.
    pub(crate) fn scoped<T>(
        &mut self,
        delta: &StyleDelta,
        body: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let undo = self.apply_style(delta)?;
        let result = body(self);
        let restored = self.restore_style(&undo);
        match (result, restored) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(err)) => Err(err),
            (Err(err), _) => Err(err),
        }
    }

    /// Insert node content at the current position: plain typing in body
    /// text, table-aware typing inside a cell.
    pub(crate) fn add_content(&mut self, text: &str) -> Result<()> {
        if self.in_cell {
            self.backend.type_into_cell(text)
        } else {
            self.backend.type_text(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DocumentId, TraceBackend};

    fn styled_backend() -> TraceBackend {
        let mut backend = TraceBackend::new();
        backend.open_document(None, false).unwrap();
        backend
    }

    #[test]
    fn apply_then_restore_round_trips_each_axis() {
        let mut backend = styled_backend();
        let before = backend.selection_style().unwrap();

        let delta = StyleDelta {
            bold: Some(true),
            font: Some("Georgia".to_string()),
            size: Some(18.0),
            ..StyleDelta::default()
        };
        let mut emitter = Emitter::new(&mut backend, DocumentId(0));
        let undo = emitter.apply_style(&delta).unwrap();
        emitter.restore_style(&undo).unwrap();

        assert_eq!(backend.selection_style().unwrap(), before);
    }

    #[test]
    fn undo_captures_only_touched_axes() {
        let mut backend = styled_backend();
        let delta = StyleDelta {
            italic: Some(true),
            ..StyleDelta::default()
        };
        let mut emitter = Emitter::new(&mut backend, DocumentId(0));
        let undo = emitter.apply_style(&delta).unwrap();
        assert_eq!(undo.italic, Some(false));
        assert_eq!(undo.bold, None);
        assert_eq!(undo.font, None);
        assert_eq!(undo.size, None);
        assert_eq!(undo.align, None);
    }

    #[test]
    fn empty_delta_makes_no_backend_calls() {
        let mut backend = styled_backend();
        let calls_before = backend.trace().len();
        let mut emitter = Emitter::new(&mut backend, DocumentId(0));
        let undo = emitter.apply_style(&StyleDelta::default()).unwrap();
        emitter.restore_style(&undo).unwrap();
        assert_eq!(backend.trace().len(), calls_before);
    }

    #[test]
    fn scoped_restores_after_body_failure() {
        let mut backend = styled_backend();
        let before = backend.selection_style().unwrap();
        let delta = StyleDelta {
            bold: Some(true),
            ..StyleDelta::default()
        };
        let mut emitter = Emitter::new(&mut backend, DocumentId(0));
        let result: Result<()> = emitter.scoped(&delta, |emitter| {
            emitter.backend.type_text("partial")?;
            Err(crate::Error::Backend("child emission failed".to_string()))
        });
        assert!(result.is_err());
        assert_eq!(backend.selection_style().unwrap(), before);
    }
}
