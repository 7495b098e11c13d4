//! Tree-walking emission.
//!
//! The emitter walks a node tree once, top-down and depth-first, and
//! realizes it against a backend session. Children are always emitted in
//! declared order; the order is document-visible. Style scopes bracket
//! each text-bearing node: the node's delta is applied on entry and the
//! captured prior values are restored on exit, even when a child emission
//! fails partway.

mod context;
mod table;

use std::path::PathBuf;

use crate::backend::{Backend, DocumentId};
use crate::error::{Error, Result};
use crate::model::{Node, NodeKind};
use crate::style::StyleDelta;

/// Emit a tree against a backend session.
///
/// A `Document` root opens (or attaches to) its own document and saves it
/// once after all children when this emission created it. Any other root
/// is emitted into the host's currently active document.
pub fn emit<B: Backend + ?Sized>(backend: &mut B, tree: &Node) -> Result<()> {
    match tree.kind {
        NodeKind::Document => emit_document(backend, tree),
        _ => {
            let doc = backend.attach_active()?;
            emit_into(backend, doc, tree)
        }
    }
}

/// Emit a subtree against an already-established document context.
pub fn emit_into<B: Backend + ?Sized>(
    backend: &mut B,
    doc: DocumentId,
    node: &Node,
) -> Result<()> {
    Emitter::new(backend, doc).emit_node(node)
}

fn emit_document<B: Backend + ?Sized>(backend: &mut B, node: &Node) -> Result<()> {
    let path = node.label.as_ref().map(PathBuf::from);
    let force_new = node.params.is_set("new");
    let attach = node.params.is_set("active");

    if let Some(path) = &path
        && !attach
        && !force_new
        && path.exists()
        && std::fs::File::open(path).is_err()
    {
        return Err(Error::FileAccessDenied(path.clone()));
    }

    let (doc, created) = if attach {
        (backend.attach_active()?, false)
    } else {
        let created = force_new || path.as_deref().is_none_or(|p| !p.exists());
        (backend.open_document(path.as_deref(), force_new)?, created)
    };
    log::debug!("document session established (created={created})");

    {
        let mut emitter = Emitter::new(backend, doc);
        for child in &node.children {
            emitter.emit_node(child)?;
        }
    }

    // Persist exactly once, after all children, and only for documents
    // this emission created.
    if created
        && !node.params.is_set("stay-open")
        && let Some(path) = &path
    {
        log::info!("saving document to {}", path.display());
        backend.save_document(doc, path)?;
    }
    Ok(())
}

/// One in-progress emission over a single document.
pub(crate) struct Emitter<'a, B: Backend + ?Sized> {
    backend: &'a mut B,
    doc: DocumentId,
    /// Content insertion is redirected into the selected table cell
    /// while a cell's subtree is being emitted.
    in_cell: bool,
}

impl<'a, B: Backend + ?Sized> Emitter<'a, B> {
    pub(crate) fn new(backend: &'a mut B, doc: DocumentId) -> Self {
        Self {
            backend,
            doc,
            in_cell: false,
        }
    }

    pub(crate) fn emit_node(&mut self, node: &Node) -> Result<()> {
        match node.kind {
            NodeKind::Document => {
                log::warn!("nested document node skipped");
                Ok(())
            }
            NodeKind::Para | NodeKind::Text | NodeKind::Formatting | NodeKind::Cell => {
                self.emit_text_bearing(node)
            }
            NodeKind::Table => self.emit_table(node),
            NodeKind::Row | NodeKind::Column => {
                log::warn!("{:?} node outside a table skipped", node.kind);
                Ok(())
            }
            NodeKind::Code => {
                if let Some(source) = node.body.as_deref() {
                    self.backend.run_script(source)?;
                }
                Ok(())
            }
        }
    }

    /// Shared behavior of the text-bearing kinds. A formatting node emits
    /// no content of its own; a para node types a paragraph break after
    /// its children. Everything happens inside the node's style scope.
    fn emit_text_bearing(&mut self, node: &Node) -> Result<()> {
        let delta = StyleDelta::from_params(&mut *self.backend, &node.params)?;
        self.scoped(&delta, |emitter| {
            if node.kind != NodeKind::Formatting
                && let Some(text) = node.content()
            {
                emitter.add_content(text)?;
            }
            for child in &node.children {
                emitter.emit_node(child)?;
            }
            if node.kind == NodeKind::Para {
                emitter.backend.type_paragraph_break()?;
            }
            Ok(())
        })
    }
}
