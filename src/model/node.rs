//! Node types for the declarative document tree.

use serde::{Deserialize, Serialize};

use super::params::{Params, Value};

/// Kind of a document tree node.
///
/// This is the closed set of tags the emitter understands. Each kind has
/// its own emission contract:
/// - `Document` is the root: it owns the backend session for one document.
/// - `Para`, `Text`, `Formatting` and `Cell` are text-bearing: they apply
///   their style around their content and children.
/// - `Table` consumes `Row`/`Column` children; `Row` consumes `Cell`
///   children. Outside a table, `Row` and `Column` are inert.
/// - `Code` carries an opaque host-side script in its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Document,
    Para,
    #[default]
    Text,
    Formatting,
    Table,
    Row,
    Cell,
    Column,
    Code,
}

/// One element of the declarative input tree.
///
/// Produced by the external tree-builder (typically deserialized from its
/// JSON output) and read-only during emission. A node's children are
/// consumed according to its kind's contract; children of unexpected kinds
/// are skipped by kind-filtered iteration rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,

    /// Short literal, e.g. a text run or a document filename.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Raw unparsed text; embedded line breaks are preserved on emission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub params: Params,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name, value);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Children of the given kind, in declared order.
    pub fn children_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// The text this node contributes: its label when present, else its
    /// raw body.
    pub fn content(&self) -> Option<&str> {
        self.label.as_deref().or(self.body.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_filtered_iteration_preserves_order_and_skips_others() {
        let table = Node::new(NodeKind::Table)
            .with_child(Node::new(NodeKind::Row).with_label("r1"))
            .with_child(Node::new(NodeKind::Text).with_label("stray"))
            .with_child(Node::new(NodeKind::Row).with_label("r2"))
            .with_child(Node::new(NodeKind::Column));

        let rows: Vec<&str> = table
            .children_of_kind(NodeKind::Row)
            .map(|row| row.label.as_deref().unwrap())
            .collect();
        assert_eq!(rows, ["r1", "r2"]);
        assert_eq!(table.children_of_kind(NodeKind::Column).count(), 1);
        assert_eq!(table.children_of_kind(NodeKind::Cell).count(), 0);
    }

    #[test]
    fn content_prefers_label_over_body() {
        let node = Node::new(NodeKind::Text).with_label("label").with_body("body");
        assert_eq!(node.content(), Some("label"));

        let node = Node::new(NodeKind::Text).with_body("line one\nline two");
        assert_eq!(node.content(), Some("line one\nline two"));

        assert_eq!(Node::new(NodeKind::Para).content(), None);
    }

    #[test]
    fn deserializes_parser_output() {
        let json = r#"{
            "kind": "para",
            "label": "Title",
            "params": {"bold": true, "align": "center"},
            "children": [{"kind": "text", "body": "tail"}]
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, NodeKind::Para);
        assert_eq!(node.label.as_deref(), Some("Title"));
        assert!(node.params.is_set("bold"));
        assert_eq!(node.params.str("align"), Some("center"));
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].kind, NodeKind::Text);
    }
}
