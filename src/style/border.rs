//! Border specification expansion and application.
//!
//! Border parameters are CSS-like shorthand: a bare style name applies to
//! every edge, or a record names edges individually. Expansion precedence,
//! lowest to highest: `all` seeds `outside` plus the inner `horizontal`/
//! `vertical` rules; `outside` seeds the four outer edges; an explicitly
//! keyed edge always wins over anything expansion would fill in.

use crate::backend::{Backend, Target};
use crate::error::Result;
use crate::model::{Params, Value};

use super::consts::{self, Namespace};

/// One border edge of a bordered target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
    Horizontal,
    Vertical,
}

impl Edge {
    /// Alias of this edge in the `border` constant namespace.
    pub fn name(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Left => "left",
            Edge::Bottom => "bottom",
            Edge::Right => "right",
            Edge::Horizontal => "horizontal",
            Edge::Vertical => "vertical",
        }
    }
}

/// The line drawn on one edge. Fields hold symbolic names, resolved
/// against the backend's constant space only when the edge is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLine {
    pub style: String,
    pub color: String,
    pub width: String,
}

impl Default for EdgeLine {
    fn default() -> Self {
        Self {
            style: "single".to_string(),
            color: "auto".to_string(),
            width: "0.5pt".to_string(),
        }
    }
}

impl EdgeLine {
    fn styled(style: &str) -> Self {
        Self {
            style: style.to_string(),
            ..Self::default()
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(style) => Some(Self::styled(style)),
            Value::Map(map) => {
                let mut line = Self::default();
                if let Some(style) = map.get("style").and_then(Value::as_str) {
                    line.style = style.to_string();
                }
                if let Some(color) = map.get("color").and_then(Value::as_str) {
                    line.color = color.to_string();
                }
                if let Some(width) = map.get("width").and_then(Value::as_str) {
                    line.width = width.to_string();
                }
                Some(line)
            }
            _ => None,
        }
    }
}

/// Shorthand-expandable per-edge border description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderSpec {
    pub all: Option<EdgeLine>,
    pub outside: Option<EdgeLine>,
    pub top: Option<EdgeLine>,
    pub left: Option<EdgeLine>,
    pub bottom: Option<EdgeLine>,
    pub right: Option<EdgeLine>,
    pub horizontal: Option<EdgeLine>,
    pub vertical: Option<EdgeLine>,
}

impl BorderSpec {
    /// Read a node's `border` parameter, if any.
    pub fn from_params(params: &Params) -> Option<Self> {
        params.get("border").and_then(Self::from_value)
    }

    /// Normalize a parameter value to record form; a bare style name is
    /// shorthand for `{all: name}`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(style) => Some(Self {
                all: Some(EdgeLine::styled(style)),
                ..Self::default()
            }),
            Value::Map(map) => {
                let mut spec = Self::default();
                for (key, value) in map {
                    let Some(line) = EdgeLine::from_value(value) else {
                        log::warn!("unusable border edge value for {key:?} ignored");
                        continue;
                    };
                    match key.as_str() {
                        "all" => spec.all = Some(line),
                        "outside" => spec.outside = Some(line),
                        "top" => spec.top = Some(line),
                        "left" => spec.left = Some(line),
                        "bottom" => spec.bottom = Some(line),
                        "right" => spec.right = Some(line),
                        "horizontal" => spec.horizontal = Some(line),
                        "vertical" => spec.vertical = Some(line),
                        other => log::warn!("unknown border edge key {other:?} ignored"),
                    }
                }
                Some(spec)
            }
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Expand shorthands into the per-edge plan. Explicit edges are taken
    /// as-is; expansion only fills edges that were not explicitly keyed.
    pub fn expand(&self) -> Vec<(Edge, EdgeLine)> {
        let outside = self.outside.clone().or_else(|| self.all.clone());
        let top = self.top.clone().or_else(|| outside.clone());
        let left = self.left.clone().or_else(|| outside.clone());
        let bottom = self.bottom.clone().or_else(|| outside.clone());
        let right = self.right.clone().or_else(|| outside.clone());
        let horizontal = self.horizontal.clone().or_else(|| self.all.clone());
        let vertical = self.vertical.clone().or_else(|| self.all.clone());

        [
            (Edge::Top, top),
            (Edge::Left, left),
            (Edge::Bottom, bottom),
            (Edge::Right, right),
            (Edge::Horizontal, horizontal),
            (Edge::Vertical, vertical),
        ]
        .into_iter()
        .filter_map(|(edge, line)| line.map(|line| (edge, line)))
        .collect()
    }
}

/// Apply a border specification to a bordered target.
///
/// Each planned edge resolves its line style first; width and color are
/// resolved and set only for edges that actually draw a line, since some
/// hosts reject width/color writes on a no-line edge.
pub fn apply_border<B: Backend + ?Sized>(
    backend: &mut B,
    target: Target,
    spec: &BorderSpec,
) -> Result<()> {
    if spec.is_empty() {
        return Ok(());
    }
    let no_line = consts::resolve(backend, "none", Some(Namespace::LineStyle))?;
    for (edge, line) in spec.expand() {
        let edge_constant = consts::resolve(backend, edge.name(), Some(Namespace::Border))?;
        let style = consts::resolve(backend, &line.style, Some(Namespace::LineStyle))?;
        if style == no_line {
            backend.set_border(target, edge_constant, style, None, None)?;
        } else {
            let width = consts::resolve(backend, &line.width, Some(Namespace::LineWidth))?;
            let color = consts::resolve(backend, &line.color, Some(Namespace::Color))?;
            backend.set_border(target, edge_constant, style, Some(width), Some(color))?;
        }
    }
    Ok(())
}
