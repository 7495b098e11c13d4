//! Style parameter resolution.

use crate::backend::{Backend, Constant};
use crate::error::Result;
use crate::model::Params;

use super::consts::{self, Namespace};

/// A resolved set of formatting changes.
///
/// Each axis is independent: only specified axes are applied, and only
/// specified axes are captured for undo. An absent axis is "leave alone",
/// never false/zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDelta {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub font: Option<String>,
    pub size: Option<f64>,
    pub align: Option<Constant>,
}

/// Captured prior values for exactly the axes a delta touched. Restoring
/// writes those axes back and nothing else.
pub type StyleUndo = StyleDelta;

impl StyleDelta {
    /// Resolve a node's parameter bag into a typed delta.
    ///
    /// The negative forms (`not bold`/`b-`, `not italic`/`not italics`/
    /// `i-`) are checked after the positive ones, so the negative wins
    /// when a bag carries both.
    pub fn from_params<B: Backend + ?Sized>(backend: &mut B, params: &Params) -> Result<Self> {
        let mut delta = Self::default();
        if params.is_set("bold") || params.is_set("b") {
            delta.bold = Some(true);
        }
        if params.is_set("not bold") || params.is_set("b-") {
            delta.bold = Some(false);
        }
        if params.is_set("italic") || params.is_set("italics") || params.is_set("i") {
            delta.italic = Some(true);
        }
        if params.is_set("not italic") || params.is_set("not italics") || params.is_set("i-") {
            delta.italic = Some(false);
        }
        if let Some(font) = params.str("font") {
            delta.font = Some(font.to_string());
        }
        if let Some(size) = params.num("size") {
            delta.size = Some(size);
        }
        if let Some(align) = params.str("align") {
            delta.align = Some(consts::resolve(backend, align, Some(Namespace::ParaAlign))?);
        }
        Ok(delta)
    }

    pub fn is_empty(&self) -> bool {
        self.bold.is_none()
            && self.italic.is_none()
            && self.font.is_none()
            && self.size.is_none()
            && self.align.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::TraceBackend;

    fn delta_of(pairs: &[(&str, bool)]) -> StyleDelta {
        let mut params = Params::new();
        for (name, value) in pairs {
            params.insert(*name, *value);
        }
        StyleDelta::from_params(&mut TraceBackend::new(), &params).unwrap()
    }

    #[test]
    fn positive_forms_set_axes() {
        assert_eq!(delta_of(&[("bold", true)]).bold, Some(true));
        assert_eq!(delta_of(&[("b", true)]).bold, Some(true));
        assert_eq!(delta_of(&[("italic", true)]).italic, Some(true));
        assert_eq!(delta_of(&[("italics", true)]).italic, Some(true));
        assert_eq!(delta_of(&[("i", true)]).italic, Some(true));
    }

    #[test]
    fn negative_forms_win_over_positive() {
        let delta = delta_of(&[("bold", true), ("not bold", true)]);
        assert_eq!(delta.bold, Some(false));

        let delta = delta_of(&[("i", true), ("i-", true)]);
        assert_eq!(delta.italic, Some(false));

        let delta = delta_of(&[("italics", true), ("not italics", true)]);
        assert_eq!(delta.italic, Some(false));
    }

    #[test]
    fn absent_axes_stay_unspecified() {
        let delta = delta_of(&[("bold", true)]);
        assert_eq!(delta.italic, None);
        assert_eq!(delta.font, None);
        assert_eq!(delta.size, None);
        assert_eq!(delta.align, None);
        assert!(!delta.is_empty());
        assert!(delta_of(&[]).is_empty());
    }

    #[test]
    fn font_size_and_align_resolve() {
        let mut params = Params::new();
        params.insert("font", "Georgia");
        params.insert("size", 14.0);
        params.insert("align", "center");
        let mut backend = TraceBackend::new();
        let delta = StyleDelta::from_params(&mut backend, &params).unwrap();
        assert_eq!(delta.font.as_deref(), Some("Georgia"));
        assert_eq!(delta.size, Some(14.0));
        assert_eq!(
            delta.align,
            Some(consts::resolve(&mut backend, "wdAlignParagraphCenter", None).unwrap())
        );
    }

    #[test]
    fn unknown_align_alias_aborts() {
        let mut params = Params::new();
        params.insert("align", "diagonal");
        assert!(StyleDelta::from_params(&mut TraceBackend::new(), &params).is_err());
    }
}
