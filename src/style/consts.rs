//! Symbolic constant resolution.
//!
//! Style and border parameters name host constants either by short alias
//! (`single`, `auto`, `center`) or by canonical name (`wdLineStyleSingle`).
//! Each namespace maps aliases to canonical names; the canonical name is
//! then looked up in the backend's constant space. A name the backend does
//! not know is a fatal configuration error, not a per-node condition.

use phf::phf_map;

use crate::backend::{Backend, Constant};
use crate::error::Result;

/// Alias namespaces understood by [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    LineStyle,
    LineWidth,
    Color,
    Border,
    ParaAlign,
}

static LINE_STYLE_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "none" => "wdLineStyleNone",
    "single" => "wdLineStyleSingle",
    "double" => "wdLineStyleDouble",
    "triple" => "wdLineStyleTriple",
    "dot" => "wdLineStyleDot",
    "dash" => "wdLineStyleDashSmallGap",
    "dash-dot" => "wdLineStyleDashDot",
    "thick" => "wdLineStyleThickThinMedGap",
};

static LINE_WIDTH_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "0.25pt" => "wdLineWidth025pt",
    "0.5pt" => "wdLineWidth050pt",
    "0.75pt" => "wdLineWidth075pt",
    "1pt" => "wdLineWidth100pt",
    "1.5pt" => "wdLineWidth150pt",
    "2.25pt" => "wdLineWidth225pt",
    "3pt" => "wdLineWidth300pt",
    "4.5pt" => "wdLineWidth450pt",
    "6pt" => "wdLineWidth600pt",
};

static COLOR_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "auto" => "wdColorAutomatic",
    "black" => "wdColorBlack",
    "white" => "wdColorWhite",
    "red" => "wdColorRed",
    "green" => "wdColorGreen",
    "blue" => "wdColorBlue",
    "yellow" => "wdColorYellow",
    "gray" => "wdColorGray50",
};

static BORDER_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "top" => "wdBorderTop",
    "left" => "wdBorderLeft",
    "bottom" => "wdBorderBottom",
    "right" => "wdBorderRight",
    "horizontal" => "wdBorderHorizontal",
    "vertical" => "wdBorderVertical",
};

static PARA_ALIGN_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "left" => "wdAlignParagraphLeft",
    "center" => "wdAlignParagraphCenter",
    "centre" => "wdAlignParagraphCenter",
    "right" => "wdAlignParagraphRight",
    "justify" => "wdAlignParagraphJustify",
};

impl Namespace {
    fn aliases(self) -> &'static phf::Map<&'static str, &'static str> {
        match self {
            Namespace::LineStyle => &LINE_STYLE_ALIASES,
            Namespace::LineWidth => &LINE_WIDTH_ALIASES,
            Namespace::Color => &COLOR_ALIASES,
            Namespace::Border => &BORDER_ALIASES,
            Namespace::ParaAlign => &PARA_ALIGN_ALIASES,
        }
    }

    /// Canonical constant name for `name` in this namespace; names the
    /// namespace does not alias pass through verbatim.
    pub fn canonical<'a>(self, name: &'a str) -> &'a str {
        self.aliases().get(name).copied().unwrap_or(name)
    }
}

/// Resolve a symbolic name to a backend constant.
///
/// With a namespace, the short alias is substituted first; without one,
/// the name is used as a canonical constant name directly. Fails with
/// [`Error::UnknownConstant`](crate::Error::UnknownConstant) when the
/// backend's constant space has no such constant.
pub fn resolve<B: Backend + ?Sized>(
    backend: &mut B,
    name: &str,
    namespace: Option<Namespace>,
) -> Result<Constant> {
    let canonical = match namespace {
        Some(namespace) => namespace.canonical(name),
        None => name,
    };
    backend.load_constant(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::TraceBackend;
    use crate::error::Error;

    #[test]
    fn alias_and_verbatim_lookup_agree() {
        let mut backend = TraceBackend::new();
        let via_alias = resolve(&mut backend, "single", Some(Namespace::LineStyle)).unwrap();
        let verbatim = resolve(&mut backend, "wdLineStyleSingle", None).unwrap();
        assert_eq!(via_alias, verbatim);
    }

    #[test]
    fn unaliased_names_pass_through() {
        let mut backend = TraceBackend::new();
        let constant =
            resolve(&mut backend, "wdLineStyleDouble", Some(Namespace::LineStyle)).unwrap();
        assert_eq!(constant, resolve(&mut backend, "double", Some(Namespace::LineStyle)).unwrap());
    }

    #[test]
    fn unknown_constant_is_fatal() {
        let mut backend = TraceBackend::new();
        let err = resolve(&mut backend, "nonexistent-constant", None).unwrap_err();
        match err {
            Error::UnknownConstant(name) => assert_eq!(name, "nonexistent-constant"),
            other => panic!("expected UnknownConstant, got {other:?}"),
        }
    }
}
