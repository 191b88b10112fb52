//! Attribute parsing for the Record derive macro.
//!
//! This module provides parsers for the `#[record(...)]` field attributes
//! used by the `Record` derive macro.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

/// How a field is exposed to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// String field: `#[record(String)]`
    String,
    /// Number field: `#[record(Number)]`
    Number,
    /// Timestamp field: `#[record(Timestamp)]`, via `RecordTimestamp`
    Timestamp,
    /// Boolean field: `#[record(Bool)]`
    Bool,
    /// Categorical enum field: `#[record(Label)]`, via `RecordLabel`
    Label,
}

impl FieldKind {
    fn from_name(name: &str, span: Span) -> Result<Self> {
        match name {
            "String" | "string" => Ok(FieldKind::String),
            "Number" | "number" => Ok(FieldKind::Number),
            "Timestamp" | "timestamp" => Ok(FieldKind::Timestamp),
            "Bool" | "boolean" | "bool" => Ok(FieldKind::Bool),
            "Label" | "label" => Ok(FieldKind::Label),
            other => Err(Error::new(
                span,
                format!(
                    "unknown record type: '{}'. Expected one of: String, Number, Timestamp, Bool, Label",
                    other
                ),
            )),
        }
    }

    pub fn from_ident(ident: &Ident) -> Result<Self> {
        Self::from_name(&ident.to_string(), ident.span())
    }
}

/// Field-level attributes from `#[record(...)]`.
#[derive(Debug, Clone)]
pub struct RecordAttr {
    pub kind: Option<FieldKind>,
    /// This field is the record identifier.
    pub id: bool,
    pub skip: bool,
    /// Custom field name (default: field name).
    pub rename: Option<String>,
    pub span: Span,
}

impl Default for RecordAttr {
    fn default() -> Self {
        RecordAttr {
            kind: None,
            id: false,
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl Parse for RecordAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = RecordAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if p.is_ident("id") {
                        attr.id = true;
                        attr.span = p.span();
                    } else if let Some(ident) = p.get_ident() {
                        attr.kind = Some(FieldKind::from_ident(ident)?);
                        attr.span = ident.span();
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "expected record type: String, Number, Timestamp, Bool, Label, id, or skip",
                        ));
                    }
                }

                // rename = "name" or ty = "bool"
                Meta::NameValue(nv) => {
                    let value = match &nv.value {
                        syn::Expr::Lit(syn::ExprLit {
                            lit: Lit::Str(s), ..
                        }) => s,
                        other => {
                            return Err(Error::new(other.span(), "expected a string literal"));
                        }
                    };
                    if nv.path.is_ident("rename") {
                        attr.rename = Some(value.value());
                    } else if nv.path.is_ident("ty") {
                        attr.kind = Some(FieldKind::from_name(&value.value(), value.span())?);
                        attr.span = value.span();
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: rename or ty",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown record attribute. Expected: String, Number, Timestamp, Bool, Label, id, skip, rename = \"...\", or ty = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract `#[record(...)]` attributes from a field's attributes.
pub fn parse_record_attrs(attrs: &[Attribute]) -> Result<RecordAttr> {
    for attr in attrs {
        if attr.path().is_ident("record") {
            return attr.parse_args::<RecordAttr>();
        }
    }
    Ok(RecordAttr::default())
}
