//! Implementation of the `#[derive(Record)]` macro.
//!
//! This macro generates an implementation of the `Record` trait and
//! field name constants for building filters and column specifications.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    spanned::Spanned, Data, DeriveInput, Error, Fields, GenericArgument, PathArguments, Result,
    Type,
};

use super::attrs::{parse_record_attrs, FieldKind};

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ))
        }
    };

    let mut field_names: Vec<String> = Vec::new();
    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut record_id: Option<TokenStream> = None;

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attrs = parse_record_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let optional = option_inner(&field.ty).is_some();

        if attrs.id {
            if record_id.is_some() {
                return Err(Error::new(
                    attrs.span,
                    "only one field can be marked #[record(id)]",
                ));
            }
            if optional {
                return Err(Error::new(
                    field.ty.span(),
                    "the #[record(id)] field cannot be an Option",
                ));
            }
            record_id = Some(match attrs.kind {
                Some(FieldKind::String) => {
                    quote! { ::std::borrow::Cow::Borrowed(&self.#field_name) }
                }
                _ => quote! {
                    ::std::borrow::Cow::Owned(::std::string::ToString::to_string(&self.#field_name))
                },
            });
        }

        let kind = match attrs.kind {
            Some(kind) => kind,
            None => continue,
        };

        let query_name = attrs.rename.unwrap_or_else(|| field_name.to_string());
        let const_name = format_ident!("{}", to_screaming_snake_case(&query_name));

        field_constants.push(quote! {
            /// Field name constant for filters and columns.
            pub const #const_name: &'static str = #query_name;
        });

        let value = if optional {
            let inner = value_expr(kind, quote! { value });
            quote! {
                match &self.#field_name {
                    ::std::option::Option::Some(value) => #inner,
                    ::std::option::Option::None => ::tabview::Value::None,
                }
            }
        } else {
            value_expr(kind, quote! { &self.#field_name })
        };

        field_matches.push(quote! {
            #query_name => #value,
        });
        field_names.push(query_name);
    }

    let record_id = record_id.ok_or_else(|| {
        Error::new(
            input.ident.span(),
            "Record requires one field marked #[record(id)]",
        )
    })?;

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::tabview::Record for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [&'static str] = &[#(#field_names),*];

            fn record_id(&self) -> ::std::borrow::Cow<'_, str> {
                #record_id
            }

            fn field_value(&self, field: &str) -> ::tabview::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::tabview::Value::None,
                }
            }
        }
    };

    Ok(expanded)
}

/// Builds the `Value` for a field, given an expression borrowing it.
fn value_expr(kind: FieldKind, field_ref: TokenStream) -> TokenStream {
    match kind {
        FieldKind::String => {
            quote! { ::tabview::Value::String(#field_ref) }
        }
        FieldKind::Number => {
            quote! { ::tabview::Value::Number(::tabview::Number::from(*#field_ref)) }
        }
        FieldKind::Timestamp => {
            quote! {
                ::tabview::Value::Timestamp(
                    ::tabview::RecordTimestamp::record_timestamp(#field_ref)
                )
            }
        }
        FieldKind::Bool => {
            quote! { ::tabview::Value::Bool(*#field_ref) }
        }
        FieldKind::Label => {
            quote! {
                ::tabview::Value::String(::tabview::RecordLabel::record_label(#field_ref))
            }
        }
    }
}

/// Returns the `T` of an `Option<T>` field type.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
