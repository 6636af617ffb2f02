//! Attribute parsing for the `Flags` derive macro.
//!
//! Field attributes are not interpreted here. Every `#[flag(...)]` entry on a
//! field is recorded as a `(key, value)` pair in declaration order and handed
//! to the runtime scan unchanged, which owns the naming rules. The only
//! decision taken at compile time is whether a field needs a binding.

use heck::ToKebabCase;
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Token, Visibility, parenthesized};

mod literals;

use literals::{lit_str, lit_text};

const ATTRIBUTE: &str = "flag";

/// Struct-level `#[flag(...)]` settings.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[flag(crate = "my_alias")]`, generated code references
    /// types through `my_alias::` instead of `flag_group::`.
    pub crate_path: Option<syn::Path>,
}

/// Raw annotation pairs collected from a field.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldTag {
    pub entries: Vec<(String, String)>,
}

impl FieldTag {
    /// First value recorded for `key`, or `""`.
    pub(crate) fn get(&self, key: &str) -> &str {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map_or("", |(_, value)| value.as_str())
    }

    /// Whether the scan could turn a field carrying this tag into an option.
    ///
    /// Only such fields are bound, so other fields may have any type.
    pub(crate) fn wants_binding(&self, visibility: &Visibility) -> bool {
        matches!(visibility, Visibility::Public(_))
            && self.get("no-flag").is_empty()
            && !(self.get("long").is_empty() && self.get("short").is_empty())
    }
}

/// Iterate all `#[flag(...)]` attributes once and apply a callback.
fn parse_flag_attrs<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTRIBUTE)) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Extracts `#[flag(...)]` metadata applied to a struct.
///
/// Only the `crate` key is recognised. Unknown keys are ignored so callers
/// keep compiling when new attributes appear.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_flag_attrs(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            Ok(())
        } else {
            discard_unknown(meta)
        }
    })?;
    Ok(out)
}

/// Records every `#[flag(...)]` entry on a field.
///
/// Keys are converted to kebab-case, so `no_flag` is recorded as `no-flag`.
/// A bare key records `"true"`.
pub(crate) fn parse_field_tag(attrs: &[Attribute]) -> syn::Result<FieldTag> {
    let mut out = FieldTag::default();
    parse_flag_attrs(attrs, |meta| {
        let Some(ident) = meta.path.get_ident() else {
            return Err(meta.error("expected a single identifier as `flag` key"));
        };
        let key = ident.unraw().to_string().to_kebab_case();
        let value = if meta.input.peek(Token![=]) {
            lit_text(meta, &key)?
        } else if meta.input.peek(syn::token::Paren) {
            return Err(meta.error(format!("`{key}` does not accept a nested list")));
        } else {
            "true".to_owned()
        };
        out.entries.push((key, value));
        Ok(())
    })?;
    Ok(out)
}
