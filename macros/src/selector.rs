//! Parsing for the `#[strong(...)]` helper attribute.
//!
//! Grammar:
//!
//! ```text
//! strong_args := strong_arg ("," strong_arg)*
//! strong_arg  := "tag" "=" TYPE
//!              | "caps" "(" selector ("," selector)* ")"
//! selector    := IDENT [ "(" param ("," param)* ")" ]
//! param       := "with" TYPE | "to" TYPE
//! ```

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, Token, Type, parenthesized, token};

/// One capability selector: a name plus optional operand/result types.
pub struct Selector {
    pub name: Ident,
    pub with_ty: Option<Type>,
    pub to_ty: Option<Type>,
}

impl Parse for Selector {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        let mut with_ty = None;
        let mut to_ty = None;

        if input.peek(token::Paren) {
            let content;
            parenthesized!(content in input);
            while !content.is_empty() {
                let kw: Ident = content.parse()?;
                if kw == "with" {
                    if with_ty.is_some() {
                        return Err(syn::Error::new_spanned(kw, "duplicate `with` parameter"));
                    }
                    with_ty = Some(content.parse()?);
                } else if kw == "to" {
                    if to_ty.is_some() {
                        return Err(syn::Error::new_spanned(kw, "duplicate `to` parameter"));
                    }
                    to_ty = Some(content.parse()?);
                } else {
                    return Err(syn::Error::new_spanned(
                        kw,
                        "expected `with <type>` or `to <type>`",
                    ));
                }
                if !content.is_empty() {
                    content.parse::<Token![,]>()?;
                }
            }
        }

        Ok(Selector { name, with_ty, to_ty })
    }
}

/// The parsed contents of one `#[strong(...)]` attribute.
pub enum StrongArg {
    Tag(Type),
    Caps(Vec<Selector>),
}

impl Parse for StrongArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident: Ident = input.parse()?;
        if ident == "tag" {
            input.parse::<Token![=]>()?;
            Ok(StrongArg::Tag(input.parse()?))
        } else if ident == "caps" {
            let content;
            parenthesized!(content in input);
            let selectors = Punctuated::<Selector, Token![,]>::parse_terminated(&content)?;
            Ok(StrongArg::Caps(selectors.into_iter().collect()))
        } else {
            Err(syn::Error::new_spanned(
                ident,
                "expected `tag = <type>` or `caps(...)`",
            ))
        }
    }
}

/// All `#[strong(...)]` attributes of a declaration, merged.
#[derive(Default)]
pub struct StrongConfig {
    pub tag: Option<Type>,
    pub caps: Vec<Selector>,
}

impl StrongConfig {
    pub fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut config = StrongConfig::default();
        for attr in attrs {
            if !attr.path().is_ident("strong") {
                continue;
            }
            let args =
                attr.parse_args_with(Punctuated::<StrongArg, Token![,]>::parse_terminated)?;
            for arg in args {
                match arg {
                    StrongArg::Tag(ty) => {
                        if config.tag.is_some() {
                            return Err(syn::Error::new_spanned(
                                attr,
                                "duplicate `tag` parameter",
                            ));
                        }
                        config.tag = Some(ty);
                    }
                    StrongArg::Caps(mut selectors) => config.caps.append(&mut selectors),
                }
            }
        }
        Ok(config)
    }
}
