use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{DeriveInput, Member};

use crate::selector::StrongConfig;

/// `#[derive(StrongType)]` expansion.
///
/// The storage/identity impls are emitted directly; the selector list is
/// forwarded to the core crate's declarative capability macros, one call per
/// selector (proc-macro front end, decl-macro back end).
pub fn expand_derive_strong_type(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let vis = &input.vis;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "strong types cannot be generic; wrap a concrete raw type",
        ));
    }

    let fields = match &input.data {
        syn::Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "StrongType can only be derived for structs",
            ));
        }
    };

    if fields.len() != 1 {
        return Err(syn::Error::new_spanned(
            fields,
            "a strong type stores exactly one value; expected a single-field struct",
        ));
    }

    let field = fields.iter().next().expect("length checked above");
    let raw = &field.ty;
    let member: Member = match &field.ident {
        Some(name) => Member::Named(name.clone()),
        None => Member::Unnamed(syn::Index::from(0)),
    };
    let construct = match &field.ident {
        Some(name) => quote! { Self { #name: raw } },
        None => quote! { Self(raw) },
    };

    let config = StrongConfig::from_attrs(&input.attrs)?;

    // Tag: user-supplied type, or a generated data-free marker.
    let (tag_ty, tag_def) = match config.tag {
        Some(ty) => (quote! { #ty }, TokenStream2::new()),
        None => {
            let tag_ident = format_ident!("{}Tag", ident);
            let tag_doc = format!("Identity tag for [`{ident}`]. Carries no data.");
            let def = quote! {
                #[doc = #tag_doc]
                #vis enum #tag_ident {}
            };
            (quote! { #tag_ident }, def)
        }
    };

    // Selectors expand to bare macro calls resolved at the declaration site:
    // the built-ins come in with `use nominal::prelude::*`, and a consumer's
    // own `macro_rules!` selector is picked up the same way.
    let caps = config.caps.iter().map(|selector| {
        let name = &selector.name;
        let with_arg = selector.with_ty.as_ref().map(|ty| quote! { , with #ty });
        let to_arg = selector.to_ty.as_ref().map(|ty| quote! { , to #ty });
        quote! {
            #name!(#ident #with_arg #to_arg);
        }
    });

    Ok(quote! {
        #tag_def

        impl #ident {
            /// Wraps a raw value.
            #[inline]
            #vis const fn new(raw: #raw) -> Self {
                #construct
            }

            /// Borrows the stored value.
            #[inline]
            #vis const fn value(&self) -> &#raw {
                &self.#member
            }

            /// Mutably borrows the stored value.
            #[inline]
            #vis fn value_mut(&mut self) -> &mut #raw {
                &mut self.#member
            }

            /// Consumes the wrapper, moving the stored value out.
            #[inline]
            #vis fn into_value(self) -> #raw {
                self.#member
            }
        }

        impl ::nominal::StrongType for #ident {
            type Raw = #raw;
            type Tag = #tag_ty;

            #[inline]
            fn from_raw(raw: #raw) -> Self {
                #construct
            }

            #[inline]
            fn value(&self) -> &#raw {
                &self.#member
            }

            #[inline]
            fn value_mut(&mut self) -> &mut #raw {
                &mut self.#member
            }

            #[inline]
            fn into_value(self) -> #raw {
                self.#member
            }
        }

        impl ::nominal::Unwrap for #ident {
            type Raw = #raw;

            #[inline]
            fn unwrap(self) -> #raw {
                self.#member
            }
        }

        impl<'a> ::nominal::Unwrap for &'a #ident {
            type Raw = &'a #raw;

            #[inline]
            fn unwrap(self) -> &'a #raw {
                &self.#member
            }
        }

        impl<'a> ::nominal::Unwrap for &'a mut #ident {
            type Raw = &'a mut #raw;

            #[inline]
            fn unwrap(self) -> &'a mut #raw {
                &mut self.#member
            }
        }

        impl ::nominal::Wrap<#raw> for #ident {
            #[inline]
            fn wrap(raw: #raw) -> Self {
                #construct
            }
        }

        #(#caps)*
    })
}
