//! `#[derive(Destruct)]`
//!
//! A type is trivially destructible iff every field is, so the generated
//! answer is the type-level AND of the field answers:
//!
//! ```text
//! struct S { a: A, b: B, c: C }
//!   => Trivial = <<A as Destruct>::Trivial as Bool>::And<
//!                  <<B as Destruct>::Trivial as Bool>::And<
//!                    <C as Destruct>::Trivial>>
//! ```
//!
//! A `Drop` impl is invisible to a derive, so such types must say
//! `#[destruct(managed)]`; forgetting it is caught when `Inline<T>` is
//! instantiated.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Fields, Type, WherePredicate};

use crate::common::DestructOptions;

/// Field types of a struct or of every enum variant, deduplicated in order.
fn field_types(input: &DeriveInput) -> syn::Result<Vec<Type>> {
    let fields: Vec<&Fields> = match &input.data {
        Data::Struct(data) => vec![&data.fields],
        Data::Enum(data) => data.variants.iter().map(|variant| &variant.fields).collect(),
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "Destruct cannot be derived for unions; implement it manually",
            ));
        }
    };

    let mut seen = HashSet::new();
    Ok(fields
        .into_iter()
        .flat_map(|fields| fields.iter().map(|field| field.ty.clone()))
        .filter(|ty| seen.insert(quote!(#ty).to_string()))
        .collect())
}

/// Right-fold the field answers with `Bool::And`.
fn conjunction(types: &[Type]) -> TokenStream {
    match types {
        [] => quote! { ::inplace_optional::Present },
        [last] => quote! { <#last as ::inplace_optional::Destruct>::Trivial },
        [first, rest @ ..] => {
            let rest = conjunction(rest);
            quote! {
                <<#first as ::inplace_optional::Destruct>::Trivial as ::inplace_optional::Bool>::And<#rest>
            }
        }
    }
}

pub fn expand_derive_destruct(input: DeriveInput) -> syn::Result<TokenStream> {
    let options = DestructOptions::from_attrs(&input.attrs)?;
    let types = field_types(&input)?;
    let name = &input.ident;

    let mut generics = input.generics.clone();
    let trivial = if options.managed {
        quote! { ::inplace_optional::Absent }
    } else {
        let where_clause = generics.make_where_clause();
        for ty in &types {
            let predicate: WherePredicate = parse_quote! { #ty: ::inplace_optional::Destruct };
            where_clause.predicates.push(predicate);
        }
        conjunction(&types)
    };
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let destruct = quote! {
        impl #impl_generics ::inplace_optional::Destruct for #name #ty_generics #where_clause {
            type Trivial = #trivial;
        }
    };

    if !options.eq {
        return Ok(destruct);
    }

    let mut eq_generics = input.generics.clone();
    let self_ty: Type = parse_quote! { #name #ty_generics };
    eq_generics
        .make_where_clause()
        .predicates
        .push(parse_quote! { #self_ty: ::core::cmp::PartialEq });
    let (impl_generics, _, where_clause) = eq_generics.split_for_impl();

    let reverse_eq = [quote!(::inplace_optional::Inline), quote!(::inplace_optional::Managed)]
        .into_iter()
        .map(|container| {
            quote! {
                impl #impl_generics ::core::cmp::PartialEq<#container<#self_ty>> for #self_ty #where_clause {
                    #[inline]
                    fn eq(&self, other: &#container<#self_ty>) -> bool {
                        other == self
                    }
                }
            }
        });

    Ok(quote! {
        #destruct
        #(#reverse_eq)*
    })
}
