//! `#[destruct(...)]` attribute parsing.

use syn::{Attribute, Ident};

/// Options accepted by `#[derive(Destruct)]`.
///
/// ```ignore
/// #[derive(Destruct)]
/// #[destruct(managed, eq)]
/// struct Handle { fd: i32 }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DestructOptions {
    /// Force `Trivial = Absent` (the type has a `Drop` impl).
    pub managed: bool,
    /// Also emit `Self == Inline<Self>` and `Self == Managed<Self>`.
    pub eq: bool,
}

const KEYWORDS: &[&str] = &["managed", "eq"];

impl DestructOptions {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("destruct")) {
            attr.parse_nested_meta(|meta| {
                let Some(ident) = meta.path.get_ident() else {
                    return Err(meta.error("expected an identifier"));
                };
                options.set(ident)
            })?;
        }
        Ok(options)
    }

    fn set(&mut self, ident: &Ident) -> syn::Result<()> {
        let flag = match ident.to_string().as_str() {
            "managed" => &mut self.managed,
            "eq" => &mut self.eq,
            other => {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("unknown destruct option `{}`, expected one of: {}", other, KEYWORDS.join(", ")),
                ));
            }
        };
        if *flag {
            return Err(syn::Error::new(ident.span(), format!("duplicate destruct option `{}`", ident)));
        }
        *flag = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_no_attrs() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[derive(Clone)])];
        assert_eq!(DestructOptions::from_attrs(&attrs).unwrap(), DestructOptions::default());
    }

    #[test]
    fn test_both_flags() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[destruct(managed, eq)])];
        let options = DestructOptions::from_attrs(&attrs).unwrap();
        assert!(options.managed);
        assert!(options.eq);
    }

    #[test]
    fn test_split_attrs() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[destruct(eq)]), parse_quote!(#[destruct(managed)])];
        let options = DestructOptions::from_attrs(&attrs).unwrap();
        assert!(options.managed && options.eq);
    }

    #[test]
    fn test_unknown_option() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[destruct(trivial)])];
        let err = DestructOptions::from_attrs(&attrs).unwrap_err();
        assert!(err.to_string().contains("unknown destruct option `trivial`"));
    }

    #[test]
    fn test_duplicate_option() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[destruct(eq, eq)])];
        assert!(DestructOptions::from_attrs(&attrs).is_err());
    }
}
