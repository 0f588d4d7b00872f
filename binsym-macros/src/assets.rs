use binsym_gen::{is_valid_prefix, AssetTable, DEFAULT_PREFIX};
use darling::export::NestedMeta;
use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{ForeignItemStatic, StaticMutability};

use crate::helpers::{error, token_stream_with_error};

pub type Result<T, E = Error> = ::core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("assets table must not be mutable")]
    MutableTable,

    #[error("assets table name must be uppercase")]
    LowercaseTable,

    #[error(transparent)]
    Symbols(#[from] binsym_gen::Error),
}

#[derive(Debug, Default, FromMeta)]
struct Args {
    #[darling(multiple)]
    asset: Vec<String>,

    #[darling(default)]
    prefix: Option<String>,

    #[darling(default)]
    unique: bool,
}

pub fn run(args: TokenStream, item: TokenStream) -> TokenStream {
    let mut errors = TokenStream::new();

    let var: ForeignItemStatic = match syn::parse2(item.clone()) {
        Ok(x) => x,
        Err(e) => return token_stream_with_error(item, e),
    };

    if let Err(e) = validate_static(&var) {
        error(&mut errors, &item, e);
    }

    let args = match NestedMeta::parse_meta_list(args.clone()) {
        Ok(x) => x,
        Err(e) => return token_stream_with_error(args, e),
    };

    let args = match Args::from_list(&args) {
        Ok(x) => x,
        Err(e) => {
            errors.extend(e.write_errors());
            Args::default()
        }
    };

    let prefix = args.prefix.as_deref().unwrap_or(DEFAULT_PREFIX);
    if !is_valid_prefix(prefix) {
        error(
            &mut errors,
            &item,
            Error::from(binsym_gen::Error::InvalidPrefix(prefix.to_owned())),
        );
    }

    let table = AssetTable::new(prefix, args.asset);

    if args.unique {
        if let Err(e) = table.check_unique() {
            error(&mut errors, &item, Error::from(e));
        }
    }

    let entries = table_quote(&var, &table);

    quote! {
        #entries
        #errors
    }
}

fn validate_static(var: &ForeignItemStatic) -> Result<()> {
    if matches!(var.mutability, StaticMutability::Mut(_)) {
        return Err(Error::MutableTable);
    }

    if var.ident != var.ident.to_string().to_uppercase() {
        return Err(Error::LowercaseTable);
    }

    Ok(())
}

fn table_quote(var: &ForeignItemStatic, table: &AssetTable) -> TokenStream {
    let attrs = &var.attrs;
    let vis = &var.vis;
    let ident = &var.ident;
    let ty = &var.ty;

    let mod_ident = format_ident!("__binsym_assets_{}", ident.to_string().to_lowercase());
    let count = table.len();

    // The linker symbols may not be valid Rust identifiers, e.g. with an empty prefix and an asset
    // name starting with a digit, so they are bound to local names.
    let symbols: Vec<_> = table
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let start = format_ident!("START_{}", i);
            let end = format_ident!("END_{}", i);
            let start_name = entry.start_symbol();
            let end_name = entry.end_symbol();

            quote! {
                #[link_name = #start_name]
                static #start: u8;
                #[link_name = #end_name]
                static #end: u8;
            }
        })
        .collect();

    let entries: Vec<_> = table
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let start = format_ident!("START_{}", i);
            let end = format_ident!("END_{}", i);
            let name = &entry.name;

            quote! {
                unsafe { ::binsym::Entry::new(#name, &raw const #start, &raw const #end) }
            }
        })
        .collect();

    quote! {
        // The entries module with self-contained symbol declarations.
        #[doc(hidden)]
        mod #mod_ident {
            unsafe extern "C" {
                #(#symbols)*
            }

            pub(super) static ENTRIES: [::binsym::Entry; #count] = [#(#entries),*];
        }

        #(#attrs)*
        #vis static #ident: #ty = ::binsym::Table::new(&#mod_ident::ENTRIES);
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn it_should_declare_assets_table() -> googletest::Result<()> {
        let code = run(
            quote!(asset = "a.bin", asset = "b.bin"),
            quote! {
                pub static ASSETS: binsym::Table;
            },
        );

        assert_that!(code.is_empty(), eq(false));

        let result = code.to_string();
        verify_that!(result, not(contains_substring("error")))?;

        verify_that!(
            result,
            contains_substring(quote!(mod __binsym_assets_assets).to_string())
        )?;

        verify_that!(
            result,
            contains_substring(quote!(#[link_name = "_binary_a_bin_start"]).to_string())
        )?;

        verify_that!(
            result,
            contains_substring(quote!(#[link_name = "_binary_b_bin_end"]).to_string())
        )?;

        verify_that!(
            result,
            contains_substring(quote!(static ENTRIES: [::binsym::Entry; 2usize]).to_string())
        )?;

        verify_that!(
            result,
            contains_substring(
                quote!(pub static ASSETS: binsym::Table = ::binsym::Table::new(
                    &__binsym_assets_assets::ENTRIES
                ))
                .to_string()
            )
        )?;

        Ok(())
    }

    #[test]
    fn it_should_keep_asset_order() -> googletest::Result<()> {
        let result = run(
            quote!(asset = "z.bin", asset = "a.bin"),
            quote!(static ASSETS: binsym::Table;),
        )
        .to_string();

        let z = result.find("\"z.bin\"").expect("entry for z.bin");
        let a = result.find("\"a.bin\"").expect("entry for a.bin");
        verify_that!(z < a, eq(true))?;

        Ok(())
    }

    #[test]
    fn it_should_use_custom_prefix() -> googletest::Result<()> {
        let result = run(
            quote!(asset = "a.bin", prefix = "_res_"),
            quote!(static ASSETS: binsym::Table;),
        )
        .to_string();

        verify_that!(result, not(contains_substring("error")))?;
        verify_that!(
            result,
            contains_substring(quote!(#[link_name = "_res_a_bin_start"]).to_string())
        )?;

        Ok(())
    }

    #[test]
    fn it_should_reject_invalid_prefix() {
        let result = run(
            quote!(asset = "a.bin", prefix = "my-res"),
            quote!(static ASSETS: binsym::Table;),
        )
        .to_string();

        assert_that!(result, contains_substring("compile_error"));
        assert_that!(result, contains_substring("is not a C identifier"));
    }

    #[test]
    fn it_should_accept_no_asset() -> googletest::Result<()> {
        let result = run(quote!(), quote!(static ASSETS: binsym::Table;)).to_string();

        verify_that!(result, not(contains_substring("error")))?;
        verify_that!(
            result,
            contains_substring(quote!(static ENTRIES: [::binsym::Entry; 0usize] = []).to_string())
        )?;

        Ok(())
    }

    #[test]
    fn it_should_accept_colliding_symbols_by_default() {
        let result = run(
            quote!(asset = "a.bin", asset = "a_bin"),
            quote!(static ASSETS: binsym::Table;),
        )
        .to_string();

        assert_that!(result, not(contains_substring("compile_error")));
    }

    #[test]
    fn it_should_reject_colliding_symbols_when_unique() {
        let result = run(
            quote!(asset = "a.bin", asset = "a_bin", unique),
            quote!(static ASSETS: binsym::Table;),
        )
        .to_string();

        assert_that!(result, contains_substring("compile_error"));
        assert_that!(result, contains_substring("_binary_a_bin"));
    }

    #[test]
    fn it_should_reject_mutable_table() {
        let result = run(
            quote!(asset = "a.bin"),
            quote!(static mut ASSETS: binsym::Table;),
        )
        .to_string();

        assert_that!(result, contains_substring("must not be mutable"));
    }

    #[test]
    fn it_should_reject_lowercase_table() {
        let result = run(
            quote!(asset = "a.bin"),
            quote!(static assets: binsym::Table;),
        )
        .to_string();

        assert_that!(result, contains_substring("must be uppercase"));
    }

    #[test]
    fn it_should_reject_unknown_option() {
        let result = run(
            quote!(asset = "a.bin", path = "/assets"),
            quote!(static ASSETS: binsym::Table;),
        )
        .to_string();

        assert_that!(result, contains_substring("compile_error"));
    }
}
