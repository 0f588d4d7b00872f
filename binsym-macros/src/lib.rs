use proc_macro::TokenStream;

mod assets;
mod helpers;

/// Declares a `binsym::Table` over assets embedded by the linker.
///
/// ```ignore
/// #[binsym::assets(asset = "shaders/a.spv", asset = "fonts/mono.ttf")]
/// pub static ASSETS: binsym::Table;
/// ```
///
/// Options:
/// - `asset = "..."`: an asset name, repeated once per asset, in lookup order;
/// - `prefix = "..."`: the symbol prefix, `_binary_` by default;
/// - `unique`: reject assets whose names map to the same symbol.
#[proc_macro_attribute]
pub fn assets(args: TokenStream, item: TokenStream) -> TokenStream {
    assets::run(args.into(), item.into()).into()
}
