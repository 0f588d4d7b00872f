/// Prefix prepended by `ld -r -b binary` to the symbols of an embedded file.
pub const DEFAULT_PREFIX: &str = "_binary_";

/// Suffix of the symbol marking the first byte of an asset.
pub const START_SUFFIX: &str = "_start";

/// Suffix of the symbol marking one past the last byte of an asset.
pub const END_SUFFIX: &str = "_end";

/// Replaces every character outside `[A-Za-z0-9]` with `_`.
///
/// The mapping is applied per `char`, so a multi-byte character still yields a single `_`.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Derives the linker symbol base name of an asset, without the start/end suffix.
pub fn symbol_name(prefix: &str, name: &str) -> String {
    let mut symbol = String::with_capacity(prefix.len() + name.len());
    symbol.push_str(prefix);
    symbol.push_str(&sanitize(name));
    symbol
}

/// Whether `prefix` keeps every derived symbol a valid C identifier.
///
/// Only `[A-Za-z0-9_]` is allowed and the prefix must not start with a digit. An empty prefix is
/// accepted, leaving the asset names responsible for the first character.
pub fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.starts_with(|c: char| c.is_ascii_digit())
        && prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
