//! Generates the source of a lookup table for binary assets embedded by the linker.
//!
//! When a file such as `shaders/a.spv` is turned into an object file with `ld -r -b binary`, the
//! linker exposes its bytes between the `_binary_shaders_a_spv_start` and
//! `_binary_shaders_a_spv_end` symbols. This crate derives those symbol names from asset names and
//! renders a C++ translation unit declaring them, together with a table mapping every asset name
//! to its `(start, end)` pointer pair.

use std::path::Path;

mod cpp;
mod generator;
mod symbol;
mod table;

/// Defines the errors that can be returned.
pub mod error {
    use std::path::PathBuf;

    pub type Result<T, E = Error> = ::core::result::Result<T, E>;

    #[derive(Debug, thiserror::Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("not enough arguments")]
        Usage,

        #[error("symbol prefix `{0}` is not a C identifier")]
        InvalidPrefix(String),

        #[error("assets `{first}` and `{second}` both map to symbol `{symbol}`")]
        DuplicateSymbol {
            symbol: String,
            first: String,
            second: String,
        },

        #[error("cannot write `{}`", path.display())]
        Io {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
    }
}

/// Re-exports.
pub use cpp::{render_cpp, TABLE_IDENT};
pub use error::{Error, Result};
pub use generator::{Generator, OutputTarget, Plan, DEFAULT_OUTPUT};
pub use symbol::{
    is_valid_prefix, sanitize, symbol_name, DEFAULT_PREFIX, END_SUFFIX, START_SUFFIX,
};
pub use table::{AssetEntry, AssetTable};

/// Usage line printed when the explicit output path variant lacks arguments.
pub const USAGE: &str = "Usage: binsym-gen <output_cpp> <file1> [file2 ...]";

/// Generates `path` from `names` with the default prefix, e.g. from a build script.
pub fn generate<I, S>(path: impl AsRef<Path>, names: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Generator::default().emit(path.as_ref(), &AssetTable::from_names(names))
}
