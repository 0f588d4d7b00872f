#![cfg_attr(not(feature = "std"), no_std)]

use core::fmt::{self, Debug};
use core::slice;

#[cfg(feature = "std")]
mod fs;

#[cfg(feature = "std")]
pub use fs::ASSET_DIR;

/// Defines the errors that can be returned.
pub mod error {
    pub type Result<T, E = Error> = ::core::result::Result<T, E>;

    #[derive(Debug, PartialEq, Eq, thiserror::Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("asset not found")]
        NotFound,
    }
}

/// Re-exports.
pub use error::{Error, Result};

/// Re-exports macros.
pub use binsym_macros::*;

/// An asset embedded by the linker, delimited by its start and end symbols.
#[derive(Clone, Copy)]
pub struct Entry {
    name: &'static str,
    start: *const u8,
    end: *const u8,
}

impl Entry {
    /// Create an entry for the bytes in `start..end`.
    ///
    /// # Safety
    ///
    /// The whole range must be readable for the lifetime of the program and must not be mutated.
    /// This holds for the `_start`/`_end` symbol pair of an object produced with `ld -r -b binary`.
    pub const unsafe fn new(name: &'static str, start: *const u8, end: *const u8) -> Self {
        Entry { name, start, end }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of bytes between the start and end symbols.
    pub fn len(&self) -> usize {
        (self.end as usize).saturating_sub(self.start as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The embedded bytes.
    pub fn bytes(&self) -> &'static [u8] {
        let len = self.len();
        if len == 0 {
            return &[];
        }

        // SAFETY: The range is valid for reads for the whole program, as required by `new`.
        unsafe { slice::from_raw_parts(self.start, len) }
    }
}

impl Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("len", &self.len())
            .finish()
    }
}

// The pointed bytes are immutable and live as long as the program.
unsafe impl Sync for Entry {}

/// Lookup table from asset name to embedded bytes, usually declared with [`assets`].
///
/// Entries keep their declaration order. When two entries share a name, the first one wins.
#[derive(Debug, Clone, Copy)]
pub struct Table {
    entries: &'static [Entry],
}

impl Table {
    pub const fn new(entries: &'static [Entry]) -> Self {
        Table { entries }
    }

    pub fn entry(&self, name: &str) -> Option<&'static Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&'static [u8]> {
        self.entry(name).map(Entry::bytes)
    }

    /// Same as [`Table::get`], but fails with [`Error::NotFound`] for an unknown asset.
    pub fn get_or_err(&self, name: &str) -> Result<&'static [u8]> {
        self.get(name).ok_or(Error::NotFound)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    pub fn iter(&self) -> slice::Iter<'static, Entry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(Entry::name)
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for &Table {
    type Item = &'static Entry;
    type IntoIter = slice::Iter<'static, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
