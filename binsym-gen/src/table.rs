use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::symbol::{symbol_name, DEFAULT_PREFIX, END_SUFFIX, START_SUFFIX};

/// An asset name along with the base name of its linker symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub name: String,
    pub symbol: String,
}

impl AssetEntry {
    pub fn new(prefix: &str, name: impl Into<String>) -> Self {
        let name = name.into();
        let symbol = symbol_name(prefix, &name);
        AssetEntry { name, symbol }
    }

    /// Name of the symbol marking the first byte of the asset.
    pub fn start_symbol(&self) -> String {
        format!("{}{START_SUFFIX}", self.symbol)
    }

    /// Name of the symbol marking one past the last byte of the asset.
    pub fn end_symbol(&self) -> String {
        format!("{}{END_SUFFIX}", self.symbol)
    }
}

/// The ordered list of assets to declare. Input order is kept and duplicates are not removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetTable {
    entries: Vec<AssetEntry>,
}

impl AssetTable {
    pub fn new<I, S>(prefix: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .map(|name| AssetEntry::new(prefix, name))
            .collect();

        AssetTable { entries }
    }

    /// Builds the table using the `ld` symbol prefix.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(DEFAULT_PREFIX, names)
    }

    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fails on the first pair of assets whose names sanitize to the same symbol.
    ///
    /// The linker would otherwise reject the embedded objects with a duplicate symbol error, far
    /// from the asset list that caused it.
    pub fn check_unique(&self) -> Result<()> {
        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(self.entries.len());

        for entry in &self.entries {
            if let Some(first) = seen.insert(entry.symbol.as_str(), entry.name.as_str()) {
                return Err(Error::DuplicateSymbol {
                    symbol: entry.symbol.clone(),
                    first: first.to_owned(),
                    second: entry.name.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn it_should_keep_input_order() {
        let table = AssetTable::from_names(["b.bin", "a.bin"]);

        let names: Vec<_> = table.entries().iter().map(|e| e.name.as_str()).collect();
        assert_that!(names, eq(&vec!["b.bin", "a.bin"]));
    }

    #[test]
    fn it_should_not_deduplicate() {
        let table = AssetTable::from_names(["a.bin", "a.bin", "a_bin"]);
        assert_that!(table.len(), eq(3));
    }

    #[test]
    fn it_should_derive_start_and_end_symbols() {
        let entry = AssetEntry::new(DEFAULT_PREFIX, "fonts/mono.ttf");

        assert_that!(entry.symbol, eq("_binary_fonts_mono_ttf"));
        assert_that!(entry.start_symbol(), eq("_binary_fonts_mono_ttf_start"));
        assert_that!(entry.end_symbol(), eq("_binary_fonts_mono_ttf_end"));
    }

    #[test]
    fn it_should_accept_empty_table() {
        let table = AssetTable::from_names(Vec::<String>::new());

        assert_that!(table.is_empty(), eq(true));
        assert_that!(table.check_unique().is_ok(), eq(true));
    }

    #[test]
    fn it_should_accept_distinct_symbols() {
        let table = AssetTable::from_names(["a.bin", "b.bin"]);
        assert_that!(table.check_unique().is_ok(), eq(true));
    }

    #[test]
    fn it_should_report_colliding_symbols() {
        let table = AssetTable::from_names(["a.bin", "c.bin", "a_bin"]);

        match table.check_unique() {
            Err(Error::DuplicateSymbol {
                symbol,
                first,
                second,
            }) => {
                assert_that!(symbol, eq("_binary_a_bin"));
                assert_that!(first, eq("a.bin"));
                assert_that!(second, eq("a_bin"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
