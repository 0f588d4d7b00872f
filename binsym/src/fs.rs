use std::borrow::Cow;
use std::io::{self, ErrorKind};
use std::path::Path;

use crate::Table;

/// Directory searched by [`Table::load`] before the embedded assets.
pub const ASSET_DIR: &str = "assets";

impl Table {
    /// Reads `name` from [`ASSET_DIR`], falling back to the embedded bytes.
    pub fn load(&self, name: &str) -> io::Result<Cow<'static, [u8]>> {
        self.load_from(ASSET_DIR, name)
    }

    /// Reads `dir/name` when it exists, so that files on disk override the embedded assets.
    ///
    /// Fails with [`ErrorKind::NotFound`] when the asset is neither on disk nor embedded.
    pub fn load_from(&self, dir: impl AsRef<Path>, name: &str) -> io::Result<Cow<'static, [u8]>> {
        let path = dir.as_ref().join(name);

        if path.is_file() {
            return std::fs::read(&path).map(Cow::Owned);
        }

        self.get(name).map(Cow::Borrowed).ok_or_else(|| {
            io::Error::new(ErrorKind::NotFound, format!("asset `{name}` not found"))
        })
    }
}
