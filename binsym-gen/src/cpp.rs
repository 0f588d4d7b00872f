use std::fmt::{self, Display, Formatter};

use crate::table::AssetTable;

/// Global identifier of the generated table, looked up by the runtime as an extern.
pub const TABLE_IDENT: &str = "_binary_assets_symbols";

const INCLUDES: &[&str] = &["unordered_map", "string", "tuple"];
const TABLE_TYPE: &str = "std::unordered_map<std::string, std::tuple<const char*, const char*>>";

/// Renders the C++ translation unit declaring the asset symbols and the lookup table.
pub fn render_cpp(table: &AssetTable) -> String {
    CppSource(table).to_string()
}

struct CppSource<'a>(&'a AssetTable);

impl Display for CppSource<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for header in INCLUDES {
            writeln!(f, "#include <{header}>")?;
        }

        writeln!(f)?;
        writeln!(f, "extern \"C\" {{")?;

        for entry in self.0.entries() {
            writeln!(f, "\textern const char {}[];", entry.start_symbol())?;
            writeln!(f, "\textern const char {}[];", entry.end_symbol())?;
        }

        writeln!(f, "}}")?;
        writeln!(f)?;
        writeln!(f, "{TABLE_TYPE} {TABLE_IDENT} = {{")?;

        for entry in self.0.entries() {
            writeln!(
                f,
                "\t{{\"{}\", {{(const char*) &{}, (const char*) &{}}}}},",
                StringLiteral(&entry.name),
                entry.start_symbol(),
                entry.end_symbol()
            )?;
        }

        writeln!(f, "}};")
    }
}

/// Body of a C++ string literal. Printable characters are kept as is.
struct StringLiteral<'a>(&'a str);

impl Display for StringLiteral<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                // Three digit octal escapes cannot swallow a following digit.
                c if c.is_ascii_control() => write!(f, "\\{:03o}", c as u32)?,
                c => write!(f, "{c}")?,
            }
        }

        Ok(())
    }
}
