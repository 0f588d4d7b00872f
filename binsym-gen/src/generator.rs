use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::cpp::render_cpp;
use crate::error::{Error, Result};
use crate::symbol::{is_valid_prefix, DEFAULT_PREFIX};
use crate::table::AssetTable;

/// Output file used when the path is not given on the command line.
pub const DEFAULT_OUTPUT: &str = "resources.cpp";

/// Where the generated source goes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// The first argument is the output path and at least one asset must follow.
    #[default]
    Explicit,

    /// The output is always [`DEFAULT_OUTPUT`] and every argument is an asset, possibly none.
    Default,
}

/// The output path and assets resolved from the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub output: PathBuf,
    pub table: AssetTable,
}

#[derive(Debug, Clone)]
pub struct Generator {
    target: OutputTarget,
    prefix: String,
    unique: bool,
}

impl Generator {
    pub fn new(target: OutputTarget) -> Self {
        Generator {
            target,
            prefix: DEFAULT_PREFIX.to_owned(),
            unique: false,
        }
    }

    /// Overrides the symbol prefix, which must match the one used when embedding the assets.
    ///
    /// An invalid prefix is reported by [`Generator::plan`] and [`Generator::emit`].
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Rejects assets whose symbols collide instead of leaving it to the linker.
    pub fn with_unique_symbols(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn target(&self) -> OutputTarget {
        self.target
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Splits the command line arguments, program name excluded, into output path and assets.
    pub fn plan<I, S>(&self, args: I) -> Result<Plan>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.check_prefix()?;

        let mut args = args.into_iter().map(Into::into);

        let output = match self.target {
            OutputTarget::Explicit => args.next().map(PathBuf::from),
            OutputTarget::Default => Some(PathBuf::from(DEFAULT_OUTPUT)),
        };

        let names: Vec<String> = args.collect();

        let output = match output {
            Some(path) if self.target == OutputTarget::Default || !names.is_empty() => path,
            _ => return Err(Error::Usage),
        };

        Ok(Plan {
            output,
            table: AssetTable::new(&self.prefix, names),
        })
    }

    /// Renders `table` into `path`, replacing any existing file.
    pub fn emit(&self, path: &Path, table: &AssetTable) -> Result<()> {
        self.check_prefix()?;

        if self.unique {
            table.check_unique()?;
        }

        for entry in table.entries() {
            debug!("asset `{}` uses symbol `{}`", entry.name, entry.symbol);
        }

        write_output(path, &render_cpp(table))?;
        info!("wrote {} asset(s) to {}", table.len(), path.display());

        Ok(())
    }

    /// Plans then emits, returning the path of the generated file.
    pub fn run<I, S>(&self, args: I) -> Result<PathBuf>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let plan = self.plan(args)?;
        self.emit(&plan.output, &plan.table)?;
        Ok(plan.output)
    }

    fn check_prefix(&self) -> Result<()> {
        if !is_valid_prefix(&self.prefix) {
            return Err(Error::InvalidPrefix(self.prefix.clone()));
        }

        Ok(())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(OutputTarget::default())
    }
}

fn write_output(path: &Path, code: &str) -> Result<()> {
    let io = |source| Error::Io {
        path: path.to_owned(),
        source,
    };

    let mut file = File::create(path).map_err(io)?;
    file.write_all(code.as_bytes()).map_err(io)?;
    file.flush().map_err(io)
}
