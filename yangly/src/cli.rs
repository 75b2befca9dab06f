//! Command line driver.
//!
//! Scans a directory for resolved module documents, keeps the newest
//! revision of each module, and writes one `<module>.ts` file per module
//! into the output directory.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Component, Path, PathBuf};
use yangly_codegen::{DeclarationStyle, GenerateOptions, generate_module};
use yangly_schema::{Module, ModuleSet, check_module, load_module, validate_module};

use crate::scanner::scan_dir;

/// Generate TypeScript interfaces from resolved YANG modules.
#[derive(Debug, Clone, Parser)]
#[command(name = "yangly", version, about)]
pub struct Cli {
    /// Directory to scan for module documents, relative to the working directory.
    #[arg(short, long, default_value = "yangs")]
    pub path: PathBuf,

    /// Directory to write generated files into.
    #[arg(short, long, default_value = "dist")]
    pub out: PathBuf,

    /// Extension of the module documents to load.
    #[arg(short, long, default_value = "xml")]
    pub extension: String,

    /// Stop at the first error.
    #[arg(short, long)]
    pub bail: bool,

    /// Use `any` instead of `unknown` for unrepresentable types.
    #[arg(long)]
    pub permissive: bool,

    /// Declaration syntax for the generated type.
    #[arg(long, value_enum, default_value_t = CliStyle::Interface)]
    pub style: CliStyle,

    /// Omit the module header comment.
    #[arg(long)]
    pub no_header: bool,
}

/// Declaration style accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliStyle {
    /// `export interface Name { ... }`
    Interface,
    /// `export type Name = { ... };`
    Alias,
}

impl From<CliStyle> for DeclarationStyle {
    fn from(style: CliStyle) -> Self {
        match style {
            CliStyle::Interface => DeclarationStyle::Interface,
            CliStyle::Alias => DeclarationStyle::TypeAlias,
        }
    }
}

impl Cli {
    /// Builds generation options from the flags.
    #[must_use]
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions::default()
            .with_strict(!self.permissive)
            .with_style(self.style.into())
            .with_header(!self.no_header)
    }
}

/// Outcome of a driver run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files written, in module name order.
    pub written: Vec<PathBuf>,
    /// Modules skipped because they produced no fields.
    pub skipped: usize,
    /// Errors reported and survived.
    pub errors: usize,
}

impl RunSummary {
    /// Returns true if no errors were reported.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }
}

/// Counts errors, or turns the first one fatal when bailing.
struct ErrorReporter {
    bail: bool,
    count: usize,
}

impl ErrorReporter {
    fn new(bail: bool) -> Self {
        Self { bail, count: 0 }
    }

    fn report(&mut self, err: anyhow::Error) -> anyhow::Result<()> {
        self.count += 1;
        if self.bail {
            return Err(err);
        }
        tracing::error!("{:#}", err);
        Ok(())
    }
}

/// Runs the driver.
///
/// A missing or empty input directory is not an error: the run logs it and
/// returns an empty summary. Per-module failures are counted in
/// [`RunSummary::errors`] unless `--bail` is set.
///
/// # Errors
/// Returns an error if the output directory cannot be created, or on the
/// first module failure when bailing.
pub fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let root = resolve(&cli.path)?;
    tracing::info!("Scanning directory: {}", root.display());

    let files = match scan_dir(&root, &cli.extension) {
        Ok(files) => files,
        Err(err) => {
            tracing::info!("Failed to read directory {}: {}", root.display(), err);
            return Ok(RunSummary::default());
        }
    };
    if files.is_empty() {
        tracing::info!("No .{} files found in {}", cli.extension, root.display());
        return Ok(RunSummary::default());
    }

    let mut reporter = ErrorReporter::new(cli.bail);
    let modules = load_modules(&files, &mut reporter)?;

    let out = resolve(&cli.out)?;
    fs::create_dir_all(&out)
        .with_context(|| format!("failed to create output directory {}", out.display()))?;

    let options = cli.options();
    let mut summary = RunSummary::default();

    for module in modules.iter() {
        if module.is_submodule() {
            tracing::debug!("Skipping submodule {}", module.name);
            continue;
        }

        match write_module(module, &out, &options) {
            Ok(Some(path)) => {
                tracing::info!("Wrote {}", path.display());
                summary.written.push(path);
            }
            Ok(None) => {
                tracing::debug!("No schemas found in module {}, skipping", module.name);
                summary.skipped += 1;
            }
            Err(err) => reporter.report(err)?,
        }
    }

    summary.errors = reporter.count;
    tracing::info!("Completed with {} errors.", summary.errors);
    Ok(summary)
}

fn resolve(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    Ok(cwd.join(path))
}

fn load_modules(files: &[PathBuf], reporter: &mut ErrorReporter) -> anyhow::Result<ModuleSet> {
    let mut modules = ModuleSet::new();

    for file in files {
        tracing::debug!("Loading {}", file.display());
        let module = match load_module(file)
            .with_context(|| format!("failed to load {}", file.display()))
        {
            Ok(module) => module,
            Err(err) => {
                reporter.report(err)?;
                continue;
            }
        };

        let name = module.name.clone();
        if !modules.add(module) {
            tracing::debug!(
                "Ignoring {}: module {} already loaded at a newer revision",
                file.display(),
                name
            );
        }
    }

    Ok(modules)
}

fn write_module(
    module: &Module,
    out: &Path,
    options: &GenerateOptions,
) -> anyhow::Result<Option<PathBuf>> {
    validate_module(module).with_context(|| format!("invalid module {}", module.name))?;
    for finding in check_module(module) {
        tracing::warn!("Module {}: {}", module.name, finding);
    }

    let file_name = output_file_name(&module.name)?;
    let Some(source) = generate_module(module, options)
        .with_context(|| format!("failed to generate module {}", module.name))?
    else {
        return Ok(None);
    };

    let path = out.join(file_name);
    fs::write(&path, source).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(Some(path))
}

/// Returns `<name>.ts`, refusing names that would leave the output directory.
fn output_file_name(name: &str) -> anyhow::Result<String> {
    let file_name = format!("{}.ts", name);
    let mut components = Path::new(&file_name).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if !single || name.is_empty() || name.contains(['/', '\\']) {
        anyhow::bail!("module name '{}' is not a valid file name", name);
    }
    Ok(file_name)
}
