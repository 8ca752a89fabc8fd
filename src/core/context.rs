use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        i18n::{Catalog, TranslationResolver, detect_locale},
        parsers::json::{MessageScanWarning, scan_message_files},
    },
};

/// Where the catalog of a context came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    Directory(PathBuf),
}

/// Everything a command needs: merged configuration and the loaded catalog.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--locale fr`, `--messages-root ./locales`)
/// 2. `.voyagerrc.json` config file
/// 3. Built-in defaults
///
/// The catalog is loaded once and shared behind an `Arc`; every resolver
/// handed out by [`AppContext::resolver`] reads the same catalog.
pub struct AppContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Config file that was loaded, if any.
    pub config_path: Option<PathBuf>,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    pub catalog: Arc<Catalog>,

    pub catalog_source: CatalogSource,

    /// Message files that could not be parsed and were skipped.
    pub catalog_warnings: Vec<MessageScanWarning>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,
}

impl AppContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let root_dir = args
            .path
            .canonicalize()
            .with_context(|| format!("Project directory {:?} does not exist", args.path))?;
        let loaded = load_config(&root_dir)?;

        let messages_root = match &args.messages_root {
            Some(dir) => Some(dir.clone()),
            None => loaded.config.messages_root.as_ref().map(|dir| {
                let base = loaded
                    .path
                    .as_deref()
                    .and_then(Path::parent)
                    .unwrap_or(root_dir.as_path());
                base.join(dir)
            }),
        };

        let mut ctx = Self::from_config(loaded.config, root_dir, messages_root.as_deref())?;
        ctx.config_path = loaded.path;
        ctx.verbose = args.verbose;
        Ok(ctx)
    }

    /// Build a context from an already merged config.
    ///
    /// Loads the catalog from `messages_root` when given, otherwise uses the
    /// built-in catalog.
    pub fn from_config(
        config: Config,
        root_dir: PathBuf,
        messages_root: Option<&Path>,
    ) -> Result<Self> {
        let (catalog, catalog_source, catalog_warnings) = match messages_root {
            Some(dir) => {
                let scanned = scan_message_files(dir)?;
                (
                    scanned.catalog,
                    CatalogSource::Directory(dir.to_path_buf()),
                    scanned.warnings,
                )
            }
            None => (Catalog::builtin()?, CatalogSource::Builtin, Vec::new()),
        };

        Ok(Self {
            config,
            config_path: None,
            root_dir,
            catalog: Arc::new(catalog),
            catalog_source,
            catalog_warnings,
            verbose: false,
        })
    }

    /// A resolver starting at the detected locale.
    ///
    /// `preferred` plays the role of a saved preference: it wins when the
    /// catalog knows it. Otherwise the language of `system` (a POSIX locale
    /// such as `es_ES.UTF-8`) is tried, then the configured default locale.
    pub fn resolver(&self, preferred: Option<&str>, system: Option<&str>) -> TranslationResolver {
        let locale = detect_locale(preferred, system, &self.catalog, &self.config.default_locale);
        TranslationResolver::new(
            Arc::clone(&self.catalog),
            locale,
            self.config.fallback_locale.clone(),
        )
    }
}
