//! CLI runner - executes commands

use crate::cli::browse::browse;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::{serve, shared_service};
use crate::client::{Action, HttpStuffApi, ListController, StuffApi};
use crate::config::AppConfig;
use crate::database::{RecordStore, StuffDatabase};
use crate::error::{Error, Result, ResultExt};
use crate::pagination::PageNumber;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Serve {
                host,
                port,
                database,
                seed,
            } => {
                let mut config = config;
                if let Some(host) = host {
                    config.server.host.clone_from(host);
                }
                if let Some(port) = port {
                    config.server.port = *port;
                }
                if database.is_some() {
                    config.database.path.clone_from(database);
                }
                if let Some(seed) = seed {
                    config.database.seed = *seed;
                }
                self.serve(&config).await
            }
            Commands::Seed { database, count } => {
                let path = database.clone().or(config.database.path);
                self.seed(path, *count)
            }
            Commands::Fetch { url, page, format } => {
                let api = Self::api(&config, url.as_deref())?;
                self.fetch(&api, *page, *format).await
            }
            Commands::Browse { url, page } => {
                let api = Self::api(&config, url.as_deref())?;
                self.browse(api, *page).await
            }
        }
    }

    /// Load the YAML config, or defaults when no file was given
    fn load_config(&self) -> Result<AppConfig> {
        let config = AppConfig::load(self.cli.config.as_deref())?;
        if self.cli.verbose {
            tracing::debug!("Using config: {:?}", config);
        }
        Ok(config)
    }

    /// Build the HTTP API client, preferring the URL given on the command line
    fn api(config: &AppConfig, url: Option<&str>) -> Result<HttpStuffApi> {
        let base_url = url.unwrap_or(&config.client.base_url);
        HttpStuffApi::new(base_url, config.client.timeout())
    }

    async fn serve(&self, config: &AppConfig) -> Result<()> {
        let db = StuffDatabase::open_or_in_memory(config.database.path.as_deref())
            .context("Failed to open database")?;

        if config.database.seed > 0 && db.count()? == 0 {
            db.seed_demo(config.database.seed)?;
        }
        tracing::info!(
            "Serving {} stuff items from {}",
            db.count()?,
            db.location()
        );

        let store: Arc<dyn RecordStore> = Arc::new(db);
        serve(&config.server, shared_service(store)).await
    }

    fn seed(&self, path: Option<PathBuf>, count: usize) -> Result<()> {
        let path = path.ok_or_else(|| {
            Error::config("Database file not specified (use --database or the config file)")
        })?;
        let db = StuffDatabase::open(&path)
            .with_context(|| format!("Failed to open database {}", path.display()))?;

        let inserted = db.seed_demo(count)?;
        println!(
            "Inserted {} stuff items into {} ({} total)",
            inserted.len(),
            db.location(),
            db.count()?
        );
        Ok(())
    }

    async fn fetch(&self, api: &HttpStuffApi, page: i64, format: OutputFormat) -> Result<()> {
        let page = PageNumber::new(page)?;
        let items = api.fetch_page(page).await?;

        let rendered = match format {
            OutputFormat::Json => serde_json::to_string(&items)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(&items)?,
        };
        println!("{rendered}");
        Ok(())
    }

    async fn browse(&self, api: HttpStuffApi, page: i64) -> Result<()> {
        let start = PageNumber::new(page)?;
        let mut controller = ListController::new(api);
        controller.dispatch(Action::PageChanged(start));

        let input = BufReader::new(tokio::io::stdin());
        let mut output = std::io::stdout();
        browse(&mut controller, input, &mut output).await
    }
}
