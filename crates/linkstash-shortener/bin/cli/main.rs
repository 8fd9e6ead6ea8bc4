mod cli;

use crate::cli::{open_store, Command, CLI, DEFAULT_LOG_FILTER};
use anyhow::{bail, Context};
use clap::Parser;
use linkstash_redirector::{Outcome, RedirectorService, Visit};
use linkstash_shortener::{ReadMappings, Shortener, ShortenerError, StoreSettings};
use linkstash_storage::JsonFileSnapshot;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    init_tracing(config.log_json);

    info!(
        data_dir = %config.data_dir.display(),
        base_url = %config.base_url,
        generator = %config.generator,
        "starting linkstash"
    );

    let backend = JsonFileSnapshot::new(&config.data_dir);
    let settings = StoreSettings::builder()
        .base_url(config.base_url.clone())
        .max_attempts(config.max_attempts)
        .build();

    let store = Arc::new(
        open_store(backend, config.generator, settings)
            .await
            .with_context(|| format!("failed to open store in {}", config.data_dir.display()))?,
    );

    match config.command {
        Command::Create { url } => match store.create(&url).await {
            Ok(mapping) => println!("{}", mapping.short_url()),
            Err(ShortenerError::InvalidUrl(reason)) => {
                bail!("Please enter a valid URL ({})", reason)
            }
            Err(err) => return Err(err).context("failed to shorten URL"),
        },
        Command::List => {
            for mapping in store.list().await? {
                println!("{}\t{}", mapping.short_url(), mapping.long_url());
            }
        }
        Command::Resolve { slug } => {
            let redirector = RedirectorService::new(Arc::clone(&store));
            match redirector.resolve(&slug).await? {
                Outcome::Redirect(url) => println!("{}", url),
                Outcome::NotFound => return Err(ShortenerError::NotFound(slug).into()),
            }
        }
        Command::Visit { path } => {
            let redirector = RedirectorService::new(Arc::clone(&store));
            match redirector.visit(&path).await? {
                Some(Visit::Redirecting { url }) => println!("{}", url),
                Some(Visit::NotFound { slug }) => {
                    return Err(ShortenerError::NotFound(slug).into())
                }
                Some(Visit::Resolving { slug }) => {
                    bail!("visit to {} did not finish resolving", slug)
                }
                None => return Err(ShortenerError::NotFound(path).into()),
            }
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
