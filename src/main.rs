use anyhow::{Context, bail};
use clap::Parser;
use docsearch::cli::{Cli, Commands};
use docsearch::error::Result;
use docsearch::{Config, IndexLoader, Rendered, SearchInput, SearchSession};
use std::process::ExitCode;
use std::sync::Arc;

fn print_rendered(rendered: &Rendered) {
    if rendered.is_no_results() {
        println!("No results for '{}'", rendered.query);
        return;
    }

    println!(
        "Results for '{}' ({} of {}):",
        rendered.query,
        rendered.suggestions.len(),
        rendered.total_matches
    );
    for (idx, suggestion) in rendered.suggestions.iter().enumerate() {
        println!("{:>3}. {}", idx + 1, suggestion);
        println!("     {}", suggestion.target);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(index) = &cli.index {
        config.index_path = docsearch::config::expand_tilde(index).into_owned();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    docsearch::tracing::init(cli.verbose);

    let mut config = load_config(&cli)?;
    match &cli.command {
        Commands::Search {
            limit, base_href, ..
        } => {
            if let Some(limit) = limit {
                config.display_limit = *limit;
            }
            if base_href.is_some() {
                config.base_href.clone_from(base_href);
            }
        }
        Commands::Navigate { base_href, .. } => {
            if base_href.is_some() {
                config.base_href.clone_from(base_href);
            }
        }
    }
    config.validate().context("Invalid configuration")?;

    let loader = IndexLoader::new(&config.index_path);
    let index = match SearchInput::acquire(&loader).await {
        SearchInput::Ready(index) => index,
        input => {
            eprintln!("{}: {}", input.placeholder(), loader.path().display());
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut session = SearchSession::new(index, Arc::new(config));
    match cli.command {
        Commands::Search { queries, .. } => {
            for query in &queries {
                match session.update(query) {
                    Some(rendered) => print_rendered(rendered),
                    None => bail!("Results for '{}' were superseded", query),
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Navigate { query, .. } => match session.direct_navigation(&query) {
            Some(navigation) => {
                println!("{}", navigation.target);
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("No symbol matches '{}'", query);
                Ok(ExitCode::from(2))
            }
        },
    }
}
