//! Annuaire command-line front end.
//!
//! `city` and `subcategory` run a typeahead session fed by stdin, one query
//! state per line; `search` prints one page of professionals.

mod cli;
mod config;
mod logging;
mod render;
mod run;

use std::time::Duration;

use annuaire_api::{ApiClient, CityFilters, CityLookup, SearchQuery, Session, SubCategoryFilters, SubCategoryLookup};
use annuaire_typeahead::TypeaheadController;
use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use tokio::io::{BufReader, Stdin, stdout};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	logging::setup_tracing(cli.verbose);

	let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
	info!(base_url = %config.api.base_url, "starting annuaire");

	let session = cli.token.map(Session::with_token).unwrap_or_default();
	let client = ApiClient::new(config.api.clone(), session)?;

	// Enough for the final debounce plus one full request.
	let settle = config.typeahead.debounce + config.api.timeout() + Duration::from_secs(1);

	match cli.command {
		Command::City {
			postal_code,
			region,
			department,
		} => {
			let filters = CityFilters {
				code_postal: postal_code,
				region,
				departement: department,
			};
			let controller = TypeaheadController::new(CityLookup::new(client), config.typeahead.clone());
			run::typeahead(controller, filters, stdin(), stdout(), settle, render::city).await
		}
		Command::Subcategory { category } => {
			let filters = SubCategoryFilters { categorie: category };
			let controller = TypeaheadController::new(SubCategoryLookup::new(client), config.typeahead.clone());
			run::typeahead(controller, filters, stdin(), stdout(), settle, render::sub_category).await
		}
		Command::Search {
			category,
			subcategory,
			city,
			page,
			cap,
		} => {
			let query = SearchQuery {
				categorie: category,
				sous_categorie: subcategory,
				ville: city,
				page,
			};
			let page = client
				.search_page(&query, cap.unwrap_or(config.search.cap))
				.await
				.context("search failed")?;
			print!("{}", render::search_page(&page));
			Ok(())
		}
	}
}

fn stdin() -> BufReader<Stdin> {
	BufReader::new(tokio::io::stdin())
}
