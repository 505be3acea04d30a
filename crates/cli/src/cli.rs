use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "annuaire")]
#[command(about = "Query the annuaire directory from the terminal")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (defaults to the user config directory)
	#[arg(short, long, value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Bearer token to send with API requests
	#[arg(long, value_name = "TOKEN", global = true)]
	pub token: Option<String>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// Autocomplete cities; every stdin line is the next state of the query
	City {
		/// Restrict to a postal code
		#[arg(long)]
		postal_code: Option<String>,
		/// Restrict to a region
		#[arg(long)]
		region: Option<String>,
		/// Restrict to a department
		#[arg(long)]
		department: Option<String>,
	},
	/// Autocomplete sub-categories; every stdin line is the next state of the query
	Subcategory {
		/// Restrict to a parent category id
		#[arg(long)]
		category: Option<u64>,
	},
	/// Search professionals, sponsored listings first
	Search {
		/// Category slug
		#[arg(long)]
		category: Option<String>,
		/// Sub-category slug
		#[arg(long)]
		subcategory: Option<String>,
		/// City slug
		#[arg(long)]
		city: Option<String>,
		/// Result page, starting at 1
		#[arg(long)]
		page: Option<u32>,
		/// Maximum entries to show (overrides the config file)
		#[arg(long)]
		cap: Option<usize>,
	},
}
