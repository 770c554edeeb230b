// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the pagesift command-line interface.
//!
//! A developer tool for the page data a site ships to the widget: `check`
//! validates and summarizes a pages file, `search` runs a query against it
//! the same way the browser would and prints matches, or the exact HTML the
//! widget would insert.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use pagesift::MatchPolicy;

#[derive(Parser)]
#[command(
    name = "pagesift",
    about = "Keyword search for static sites: check page data and preview results",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a page data file and summarize it
    Check {
        /// JSON array of {url, title, content, keywords?} records
        file: String,
    },

    /// Search a page data file and display results
    Search {
        /// JSON array of {url, title, content, keywords?} records
        file: String,

        /// Search query
        query: String,

        /// Matching policy (overrides the config file)
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,

        /// Maximum number of results to print (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print the results container HTML the widget would insert
        #[arg(long)]
        html: bool,

        /// Widget config JSON (ids, policy, snippet window)
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PolicyArg {
    /// Every whitespace-separated token must match somewhere
    AllKeywords,
    /// The whole query is one substring
    SingleTerm,
}

impl From<PolicyArg> for MatchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::AllKeywords => MatchPolicy::AllKeywords,
            PolicyArg::SingleTerm => MatchPolicy::SingleTerm,
        }
    }
}
