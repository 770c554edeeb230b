// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use pagesift::{
    load_pages_from_path, parse_query, snippet_for_query, HostSurface, MatchPolicy,
    MemorySurface, PageRecord, SearchWidget, WidgetConfig,
};
use std::collections::BTreeSet;
use std::fs;

mod cli;
use cli::display::{
    field, highlight_terminal, section, themed, BLUE, BOLD, DIM, GRAY, GREEN, RED,
};
use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Check { file } => run_check(&file),
        Commands::Search {
            file,
            query,
            policy,
            limit,
            html,
            config,
        } => run_search(&file, &query, policy.map(Into::into), limit, html, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", themed(RED, &[BOLD], "error:"), e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<WidgetConfig> {
    let Some(path) = path else {
        return Ok(WidgetConfig::default());
    };
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read config {}", path))?;
    WidgetConfig::from_json(&raw).with_context(|| format!("in {}", path))
}

fn run_check(file: &str) -> Result<()> {
    let pages = load_pages_from_path(file)?;
    log::info!("loaded {} pages from {}", pages.len(), file);

    let with_keywords = pages.iter().filter(|p| !p.keyword_list().is_empty()).count();
    let distinct: BTreeSet<String> = pages
        .iter()
        .flat_map(|p| p.keyword_list())
        .map(str::to_lowercase)
        .collect();
    let longest = pages
        .iter()
        .map(|p| p.content.chars().count())
        .max()
        .unwrap_or(0);
    let blank_titles = pages.iter().filter(|p| p.title.trim().is_empty()).count();

    section("PAGE DATA");
    field("file", file);
    field("pages", &pages.len().to_string());
    field("with keywords", &with_keywords.to_string());
    field("distinct keywords", &distinct.len().to_string());
    field("longest content", &format!("{} chars", longest));
    if blank_titles > 0 {
        field("blank titles", &themed(RED, &[], &blank_titles.to_string()));
    }
    println!();
    println!("{}", themed(GREEN, &[BOLD], "✓ page data is valid"));
    Ok(())
}

fn run_search(
    file: &str,
    raw_query: &str,
    policy: Option<MatchPolicy>,
    limit: usize,
    html: bool,
    config: Option<&str>,
) -> Result<()> {
    let mut config = load_config(config)?;
    if let Some(policy) = policy {
        config.policy = policy;
    }
    let pages = load_pages_from_path(file)?;

    if html {
        return print_html(pages, config, raw_query);
    }

    let widget = SearchWidget::new(pages, config);
    let query = parse_query(raw_query);
    let policy = widget.config().policy;
    let results = widget.search(raw_query);

    section(&format!("{} results for \"{}\"", results.len(), query.display(policy)));
    let shown = if limit == 0 { results.len() } else { limit };
    let terms = query.terms(policy);
    for (rank, page) in results.iter().take(shown).enumerate() {
        let excerpt = snippet_for_query(&page.content, &query, policy, &widget.config().snippet);
        print_result(rank + 1, page, &terms, &excerpt);
    }
    if results.len() > shown {
        println!(
            "{}",
            themed(GRAY, &[], &format!("  … {} more", results.len() - shown))
        );
    }
    Ok(())
}

fn print_result(rank: usize, page: &PageRecord, terms: &[&str], excerpt: &str) {
    println!(
        "{:>3}. {}  {}",
        rank,
        themed(BLUE, &[BOLD], &highlight_terminal(&page.title, terms)),
        themed(GRAY, &[], &page.url)
    );
    println!("     {}", themed(GRAY, &[DIM], &highlight_terminal(excerpt, terms)));
    let keywords = page.keyword_list();
    if !keywords.is_empty() {
        println!(
            "     {} {}",
            themed(GRAY, &[], "keywords:"),
            highlight_terminal(&keywords.join(", "), terms)
        );
    }
}

/// Drive the widget against an in-memory document and dump what it inserted.
fn print_html(pages: Vec<PageRecord>, config: WidgetConfig, raw_query: &str) -> Result<()> {
    let mut surface = MemorySurface::new(config.ids.clone());
    let mut widget = SearchWidget::new(pages, config);
    anyhow::ensure!(widget.attach(&surface), "search form not found");

    surface.set_query(raw_query);
    widget.submit(&mut surface);
    match surface.results_html() {
        Some(html) => println!("{}", html),
        None if surface.has_form() => log::info!("blank query, no results container"),
        None => {}
    }
    Ok(())
}
