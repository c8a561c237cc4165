//! docdex - content index for markdown documentation sites.

mod cli;
mod config;
mod content;
mod data;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use content::{ContentIndex, QuickStartPage};
use std::io::{Write, stdout};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;
    let index = ContentIndex::load(&config.loader(), &config.content)
        .context("Failed to load content")?;

    let mut out = stdout().lock();
    match &cli.command {
        Commands::Pages => list_pages(&mut out, &index)?,
        Commands::Concepts => list_concepts(&mut out, &index)?,
        Commands::Nav { order } => show_nav(&mut out, &index, *order)?,
        Commands::Concept { id } => show_concept(&mut out, &index, id)?,
        Commands::Related { ids } => show_related(&mut out, &index, ids)?,
        Commands::Export { .. } => export(&mut out, &index, &config)?,
    }
    out.flush()?;

    Ok(())
}

// Query results are written in full to `out`; `log!` is only for status.

fn list_pages(out: &mut impl Write, index: &ContentIndex) -> Result<()> {
    for page in index.sorted_quick_start_pages() {
        writeln!(out, "{:>3}  {}  {}", page.order, page.title(), page.href)?;
    }
    Ok(())
}

fn list_concepts(out: &mut impl Write, index: &ContentIndex) -> Result<()> {
    for page in index.concept_pages() {
        writeln!(out, "{}  {}  {}", page.id, page.title(), page.href)?;
    }
    Ok(())
}

fn show_nav(out: &mut impl Write, index: &ContentIndex, order: i64) -> Result<()> {
    let describe = |page: Option<&QuickStartPage>| {
        page.map_or_else(|| "-".to_owned(), |p| format!("{} ({}) {}", p.title(), p.order, p.href))
    };

    if index.quick_start_page(order).is_none() {
        log!("nav"; "no quick start page with order {order}");
    }
    let nav = index.pagination(order);
    writeln!(out, "previous: {}", describe(nav.previous))?;
    writeln!(out, "next: {}", describe(nav.next))?;
    Ok(())
}

fn show_concept(out: &mut impl Write, index: &ContentIndex, id: &str) -> Result<()> {
    let page = index
        .concept(id)
        .with_context(|| format!("no concept page with id `{id}`"))?;

    writeln!(out, "{}  {}", page.title(), page.href)?;
    for link in &page.read_more {
        writeln!(out, "read more: {link}")?;
    }
    for related in index.related_of(page)? {
        writeln!(out, "related: {}  {}", related.id, related.href)?;
    }
    let body = page.body.trim();
    if !body.is_empty() {
        writeln!(out, "\n{body}")?;
    }
    Ok(())
}

fn show_related(out: &mut impl Write, index: &ContentIndex, ids: &[String]) -> Result<()> {
    for page in index.related_concept_pages(ids)? {
        writeln!(out, "{}  {}  {}", page.id, page.title(), page.href)?;
    }
    Ok(())
}

fn export(out: &mut impl Write, index: &ContentIndex, config: &SiteConfig) -> Result<()> {
    let pretty = config.export.pretty;
    match &config.export.output {
        Some(dir) => {
            let written = data::write_data_files(index, dir, pretty)?;
            log!("export"; "wrote {} files", written.len());
        }
        None => writeln!(out, "{}", data::data_bundle(index, pretty)?)?,
    }
    Ok(())
}
