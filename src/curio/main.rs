use clap::Parser;
use colored::*;
use curio::api::{CmdMessage, CurioApi, MessageLevel};
use curio::error::{CurioError, Result};
use curio::model::{Field, Record};
use curio::store::fs::FileStore;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CurioApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Add {
            title,
            year,
            artist,
            style,
        } => handle_add(&mut ctx, title, year, artist, style),
        Commands::List => handle_list(&ctx),
        Commands::Search { field, value } => handle_search(&ctx, field, value),
        Commands::Edit {
            id,
            title,
            year,
            artist,
            style,
        } => handle_edit(&mut ctx, id, title, year, artist, style),
        Commands::Delete {
            id,
            title,
            year,
            artist,
            style,
        } => handle_delete(&mut ctx, id, title, year, artist, style),
        Commands::Clear => handle_clear(&mut ctx),
        Commands::Create => handle_create(&mut ctx),
        Commands::Open { path } => handle_open(&mut ctx, path),
        Commands::Save { path } => handle_save(&ctx, path),
        Commands::Backup { path } => handle_backup(&ctx, path),
        Commands::Restore { path } => handle_restore(&mut ctx, path),
        Commands::Export { path } => handle_export(&ctx, path),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let store = FileStore::new(cli.file.clone());
    store.init()?;
    Ok(AppContext {
        api: CurioApi::new(store),
    })
}

// Year and id arrive as text from the shell; validating them here keeps the
// store free of input parsing, matching its call contract.
fn parse_year(raw: &str) -> Result<i32> {
    raw.trim()
        .parse()
        .map_err(|_| CurioError::Validation(format!("Year must be an integer, got '{}'", raw)))
}

fn parse_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| CurioError::Validation(format!("Id must be an integer, got '{}'", raw)))
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    year: String,
    artist: String,
    style: String,
) -> Result<()> {
    let year = parse_year(&year)?;
    let result = ctx.api.add_record(&title, year, &artist, &style)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_records()?;
    print_records(&result.records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, field: String, value: String) -> Result<()> {
    let field: Field = field.parse()?;
    let result = ctx.api.search(field, &value)?;
    print_records(&result.records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: String,
    title: String,
    year: String,
    artist: String,
    style: String,
) -> Result<()> {
    let id = parse_id(&id)?;
    let year = parse_year(&year)?;
    let result = ctx.api.edit_record(id, &title, year, &artist, &style)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(
    ctx: &mut AppContext,
    id: String,
    title: String,
    year: String,
    artist: String,
    style: String,
) -> Result<()> {
    let id = parse_id(&id)?;
    let year = parse_year(&year)?;
    let result = ctx.api.delete_record(id, &title, year, &artist, &style)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.create()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_open(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.open(&path)?;
    print_records(&result.records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_save(ctx: &AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.save(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_backup(ctx: &AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.backup(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_restore(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.restore(&path)?;
    print_records(&result.records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.export_csv(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No records found.");
        return;
    }

    let title_w = column_width("title", records.iter().map(|r| r.title.len()));
    let artist_w = column_width("artist", records.iter().map(|r| r.artist.len()));

    println!(
        "{}",
        format!(
            "{:>4}  {:<tw$}  {:>4}  {:<aw$}  {}",
            "id",
            "title",
            "year",
            "artist",
            "style",
            tw = title_w,
            aw = artist_w
        )
        .dimmed()
    );
    for record in records {
        println!(
            "{:>4}  {:<tw$}  {:>4}  {:<aw$}  {}",
            record.id,
            record.title,
            record.year,
            record.artist,
            record.style,
            tw = title_w,
            aw = artist_w
        );
    }
}

fn column_width(header: &str, lengths: impl Iterator<Item = usize>) -> usize {
    lengths.chain(std::iter::once(header.len())).max().unwrap_or(0)
}
