use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use notz::api::{BoardApi, CmdMessage, ConfigAction, ListedNote, MessageLevel};
use notz::error::{NotzError, Result};
use notz::model::Color;
use notz::store::fs::FileStore;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: BoardApi<FileStore>,
    skip_confirm: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { text }) => handle_add(&mut ctx, text),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Edit { position, text }) => handle_edit(&mut ctx, position, text),
        Some(Commands::Delete { position }) => handle_delete(&mut ctx, position),
        Some(Commands::Move { position, before }) => handle_move(&mut ctx, position, before),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Export) => handle_export(&ctx),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let board_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "notz", "notz")
                .ok_or_else(|| NotzError::Store("Could not determine data dir".to_string()))?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let store = FileStore::new(board_dir.clone());
    let api = BoardApi::new(store, board_dir);

    Ok(AppContext {
        api,
        skip_confirm: cli.yes,
    })
}

fn handle_add(ctx: &mut AppContext, text: Vec<String>) -> Result<()> {
    let result = ctx.api.add_note(&text.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = match search {
        Some(term) => ctx.api.search_notes(&term)?,
        None => ctx.api.list_notes()?,
    };
    print_notes(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, position: usize, text: Vec<String>) -> Result<()> {
    let result = ctx.api.edit_note(position, &text.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, position: usize) -> Result<()> {
    if !ctx.skip_confirm {
        let listed = ctx.api.list_notes()?.listed;
        let Some(target) = listed.iter().find(|ln| ln.position == position) else {
            return Err(NotzError::Api(format!("No note at position {}", position)));
        };
        let prompt = format!(
            "Delete note {}: \"{}\"?",
            position,
            short_preview(&target.note.text)
        );
        if !confirm(&prompt)? {
            println!("{}", "Operation cancelled.".dimmed());
            return Ok(());
        }
    }

    let result = ctx.api.delete_note(position)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, position: usize, before: Option<usize>) -> Result<()> {
    let result = ctx.api.move_note(position, before)?;
    print_messages(&result.messages);
    print_notes(&result.listed);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_notes(&term)?;
    print_notes(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext) -> Result<()> {
    let cwd = std::env::current_dir().map_err(NotzError::Io)?;
    let result = ctx.api.export_notes(&cwd)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let count = ctx.api.count();
    if count > 0 && !ctx.skip_confirm {
        let prompt = format!(
            "Remove all {} note{} from the board?",
            count,
            if count == 1 { "" } else { "s" }
        );
        if !confirm(&prompt)? {
            println!("{}", "Operation cancelled.".dimmed());
            return Ok(());
        }
    }

    let result = ctx.api.clear_board()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("export-prefix = {}", config.export_prefix);
    }
    print_messages(&result.messages);
    Ok(())
}

/// Ask for an explicit yes before a destructive operation. Anything other
/// than y/Y cancels.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush().map_err(NotzError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(NotzError::Io)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
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

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 10;

fn tint(color: Color) -> colored::Color {
    match color {
        Color::Cream => colored::Color::Yellow,
        Color::Rose => colored::Color::Magenta,
        Color::Sage => colored::Color::Green,
        Color::Sky => colored::Color::Cyan,
    }
}

fn print_notes(notes: &[ListedNote]) {
    if notes.is_empty() {
        println!("No notes yet. Start adding your thoughts!");
        return;
    }

    for ln in notes {
        let idx_str = format!("{:>3}. ", ln.position);
        let flat: String = ln
            .note
            .text
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + TIME_WIDTH + 2);
        let text_display = truncate_to_width(&flat, available);
        let padding = available.saturating_sub(text_display.width());

        println!(
            "{}{}{}  {}",
            idx_str,
            text_display.color(tint(ln.note.color)),
            " ".repeat(padding),
            format!("{:>width$}", ln.note.timestamp, width = TIME_WIDTH).dimmed()
        );
    }

    let count = notes.len();
    println!(
        "{}",
        format!("{} note{}", count, if count == 1 { "" } else { "s" }).dimmed()
    );
}

fn short_preview(text: &str) -> String {
    truncate_to_width(&text.replace('\n', " "), 40)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
