//! Coterie command-line shell
//!
//! Thin consumer over the vault: one subcommand per store operation, plain
//! text output. The persistence contract lives entirely in the core crates;
//! this binary only renders it.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use coterie_core::{init_logging, CharacterRecord, Config, Vault};
use coterie_model::{ATTRIBUTE_CATEGORIES, SKILL_CATEGORIES};

/// Coterie - a local-first vault for V5 character sheets
#[derive(Parser, Debug)]
#[command(name = "coterie")]
#[command(version = "0.1.0")]
#[command(about = "Manage Vampire: The Masquerade character sheets", long_about = None)]
struct Cli {
    /// Override the data directory (database and export location)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every character in the vault
    List,

    /// Print one character's sheet
    Show {
        /// Character id (see `list`)
        id: String,
    },

    /// Create a blank character and print its id
    Create {
        /// Character name
        #[arg(long, default_value = "")]
        name: String,
    },

    /// Delete a character by id
    Remove {
        id: String,
    },

    /// Import characters from a JSON document (single sheet or collection)
    Import {
        file: PathBuf,
    },

    /// Export one character's sheet as JSON
    Export {
        id: String,
    },

    /// Export the whole collection as JSON
    ExportAll,

    /// Delete every character, including the persisted collection
    Clear {
        /// Confirm: clearing cannot be undone
        #[arg(long)]
        yes: bool,
    },

    /// Show storage availability and character count
    Status,
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    let config = match cli.data_dir {
        Some(dir) => Config::new(dir),
        None => Config::default(),
    };

    let mut vault = Vault::new(config);
    vault.initialize();

    match cli.command {
        Commands::List => list(&vault),
        Commands::Show { id } => show(&vault, &id),
        Commands::Create { name } => create(&mut vault, &name),
        Commands::Remove { id } => remove(&mut vault, &id),
        Commands::Import { file } => import(&mut vault, &file),
        Commands::Export { id } => export(&vault, &id),
        Commands::ExportAll => export_all(&vault),
        Commands::Clear { yes } => clear(&mut vault, yes),
        Commands::Status => status(&vault),
    }
}

fn list(vault: &Vault) -> ExitCode {
    if vault.characters().is_empty() {
        println!("No characters created yet.");
        return ExitCode::SUCCESS;
    }

    for record in vault.characters() {
        println!(
            "{}  {} ({}, {} generation)",
            record.id,
            record.display_name(),
            if record.clan.is_empty() {
                "clanless"
            } else {
                record.clan.as_str()
            },
            record.generation,
        );
    }
    ExitCode::SUCCESS
}

fn show(vault: &Vault, id: &str) -> ExitCode {
    let Some(record) = vault.get(id) else {
        eprintln!("No character with id {}", id);
        return ExitCode::FAILURE;
    };

    print_sheet(record);
    ExitCode::SUCCESS
}

fn create(vault: &mut Vault, name: &str) -> ExitCode {
    let id = vault.create_character(name);
    println!("{}", id);
    ExitCode::SUCCESS
}

fn remove(vault: &mut Vault, id: &str) -> ExitCode {
    if vault.get(id).is_none() {
        eprintln!("No character with id {}", id);
        return ExitCode::FAILURE;
    }
    vault.remove(id);
    println!("Removed {}", id);
    ExitCode::SUCCESS
}

fn import(vault: &mut Vault, file: &Path) -> ExitCode {
    match vault.import_file(file) {
        Ok(count) => {
            println!("Imported {} character(s)", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Import failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn export(vault: &Vault, id: &str) -> ExitCode {
    match vault.export_character(id) {
        Ok(path) => {
            println!("Exported to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Export failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn export_all(vault: &Vault) -> ExitCode {
    match vault.export_all() {
        Ok(path) => {
            println!("Exported to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Export failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn clear(vault: &mut Vault, yes: bool) -> ExitCode {
    if !yes {
        eprintln!("This deletes every character and cannot be undone; re-run with --yes");
        return ExitCode::FAILURE;
    }
    vault.clear();
    println!("All characters cleared");
    ExitCode::SUCCESS
}

fn status(vault: &Vault) -> ExitCode {
    let status = vault.status();
    if status.persistent {
        println!("Persistent storage: {} character(s) saved", status.count);
    } else if status.available {
        println!(
            "Session only: {} character(s) in memory (use export to save permanently)",
            status.count
        );
    } else {
        println!("Storage error: collection is in memory only");
    }
    ExitCode::SUCCESS
}

fn print_sheet(record: &CharacterRecord) {
    println!("{}", record.display_name());
    println!(
        "  {} | {} generation | {}",
        if record.clan.is_empty() {
            "clanless"
        } else {
            record.clan.as_str()
        },
        record.generation,
        if record.predator_type.is_empty() {
            "no predator type"
        } else {
            record.predator_type.as_str()
        },
    );
    if !record.player.is_empty() {
        println!("  Player: {}", record.player);
    }
    if !record.chronicle.is_empty() {
        println!("  Chronicle: {}", record.chronicle);
    }

    for (category, names) in ATTRIBUTE_CATEGORIES {
        print!("\n  {}:", category);
        for name in *names {
            let value = record.attributes.get(&trait_key(name)).unwrap_or(0);
            print!("  {} {}", name, value);
        }
    }
    println!();

    for (category, names) in SKILL_CATEGORIES {
        let mut rated: Vec<String> = Vec::new();
        for name in *names {
            let key = trait_key(name);
            let value = record.skills.get(&key).unwrap_or(0);
            if value > 0 {
                match record.specialties.get(&key) {
                    Some(specialty) => rated.push(format!("{} {} ({})", name, value, specialty)),
                    None => rated.push(format!("{} {}", name, value)),
                }
            }
        }
        if !rated.is_empty() {
            println!("  {} skills: {}", category, rated.join(", "));
        }
    }

    if !record.disciplines.is_empty() {
        println!("\n  Disciplines:");
        for discipline in &record.disciplines {
            println!(
                "    {} {} [{}]",
                discipline.name,
                discipline.level,
                if discipline.in_clan { "in-clan" } else { "out-of-clan" },
            );
        }
    }

    println!(
        "\n  Humanity {} (stains {}) | Blood Potency {} | Hunger {}",
        record.humanity, record.stains, record.blood_potency, record.hunger,
    );
    println!(
        "  Health {}/{} superficial, {} aggravated | Willpower {}/{} superficial, {} aggravated",
        record.health_track.superficial,
        record.health_max(),
        record.health_track.aggravated,
        record.willpower_track.superficial,
        record.willpower_max(),
        record.willpower_track.aggravated,
    );
    println!(
        "  XP: {} earned, {} spent, {} available",
        record.total_xp(),
        record.spent_xp(),
        record.available_xp(),
    );

    if !record.resonances.is_empty() {
        let tags: Vec<&str> = record.resonances.iter().map(|r| r.as_str()).collect();
        println!("  Resonances: {}", tags.join(", "));
    }
}

/// Display names map to trait keys the way the sheet's element ids do
/// ("Animal Ken" -> "animal-ken").
fn trait_key(display_name: &str) -> String {
    display_name.to_lowercase().replace(' ', "-")
}
