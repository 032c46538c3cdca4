//! Loresheet - Entry Point
//!
//! A minimal interactive front end standing in for the sheet's UI layer:
//! it marshals typed commands into the controller and prints the resulting
//! state. All rules logic lives in the library.

use std::io::{self, Write};
use std::path::Path;

use tokio::runtime::Runtime;

use loresheet::assets::AssetClient;
use loresheet::core::config::SheetConfig;
use loresheet::core::error::Result;
use loresheet::core::types::CasterKind;
use loresheet::sheet::Sheet;
use loresheet::spells::{SpellCatalog, SpellFilter};
use loresheet::store::FileStore;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("loresheet=debug")
        .init();

    tracing::info!("Loresheet starting...");

    let config_path = Path::new("sheet.toml");
    let config = if config_path.exists() {
        SheetConfig::load_from_path(config_path)?
    } else {
        SheetConfig::default()
    };

    let store = FileStore::open(&config.data_dir)?;
    let mut sheet = Sheet::load(store, config);

    // One-shot catalog load; a failure leaves the spell browser empty.
    let rt = Runtime::new()?;
    let catalog = load_catalog(&rt, sheet.config());
    sheet.set_catalog(catalog);

    println!("\n=== LORESHEET ===");
    println!("Commands:");
    println!("  slots              - Show slot pools");
    println!("  use <level>        - Spend a slot");
    println!("  rest               - Daily reset");
    println!("  known <class>      - Show known spells (oracle/wizard)");
    println!("  learn <class> <spell> - Add a known spell");
    println!("  prepare <spell>    - Prepare a wizard spell");
    println!("  prepared           - Show prepared spells");
    println!("  find <text>        - Search the catalog by name");
    println!("  round              - Advance conditions one round");
    println!("  quit / q           - Exit");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        let (command, rest) = input.split_once(' ').unwrap_or((input, ""));

        match command {
            "quit" | "q" => break,
            "slots" => {
                for (level, slot) in sheet.state().spellbook.slots.levels() {
                    println!("  L{}: {}/{}", level, slot.current, slot.max);
                }
            }
            "use" => {
                let level = rest.trim().parse().unwrap_or(0);
                if sheet.use_slot(level)? {
                    println!("Used a level {} slot", level);
                } else {
                    println!("No level {} slots left", level);
                }
            }
            "rest" => {
                sheet.rest()?;
                println!("Rested: slots restored, prepared spells refreshed");
            }
            "known" => match parse_caster(rest.trim()) {
                Some(caster) => print_groups(&sheet, caster),
                None => println!("Expected 'oracle' or 'wizard'"),
            },
            "learn" => {
                let (class, spell) = rest.split_once(' ').unwrap_or((rest, ""));
                match (parse_caster(class), spell.trim()) {
                    (Some(caster), name) if !name.is_empty() => {
                        sheet.add_known(caster, name)?;
                        println!("Learned {}", name);
                    }
                    _ => println!("Usage: learn <oracle|wizard> <spell name>"),
                }
            }
            "prepare" => {
                if rest.trim().is_empty() {
                    println!("Usage: prepare <spell name>");
                } else {
                    sheet.prepare(rest.trim())?;
                    println!("Prepared {}", rest.trim());
                }
            }
            "prepared" => {
                for group in sheet.grouped_prepared() {
                    println!("  Level {}", group.level.label());
                    for entry in group.entries {
                        let mark = if entry.used { "[x]" } else { "[ ]" };
                        println!("    {} {}", mark, entry.name);
                    }
                }
            }
            "find" => {
                let filter = SpellFilter::new().with_search(rest.trim());
                let results = sheet.catalog().filter(&filter);
                if results.is_empty() {
                    println!("No results found");
                }
                for spell in results {
                    println!("  {} ({})", spell.name, spell.school);
                }
            }
            "round" => {
                sheet.advance_round()?;
                for entry in sheet.state().conditions.entries() {
                    println!("  {}", entry);
                }
            }
            "" => {}
            other => println!("Unknown command: {}", other),
        }
    }

    Ok(())
}

fn parse_caster(s: &str) -> Option<CasterKind> {
    match s {
        "oracle" => Some(CasterKind::Oracle),
        "wizard" => Some(CasterKind::Wizard),
        _ => None,
    }
}

fn print_groups(sheet: &Sheet<FileStore>, caster: CasterKind) {
    for group in sheet.grouped_known(caster) {
        println!("  Level {}", group.level.label());
        for entry in group.entries {
            println!("    {}", entry.name);
        }
    }
}

/// Load the catalog from disk when the source is a local file, otherwise
/// fetch it over HTTP; either failure path leaves the catalog empty
fn load_catalog(rt: &Runtime, config: &SheetConfig) -> SpellCatalog {
    let source = &config.catalog_source;
    if Path::new(source).exists() {
        SpellCatalog::load_from_path(Path::new(source)).unwrap_or_else(|e| {
            tracing::warn!("Spell catalog failed to load from {}: {}", source, e);
            SpellCatalog::new()
        })
    } else if source.starts_with("http") {
        let client = AssetClient::new();
        rt.block_on(client.fetch_catalog(source))
    } else {
        tracing::warn!("No spell catalog at {}", source);
        SpellCatalog::new()
    }
}
