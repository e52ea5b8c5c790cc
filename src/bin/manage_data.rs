// Data maintenance utility: backup / restore / view / reset the dashboard dataset.
//
// Usage:
//   cargo run --bin manage_data -- <backup|restore|view|reset> [db_path]
//
// db_path defaults to BANKING_DASHBOARD_DB_PATH or the per-user data dir.
// Does not start the Tauri UI.

use banking_dashboard::app::{get_default_db_path, AppState};
use banking_dashboard::engine::{difference, format_difference};
use banking_dashboard::logging;
use banking_dashboard::repository::DatasetStore;

const USAGE: &str = "Usage: manage_data <backup|restore|view|reset> [db_path]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_cli();

    let mut args = std::env::args().skip(1);
    let command = args.next().ok_or(USAGE)?;
    let db_path = args
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(get_default_db_path);

    let state = AppState::new(db_path)?;
    let manager = state.backup_manager();

    match command.as_str() {
        "backup" => match manager.backup()? {
            Some(path) => println!("Backup created: {}", path.display()),
            None => println!("No data to back up"),
        },
        "restore" => match manager.restore()? {
            Some(path) => println!("Restored from: {}", path.display()),
            None => println!("No backups found in {}", state.backup_dir.display()),
        },
        "view" => {
            let dataset = manager.view()?;
            println!("Location: {}", state.store.location());
            println!("Last updated: {}", dataset.last_updated.to_rfc3339());
            println!("Categories: {}", dataset.len());
            for (category, metrics) in dataset.categories() {
                println!(
                    "  {:<20} current={:>18} target={:>18} dtd={}",
                    category,
                    metrics.current,
                    metrics.target,
                    format_difference(difference(metrics.current, metrics.previous_day)),
                );
            }
            println!();
            println!("{}", serde_json::to_string_pretty(&dataset)?);
        }
        "reset" => {
            let dataset = manager.reset()?;
            println!("Data reset to defaults ({} categories)", dataset.len());
        }
        other => {
            eprintln!("Unknown command: {}", other);
            return Err(USAGE.into());
        }
    }

    Ok(())
}
