mod jobs;
mod paths;
mod view;

use std::error::Error;
use std::fs::File;

use beantable_lib::BeanTable;
use beantable_lib::TableConfig;
use beantable_lib::introspect::DescriptorRegistry;
use beantable_lib::prefs::SqliteStore;
use beantable_lib::prefs::TablePrefs;
use chrono::Duration;
use chrono::Local;
use chrono::Utc;
use log::debug;
use log::error;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::jobs::Job;
use crate::paths::ViewerPaths;

const PREFS_NODE: &str = "viewer.jobs";

fn init_logging(paths: &ViewerPaths) {
    if let Err(e) = paths.prepare() {
        eprintln!("Cannot create viewer directories: {e}");
        return;
    }
    let dropped = paths.rotate_logs(Local::now()).unwrap_or_default();
    let log_file = File::create(paths.log_file()).expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");
    debug!("dropped {dropped} old log(s)");
}

async fn open_prefs(paths: &ViewerPaths) -> Result<TablePrefs, Box<dyn Error>> {
    let db = paths.prefs_db();
    let store = SqliteStore::open(&db).await?;
    info!("Preferences at {}", db.display());
    debug!("saved tables: {:?}", store.nodes().await?);
    Ok(TablePrefs::new(store, PREFS_NODE))
}

async fn run(paths: Option<ViewerPaths>) -> Result<(), Box<dyn Error>> {
    let registry = DescriptorRegistry::new();
    let config = TableConfig::default()
        .with_unavailable_text("-")
        .with_date_cutoff(Duration::days(90));
    let mut table: BeanTable<Job> = BeanTable::new(&registry, jobs::sample(Utc::now()), config)?;

    if let Some(paths) = &paths {
        table = table.with_prefs(open_prefs(paths).await?);
    }
    table.restore_state().await?;

    table.set_property("retries", None, Some("Attempts left before the job is parked"));
    table.sort_by("started", false)?;
    table.select_view_row(0);

    print!("{}", view::render(&table));
    println!();

    if let Some(row) = table.bridge().first_model_row(table.selection()) {
        let props = [
            ("id", "job identifier"),
            ("name", "job name"),
            ("owner", "owning team"),
            ("retries", "attempts left"),
            ("started", "last start"),
            ("token", "api token"),
        ];
        print!("{}", table.show_record(row, &props));
    }

    info!("{}", table.describe());
    table.save_state(false).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let paths = ViewerPaths::discover();
    if let Some(paths) = &paths {
        init_logging(paths);
    }

    if let Err(e) = run(paths).await {
        error!("{e}");
        eprintln!("Error: {}", e);
    }
}
