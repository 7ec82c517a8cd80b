use std::fs;
use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use signup_tui::app::{App, AppError};
use signup_tui::paths;
use signup_tui::store::{FormStore, MemoryBackend, SqliteBackend};
use signup_tui::ui::Screen;

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Log to a file, never stdout: the terminal belongs to the UI.
fn init_logging() {
    let Some(path) = paths::log_file() else { return };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }
}

async fn run() -> Result<(), AppError> {
    let ephemeral = std::env::args().any(|arg| arg == "--ephemeral");

    let store = if ephemeral {
        FormStore::new(MemoryBackend::new())
    } else {
        let path = paths::store_db().ok_or(AppError::NoDataDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        FormStore::new(SqliteBackend::new(path).await?)
    };

    let mut app = App::new(store);
    app.load().await;

    let mut screen = Screen::new()?;
    app.run(&mut screen).await
}
