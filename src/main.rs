use course_finder::config::{LoggingSettings, Settings};
use course_finder::models::{Command, ErrorResponse, Update};
use course_finder::{ProfileFormHost, RecordCollection, Session};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn write_line<T: Serialize>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    out.write_all(b"\n")?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        e
    })?;

    init_logging(&settings.logging);

    info!("Starting Course Finder view session...");

    // A missing or broken data file leaves an empty list, like an empty page
    let records = match RecordCollection::load(&settings.records.path) {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to load recommendations from {}: {}", settings.records.path, e);
            RecordCollection::default()
        }
    };

    let mut session = Session::new(
        ProfileFormHost::standard(),
        records,
        settings.controls.clone().into(),
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_line(&mut out, &Update::Form(session.form_view()))?;
    write_line(&mut out, &Update::List(session.list().clone()))?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Command>(&line) {
            Ok(command) => {
                let update = session.dispatch(command);
                write_line(&mut out, &update)?;
            }
            Err(e) => {
                warn!("Ignoring malformed command: {}", e);
                write_line(
                    &mut out,
                    &ErrorResponse {
                        error: "invalid_command".to_string(),
                        message: format!("Invalid command: {}", e),
                    },
                )?;
            }
        }
    }

    info!("Input closed; session finished");
    Ok(())
}
