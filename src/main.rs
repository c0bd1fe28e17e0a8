use std::{
    io::{self, Write},
    process,
};

use tocwright::{
    application::{error::AppError, outline::OutlineService},
    config::{self, Command, OutputFormat, Settings},
    infra::{documents::read_document, error::InfraError, telemetry},
    presentation::toc::{render_json, render_text},
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(error.exit_code());
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    telemetry::init(&settings.logging)?;

    match cli_args.command {
        Command::Outline(args) => run_outline(&settings, &args.file),
        Command::Scroll(args) => run_scroll(&settings, &args.file, &args.heading_id),
    }
}

fn run_outline(settings: &Settings, file: &std::path::Path) -> Result<(), AppError> {
    let markdown = read_document(file)?;
    let service = OutlineService::new(settings.toc.scroll_mode);
    let outline = service.outline(&markdown);
    let builder = service.builder();

    let rendered = match settings.toc.format {
        OutputFormat::Text => render_text(&outline.toc, &builder, &markdown)?,
        OutputFormat::Json => render_json(&outline.toc, &builder, &markdown)?,
    };

    info!(
        file = %file.display(),
        headings = outline.headings.len(),
        "printed table of contents"
    );

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes()).map_err(InfraError::from)?;
    if settings.toc.format == OutputFormat::Json {
        writeln!(stdout).map_err(InfraError::from)?;
    }
    Ok(())
}

fn run_scroll(
    settings: &Settings,
    file: &std::path::Path,
    heading_id: &str,
) -> Result<(), AppError> {
    let markdown = read_document(file)?;
    let service = OutlineService::new(settings.toc.scroll_mode);
    let outline = service.outline(&markdown);

    let target = service
        .scroll_target(&outline, heading_id, &markdown)
        .ok_or_else(|| AppError::heading_not_found(heading_id))?;

    info!(
        heading = %target.heading_id,
        position = target.position,
        scroll_mode = ?settings.toc.scroll_mode,
        "resolved scroll target"
    );

    writeln!(io::stdout().lock(), "{}", target.position).map_err(InfraError::from)?;
    Ok(())
}
