use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use muni::App;
use muni::autocomplete::filter_municipalities;
use muni::config::{self, ConfigResult};
use muni::geo::{BrasilApiClient, client::fetch_blocking, worker::spawn_worker};
use muni::region::RegionCode;

/// Interactive Brazilian municipality picker
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive Brazilian municipality picker with live suggestions"
)]
struct Args {
    /// State abbreviation to preselect (e.g. SP, RJ, MG)
    #[arg(short, long, value_name = "UF")]
    region: Option<String>,

    /// Print the suggestions for TEXT and exit instead of opening the picker
    #[arg(short, long, value_name = "TEXT", requires = "region")]
    search: Option<String>,

    /// Geography service base URL, overriding the config file
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/muni-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/muni-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== MUNI DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let mut config_result = config::load_config();

    let args = Args::parse();

    if let Some(base_url) = args.base_url {
        config_result.config.api.base_url = base_url;
    }

    let region = args.region.as_deref().map(RegionCode::parse).transpose()?;

    let client = BrasilApiClient::new(
        &config_result.config.api.base_url,
        Duration::from_secs(config_result.config.api.timeout_secs),
    )?;

    if let (Some(region), Some(text)) = (region, args.search.as_deref()) {
        return search(&client, &config_result.config, region, text);
    }

    let terminal = init_terminal()?;

    let mut app = App::new(&config_result.config);
    setup_fetch_worker(&mut app, client);
    if let Some(region) = region {
        app.select_region(region);
    }

    let result = run(terminal, app, config_result);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    if let Some(text) = app.output_text() {
        println!("{}", text);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== MUNI DEBUG SESSION ENDED ===");

    Ok(())
}

/// Print the suggestions for `text` without opening the picker
fn search(
    client: &BrasilApiClient,
    config: &config::Config,
    region: RegionCode,
    text: &str,
) -> Result<()> {
    let municipalities = fetch_blocking(client, region)?;
    let names = filter_municipalities(
        &municipalities,
        text,
        config.suggestions.effective_max_results(),
        config.suggestions.matching,
    );
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, bracketed paste and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(
        stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    ) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<App> {
    app.warning = config_result.warning;

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Set up the fetch worker thread and channels
fn setup_fetch_worker(app: &mut App, client: BrasilApiClient) {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    app.loader.set_channels(request_tx, response_rx);

    spawn_worker(client, request_rx, response_tx);
}
