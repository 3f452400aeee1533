//! segyscan - SEG-Y trace header scanner.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use segyscan::app::MapViewer;
use segyscan::{ui, Domain, ScanOptions, Scanner};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "segyscan")]
#[command(
    about = "Scan SEG-Y trace headers into source, receiver and CDP tables and maps",
    long_about = None
)]
struct Args {
    /// Path to a SEG-Y file or a directory of .sgy/.segy files
    input: PathBuf,

    /// Generate source tables and maps
    #[arg(long)]
    sou: bool,

    /// Generate receiver tables and maps
    #[arg(long)]
    rec: bool,

    /// Generate CDP tables and maps
    #[arg(long)]
    cdp: bool,

    /// Output directory (default: segyscan/ next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Files per ranges table
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..))]
    files_per_table: u16,

    /// Width of the text maps in characters
    #[arg(long, default_value_t = 120)]
    map_width: u16,

    /// Height of the text maps in lines
    #[arg(long, default_value_t = 40)]
    map_height: u16,

    /// Skip writing text maps
    #[arg(long)]
    no_maps: bool,

    /// Open the interactive map viewer after scanning
    #[arg(long)]
    view: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn domains(&self) -> Vec<Domain> {
        [
            (self.sou, Domain::Source),
            (self.rec, Domain::Receiver),
            (self.cdp, Domain::Cdp),
        ]
        .into_iter()
        .filter_map(|(on, domain)| on.then_some(domain))
        .collect()
    }

    fn options(&self) -> ScanOptions {
        ScanOptions {
            output_dir: self.output.clone(),
            files_per_table: usize::from(self.files_per_table),
            write_maps: !self.no_maps,
            map_width: self.map_width,
            map_height: self.map_height,
            show_progress: !self.quiet,
            ..ScanOptions::default()
        }
        .with_domains(self.domains())
    }
}

fn init_logging(args: &Args) -> Result<()> {
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let default = if args.quiet { "warn" } else { "info" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    tracing::info!("Starting segyscan");

    let options = args.options();
    let outcome = Scanner::new(options.clone()).run(&args.input)?;

    println!(
        "Processed {} file(s), skipped {}. Reports written to {}",
        outcome.aggregator.len(),
        outcome.skipped.len(),
        outcome.output_dir.display()
    );
    for skipped in &outcome.skipped {
        println!("  skipped {}: {}", skipped.path.display(), skipped.reason);
    }

    if args.view {
        let viewer = MapViewer::new(&outcome.aggregator, options.domains.iter().copied());

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = run_app(&mut terminal, viewer);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res?;
    }

    tracing::info!("segyscan finished");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut viewer: MapViewer,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &viewer))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::NONE, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),
            (KeyModifiers::NONE, KeyCode::Tab)
            | (KeyModifiers::NONE, KeyCode::Right)
            | (KeyModifiers::NONE, KeyCode::Char('l')) => viewer.next_domain(),
            (KeyModifiers::SHIFT, KeyCode::BackTab)
            | (KeyModifiers::NONE, KeyCode::BackTab)
            | (KeyModifiers::NONE, KeyCode::Left)
            | (KeyModifiers::NONE, KeyCode::Char('h')) => viewer.prev_domain(),
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                viewer.select_next()
            },
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                viewer.select_prev()
            },
            (KeyModifiers::NONE, KeyCode::Char(' ')) => viewer.toggle_selected(),
            (KeyModifiers::NONE, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Char('y')) => {
                viewer.copy_current()
            },
            (KeyModifiers::SHIFT, KeyCode::Char('T')) | (KeyModifiers::NONE, KeyCode::Char('T')) => {
                viewer.toggle_theme()
            },
            _ => {},
        }
    }
}
