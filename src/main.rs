use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, path::PathBuf};
use tracing::{debug, error, info};

use homeease::{
    app::App, export::BreakdownReport, logging::init_tracing, normalize::normalize, ui::ui,
    Field, MortgageContext, MortgageInputs,
};

/// Mortgage repayment calculator with a principal/interest breakdown.
#[derive(Debug, Parser)]
struct Cli {
    /// Initial property price, e.g. `250,000`.
    #[arg(long)]
    price: Option<String>,

    /// Initial deposit.
    #[arg(long)]
    deposit: Option<String>,

    /// Initial annual interest rate in percent.
    #[arg(long)]
    rate: Option<String>,

    /// Initial term in years.
    #[arg(long)]
    term: Option<String>,

    /// Print the breakdown as JSON and exit instead of opening the UI.
    #[arg(long)]
    json: bool,

    /// Where `e` on the dashboard writes the breakdown.
    #[arg(long, default_value = "mortgage_breakdown.json")]
    export_path: PathBuf,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Session defaults with any command-line overrides applied.
    fn initial_inputs(&self) -> Result<MortgageInputs> {
        let mut inputs = MortgageInputs::default();
        for (field, raw) in [
            (Field::PropertyPrice, &self.price),
            (Field::Deposit, &self.deposit),
            (Field::InterestRate, &self.rate),
            (Field::TermYears, &self.term),
        ] {
            if let Some(raw) = raw {
                let value = normalize(raw).with_context(|| format!("invalid --{field} value"))?;
                inputs = inputs.with_field(field, value);
            }
        }
        Ok(inputs)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref(), cli.json)?;

    let inputs = cli.initial_inputs()?;
    debug!(?inputs, "initial snapshot");

    if cli.json {
        println!("{}", BreakdownReport::new(inputs).to_json()?);
        return Ok(());
    }

    let app = App::new(MortgageContext::provide(inputs), cli.export_path)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("session started");
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("session aborted: {err:#}");
    }
    info!("session ended");
    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let mut drawn = Ok(());
        terminal.draw(|f| drawn = ui(f, &app))?;
        drawn?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
            if app.should_quit {
                return Ok(());
            }
        }
    }
}
