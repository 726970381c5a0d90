//! tabbed-demo - Interactive tabbed panels demo
//!
//! Shows a number of scrollable panels behind a clickable tab strip.

mod demo_view;

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use demo_view::DemoView;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tabbed_core::{Primitive, SwitcherPosition, TabbedConfig};
use tabbed_ui::{FocusTracker, TabbedPanels};
use tracing_subscriber::EnvFilter;

const HELP: &str =
    " Tab/Shift+Tab:switch  Alt+1-9:jump  Ctrl+N:new  Ctrl+W:close  Ctrl+B:flip  Ctrl+Q:quit";

/// Interactive demo of the tabbed panels widget
#[derive(Parser)]
#[command(name = "tabbed-demo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Place the tab strip below the panels
    #[arg(short, long)]
    bottom: bool,

    /// Number of tabs to open
    #[arg(short, long, default_value_t = 4)]
    tabs: usize,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = match &cli.config {
        Some(path) => TabbedConfig::load_from(path)?,
        None => TabbedConfig::load()?,
    };
    if cli.bottom {
        config.switcher = SwitcherPosition::Bottom;
    }

    let focus = Arc::new(FocusTracker::new());
    let tabbed = TabbedPanels::new(focus.clone());
    tabbed.apply_config(&config);

    let mut demo = Demo {
        tabbed,
        focus,
        opened: 0,
    };
    for _ in 0..cli.tabs {
        demo.open_tab();
    }
    tracing::info!(tabs = cli.tabs, bottom = config.switcher.is_bottom(), "demo started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut demo);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}

/// Demo state: the widget plus a counter for naming new tabs
struct Demo {
    tabbed: Arc<TabbedPanels>,
    focus: Arc<FocusTracker>,
    opened: usize,
}

impl Demo {
    fn open_tab(&mut self) {
        self.opened += 1;
        let name = format!("panel{}", self.opened);
        let label = format!("Panel {}", self.opened);
        let view = Arc::new(DemoView::sample(&label, 40 + self.opened * 5));
        self.tabbed.add_tab(&name, &label, view);
        self.tabbed.set_current_tab(&name);
    }

    fn close_current(&self) {
        let current = self.tabbed.get_current_tab();
        if !current.is_empty() {
            self.tabbed.remove_tab(&current);
        }
    }

    fn jump_to(&self, index: usize) {
        let names = self.tabbed.tab_names();
        if let Some(name) = index.checked_sub(1).and_then(|i| names.get(i)) {
            self.tabbed.set_current_tab(name);
        }
    }

    fn render(&self, frame: &mut Frame) {
        let [body, help] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        self.tabbed.set_rect(body);
        self.tabbed.draw(frame.buffer_mut());

        let status = format!("{HELP}  [{}]", self.tabbed.get_current_tab());
        frame.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
            help,
        );
    }
}

fn run_app<B>(terminal: &mut Terminal<B>, demo: &mut Demo) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| demo.render(frame))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match (key.modifiers, key.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c' | 'q')) => break,
                    (KeyModifiers::CONTROL, KeyCode::Char('n')) => demo.open_tab(),
                    (KeyModifiers::CONTROL, KeyCode::Char('w')) => demo.close_current(),
                    (KeyModifiers::CONTROL, KeyCode::Char('b')) => {
                        let bottom = demo.tabbed.tab_switcher_bottom();
                        demo.tabbed.set_tab_switcher_position(!bottom);
                    }
                    (KeyModifiers::NONE, KeyCode::Tab) => demo.tabbed.next_tab(),
                    (KeyModifiers::SHIFT, KeyCode::BackTab) => demo.tabbed.prev_tab(),
                    (KeyModifiers::ALT, KeyCode::Char(c)) if c.is_ascii_digit() => {
                        let index = c.to_digit(10).unwrap_or(1) as usize;
                        demo.jump_to(index);
                    }
                    _ => {
                        demo.tabbed.handle_key(key, demo.focus.as_ref());
                    }
                }
            }
            Event::Mouse(mouse) => {
                demo.tabbed.handle_mouse(mouse, demo.focus.as_ref());
            }
            _ => {}
        }
    }

    Ok(())
}
