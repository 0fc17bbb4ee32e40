mod app;
mod event;

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow, bail};
use clap::{ArgAction, Parser};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use app::App;
use event::{AppEvent, EventHandler};
use typr::config::Config;
use typr::generator::dictionary::WordList;
use typr::session::mode::{MAX_DURATION_SECS, Mode};
use typr::session::state::Phase;
use typr::ui::components::dashboard::Dashboard;
use typr::ui::components::status_line::StatusLine;
use typr::ui::components::typing_area::TypingArea;
use typr::ui::layout::{AppLayout, WINDOW_LINES};
use typr::ui::theme::Theme;

const KEYBINDS: &str = "TUI Keybinds:
- tab: Toggle modes
- up/right: Increase time/words
- down/left: Decrease time/words
- enter: Start, finish zen mode, restart
- esc: Quit";

#[derive(Parser)]
#[command(
    name = "typr",
    version,
    about = "A terminal-based typing speed test.",
    after_help = KEYBINDS,
    disable_version_flag = true
)]
struct Cli {
    #[arg(short = 'v', long, action = ArgAction::Version, help = "Print version")]
    version: Option<bool>,

    #[arg(short, long, value_enum, help = "Test mode")]
    mode: Option<Mode>,

    #[arg(short, long, value_name = "SECS", help = "Duration of a timed test")]
    time: Option<u64>,

    #[arg(short, long, help = "Number of words in a words test")]
    words: Option<usize>,

    #[arg(long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, value_name = "NAME", help = "Word list name")]
    word_list: Option<String>,

    #[arg(long, value_name = "PATH", help = "Write debug logs to this file (filter with RUST_LOG)")]
    log_file: Option<PathBuf>,
}

fn configure_logging(path: &Path) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .context("log file path has no file name")?
        .to_string_lossy()
        .into_owned();

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = match &cli.log_file {
        Some(path) => Some(configure_logging(path)?),
        None => None,
    };

    let mut config = Config::load().context("loading config")?;
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(secs) = cli.time {
        if secs == 0 || secs > MAX_DURATION_SECS {
            bail!("--time must be between 1 and {MAX_DURATION_SECS} seconds");
        }
        config.duration_secs = secs;
    }
    if let Some(words) = cli.words {
        if words == 0 {
            bail!("--words must be at least 1");
        }
        config.word_count = words;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(word_list) = cli.word_list {
        config.word_list = word_list;
    }

    let theme = match Theme::load(&config.theme) {
        Some(theme) => theme,
        None => bail!(
            "unknown theme `{}` (available: {})",
            config.theme,
            Theme::available_themes().join(", ")
        ),
    };
    let words = WordList::load(&config.word_list)
        .with_context(|| format!("loading word list `{}`", config.word_list))?;
    let (width, height) = crossterm::terminal::size().context("terminal size unavailable")?;
    info!(width, height, word_list = words.name(), theme = %theme.name, "starting");

    let mut app = App::new(config, theme, words, width);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = app.persist() {
        tracing::warn!("could not save config: {err:#}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        let event = events.next()?;
        let now = Instant::now();
        match event {
            AppEvent::Key(key) => app.handle_key(key, now),
            AppEvent::Resize(width) => app.on_resize(width, now),
            AppEvent::Tick => {}
        }
        app.on_tick(now);

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let session = &app.session;

    let bg = Block::default().style(Style::default().bg(colors.bg()).fg(colors.fg()));
    frame.render_widget(bg, area);

    let hint = match (session.phase(), session.config().mode) {
        (Phase::Menu, _) => "tab: mode • up/down: adjust • esc: quit",
        (Phase::Typing, Mode::Zen) => "enter: finish • esc: quit",
        (Phase::Typing, _) => "esc: quit",
        (Phase::Results, _) => "Press Enter to restart • Esc to quit",
    };

    let layout = match session.phase() {
        Phase::Menu | Phase::Typing => {
            let layout = AppLayout::new(area, WINDOW_LINES);
            let status = StatusLine::new(
                session.phase(),
                session.config(),
                session.remaining_secs(),
                session.current_word(),
                &app.theme,
            );
            frame.render_widget(status, layout.status);
            let typing = TypingArea::new(session.engine(), session.lines(), &app.theme);
            frame.render_widget(typing, layout.main);
            layout
        }
        Phase::Results => {
            let layout = AppLayout::new(area, 3);
            frame.render_widget(Dashboard::new(session.stats(), &app.theme), layout.main);
            layout
        }
    };

    let footer = Paragraph::new(Span::styled(hint, Style::default().fg(colors.hint())))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout.footer);
}
