use anyhow::{Context, Result};
use game_console::{
    Console, ConsoleConfig, ConsoleEvent, ConsoleLogger, KeyboardDispatcher, OutputWriter, PASTE,
    Viewport,
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    widgets::Paragraph,
};
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

mod commands;
mod host;
mod keys;
mod logger;

use host::{PasteBuffer, TERMINAL_FONT, TerminalGlyphs, TerminalSink};
use keys::KeyInput;

fn main() -> Result<()> {
    let config = ConsoleConfig::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {:#}", err);
    }
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: ConsoleConfig) -> Result<()> {
    let size = terminal.size()?;
    let viewport = Viewport::new(size.width as u32, size.height as u32);
    let config = host::terminal_config(config, viewport);
    let mut console = Console::builder()
        .config(config.clone())
        .glyphs(Arc::new(TerminalGlyphs))
        .viewport(viewport)
        .default_font(TERMINAL_FONT)
        .build()
        .context("Failed to build console")?;

    let console_logger = ConsoleLogger::from_config(console.handle(), &config)?;
    let log_file = logger::init(console_logger)?;
    log::info!("Starting game-console-demo, logging to {}", log_file.display());

    let paste = Arc::new(PasteBuffer::default());
    let dispatcher = KeyboardDispatcher::new(paste.clone());
    dispatcher.set_receiver(Some(Arc::new(console.handle())));

    let mut out = OutputWriter::stdout(console.handle());
    writeln!(out, "Hello world!")?;
    let mut err = OutputWriter::stderr(console.handle());
    write!(err, "Hello ")?;
    writeln!(err, "error!")?;

    let running = Arc::new(AtomicBool::new(true));
    let command_thread = commands::spawn(console.handle(), running.clone());

    let start = Instant::now();
    while running.load(Ordering::SeqCst) {
        for event in console.update(start.elapsed()) {
            if let ConsoleEvent::LinesEvicted(count) = event {
                log::trace!("Scrolled {} lines out", count);
            }
        }

        terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(
                Paragraph::new("game-console demo: type into the console, Esc quits"),
                area,
            );
            console.draw(&mut TerminalSink::new(frame.buffer_mut()));
        })?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match keys::map_key(key) {
                Some(KeyInput::Quit) => running.store(false, Ordering::SeqCst),
                Some(KeyInput::Char(c)) => dispatcher.on_char(c)?,
                Some(KeyInput::Special(special)) => dispatcher.on_key_down(special)?,
                None => {}
            },
            Event::Paste(text) => {
                paste.stash(text);
                dispatcher.on_char(PASTE)?;
            }
            Event::Resize(width, height) => {
                let viewport = Viewport::new(width as u32, height as u32);
                console.set_position(host::panel_rect(viewport, console.line_count()));
            }
            _ => {}
        }
    }

    dispatcher.set_receiver(None);
    // dropping the console aborts the command thread's pending read
    drop(console);
    if command_thread.join().is_err() {
        log::warn!("Command thread panicked");
    }

    log::info!("Exiting game-console-demo");
    Ok(())
}
