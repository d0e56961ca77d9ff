//! Command interpreter running on its own thread.
//!
//! Reads committed lines through an [`InputReader`] and answers through
//! [`OutputWriter`]s, exactly like a program talking to stdin / stdout.

use game_console::{ConsoleHandle, InputReader, OutputWriter};
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

/// What a command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    Clear,
    Echo(&'a str),
    Error(&'a str),
    Quit,
    Empty,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        match name {
            "" => Command::Empty,
            "help" => Command::Help,
            "clear" => Command::Clear,
            "echo" => Command::Echo(rest.trim()),
            "error" => Command::Error(rest.trim()),
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(name),
        }
    }
}

/// Start the interpreter. It stops on `quit` or when the console goes away.
pub fn spawn(handle: ConsoleHandle, running: Arc<AtomicBool>) -> JoinHandle<()> {
    thread::spawn(move || {
        if let Err(e) = run(handle, &running) {
            log::debug!("Command thread stopped: {}", e);
        }
        running.store(false, Ordering::SeqCst);
    })
}

fn run(handle: ConsoleHandle, running: &AtomicBool) -> io::Result<()> {
    let reader = InputReader::new(handle.clone());
    let mut out = OutputWriter::stdout(handle.clone());
    let mut err = OutputWriter::stderr(handle.clone());

    writeln!(out, "Type 'help' for a list of commands.")?;

    while running.load(Ordering::SeqCst) {
        let line = reader.read_line().map_err(io::Error::other)?;
        log::info!("Command: {}", line);

        match Command::parse(&line) {
            Command::Help => {
                writeln!(out, "help          this text")?;
                writeln!(out, "echo <text>   print text")?;
                writeln!(out, "error <text>  print text as an error")?;
                writeln!(out, "clear         clear the scrollback")?;
                writeln!(out, "quit          leave (or press Esc)")?;
            }
            Command::Clear => handle.clear().map_err(io::Error::other)?,
            Command::Echo(text) => writeln!(out, "{}", text)?,
            Command::Error(text) => writeln!(err, "{}", text)?,
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(name) => writeln!(err, "Unknown command: {}", name)?,
        }
    }

    Ok(())
}
