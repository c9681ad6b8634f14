// ABOUTME: User-facing terminal output and input for the launcher
// Every printed line is mirrored into the log file; also reads the delete-all confirmation

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

use crate::logging::LogHandle;

/// Where messages go and where answers come from.
pub struct Console {
    input: RefCell<Box<dyn BufRead>>,
    out: RefCell<Box<dyn Write>>,
    err: RefCell<Box<dyn Write>>,
    log: LogHandle,
}

impl Console {
    pub fn new(
        input: Box<dyn BufRead>,
        out: Box<dyn Write>,
        err: Box<dyn Write>,
        log: LogHandle,
    ) -> Self {
        Self {
            input: RefCell::new(input),
            out: RefCell::new(out),
            err: RefCell::new(err),
            log,
        }
    }

    /// The process's stdin, stdout and stderr.
    pub fn stdio(log: LogHandle) -> Self {
        Self::new(
            Box::new(io::BufReader::new(io::stdin())),
            Box::new(io::stdout()),
            Box::new(io::stderr()),
            log,
        )
    }

    pub fn log(&self) -> &LogHandle {
        &self.log
    }

    /// Informational message on stdout.
    pub fn say(&self, message: &str) {
        // Nothing sensible to do if the terminal is gone.
        let _ = writeln!(self.out.borrow_mut(), "{message}");
        if self.log.is_active() {
            info!("{}", message);
        }
    }

    /// Error message on stderr.
    pub fn alert(&self, message: &str) {
        let _ = writeln!(self.err.borrow_mut(), "{message}");
        if self.log.is_active() {
            error!("{}", message);
        }
    }

    /// Print `prompt` and read one line. `None` at end of input or on a read error.
    pub fn ask(&self, prompt: &str) -> Option<String> {
        {
            let mut out = self.out.borrow_mut();
            let _ = write!(out, "{prompt}");
            let _ = out.flush();
        }

        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}
