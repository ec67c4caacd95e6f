//! Live console adapter using standard input and output.

use std::io::{self, BufRead, Write};

use crate::ports::console::Console;

/// Console backed by the process's stdin and stdout.
pub struct LiveConsole;

impl Console for LiveConsole {
    fn print_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{line}") {
            tracing::warn!("failed to write to stdout: {e}");
        }
    }

    fn prompt(&self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = io::stdout().lock();
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_newline(line)))
    }
}

fn trim_newline(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}
