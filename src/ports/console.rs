//! Console port for operator-facing output and prompts.

use std::io;

/// Line-oriented console used for banners, prompts and diagnostics.
pub trait Console: Send + Sync {
    /// Prints one line of output.
    fn print_line(&self, line: &str);

    /// Prints `prompt` without a trailing newline and reads one line of input.
    ///
    /// Returns `Ok(None)` at end of input. The returned line has its trailing
    /// newline removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying stream cannot be read.
    fn prompt(&self, prompt: &str) -> io::Result<Option<String>>;
}

impl<T: Console + ?Sized> Console for std::sync::Arc<T> {
    fn print_line(&self, line: &str) {
        (**self).print_line(line);
    }

    fn prompt(&self, prompt: &str) -> io::Result<Option<String>> {
        (**self).prompt(prompt)
    }
}
