//! Line-oriented operator console shared by the chat loop and the
//! confirmation gate.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// Console handle shared between the conversation loop and the gate.
pub type SharedConsole = Arc<Mutex<Console>>;

pub struct Console {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
}

impl Console {
    pub fn new(input: impl BufRead + Send + 'static, output: impl Write + Send + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }

    pub fn shared(self) -> SharedConsole {
        Arc::new(Mutex::new(self))
    }

    /// Prints `prompt` without a newline and reads one line.
    ///
    /// Returns `None` at end of input. Only the line terminator is removed.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }
}

/// Locks the shared console, recovering from a poisoned lock.
pub fn lock(console: &SharedConsole) -> MutexGuard<'_, Console> {
    console.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
