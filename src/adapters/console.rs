use crate::domain::ports::Notifier;
use crate::utils::error::Result;
use std::io::{BufRead, Write};
use std::sync::{Mutex, MutexGuard};

struct ConsoleIo<R, W> {
    input: R,
    output: W,
}

/// Line-oriented terminal shared by the session loop and the form's prompts.
pub struct Console<R: BufRead, W: Write> {
    io: Mutex<ConsoleIo<R, W>>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: Mutex::new(ConsoleIo { input, output }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ConsoleIo<R, W>> {
        self.io.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Prints `prompt` and reads one line without its line ending.
    /// Returns `None` at end of input. Bytes that are not UTF-8 are replaced
    /// with U+FFFD instead of failing the read.
    pub fn read_line(&self, prompt: &str) -> Result<Option<String>> {
        let mut io = self.lock();
        write!(io.output, "{}", prompt)?;
        io.output.flush()?;

        let mut raw = Vec::new();
        if io.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn print(&self, text: &str) -> Result<()> {
        let mut io = self.lock();
        writeln!(io.output, "{}", text)?;
        io.output.flush()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.io
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .output
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}

impl<R, W> Notifier for Console<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn alert(&self, message: &str) {
        let framed = format!("\n*** {} ***\n", message);
        if let Err(e) = self.print(&framed) {
            tracing::warn!("Could not show alert: {}", e);
        }
    }

    fn confirm(&self, question: &str) -> bool {
        match self.read_line(&format!("{} [s/N]: ", question)) {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }
}
