//! The interactive [`Console`] over standard input and output.

use std::io::{self, BufRead, IsTerminal, Write};

use owo_colors::{OwoColorize, Stream};

use crate::error::Result;
use crate::port::outbound::console::{Console, Tone};

/// Moves the cursor home and erases the screen.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// A line console over any reader and writer.
///
/// Tones map to the catalog palette: categories green, products magenta,
/// discontinued lines dark gray. Whether color is written at all is
/// decided by `owo-colors` from stdout and `--color`.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// The process console. Clearing only happens when stdout is a terminal.
    #[must_use]
    pub fn stdio(clear_screen: bool) -> Self {
        let output = io::stdout();
        let clear_screen = clear_screen && output.is_terminal();
        Self::new(io::stdin().lock(), output, clear_screen)
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Recover the writer, for tests that capture output.
    pub fn into_output(self) -> W {
        self.output
    }
}

fn paint(tone: Tone, text: &str) -> String {
    match tone {
        Tone::Plain => text.to_string(),
        Tone::Category => text
            .if_supports_color(Stream::Stdout, |t| t.green())
            .to_string(),
        Tone::Product => text
            .if_supports_color(Stream::Stdout, |t| t.magenta())
            .to_string(),
        Tone::Supplier => text
            .if_supports_color(Stream::Stdout, |t| t.cyan())
            .to_string(),
        Tone::Muted => text
            .if_supports_color(Stream::Stdout, |t| t.bright_black())
            .to_string(),
        Tone::Success => text
            .if_supports_color(Stream::Stdout, |t| t.green())
            .to_string(),
        Tone::Warning => text
            .if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string(),
        Tone::Error => text
            .if_supports_color(Stream::Stdout, |t| t.red())
            .to_string(),
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn show(&mut self, tone: Tone, text: &str) -> Result<()> {
        writeln!(self.output, "{}", paint(tone, text))?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        Ok(())
    }
}
