//! The operator console.
//!
//! Line oriented: print zero or more lines, read exactly one line, repeat.
//! Adapters decide how a [`Tone`] looks; the application only says what
//! kind of line it is printing.

use crate::error::{Error, Result};

/// Presentation hint for a printed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Category,
    Product,
    Supplier,
    /// Discontinued products and other de-emphasised lines.
    Muted,
    Success,
    Warning,
    Error,
}

/// Line-oriented operator I/O.
pub trait Console {
    /// Print one line.
    fn show(&mut self, tone: Tone, text: &str) -> Result<()>;

    /// Read one line without its terminator. `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Clear the screen between menus. A no-op where that makes no sense.
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    /// Print a plain line.
    fn say(&mut self, text: &str) -> Result<()> {
        self.show(Tone::Plain, text)
    }

    /// Read one line; end of input is [`Error::InputClosed`].
    fn answer(&mut self) -> Result<String> {
        self.read_line()?.ok_or(Error::InputClosed)
    }

    /// Print `prompt`, then read the reply.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        self.answer()
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn show(&mut self, tone: Tone, text: &str) -> Result<()> {
        (**self).show(tone, text)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}
