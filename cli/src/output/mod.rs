//! Output formatting module

pub mod name_printer;
pub mod styles;

use std::io::Write;

use console::Term;
use owo_colors::OwoColorize as _;

pub use name_printer::{NamePrinter, PrintError, PrintableObject};
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, quiet }
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }

    /// Print the identity line for `obj` to stdout.
    ///
    /// Resource identities are the command's result, so `quiet` does not
    /// suppress them.
    ///
    /// # Errors
    ///
    /// Returns an error if the object has no kind or stdout is closed.
    pub fn resource(
        &self,
        printer: &NamePrinter,
        obj: &dyn PrintableObject,
    ) -> Result<(), PrintError> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        printer.print_obj(obj, &mut lock)?;
        lock.flush()?;
        Ok(())
    }
}
