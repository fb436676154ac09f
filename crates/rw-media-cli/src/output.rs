//! Status reporting for `rw-media convert`.
//!
//! Everything here goes to stderr. Without `--output` the converted document
//! is written to stdout, so status lines must never land there.

use std::path::Path;

use console::{Style, Term};

/// Colored stderr reporter for a conversion run.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Report directives left as source text because they failed to render.
    pub(crate) fn render_warnings(&self, warnings: &[String]) {
        for warning in warnings {
            self.styled(&self.yellow, &warning_line(warning));
        }
    }

    /// Report where the converted document went.
    ///
    /// Writing to a file is always confirmed. Writing to stdout is only
    /// summarized in verbose mode.
    pub(crate) fn finished(&self, destination: Option<&Path>, input_len: usize, verbose: bool) {
        match destination {
            Some(path) => self.styled(&self.green, &format!("Wrote {}", path.display())),
            None if verbose => {
                let _ = self.term.write_line(&converted_line(input_len));
            }
            None => {}
        }
    }

    /// Print a fatal error (red).
    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.red, msg);
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}

fn warning_line(warning: &str) -> String {
    format!("Warning: {warning}")
}

fn converted_line(input_len: usize) -> String {
    match input_len {
        1 => "Converted 1 byte".to_owned(),
        n => format!("Converted {n} bytes"),
    }
}
