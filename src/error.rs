use std::fmt::{self, Display};

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    Lexical { line: usize },
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn lexical<S: Into<String>>(line: usize, message: S) -> Error {
        let kind = ErrorKind::Lexical { line };
        Error { kind, message: message.into() }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ErrorKind::*;
        let line = match self.kind() {
            Lexical { line } => *line,
        };

        write!(f, "[line {}] Error: {}", line, self.message)
    }
}

/// Where the scanner sends lexical errors. The scanner only ever writes
/// through `report`; whether anything went wrong is the caller's question
/// to ask of whatever implementation it passed in.
pub trait DiagnosticSink {
    fn report(&mut self, line: usize, message: &str);
}

/// Caller-owned collector of lexical errors. Replaces jlox's process-wide
/// `hadError` flag with a value the caller injects and inspects afterwards.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Error> {
        self.errors.iter()
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, line: usize, message: &str) {
        self.errors.push(Error::lexical(line, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_error_renders_with_line_number() {
        let e = Error::lexical(3, "Unexpected character '@'");
        assert_eq!(e.to_string(), "[line 3] Error: Unexpected character '@'");
    }

    #[test]
    fn diagnostics_start_clean_and_flag_after_report() {
        let mut diagnostics = Diagnostics::new();
        assert!(!diagnostics.had_error());

        diagnostics.report(1, "Unterminated String.");
        assert!(diagnostics.had_error());
        assert_eq!(diagnostics.errors().count(), 1);
    }
}
