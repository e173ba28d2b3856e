use std::io::{self, Write};
use std::path::Path;

use git_hash::hex::is_hex_digest;
use git_utils::color::{self, Color, ColorMode};

use crate::blob::{check_path, BlobHasher};
use crate::{Result, VerifyError};

/// How a validation reports its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidateOptions {
    /// Suppress the status line and only return the boolean result.
    pub quiet: bool,
    /// Whether the status line is colored.
    pub color: ColorMode,
}

impl ValidateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }
}

/// Result of comparing a file's blob id with an expected hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Match,
    Mismatch,
}

impl Status {
    pub fn is_match(self) -> bool {
        self == Status::Match
    }

    /// The fixed status line for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Status::Match => "OK: hashes match",
            Status::Mismatch => "FAILED: hashes do not match",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Status::Match => Color::Green,
            Status::Mismatch => Color::Red,
        }
    }
}

impl From<bool> for Status {
    fn from(matched: bool) -> Self {
        if matched {
            Status::Match
        } else {
            Status::Mismatch
        }
    }
}

/// Checks files against expected blob hashes.
///
/// Unless quiet, each validation writes one status line to the sink. Read
/// failures are returned as errors in both modes.
pub struct HashValidator<W = io::Stdout> {
    out: W,
    options: ValidateOptions,
    use_color: bool,
}

impl HashValidator<io::Stdout> {
    /// Validator reporting to stdout, coloring only when stdout is a terminal
    /// in `Auto` mode.
    pub fn stdout(options: ValidateOptions) -> Self {
        Self {
            out: io::stdout(),
            use_color: color::use_color_stdout(options.color),
            options,
        }
    }
}

impl<W: Write> HashValidator<W> {
    /// Validator reporting to an arbitrary sink. The sink is treated as a
    /// non-terminal, so `Auto` mode writes plain text.
    pub fn new(out: W, options: ValidateOptions) -> Self {
        Self {
            out,
            use_color: color::use_color(options.color, false),
            options,
        }
    }

    pub fn options(&self) -> &ValidateOptions {
        &self.options
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Compare without producing any output.
    pub fn check(&self, path: impl AsRef<Path>, expected: &str) -> Result<Status> {
        let path = path.as_ref();
        check_path(path)?;
        if expected.trim().is_empty() {
            return Err(VerifyError::InvalidArgument("expected hash is empty".into()));
        }
        if !is_hex_digest(expected) {
            tracing::debug!(expected, "expected hash is not a 40-digit hex string");
        }

        let actual = BlobHasher::compute_oid(path)?;
        let status = Status::from(actual.matches_hex(expected));
        tracing::debug!(path = %path.display(), %actual, expected, ?status, "compared blob hash");
        Ok(status)
    }

    /// Compare and report. Returns whether the hashes match.
    ///
    /// In quiet mode nothing is written; otherwise one status line is.
    pub fn validate(&mut self, path: impl AsRef<Path>, expected: &str) -> Result<bool> {
        let status = self.check(path, expected)?;
        if !self.options.quiet {
            let line = color::colorize(status.message(), status.color(), self.use_color);
            writeln!(self.out, "{line}").map_err(VerifyError::Output)?;
        }
        Ok(status.is_match())
    }
}

/// Validate `path` against `expected`, reporting to stdout unless `quiet`.
pub fn validate(path: impl AsRef<Path>, expected: &str, quiet: bool) -> Result<bool> {
    HashValidator::stdout(ValidateOptions::new().quiet(quiet)).validate(path, expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lines_are_distinct() {
        assert_ne!(Status::Match.message(), Status::Mismatch.message());
        assert_eq!(Status::Match.color(), Color::Green);
        assert_eq!(Status::Mismatch.color(), Color::Red);
    }

    #[test]
    fn status_from_bool() {
        assert_eq!(Status::from(true), Status::Match);
        assert!(!Status::from(false).is_match());
    }

    #[test]
    fn options_builder() {
        let opts = ValidateOptions::new().quiet(true).color(ColorMode::Never);
        assert!(opts.quiet);
        assert_eq!(opts.color, ColorMode::Never);
        assert_eq!(ValidateOptions::default().color, ColorMode::Auto);
        assert!(!ValidateOptions::default().quiet);
    }

    #[test]
    fn blank_expected_rejected_before_reading() {
        let validator = HashValidator::new(Vec::new(), ValidateOptions::new());
        let err = validator.check("/nonexistent/blob", "  ").unwrap_err();
        assert!(matches!(err, VerifyError::InvalidArgument(_)));
    }

    #[test]
    fn always_color_on_plain_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abc.txt");
        std::fs::write(&path, b"abc").unwrap();

        let opts = ValidateOptions::new().color(ColorMode::Always);
        let mut validator = HashValidator::new(Vec::new(), opts);
        assert!(validator
            .validate(&path, "f2ba8f84ab5c1bce84a7b441cb1959cfc7093b7f")
            .unwrap());
        let out = String::from_utf8(validator.into_inner()).unwrap();
        assert_eq!(out, "\x1b[32mOK: hashes match\x1b[0m\n");
    }
}
