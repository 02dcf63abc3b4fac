//! Source formatting collaborators.
//!
//! Generated text is handed to a [`Formatter`] before it is written. The
//! default [`PrettierFormatter`] pipes the text through an external
//! `prettier` process in TypeScript mode; [`PassthroughFormatter`] leaves the
//! text untouched.

use std::io::{self, ErrorKind, Write};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

/// Language mode passed to the external formatter.
pub const PRETTIER_PARSER: &str = "typescript";

/// Default formatter command.
pub const DEFAULT_PRETTIER_COMMAND: &str = "prettier";

/// Errors raised while formatting generated source.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The formatter could not be started or fed
    #[error("Failed to run formatter `{command}`: {source}")]
    Spawn {
        /// Command line that was attempted
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The formatter exited unsuccessfully, usually because the input did not parse
    #[error("Formatter `{command}` rejected the generated source ({status}): {stderr}")]
    Rejected {
        /// Command line that was run
        command: String,
        /// Exit status of the formatter
        status: ExitStatus,
        /// Diagnostics printed by the formatter
        stderr: String,
    },
    /// The formatter produced output that is not valid UTF-8
    #[error("Formatter `{command}` produced non UTF-8 output")]
    Utf8 {
        /// Command line that was run
        command: String,
        /// Underlying decoding error
        #[source]
        source: std::string::FromUtf8Error,
    },
    /// The formatter command line is empty
    #[error("Formatter command is empty")]
    EmptyCommand,
}

/// A source formatter.
pub trait Formatter {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Format `source`, returning the reformatted text.
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Formats TypeScript through an external `prettier` executable.
#[derive(Debug, Clone)]
pub struct PrettierFormatter {
    command: String,
}

impl PrettierFormatter {
    /// Create a formatter running `command`.
    ///
    /// The command line is split on whitespace, so wrappers such as
    /// `npx prettier` work. `--parser typescript` is always appended.
    pub fn new(command: impl Into<String>) -> Self { Self { command: command.into() } }

    /// The configured command line
    pub fn command(&self) -> &str { &self.command }

    fn command_line(&self) -> String { format!("{} --parser {}", self.command, PRETTIER_PARSER) }
}

impl Default for PrettierFormatter {
    fn default() -> Self { Self::new(DEFAULT_PRETTIER_COMMAND) }
}

impl Formatter for PrettierFormatter {
    fn name(&self) -> &str { "prettier" }

    fn format(&self, source: &str) -> Result<String, FormatError> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or(FormatError::EmptyCommand)?;
        let command = self.command_line();

        let mut child = Command::new(program)
            .args(parts)
            .arg("--parser")
            .arg(PRETTIER_PARSER)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FormatError::Spawn { command: command.clone(), source })?;

        // Feed stdin from a separate thread while `wait_with_output` drains
        // stdout and stderr, so a command that streams output cannot stall
        let stdin = child.stdin.take();
        let input = source.as_bytes();
        let (output, written) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(input),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::new(ErrorKind::Other, "stdin writer panicked")));
            (output, written)
        });

        let output =
            output.map_err(|source| FormatError::Spawn { command: command.clone(), source })?;
        if let Err(source) = written {
            // An early exit is reported through the exit status below
            if source.kind() != ErrorKind::BrokenPipe {
                return Err(FormatError::Spawn { command, source });
            }
        }

        if !output.status.success() {
            return Err(FormatError::Rejected {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|source| FormatError::Utf8 { command, source })
    }
}

/// Returns the source unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFormatter;

impl Formatter for PassthroughFormatter {
    fn name(&self) -> &str { "passthrough" }

    fn format(&self, source: &str) -> Result<String, FormatError> { Ok(source.to_string()) }
}
