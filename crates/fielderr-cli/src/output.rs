//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with specialized
//! support for field error lists.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use fielderr_core::{ErrorList, ErrorType, FieldError};
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a field error list
    fn format_error_list(&self, errors: &ErrorList, use_color: bool) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_error_list(&self, errors: &ErrorList, use_color: bool) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_error_list_human(errors, use_color)),
            _ => self.format(errors),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!("Outputting data: {}", formatted);

        if self.format == OutputFormat::Human {
            self.writeln(&formatted)
        } else {
            self.write(&formatted)
        }
    }

    /// Write a field error list with specialized formatting
    pub fn error_list(&mut self, errors: &ErrorList) -> Result<()> {
        let formatted = self.format.format_error_list(errors, self.use_color)?;
        self.writeln(formatted.trim_end())
    }
}

/// Format a field error list for human reading
fn format_error_list_human(errors: &ErrorList, use_color: bool) -> String {
    if errors.is_empty() {
        let line = "✅ No field errors";
        return if use_color {
            format!("{}\n", line.green())
        } else {
            format!("{}\n", line)
        };
    }

    let mut output = format!("❌ {} Field Error(s)\n\n", errors.len());
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, format_field_error_human(error, use_color)));
    }
    output
}

/// Format a single field error for human reading
fn format_field_error_human(error: &FieldError, use_color: bool) -> String {
    let label = type_label(error.error_type);
    let label = if use_color {
        match error.error_type {
            ErrorType::Required | ErrorType::Forbidden => label.yellow().bold().to_string(),
            ErrorType::Invalid => label.red().bold().to_string(),
            ErrorType::Internal => label.magenta().bold().to_string(),
        }
    } else {
        label.to_string()
    };

    let field = if error.field.is_empty() {
        "<root>"
    } else {
        error.field.as_str()
    };

    let mut output = format!("[{}] {}\n", label, field);
    output.push_str(&format!("   💬 {}\n", error.error_body()));
    output
}

fn type_label(error_type: ErrorType) -> &'static str {
    match error_type {
        ErrorType::Required => "required",
        ErrorType::Invalid => "invalid",
        ErrorType::Forbidden => "forbidden",
        ErrorType::Internal => "internal",
    }
}
