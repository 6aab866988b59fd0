//! Classify command handler

use crate::cli::{ClassifyArgs, OutputFormat};
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use fielderr_core::classify_message;
use serde_json::json;

/// Handle the classify command
pub fn handle_classify(args: ClassifyArgs, output: &mut OutputWriter) -> Result<()> {
    if args.message.trim().is_empty() {
        return Err(Error::invalid_args("message must not be empty"));
    }

    let category = classify_message(&args.message);
    let error_type = category.error_type();
    tracing::debug!(message = %args.message, %category, "Classified message");

    match output.format() {
        OutputFormat::Human => output.writeln(&format!(
            "{} ({})",
            category,
            error_type.as_str()
        )),
        _ => output.data(&json!({
            "message": args.message,
            "category": category.to_string(),
            "type": error_type,
        })),
    }
}
