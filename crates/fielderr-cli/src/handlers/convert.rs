//! Convert command handler

use crate::cli::ConvertArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use fielderr_core::NestedFieldError;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Handle the convert command
pub fn handle_convert(args: ConvertArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("convert", &args.input.display().to_string());

    let tree = load_tree(&args.input)?;
    let context = config
        .conversion
        .context(args.base_path.as_deref(), args.ignore_prefix.as_deref());

    output.info(&format!(
        "Converting {} (base path '{}', ignore prefix '{}')",
        args.input.display(),
        context.base_path,
        context.ignore_prefix
    ))?;

    let errors = context.convert(Some(&tree));
    tracing::info!(count = errors.len(), "Converted field errors");

    output.error_list(&errors)?;

    if args.fail_on_errors && !errors.is_empty() {
        return Err(Error::FieldErrors {
            count: errors.len(),
        });
    }

    Ok(())
}

/// Read a nested error tree from a file or stdin
pub fn load_tree(input: &Path) -> Result<NestedFieldError> {
    if input == Path::new("-") {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(serde_json::from_str(&content)?);
    }

    if !input.exists() {
        return Err(Error::FileNotFound {
            path: input.to_path_buf(),
        });
    }

    let content = fs::read_to_string(input)?;
    let is_yaml = input
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: input.to_path_buf(),
            expected: "YAML".to_string(),
        })
    } else {
        serde_json::from_str(&content).map_err(|_| Error::InvalidFormat {
            path: input.to_path_buf(),
            expected: "JSON".to_string(),
        })
    }
}
