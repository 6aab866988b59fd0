//! Conversion demonstration example
//!
//! Copyright (c) 2025 Fielderr Team
//! Licensed under the Apache-2.0 license

use fielderr_core::{
    classify_message, convert, ConversionContext, FieldPath, NestedFieldError,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Fielderr Conversion Demo ===\n");

    demo_conversion();

    println!();

    demo_prefix_filter()?;

    println!();

    demo_classification();

    Ok(())
}

fn demo_conversion() {
    println!("--- Nested Tree Conversion ---");

    let tree = NestedFieldError::aggregate([
        NestedFieldError::new("missing field(s)").with_paths(["name"]),
        NestedFieldError::new("invalid value: -1").with_paths(["replicas"]),
        NestedFieldError::new("expected exactly one, got both").with_paths(["image", "imageRef"]),
        // Same as the first leaf, dropped on output
        NestedFieldError::new("missing field(s)").with_paths(["name"]),
    ]);

    let errors = convert(Some(&tree), &FieldPath::new("spec"));
    println!("{} field error(s):", errors.len());
    for error in &errors {
        println!("   {}", error);
    }
}

fn demo_prefix_filter() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Prefix Filtering ---");

    // Trees usually arrive as JSON from another component
    let tree: NestedFieldError = serde_json::from_str(
        r#"{
            "errors": [
                {"message": "missing field(s)", "paths": ["template.containers[0].image"]},
                {"message": "missing field(s)", "paths": ["status.url"]}
            ]
        }"#,
    )?;

    let context = ConversionContext::new(FieldPath::new("spec"))
        .with_ignore_prefix(FieldPath::new("template"));
    let errors = context.convert(Some(&tree));

    println!("{}", serde_json::to_string_pretty(&errors)?);
    Ok(())
}

fn demo_classification() {
    println!("--- Message Classification ---");

    for message in [
        "missing field(s)",
        "invalid value: 42",
        "invalid key name foo/bar",
        "Internal Error",
        "something else went wrong",
    ] {
        let category = classify_message(message);
        println!("   {:<28} -> {} ({})", message, category, category.error_type());
    }
}
