//! List the style and color-scheme catalogs.

use crate::StylesArgs;
use anyhow::Result;
use epoxy_style::{DEFAULT_STYLE, schemes, styles};
use serde_json::json;

/// Runs the styles command.
pub fn run(args: StylesArgs) -> Result<()> {
    if args.json {
        let out = json!({
            "defaultStyle": DEFAULT_STYLE,
            "styles": styles()
                .map(|e| json!({ "name": e.name, "summary": e.summary, "profile": e.profile }))
                .collect::<Vec<_>>(),
            "colorSchemes": schemes()
                .map(|e| json!({ "name": e.name, "tint": e.tint }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Styles:");
    for entry in styles() {
        let marker = if entry.name == DEFAULT_STYLE { " (default)" } else { "" };
        println!("  {:<24} {}{}", entry.name, entry.summary, marker);
    }
    println!();
    println!("Color schemes:");
    for entry in schemes() {
        let t = entry.tint;
        println!(
            "  {:<24} rgb({:>3}, {:>3}, {:>3}) @ {:.2}",
            entry.name, t.r, t.g, t.b, t.opacity
        );
    }
    Ok(())
}
