//! List command implementation.

use console::style;

use qforge_challenges::runners::CATALOG;

use crate::OutputFormat;

/// Execute the list command.
pub fn execute(format: OutputFormat) {
    if format == OutputFormat::Json {
        // The catalogue holds only static strings.
        if let Ok(json) = serde_json::to_string(&CATALOG) {
            println!("{json}");
        }
        return;
    }

    println!("{} Available exercises:\n", style("qforge").cyan().bold());
    for info in &CATALOG {
        println!(
            "  {:<24} {:<12} {}",
            style(info.name).bold(),
            style(info.category).dim(),
            info.input
        );
    }
}
