//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::harness::ExecutionResult;
use crate::registry::{AlgorithmRegistry, AlgorithmUnit, Category};
use crate::report::History;
use crate::utils::{format_duration, SweepPoint};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        // Clamp width to avoid layout issues on very small or very large terminals
        (w as usize).clamp(40, 200)
    } else {
        80 // Safe default
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print unit info box
pub fn print_unit_info_box(unit: &dyn AlgorithmUnit) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let lines = [
        format!("Algorithm: {} ({})", unit.name(), unit.id()),
        format!("Category:  {}", unit.category()),
        unit.description().to_string(),
        format!("Input:  {}", unit.input_shape().describe()),
        format!("Output: {}", unit.output_shape()),
    ];

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);
    let row = |line: &str| {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        )
    };

    println!("┌{}┐", border);
    for line in &lines[..3] {
        row(line);
    }
    println!("├{}┤", border);
    for line in &lines[3..] {
        row(line);
    }
    println!("└{}┘", border);
    println!();
}

/// Print the outcome of a single run
pub fn print_result(result: &ExecutionResult) {
    match (result.output(), result.failure()) {
        (Some(output), _) => println!("  ✅ {}", output),
        (_, Some(failure)) => println!("  ❌ {} failed: {}", failure.stage.as_str(), failure.message),
        (None, None) => {}
    }
    println!(
        "  Time: {}   Operations: {}",
        format_duration(result.elapsed),
        result.operations
    );
    println!();
}

/// Print one row per sweep point
pub fn print_sweep_table(points: &[SweepPoint]) {
    if points.is_empty() {
        println!("  (this algorithm does not generate inputs)");
        return;
    }

    let term_width = get_term_width();
    // 10 + 14 + 14 + 3 spaces + 2 indent
    let fixed_width = 43;
    let status_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = status_width + 38 + 3;

    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:>10} {:>14} {:>14} {:<s_width$}",
        "Size",
        "Time",
        "Operations",
        "Status",
        s_width = status_width
    );
    println!("  {}", "─".repeat(table_width));

    for point in points {
        let status = match point.result.error() {
            None => "ok".to_string(),
            Some(error) => error.to_string(),
        };
        println!(
            "  {:>10} {:>14} {:>14} {:<s_width$}",
            point.size,
            format_duration(point.result.elapsed),
            point.result.operations,
            truncate(&status, status_width),
            s_width = status_width
        );
    }
    println!();
}

/// Print one line per recorded run, then the success tally
pub fn print_history(history: &History) {
    let term_width = get_term_width();
    let status_width = term_width.saturating_sub(2 + 5 + 24 + 14 + 3).max(15);

    println!("  Run history");
    println!("  {}", "─".repeat(5 + 24 + 14 + status_width + 3));
    for (n, report) in history.iter().enumerate() {
        let field = |key| report.get(key).unwrap_or_default();
        let status = match field("outcome") {
            "success" => "ok".to_string(),
            _ => format!("{} failed: {}", field("stage"), field("error")),
        };
        println!(
            "  {:>5} {:<24} {:>14} {}",
            n + 1,
            truncate(field("id"), 24),
            field("operations"),
            truncate(&status, status_width)
        );
    }
    println!(
        "  {} of {} runs succeeded",
        history.successes(),
        history.len()
    );
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Algorithm Workbench ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: algo-bench [OPTIONS] [ALGORITHM]");
    println!();
    println!("Options:");
    println!("  --list, -l        List all available algorithms");
    println!("  --help, -h        Show this help message");
    println!("  --category C      Restrict --list to one category (e.g. sorting)");
    println!("  --input JSON      Raw input for the algorithm (default: its sample input)");
    println!("  --file PATH       Read the raw input from a JSON file");
    println!("  --budget N        Fixed step budget of N operations");
    println!("  --factor N        Step budget of N times the worst case (default: 10)");
    println!("  --sizes SIZES     Comma-separated sizes for a benchmark sweep");
    println!("  --seed N          Random seed for generated inputs (default: time-based)");
    println!("  --csv PATH        Export report rows to CSV");
    println!("  --json            Print the report as JSON");
    println!("  --no-pin          Do not pin the thread to a CPU core while running");
    println!();
    println!("Arguments:");
    println!("  ALGORITHM         Id of the algorithm to run (see --list)");
    println!();
    println!("Examples:");
    println!("  algo-bench --list");
    println!("  algo-bench bubble-sort --input '[5,3,1,4,2]'");
    println!("  algo-bench binary-search --input '{{\"values\":[1,3,5],\"target\":3}}'");
    println!("  algo-bench merge-sort --sizes 100,1000,10000 --seed 12345");
    println!("  algo-bench fibonacci --input 90 --json");
    println!("  algo-bench rsa --input '{{\"action\":\"encrypt\",\"message\":\"hi\",\"public_key\":[17,3233]}}'");
    println!();
    println!("Set RUST_LOG=debug for execution traces.");
}

/// Print the registered algorithms grouped by category
pub fn print_available_algorithms(registry: &AlgorithmRegistry, only: Option<Category>) {
    println!("Available algorithms:");
    println!();
    for category in registry.list_categories() {
        if only.is_some_and(|c| c != category) {
            continue;
        }
        println!("  {}", category);
        for id in registry.list_by_category(category) {
            if let Ok(unit) = registry.lookup(id) {
                println!("    {:<24} - {}", id, unit.description());
            }
        }
        println!();
    }
}
