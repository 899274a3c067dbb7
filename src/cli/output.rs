//! Shared CLI output helpers.
//!
//! stdout is reserved for command results (it is usually `eval`ed), so all
//! diagnostics go to stderr. Colors respect NO_COLOR.

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ config file not found: .awsenv`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ check your AWS credentials`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print raw text to stdout without a trailing newline.
pub fn raw(text: &str) {
    print!("{}", text);
}

/// Print one aligned row of the variable table.
///
/// Example: `  DB_HOST  output  database.Endpoint`
pub fn row(name: &str, name_width: usize, kind: &str, target: &str) {
    if colors_enabled() {
        println!(
            "  {:<name_width$}  {:<6}  {}",
            style(name).bold(),
            style(kind).dim(),
            style(target).cyan(),
        );
    } else {
        println!("  {:<name_width$}  {:<6}  {}", name, kind, target);
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}
