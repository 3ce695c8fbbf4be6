//! Terminal output styling helpers for the headless report path

use console::style;

/// Print the application banner
pub fn print_banner() {
    println!();
    println!(
        "{}",
        style(" ██████╗ █████╗ ██████╗ ██████╗ ██╗ ██████╗ ").red().bold()
    );
    println!(
        "{}",
        style("██╔════╝██╔══██╗██╔══██╗██╔══██╗██║██╔═══██╗").red().bold()
    );
    println!(
        "{}",
        style("██║     ███████║██████╔╝██║  ██║██║██║   ██║").red().bold()
    );
    println!(
        "{}",
        style("██║     ██╔══██║██╔══██╗██║  ██║██║██║   ██║").red().bold()
    );
    println!(
        "{}",
        style("╚██████╗██║  ██║██║  ██║██████╔╝██║╚██████╔╝").red().bold()
    );
    println!(
        "{}",
        style(" ╚═════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═════╝ ╚═╝ ╚═════╝ ").red().bold()
    );
    println!(
        "  {} {}",
        style("♥").red().bold(),
        style("CardioCheck · Know your heart").dim()
    );
    println!();
}

/// Print a section header
pub fn print_section_header(title: &str) {
    println!();
    println!("{}", style(format!("━━━ {} ━━━", title)).cyan().bold());
    println!();
}

/// Print a success message with a checkmark
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an informational message
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", style("⚠").yellow().bold(), message);
}
