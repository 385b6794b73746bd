//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::directory::ServiceRecord;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print one service name per line.
pub fn print_names(services: &[&ServiceRecord]) {
    if services.is_empty() {
        info("No matching services.");
        return;
    }

    for s in services {
        println!("   {}", s.name);
    }
}

/// Print a table of services (Name, Password, Meta).
pub fn print_services_table(services: &[&ServiceRecord]) {
    if services.is_empty() {
        info("No matching services.");
        tip("Run `passman add <service> -g` to add one with a generated password.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Password", "Meta"]);

    for s in services {
        table.add_row(vec![s.name.clone(), s.secret.clone(), s.meta.clone()]);
    }

    println!("{table}");
}
