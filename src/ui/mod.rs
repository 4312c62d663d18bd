// Wed Jan 15 2026 - Alex

pub mod cli;
pub mod table;

pub use cli::{Args, Command, CommandHandler};
pub use table::TableBuilder;

use colored::Colorize;

pub fn print_info(message: &str) {
    eprintln!("{} {}", "[*]".blue(), message);
}

pub fn print_success(message: &str) {
    eprintln!("{} {}", "[+]".green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "[!]".red(), message);
}
