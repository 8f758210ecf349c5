use colored::Colorize;
use std::fmt;

use crate::core::notify::NotificationSink;

pub fn info(message: impl fmt::Display) {
    println!("{} {}", "[i]".blue(), message);
}

pub fn success(message: impl fmt::Display) {
    println!("{} {}", "[ok]".green(), message);
}

pub fn warning(message: impl fmt::Display) {
    println!("{} {}", "[!]".yellow(), message);
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{} {}", "[x]".red(), message);
}

pub fn section(title: impl fmt::Display) {
    println!();
    println!("{}", title.to_string().bold());
}

/// Notification sink that renders decorative banners on the terminal.
pub struct TerminalNotifier;

impl NotificationSink for TerminalNotifier {
    fn notify(&self, title: &str, body: &str) {
        println!("{} {}: {}", "[note]".cyan(), title.bold(), body);
    }
}
