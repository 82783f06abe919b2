use crate::language::Language;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    println!("{} {}", Icons::PACKAGE, text.style(theme().header.clone()));
}

/// Title line followed by a dimmed subtitle
pub fn banner(title: &str, subtitle: &str) {
    println!();
    println!("{} {}", Icons::PUZZLE, title);
    println!("   {}", subtitle.style(theme().dim.clone()));
    println!();
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.style(theme().header.clone()));
}

pub fn dim(text: &str) -> String {
    text.style(theme().dim.clone()).to_string()
}

pub fn muted(text: &str) -> String {
    text.style(theme().muted.clone()).to_string()
}

/// Language name in its accent colour
pub fn language(language: Language) -> String {
    language.as_str().style(theme().language(language)).to_string()
}

/// Indented source block
pub fn code_block(source: &str) {
    for line in source.lines() {
        println!("  {}", line.style(theme().code.clone()));
    }
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(theme().dim.clone()), value);
}
