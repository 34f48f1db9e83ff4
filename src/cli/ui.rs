use crossterm::style::{Stylize, style};

use crate::{
    domain::{
        file::{FileInfo, FilePath, parse_line_number},
        ports::{config::AppConfig, input::InputSource},
    },
    error::AppError,
};

pub const MENU_PROMPT: &str = "Choose an option (1-6):";

pub fn main_menu(config: &AppConfig) {
    println!();
    println!("{}", paint(config, "==== FILE MANAGER APP ====", Tone::Title));
    println!("1. 📖 Read a File");
    println!("2. ✍️ Write a New File");
    println!("3. 🔄 Modify File (Append/Overwrite/Insert)");
    println!("4. ❌ Delete a File");
    println!("5. ℹ️ View File Info");
    println!("6. 🚪 Exit");
}

pub fn modify_menu(config: &AppConfig) {
    println!("{}", paint(config, "Choose modification type:", Tone::Prompt));
    println!("1. Append");
    println!("2. Overwrite");
    println!("3. Insert at Line");
}

pub fn path_prompt(input: &mut dyn InputSource, message: &str) -> Result<FilePath, AppError> {
    FilePath::new(&input.line(message)?)
}

pub fn line_number_prompt(input: &mut dyn InputSource) -> Result<usize, AppError> {
    parse_line_number(&input.line("Enter line number to insert at:")?)
}

/// Collect lines until the configured sentinel.
pub fn text_block(
    input: &mut dyn InputSource,
    config: &AppConfig,
    action: &str,
) -> Result<Vec<String>, AppError> {
    let message = format!("{} (type '{}' to finish):", action, config.sentinel);
    input.block(&paint(config, &message, Tone::Prompt), &config.sentinel)
}

pub fn numbered_line(config: &AppConfig, number: usize, rendered: &str) -> String {
    format!(
        "{}{}",
        paint(config, &format!("{:>3} | ", number), Tone::Title),
        rendered
    )
}

pub fn file_info(config: &AppConfig, info: &FileInfo) {
    println!();
    println!("{}", paint(config, "--- FILE INFO ---", Tone::Info));
    println!("Name: {}", info.name);
    println!("Size: {} bytes", info.size);
    println!("Created: {}", info.created_display());
    println!("Last Modified: {}", info.modified_display());
}

pub fn success(config: &AppConfig, message: &str) {
    println!("{}", paint(config, message, Tone::Success));
}

pub fn failure(config: &AppConfig, message: &str) {
    println!("{}", paint(config, message, Tone::Failure));
}

pub fn notice(config: &AppConfig, message: &str) {
    println!("{}", paint(config, message, Tone::Prompt));
}

#[derive(Clone, Copy)]
pub enum Tone {
    Title,
    Prompt,
    Info,
    Success,
    Failure,
}

pub fn paint(config: &AppConfig, text: &str, tone: Tone) -> String {
    if !config.color {
        return text.to_string();
    }
    match tone {
        Tone::Title => style(text).magenta().to_string(),
        Tone::Prompt => style(text).yellow().to_string(),
        Tone::Info => style(text).blue().to_string(),
        Tone::Success => style(text).green().to_string(),
        Tone::Failure => style(text).red().to_string(),
    }
}
