//! Console output helpers.
//!
//! All user-facing output is plain colored lines over stdout/stderr.
//!
//! Design constraints:
//! - Only 5 semantic colors (`colors::*`)
//! - Color is disabled for non-TTY streams, `NO_COLOR`, and `TERM=dumb`

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

/// Semantic color tokens for stagehand output.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

fn color_enabled(is_tty: bool) -> bool {
    color_enabled_impl(is_tty, |key| std::env::var(key).ok())
}

fn color_enabled_impl(is_tty: bool, get_env: impl Fn(&str) -> Option<String>) -> bool {
    let term_is_dumb = get_env("TERM")
        .map(|t| t.eq_ignore_ascii_case("dumb"))
        .unwrap_or(false);

    is_tty && !term_is_dumb && get_env("NO_COLOR").is_none()
}

/// Style `text` with `color` when the target stream supports it.
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

pub fn info(msg: &str) {
    stdout_line(msg, colors::INFO);
}

pub fn success(msg: &str) {
    stdout_line(msg, colors::SUCCESS);
}

pub fn warn(msg: &str) {
    stdout_line(msg, colors::WARNING);
}

pub fn dim(msg: &str) {
    stdout_line(msg, colors::DIM);
}

pub fn error(msg: &str) {
    let enabled = color_enabled(std::io::stderr().is_terminal());
    eprintln!("{}", paint(msg, colors::ERROR, enabled));
}

fn stdout_line(msg: &str, color: Color) {
    let enabled = color_enabled(std::io::stdout().is_terminal());
    println!("{}", paint(msg, color, enabled));
}
