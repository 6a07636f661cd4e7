//! User-facing status lines (info / success / warning).
//! Diagnostics go through `tracing`; these are for the person at the terminal.

use ansi_term::{Colour, Style};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR: AtomicBool = AtomicBool::new(true);

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";

/// Enable or disable ANSI colours for status lines (`--plain`).
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

fn line<T: fmt::Display>(style: Style, icon: &str, msg: T) -> String {
    if COLOR.load(Ordering::Relaxed) {
        format!("{} {}", style.paint(icon), msg)
    } else {
        format!("{} {}", icon, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Blue.bold(), ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Green.bold(), ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Yellow.bold(), ICON_WARN, msg));
}
