//! Colour helpers for terminal output.

use crate::models::Severity;
use ansi_term::{Colour, Style};

pub const HIGH: Colour = Colour::RGB(255, 59, 48);
pub const MEDIUM: Colour = Colour::RGB(255, 149, 0);
pub const LOW: Colour = Colour::RGB(255, 214, 10);
pub const MUTED: Colour = Colour::Fixed(245);
pub const ACCENT: Colour = Colour::RGB(0, 122, 255);

/// high → red, medium → orange, low → yellow, unknown → grey
pub fn severity_colour(severity: &Severity) -> Colour {
    match severity {
        Severity::High => HIGH,
        Severity::Medium => MEDIUM,
        Severity::Low => LOW,
        Severity::Unknown(_) => MUTED,
    }
}

/// Paints text when colour output is enabled, returns it unchanged otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn colour(&self, text: &str, colour: Colour) -> String {
        self.paint(text, colour.normal())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, Style::new().bold())
    }

    pub fn muted(&self, text: &str) -> String {
        self.colour(text, MUTED)
    }

    pub fn severity(&self, text: &str, severity: &Severity) -> String {
        self.paint(text, severity_colour(severity).bold())
    }
}
