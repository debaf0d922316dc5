//! Terminal styling capability.
//!
//! The dumper never emits escape codes itself; it hands every span to a
//! `Paint` implementation.

use crate::field::{Color, Style};

/// Turns a piece of text plus a color pair into styled text.
pub trait Paint {
    fn paint(&self, fg: Color, bg: Color, text: &str) -> String;

    fn paint_style(&self, style: Style, text: &str) -> String {
        self.paint(style.fg, style.bg, text)
    }
}

/// ANSI SGR escape sequences, reset after every span.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiPaint;

impl AnsiPaint {
    fn fg_code(color: Color) -> &'static str {
        match color {
            Color::Black => "30",
            Color::DarkBlue => "34",
            Color::DarkGreen => "32",
            Color::LightBlue => "36",
            Color::DarkRed => "31",
            Color::Magenta => "35",
            Color::Orange => "33",
            Color::LightGray => "37",
            Color::Gray => "90",
            Color::Blue => "94",
            Color::Green => "92",
            Color::Cyan => "96",
            Color::Red => "91",
            Color::Pink => "95",
            Color::Yellow => "93",
            Color::White => "97",
            Color::None => "30",
        }
    }

    fn bg_code(color: Color) -> &'static str {
        match color {
            Color::Black => "40",
            Color::DarkBlue => "44",
            Color::DarkGreen => "42",
            Color::LightBlue => "46",
            Color::DarkRed => "41",
            Color::Magenta => "45",
            Color::Orange => "43",
            Color::LightGray => "47",
            Color::Gray => "100",
            Color::Blue => "104",
            Color::Green => "102",
            Color::Cyan => "106",
            Color::Red => "101",
            Color::Pink => "105",
            Color::Yellow => "103",
            Color::White => "107",
            Color::None => "49",
        }
    }
}

impl Paint for AnsiPaint {
    fn paint(&self, fg: Color, bg: Color, text: &str) -> String {
        match (fg, bg) {
            (Color::None, Color::None) => format!("\x1b[0m{text}"),
            (fg, Color::None) => format!("\x1b[{}m{text}\x1b[0m", Self::fg_code(fg)),
            (fg, bg) => format!(
                "\x1b[{};{}m{text}\x1b[0m",
                Self::fg_code(fg),
                Self::bg_code(bg)
            ),
        }
    }
}

/// Leaves text untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainPaint;

impl Paint for PlainPaint {
    fn paint(&self, _fg: Color, _bg: Color, text: &str) -> String {
        text.to_string()
    }
}
