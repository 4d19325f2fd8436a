// SPDX-License-Identifier: MPL-2.0
//! Text building blocks used by every section.

use iced::{font::Weight, widget::Text, Color, Font};

/// Bold variant of the default font.
pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Bold heading text.
pub fn heading<'a>(content: String, size: f32, color: Color) -> Text<'a> {
    Text::new(content).size(size).color(color).font(BOLD)
}

/// Regular paragraph text.
pub fn body<'a>(content: String, size: f32, color: Color) -> Text<'a> {
    Text::new(content).size(size).color(color)
}

/// Emoji used in place of an illustration.
pub fn emoji<'a>(glyph: &'static str, size: f32) -> Text<'a> {
    Text::new(glyph).size(size)
}
