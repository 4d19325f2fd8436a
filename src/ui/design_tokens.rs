// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the page's design tokens.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes and the layout breakpoint
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use zen_cat::ui::design_tokens::{palette, spacing};

let accent = palette::PRIMARY;
let padding = spacing::MD; // 24px
assert!(accent.g > accent.r);
assert_eq!(padding, 24.0);
```

Prefer reading tokens through [`ThemeConfig`](crate::ui::theming::ThemeConfig)
in view code; the constants here are its single source of values.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    /// Turquoise accent `#2dd4bf`.
    pub const PRIMARY: Color = Color::from_rgb(45.0 / 255.0, 212.0 / 255.0, 191.0 / 255.0);
    /// Accent under the pointer `#26bfad`.
    pub const PRIMARY_HOVER: Color = Color::from_rgb(38.0 / 255.0, 191.0 / 255.0, 173.0 / 255.0);
    /// Light beige page background `#f8f5f0`.
    pub const BACKGROUND: Color = Color::from_rgb(248.0 / 255.0, 245.0 / 255.0, 240.0 / 255.0);
    /// Dark gray body text `#333333`.
    pub const TEXT: Color = Color::from_rgb(51.0 / 255.0, 51.0 / 255.0, 51.0 / 255.0);
    /// Gray secondary text `#666666`.
    pub const TEXT_LIGHT: Color = Color::from_rgb(102.0 / 255.0, 102.0 / 255.0, 102.0 / 255.0);
    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 16.0; // 2 units
    pub const MD: f32 = 24.0; // 3 units
    pub const LG: f32 = 32.0; // 4 units
    pub const XL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Maximum width of the page content column.
    pub const CONTENT_MAX_WIDTH: f32 = 800.0;
    pub const FORM_WIDTH: f32 = 500.0;

    pub const CARD_WIDTH: f32 = 350.0;
    pub const CARD_HEIGHT: f32 = 180.0;

    /// Diameter of the round frame around the about-section cat.
    pub const ABOUT_IMAGE: f32 = 150.0;

    pub const BUTTON_HEIGHT: f32 = 48.0;

    /// Windows at least this wide use the wide layout.
    pub const BREAKPOINT_WIDE: f32 = 768.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - `XL`: main title
    //! - `LG`: section headings and the logo
    //! - `MD`: subtitles and card titles
    //! - `SM`: body text and inputs
    //! - `XS`: footer

    pub const XL: f32 = 32.0;
    pub const LG: f32 = 24.0;
    pub const MD: f32 = 18.0;
    pub const SM: f32 = 16.0;
    pub const XS: f32 = 14.0;

    /// Emoji used as illustrations.
    pub const HERO_EMOJI: f32 = 120.0;
    pub const ABOUT_EMOJI: f32 = 100.0;
    pub const FORM_EMOJI: f32 = 60.0;
    pub const CARD_ICON: f32 = 32.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Input fields, divider
    pub const WIDTH_SM: f32 = 1.0;

    /// Focused input border
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill / circle
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Soft drop shadow for cards.
    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.08,
            ..Color::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 6.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Typography validation
    assert!(typography::XL > typography::LG);
    assert!(typography::LG > typography::MD);
    assert!(typography::MD > typography::SM);
    assert!(typography::SM > typography::XS);

    // Sizing validation
    assert!(sizing::FORM_WIDTH < sizing::CONTENT_MAX_WIDTH);
    assert!(sizing::BREAKPOINT_WIDE > sizing::FORM_WIDTH);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
