// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by every screen, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (catalog basic scale, brand scale)
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size and line height scale
- **Border**: Border width scale
- **Radius**: Border radii

## Examples

```
use iced_rentals::ui::design_tokens::{palette, spacing};

let padding = spacing::LG; // 24px
let card = palette::WHITE;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Basic scale (light surfaces up to dark text)
    pub const BASIC_100: Color = Color::from_rgb(0.969, 0.976, 0.988); // #F7F9FC
    pub const BASIC_200: Color = Color::from_rgb(0.929, 0.945, 0.969); // #EDF1F7
    pub const BASIC_300: Color = Color::from_rgb(0.894, 0.914, 0.949); // #E4E9F2
    pub const BASIC_600: Color = Color::from_rgb(0.561, 0.608, 0.702); // #8F9BB3
    pub const BASIC_800: Color = Color::from_rgb(0.180, 0.220, 0.349); // #2E3A59
    pub const BASIC_900: Color = Color::from_rgb(0.133, 0.169, 0.271); // #222B45
    pub const BASIC_1000: Color = Color::from_rgb(0.102, 0.129, 0.220); // #1A2138
    pub const BASIC_1100: Color = Color::from_rgb(0.082, 0.102, 0.188); // #151A30

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.349, 0.545, 1.0); // #598BFF
    pub const PRIMARY_500: Color = Color::from_rgb(0.2, 0.4, 1.0); // #3366FF
    pub const PRIMARY_600: Color = Color::from_rgb(0.153, 0.298, 0.859); // #274BDB
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Minimum height of the listing header photo.
    pub const HEADER_MIN_HEIGHT: f32 = 280.0;

    /// Edge length of a gallery thumbnail.
    pub const PHOTO_THUMBNAIL: f32 = 120.0;

    /// Edge length of a primary facility icon.
    pub const FACILITY_ICON: f32 = 24.0;

    /// Width of a primary facility tile.
    pub const FACILITY_TILE_WIDTH: f32 = 88.0;

    /// Maximum content width of secondary screens.
    pub const CONTENT_MAX_WIDTH: f32 = 640.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes and line heights.
    //!
    //! - Headline: listing title
    //! - Subtitle: section labels
    //! - Paragraph: body and hint text
    //! - Price: price value and scale

    pub const HEADLINE: f32 = 20.0;
    pub const HEADLINE_LINE_HEIGHT: f32 = 28.0;

    pub const SUBTITLE: f32 = 15.0;
    pub const SUBTITLE_LINE_HEIGHT: f32 = 24.0;

    pub const PARAGRAPH: f32 = 15.0;
    pub const PARAGRAPH_LINE_HEIGHT: f32 = 20.0;

    pub const PRICE_VALUE: f32 = 26.0;
    pub const PRICE_VALUE_LINE_HEIGHT: f32 = 32.0;

    pub const PRICE_SCALE: f32 = 13.0;
    pub const PRICE_SCALE_LINE_HEIGHT: f32 = 24.0;

    pub const BUTTON: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(sizing::PHOTO_THUMBNAIL < sizing::HEADER_MIN_HEIGHT);
    assert!(sizing::FACILITY_ICON < sizing::FACILITY_TILE_WIDTH);

    assert!(typography::PRICE_VALUE > typography::HEADLINE);
    assert!(typography::HEADLINE > typography::SUBTITLE);
    assert!(typography::SUBTITLE > typography::PRICE_SCALE);
    assert!(typography::PRICE_VALUE_LINE_HEIGHT >= typography::PRICE_VALUE);

    assert!(radius::LG > radius::MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
