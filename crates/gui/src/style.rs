//! Pure mapping from stored settings to egui presentation values.
//!
//! Nothing in here touches the store or any other state: same input,
//! same output. Bad hex strings resolve to a neutral color instead of
//! failing, validation belongs to the input controls.

use egui::{Align, Color32, CornerRadius, FontId, Frame, Layout, Margin, Shadow, Stroke};
use shared::{
    Alignment, ButtonStyle, EditorSnapshot, FontRole, LayoutState, LayoutVariant, ShadowLevel,
    TypographyState, DEFAULT_BUTTON_ID,
};

/// Presentation descriptor for one button, shared by every call site that
/// draws a styled button.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedButton {
    pub fill: Color32,
    pub text_color: Color32,
    pub corner: CornerRadius,
    pub shadow: Shadow,
    pub align: Align,
    pub font: FontId,
    /// Render the label with strong text, for weights of 600 and up
    pub strong: bool,
}

/// Everything the preview draws from, derived from one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyles {
    pub add_to_cart: ResolvedButton,
    pub fixed_arms: ResolvedButton,
    pub movable_arms: ResolvedButton,
    pub view_in_room: ResolvedButton,
    pub gallery_thumbnail: ResolvedButton,
    pub control_button: ResolvedButton,
    pub card: Frame,
    pub heading: FontId,
    pub body: FontId,
    pub small: FontId,
    pub primary: Color32,
    pub secondary: Color32,
    pub gallery_align: Align,
    pub gallery_spacing: f32,
    pub gallery_corner: CornerRadius,
    pub layout: LayoutVariant,
}

impl ResolvedStyles {
    /// Resolve every derived value the preview needs in one pass
    pub fn from_snapshot(snap: &EditorSnapshot) -> Self {
        Self {
            add_to_cart: resolve_id(snap, "addToCart"),
            fixed_arms: resolve_id(snap, "fixedArms"),
            movable_arms: resolve_id(snap, "movableArms"),
            view_in_room: resolve_id(snap, "viewInRoom"),
            gallery_thumbnail: resolve_id(snap, "galleryThumbnail"),
            control_button: resolve_id(snap, "controlButton"),
            card: card_frame(&snap.layout),
            heading: font(FontRole::Heading, &snap.typography),
            body: font(FontRole::Body, &snap.typography),
            small: font(FontRole::Small, &snap.typography),
            primary: color32(&snap.theme.primary_color),
            secondary: color32(&snap.theme.secondary_color),
            gallery_align: align(snap.gallery.alignment),
            gallery_spacing: snap.gallery.spacing as f32,
            gallery_corner: CornerRadius::same(snap.gallery.border_radius),
            layout: snap.current_layout,
        }
    }
}

/// Resolve a button id against a snapshot, with the same fallback the
/// store applies: unknown ids use the default button, and when even that
/// entry is gone the built-in style stands in.
fn resolve_id(snap: &EditorSnapshot, id: &str) -> ResolvedButton {
    let fallback;
    let style = match snap
        .button
        .buttons
        .get(id)
        .or_else(|| snap.button.buttons.get(DEFAULT_BUTTON_ID))
    {
        Some(style) => style,
        None => {
            fallback = ButtonStyle::default();
            &fallback
        }
    };
    resolved_button(style, &snap.typography)
}

/// Map one button style plus typography onto a presentation descriptor
pub fn resolved_button(style: &ButtonStyle, typography: &TypographyState) -> ResolvedButton {
    ResolvedButton {
        fill: color32(&style.bg_color),
        text_color: color32(&style.text_color),
        corner: CornerRadius::same(style.radius),
        shadow: shadow(style.shadow),
        align: align(style.alignment),
        font: font(FontRole::Button, typography),
        strong: typography.font_weight >= 600,
    }
}

/// Concrete shadow for each preset. The five levels keep a strict
/// intensity order: offset and blur grow from `None` to `Xl`.
pub fn shadow(level: ShadowLevel) -> Shadow {
    match level {
        ShadowLevel::None => Shadow::NONE,
        ShadowLevel::Sm => Shadow {
            offset: [0, 1],
            blur: 2,
            spread: 0,
            color: Color32::from_black_alpha(13),
        },
        ShadowLevel::Md => Shadow {
            offset: [0, 4],
            blur: 6,
            spread: 0,
            color: Color32::from_black_alpha(26),
        },
        ShadowLevel::Lg => Shadow {
            offset: [0, 10],
            blur: 15,
            spread: 0,
            color: Color32::from_black_alpha(26),
        },
        ShadowLevel::Xl => Shadow {
            offset: [0, 20],
            blur: 25,
            spread: 0,
            color: Color32::from_black_alpha(31),
        },
    }
}

/// Horizontal alignment of a block inside its row
pub fn align(alignment: Alignment) -> Align {
    match alignment {
        Alignment::Left => Align::Min,
        Alignment::Center => Align::Center,
        Alignment::Right => Align::Max,
    }
}

/// Vertical layout whose cross-axis alignment places each row per the
/// stored alignment; used to position buttons inside a full-width column.
pub fn row_layout(alignment: Alignment) -> Layout {
    Layout::top_down(align(alignment))
}

/// Hex string to color, `#rgb` or `#rrggbb`. Anything else comes back
/// white so a half-typed value never breaks rendering.
pub fn color32(hex: &str) -> Color32 {
    match shared::color::parse_hex(hex) {
        Some([r, g, b]) => Color32::from_rgb(r, g, b),
        None => Color32::WHITE,
    }
}

/// Card chrome from the layout slice
pub fn card_frame(layout: &LayoutState) -> Frame {
    let stroke = if layout.border_enabled {
        Stroke::new(layout.border_width as f32, color32(&layout.border_color))
    } else {
        Stroke::NONE
    };
    Frame::new()
        .fill(color32(&layout.bg_color))
        .corner_radius(CornerRadius::same(layout.card_radius))
        .stroke(stroke)
        // Margin is i8; imported documents may carry padding past 127
        .inner_margin(Margin::same(layout.padding.min(i8::MAX as u8) as i8))
}

/// Font for a text role at the stored size
pub fn font(role: FontRole, typography: &TypographyState) -> FontId {
    FontId::proportional(typography.font_sizes.get(role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_input_same_output() {
        let snap = EditorSnapshot::default();
        assert_eq!(
            ResolvedStyles::from_snapshot(&snap),
            ResolvedStyles::from_snapshot(&snap)
        );

        let style = ButtonStyle::default();
        let typo = TypographyState::default();
        assert_eq!(
            resolved_button(&style, &typo),
            resolved_button(&style, &typo)
        );
    }

    #[test]
    fn test_shadow_intensity_strictly_ordered() {
        let levels = ShadowLevel::all();
        for pair in levels.windows(2) {
            let weaker = shadow(pair[0]);
            let stronger = shadow(pair[1]);
            assert!(
                stronger.blur > weaker.blur,
                "{:?} should blur more than {:?}",
                pair[1],
                pair[0]
            );
            assert!(stronger.offset[1] > weaker.offset[1]);
        }
        assert_eq!(shadow(ShadowLevel::None), Shadow::NONE);
    }

    #[test]
    fn test_color32_parses_and_falls_back() {
        assert_eq!(color32("#C6614D"), Color32::from_rgb(0xC6, 0x61, 0x4D));
        assert_eq!(color32("#fff"), Color32::WHITE);
        assert_eq!(color32("oops"), Color32::WHITE);
        assert_eq!(color32(""), Color32::WHITE);
    }

    #[test]
    fn test_alignment_mapping() {
        assert_eq!(align(Alignment::Left), Align::Min);
        assert_eq!(align(Alignment::Center), Align::Center);
        assert_eq!(align(Alignment::Right), Align::Max);
    }

    #[test]
    fn test_resolved_button_fields() {
        let style = ButtonStyle {
            bg_color: "#C6614D".to_string(),
            text_color: "#FFFFFF".to_string(),
            radius: 8,
            shadow: ShadowLevel::Md,
            alignment: Alignment::Right,
        };
        let typo = TypographyState::default();
        let resolved = resolved_button(&style, &typo);

        assert_eq!(resolved.fill, Color32::from_rgb(0xC6, 0x61, 0x4D));
        assert_eq!(resolved.text_color, Color32::WHITE);
        assert_eq!(resolved.corner, CornerRadius::same(8));
        assert_eq!(resolved.shadow, shadow(ShadowLevel::Md));
        assert_eq!(resolved.align, Align::Max);
        assert_eq!(resolved.font.size, 16.0);
        // default weight 500 is below the strong threshold
        assert!(!resolved.strong);
    }

    #[test]
    fn test_strong_threshold_at_600() {
        let style = ButtonStyle::default();
        let mut typo = TypographyState::default();
        typo.font_weight = 600;
        assert!(resolved_button(&style, &typo).strong);
        typo.font_weight = 700;
        assert!(resolved_button(&style, &typo).strong);
        typo.font_weight = 500;
        assert!(!resolved_button(&style, &typo).strong);
    }

    #[test]
    fn test_card_frame_border_toggle() {
        let mut layout = LayoutState::default();
        layout.border_enabled = true;
        layout.border_width = 3;
        layout.border_color = "#d9d9d9".to_string();
        let framed = card_frame(&layout);
        assert_eq!(framed.stroke.width, 3.0);
        assert_eq!(framed.stroke.color, Color32::from_rgb(0xd9, 0xd9, 0xd9));

        layout.border_enabled = false;
        assert_eq!(card_frame(&layout).stroke, Stroke::NONE);
    }

    #[test]
    fn test_card_frame_padding_and_radius() {
        let mut layout = LayoutState::default();
        layout.padding = 24;
        layout.card_radius = 16;
        let framed = card_frame(&layout);
        assert_eq!(framed.inner_margin, Margin::same(24));
        assert_eq!(framed.corner_radius, CornerRadius::same(16));
    }

    #[test]
    fn test_from_snapshot_unknown_id_uses_default_button() {
        let mut snap = EditorSnapshot::default();
        snap.button.buttons.remove("viewInRoom");
        let styles = ResolvedStyles::from_snapshot(&snap);
        // falls back to the addToCart entry
        assert_eq!(styles.view_in_room.fill, styles.add_to_cart.fill);
    }

    #[test]
    fn test_from_snapshot_survives_empty_button_map() {
        let mut snap = EditorSnapshot::default();
        snap.button.buttons.clear();
        let styles = ResolvedStyles::from_snapshot(&snap);
        let builtin = resolved_button(&ButtonStyle::default(), &snap.typography);
        assert_eq!(styles.add_to_cart, builtin);
    }

    #[test]
    fn test_font_sizes_flow_through() {
        let mut snap = EditorSnapshot::default();
        snap.typography.font_sizes.heading = 32.0;
        snap.typography.font_sizes.small = 11.0;
        let styles = ResolvedStyles::from_snapshot(&snap);
        assert_eq!(styles.heading.size, 32.0);
        assert_eq!(styles.small.size, 11.0);
        assert_eq!(styles.body.size, 16.0);
    }
}
