//! Derived visual output - shadow, overlays, icon parallax.
//!
//! Everything here is computed from the *displayed* pose each frame, never
//! from the raw target, so the visuals move with the spring transition. The
//! engine emits these as data; the host decides how to rasterize them.

use crate::theme::VariantProfile;
use crate::types::{Rect, Rgba};

use super::pose::PointerSample;

// =============================================================================
// Tuning constants
// =============================================================================

/// Fixed drop-shadow blur radius (pixels).
pub const SHADOW_BLUR: f32 = 20.0;

/// Rotation degrees per shadow-offset pixel.
pub const SHADOW_OFFSET_DIVISOR: f32 = 10.0;

/// Fraction of the spotlight radius at which the glow has fully faded.
pub const SPOTLIGHT_FADE_STOP: f32 = 0.7;

/// Peak alpha of the depth-highlight gradient. Subtle; the card surface
/// stays readable underneath.
pub const HIGHLIGHT_ALPHA: u8 = 46;

/// Degrees of highlight angle per degree of horizontal-axis rotation.
pub const HIGHLIGHT_ANGLE_FACTOR: f32 = 10.0;

/// Icon vertical translation per degree of horizontal-axis rotation.
pub const ICON_TRANSLATE_FACTOR: f32 = 2.0;

/// Icon rotation per degree of vertical-axis rotation.
pub const ICON_ROTATE_FACTOR: f32 = 2.0;

// =============================================================================
// Card Layers (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Which visual layers a card emits.
    ///
    /// Combine with bitwise OR: `CardLayers::SHADOW | CardLayers::ICON`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CardLayers: u8 {
        const SHADOW = 1 << 0;
        const SPOTLIGHT = 1 << 1;
        const HIGHLIGHT = 1 << 2;
        const ICON = 1 << 3;
    }
}

impl Default for CardLayers {
    fn default() -> Self {
        Self::all()
    }
}

// =============================================================================
// Shadow
// =============================================================================

/// Drop shadow displaced opposite the tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSpec {
    /// Horizontal offset in pixels (`rotation_x / 10`).
    pub offset_x: f32,
    /// Vertical offset in pixels (`rotation_y / 10`).
    pub offset_y: f32,
    /// Blur radius, fixed at [`SHADOW_BLUR`].
    pub blur: f32,
    /// Variant shadow tint.
    pub color: Rgba,
}

/// Shadow for a displayed pose.
pub fn shadow_for(pose: PointerSample, tint: Rgba) -> ShadowSpec {
    ShadowSpec {
        offset_x: pose.rotation_x / SHADOW_OFFSET_DIVISOR,
        offset_y: pose.rotation_y / SHADOW_OFFSET_DIVISOR,
        blur: SHADOW_BLUR,
        color: tint,
    }
}

// =============================================================================
// Spotlight overlay
// =============================================================================

/// Radial glow centered on the pointer.
///
/// Opaque-white core fading to transparent by [`SPOTLIGHT_FADE_STOP`] of the
/// radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotlightOverlay {
    /// Gradient center, surface-local coordinates.
    pub center_x: f32,
    /// Gradient center, surface-local coordinates.
    pub center_y: f32,
    /// Gradient radius: the larger surface dimension.
    pub radius: f32,
}

impl SpotlightOverlay {
    /// Sample the overlay color at a surface-local point.
    pub fn color_at(&self, x: f32, y: f32) -> Rgba {
        if self.radius <= 0.0 {
            return Rgba::TRANSPARENT;
        }
        let distance = ((x - self.center_x).powi(2) + (y - self.center_y).powi(2)).sqrt();
        let fade = (distance / (self.radius * SPOTLIGHT_FADE_STOP)).min(1.0);
        Rgba::lerp(Rgba::WHITE, Rgba::WHITE.with_alpha(0), fade)
    }
}

/// Spotlight for a displayed pose over a surface.
pub fn spotlight_for(pose: PointerSample, surface: Rect) -> SpotlightOverlay {
    SpotlightOverlay {
        center_x: pose.local_x,
        center_y: pose.local_y,
        radius: surface.width.max(surface.height),
    }
}

// =============================================================================
// Depth highlight overlay
// =============================================================================

/// Directional white sheen whose angle follows the tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthHighlight {
    /// Gradient angle in degrees (`rotation_x * 10`). Zero points up, as a
    /// screen gradient does.
    pub angle_deg: f32,
}

impl DepthHighlight {
    /// Sample the overlay color at a page-space point on a surface.
    ///
    /// Full [`HIGHLIGHT_ALPHA`] white at the gradient start edge, transparent
    /// at the far edge.
    pub fn color_at(&self, x: f32, y: f32, surface: Rect) -> Rgba {
        if surface.is_empty() {
            return Rgba::TRANSPARENT;
        }

        let (cx, cy) = surface.center();
        let rad = self.angle_deg.to_radians();
        let (dx, dy) = (rad.sin(), -rad.cos());

        // Half-extent of the surface projected onto the gradient axis.
        let half = (surface.width / 2.0 * dx).abs() + (surface.height / 2.0 * dy).abs();
        let t = (((x - cx) * dx + (y - cy) * dy) / half).clamp(-1.0, 1.0);

        let fade = (t + 1.0) / 2.0;
        Rgba::lerp(
            Rgba::WHITE.with_alpha(HIGHLIGHT_ALPHA),
            Rgba::WHITE.with_alpha(0),
            fade,
        )
    }
}

/// Depth highlight for a displayed pose.
pub fn highlight_for(pose: PointerSample) -> DepthHighlight {
    DepthHighlight {
        angle_deg: pose.rotation_x * HIGHLIGHT_ANGLE_FACTOR,
    }
}

// =============================================================================
// Icon layer
// =============================================================================

/// Parallax pose for the optional icon layer.
///
/// The icon chases `rotation * 2` targets through its own fixed spring, so it
/// lags the card body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IconPose {
    /// Vertical translation in pixels.
    pub translate_y: f32,
    /// Rotation in degrees.
    pub rotate_deg: f32,
}

// =============================================================================
// Assembled frame
// =============================================================================

/// Everything a host needs to draw one card for one frame.
///
/// Layers the card's mask excludes are `None`; the icon layer additionally
/// requires the card to have an icon at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    /// The displayed pose this frame derives from.
    pub pose: PointerSample,
    pub shadow: Option<ShadowSpec>,
    pub spotlight: Option<SpotlightOverlay>,
    pub highlight: Option<DepthHighlight>,
    pub icon: Option<IconPose>,
}

/// Assemble the visual output for a displayed pose.
pub fn compose_frame(
    pose: PointerSample,
    icon_pose: Option<IconPose>,
    surface: Rect,
    profile: &VariantProfile,
    layers: CardLayers,
) -> CardFrame {
    CardFrame {
        pose,
        shadow: layers
            .contains(CardLayers::SHADOW)
            .then(|| shadow_for(pose, profile.shadow_tint)),
        spotlight: layers
            .contains(CardLayers::SPOTLIGHT)
            .then(|| spotlight_for(pose, surface)),
        highlight: layers
            .contains(CardLayers::HIGHLIGHT)
            .then(|| highlight_for(pose)),
        icon: if layers.contains(CardLayers::ICON) {
            icon_pose
        } else {
            None
        },
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::CardVariant;

    fn tilted() -> PointerSample {
        PointerSample {
            rotation_x: 5.0,
            rotation_y: -10.0,
            local_x: 300.0,
            local_y: 100.0,
        }
    }

    #[test]
    fn test_shadow_offsets() {
        let tint = Rgba::BLACK.with_alpha(90);
        let shadow = shadow_for(tilted(), tint);
        assert_eq!(shadow.offset_x, 0.5);
        assert_eq!(shadow.offset_y, -1.0);
        assert_eq!(shadow.blur, SHADOW_BLUR);
        assert_eq!(shadow.color, tint);
    }

    #[test]
    fn test_shadow_neutral_is_centered() {
        let shadow = shadow_for(PointerSample::NEUTRAL, Rgba::BLACK);
        assert_eq!(shadow.offset_x, 0.0);
        assert_eq!(shadow.offset_y, 0.0);
    }

    #[test]
    fn test_spotlight_centered_on_pointer() {
        let surface = Rect::new(0.0, 0.0, 400.0, 200.0);
        let spot = spotlight_for(tilted(), surface);
        assert_eq!(spot.center_x, 300.0);
        assert_eq!(spot.center_y, 100.0);
        assert_eq!(spot.radius, 400.0);
    }

    #[test]
    fn test_spotlight_falloff() {
        let spot = SpotlightOverlay {
            center_x: 0.0,
            center_y: 0.0,
            radius: 100.0,
        };

        // Opaque white core
        assert_eq!(spot.color_at(0.0, 0.0), Rgba::WHITE);

        // Fully faded by 70% of the radius, and beyond
        assert!(spot.color_at(70.0, 0.0).is_transparent());
        assert!(spot.color_at(100.0, 0.0).is_transparent());

        // Monotonic in between
        let near = spot.color_at(10.0, 0.0).a;
        let far = spot.color_at(50.0, 0.0).a;
        assert!(near > far);
        assert!(far > 0);
    }

    #[test]
    fn test_spotlight_zero_radius() {
        let spot = SpotlightOverlay {
            center_x: 0.0,
            center_y: 0.0,
            radius: 0.0,
        };
        assert!(spot.color_at(0.0, 0.0).is_transparent());
    }

    #[test]
    fn test_highlight_angle_follows_tilt() {
        assert_eq!(highlight_for(tilted()).angle_deg, 50.0);
        assert_eq!(highlight_for(PointerSample::NEUTRAL).angle_deg, 0.0);
    }

    #[test]
    fn test_highlight_gradient_fades_across_surface() {
        let surface = Rect::new(0.0, 0.0, 100.0, 100.0);
        let highlight = DepthHighlight { angle_deg: 0.0 };

        // Angle 0 points up: bottom edge is the gradient start.
        let bottom = highlight.color_at(50.0, 100.0, surface);
        let top = highlight.color_at(50.0, 0.0, surface);
        assert_eq!(bottom.a, HIGHLIGHT_ALPHA);
        assert_eq!(top.a, 0);

        let mid = highlight.color_at(50.0, 50.0, surface);
        assert!(mid.a > 0 && mid.a < HIGHLIGHT_ALPHA);
    }

    #[test]
    fn test_highlight_empty_surface_transparent() {
        let highlight = DepthHighlight { angle_deg: 30.0 };
        let c = highlight.color_at(0.0, 0.0, Rect::default());
        assert!(c.is_transparent());
    }

    #[test]
    fn test_compose_frame_all_layers() {
        let surface = Rect::new(0.0, 0.0, 400.0, 200.0);
        let profile = CardVariant::Default.profile();
        let frame = compose_frame(
            tilted(),
            Some(IconPose::default()),
            surface,
            &profile,
            CardLayers::all(),
        );
        assert!(frame.shadow.is_some());
        assert!(frame.spotlight.is_some());
        assert!(frame.highlight.is_some());
        assert!(frame.icon.is_some());
    }

    #[test]
    fn test_compose_frame_layer_mask() {
        let surface = Rect::new(0.0, 0.0, 400.0, 200.0);
        let profile = CardVariant::Dark.profile();
        let frame = compose_frame(
            tilted(),
            Some(IconPose::default()),
            surface,
            &profile,
            CardLayers::SHADOW | CardLayers::ICON,
        );
        assert!(frame.shadow.is_some());
        assert!(frame.spotlight.is_none());
        assert!(frame.highlight.is_none());
        assert!(frame.icon.is_some());
    }

    #[test]
    fn test_compose_frame_no_icon_pose() {
        let surface = Rect::new(0.0, 0.0, 400.0, 200.0);
        let profile = CardVariant::Default.profile();
        // Icon layer enabled, but the card has no icon to animate.
        let frame = compose_frame(tilted(), None, surface, &profile, CardLayers::all());
        assert!(frame.icon.is_none());
    }
}
