//! Pose math - from pointer position to target tilt.
//!
//! A pose is the tuple of rotation angles and local pointer coordinates
//! describing a card's tilt. Pointer events only ever produce a *target*
//! pose; the displayed pose chases it through the springs owned by
//! [`TiltCard`](super::TiltCard).
//!
//! Sign convention: vertical pointer displacement drives rotation about the
//! horizontal axis and vice versa, so the card tilts toward the cursor.

use crate::types::Rect;

/// Maximum tilt magnitude in degrees. Rotation angles are clamped to
/// ±`MAX_TILT_DEG` on both axes.
pub const MAX_TILT_DEG: f32 = 10.0;

// =============================================================================
// PointerSample
// =============================================================================

/// One card's pose: rotation angles plus the pointer position in the card's
/// own coordinate space.
///
/// `local_x`/`local_y` feed the spotlight overlay only; both are zero when
/// the pointer is not over the card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    /// Rotation about the horizontal axis, degrees, clamped to ±10.
    pub rotation_x: f32,
    /// Rotation about the vertical axis, degrees, clamped to ±10.
    pub rotation_y: f32,
    /// Pointer X relative to the surface's top-left corner.
    pub local_x: f32,
    /// Pointer Y relative to the surface's top-left corner.
    pub local_y: f32,
}

impl PointerSample {
    /// The rest pose: all fields zero. Initial state, and the state whenever
    /// the pointer is outside the card's bounds.
    pub const NEUTRAL: Self = Self {
        rotation_x: 0.0,
        rotation_y: 0.0,
        local_x: 0.0,
        local_y: 0.0,
    };

    /// Check for the rest pose.
    #[inline]
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

// =============================================================================
// CardState
// =============================================================================

/// Interaction state of a card.
///
/// Neutral -> Tracking on pointer-move over the surface;
/// Tracking -> Neutral on pointer-leave. There are no other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    /// At rest; no pointer over the surface.
    #[default]
    Neutral,
    /// Pointer over the surface; pose recomputed per move event.
    Tracking,
}

// =============================================================================
// Target pose computation
// =============================================================================

/// Compute the target pose for a pointer at page coordinates over a surface.
///
/// Steps:
/// 1. `local = page - surface.top_left`
/// 2. `offset = (local - size/2) / size`, in [-0.5, 0.5] for in-bounds
///    pointers
/// 3. `rotation_x = offset_y * MAX_TILT_DEG`, `rotation_y = offset_x *
///    MAX_TILT_DEG`, clamped
///
/// A zero-size surface (not laid out yet) and a pointer outside the bounds
/// both yield [`PointerSample::NEUTRAL`] - never NaN, never a stale tilt.
pub fn target_pose(page_x: f32, page_y: f32, surface: Rect) -> PointerSample {
    if surface.is_empty() || !surface.contains(page_x, page_y) {
        return PointerSample::NEUTRAL;
    }

    let local_x = page_x - surface.left;
    let local_y = page_y - surface.top;

    let offset_x = (local_x - surface.width / 2.0) / surface.width;
    let offset_y = (local_y - surface.height / 2.0) / surface.height;

    PointerSample {
        rotation_x: (offset_y * MAX_TILT_DEG).clamp(-MAX_TILT_DEG, MAX_TILT_DEG),
        rotation_y: (offset_x * MAX_TILT_DEG).clamp(-MAX_TILT_DEG, MAX_TILT_DEG),
        local_x,
        local_y,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_yields_zero_rotation() {
        for (w, h) in [(400.0, 400.0), (320.0, 180.0), (1.0, 1.0)] {
            let surface = Rect::new(0.0, 0.0, w, h);
            let pose = target_pose(w / 2.0, h / 2.0, surface);
            assert_eq!(pose.rotation_x, 0.0, "{w}x{h}");
            assert_eq!(pose.rotation_y, 0.0, "{w}x{h}");
        }
    }

    #[test]
    fn test_right_edge_scenario() {
        // Surface 400x400 at page origin, pointer at (400, 200).
        let surface = Rect::new(0.0, 0.0, 400.0, 400.0);
        let pose = target_pose(400.0, 200.0, surface);
        assert_eq!(pose.local_x, 400.0);
        assert_eq!(pose.local_y, 200.0);
        assert_eq!(pose.rotation_x, 0.0);
        assert_eq!(pose.rotation_y, 5.0);
    }

    #[test]
    fn test_rotation_bounded_in_bounds() {
        let surface = Rect::new(50.0, 80.0, 300.0, 200.0);
        for px in 0..=30 {
            for py in 0..=20 {
                let x = 50.0 + px as f32 * 10.0;
                let y = 80.0 + py as f32 * 10.0;
                let pose = target_pose(x, y, surface);
                assert!(pose.rotation_x.abs() <= MAX_TILT_DEG);
                assert!(pose.rotation_y.abs() <= MAX_TILT_DEG);
            }
        }
    }

    #[test]
    fn test_corners_hit_max_tilt() {
        let surface = Rect::new(0.0, 0.0, 200.0, 200.0);
        let pose = target_pose(200.0, 200.0, surface);
        assert_eq!(pose.rotation_x, 5.0);
        assert_eq!(pose.rotation_y, 5.0);

        let pose = target_pose(0.0, 0.0, surface);
        assert_eq!(pose.rotation_x, -5.0);
        assert_eq!(pose.rotation_y, -5.0);
    }

    #[test]
    fn test_tilts_toward_cursor() {
        let surface = Rect::new(0.0, 0.0, 400.0, 400.0);
        // Below center: positive rotation_x. Left of center: negative rotation_y.
        let pose = target_pose(100.0, 300.0, surface);
        assert!(pose.rotation_x > 0.0);
        assert!(pose.rotation_y < 0.0);
    }

    #[test]
    fn test_offset_from_surface_origin() {
        let surface = Rect::new(100.0, 50.0, 400.0, 400.0);
        let pose = target_pose(500.0, 250.0, surface);
        // Same geometry as the origin scenario, shifted by the surface offset.
        assert_eq!(pose.local_x, 400.0);
        assert_eq!(pose.local_y, 200.0);
        assert_eq!(pose.rotation_y, 5.0);
    }

    #[test]
    fn test_out_of_bounds_is_neutral() {
        let surface = Rect::new(0.0, 0.0, 400.0, 400.0);
        assert!(target_pose(401.0, 200.0, surface).is_neutral());
        assert!(target_pose(-1.0, 200.0, surface).is_neutral());
        assert!(target_pose(200.0, 1000.0, surface).is_neutral());
    }

    #[test]
    fn test_zero_size_surface_is_neutral_not_nan() {
        for surface in [
            Rect::new(0.0, 0.0, 0.0, 0.0),
            Rect::new(0.0, 0.0, 400.0, 0.0),
            Rect::new(0.0, 0.0, 0.0, 400.0),
        ] {
            let pose = target_pose(0.0, 0.0, surface);
            assert!(pose.is_neutral());
            assert!(!pose.rotation_x.is_nan());
            assert!(!pose.rotation_y.is_nan());
        }
    }

    #[test]
    fn test_neutral_constant() {
        assert!(PointerSample::NEUTRAL.is_neutral());
        assert!(PointerSample::default().is_neutral());
        let tilted = PointerSample {
            rotation_x: 1.0,
            ..PointerSample::NEUTRAL
        };
        assert!(!tilted.is_neutral());
    }

    #[test]
    fn test_state_default() {
        assert_eq!(CardState::default(), CardState::Neutral);
    }
}
