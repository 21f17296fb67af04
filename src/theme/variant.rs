//! Variant system for card presentation.
//!
//! Each variant binds a motion responsiveness profile (spring stiffness and
//! damping) to a base surface color and a shadow tint. The set is statically
//! enumerated; cards cannot invent variants at runtime.
//!
//! # Example
//!
//! ```ignore
//! use tiltcard::theme::{CardVariant, get_variant_profile};
//!
//! let profile = get_variant_profile(CardVariant::Accent);
//! println!("stiffness: {}, damping: {}", profile.stiffness, profile.damping);
//! ```

use crate::types::Rgba;

// =============================================================================
// Variant Enum
// =============================================================================

/// Named presentation profiles for cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    /// Standard card styling.
    #[default]
    Default,
    /// Emphasized card with a tinted surface and snappier motion.
    Accent,
    /// Low-light card with a deeper shadow and softer motion.
    Dark,
}

impl CardVariant {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "accent" => Some(Self::Accent),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Get all variants as a slice.
    pub const fn all() -> &'static [CardVariant] {
        &[Self::Default, Self::Accent, Self::Dark]
    }

    /// Resolve this variant's presentation profile.
    pub fn profile(self) -> VariantProfile {
        get_variant_profile(self)
    }
}

// =============================================================================
// VariantProfile
// =============================================================================

/// Resolved presentation parameters for a variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantProfile {
    /// Spring constant for the pose transition. Higher reaches target faster.
    pub stiffness: f32,
    /// Spring resistance. Higher reduces overshoot.
    pub damping: f32,
    /// Base surface color.
    pub surface: Rgba,
    /// Drop shadow color.
    pub shadow_tint: Rgba,
}

// =============================================================================
// get_variant_profile
// =============================================================================

/// Get the presentation profile for a variant.
pub fn get_variant_profile(variant: CardVariant) -> VariantProfile {
    match variant {
        CardVariant::Default => VariantProfile {
            stiffness: 150.0,
            damping: 18.0,
            surface: Rgba::from_rgb_int(0x24273a),
            shadow_tint: Rgba::BLACK.with_alpha(90),
        },

        CardVariant::Accent => VariantProfile {
            stiffness: 300.0,
            damping: 25.0,
            surface: Rgba::from_rgb_int(0x5b4bc4),
            shadow_tint: Rgba::from_rgb_int(0x5b4bc4).with_alpha(110),
        },

        CardVariant::Dark => VariantProfile {
            stiffness: 120.0,
            damping: 14.0,
            surface: Rgba::from_rgb_int(0x11131f),
            shadow_tint: Rgba::BLACK.with_alpha(140),
        },
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_str() {
        assert_eq!(CardVariant::from_str("default"), Some(CardVariant::Default));
        assert_eq!(CardVariant::from_str("ACCENT"), Some(CardVariant::Accent));
        assert_eq!(CardVariant::from_str("Dark"), Some(CardVariant::Dark));
        assert_eq!(CardVariant::from_str("neon"), None);
        assert_eq!(CardVariant::from_str(""), None);
    }

    #[test]
    fn test_variant_all() {
        let all = CardVariant::all();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&CardVariant::Default));
        assert!(all.contains(&CardVariant::Accent));
        assert!(all.contains(&CardVariant::Dark));
    }

    #[test]
    fn test_variant_default() {
        assert_eq!(CardVariant::default(), CardVariant::Default);
    }

    #[test]
    fn test_profiles_are_distinct() {
        let profiles: Vec<_> = CardVariant::all().iter().map(|v| v.profile()).collect();
        assert_ne!(profiles[0].surface, profiles[1].surface);
        assert_ne!(profiles[1].surface, profiles[2].surface);
        assert_ne!(profiles[0].stiffness, profiles[1].stiffness);
    }

    #[test]
    fn test_all_profiles_positive_motion_params() {
        for v in CardVariant::all() {
            let p = v.profile();
            assert!(p.stiffness > 0.0, "{v:?} stiffness");
            assert!(p.damping > 0.0, "{v:?} damping");
        }
    }

    #[test]
    fn test_shadow_tints_translucent() {
        // Shadows layer over page content; a fully opaque tint would mask it.
        for v in CardVariant::all() {
            let p = v.profile();
            assert!(!p.shadow_tint.is_opaque(), "{v:?} shadow tint");
            assert!(!p.shadow_tint.is_transparent(), "{v:?} shadow tint");
        }
    }
}
