//! TiltCard - the pointer-reactive card component.
//!
//! Each card instance owns its pose state exclusively: a target pose signal
//! moved by pointer events, a displayed pose signal advanced by springs, and
//! the icon parallax springs. There is no global registry and no sharing
//! between instances.
//!
//! # Lifecycle
//!
//! ```ignore
//! use tiltcard::card::{CardProps, TiltCard};
//! use tiltcard::types::Rect;
//!
//! let mut card = TiltCard::new(CardProps {
//!     title: Some("Shipping logs".to_string()),
//!     surface: Rect::new(0.0, 0.0, 400.0, 240.0),
//!     ..Default::default()
//! });
//!
//! // Per pointer event:
//! card.pointer_move(210.0, 80.0);
//!
//! // Per animation frame:
//! card.advance(1.0 / 60.0);
//! let frame = card.frame(); // hand to the renderer
//!
//! // On teardown:
//! card.unmount();
//! ```

use log::debug;
use spark_signals::{Signal, signal};

use crate::motion::{Spring, frame_count, frame_dt, subscribe_to_frames};
use crate::state::{PointerAction, PointerEvent};
use crate::theme::{CardVariant, VariantProfile};
use crate::types::Rect;

use super::overlays::{
    CardFrame, CardLayers, ICON_ROTATE_FACTOR, ICON_TRANSLATE_FACTOR, IconPose, compose_frame,
};
use super::pose::{CardState, PointerSample, target_pose};

// =============================================================================
// Icon spring tuning
// =============================================================================

/// Icon layer spring constant. Fixed regardless of variant.
pub const ICON_STIFFNESS: f32 = 200.0;

/// Icon layer spring damping. Fixed regardless of variant.
pub const ICON_DAMPING: f32 = 15.0;

/// Upper bound on clock catch-up after a stall: one second of frames.
const MAX_CATCHUP_SECONDS: u64 = 1;

// =============================================================================
// Props
// =============================================================================

/// Construction-time configuration and content slot for a card.
#[derive(Debug, Clone, Default)]
pub struct CardProps {
    /// Card heading, rendered by the host.
    pub title: Option<String>,
    /// Supporting copy, rendered by the host.
    pub description: Option<String>,
    /// Optional icon glyph. Its presence enables the parallax icon layer.
    pub icon: Option<String>,
    /// Presentation profile.
    pub variant: CardVariant,
    /// Surface bounds in page coordinates. May start zero-sized before
    /// layout; update via [`TiltCard::set_surface`].
    pub surface: Rect,
    /// Which visual layers to emit.
    pub layers: CardLayers,
}

// =============================================================================
// Clock binding
// =============================================================================

/// A card's subscription to a shared frame clock.
struct ClockBinding {
    fps: u8,
    last_frame: u64,
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for ClockBinding {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

// =============================================================================
// TiltCard
// =============================================================================

/// A mouse-reactive pseudo-3D card.
///
/// Pointer events move the *target* pose; the displayed pose chases it
/// through per-variant springs stepped by [`advance`](Self::advance). Derived
/// visuals (shadow, spotlight, depth highlight, icon parallax) always read
/// the displayed pose.
pub struct TiltCard {
    title: Option<String>,
    description: Option<String>,
    icon: Option<String>,
    variant: CardVariant,
    profile: VariantProfile,
    layers: CardLayers,

    surface: Signal<Rect>,
    state: CardState,
    target: Signal<PointerSample>,
    pose: Signal<PointerSample>,
    icon_pose: Signal<IconPose>,

    rotation_x: Spring,
    rotation_y: Spring,
    local_x: Spring,
    local_y: Spring,
    icon_translate: Spring,
    icon_rotate: Spring,

    clock: Option<ClockBinding>,
}

impl TiltCard {
    /// Create a card at the neutral pose.
    pub fn new(props: CardProps) -> Self {
        let profile = props.variant.profile();
        let pose_spring = || Spring::new(0.0, profile.stiffness, profile.damping);

        debug!(
            "event=card_mount variant={:?} has_icon={}",
            props.variant,
            props.icon.is_some()
        );

        Self {
            title: props.title,
            description: props.description,
            icon: props.icon,
            variant: props.variant,
            profile,
            layers: props.layers,

            surface: signal(props.surface),
            state: CardState::Neutral,
            target: signal(PointerSample::NEUTRAL),
            pose: signal(PointerSample::NEUTRAL),
            icon_pose: signal(IconPose::default()),

            rotation_x: pose_spring(),
            rotation_y: pose_spring(),
            local_x: pose_spring(),
            local_y: pose_spring(),
            icon_translate: Spring::new(0.0, ICON_STIFFNESS, ICON_DAMPING),
            icon_rotate: Spring::new(0.0, ICON_STIFFNESS, ICON_DAMPING),

            clock: None,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn variant(&self) -> CardVariant {
        self.variant
    }

    pub fn layers(&self) -> CardLayers {
        self.layers
    }

    /// Current interaction state.
    pub fn state(&self) -> CardState {
        self.state
    }

    /// Current surface bounds.
    pub fn surface(&self) -> Rect {
        self.surface.get()
    }

    /// Current target pose.
    pub fn target(&self) -> PointerSample {
        self.target.get()
    }

    /// Current displayed pose.
    pub fn pose(&self) -> PointerSample {
        self.pose.get()
    }

    /// Current icon parallax pose.
    pub fn icon_pose(&self) -> IconPose {
        self.icon_pose.get()
    }

    /// The displayed pose signal, for reactive consumers.
    ///
    /// Together with [`icon_pose_signal`](Self::icon_pose_signal) and
    /// [`surface_signal`](Self::surface_signal) this is everything a
    /// `derived(..)` needs to rebuild [`compose_frame`] output whenever the
    /// card moves.
    pub fn pose_signal(&self) -> Signal<PointerSample> {
        self.pose.clone()
    }

    /// The icon parallax signal, for reactive consumers.
    pub fn icon_pose_signal(&self) -> Signal<IconPose> {
        self.icon_pose.clone()
    }

    /// The surface bounds signal, for reactive consumers.
    pub fn surface_signal(&self) -> Signal<Rect> {
        self.surface.clone()
    }

    // -------------------------------------------------------------------------
    // Pointer events
    // -------------------------------------------------------------------------

    /// Update the surface bounds (e.g. after the host re-lays-out the page).
    pub fn set_surface(&mut self, surface: Rect) {
        self.surface.set(surface);
    }

    /// Handle a pointer-move at page coordinates.
    ///
    /// In-bounds moves enter Tracking and retarget the pose springs. A move
    /// outside the bounds, or over a surface that has not been laid out yet,
    /// behaves as a leave.
    pub fn pointer_move(&mut self, page_x: f32, page_y: f32) {
        let surface = self.surface.get();
        if surface.is_empty() || !surface.contains(page_x, page_y) {
            self.pointer_leave();
            return;
        }

        if self.state == CardState::Neutral {
            self.state = CardState::Tracking;
            debug!("event=card_enter variant={:?}", self.variant);
        }

        let target = target_pose(page_x, page_y, surface);
        self.retarget(target);
    }

    /// Handle a pointer-leave: the target pose resets to neutral and the
    /// springs animate back to rest. No snap.
    ///
    /// Idempotent - hosts that cannot tell whether the card was hovered may
    /// call this unconditionally, so a final leave is never lost.
    pub fn pointer_leave(&mut self) {
        if self.state == CardState::Tracking {
            self.state = CardState::Neutral;
            debug!("event=card_leave variant={:?}", self.variant);
        }
        self.retarget(PointerSample::NEUTRAL);
    }

    /// Route an engine pointer event to this card.
    ///
    /// Down/up events carry no pose semantics; hosts handle them (e.g. as
    /// navigation on a listing row).
    pub fn handle_event(&mut self, event: &PointerEvent) {
        match event.action {
            PointerAction::Move => self.pointer_move(event.page_x, event.page_y),
            PointerAction::Leave => self.pointer_leave(),
            PointerAction::Down | PointerAction::Up => {}
        }
    }

    fn retarget(&mut self, target: PointerSample) {
        self.target.set(target);
        self.rotation_x.set_target(target.rotation_x);
        self.rotation_y.set_target(target.rotation_y);
        self.local_x.set_target(target.local_x);
        self.local_y.set_target(target.local_y);
    }

    // -------------------------------------------------------------------------
    // Animation
    // -------------------------------------------------------------------------

    /// Advance the spring simulation by `dt` seconds and publish the new
    /// displayed pose.
    ///
    /// The icon springs chase targets derived from the pose displayed *this*
    /// frame, which is what produces the parallax lag.
    pub fn advance(&mut self, dt: f32) {
        self.rotation_x.step(dt);
        self.rotation_y.step(dt);
        self.local_x.step(dt);
        self.local_y.step(dt);

        let pose = PointerSample {
            rotation_x: self.rotation_x.position(),
            rotation_y: self.rotation_y.position(),
            local_x: self.local_x.position(),
            local_y: self.local_y.position(),
        };
        self.pose.set(pose);

        self.icon_translate
            .set_target(pose.rotation_x * ICON_TRANSLATE_FACTOR);
        self.icon_rotate
            .set_target(pose.rotation_y * ICON_ROTATE_FACTOR);
        self.icon_translate.step(dt);
        self.icon_rotate.step(dt);
        self.icon_pose.set(IconPose {
            translate_y: self.icon_translate.position(),
            rotate_deg: self.icon_rotate.position(),
        });
    }

    /// Whether every spring has come to rest on its target.
    pub fn is_settled(&self) -> bool {
        self.rotation_x.is_settled()
            && self.rotation_y.is_settled()
            && self.local_x.is_settled()
            && self.local_y.is_settled()
            && self.icon_translate.is_settled()
            && self.icon_rotate.is_settled()
    }

    /// Pace this card from the shared frame clock at `fps`.
    ///
    /// Call [`advance_pending`](Self::advance_pending) from the host loop to
    /// consume elapsed frames. Re-driving at a different FPS releases the
    /// previous subscription.
    pub fn drive(&mut self, fps: u8) {
        self.clock = Some(ClockBinding {
            fps,
            last_frame: frame_count(fps),
            unsubscribe: Some(subscribe_to_frames(fps)),
        });
    }

    /// Advance by however many clock frames elapsed since the last call.
    ///
    /// Catch-up after a stall is capped at one second of frames so a long
    /// suspend does not burn CPU replaying dead time.
    pub fn advance_pending(&mut self) {
        let Some(binding) = self.clock.as_mut() else {
            return;
        };
        let fps = binding.fps;
        let now = frame_count(fps);
        let elapsed = now
            .saturating_sub(binding.last_frame)
            .min(MAX_CATCHUP_SECONDS * fps as u64);
        binding.last_frame = now;

        let dt = frame_dt(fps);
        for _ in 0..elapsed {
            self.advance(dt);
        }
    }

    // -------------------------------------------------------------------------
    // Frame output
    // -------------------------------------------------------------------------

    /// Visual output for the current displayed pose.
    pub fn frame(&self) -> CardFrame {
        let icon_pose = self.icon.is_some().then(|| self.icon_pose.get());
        compose_frame(
            self.pose.get(),
            icon_pose,
            self.surface.get(),
            &self.profile,
            self.layers,
        )
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Tear the card down: stops any in-flight animation and releases the
    /// clock subscription.
    pub fn unmount(mut self) {
        self.retarget(PointerSample::NEUTRAL);
        self.clock = None;
        debug!("event=card_unmount variant={:?}", self.variant);
    }
}

// =============================================================================
// Tests
// =============================================================================
