//! Scroll-triggered animations for the Vitrine site
//!
//! A [`ScrollAnimationController`] watches one element and plays a
//! debounced enter transition when it scrolls into view and a shorter exit
//! transition when it leaves. It never touches a clock or a UI tree
//! directly; everything goes through an [`AnimationHost`].
//!
//! # Layout
//!
//! ## Atoms
//! - `easing` - Pure easing curves
//! - `timing` - Progress and interpolation helpers
//! - `props` - Visual property records and animation kinds
//! - `stagger` - Per-child start offsets for grouped tweens
//! - `config` - Per-attachment configuration seeded from `vitrine_core::MotionConfig`
//!
//! ## Molecules
//! - `host` - The collaborator trait and the events it produces
//! - `controller` - The enter/exit state machine
//! - `stage` - Deterministic in-memory host
//! - `parallax`, `counter` - Scroll-linked offset and count-up figures
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Duration;
//! use vitrine_motion::{
//!     AnimationConfig, AnimationKind, ObservationOptions, ScrollAnimationController, Stage,
//! };
//!
//! let mut stage = Stage::new();
//! let hero = stage.add_element();
//! let controller = ScrollAnimationController::attach(
//!     Some(hero),
//!     AnimationConfig::new(AnimationKind::FadeUp),
//!     ObservationOptions::default(),
//!     &mut stage,
//! );
//! let mut controllers = [controller];
//!
//! stage.set_intersecting(hero, true);
//! stage.run_for(Duration::from_secs(1), Duration::from_millis(16), &mut controllers);
//! ```

// Atoms
pub mod config;
pub mod easing;
pub mod props;
pub mod stagger;
pub mod timing;

// Molecules
pub mod controller;
pub mod counter;
pub mod host;
pub mod parallax;
pub mod stage;

pub use config::{AnimationConfig, MotionConfigExt, ObservationOptions};
pub use controller::{ControllerState, Phase, ScrollAnimationController, VisibilityHandle};
pub use counter::SmoothCounter;
pub use easing::{EasingType, EasingTypeExt};
pub use host::{
    AnimationHost, ControllerEvent, ElementId, SubscriptionId, TimerId, TweenId, TweenSpec,
    WatchId,
};
pub use parallax::ParallaxTracker;
pub use props::{AnimationKind, VisualProps};
pub use stage::Stage;
pub use stagger::{stagger_offsets, StaggerOrigin};
