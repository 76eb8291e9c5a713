//! The collaborators a controller drives: tween engine, intersection
//! watcher, one-shot timers and the reduced-motion preference.
//!
//! All of them are reached through [`AnimationHost`]. Deferred work comes
//! back as [`ControllerEvent`]s which the caller routes into
//! `ScrollAnimationController::handle_event`.

use std::time::Duration;

use crate::config::{EasingType, ObservationOptions};
use crate::props::VisualProps;

macro_rules! handle_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u64);
    };
}

handle_id!(
    /// A UI-tree element
    ElementId
);
handle_id!(
    /// A running tween
    TweenId
);
handle_id!(
    /// A scheduled one-shot timer
    TimerId
);
handle_id!(
    /// An intersection observation
    WatchId
);
handle_id!(
    /// A reduced-motion preference subscription
    SubscriptionId
);

/// One property tween on one element
///
/// The engine captures the element's current properties when the tween
/// starts (after `delay`) and animates them to `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct TweenSpec {
    pub target: ElementId,
    pub to: VisualProps,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: EasingType,
}

/// Something that happened outside the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    /// Visibility of an observed element changed
    Intersection { watch: WatchId, is_intersecting: bool },
    /// A scheduled timer expired
    TimerFired(TimerId),
    /// A tween ran to completion (killed tweens never complete)
    TweenCompleted(TweenId),
    /// The reduced-motion preference changed
    ReducedMotionChanged { reduced: bool },
}

/// Everything a controller needs from its environment
pub trait AnimationHost {
    /// Write properties immediately, without tweening
    fn set_props(&mut self, target: ElementId, props: VisualProps);

    /// Start a tween and return its id
    fn start_tween(&mut self, spec: TweenSpec) -> TweenId;

    /// Stop every tween on `targets` at once; properties keep the last
    /// written values and no completion is reported
    fn kill_tweens_of(&mut self, targets: &[ElementId]);

    /// Children of `container` matching `selector`, in source order
    fn select_children(&self, container: ElementId, selector: &str) -> Vec<ElementId>;

    /// Start reporting intersection changes of `element`
    fn observe(&mut self, element: ElementId, options: &ObservationOptions) -> WatchId;

    /// Stop an observation
    fn disconnect(&mut self, watch: WatchId);

    /// Schedule a one-shot timer
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a pending timer; unknown ids are ignored
    fn cancel_timer(&mut self, timer: TimerId);

    /// Current reduced-motion preference
    fn prefers_reduced_motion(&self) -> bool;

    /// Start receiving reduced-motion change notifications
    fn subscribe_reduced_motion(&mut self) -> SubscriptionId;

    /// Stop receiving reduced-motion change notifications
    fn unsubscribe_reduced_motion(&mut self, subscription: SubscriptionId);
}
