//! Scroll animation controller
//!
//! Turns raw intersection events for one element into a debounced,
//! cancelable enter/exit timeline. The controller is a plain state object:
//! every input arrives through [`ScrollAnimationController::handle_event`]
//! and every side effect goes through the [`AnimationHost`].
//!
//! Invariant: at most one transition drives the targets at any time. A new
//! transition always kills the one in flight before starting its tweens.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use crate::config::{AnimationConfig, EasingType, ObservationOptions};
use crate::host::{
    AnimationHost, ControllerEvent, ElementId, SubscriptionId, TimerId, TweenId, TweenSpec,
    WatchId,
};
use crate::props::{AnimationKind, VisualProps};
use crate::stagger::{stagger_offsets, StaggerOrigin};
use crate::timing::secs;

/// Quiet period used to coalesce flicker at section boundaries
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Exit staggers use this share of the enter interval
const EXIT_STAGGER_FACTOR: f64 = 0.3;

/// Read-only view of the logical visibility flag
///
/// "Visible" flips as soon as a transition starts, not when its tweens
/// finish, so dependent UI can react immediately.
#[derive(Debug, Clone, Default)]
pub struct VisibilityHandle(Rc<Cell<bool>>);

impl VisibilityHandle {
    pub fn is_visible(&self) -> bool {
        self.0.get()
    }

    fn set(&self, visible: bool) {
        self.0.set(visible);
    }
}

/// Where the controller is in its enter/exit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Hidden, nothing running
    Idle,
    Entering,
    /// Fully shown, nothing running
    Entered,
    Exiting,
    /// Terminal: no further events are processed
    Detached,
}

/// Snapshot of the per-attachment flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    pub has_entered_before: bool,
    pub is_transition_in_flight: bool,
    pub is_currently_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Enter,
    Exit,
}

#[derive(Debug)]
struct Transition {
    direction: Direction,
    outstanding: Vec<TweenId>,
}

#[derive(Debug, Clone, Copy)]
struct PendingChange {
    timer: TimerId,
    is_intersecting: bool,
}

/// Drives enter/exit animations of one element from its visibility
///
/// Every `attach` must be paired with one `detach`.
#[derive(Debug)]
pub struct ScrollAnimationController {
    config: AnimationConfig,
    options: ObservationOptions,
    debounce: Duration,
    targets: Vec<ElementId>,
    watch: Option<WatchId>,
    subscription: Option<SubscriptionId>,
    pending: Option<PendingChange>,
    transition: Option<Transition>,
    phase: Phase,
    has_entered_before: bool,
    reduced_motion: bool,
    visibility: VisibilityHandle,
}

impl ScrollAnimationController {
    /// Attach to `element`
    ///
    /// With no element the controller is inert and reports visible. With
    /// reduced motion active the targets are shown immediately and never
    /// observed. Otherwise the hidden properties are applied right away and
    /// observation starts.
    pub fn attach<H: AnimationHost + ?Sized>(
        element: Option<ElementId>,
        config: AnimationConfig,
        options: ObservationOptions,
        host: &mut H,
    ) -> Self {
        let mut controller = Self {
            config,
            options,
            debounce: DEFAULT_DEBOUNCE,
            targets: Vec::new(),
            watch: None,
            subscription: None,
            pending: None,
            transition: None,
            phase: Phase::Idle,
            has_entered_before: false,
            reduced_motion: false,
            visibility: VisibilityHandle::default(),
        };

        let Some(element) = element else {
            debug!(
                kind = controller.config.kind.name(),
                "No element to animate, treating as visible"
            );
            controller.settle_visible();
            return controller;
        };

        controller.targets = match &controller.config.kind {
            AnimationKind::StaggerGroup { child_selector, .. } => {
                host.select_children(element, child_selector)
            }
            _ => vec![element],
        };

        if host.prefers_reduced_motion() {
            debug!(element = element.0, "Reduced motion active, skipping animation");
            controller.show_immediately(host);
            return controller;
        }

        let initial = controller
            .config
            .kind
            .initial(controller.config.travel_distance, controller.config.scale_factor);
        for &target in &controller.targets {
            host.set_props(target, initial);
        }

        controller.watch = Some(host.observe(element, &controller.options));
        controller.subscription = Some(host.subscribe_reduced_motion());
        debug!(
            element = element.0,
            kind = controller.config.kind.name(),
            targets = controller.targets.len(),
            "Attached scroll animation"
        );
        controller
    }

    /// Override the debounce delay
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Feed one external event into the controller
    ///
    /// Events that do not belong to this controller (foreign or stale ids)
    /// are ignored, as is everything after `detach`.
    pub fn handle_event<H: AnimationHost + ?Sized>(
        &mut self,
        event: ControllerEvent,
        host: &mut H,
    ) {
        if self.phase == Phase::Detached {
            return;
        }

        match event {
            ControllerEvent::Intersection {
                watch,
                is_intersecting,
            } => {
                if self.watch != Some(watch) {
                    return;
                }
                if let Some(previous) = self.pending.take() {
                    host.cancel_timer(previous.timer);
                }
                let timer = host.schedule(self.debounce);
                self.pending = Some(PendingChange {
                    timer,
                    is_intersecting,
                });
            }
            ControllerEvent::TimerFired(timer) => {
                let Some(pending) = self.pending.filter(|p| p.timer == timer) else {
                    return;
                };
                self.pending = None;
                if pending.is_intersecting {
                    self.enter(host);
                } else {
                    self.exit(host);
                }
            }
            ControllerEvent::TweenCompleted(tween) => self.complete_tween(tween),
            ControllerEvent::ReducedMotionChanged { reduced } => {
                if reduced && self.subscription.is_some() && !self.reduced_motion {
                    debug!("Reduced motion enabled, snapping to visible");
                    self.show_immediately(host);
                }
            }
        }
    }

    /// Cancel everything and stop observing. Safe to call repeatedly.
    pub fn detach<H: AnimationHost + ?Sized>(&mut self, host: &mut H) {
        if self.phase == Phase::Detached {
            return;
        }

        if let Some(pending) = self.pending.take() {
            host.cancel_timer(pending.timer);
        }
        if !self.targets.is_empty() {
            host.kill_tweens_of(&self.targets);
        }
        self.transition = None;
        if let Some(watch) = self.watch.take() {
            host.disconnect(watch);
        }
        if let Some(subscription) = self.subscription.take() {
            host.unsubscribe_reduced_motion(subscription);
        }
        self.phase = Phase::Detached;
        debug!(targets = self.targets.len(), "Detached scroll animation");
    }

    pub fn state(&self) -> ControllerState {
        ControllerState {
            has_entered_before: self.has_entered_before,
            is_transition_in_flight: self.transition.is_some(),
            is_currently_visible: self.visibility.is_visible(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// A shareable handle on the visibility flag
    pub fn visibility(&self) -> VisibilityHandle {
        self.visibility.clone()
    }

    pub fn is_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Elements the controller animates
    pub fn targets(&self) -> &[ElementId] {
        &self.targets
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    fn enter<H: AnimationHost + ?Sized>(&mut self, host: &mut H) {
        if self.options.once && self.has_entered_before {
            return;
        }
        self.cancel_transition(host);
        self.has_entered_before = true;

        let offsets = match &self.config.kind {
            AnimationKind::StaggerGroup { origin, .. } => {
                stagger_offsets(self.targets.len(), self.config.stagger_interval, *origin)
            }
            _ => vec![0.0; self.targets.len()],
        };
        let to = self.config.kind.visible();
        let duration = secs(self.config.duration);
        let tweens = self
            .targets
            .iter()
            .zip(offsets)
            .map(|(&target, offset)| {
                host.start_tween(TweenSpec {
                    target,
                    to,
                    duration,
                    delay: secs(self.options.start_delay + offset),
                    easing: self.config.easing,
                })
            })
            .collect();

        self.begin(Direction::Enter, tweens);
        self.visibility.set(true);
    }

    fn exit<H: AnimationHost + ?Sized>(&mut self, host: &mut H) {
        if self.options.once {
            return;
        }
        self.cancel_transition(host);

        let kind = &self.config.kind;
        let offsets = if kind.is_group() {
            stagger_offsets(
                self.targets.len(),
                self.config.stagger_interval * EXIT_STAGGER_FACTOR,
                StaggerOrigin::End,
            )
        } else {
            vec![0.0; self.targets.len()]
        };
        let to = kind.exit(self.config.travel_distance, self.config.scale_factor);
        let duration = secs(self.config.duration * kind.exit_duration_factor());
        let tweens = self
            .targets
            .iter()
            .zip(offsets)
            .map(|(&target, offset)| {
                host.start_tween(TweenSpec {
                    target,
                    to,
                    duration,
                    delay: secs(offset),
                    easing: EasingType::EaseInQuad,
                })
            })
            .collect();

        self.begin(Direction::Exit, tweens);
        self.visibility.set(false);
    }

    fn begin(&mut self, direction: Direction, tweens: Vec<TweenId>) {
        debug!(?direction, tweens = tweens.len(), "Transition started");
        if tweens.is_empty() {
            self.transition = None;
            self.phase = settled(direction);
            return;
        }
        self.transition = Some(Transition {
            direction,
            outstanding: tweens,
        });
        self.phase = match direction {
            Direction::Enter => Phase::Entering,
            Direction::Exit => Phase::Exiting,
        };
    }

    fn cancel_transition<H: AnimationHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(transition) = self.transition.take() {
            host.kill_tweens_of(&self.targets);
            debug!(
                direction = ?transition.direction,
                outstanding = transition.outstanding.len(),
                "Transition cancelled"
            );
        }
    }

    fn complete_tween(&mut self, tween: TweenId) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        let Some(pos) = transition.outstanding.iter().position(|&t| t == tween) else {
            return;
        };
        transition.outstanding.swap_remove(pos);
        if transition.outstanding.is_empty() {
            let direction = transition.direction;
            self.transition = None;
            self.phase = settled(direction);
            debug!(?direction, "Transition completed");
        }
    }

    fn show_immediately<H: AnimationHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(pending) = self.pending.take() {
            host.cancel_timer(pending.timer);
        }
        if self.transition.take().is_some() {
            host.kill_tweens_of(&self.targets);
        }
        if let Some(watch) = self.watch.take() {
            host.disconnect(watch);
        }
        if let Some(subscription) = self.subscription.take() {
            host.unsubscribe_reduced_motion(subscription);
        }
        for &target in &self.targets {
            host.set_props(target, VisualProps::VISIBLE);
        }
        self.reduced_motion = true;
        self.settle_visible();
    }

    fn settle_visible(&mut self) {
        self.has_entered_before = true;
        self.phase = Phase::Entered;
        self.visibility.set(true);
    }
}

fn settled(direction: Direction) -> Phase {
    match direction {
        Direction::Enter => Phase::Entered,
        Direction::Exit => Phase::Idle,
    }
}
