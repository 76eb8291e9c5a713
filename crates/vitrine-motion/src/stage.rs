//! In-memory animation host driven by a virtual clock
//!
//! `Stage` keeps a flat element tree, runs tweens frame by frame and turns
//! timers, intersection changes and tween completions into
//! [`ControllerEvent`]s. Nothing here touches a real clock, which makes it
//! the host used by tests and by the terminal preview.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use crate::config::ObservationOptions;
use crate::controller::ScrollAnimationController;
use crate::easing::EasingTypeExt;
use crate::host::{
    AnimationHost, ControllerEvent, ElementId, SubscriptionId, TimerId, TweenId, TweenSpec,
    WatchId,
};
use crate::props::VisualProps;
use crate::timing::{is_complete, progress};

#[derive(Debug, Clone)]
struct Element {
    props: VisualProps,
    parent: Option<ElementId>,
    class: Option<String>,
    intersecting: bool,
}

#[derive(Debug, Clone)]
struct ActiveTween {
    id: TweenId,
    spec: TweenSpec,
    start_at: Duration,
    /// Captured when the delay elapses
    from: Option<VisualProps>,
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    id: TimerId,
    fire_at: Duration,
}

/// Deterministic [`AnimationHost`]
///
/// Advance it in frame-sized steps: work started in response to the events
/// of one step begins at the clock value of that step.
#[derive(Debug, Default)]
pub struct Stage {
    now: Duration,
    next_id: u64,
    elements: BTreeMap<ElementId, Element>,
    tweens: Vec<ActiveTween>,
    timers: Vec<PendingTimer>,
    watches: BTreeMap<WatchId, ElementId>,
    subscriptions: BTreeSet<SubscriptionId>,
    reduced_motion: bool,
    queued: Vec<ControllerEvent>,
    tweens_started: usize,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Add a top-level element, initially out of view
    pub fn add_element(&mut self) -> ElementId {
        self.insert(None, None)
    }

    /// Add a child of `parent` carrying `class`
    pub fn add_child(&mut self, parent: ElementId, class: &str) -> ElementId {
        self.insert(Some(parent), Some(class.to_string()))
    }

    fn insert(&mut self, parent: Option<ElementId>, class: Option<String>) -> ElementId {
        let id = ElementId(self.next_id());
        self.elements.insert(
            id,
            Element {
                props: VisualProps::VISIBLE,
                parent,
                class,
                intersecting: false,
            },
        );
        id
    }

    /// Move `element` into or out of the viewport
    pub fn set_intersecting(&mut self, element: ElementId, intersecting: bool) {
        let Some(el) = self.elements.get_mut(&element) else {
            return;
        };
        if el.intersecting == intersecting {
            return;
        }
        el.intersecting = intersecting;
        for (&watch, _) in self.watches.iter().filter(|(_, e)| **e == element) {
            self.queued.push(ControllerEvent::Intersection {
                watch,
                is_intersecting: intersecting,
            });
        }
    }

    /// Change the reduced-motion preference and notify subscribers
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if self.reduced_motion == reduced {
            return;
        }
        self.reduced_motion = reduced;
        if !self.subscriptions.is_empty() {
            self.queued
                .push(ControllerEvent::ReducedMotionChanged { reduced });
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn props(&self, element: ElementId) -> Option<VisualProps> {
        self.elements.get(&element).map(|e| e.props)
    }

    /// Number of tweens started since the stage was created
    pub fn tweens_started(&self) -> usize {
        self.tweens_started
    }

    /// Tweens currently running (or waiting on their delay) for `element`
    pub fn active_tweens_for(&self, element: ElementId) -> usize {
        self.tweens
            .iter()
            .filter(|t| t.spec.target == element)
            .count()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Advance the clock by `dt` and collect what happened
    ///
    /// Events come out in order: externally triggered changes, expired
    /// timers (earliest first), then tween completions.
    pub fn advance(&mut self, dt: Duration) -> Vec<ControllerEvent> {
        self.now += dt;
        let mut events = std::mem::take(&mut self.queued);

        self.timers.sort_by_key(|t| t.fire_at);
        let now = self.now;
        let (expired, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.timers)
            .into_iter()
            .partition(|t| t.fire_at <= now);
        self.timers = pending;
        events.extend(expired.into_iter().map(|t| ControllerEvent::TimerFired(t.id)));

        let mut completed = Vec::new();
        for tween in &mut self.tweens {
            if now < tween.start_at {
                continue;
            }
            let Some(element) = self.elements.get_mut(&tween.spec.target) else {
                continue;
            };
            let from = *tween.from.get_or_insert(element.props);
            let elapsed = now - tween.start_at;
            let t = tween
                .spec
                .easing
                .apply(progress(elapsed, tween.spec.duration));
            element.props = from.lerp(&tween.spec.to, t);
            if is_complete(elapsed, tween.spec.duration) {
                element.props = tween.spec.to;
                completed.push(tween.id);
            }
        }
        self.tweens.retain(|t| !completed.contains(&t.id));
        events.extend(completed.into_iter().map(ControllerEvent::TweenCompleted));

        events
    }

    /// Advance by `dt` and route every resulting event into `controllers`
    pub fn step(&mut self, dt: Duration, controllers: &mut [ScrollAnimationController]) {
        for event in self.advance(dt) {
            for controller in controllers.iter_mut() {
                controller.handle_event(event, &mut *self);
            }
        }
    }

    /// Step in increments of `frame` until `total` has elapsed
    pub fn run_for(
        &mut self,
        total: Duration,
        frame: Duration,
        controllers: &mut [ScrollAnimationController],
    ) {
        let end = self.now + total;
        while self.now < end {
            let dt = frame.min(end - self.now);
            if dt.is_zero() {
                break;
            }
            self.step(dt, controllers);
        }
    }
}

fn class_matches(class: Option<&str>, selector: &str) -> bool {
    let wanted = selector.trim().trim_start_matches('.');
    class.is_some_and(|c| c.split_whitespace().any(|part| part == wanted))
}

impl AnimationHost for Stage {
    fn set_props(&mut self, target: ElementId, props: VisualProps) {
        if let Some(el) = self.elements.get_mut(&target) {
            el.props = props;
        }
    }

    fn start_tween(&mut self, spec: TweenSpec) -> TweenId {
        let id = TweenId(self.next_id());
        self.tweens_started += 1;
        self.tweens.push(ActiveTween {
            id,
            start_at: self.now + spec.delay,
            spec,
            from: None,
        });
        id
    }

    fn kill_tweens_of(&mut self, targets: &[ElementId]) {
        self.tweens.retain(|t| !targets.contains(&t.spec.target));
    }

    fn select_children(&self, container: ElementId, selector: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|(_, el)| el.parent == Some(container))
            .filter(|(_, el)| class_matches(el.class.as_deref(), selector))
            .map(|(&id, _)| id)
            .collect()
    }

    fn observe(&mut self, element: ElementId, _options: &ObservationOptions) -> WatchId {
        let watch = WatchId(self.next_id());
        self.watches.insert(watch, element);
        // Observers report the current state once on registration
        let is_intersecting = self
            .elements
            .get(&element)
            .is_some_and(|el| el.intersecting);
        self.queued.push(ControllerEvent::Intersection {
            watch,
            is_intersecting,
        });
        watch
    }

    fn disconnect(&mut self, watch: WatchId) {
        self.watches.remove(&watch);
        self.queued.retain(|event| {
            !matches!(event, ControllerEvent::Intersection { watch: w, .. } if *w == watch)
        });
    }

    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id());
        self.timers.push(PendingTimer {
            id,
            fire_at: self.now + delay,
        });
        id
    }

    fn cancel_timer(&mut self, timer: TimerId) {
        self.timers.retain(|t| t.id != timer);
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn subscribe_reduced_motion(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id());
        self.subscriptions.insert(id);
        id
    }

    fn unsubscribe_reduced_motion(&mut self, subscription: SubscriptionId) {
        self.subscriptions.remove(&subscription);
    }
}
