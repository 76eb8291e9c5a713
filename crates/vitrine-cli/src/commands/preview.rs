use std::time::Duration;

use anyhow::Result;
use clap::ValueEnum;

use vitrine_core::AppConfig;
use vitrine_motion::{
    AnimationKind, ElementId, MotionConfigExt, ScrollAnimationController, Stage,
};

/// Simulation step, finer than any sampling rate we print at
const SIM_FRAME: Duration = Duration::from_millis(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewKind {
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Scale,
    Stagger,
}

impl PreviewKind {
    fn animation(self) -> AnimationKind {
        match self {
            PreviewKind::FadeUp => AnimationKind::FadeUp,
            PreviewKind::FadeDown => AnimationKind::FadeDown,
            PreviewKind::FadeLeft => AnimationKind::FadeLeft,
            PreviewKind::FadeRight => AnimationKind::FadeRight,
            PreviewKind::Scale => AnimationKind::Scale,
            PreviewKind::Stagger => AnimationKind::stagger(".item"),
        }
    }
}

pub struct PreviewOptions {
    pub kind: PreviewKind,
    pub children: usize,
    pub once: bool,
    pub reduced_motion: bool,
    pub fps: u32,
}

/// Scroll script: section label, whether the element is in view, how long
/// to hold that state
const SCRIPT: [(&str, bool, Duration); 3] = [
    ("scroll into view", true, Duration::from_millis(1200)),
    ("scroll away", false, Duration::from_millis(600)),
    ("scroll back", true, Duration::from_millis(1200)),
];

pub fn run(config: &AppConfig, opts: PreviewOptions) -> Result<()> {
    let mut stage = Stage::new().with_reduced_motion(opts.reduced_motion);
    let section = stage.add_element();
    let kind = opts.kind.animation();
    let targets: Vec<ElementId> = if kind.is_group() {
        (0..opts.children)
            .map(|_| stage.add_child(section, "item"))
            .collect()
    } else {
        vec![section]
    };

    let mut options = config.motion.observation();
    if opts.once {
        options = options.once();
    }
    let animation = config.motion.animation(kind);
    println!(
        "Preview: {} ({} target(s), {:.2}s, {}){}",
        animation.kind.name(),
        targets.len(),
        animation.duration,
        animation.easing.name(),
        if opts.reduced_motion { " with reduced motion" } else { "" }
    );

    let controller =
        ScrollAnimationController::attach(Some(section), animation, options, &mut stage)
            .with_debounce(config.motion.debounce());
    let mut controllers = [controller];
    let sample = Duration::from_secs(1) / opts.fps;

    for (label, in_view, hold) in SCRIPT {
        println!("\n== {} ==", label);
        stage.set_intersecting(section, in_view);

        let end = stage.now() + hold;
        let mut next_sample = stage.now();
        while stage.now() < end {
            if stage.now() >= next_sample {
                print_frame(&stage, &controllers[0], &targets);
                next_sample += sample;
            }
            stage.step(SIM_FRAME, &mut controllers);
        }
    }
    print_frame(&stage, &controllers[0], &targets);

    controllers[0].detach(&mut stage);
    println!("\n{} tween(s) started", stage.tweens_started());
    Ok(())
}

fn print_frame(stage: &Stage, controller: &ScrollAnimationController, targets: &[ElementId]) {
    let phase = format!("{:?}", controller.phase());
    let head = format!("t={:>6.3}s  {:<9}", stage.now().as_secs_f64(), phase);

    match targets {
        [single] => {
            let p = stage.props(*single).unwrap_or_default();
            println!(
                "{}  opacity {:.2}  x {:>6.1}  y {:>6.1}  scale {:.3}",
                head, p.opacity, p.x, p.y, p.scale
            );
        }
        many => {
            let opacities: Vec<String> = many
                .iter()
                .map(|el| format!("{:.2}", stage.props(*el).unwrap_or_default().opacity))
                .collect();
            println!("{}  opacity [{}]", head, opacities.join(" "));
        }
    }
}
