//! Count-up animation: a pure interpolation driven by a timer interval.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::animations::phase::Phase;
use crate::config;
use crate::hooks::use_reduced_motion;

/// Milliseconds between interpolation steps.
const FRAME_MS: u32 = 16;

/// Cubic ease-out over `t` in [0, 1]: fast start, settling into the target.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Interpolates a displayed integer from 0 to `round(target)` over a fixed
/// duration. The value is rounded at every frame, so the last frame lands on
/// the rounded target exactly; negative targets count down symmetrically.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: f64,
    duration_ms: u32,
    elapsed_ms: u32,
}

impl CountUp {
    pub fn new(target: f64, duration_ms: u32) -> Self {
        Self { target, duration_ms, elapsed_ms: 0 }
    }

    /// Advance the animation clock. Saturates at the duration.
    pub fn tick(&mut self, dt_ms: u32) {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
    }

    /// The integer to display for the current clock.
    pub fn value(&self) -> i64 {
        if self.duration_ms == 0 {
            return self.final_value();
        }
        let t = f64::from(self.elapsed_ms) / f64::from(self.duration_ms);
        (self.target * ease_out(t)).round() as i64
    }

    pub fn final_value(&self) -> i64 {
        self.target.round() as i64
    }

    pub fn is_done(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    /// Animation target. Non-integer targets display rounded.
    pub value: f64,
    #[prop_or(config::COUNTER_DURATION_MS)]
    pub duration: u32,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Counts from 0 to the rounded target exactly once per mount. Re-renders do
/// not restart the run, even with a new `value` prop; under reduced motion
/// the final value is shown immediately. Unmounting cancels the interval.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let displayed = use_state(|| 0i64);
    let gate = use_mut_ref(Phase::default);
    let reduced_motion = use_reduced_motion();

    {
        let displayed = displayed.clone();
        let target = props.value;
        let duration = props.duration;
        use_effect_with_deps(
            move |_| {
                let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if gate.borrow_mut().start() {
                    if reduced_motion || duration == 0 {
                        displayed.set(CountUp::new(target, 0).value());
                        gate.borrow_mut().finish();
                    } else {
                        let animation = Rc::new(RefCell::new(CountUp::new(target, duration)));
                        let slot = ticker.clone();
                        *ticker.borrow_mut() = Some(Interval::new(FRAME_MS, move || {
                            let (value, done) = {
                                let mut animation = animation.borrow_mut();
                                animation.tick(FRAME_MS);
                                (animation.value(), animation.is_done())
                            };
                            displayed.set(value);
                            if done {
                                gate.borrow_mut().finish();
                                slot.borrow_mut().take();
                            }
                        }));
                    }
                }
                move || {
                    ticker.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <span class={props.class.clone()} aria-live="polite" aria-atomic="true">
            { props.prefix.clone() }{ *displayed }{ props.suffix.clone() }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(mut animation: CountUp) -> Vec<i64> {
        let mut frames = vec![animation.value()];
        while !animation.is_done() {
            animation.tick(FRAME_MS);
            frames.push(animation.value());
        }
        frames
    }

    #[test]
    fn ease_out_is_clamped_and_monotone() {
        assert_eq!(ease_out(-1.0), 0.0);
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(2.0), 1.0);

        let mut previous = 0.0;
        for step in 0..=100 {
            let value = ease_out(f64::from(step) / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn lands_on_the_rounded_target() {
        for &(target, expected) in
            &[(10_000.0, 10_000), (99.9, 100), (24.0, 24), (0.0, 0), (-500.0, -500)]
        {
            let frames = run_to_end(CountUp::new(target, 2_000));
            assert_eq!(*frames.last().unwrap(), expected, "target {target}");
        }
    }

    #[test]
    fn starts_from_zero() {
        let animation = CountUp::new(500.0, 2_000);
        assert_eq!(animation.value(), 0);
    }

    #[test]
    fn frames_are_monotone() {
        let frames = run_to_end(CountUp::new(10_000.0, 2_000));
        assert!(frames.windows(2).all(|pair| pair[0] <= pair[1]));

        let falling = run_to_end(CountUp::new(-42.0, 1_000));
        assert!(falling.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn zero_duration_snaps_to_the_target() {
        let animation = CountUp::new(99.9, 0);
        assert_eq!(animation.value(), 100);
        assert!(animation.is_done());
    }

    #[test]
    fn ticks_saturate_at_the_duration() {
        let mut animation = CountUp::new(500.0, 100);
        animation.tick(5_000);
        assert!(animation.is_done());
        assert_eq!(animation.value(), 500);
        animation.tick(16);
        assert_eq!(animation.value(), 500);
    }
}
