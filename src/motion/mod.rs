//! Decorative motion for the scattered canvas.
//!
//! Time-driven effects evaluated once per frame:
//! - Parallax: items drift against the pointer
//! - Scroll velocity: fast scrolling blurs and stretches items
//! - Float: a slow idle bob per item, staggered by index
//! - Loader: the 0-100 counter shown while images decode
//!
//! Everything here is pure state plus `dt`; the binary owns the clock.

// ─── Interpolation ───────────────────────────────────────────────────────────

/// Piecewise-linear map of `v` from `input` stops onto `output` stops.
///
/// `input` must be ascending and the same length as `output`. Values outside
/// the input range clamp to the end stops.
pub fn map_range(v: f32, input: &[f32], output: &[f32]) -> f32 {
    debug_assert_eq!(input.len(), output.len());
    let n = input.len().min(output.len());
    if n == 0 {
        return v;
    }
    if n == 1 || v <= input[0] {
        return output[0];
    }
    if v >= input[n - 1] {
        return output[n - 1];
    }
    for i in 1..n {
        if v <= input[i] {
            let span = input[i] - input[i - 1];
            let t = if span > 0.0 { (v - input[i - 1]) / span } else { 1.0 };
            return output[i - 1] + (output[i] - output[i - 1]) * t;
        }
    }
    output[n - 1]
}

fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = 1.0 - t.clamp(0.0, 1.0);
    1.0 - t * t * t
}

// ─── Spring ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
}

pub const PARALLAX_SPRING: SpringConfig = SpringConfig { stiffness: 200.0, damping: 20.0 };
pub const BLUR_SPRING: SpringConfig = SpringConfig { stiffness: 400.0, damping: 50.0 };
pub const SCALE_SPRING: SpringConfig = SpringConfig { stiffness: 300.0, damping: 45.0 };

/// Longest frame a spring will integrate; longer gaps are treated as this.
pub const MAX_STEP_SECS: f32 = 1.0 / 30.0;
const SUBSTEP_SECS: f32 = 1.0 / 240.0;

/// Unit-mass damped spring chasing a moving target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub value: f32,
    pub velocity: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f32) -> Self {
        Self {
            stiffness: config.stiffness,
            damping: config.damping,
            value,
            velocity: 0.0,
        }
    }

    /// Advance by `dt` seconds toward `target` (semi-implicit Euler).
    pub fn step(&mut self, target: f32, dt: f32) -> f32 {
        let mut remaining = dt.clamp(0.0, MAX_STEP_SECS);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SECS);
            let accel = -self.stiffness * (self.value - target) - self.damping * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        self.value
    }

    pub fn is_settled(&self, target: f32) -> bool {
        (self.value - target).abs() < 1e-3 && self.velocity.abs() < 1e-3
    }
}

// ─── Parallax ────────────────────────────────────────────────────────────────

pub const PARALLAX_STRENGTH: f32 = 7.5;

/// Pixel offset for a pointer at `pointer_norm`, where each axis runs from
/// -0.5 (left/top edge) to 0.5 (right/bottom edge). Items move away from
/// the pointer.
pub fn parallax_offset(pointer_norm: (f32, f32), strength: f32) -> (f32, f32) {
    let map = |v: f32| map_range(v, &[-0.5, 0.5], &[strength, -strength]);
    (map(pointer_norm.0), map(pointer_norm.1))
}

// ─── Scroll velocity ─────────────────────────────────────────────────────────

/// Scroll speed in px/s from successive offset samples.
///
/// The reading drops to zero as soon as the offset stops changing; the
/// springs downstream smooth the fall-off.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollVelocity {
    last: Option<(f32, f64)>,
    velocity: f32,
}

impl ScrollVelocity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the offset at `time` seconds. Returns the current velocity.
    pub fn sample(&mut self, offset: f32, time: f64) -> f32 {
        if let Some((last_offset, last_time)) = self.last {
            let dt = (time - last_time) as f32;
            if dt <= 0.0 {
                return self.velocity;
            }
            self.velocity = (offset - last_offset) / dt;
        }
        self.last = Some((offset, time));
        self.velocity
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityEffects {
    /// Gaussian blur radius, px.
    pub blur: f32,
    /// Vertical scale.
    pub stretch: f32,
    /// Horizontal scale.
    pub squash: f32,
}

impl Default for VelocityEffects {
    fn default() -> Self {
        Self { blur: 0.0, stretch: 1.0, squash: 1.0 }
    }
}

const VELOCITY_STOPS: [f32; 3] = [-4000.0, 0.0, 4000.0];

pub fn velocity_effects(velocity: f32) -> VelocityEffects {
    VelocityEffects {
        blur: map_range(velocity, &VELOCITY_STOPS, &[1.2, 0.0, 1.2]),
        stretch: map_range(velocity, &VELOCITY_STOPS, &[1.04, 1.0, 1.04]),
        squash: map_range(velocity, &VELOCITY_STOPS, &[0.97, 1.0, 0.97]),
    }
}

// ─── Canvas motion ───────────────────────────────────────────────────────────

/// Smoothed parallax and velocity effects shared by every canvas item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMotion {
    parallax_x: Spring,
    parallax_y: Spring,
    blur: Spring,
    stretch: Spring,
    squash: Spring,
    pub strength: f32,
}

impl CanvasMotion {
    pub fn new(strength: f32) -> Self {
        Self {
            parallax_x: Spring::new(PARALLAX_SPRING, 0.0),
            parallax_y: Spring::new(PARALLAX_SPRING, 0.0),
            blur: Spring::new(BLUR_SPRING, 0.0),
            stretch: Spring::new(SCALE_SPRING, 1.0),
            squash: Spring::new(SCALE_SPRING, 1.0),
            strength,
        }
    }

    pub fn update(&mut self, pointer_norm: (f32, f32), scroll_velocity: f32, dt: f32) {
        let (px, py) = parallax_offset(pointer_norm, self.strength);
        self.parallax_x.step(px, dt);
        self.parallax_y.step(py, dt);
        let target = velocity_effects(scroll_velocity);
        self.blur.step(target.blur, dt);
        self.stretch.step(target.stretch, dt);
        self.squash.step(target.squash, dt);
    }

    pub fn parallax(&self) -> (f32, f32) {
        (self.parallax_x.value, self.parallax_y.value)
    }

    pub fn effects(&self) -> VelocityEffects {
        VelocityEffects {
            blur: self.blur.value.max(0.0),
            stretch: self.stretch.value,
            squash: self.squash.value,
        }
    }
}

impl Default for CanvasMotion {
    fn default() -> Self {
        Self::new(PARALLAX_STRENGTH)
    }
}

// ─── Idle float ──────────────────────────────────────────────────────────────

pub const FLOAT_PERIOD_SECS: f32 = 8.0;
pub const FLOAT_RISE_PX: f32 = 6.0;
pub const FLOAT_SCALE: f32 = 1.015;
pub const FLOAT_STAGGER_SECS: f32 = 0.2;

const FLOAT_TIMES: [f32; 4] = [0.0, 0.45, 0.55, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatPose {
    /// Vertical offset, px. Negative is up.
    pub dy: f32,
    pub scale: f32,
}

impl Default for FloatPose {
    fn default() -> Self {
        Self { dy: 0.0, scale: 1.0 }
    }
}

/// Idle bob of the item at `index`, `t` seconds after the canvas appeared.
///
/// Rises over the first 45% of the loop, holds, then settles back. Each
/// segment is eased. Items start `index * 0.2` s late and rest until then.
pub fn float_bob(t: f32, index: usize) -> FloatPose {
    let local = t - index as f32 * FLOAT_STAGGER_SECS;
    if local <= 0.0 {
        return FloatPose::default();
    }
    let phase = (local % FLOAT_PERIOD_SECS) / FLOAT_PERIOD_SECS;
    // 0 at rest, 1 at the top of the bob
    let lift = if phase < FLOAT_TIMES[1] {
        smoothstep(phase / FLOAT_TIMES[1])
    } else if phase < FLOAT_TIMES[2] {
        1.0
    } else {
        1.0 - smoothstep((phase - FLOAT_TIMES[2]) / (FLOAT_TIMES[3] - FLOAT_TIMES[2]))
    };
    FloatPose {
        dy: -FLOAT_RISE_PX * lift,
        scale: 1.0 + (FLOAT_SCALE - 1.0) * lift,
    }
}

// ─── Loader ──────────────────────────────────────────────────────────────────

const LOADER_FADE_SECS: f32 = 0.4;

/// Progress counter shown over the canvas on start-up.
///
/// The count eases from 0 toward 100 over `min_duration` seconds but holds
/// at 99 until the assets are reported ready. After reaching 100 the overlay
/// fades out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderAnimation {
    min_duration: f32,
    elapsed: f32,
    ready: bool,
    finished_for: f32,
}

impl LoaderAnimation {
    pub fn new(min_duration: f32) -> Self {
        Self {
            min_duration: min_duration.max(0.0),
            elapsed: 0.0,
            ready: false,
            finished_for: 0.0,
        }
    }

    /// Advance by `dt`. `ready` latches once true.
    pub fn update(&mut self, dt: f32, ready: bool) {
        let dt = dt.max(0.0);
        self.ready |= ready;
        if self.is_finished() {
            self.finished_for += dt;
        }
        self.elapsed += dt;
    }

    /// Eased progress in `0.0..=100.0`.
    pub fn progress(&self) -> f32 {
        let t = if self.min_duration > 0.0 {
            self.elapsed / self.min_duration
        } else {
            1.0
        };
        let p = ease_out_cubic(t) * 100.0;
        if self.ready { p } else { p.min(99.0) }
    }

    /// Whole-number count for display.
    pub fn counter(&self) -> u32 {
        self.progress().floor() as u32
    }

    pub fn is_finished(&self) -> bool {
        self.ready && self.elapsed >= self.min_duration
    }

    /// Overlay opacity: 1 while counting, fading to 0 after finishing.
    pub fn overlay_alpha(&self) -> f32 {
        if !self.is_finished() {
            return 1.0;
        }
        (1.0 - self.finished_for / LOADER_FADE_SECS).clamp(0.0, 1.0)
    }

    /// Overlay fully gone.
    pub fn is_done(&self) -> bool {
        self.overlay_alpha() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_clamps_and_interpolates() {
        let input = [-4000.0, 0.0, 4000.0];
        let output = [1.2, 0.0, 1.2];
        assert!((map_range(0.0, &input, &output)).abs() < 1e-6);
        assert!((map_range(2000.0, &input, &output) - 0.6).abs() < 1e-6);
        assert!((map_range(-2000.0, &input, &output) - 0.6).abs() < 1e-6);
        assert!((map_range(9000.0, &input, &output) - 1.2).abs() < 1e-6);
        assert!((map_range(-9000.0, &input, &output) - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_parallax_inverts_pointer() {
        let (x, y) = parallax_offset((0.5, -0.5), PARALLAX_STRENGTH);
        assert!((x + 7.5).abs() < 1e-6);
        assert!((y - 7.5).abs() < 1e-6);
        let (cx, cy) = parallax_offset((0.0, 0.0), PARALLAX_STRENGTH);
        assert!(cx.abs() < 1e-6 && cy.abs() < 1e-6);
    }

    #[test]
    fn test_velocity_effects_at_rest() {
        assert_eq!(velocity_effects(0.0), VelocityEffects::default());
        let fast = velocity_effects(-4000.0);
        assert!((fast.blur - 1.2).abs() < 1e-6);
        assert!((fast.stretch - 1.04).abs() < 1e-6);
        assert!((fast.squash - 0.97).abs() < 1e-6);
    }

    #[test]
    fn test_scroll_velocity() {
        let mut sv = ScrollVelocity::new();
        assert_eq!(sv.sample(0.0, 0.0), 0.0);
        assert!((sv.sample(100.0, 0.1) - 1000.0).abs() < 1e-2);
        // same timestamp keeps the last reading
        assert!((sv.sample(500.0, 0.1) - 1000.0).abs() < 1e-2);
        assert_eq!(sv.sample(100.0, 0.2), 0.0);
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(BLUR_SPRING, 0.0);
        for _ in 0..120 {
            spring.step(1.2, 1.0 / 60.0);
        }
        assert!((spring.value - 1.2).abs() < 1e-3);
        assert!(spring.is_settled(1.2));
    }

    #[test]
    fn test_spring_clamps_long_frames() {
        let mut a = Spring::new(PARALLAX_SPRING, 0.0);
        let mut b = a;
        a.step(10.0, 5.0);
        b.step(10.0, MAX_STEP_SECS);
        assert!((a.value - b.value).abs() < 1e-6);
        assert!(a.value.is_finite());
    }

    #[test]
    fn test_canvas_motion_follows_pointer() {
        let mut motion = CanvasMotion::default();
        for _ in 0..240 {
            motion.update((0.5, 0.0), 0.0, 1.0 / 60.0);
        }
        let (x, y) = motion.parallax();
        assert!((x + 7.5).abs() < 1e-2);
        assert!(y.abs() < 1e-2);
        assert!((motion.effects().stretch - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_float_bob_keyframes() {
        // before the stagger delay the item rests
        assert_eq!(float_bob(0.1, 1), FloatPose::default());
        // 45%..55% of the loop is the hold at the top
        let top = float_bob(4.0, 0);
        assert!((top.dy + 6.0).abs() < 1e-4);
        assert!((top.scale - 1.015).abs() < 1e-5);
        // back at rest at the loop boundary
        assert!(float_bob(7.999, 0).dy.abs() < 1e-2);
        // stagger shifts the curve
        let a = float_bob(2.0, 0);
        let b = float_bob(2.2, 1);
        assert!((a.dy - b.dy).abs() < 1e-4);
    }

    #[test]
    fn test_loader_holds_until_ready() {
        let mut loader = LoaderAnimation::new(1.0);
        loader.update(2.0, false);
        assert_eq!(loader.counter(), 99);
        assert!(!loader.is_finished());
        assert!((loader.overlay_alpha() - 1.0).abs() < 1e-6);
        loader.update(0.0, true);
        assert_eq!(loader.counter(), 100);
        assert!(loader.is_finished());
        loader.update(0.5, false);
        assert!(loader.is_done());
    }

    #[test]
    fn test_loader_respects_min_duration() {
        let mut loader = LoaderAnimation::new(2.0);
        loader.update(0.5, true);
        assert!(loader.counter() < 100);
        assert!(!loader.is_finished());
        loader.update(1.5, true);
        assert!(loader.is_finished());
        assert_eq!(loader.counter(), 100);
    }
}
