//! Per-tick render entry point
//!
//! The host's display callback calls [`Renderer::task`] on every refresh.
//! The primary half draws the cat; the secondary half draws the status
//! screen. A display-power decision comes first: once the keyboard has been
//! idle longer than the configured timeout the panel is switched off and no
//! frame is drawn until new activity arrives.

use tapcat_hal::{
    Clock, GlyphSink, RawDisplay, Role, Rotation, Side, SplitInfo, Timestamp, WpmSource,
};
use tapcat_rle::FrameSink;

use crate::activity::ActivityTracker;
use crate::animation::{AnimationState, FrameTimer, Pose, Selector};
use crate::config::{AnimationConfig, ConfigError};
use crate::status::{StatusRenderer, StatusSnapshot};

/// What a render call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderOutcome {
    /// A cat frame was decoded onto the display
    Frame(Pose),
    /// Too early for the next frame; display untouched
    Held,
    /// Idle past the timeout; display is off
    Asleep,
    /// Status screen drawn
    Status,
}

impl RenderOutcome {
    /// Check if display memory was rewritten
    pub fn redrew(&self) -> bool {
        matches!(self, RenderOutcome::Frame(_) | RenderOutcome::Status)
    }
}

/// Routes decoded bytes to the display's raw write primitive
struct RawSink<'a, D: ?Sized>(&'a mut D);

impl<D: RawDisplay + ?Sized> FrameSink for RawSink<'_, D> {
    fn write(&mut self, byte: u8, position: u16) {
        self.0.write_raw_byte(byte, position);
    }
}

/// Display orientation for this half
///
/// The primary's left half keeps the host's requested rotation and the
/// right half is flipped so both cats sit upright. The secondary shows the
/// status column, which is drawn portrait.
pub fn init_rotation<S: SplitInfo + ?Sized>(requested: Rotation, split: &S) -> Rotation {
    match (split.role(), split.side()) {
        (Role::Primary, Side::Left) => requested,
        (Role::Primary, Side::Right) => Rotation::R180,
        (Role::Secondary, _) => Rotation::R270,
    }
}

/// Animation controller
///
/// Owns every piece of state that survives between ticks. One instance per
/// display, driven from a single execution context.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Renderer {
    config: AnimationConfig,
    selector: Selector,
    activity: ActivityTracker,
    state: AnimationState,
    timer: FrameTimer,
    status: StatusRenderer,
    asleep: bool,
}

impl Renderer {
    /// Create a renderer starting at `now`
    pub fn new(config: AnimationConfig, now: Timestamp) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            selector: Selector::new(config.frame_duration_ms),
            activity: ActivityTracker::new(config.activity, now),
            state: AnimationState::new(),
            timer: FrameTimer::new(now),
            status: StatusRenderer::new(&config),
            asleep: false,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Activity timestamp and its update strategy
    pub fn activity(&self) -> &ActivityTracker {
        &self.activity
    }

    /// Current sub-frame counters
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Check if the display was put to sleep
    pub fn is_asleep(&self) -> bool {
        self.asleep
    }

    /// Record a key press from the host's key event handler
    pub fn register_key_press(&mut self, now: Timestamp) {
        self.activity.register_key_press(now);
    }

    /// Host display callback
    ///
    /// Returns `false`: the display is fully owned by this renderer and the
    /// host must not run its own default rendering afterwards.
    pub fn task<H, D>(&mut self, host: &H, display: &mut D, status: &StatusSnapshot) -> bool
    where
        H: Clock + SplitInfo + WpmSource + ?Sized,
        D: RawDisplay + GlyphSink + ?Sized,
    {
        match host.role() {
            Role::Primary => {
                self.render_cat(host, display);
            }
            Role::Secondary => {
                self.render_status(status, display);
            }
        }
        false
    }

    /// One tick of the cat animation
    pub fn render_cat<H, D>(&mut self, host: &H, display: &mut D) -> RenderOutcome
    where
        H: Clock + SplitInfo + WpmSource + ?Sized,
        D: RawDisplay + ?Sized,
    {
        let now = host.now();
        self.activity.sample_wpm(host.current_wpm(), now);
        let elapsed = host.elapsed_since(self.activity.last_activity());

        if elapsed > self.config.display_timeout_ms {
            if display.is_on() {
                display.power_off();
            }
            self.asleep = true;
            return RenderOutcome::Asleep;
        }

        if self.asleep || !display.is_on() {
            display.power_on();
            self.asleep = false;
        }

        if !self.timer.admit(now, self.config.frame_duration_ms) {
            return RenderOutcome::Held;
        }

        let pose = self
            .selector
            .render(&mut self.state, elapsed, host.side(), &mut RawSink(display));
        RenderOutcome::Frame(pose)
    }

    /// Draw the status screen
    pub fn render_status<G: GlyphSink + ?Sized>(
        &self,
        status: &StatusSnapshot,
        glyphs: &mut G,
    ) -> RenderOutcome {
        self.status.render(status, glyphs);
        RenderOutcome::Status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ActivitySource, REFRESH_INTERVAL_MS};
    use heapless::Vec;
    use crate::frames::{LEFT, RIGHT};
    use tapcat_display::{Canvas, GlyphGrid};
    use tapcat_hal::FixedSplit;
    use tapcat_rle::decode;

    struct FakeHost {
        now: Timestamp,
        split: FixedSplit,
        wpm: u8,
    }

    impl FakeHost {
        fn new(side: Side, role: Role) -> Self {
            Self {
                now: 0,
                split: FixedSplit { side, role },
                wpm: 0,
            }
        }
    }

    impl Clock for FakeHost {
        fn now(&self) -> Timestamp {
            self.now
        }
    }

    impl SplitInfo for FakeHost {
        fn side(&self) -> Side {
            self.split.side
        }

        fn role(&self) -> Role {
            self.split.role
        }
    }

    impl WpmSource for FakeHost {
        fn current_wpm(&self) -> u8 {
            self.wpm
        }
    }

    /// Raw canvas plus glyph grid, like an OLED driver with a font
    #[derive(Default)]
    struct FakeOled {
        canvas: Canvas,
        text: GlyphGrid<5, 16>,
    }

    impl RawDisplay for FakeOled {
        fn write_raw_byte(&mut self, byte: u8, index: u16) {
            self.canvas.write_raw_byte(byte, index);
        }

        fn power_off(&mut self) {
            self.canvas.power_off();
        }

        fn power_on(&mut self) {
            self.canvas.power_on();
        }

        fn is_on(&self) -> bool {
            self.canvas.is_on()
        }
    }

    impl GlyphSink for FakeOled {
        fn set_cursor(&mut self, col: u8, line: u8) {
            self.text.set_cursor(col, line);
        }

        fn write_glyphs(&mut self, codes: &[u8]) {
            self.text.write_glyphs(codes);
        }
    }

    fn renderer(config: AnimationConfig) -> Renderer {
        Renderer::new(config, 0).unwrap()
    }

    fn expected(frame: &tapcat_rle::EncodedFrame) -> Canvas {
        let mut canvas = Canvas::new();
        decode(frame.as_bytes(), &mut canvas);
        canvas
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = AnimationConfig {
            frame_duration_ms: 0,
            ..Default::default()
        };
        assert_eq!(
            Renderer::new(config, 0).unwrap_err(),
            ConfigError::ZeroFrameDuration
        );
    }

    #[test]
    fn test_frames_are_gated_by_duration() {
        let mut r = renderer(AnimationConfig::default());
        let mut host = FakeHost::new(Side::Right, Role::Primary);
        let mut canvas = Canvas::new();

        host.now = 200;
        assert_eq!(r.render_cat(&host, &mut canvas), RenderOutcome::Held);
        host.now = 201;
        assert!(r.render_cat(&host, &mut canvas).redrew());
        host.now = 300;
        assert_eq!(r.render_cat(&host, &mut canvas), RenderOutcome::Held);
    }

    /// Times at which frames were drawn when rendering every `period` ms
    fn frame_times(period: u32, until: Timestamp) -> Vec<Timestamp, 64> {
        let mut r = renderer(AnimationConfig::default());
        let mut host = FakeHost::new(Side::Right, Role::Primary);
        let mut canvas = Canvas::new();
        let mut times = Vec::new();

        host.now = period;
        while host.now <= until {
            if let RenderOutcome::Frame(_) = r.render_cat(&host, &mut canvas) {
                times.push(host.now).unwrap();
            }
            host.now += period;
        }
        times
    }

    #[test]
    fn test_refresh_period_keeps_frame_cadence() {
        let times = frame_times(REFRESH_INTERVAL_MS, 2_000);

        assert_eq!(times[0], 201);
        assert_eq!(times.len(), 9);
        for pair in times.windows(2) {
            assert_eq!(pair[1] - pair[0], 201);
        }
    }

    #[test]
    fn test_dividing_refresh_period_lands_late() {
        // A period that divides the frame duration misses every boundary
        let times = frame_times(50, 2_000);

        assert_eq!(times[0], 250);
        for pair in times.windows(2) {
            assert_eq!(pair[1] - pair[0], 250);
        }
    }

    #[test]
    fn test_key_press_drives_tapping_then_paws_then_idle() {
        let mut r = renderer(AnimationConfig::default());
        let mut host = FakeHost::new(Side::Right, Role::Primary);
        let mut canvas = Canvas::new();

        r.register_key_press(1_000);

        host.now = 1_201;
        assert_eq!(
            r.render_cat(&host, &mut canvas),
            RenderOutcome::Frame(Pose::Tapping)
        );
        assert_eq!(canvas.as_bytes(), expected(&RIGHT.tap[1]).as_bytes());

        host.now = 1_500;
        assert_eq!(
            r.render_cat(&host, &mut canvas),
            RenderOutcome::Frame(Pose::Cooldown)
        );
        assert_eq!(canvas.as_bytes(), expected(&RIGHT.paws).as_bytes());

        host.now = 2_700;
        assert_eq!(
            r.render_cat(&host, &mut canvas),
            RenderOutcome::Frame(Pose::Idling)
        );
        assert_eq!(r.state().idle_index(), 1);
        assert_eq!(canvas.as_bytes(), expected(&RIGHT.idle[1]).as_bytes());
    }

    #[test]
    fn test_left_half_uses_left_frames() {
        let mut r = renderer(AnimationConfig::default());
        let mut host = FakeHost::new(Side::Left, Role::Primary);
        let mut canvas = Canvas::new();

        host.now = 700;
        r.render_cat(&host, &mut canvas);
        assert_eq!(canvas.as_bytes(), expected(&LEFT.paws).as_bytes());
    }

    #[test]
    fn test_sleeps_after_timeout() {
        let mut r = renderer(AnimationConfig::default());
        let mut host = FakeHost::new(Side::Right, Role::Primary);
        let mut canvas = Canvas::new();

        host.now = 60_000;
        assert!(r.render_cat(&host, &mut canvas).redrew());
        assert!(canvas.is_on());

        let before = *r.state();
        canvas.mark_clean();
        host.now = 60_300;
        assert_eq!(r.render_cat(&host, &mut canvas), RenderOutcome::Asleep);
        assert!(!canvas.is_on());
        assert!(r.is_asleep());
        assert_eq!(*r.state(), before);
        assert!(!canvas.is_dirty());
    }

    #[test]
    fn test_wakes_on_activity() {
        let mut r = renderer(AnimationConfig::default());
        let mut host = FakeHost::new(Side::Right, Role::Primary);
        let mut canvas = Canvas::new();

        host.now = 70_000;
        assert_eq!(r.render_cat(&host, &mut canvas), RenderOutcome::Asleep);

        r.register_key_press(70_050);
        host.now = 70_100;
        assert_eq!(
            r.render_cat(&host, &mut canvas),
            RenderOutcome::Frame(Pose::Tapping)
        );
        assert!(canvas.is_on());
        assert!(!r.is_asleep());
    }

    #[test]
    fn test_elapsed_read_across_clock_wrap() {
        let start = u32::MAX - 100;
        let mut r = Renderer::new(AnimationConfig::default(), start).unwrap();
        let mut host = FakeHost::new(Side::Right, Role::Primary);
        let mut canvas = Canvas::new();

        r.register_key_press(start);
        host.now = 150;
        assert_eq!(
            r.render_cat(&host, &mut canvas),
            RenderOutcome::Frame(Pose::Tapping)
        );
    }

    #[test]
    fn test_wpm_mode_refreshes_activity() {
        let mut r = renderer(AnimationConfig {
            activity: ActivitySource::Wpm,
            ..Default::default()
        });
        let mut host = FakeHost::new(Side::Right, Role::Primary);
        let mut canvas = Canvas::new();

        host.now = 5_000;
        host.wpm = 42;
        assert_eq!(
            r.render_cat(&host, &mut canvas),
            RenderOutcome::Frame(Pose::Tapping)
        );

        // Same speed on the next tick is not new activity
        host.now = 5_500;
        assert_eq!(
            r.render_cat(&host, &mut canvas),
            RenderOutcome::Frame(Pose::Cooldown)
        );
    }

    #[test]
    fn test_wpm_ignored_in_key_mode() {
        let mut r = renderer(AnimationConfig::default());
        let mut host = FakeHost::new(Side::Right, Role::Primary);
        let mut canvas = Canvas::new();

        host.now = 5_000;
        host.wpm = 42;
        assert_eq!(
            r.render_cat(&host, &mut canvas),
            RenderOutcome::Frame(Pose::Idling)
        );
    }

    #[test]
    fn test_task_by_role() {
        let mut r = renderer(AnimationConfig::default());
        let mut oled = FakeOled::default();
        let status = StatusSnapshot::default();

        let mut primary = FakeHost::new(Side::Left, Role::Primary);
        primary.now = 201;
        assert!(!r.task(&primary, &mut oled, &status));
        assert_eq!(oled.canvas.as_bytes(), expected(&LEFT.tap[1]).as_bytes());
        assert_eq!(oled.text.line(0).unwrap(), &[b' '; 5]);

        let secondary = FakeHost::new(Side::Right, Role::Secondary);
        assert!(!r.task(&secondary, &mut oled, &status));
        assert_eq!(oled.text.line(0).unwrap(), &[0x80, 0x81, 0x82, 0x83, 0x84]);
    }

    #[test]
    fn test_init_rotation() {
        let left = FixedSplit {
            side: Side::Left,
            role: Role::Primary,
        };
        let right = FixedSplit {
            side: Side::Right,
            role: Role::Primary,
        };
        let secondary = FixedSplit {
            side: Side::Left,
            role: Role::Secondary,
        };

        assert_eq!(init_rotation(Rotation::R90, &left), Rotation::R90);
        assert_eq!(init_rotation(Rotation::R0, &right), Rotation::R180);
        assert_eq!(init_rotation(Rotation::R0, &secondary), Rotation::R270);
    }
}
