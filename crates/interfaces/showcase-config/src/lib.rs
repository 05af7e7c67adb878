//! Central configuration constants for the demo script timings.

use std::time::Duration;

/// Delay between mounting the demo and the first step (auto-start).
pub const START_DELAY_MS: u64 = 2_000;

/// Delay between a restart (or workflow switch) and the first step.
pub const RESTART_DELAY_MS: u64 = 1_000;

/// Pause between entering the typing step and the first revealed character.
pub const QUERY_LEAD_IN_MS: u64 = 1_000;

/// Pause between entering the feedback step and the first revealed character.
pub const FEEDBACK_LEAD_IN_MS: u64 = 500;

/// Reveal interval per character for both typing slots.
pub const CHAR_DELAY_MS: u64 = 50;

/// Hold after the last character before the typed message is sent.
pub const TYPING_SETTLE_MS: u64 = 800;

/// Time a gathering stage spends in `connecting`.
pub const GATHERING_CONNECT_MS: u64 = 600;

/// Gap between a gathering stage completing and the next one starting.
pub const GATHERING_SETTLE_MS: u64 = 200;

/// Time a feedback-processing stage spends in `connecting`.
pub const FEEDBACK_CONNECT_MS: u64 = 500;

/// Gap between feedback-processing stages.
pub const FEEDBACK_SETTLE_MS: u64 = 150;

/// After recommendations are shown, the sidebar auto-expands after this delay.
pub const FIRST_RESPONSE_DELAY_MS: u64 = 1_500;

/// Time spent on the recommendation step before the feedback stage opens.
pub const FEEDBACK_STAGE_DELAY_MS: u64 = 4_000;

/// Delay between the feedback message being sent and processing starting.
pub const FEEDBACK_SUBMIT_DELAY_MS: u64 = 1_000;

/// Bounds for the playback speed multiplier.
pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 100.0;

/// Convenience function to clamp a speed multiplier into the allowed range.
pub fn clamp_speed(v: f64) -> f64 {
    if v.is_nan() {
        return 1.0;
    }
    v.clamp(MIN_SPEED, MAX_SPEED)
}

/// Character reveal timing for one typing slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingPace {
    pub lead_in: Duration,
    pub per_char: Duration,
    pub settle: Duration,
}

/// Per-stage timing for a stage animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagePace {
    pub connect: Duration,
    pub settle: Duration,
}

impl StagePace {
    pub fn per_stage(&self) -> Duration {
        self.connect + self.settle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoTimings {
    pub start_delay: Duration,
    pub restart_delay: Duration,
    pub query_typing: TypingPace,
    pub feedback_typing: TypingPace,
    pub gathering: StagePace,
    pub feedback_processing: StagePace,
    pub first_response_delay: Duration,
    pub feedback_stage_delay: Duration,
    pub feedback_submit_delay: Duration,
}

impl Default for DemoTimings {
    fn default() -> Self {
        let ms = Duration::from_millis;
        Self {
            start_delay: ms(START_DELAY_MS),
            restart_delay: ms(RESTART_DELAY_MS),
            query_typing: TypingPace {
                lead_in: ms(QUERY_LEAD_IN_MS),
                per_char: ms(CHAR_DELAY_MS),
                settle: ms(TYPING_SETTLE_MS),
            },
            feedback_typing: TypingPace {
                lead_in: ms(FEEDBACK_LEAD_IN_MS),
                per_char: ms(CHAR_DELAY_MS),
                settle: ms(TYPING_SETTLE_MS),
            },
            gathering: StagePace {
                connect: ms(GATHERING_CONNECT_MS),
                settle: ms(GATHERING_SETTLE_MS),
            },
            feedback_processing: StagePace {
                connect: ms(FEEDBACK_CONNECT_MS),
                settle: ms(FEEDBACK_SETTLE_MS),
            },
            first_response_delay: ms(FIRST_RESPONSE_DELAY_MS),
            feedback_stage_delay: ms(FEEDBACK_STAGE_DELAY_MS),
            feedback_submit_delay: ms(FEEDBACK_SUBMIT_DELAY_MS),
        }
    }
}

impl DemoTimings {
    /// Every delay divided by `speed` (clamped), so `2.0` plays twice as fast.
    pub fn scaled(&self, speed: f64) -> Self {
        let speed = clamp_speed(speed);
        let s = |d: Duration| d.div_f64(speed);
        let typing = |p: TypingPace| TypingPace {
            lead_in: s(p.lead_in),
            per_char: s(p.per_char),
            settle: s(p.settle),
        };
        let stages = |p: StagePace| StagePace {
            connect: s(p.connect),
            settle: s(p.settle),
        };
        Self {
            start_delay: s(self.start_delay),
            restart_delay: s(self.restart_delay),
            query_typing: typing(self.query_typing),
            feedback_typing: typing(self.feedback_typing),
            gathering: stages(self.gathering),
            feedback_processing: stages(self.feedback_processing),
            first_response_delay: s(self.first_response_delay),
            feedback_stage_delay: s(self.feedback_stage_delay),
            feedback_submit_delay: s(self.feedback_submit_delay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_is_clamped() {
        assert_eq!(clamp_speed(0.0), MIN_SPEED);
        assert_eq!(clamp_speed(1_000.0), MAX_SPEED);
        assert_eq!(clamp_speed(f64::NAN), 1.0);
    }

    #[test]
    fn doubling_speed_halves_every_delay() {
        let t = DemoTimings::default().scaled(2.0);
        assert_eq!(t.start_delay, Duration::from_millis(1_000));
        assert_eq!(t.query_typing.per_char, Duration::from_millis(25));
        assert_eq!(t.gathering.per_stage(), Duration::from_millis(400));
    }
}
