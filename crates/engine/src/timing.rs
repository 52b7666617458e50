//! DAS/ARR input timing classification.
//!
//! A pure state machine mapping key-down/key-up/tick/config events to
//! movement actions. The caller owns the [`InputTimer`] context and threads
//! it across calls; there is no hidden state and no internal queue.
//!
//! Classification rules:
//! - key-down emits a provisional tap immediately (the piece moves one cell)
//! - a press released with `elapsed <= das` stays a tap
//! - once DAS expires (`elapsed > das` at release, or `elapsed >= das` at a
//!   tick) the press becomes a hold: a hold-start/hold-move pair stamped at
//!   the expiry boundary, then one repeat-move per ARR interval
//! - ARR pulses derive from repeated addition starting at the expiry
//!   instant, never from dividing elapsed time, so a continuous hold never
//!   drifts
//! - malformed events (key-up for a direction not held, a tick with nothing
//!   held, key-down for the already held direction) are no-ops

use finesse_core::{Action, ActionKind, Direction};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Actions emitted by one classifier call. Bursts are rare and bounded.
pub type Emitted = SmallVec<[Action; 4]>;

/// Upper bound on repeat pulses emitted by a single tick. Bounds the burst
/// after a long host stall; the remainder is emitted on following ticks.
pub const MAX_PULSES_PER_TICK: usize = 16;

/// DAS delay and ARR interval, both in milliseconds.
/// Values are clamped at construction: delay >= 0, interval >= 1.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TimingConfig {
    das_delay: u64,
    arr_interval: u64,
}

impl TimingConfig {
    pub fn new(das_delay_ms: i64, arr_interval_ms: i64) -> Self {
        Self {
            das_delay: das_delay_ms.max(0) as u64,
            arr_interval: arr_interval_ms.max(1) as u64,
        }
    }

    pub fn das_delay_ms(&self) -> u64 {
        self.das_delay
    }

    pub fn arr_interval_ms(&self) -> u64 {
        self.arr_interval
    }

    /// Guideline handling: 10-frame DAS, 2-frame ARR at 60 fps.
    pub fn guideline() -> Self {
        Self::new(167, 33)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::new(150, 50)
    }
}

/// Events delivered by the host loop, timestamps in non-decreasing order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Direction, u64),
    KeyUp(Direction, u64),
    Tick(u64),
    Configure(TimingConfig),
}

/// Timing state: idle, charging toward DAS expiry, or auto-repeating.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum DasState {
    #[default]
    Idle,
    Charging {
        dir: Direction,
        pressed_at: u64,
    },
    Repeating {
        dir: Direction,
        last_pulse: u64,
    },
}

impl DasState {
    /// Currently held direction, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Idle => None,
            Self::Charging { dir, .. } | Self::Repeating { dir, .. } => Some(*dir),
        }
    }
}

/// The caller-owned timing context.
///
/// `pending_tap` is the provisional-action slot: set when a tap is emitted,
/// resolved exactly once - confirmed on release (the tap stands) or cleared
/// when the press turns into a hold (the tap is retracted downstream).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct InputTimer {
    state: DasState,
    config: TimingConfig,
    pending_tap: Option<Direction>,
}

impl InputTimer {
    pub fn new(config: TimingConfig) -> Self {
        Self {
            state: DasState::Idle,
            config,
            pending_tap: None,
        }
    }

    pub fn state(&self) -> DasState {
        self.state
    }

    pub fn config(&self) -> TimingConfig {
        self.config
    }

    pub fn pending_tap(&self) -> Option<Direction> {
        self.pending_tap
    }

    /// Dispatch one host event.
    pub fn handle(&mut self, event: InputEvent) -> Emitted {
        match event {
            InputEvent::KeyDown(dir, t) => self.key_down(dir, t),
            InputEvent::KeyUp(dir, t) => self.key_up(dir, t),
            InputEvent::Tick(t) => self.tick(t),
            InputEvent::Configure(config) => self.configure(config),
        }
    }

    /// A direction key went down. Emits a provisional tap and starts
    /// charging. A key-down for the already held direction is a no-op; a
    /// key-down for the other direction supersedes the current press (its
    /// emissions stand unmodified).
    pub fn key_down(&mut self, dir: Direction, t: u64) -> Emitted {
        let mut out = Emitted::new();
        if self.state.direction() == Some(dir) {
            return out;
        }
        self.state = DasState::Charging {
            dir,
            pressed_at: t,
        };
        self.pending_tap = Some(dir);
        out.push(Action::new(ActionKind::TapMove(dir), t));
        out
    }

    /// A direction key was released. Released at `elapsed <= das` the press
    /// stays a tap; past the boundary it became a hold even if no tick
    /// observed it, so the hold-start/hold-move pair is emitted stamped at
    /// the expiry instant.
    pub fn key_up(&mut self, dir: Direction, t: u64) -> Emitted {
        let mut out = Emitted::new();
        match self.state {
            DasState::Charging { dir: held, pressed_at } if held == dir => {
                let expiry = pressed_at + self.config.das_delay;
                if t > expiry {
                    out.push(Action::new(ActionKind::HoldStart(dir), expiry));
                    out.push(Action::new(ActionKind::HoldMove(dir), expiry));
                }
                self.pending_tap = None;
                self.state = DasState::Idle;
            }
            DasState::Repeating { dir: held, .. } if held == dir => {
                self.state = DasState::Idle;
            }
            _ => {} // key-up for a direction not held: no-op
        }
        out
    }

    /// Periodic host tick. Drives DAS expiry and ARR pulses; a tick with
    /// nothing held is a harmless no-op.
    pub fn tick(&mut self, t: u64) -> Emitted {
        let mut out = Emitted::new();
        match self.state {
            DasState::Charging { dir, pressed_at } => {
                if t.saturating_sub(pressed_at) < self.config.das_delay {
                    return out;
                }
                let expiry = pressed_at + self.config.das_delay;
                out.push(Action::new(ActionKind::HoldStart(dir), expiry));
                out.push(Action::new(ActionKind::HoldMove(dir), expiry));
                self.pending_tap = None;
                let last = self.emit_pulses(dir, expiry, t, &mut out);
                self.state = DasState::Repeating {
                    dir,
                    last_pulse: last,
                };
            }
            DasState::Repeating { dir, last_pulse } => {
                let last = self.emit_pulses(dir, last_pulse, t, &mut out);
                self.state = DasState::Repeating {
                    dir,
                    last_pulse: last,
                };
            }
            DasState::Idle => {}
        }
        out
    }

    /// Swap the configuration in place; the current press keeps charging or
    /// repeating under the new values.
    pub fn configure(&mut self, config: TimingConfig) -> Emitted {
        self.config = config;
        Emitted::new()
    }

    /// One repeat-move per whole ARR boundary crossed in (`from`, `t`],
    /// each stamped at its boundary. Returns the last boundary reached.
    fn emit_pulses(&self, dir: Direction, from: u64, t: u64, out: &mut Emitted) -> u64 {
        let arr = self.config.arr_interval;
        let mut last = from;
        let mut pulses = 0;
        while last + arr <= t && pulses < MAX_PULSES_PER_TICK {
            last += arr;
            out.push(Action::new(ActionKind::RepeatMove(dir), last));
            pulses += 1;
        }
        last
    }
}

impl Default for InputTimer {
    fn default() -> Self {
        Self::new(TimingConfig::default())
    }
}
