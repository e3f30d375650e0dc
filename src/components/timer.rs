//! Cooldown timers that gate player actions.
//!
//! A [`CooldownTimer`] counts simulation seconds after [`CooldownTimer::activate`]
//! and deactivates itself once its duration has elapsed. A timer may carry an
//! effect value; [`CooldownTimer::update`] hands that effect back exactly once,
//! on the tick the timer finishes, so the caller can apply it synchronously.
//!
//! The player owns four of them, grouped in [`ActionTimers`].
use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

/// Deferred side effect bound to a player timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEffect {
    /// Apply the selected tool at the target tile.
    UseTool,
    /// Plant the selected seed at the target tile.
    UseSeed,
}

#[derive(Debug, Clone)]
pub struct CooldownTimer<E = ActionEffect> {
    pub duration: f32,
    pub elapsed: f32,
    active: bool,
    effect: Option<E>,
}

impl<E: Copy> CooldownTimer<E> {
    /// Pure cooldown with no effect. `duration` is in seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            active: false,
            effect: None,
        }
    }

    pub fn from_millis(ms: u32) -> Self {
        Self::new(ms as f32 / 1000.0)
    }

    /// Bind an effect returned by [`update`](Self::update) on completion.
    pub fn with_effect(mut self, effect: E) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Start the countdown. Restarting an active timer discards the previous
    /// deadline and does not fire anything.
    pub fn activate(&mut self) {
        self.active = true;
        self.elapsed = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance by `dt` seconds.
    ///
    /// Returns the bound effect on the single tick the timer finishes; `None`
    /// otherwise (and always `None` for pure cooldowns). Inactive timers do
    /// not advance. A duration of zero or less finishes on the next update.
    pub fn update(&mut self, dt: f32) -> Option<E> {
        if !self.active {
            return None;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.active = false;
            self.elapsed = 0.0;
            return self.effect;
        }
        None
    }
}

/// The player's four action timers.
#[derive(Component, Debug, Clone)]
pub struct ActionTimers {
    pub tool_use: CooldownTimer,
    pub tool_switch: CooldownTimer,
    pub seed_use: CooldownTimer,
    pub seed_switch: CooldownTimer,
}

impl ActionTimers {
    /// Build the timers from millisecond durations.
    pub fn new(tool_use_ms: u32, tool_switch_ms: u32, seed_use_ms: u32, seed_switch_ms: u32) -> Self {
        Self {
            tool_use: CooldownTimer::from_millis(tool_use_ms).with_effect(ActionEffect::UseTool),
            tool_switch: CooldownTimer::from_millis(tool_switch_ms),
            seed_use: CooldownTimer::from_millis(seed_use_ms).with_effect(ActionEffect::UseSeed),
            seed_switch: CooldownTimer::from_millis(seed_switch_ms),
        }
    }

    /// Advance every timer and collect the effects that fired, in timer order.
    pub fn update(&mut self, dt: f32) -> SmallVec<[ActionEffect; 2]> {
        let mut fired = SmallVec::new();
        for timer in [
            &mut self.tool_use,
            &mut self.tool_switch,
            &mut self.seed_use,
            &mut self.seed_switch,
        ] {
            if let Some(effect) = timer.update(dt) {
                fired.push(effect);
            }
        }
        fired
    }
}

impl Default for ActionTimers {
    fn default() -> Self {
        Self::new(350, 200, 350, 200)
    }
}
