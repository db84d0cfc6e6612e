//! Client-only simulation of the end-user call experience.
//!
//! DESIGN
//! ======
//! The widget configurator shows a live mock of the embeddable call button
//! so operators can validate branding and consent behavior before
//! publishing. The simulation never touches the network: "connecting" and
//! "call ended" are plain delays, and mute is cosmetic. The machine is kept
//! as a pure struct here; `components::widget_preview` owns the timers and
//! drives it.
//!
//! The simulation models only the happy path. There is no failure branch
//! because there is no real connection attempt to fail.

#[cfg(test)]
#[path = "call_preview_test.rs"]
mod call_preview_test;

/// Lifecycle stage of the simulated call. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CallStage {
    /// Showing the call-invite button and language selector.
    #[default]
    Idle,
    /// Showing the consent checkbox. Only reachable when the widget is
    /// configured with `require_terms_acceptance`.
    Terms,
    /// Indeterminate "connecting" indicator; auto-advances to `Active`.
    Connecting,
    /// Live call view with the elapsed-time counter.
    Active,
    /// Brief "Call ended" confirmation; auto-returns to `Idle`.
    Ended,
}

/// Simulated delay before `Connecting` advances to `Active`.
pub const CONNECT_DELAY_MS: u32 = 2000;
/// Simulated delay before `Ended` returns to `Idle`.
pub const ENDED_DELAY_MS: u32 = 1500;
/// Tick period for the elapsed-time counter while `Active`.
pub const TICK_MS: u32 = 1000;

/// The transient session of the call preview. Owned exclusively by the
/// preview component, reset on unmount or explicit reset, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallPreview {
    pub stage: CallStage,
    /// Seconds since entering `Active`.
    pub elapsed_secs: u32,
    /// Consent checkbox value; only meaningful while in `Terms`.
    pub terms_accepted: bool,
    /// Cosmetic mute toggle; only meaningful while in `Active`.
    pub muted: bool,
}

impl CallPreview {
    /// Activate the call invite. Goes to the consent step when the widget
    /// requires it, otherwise straight to connecting. Only valid from idle.
    pub fn start(&mut self, require_terms: bool) {
        if self.stage != CallStage::Idle {
            return;
        }
        self.stage = if require_terms { CallStage::Terms } else { CallStage::Connecting };
    }

    /// Back out of the consent step.
    pub fn cancel_terms(&mut self) {
        if self.stage == CallStage::Terms {
            self.reset();
        }
    }

    /// Record the consent checkbox value.
    pub fn set_terms_accepted(&mut self, accepted: bool) {
        if self.stage == CallStage::Terms {
            self.terms_accepted = accepted;
        }
    }

    /// Continue past the consent step. No-op until consent is given.
    pub fn continue_from_terms(&mut self) {
        if self.stage == CallStage::Terms && self.terms_accepted {
            self.stage = CallStage::Connecting;
        }
    }

    /// Simulated connection established: enter the live call at 0:00.
    pub fn connected(&mut self) {
        if self.stage == CallStage::Connecting {
            self.stage = CallStage::Active;
            self.elapsed_secs = 0;
        }
    }

    /// One second of call time. Counts only while the call is live.
    pub fn tick(&mut self) {
        if self.stage == CallStage::Active {
            self.elapsed_secs += 1;
        }
    }

    /// Toggle the cosmetic mute indicator.
    pub fn toggle_mute(&mut self) {
        if self.stage == CallStage::Active {
            self.muted = !self.muted;
        }
    }

    /// End the live call, showing the "Call ended" confirmation.
    pub fn hang_up(&mut self) {
        if self.stage == CallStage::Active {
            self.stage = CallStage::Ended;
        }
    }

    /// The "Call ended" confirmation elapsed: return to idle.
    pub fn finish(&mut self) {
        if self.stage == CallStage::Ended {
            self.reset();
        }
    }

    /// Force the preview back to idle from any stage, clearing every
    /// transient field. Bypasses the timed auto-transitions.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
