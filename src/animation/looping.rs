use crate::animation::timeline::{Begin, StepId, Timeline};
use crate::foundation::error::{HexlogoError, HexlogoResult};

/// Whether the terminal step is chained on its own end event.
///
/// With `Exclude`, the terminal step keeps a single absolute begin and only plays during the
/// first run; every later cycle stops after one repeat because its end event never fires again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalPolicy {
    /// Rewrite the terminal step too, so it restarts itself.
    #[default]
    Include,
    /// Leave the terminal step at its absolute offset.
    Exclude,
}

/// Rewrites absolute begin offsets into `offset; terminal.end+offset` lists so the whole
/// timeline restarts once the terminal step completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopBinding {
    /// Step whose end restarts the sequence.
    pub terminal: StepId,
    /// Treatment of the terminal step itself.
    pub policy: TerminalPolicy,
}

impl LoopBinding {
    /// Binding anchored on `terminal`.
    pub fn new(terminal: StepId, policy: TerminalPolicy) -> Self {
        Self { terminal, policy }
    }

    /// Apply the binding in place and return how many steps were rewritten.
    ///
    /// Already chained steps keep their original offset, so applying twice is a no-op.
    #[tracing::instrument(skip(timeline), fields(steps = timeline.len()))]
    pub fn apply(&self, timeline: &mut Timeline) -> HexlogoResult<usize> {
        if timeline.get(self.terminal).is_none() {
            return Err(HexlogoError::animation(format!(
                "terminal step {} is not part of the timeline",
                self.terminal
            )));
        }

        let mut rewritten = 0;
        for step in timeline.steps_mut() {
            if step.id == self.terminal && self.policy == TerminalPolicy::Exclude {
                continue;
            }
            step.begin = Begin::Chained {
                offset: step.begin.offset(),
                anchor: self.terminal,
            };
            rewritten += 1;
        }
        tracing::debug!(rewritten, "loop bound");
        Ok(rewritten)
    }

    /// Length of one loop cycle: the terminal step's end time.
    pub fn period_secs(&self, timeline: &Timeline) -> HexlogoResult<f64> {
        timeline
            .get(self.terminal)
            .map(|s| s.end_secs())
            .ok_or_else(|| {
                HexlogoError::animation(format!("terminal step {} is unknown", self.terminal))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/looping.rs"]
mod tests;
