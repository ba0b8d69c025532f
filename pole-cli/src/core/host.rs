//! Minimal single-threaded driver of the per-step protocol.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::{
    core::{
        mount::Mount,
        pole::{Pole, PoleReport},
        status::NextEvent,
    },
    prelude::*,
};

/// Pole state right after a step.
#[derive(Clone, Debug, Serialize)]
pub struct StepRecord {
    pub at: DateTime<Utc>,
    pub next_event: NextEvent,

    #[serde(flatten)]
    pub report: PoleReport,
}

#[derive(Debug)]
pub struct Host {
    pole: Pole,
    mounts: Vec<Box<dyn Mount>>,
}

impl Host {
    pub const fn new(pole: Pole, mounts: Vec<Box<dyn Mount>>) -> Self {
        Self { pole, mounts }
    }

    pub const fn pole(&self) -> &Pole {
        &self.pole
    }

    /// Run all the phases for the single time step.
    #[instrument(skip_all, fields(pole = self.pole.name(), at = %now))]
    pub fn step(&mut self, now: DateTime<Utc>) -> Result<StepRecord> {
        self.pole.commit(now)?;
        if let Some(accumulators) = self.pole.nowind_accumulators_mut() {
            for mount in &self.mounts {
                mount.contribute_nowind(accumulators);
            }
        }
        self.pole.presync()?;
        let wind = self.pole.wind();
        if let Some(accumulators) = self.pole.accumulators_mut() {
            for mount in &self.mounts {
                trace!(mount = mount.name(), "contributing");
                mount.contribute(&wind, accumulators);
            }
        }
        self.pole.sync()?;
        let next_event = self.pole.postsync(now)?;
        self.pole.finalize()?;
        Ok(StepRecord { at: now, next_event, report: self.pole.report() })
    }

    /// Step through `[start, end)` with the fixed interval.
    ///
    /// Self-scheduled wake-ups in between the ticks get their own steps.
    pub fn run(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval: TimeDelta,
    ) -> Result<Vec<StepRecord>> {
        ensure!(interval > TimeDelta::zero(), "step interval must be positive, got {interval}");

        let mut records = Vec::new();
        let mut now = start;
        let mut tick = start;
        let mut wake_up: Option<DateTime<Utc>> = None;

        while now < end {
            let record = self.step(now)?;
            let next_event = record.next_event;
            records.push(record);

            match next_event {
                NextEvent::Halt => {
                    warn!(%now, "pole has failed, stopping the simulation");
                    break;
                }
                NextEvent::At(at) => {
                    wake_up = Some(wake_up.map_or(at, |wake_up| wake_up.min(at)));
                }
                NextEvent::Never => {}
            }

            while tick <= now {
                tick += interval;
            }
            now = match wake_up {
                Some(at) if at > now && at < tick => at,
                _ => tick,
            };
            wake_up = wake_up.filter(|at| *at > now);
        }

        info!(n_steps = records.len(), status = %self.pole.status(), "simulation finished");
        Ok(records)
    }
}
