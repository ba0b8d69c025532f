//! Structural failure of a utility pole under static, degradation and wind loading.
//!
//! Per-step protocol, driven by the host:
//!
//! 1. Commit (any order): refresh the weather, degrade the pole, decide whether it has to be
//!    recalculated because of a repair or a wind speed change.
//! 2. Presync (before the dependents): reset the moment accumulators.
//! 3. Sync (after the dependents): the mounted equipment and wires have added their moments.
//! 4. Postsync (before the dependents): combine the moments into the stress and the status.
//! 5. Commit (any order): finalize the step.

mod evaluation;
mod inputs;
mod moments;
mod report;

use std::sync::Arc;

use bon::Builder;
use chrono::{DateTime, Datelike, Utc};
use pole_quantities::{
    angle::Degrees,
    length::{Feet, Inches},
    moment::FootPounds,
    pressure::PoundsPerSquareFoot,
    speed::MetersPerSecond,
    time::Hours,
};

pub use self::{
    evaluation::Evaluation,
    inputs::WindConditions,
    report::PoleReport,
};
use self::inputs::{WindInputs, hollow_diameter};
use crate::{
    core::{
        accumulators::{Accumulators, NowindAccumulators, SyncAccumulators},
        configuration::PoleConfiguration,
        object::Object,
        phase::Phase,
        settings::Settings,
        status::{NextEvent, Status},
        weather::WeatherFeed,
    },
    fmt::FormattedPercentage,
    prelude::*,
};

/// Everything a pole is bound to at initialization.
#[derive(Clone, Debug, Builder)]
pub struct PoleParameters {
    #[builder(into)]
    pub name: String,

    /// Expected to be a pole configuration.
    pub configuration: Option<Object>,

    /// Optional source of the wind speed, direction and gusts.
    pub weather: Option<Arc<dyn WeatherFeed>>,

    pub install_year: i32,

    #[builder(default)]
    pub tilt_angle: Degrees,

    #[builder(default)]
    pub tilt_direction: Degrees,

    /// Typical repair time after a failure, overrides the configuration and the default.
    pub repair_time: Option<Hours>,

    /// Guy wire attachment height.
    #[builder(default)]
    pub guy_height: Feet,

    #[builder(default)]
    pub wind_speed: MetersPerSecond,

    #[builder(default)]
    pub wind_direction: Degrees,

    #[builder(default)]
    pub wind_gusts: MetersPerSecond,

    /// Current simulation time.
    pub now: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, Default)]
struct Tilt {
    angle: Degrees,
    direction: Degrees,
}

#[derive(Debug)]
pub struct Pole {
    name: String,
    configuration: Arc<PoleConfiguration>,
    stop_on_failure: bool,

    status: Status,
    phase: Phase,

    /// Set whenever new input requires the structural state to be recomputed.
    recalc: bool,

    tilt: Tilt,
    install_year: i32,
    repair_time: Hours,
    guy_height: Feet,

    /// Effective height: exposed length down to the guy wire attachment.
    height: Feet,

    wind: WindInputs,

    /// Wind speed the loading was last computed for, [`None`] forces the recalculation.
    last_wind_speed: Option<MetersPerSecond>,

    /// When the pole has failed last time.
    down_time: Option<DateTime<Utc>>,

    hollow_diameter: Inches,
    resisting_moment: FootPounds,
    pole_moment_nowind: FootPounds,

    /// Tilt and wind moment of the pole itself, computed at commit.
    own_moment: FootPounds,

    wind_pressure: PoundsPerSquareFoot,
    critical_wind_speed: MetersPerSecond,

    accumulators: Accumulators,

    /// Whether the dependents may add their no-wind terms, from commit until sync.
    is_nowind_open: bool,

    evaluation: Evaluation,
}

impl Pole {
    #[instrument(skip_all, fields(pole = %parameters.name))]
    pub fn try_new(parameters: PoleParameters, settings: &Settings) -> Result<Self> {
        let configuration = match parameters.configuration {
            Some(Object::PoleConfiguration(configuration)) => configuration,
            Some(object) => {
                bail!("configuration is set to a {} object, not a pole configuration", object.class())
            }
            None => bail!("configuration is not set to a pole configuration object"),
        };
        configuration.validate().context("invalid pole configuration")?;

        let repair_time = [
            parameters.repair_time,
            configuration.repair_time,
            Some(settings.default_repair_time),
        ]
        .into_iter()
        .flatten()
        .find(|repair_time| *repair_time > Hours::ZERO)
        .with_context(|| {
            format!("default repair time must be positive, got {}", settings.default_repair_time)
        })?;
        debug!(%repair_time);

        let wind = WindInputs::bind(
            parameters.wind_speed,
            parameters.wind_direction,
            parameters.wind_gusts,
            parameters.weather.as_ref(),
            &settings.weather_names,
        );

        ensure!(
            (Degrees::ZERO..=Degrees(90.0)).contains(&parameters.tilt_angle),
            "pole tilt angle {} is not between 0 and 90 degrees",
            parameters.tilt_angle,
        );
        ensure!(
            (Degrees::ZERO..Degrees(360.0)).contains(&parameters.tilt_direction),
            "pole tilt direction {} is not between 0 and 360 degrees",
            parameters.tilt_direction,
        );
        debug!(tilt_angle = %parameters.tilt_angle, tilt_direction = %parameters.tilt_direction);

        let height = configuration.exposed_length() - parameters.guy_height;
        ensure!(
            parameters.guy_height >= Feet::ZERO && height > Feet::ZERO,
            "guy height {} is outside of the exposed pole length {}",
            parameters.guy_height,
            configuration.exposed_length(),
        );
        let resisting_moment = moments::resisting_moment(
            &configuration,
            moments::effective_diameter(&configuration, height).cubed(),
        );
        let pole_moment_nowind = moments::pole_moment_nowind(&configuration, height);
        debug!(%height, %resisting_moment, %pole_moment_nowind);

        if parameters.install_year > parameters.now.year() {
            warn!(
                install_year = parameters.install_year,
                "pole install years in the future are assumed to be the current time",
            );
        }

        Ok(Self {
            name: parameters.name,
            configuration,
            stop_on_failure: settings.stop_on_pole_failure,
            status: Status::Ok,
            phase: Phase::AwaitingInput,
            recalc: false,
            tilt: Tilt { angle: parameters.tilt_angle, direction: parameters.tilt_direction },
            install_year: parameters.install_year,
            repair_time,
            guy_height: parameters.guy_height,
            height,
            wind,
            last_wind_speed: Some(MetersPerSecond::ZERO),
            down_time: None,
            hollow_diameter: Inches::ZERO,
            resisting_moment,
            pole_moment_nowind,
            own_moment: FootPounds::ZERO,
            wind_pressure: PoundsPerSquareFoot::ZERO,
            critical_wind_speed: MetersPerSecond::ZERO,
            accumulators: Accumulators::default(),
            is_nowind_open: false,
            evaluation: Evaluation::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    /// Wind seen by the dependents when they compute their contributions.
    pub const fn wind(&self) -> WindConditions {
        WindConditions {
            speed: self.wind.speed.value,
            direction: self.wind.direction.value,
            gusts: self.wind.gusts.value,
            pressure: self.wind_pressure,
        }
    }

    /// Moments per unit of wind pressure, rebuilt by the dependents on every step before sync.
    pub fn nowind_accumulators_mut(&mut self) -> Option<&mut NowindAccumulators> {
        self.is_nowind_open.then_some(&mut self.accumulators.nowind)
    }

    /// Accumulators open for the dependents, only while a recalculation is pending.
    pub fn accumulators_mut(&mut self) -> Option<&mut SyncAccumulators> {
        (self.phase == Phase::Accumulating).then_some(&mut self.accumulators.sync)
    }

    /// Commit the previous step: refresh the inputs and decide whether to recalculate.
    #[instrument(skip_all, fields(pole = %self.name))]
    pub fn commit(&mut self, now: DateTime<Utc>) -> Result<NextEvent> {
        ensure!(self.phase == Phase::AwaitingInput, "commit is out of order, the pole is {}", self.phase);

        self.accumulators.nowind = NowindAccumulators::default();
        self.is_nowind_open = true;
        self.wind.refresh(now);
        let is_statically_failed = self.degrade(now.year());

        if self.status == Status::Failed && self.is_repair_due(now) {
            self.replace(now);
        } else if self.status == Status::Ok && self.last_wind_speed != Some(self.wind.speed.value) {
            if is_statically_failed {
                warn!("pole has degraded past the point of static failure");
            }
            self.update_wind_loading();
        }

        self.phase = if self.recalc { Phase::Accumulating } else { Phase::Idle };
        Ok(NextEvent::Never)
    }

    /// Reset the accumulators so that the dependents could add up their moments.
    #[instrument(skip_all, fields(pole = %self.name))]
    pub fn presync(&mut self) -> Result {
        match self.phase {
            Phase::Accumulating => {
                self.accumulators.sync = SyncAccumulators::seeded(self.own_moment);
                Ok(())
            }
            Phase::Idle => Ok(()),
            phase => bail!("presync is out of order, the pole is {phase}"),
        }
    }

    /// The dependents are done, close the accumulators.
    #[instrument(skip_all, fields(pole = %self.name))]
    pub fn sync(&mut self) -> Result {
        match self.phase {
            Phase::Accumulating => {
                self.is_nowind_open = false;
                self.phase = Phase::Evaluating;
                Ok(())
            }
            Phase::Idle => {
                self.is_nowind_open = false;
                Ok(())
            }
            phase => bail!("sync is out of order, the pole is {phase}"),
        }
    }

    /// Combine the accumulated moments into the stress and the status.
    #[instrument(skip_all, fields(pole = %self.name))]
    pub fn postsync(&mut self, now: DateTime<Utc>) -> Result<NextEvent> {
        match self.phase {
            Phase::Evaluating => {
                let next_event = self.evaluate(now);
                self.phase = Phase::Idle;
                Ok(next_event)
            }
            Phase::Idle => {
                trace!("no pole recalculation flagged");
                Ok(NextEvent::Never)
            }
            phase => bail!("postsync is out of order, the pole is {phase}"),
        }
    }

    /// Finalize the step.
    ///
    /// The status is already final after postsync, there is nothing to persist yet.
    #[instrument(skip_all, fields(pole = %self.name))]
    pub fn finalize(&mut self) -> Result<NextEvent> {
        ensure!(self.phase == Phase::Idle, "finalize is out of order, the pole is {}", self.phase);
        trace!(status = %self.status, "finalized");
        self.phase = Phase::AwaitingInput;
        Ok(NextEvent::Never)
    }

    /// Update the hollow core and the resisting moment.
    ///
    /// Returns whether the degradation alone has eaten up the whole resisting moment.
    fn degrade(&mut self, year: i32) -> bool {
        let age = year - self.install_year;
        if let Some(hollow_diameter) = hollow_diameter(age, self.configuration.degradation_rate) {
            trace!(age, %hollow_diameter, "degraded");
            self.hollow_diameter = hollow_diameter;
        } else {
            trace!(
                age,
                degradation_rate = %self.configuration.degradation_rate,
                "pole degradation model disabled",
            );
        }
        let resisting_moment =
            moments::degraded_resisting_moment(&self.configuration, self.hollow_diameter);
        self.resisting_moment = resisting_moment.max(FootPounds::ZERO);
        trace!(%resisting_moment);
        resisting_moment < FootPounds::ZERO
    }

    fn is_repair_due(&self, now: DateTime<Utc>) -> bool {
        self.down_time.is_some_and(|down_time| Hours::from(now - down_time) > self.repair_time)
    }

    /// Replace the failed pole with a new one.
    fn replace(&mut self, now: DateTime<Utc>) {
        info!(repair_time = %self.repair_time, "pole repair time has arrived");
        self.tilt = Tilt::default();
        self.status = Status::Ok;
        self.install_year = now.year();
        self.hollow_diameter = Inches::ZERO;
        self.resisting_moment =
            moments::degraded_resisting_moment(&self.configuration, self.hollow_diameter);
        self.own_moment = FootPounds::ZERO;
        self.last_wind_speed = None;
        self.recalc = true;
    }

    fn update_wind_loading(&mut self) {
        let wind_speed = self.wind.speed.value;
        debug!(%wind_speed, "wind speed change requires update of the pole analysis");

        let tilt_moment = if self.tilt.angle > Degrees::ZERO {
            moments::tilt_moment(&self.configuration, self.height, self.tilt.angle)
        } else {
            FootPounds::ZERO
        };
        self.wind_pressure = moments::wind_pressure(wind_speed);
        self.pole_moment_nowind = moments::pole_moment_nowind(&self.configuration, self.height);
        self.critical_wind_speed = moments::critical_wind_speed(
            self.resisting_moment,
            self.accumulators.sync.wire_tension,
            self.pole_moment_nowind + self.accumulators.nowind.moment(),
        );
        self.own_moment = if self.wind_pressure > PoundsPerSquareFoot::ZERO {
            moments::combine(
                tilt_moment,
                moments::wind_moment(self.pole_moment_nowind, self.wind_pressure),
                self.tilt.direction,
                self.wind.direction.value,
            )
        } else {
            tilt_moment
        };
        debug!(
            %tilt_moment,
            wind_pressure = %self.wind_pressure,
            critical_wind_speed = %self.critical_wind_speed,
            pole_moment = %self.own_moment,
            "updated the wind loading",
        );

        self.last_wind_speed = Some(wind_speed);
        self.recalc = true;
    }

    fn evaluate(&mut self, now: DateTime<Utc>) -> NextEvent {
        let evaluation = Evaluation::new(
            &self.accumulators,
            self.pole_moment_nowind,
            self.resisting_moment,
            self.wind.speed.value,
        );
        debug!(
            total_moment = %evaluation.total_moment,
            pole_stress = ?FormattedPercentage(evaluation.pole_stress),
            susceptibility = evaluation.susceptibility,
            "evaluated",
        );

        let status = evaluation.status();
        if status == Status::Failed && self.status != Status::Failed {
            info!(
                pole_stress = ?FormattedPercentage(evaluation.pole_stress),
                repair_time = %self.repair_time,
                "pole failed",
            );
            self.down_time = Some(now);
        }
        self.status = status;
        self.evaluation = evaluation;
        self.recalc = false;

        if status == Status::Ok {
            NextEvent::Never
        } else if self.stop_on_failure {
            NextEvent::Halt
        } else {
            self.down_time.map_or(NextEvent::Never, |down_time| {
                NextEvent::At(down_time + self.repair_time.to_time_delta())
            })
        }
    }
}
