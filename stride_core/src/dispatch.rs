//! Maps sensor packages to workout records.
//!
//! A package is a workout type code plus the positional readings for that
//! workout. The code selects the record constructor; the readings are
//! applied in order.

use crate::config::Coefficients;
use crate::{
    Error, Result, Running, Session, SportsWalking, Swimming, WorkoutKind, WorkoutRecord,
};

/// Build a workout record from a package using the default coefficients
///
/// Fails with [`Error::UnknownWorkoutType`] for an unrecognized code and
/// [`Error::ArgumentCount`] when `data` does not match the workout's arity.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<WorkoutRecord> {
    Dispatcher::default().read(workout_type, data)
}

/// Package reader carrying tuned formula coefficients
#[derive(Clone, Copy, Debug, Default)]
pub struct Dispatcher {
    coefficients: Coefficients,
}

impl Dispatcher {
    pub fn new(coefficients: Coefficients) -> Self {
        Self { coefficients }
    }

    pub fn read(&self, workout_type: &str, data: &[f64]) -> Result<WorkoutRecord> {
        let kind: WorkoutKind = workout_type.parse()?;
        self.build(kind, data)
    }

    /// Build a record for an already resolved workout kind
    pub fn build(&self, kind: WorkoutKind, data: &[f64]) -> Result<WorkoutRecord> {
        if data.len() != kind.arity() {
            return Err(Error::ArgumentCount {
                kind,
                expected: kind.arity(),
                actual: data.len(),
            });
        }

        tracing::debug!("Building {} from {:?}", kind, data);

        let session = Session::new(count("action_count", data[0])?, data[1], data[2]);

        let record = match kind {
            WorkoutKind::Running => {
                Running::with_coefficients(session, self.coefficients.running).into()
            }
            WorkoutKind::SportsWalking => {
                SportsWalking::with_coefficients(session, data[3], self.coefficients.walking)
                    .into()
            }
            WorkoutKind::Swimming => Swimming::with_coefficients(
                session,
                data[3],
                count("pool_laps", data[4])?,
                self.coefficients.swimming,
            )
            .into(),
        };

        Ok(record)
    }
}

/// Convert a reading that must be a whole, non-negative count
fn count(field: &'static str, value: f64) -> Result<u64> {
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(Error::InvalidArgument { field, value })
    }
}
