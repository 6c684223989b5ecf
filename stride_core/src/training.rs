//! Distance, speed and calorie formulas.
//!
//! Every workout exposes the same capabilities through [`Training`]:
//! - distance from action count and step length
//! - mean speed over the whole session
//! - spent calories (each workout kind supplies its own formula)

use crate::config::{MIN_IN_H, M_IN_KM};
use crate::{InfoMessage, Running, Session, SportsWalking, Swimming, WorkoutKind, WorkoutRecord};

/// Capabilities shared by every workout record
pub trait Training {
    fn kind(&self) -> WorkoutKind;

    /// Raw readings common to every workout
    fn session(&self) -> &Session;

    /// Distance covered by one step or stroke, in meters
    fn len_step_m(&self) -> f64;

    /// Spent calories, kcal
    fn calories_kcal(&self) -> f64;

    /// Distance covered, km
    fn distance_km(&self) -> f64 {
        self.session().action_count as f64 * self.len_step_m() / M_IN_KM
    }

    /// Mean speed over the whole session, km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_hours
    }

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.kind().name(),
            self.session().duration_hours,
            self.distance_km(),
            self.mean_speed_kmh(),
            self.calories_kcal(),
        )
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn len_step_m(&self) -> f64 {
        self.coefficients.len_step_m
    }

    fn calories_kcal(&self) -> f64 {
        let c = &self.coefficients;
        let s = &self.session;
        (c.calories_mean_speed_multiplier * self.mean_speed_kmh() + c.calories_mean_speed_shift)
            * s.weight_kg
            / M_IN_KM
            * s.duration_hours
            * MIN_IN_H
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn len_step_m(&self) -> f64 {
        self.coefficients.len_step_m
    }

    /// The speed-height multiplier scales only the squared-speed term,
    /// not the plain weight term.
    fn calories_kcal(&self) -> f64 {
        let c = &self.coefficients;
        let s = &self.session;
        let speed_ms = self.mean_speed_kmh() * c.kmh_in_msec;
        (c.calories_weight_multiplier * s.weight_kg
            + (speed_ms.powi(2) / self.height_cm * c.cm_in_m)
                * c.calories_speed_height_multiplier
                * s.weight_kg)
            * (s.duration_hours * MIN_IN_H)
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn len_step_m(&self) -> f64 {
        self.coefficients.len_step_m
    }

    /// Pool geometry only; the stroke count plays no part.
    fn mean_speed_kmh(&self) -> f64 {
        let distance_m = self.pool_length_m * self.pool_laps as f64;
        distance_m / M_IN_KM / self.session.duration_hours
    }

    fn calories_kcal(&self) -> f64 {
        let c = &self.coefficients;
        let s = &self.session;
        (self.mean_speed_kmh() + c.calories_mean_speed_shift)
            * c.calories_weight_multiplier
            * s.weight_kg
            * s.duration_hours
    }
}

impl WorkoutRecord {
    fn as_training(&self) -> &dyn Training {
        match self {
            WorkoutRecord::Running(w) => w,
            WorkoutRecord::SportsWalking(w) => w,
            WorkoutRecord::Swimming(w) => w,
        }
    }
}

impl Training for WorkoutRecord {
    fn kind(&self) -> WorkoutKind {
        WorkoutRecord::kind(self)
    }

    fn session(&self) -> &Session {
        self.as_training().session()
    }

    fn len_step_m(&self) -> f64 {
        self.as_training().len_step_m()
    }

    fn calories_kcal(&self) -> f64 {
        self.as_training().calories_kcal()
    }

    fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_training().mean_speed_kmh()
    }
}

/// Print the workout summary line to stdout
pub fn print_summary<T: Training + ?Sized>(training: &T) {
    println!("{}", training.show_training_info());
}
