pub mod day;
pub mod day_exercise;
pub mod exercise;
pub mod routine;
pub mod user;
pub mod weight;

pub use day::{Day, Weekday};
pub use day_exercise::{DayExercise, DayExerciseEntry};
pub use exercise::Exercise;
pub use routine::Routine;
pub use user::User;
pub use weight::Weight;
