pub mod day_exercises;
pub mod days;
pub mod exercises;
pub mod routines;
pub mod utils;
pub mod weights;
