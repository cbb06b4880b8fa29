pub mod blackout;
pub mod scheduler;
