pub mod adjust;
pub mod check;
pub mod preview;
pub mod validate;
