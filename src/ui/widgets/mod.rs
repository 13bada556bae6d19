pub mod button;
pub mod label;
pub mod stepper;

pub use button::{Button, ButtonConfig};
pub use label::Label;
pub use stepper::{Stepper, StepperConfig};
