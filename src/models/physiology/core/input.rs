mod climber;
mod environment;
mod error;

pub use climber::ClimberConfiguration;
pub use environment::EnvironmentalConditions;
pub use error::InputError;
