pub mod body;
pub mod c_api;
pub mod config;
pub mod error;
pub mod frontend;
pub mod gravity;
pub mod render;
pub mod scale;
pub mod simulation;

pub use body::Body;
pub use config::Config;
pub use error::{Error, InvalidBody, Result};
pub use frontend::{Frontend, Headless, StatusLine, run};
pub use render::{Canvas, DrawRequest};
pub use scale::Scales;
pub use simulation::{Simulation, UpdateOrder};
pub use ultraviolet;
