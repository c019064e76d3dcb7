pub mod highlights;
pub mod interval;
pub mod range;
pub mod settings;
pub mod trend;
pub mod view;
