pub mod formatting;
pub mod highlights_service;
pub mod trend_service;
