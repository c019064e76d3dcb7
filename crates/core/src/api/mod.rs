pub mod traits;

// Remote API implementations
pub mod http;
