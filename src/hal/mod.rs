pub mod twi;

// Re-export commonly used types
pub use twi::Twi;
