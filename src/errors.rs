use core::fmt;

#[derive(Debug)]
pub enum AppError {
    InvalidCapacity(usize),
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::InvalidCapacity(capacity) => {
                write!(
                    f,
                    "Invalid table capacity: {}. Capacity must be at least 1",
                    capacity
                )
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}
