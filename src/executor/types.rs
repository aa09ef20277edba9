use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    /// Every slot (running plus waiting) is taken; the unit was not scheduled.
    #[error("task pool full ({capacity} units pending), dropping {label} task")]
    Full { label: &'static str, capacity: usize },
}
