// Constants for the solver and its front-ends

/// Smallest disk count accepted at the prompt
pub const MIN_DISKS: u32 = 1;

/// Largest disk count accepted at the prompt
/// Also bounds the recursion depth of the solver
pub const MAX_DISKS: u32 = 20;

/// Puzzles with more disks than this ask for confirmation first
pub const CONFIRM_THRESHOLD: u32 = 10;

/// Bounds for the animation delay, in milliseconds
pub const MIN_DELAY_MS: f64 = 0.0;
pub const MAX_DELAY_MS: f64 = 5000.0;

/// Captions kept in the full-screen move log; older ones are dropped
pub const MOVE_LOG_CAPACITY: usize = 512;
