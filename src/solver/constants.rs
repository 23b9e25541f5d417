// Tuning constants for the solver
/// Left candidates handed to the rayon pool before checking for a stop.
pub const PARALLEL_CHUNK_SIZE: usize = 64;
