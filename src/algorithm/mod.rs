/// Game configuration and end-to-end fractal generation
pub mod executor;
/// Contraction recurrence producing the point cloud
pub mod iterator;
/// Weighted corner index sequence generation
pub mod sampler;
