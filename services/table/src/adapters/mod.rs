pub mod tokio_ticks;

pub use tokio_ticks::TokioTickSource;
