// imgreduce/src/processors/mod.rs
mod batch;
mod loader;
mod resizer;

pub use batch::BatchRunner;
pub use loader::Loader;
pub use resizer::{ResizeRule, Resizer};

pub mod prelude {
    pub use super::{BatchRunner, Loader, ResizeRule, Resizer};
}
