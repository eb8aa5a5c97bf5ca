mod certification;
mod defaults;

pub use certification::*;
pub use defaults::*;
