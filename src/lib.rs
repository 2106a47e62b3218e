pub mod config;
pub mod error;
pub mod generator;
pub mod pool;
pub mod seed;
pub mod session;
pub mod strength;

pub use config::GenerationConfig;
pub use error::{Error, Result};
pub use generator::{KeystreamSource, RandomSource, RngSource, generate};
pub use pool::{CharacterPool, build_pool};
pub use seed::derive_key;
pub use session::Session;
pub use strength::{CharacterClasses, Evaluation, StrengthTier, evaluate, score};
