use crate::pool::{CharacterPool, build_pool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl GenerationConfig {
    /// Range exposed to users. `generate` itself accepts any length >= 1.
    pub const MIN_LENGTH: usize = 6;
    pub const MAX_LENGTH: usize = 100;
    pub const DEFAULT_LENGTH: usize = 8;

    pub fn clamp_length(length: usize) -> usize {
        length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH)
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Self::clamp_length(length);
        self
    }

    pub fn with_numbers(mut self, include_numbers: bool) -> Self {
        self.include_numbers = include_numbers;
        self
    }

    pub fn with_symbols(mut self, include_symbols: bool) -> Self {
        self.include_symbols = include_symbols;
        self
    }

    pub fn pool(&self) -> CharacterPool {
        build_pool(self.include_numbers, self.include_symbols)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            include_numbers: false,
            include_symbols: false,
        }
    }
}
