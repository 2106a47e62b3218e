//! Generator state behind an interactive front end.
//!
//! Every change to the configuration rebuilds the pool, draws a new password
//! and re-scores it. The previous result is replaced wholesale.

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::generator::{RandomSource, generate};
use crate::strength::{Evaluation, StrengthTier, evaluate};
use zeroize::Zeroizing;

pub struct Session<R> {
    config: GenerationConfig,
    rng: R,
    password: Zeroizing<String>,
    evaluation: Evaluation,
}

impl<R: RandomSource> Session<R> {
    /// Starts a session and produces the first password straight away.
    pub fn new(config: GenerationConfig, rng: R) -> Result<Self> {
        let mut session = Self {
            config,
            rng,
            password: Zeroizing::new(String::new()),
            evaluation: evaluate(""),
        };
        session.regenerate()?;
        Ok(session)
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn strength(&self) -> StrengthTier {
        self.evaluation.tier
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn set_length(&mut self, length: usize) -> Result<()> {
        self.config.length = GenerationConfig::clamp_length(length);
        self.regenerate()
    }

    pub fn set_include_numbers(&mut self, include_numbers: bool) -> Result<()> {
        self.config.include_numbers = include_numbers;
        self.regenerate()
    }

    pub fn set_include_symbols(&mut self, include_symbols: bool) -> Result<()> {
        self.config.include_symbols = include_symbols;
        self.regenerate()
    }

    pub fn toggle_numbers(&mut self) -> Result<()> {
        self.set_include_numbers(!self.config.include_numbers)
    }

    pub fn toggle_symbols(&mut self) -> Result<()> {
        self.set_include_symbols(!self.config.include_symbols)
    }

    pub fn regenerate(&mut self) -> Result<()> {
        let pool = self.config.pool();
        let password = generate(self.config.length, &pool, &mut self.rng)?;
        let evaluation = evaluate(&password);

        log::debug!(
            "session recomputed: length={}, strength={}",
            self.config.length,
            evaluation.tier
        );

        self.password = password;
        self.evaluation = evaluation;
        Ok(())
    }
}
