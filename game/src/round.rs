use analyzer::ast::Expr;
use analyzer::{LexOutput, ParseError};
use evaluator::Hints;
use rand::Rng;

use crate::cells::{Cell, cell_states};
use crate::config::{ConfigError, GameConfig};
use crate::plot::{PlotPoint, plot};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("target `{text}` does not parse: {error}")]
    InvalidTarget {
        text: String,
        #[source]
        error: ParseError,
    },

    #[error("guess slot {slot} does not exist (round has {count})")]
    SlotOutOfRange { slot: usize, count: usize },

    #[error("guess slot {slot} is not the current slot ({current})")]
    SlotDisabled { slot: usize, current: usize },
}

/// The expression being guessed.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub text: String,
    pub lex: LexOutput,
    pub expr: Expr,
}

impl Target {
    pub fn parse(text: &str) -> Result<Target, GameError> {
        let lex = analyzer::lex(text);
        let expr = analyzer::parse(&lex).map_err(|error| GameError::InvalidTarget {
            text: text.to_string(),
            error,
        })?;
        Ok(Target {
            text: text.to_string(),
            lex,
            expr,
        })
    }

    /// Number of cells in every guess row.
    pub fn len(&self) -> usize {
        self.lex.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lex.is_empty()
    }
}

/// Everything derived from the current contents of one guess row.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessState {
    pub lex: LexOutput,
    /// Only present for a complete guess exactly as long as the target.
    pub ast: Option<Expr>,
    pub hints: Option<Hints>,
    /// The guess has the target's length but does not parse.
    pub error: bool,
}

impl GuessState {
    fn empty() -> Self {
        GuessState {
            lex: analyzer::lex(""),
            ast: None,
            hints: None,
            error: false,
        }
    }

    pub fn is_full_match(&self) -> bool {
        self.hints.as_ref().is_some_and(Hints::is_full_match)
    }
}

/// One game: a target, the sample points, and a fixed number of guess rows.
///
/// Only the current row accepts input. It moves down after a guess that parses
/// but is not a full match.
#[derive(Debug, Clone)]
pub struct Round {
    config: GameConfig,
    samples: Vec<f64>,
    target: Target,
    guesses: Vec<GuessState>,
    current: usize,
}

impl Round {
    /// Start a round with a freshly generated target.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Round, GameError> {
        config.validate()?;
        let text = generator::generate_with(rng, config.min_tokens, config.max_tokens);
        Round::with_target(config, &text)
    }

    /// Start a round with a chosen target.
    pub fn with_target(config: GameConfig, text: &str) -> Result<Round, GameError> {
        config.validate()?;
        let target = Target::parse(text)?;
        tracing::debug!(target = %target.text, tokens = target.len(), "new round");
        Ok(Round {
            samples: config.samples(),
            guesses: vec![GuessState::empty(); config.guess_count],
            current: 0,
            config,
            target,
        })
    }

    /// Draw a new target and clear every guess row.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        *self = Round::new(self.config.clone(), rng)?;
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn guesses(&self) -> &[GuessState] {
        &self.guesses
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Derives a row's state from its tokens. Does not touch the round.
    pub fn recompute(&self, lex: LexOutput) -> GuessState {
        let sized = lex.len() == self.target.len();
        let parsed = if sized && lex.complete {
            analyzer::parse(&lex).ok()
        } else {
            None
        };
        let hints = parsed.as_ref().map(|guess| {
            evaluator::compute_hints(
                guess,
                &self.target.expr,
                &self.samples,
                self.config.match_threshold,
            )
        });

        GuessState {
            error: sized && parsed.is_none(),
            lex,
            ast: parsed,
            hints,
        }
    }

    /// Stores new contents for the current row and moves on when appropriate.
    pub fn submit(&mut self, slot: usize, lex: LexOutput) -> Result<&GuessState, GameError> {
        let count = self.guesses.len();
        if slot >= count {
            return Err(GameError::SlotOutOfRange { slot, count });
        }
        if slot != self.current {
            return Err(GameError::SlotDisabled {
                slot,
                current: self.current,
            });
        }

        let state = self.recompute(lex);
        let advance = state.ast.is_some() && !state.is_full_match() && slot + 1 < count;
        self.guesses[slot] = state;
        if advance {
            self.current = slot + 1;
            tracing::debug!(slot = self.current, "advanced to next guess");
        }
        Ok(&self.guesses[slot])
    }

    pub fn is_won(&self) -> bool {
        self.guesses.iter().any(GuessState::is_full_match)
    }

    /// Won, or the last row holds a parsed guess that missed.
    pub fn is_over(&self) -> bool {
        self.is_won() || self.guesses.last().is_some_and(|g| g.ast.is_some())
    }

    /// The latest row holding a parsed guess.
    pub fn last_guess(&self) -> Option<&Expr> {
        self.guesses.iter().rev().find_map(|g| g.ast.as_ref())
    }

    /// Target and latest guess sampled for the chart.
    pub fn plot(&self) -> Vec<PlotPoint> {
        plot(&self.samples, &self.target.expr, self.last_guess())
    }

    /// Cell highlights of one row; all empty while the row has no hints.
    pub fn cells(&self, slot: usize) -> Vec<Cell> {
        let len = self.target.len();
        match self.guesses.get(slot).and_then(|g| g.hints.as_ref()) {
            Some(hints) => cell_states(hints, len),
            None => vec![Cell::Empty; len],
        }
    }
}
