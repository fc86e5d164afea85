//! The console drill: render, blank, repeat.
//!
//! Reads one line as the passage, then prints the game once per word,
//! blanking one more random word after each print, and finishes with the
//! fully blanked rendering. In practice mode each rendering is followed by
//! reading the user's recall attempt from the same input.

use std::io::{BufRead, Write};
use std::rc::Rc;

use thiserror::Error;
use tracing::{info, warn};

use crate::core::{DrillConfig, WordRng};
use crate::games::{BlankingGame, PassageStats, StatsSummary};
use crate::text::{Passage, PassageError};

/// Errors that end a drill.
#[derive(Debug, Error)]
pub enum DrillError {
    #[error("invalid passage: {0}")]
    Passage(#[from] PassageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a finished drill produced.
#[derive(Clone, Debug)]
pub struct DrillOutcome {
    /// Seed used for the blanking order.
    pub seed: u64,
    /// Every rendering printed, in order.
    pub renderings: Vec<String>,
    /// Practice tally; `None` outside practice mode.
    pub summary: Option<StatsSummary>,
}

/// Run one drill, reading from `input` and writing to `output`.
pub fn run<R, W>(
    input: &mut R,
    output: &mut W,
    config: &DrillConfig,
) -> Result<DrillOutcome, DrillError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut line = String::new();
    input.read_line(&mut line)?;

    let passage = Rc::new(Passage::new(&line)?);
    let mut game = BlankingGame::new(Rc::clone(&passage));
    let mut rng = config.seed.map_or_else(WordRng::from_time, WordRng::new);
    let mut stats = config.practice.then(|| PassageStats::new(Rc::clone(&passage)));

    info!(words = passage.num_words(), seed = rng.seed(), "starting drill");

    let mut renderings = Vec::with_capacity(passage.num_words() + 1);
    let mut input_open = true;

    for step in 0..=passage.num_words() {
        if step > 0 {
            game.blank_random_word(&mut rng);
        }

        let rendering = game.to_string();
        writeln!(output, "{rendering}")?;
        renderings.push(rendering);

        if let Some(stats) = stats.as_mut() {
            if input_open {
                input_open = attempt(&mut *input, &mut *output, &game, stats)?;
            }
        }
    }

    let summary = stats.map(|s| s.summary());
    if let Some(summary) = &summary {
        if config.json_summary {
            writeln!(output, "{}", serde_json::to_string(summary)?)?;
        } else {
            writeln!(
                output,
                "Recalled {} of {} attempts.",
                summary.successes,
                summary.successes + summary.fails
            )?;
        }
    }

    output.flush()?;
    info!(blanked = game.blanked_count(), "drill finished");

    Ok(DrillOutcome {
        seed: rng.seed(),
        renderings,
        summary,
    })
}

/// Read and score one recall attempt. Returns `false` once input is exhausted.
fn attempt<R, W>(
    input: &mut R,
    output: &mut W,
    game: &BlankingGame,
    stats: &mut PassageStats,
) -> Result<bool, DrillError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        info!("input closed, ending practice");
        return Ok(false);
    }

    let matched = game.matches(&line);
    stats.record(matched);

    if matched {
        writeln!(output, "Correct!")?;
    } else {
        warn!(attempt = line.trim(), "recall attempt did not match");
        writeln!(output, "Not quite.")?;
    }
    Ok(true)
}
