//! The "start again" controller.
//!
//! Each iteration gathers parameters, runs the pipeline on fresh data and
//! prints the report. Nothing survives from one iteration to the next apart
//! from the iteration counter.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use vecspan_linalg::{run_once, RunConfig};

use crate::config::PresetConfig;
use crate::console::Console;
use crate::display::write_report;

pub const REPEAT_PROMPT: &str = "Start again [y/n]: ";

#[derive(Debug, Clone, Copy)]
pub struct Session {
    preset: PresetConfig,
    once: bool,
}

impl Session {
    pub fn new(preset: PresetConfig, once: bool) -> Self {
        Self { preset, once }
    }

    /// Fill in whatever the preset leaves open. `None` on end of input.
    fn gather<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<Option<RunConfig>> {
        let fields = [
            (self.preset.n, "n"),
            (self.preset.r, "r"),
            (self.preset.lower, "lower bound (inclusive)"),
            (self.preset.upper, "upper bound (exclusive)"),
        ];
        let mut values = [0i64; 4];
        for (slot, (preset, label)) in values.iter_mut().zip(fields) {
            *slot = match preset {
                Some(v) => v,
                None => match console.prompt_int(label)? {
                    Some(v) => v,
                    None => return Ok(None),
                },
            };
        }
        let [n, r, lower, upper] = values;
        let mut config = RunConfig::new(n, r, lower, upper);
        config.seed = self.preset.seed;
        Ok(Some(config))
    }

    /// Run until the user declines to repeat. Returns the number of completed runs.
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<usize> {
        self.preset
            .validate()
            .context("Preset run parameters are invalid")?;

        let mut completed = 0usize;
        loop {
            let Some(config) = self.gather(console)? else {
                log::debug!("input closed, leaving after {} runs", completed);
                break;
            };

            // Offset the seed per iteration so repeats differ but stay reproducible.
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(completed as u64)),
                None => StdRng::from_entropy(),
            };

            let report = match run_once(&config, &mut rng) {
                Ok(report) => report,
                Err(e) if self.preset.is_complete() => {
                    return Err(e).context("Preset run parameters are invalid");
                }
                Err(e) => {
                    log::warn!("rejected run parameters: {}", e);
                    console.say(&format!("Invalid input: {}. Try again.", e))?;
                    continue;
                }
            };

            write_report(console.output(), &report).context("Failed to write report")?;
            completed += 1;

            if self.once || !console.confirm(REPEAT_PROMPT)? {
                break;
            }
        }
        Ok(completed)
    }
}
