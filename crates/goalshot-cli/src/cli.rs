use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use goalshot_core::{EvalSettings, GoalSide, TeamPlayerId, Vector2};

use crate::commands::{
    all::all,
    shot::{parse_point, shot, ShotOrigin},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Goal {
    /// The opponent's goal, the one we attack
    Opp,
    /// Our own goal
    Own,
}

impl From<Goal> for GoalSide {
    fn from(goal: Goal) -> Self {
        match goal {
            Goal::Opp => GoalSide::Opp,
            Goal::Own => GoalSide::Own,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Find the best shot from one player, or from an arbitrary point.
    #[clap(name = "shot")]
    Shot {
        /// Scenario file (JSON)
        scenario: PathBuf,

        #[clap(long, default_value = "opp")]
        side: Goal,

        /// The shooting player, as own:<id> or opp:<id>. It is never treated as an
        /// obstacle.
        #[clap(long, required_unless_present = "origin", conflicts_with = "origin")]
        shooter: Option<TeamPlayerId>,

        /// Shoot from this point instead, as <x>,<y> in mm.
        #[clap(long, allow_hyphen_values = true, value_parser = parse_point)]
        origin: Option<Vector2>,
    },

    /// Find the best shot of every one of our players.
    #[clap(name = "all")]
    All {
        scenario: PathBuf,

        #[clap(long, default_value = "opp")]
        side: Goal,
    },
}

#[derive(Debug, Parser)]
#[command(name = "goalshot")]
pub struct Cli {
    #[clap(subcommand)]
    command: Command,

    #[clap(long, short = 'f', default_value = "goalshot-settings.json")]
    pub settings_file: PathBuf,

    #[clap(long, default_value = "info")]
    pub log_level: String,

    /// Where to write the JSON log. `auto` picks a timestamped file in the user's data
    /// directory, `none` disables the log file.
    #[clap(long, default_value = "auto")]
    pub log_file: String,
}

impl Cli {
    pub fn start(self) -> ExitCode {
        let settings = match EvalSettings::load_or_insert(&self.settings_file) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("Error loading settings: {:#}", err);
                return ExitCode::FAILURE;
            }
        };

        match self.command {
            Command::Shot {
                scenario,
                side,
                shooter,
                origin,
            } => {
                let origin = match (shooter, origin) {
                    (Some(id), _) => ShotOrigin::Player(id),
                    (None, Some(point)) => ShotOrigin::Point(point),
                    // clap enforces one of the two
                    (None, None) => ShotOrigin::Point(Vector2::zeros()),
                };
                match shot(&scenario, &settings, side.into(), origin) {
                    Ok(_) => ExitCode::SUCCESS,
                    Err(err) => {
                        eprintln!("Error evaluating shot: {:#}", err);
                        ExitCode::FAILURE
                    }
                }
            }
            Command::All { scenario, side } => match all(&scenario, &settings, side.into()) {
                Ok(_) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("Error evaluating shots: {:#}", err);
                    ExitCode::FAILURE
                }
            },
        }
    }
}
