//! Line-oriented command parsing.

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use tracker_core::{CounterKind, PlayerId};
use tracker_runtime::{Direction, Intent};

pub const HELP: &str = "\
commands:
  + <player> [n]             gain n life (default 1), routed through any active mode
  - <player> [n]             lose n life (default 1)
  hold <+|-> <player> <secs> press and hold for the given seconds
  add | remove               show or hide a seat
  random                     highlight a random player
  select <player|none>       highlight a player
  cmd <player>               toggle commander damage entry from <player>
  counter <kind> <player>    toggle counter entry (poison, radiation, energy, commander_casts)
  reset                      reset life, damage and counters
  new                        discard the table and start a fresh game
  show | help | quit";

/// Longest hold the `hold` command simulates.
pub const MAX_HOLD: Duration = Duration::from_secs(600);

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Intent(Intent),
    Hold {
        direction: Direction,
        player: PlayerId,
        held: Duration,
    },
    StartOver,
    Show,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Show);
    };
    let args: Vec<&str> = words.collect();

    let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("+", [player, rest @ ..]) | ("-", [player, rest @ ..]) => {
            let amount = match rest {
                [] => 1,
                [amount] => amount
                    .parse::<i32>()
                    .with_context(|| format!("invalid amount '{amount}'"))?,
                _ => bail!("usage: {verb} <player> [n]"),
            };
            let sign = if verb == "+" { 1 } else { -1 };
            let delta = amount
                .checked_mul(sign)
                .ok_or_else(|| anyhow!("amount '{amount}' is out of range"))?;
            Command::Intent(Intent::AdjustLife {
                player: player_id(player)?,
                delta,
            })
        }
        ("hold", [direction, player, secs]) => Command::Hold {
            direction: match *direction {
                "+" => Direction::Increase,
                "-" => Direction::Decrease,
                other => bail!("hold direction must be + or -, got '{other}'"),
            },
            player: player_id(player)?,
            held: secs
                .parse::<f64>()
                .ok()
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                .filter(|held| *held <= MAX_HOLD)
                .ok_or_else(|| {
                    anyhow!(
                        "invalid duration '{secs}' (0 to {} seconds)",
                        MAX_HOLD.as_secs()
                    )
                })?,
        },
        ("add", []) => Command::Intent(Intent::AddPlayer),
        ("remove", []) => Command::Intent(Intent::RemovePlayer),
        ("random", []) => Command::Intent(Intent::PickRandomPlayer),
        ("select", ["none"]) => Command::Intent(Intent::Select(None)),
        ("select", [player]) => Command::Intent(Intent::Select(Some(player_id(player)?))),
        ("cmd", [player]) => Command::Intent(Intent::ToggleCommanderDamage(player_id(player)?)),
        ("counter", [kind, player]) => Command::Intent(Intent::ToggleCounter {
            kind: kind
                .parse::<CounterKind>()
                .map_err(|_| anyhow!("unknown counter '{kind}'"))?,
            player: player_id(player)?,
        }),
        ("reset", []) => Command::Intent(Intent::ResetGame),
        ("new", []) => Command::StartOver,
        ("show", []) => Command::Show,
        ("help" | "?", []) => Command::Help,
        ("quit" | "exit" | "q", []) => Command::Quit,
        _ => bail!("unrecognised command '{}', try 'help'", line.trim()),
    };
    Ok(command)
}

fn player_id(raw: &str) -> Result<PlayerId> {
    Ok(raw.parse::<PlayerId>()?)
}
