use std::env;
use std::str::FromStr;

use crate::brains::{BrainKind, Steering};
use crate::error::ConfigError;

pub const DEFAULT_PING_STALENESS: u32 = 30;

/// Brain selection and tuning, read from `MAZE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrainConfig {
    pub kind: BrainKind,
    /// Turns a ping response stays trusted before the frontier brain pings again.
    pub ping_staleness: u32,
    pub steering: Steering,
    pub player_id: u32,
    /// Seeds the random walk; unset means seeded from the OS.
    pub seed: Option<u64>,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            kind: BrainKind::Greedy,
            ping_staleness: DEFAULT_PING_STALENESS,
            steering: Steering::default(),
            player_id: 0,
            seed: None,
        }
    }
}

impl BrainConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`BrainConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let kind = match lookup("MAZE_BRAIN") {
            Some(value) => value.parse::<BrainKind>()?,
            None => defaults.kind,
        };
        let steering = match lookup("MAZE_STEERING") {
            Some(value) => value.parse::<Steering>()?,
            None => defaults.steering,
        };
        let ping_staleness = parse_number(&lookup, "MAZE_PING_STALENESS")?
            .unwrap_or(defaults.ping_staleness);
        let player_id = parse_number(&lookup, "MAZE_PLAYER_ID")?.unwrap_or(defaults.player_id);
        let seed = parse_number(&lookup, "MAZE_SEED")?;

        Ok(Self {
            kind,
            ping_staleness,
            steering,
            player_id,
            seed,
        })
    }
}

fn parse_number<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value.trim().parse::<T>().map_err(|_| ConfigError::InvalidNumber {
                key,
                value: value.clone(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = BrainConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, BrainConfig::default());
        assert_eq!(config.ping_staleness, 30);
    }

    #[test]
    fn test_reads_all_keys() {
        let config = BrainConfig::from_lookup(lookup_from(&[
            ("MAZE_BRAIN", "frontier"),
            ("MAZE_STEERING", "frontier"),
            ("MAZE_PING_STALENESS", "10"),
            ("MAZE_PLAYER_ID", "3"),
            ("MAZE_SEED", "99"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            BrainConfig {
                kind: BrainKind::Frontier,
                ping_staleness: 10,
                steering: Steering::Frontier,
                player_id: 3,
                seed: Some(99),
            }
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            BrainConfig::from_lookup(lookup_from(&[("MAZE_PING_STALENESS", "soon")])),
            Err(ConfigError::InvalidNumber {
                key: "MAZE_PING_STALENESS",
                value: "soon".to_string()
            })
        );
        assert_eq!(
            BrainConfig::from_lookup(lookup_from(&[("MAZE_BRAIN", "telepath")])),
            Err(ConfigError::UnknownBrain("telepath".to_string()))
        );
    }
}
