use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::core::{DEFAULT_COLS, DEFAULT_LIT_PROBABILITY, DEFAULT_ROWS, MAX_DIMENSION};
use crate::error::ConfigError;

pub const ROWS_ENV: &str = "LIGHTS_OUT_ROWS";
pub const COLS_ENV: &str = "LIGHTS_OUT_COLS";
pub const LIT_PROBABILITY_ENV: &str = "LIGHTS_OUT_LIT_PROBABILITY";

/// Board shape and starting density, fixed for the lifetime of a game.
/// Only constructible through `new`, so a held value is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoardConfig {
    rows: usize,
    cols: usize,
    lit_probability: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            lit_probability: DEFAULT_LIT_PROBABILITY,
        }
    }
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize, lit_probability: f64) -> Result<Self, ConfigError> {
        let config = Self {
            rows,
            cols,
            lit_probability,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn lit_probability(&self) -> f64 {
        self.lit_probability
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_DIMENSION,
            });
        }
        // also rejects NaN
        if !(0.0..=1.0).contains(&self.lit_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(self.lit_probability));
        }
        Ok(())
    }
}

/// A partial board configuration from one source. Layers are merged in order
/// and the result is validated once by `apply`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub lit_probability: Option<f64>,
}

impl ConfigOverrides {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the `LIGHTS_OUT_*` variables through `lookup`. A variable that is
    /// set but unparsable is an error rather than silently ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            rows: lookup(ROWS_ENV).map(|v| parse_value(ROWS_ENV, &v)).transpose()?,
            cols: lookup(COLS_ENV).map(|v| parse_value(COLS_ENV, &v)).transpose()?,
            lit_probability: lookup(LIT_PROBABILITY_ENV)
                .map(|v| parse_value(LIT_PROBABILITY_ENV, &v))
                .transpose()?,
        })
    }

    /// Values present in `other` win
    pub fn merge(self, other: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            rows: other.rows.or(self.rows),
            cols: other.cols.or(self.cols),
            lit_probability: other.lit_probability.or(self.lit_probability),
        }
    }

    pub fn apply(&self, base: BoardConfig) -> Result<BoardConfig, ConfigError> {
        BoardConfig::new(
            self.rows.unwrap_or(base.rows),
            self.cols.unwrap_or(base.cols),
            self.lit_probability.unwrap_or(base.lit_probability),
        )
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    Print,
}

/// Everything taken from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub mode: Option<String>,
    pub config_path: Option<PathBuf>,
    pub board_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    pub seed: Option<u64>,
    pub json: bool,
}

impl CliArgs {
    /// Expects the arguments without the program name
    pub fn parse<I>(args: I) -> Result<CliArgs, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cli = CliArgs {
            mode: None,
            config_path: None,
            board_path: None,
            overrides: ConfigOverrides::default(),
            seed: None,
            json: false,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value_for = |flag: &str| {
                args.next().ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
            };
            match arg.as_str() {
                "--rows" => cli.overrides.rows = Some(parse_value(&arg, &value_for(&arg)?)?),
                "--cols" => cli.overrides.cols = Some(parse_value(&arg, &value_for(&arg)?)?),
                "--probability" => {
                    cli.overrides.lit_probability = Some(parse_value(&arg, &value_for(&arg)?)?)
                }
                "--seed" => cli.seed = Some(parse_value(&arg, &value_for(&arg)?)?),
                "--config" => cli.config_path = Some(PathBuf::from(value_for(&arg)?)),
                "--board" => cli.board_path = Some(PathBuf::from(value_for(&arg)?)),
                "--json" => cli.json = true,
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownOption(flag.to_string()));
                }
                _ if cli.mode.is_none() => cli.mode = Some(arg),
                _ => return Err(ConfigError::UnknownOption(arg)),
            }
        }
        Ok(cli)
    }

    /// Unknown modes fall back to interactive; the caller reports them
    pub fn run_mode(&self) -> Result<RunMode, String> {
        match self.mode.as_deref() {
            None | Some("interactive") => Ok(RunMode::Interactive),
            Some("print") => Ok(RunMode::Print),
            Some(other) => Err(other.to_string()),
        }
    }

    /// Defaults, then the config file, then the environment, then flags
    pub fn resolve_board(&self, env: ConfigOverrides) -> Result<BoardConfig, ConfigError> {
        let file = match &self.config_path {
            Some(path) => ConfigOverrides::load_from_file(path)?,
            None => ConfigOverrides::default(),
        };
        file.merge(env)
            .merge(self.overrides.clone())
            .apply(BoardConfig::default())
    }
}
