use fourinarow_engine::config::{BoardConfig, Symbols};
use serde::{Deserialize, Serialize};
use std::fs;

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV: &str = "FOURINAROW_CONFIG";
pub const PLAYER_X_ENV: &str = "FOURINAROW_PLAYER_X";
pub const PLAYER_O_ENV: &str = "FOURINAROW_PLAYER_O";
pub const EMPTY_ENV: &str = "FOURINAROW_EMPTY";

/// User-adjustable display settings. Board geometry is fixed and not part
/// of the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub player_x: char,
    pub player_o: char,
    pub empty: char,
}

impl Default for Config {
    fn default() -> Self {
        let symbols = Symbols::default();
        Self {
            player_x: symbols.player_x,
            player_o: symbols.player_o,
            empty: symbols.empty,
        }
    }
}

impl Config {
    pub fn board_config(&self) -> BoardConfig {
        BoardConfig::standard().with_symbols(Symbols {
            player_x: self.player_x,
            player_o: self.player_o,
            empty: self.empty,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConfigSources {
    pub player_x: ValueSource,
    pub player_o: ValueSource,
    pub empty: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            player_x: ValueSource::Default,
            player_o: ValueSource::Default,
            empty: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolves configuration from defaults, the file named by
/// `FOURINAROW_CONFIG`, and the per-symbol environment overrides, in that
/// order of increasing precedence.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Same as [`load_with_sources`] with an injectable variable lookup.
pub fn load_from<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = lookup(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(&path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.player_x {
            cfg.player_x = parse_symbol("player_x", &v)?;
            sources.player_x = ValueSource::File;
        }
        if let Some(v) = f.player_o {
            cfg.player_o = parse_symbol("player_o", &v)?;
            sources.player_o = ValueSource::File;
        }
        if let Some(v) = f.empty {
            cfg.empty = parse_symbol("empty", &v)?;
            sources.empty = ValueSource::File;
        }
    }

    if let Some(v) = lookup(PLAYER_X_ENV)
        && !v.is_empty()
    {
        cfg.player_x = parse_symbol(PLAYER_X_ENV, &v)?;
        sources.player_x = ValueSource::Env;
    }
    if let Some(v) = lookup(PLAYER_O_ENV)
        && !v.is_empty()
    {
        cfg.player_o = parse_symbol(PLAYER_O_ENV, &v)?;
        sources.player_o = ValueSource::Env;
    }
    if let Some(v) = lookup(EMPTY_ENV)
        && !v.is_empty()
    {
        cfg.empty = parse_symbol(EMPTY_ENV, &v)?;
        sources.empty = ValueSource::Env;
    }

    validate(&cfg)?;
    tracing::debug!(?cfg, "configuration resolved");
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    player_x: Option<String>,
    #[serde(default)]
    player_o: Option<String>,
    #[serde(default)]
    empty: Option<String>,
}

fn parse_symbol(name: &str, raw: &str) -> Result<char, ConfigError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() && !c.is_control() => Ok(c),
        _ => Err(ConfigError::Invalid(format!(
            "{} must be a single visible character, got {:?}",
            name, raw
        ))),
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.player_x == cfg.player_o || cfg.player_x == cfg.empty || cfg.player_o == cfg.empty {
        return Err(ConfigError::Invalid(
            "player_x, player_o and empty symbols must differ".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let resolved = load_from(lookup(&[])).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.player_x, ValueSource::Default);
        let board = resolved.config.board_config();
        assert_eq!((board.width(), board.height()), (7, 6));
        assert_eq!(board.symbols().empty, '.');
    }

    #[test]
    fn test_file_then_env_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player_x = \"R\"\nplayer_o = \"Y\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let vars = [(CONFIG_ENV, path.as_str()), (PLAYER_O_ENV, "B")];
        let resolved = load_from(lookup(&vars)).unwrap();

        assert_eq!(resolved.config.player_x, 'R');
        assert_eq!(resolved.sources.player_x, ValueSource::File);
        assert_eq!(resolved.config.player_o, 'B');
        assert_eq!(resolved.sources.player_o, ValueSource::Env);
        assert_eq!(resolved.config.empty, '.');
        assert_eq!(resolved.sources.empty, ValueSource::Default);
    }

    #[test]
    fn test_rejects_multi_char_and_blank_symbols() {
        let err = load_from(lookup(&[(PLAYER_X_ENV, "XX")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "FOURINAROW_PLAYER_X must be a single visible character, got \"XX\""
        );

        let err = load_from(lookup(&[(EMPTY_ENV, " ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_clashing_symbols() {
        let err = load_from(lookup(&[(PLAYER_O_ENV, "X")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "player_x, player_o and empty symbols must differ"
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let missing = [(CONFIG_ENV, "/nonexistent/fourinarow.toml")];
        let err = load_from(lookup(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player_x = ").unwrap();
        let path = file.path().to_string_lossy().to_string();
        let err = load_from(lookup(&[(CONFIG_ENV, path.as_str())])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
