use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::args::CliArgs;
use crate::checker::ScanOptions;
use crate::emitter::TargetClass;

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "nibeans.json";

/// Output directory used when neither the command line nor the config file
/// names one.
pub const DEFAULT_OUT_DIR: &str = "generated";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("missing value for option srcpackages")]
    MissingSourcePackages,

    #[error("missing or bad value for option tgtclass: `{0}`")]
    BadTargetClass(String),
}

/// Validated generator options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub source_packages: Vec<String>,
    pub target: TargetClass,
    pub strict: bool,
}

impl GeneratorOptions {
    /// Validate raw option values. Package entries may themselves be
    /// comma-separated; blanks are dropped.
    pub fn new(
        source_packages: &[String],
        target_class: Option<&str>,
        strict: bool,
    ) -> Result<Self, OptionsError> {
        let source_packages = parse_source_packages(source_packages);
        if source_packages.is_empty() {
            return Err(OptionsError::MissingSourcePackages);
        }
        let target = parse_target_class(target_class.unwrap_or_default())?;
        Ok(GeneratorOptions {
            source_packages,
            target,
            strict,
        })
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            source_packages: self.source_packages.clone(),
            strict: self.strict,
        }
    }
}

pub fn parse_source_packages(raw: &[String]) -> Vec<String> {
    let mut packages: Vec<String> = Vec::new();
    for value in raw.iter().flat_map(|value| value.split(',')) {
        let value = value.trim();
        if !value.is_empty() && !packages.iter().any(|p| p == value) {
            packages.push(value.to_string());
        }
    }
    packages
}

/// Split `a.b.Class` into package and class. At least one package segment
/// is required and every segment must be a word (`[A-Za-z0-9_]+`).
pub fn parse_target_class(text: &str) -> Result<TargetClass, OptionsError> {
    let bad = || OptionsError::BadTargetClass(text.to_string());
    let is_word = |segment: &str| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    };
    let (package, class) = text.rsplit_once('.').ok_or_else(bad)?;
    if !package.split('.').all(is_word) || !is_word(class) {
        return Err(bad());
    }
    Ok(TargetClass::new(package, class))
}

/// Custom deserializer for boolean options that accepts both bool and string values.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

/// Contents of `nibeans.json`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub source_packages: Option<Vec<String>>,
    #[serde(default)]
    pub target_class: Option<String>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub strict: Option<bool>,
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
}

pub fn parse_config(source: &str) -> Result<ConfigFile> {
    serde_json::from_str(source).context("failed to parse nibeans config JSON")
}

pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&source).with_context(|| format!("in config file {}", path.display()))
}

/// Everything a run needs, after merging the config file and the command
/// line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub options: GeneratorOptions,
    pub out_dir: PathBuf,
    pub inputs: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Merge the config file (explicit `--config`, else `nibeans.json` in
/// `cwd` when present) with the command line; command line values win.
/// Relative paths resolve against `cwd`, except `outDir` from a config file
/// which resolves against the file's directory.
pub fn resolve_run_config(args: &CliArgs, cwd: &Path) -> Result<RunConfig> {
    let config_path = match &args.config {
        Some(path) => Some(cwd.join(path)),
        None => Some(cwd.join(CONFIG_FILE_NAME)).filter(|path| path.is_file()),
    };
    let (file, config_dir) = match &config_path {
        Some(path) => (
            load_config(path)?,
            path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.to_path_buf()),
        ),
        None => (ConfigFile::default(), cwd.to_path_buf()),
    };

    let source_packages = if args.source_packages.is_empty() {
        file.source_packages.clone().unwrap_or_default()
    } else {
        args.source_packages.clone()
    };
    let target_class = args.target_class.as_deref().or(file.target_class.as_deref());
    let strict = args.strict || file.strict.unwrap_or(false);
    let options = GeneratorOptions::new(&source_packages, target_class, strict)?;

    let out_dir = match (&args.out_dir, &file.out_dir) {
        (Some(dir), _) => cwd.join(dir),
        (None, Some(dir)) => config_dir.join(dir),
        (None, None) => cwd.join(DEFAULT_OUT_DIR),
    };
    let inputs = args.inputs.iter().map(|input| cwd.join(input)).collect();

    Ok(RunConfig {
        options,
        out_dir,
        inputs,
        dry_run: args.dry_run,
    })
}
