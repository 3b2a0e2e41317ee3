// src/config.rs
use std::path::Path;

use log::info;
use tiny_checks_domain::RuleSet;
use tiny_checks_shared_kernel::{InfrastructureError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl RuleFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Load a [`RuleSet`] from a JSON or YAML file, picked by extension.
///
/// # Errors
///
/// Returns `Err` when the extension is not recognised, the file cannot be
/// read, or its contents do not deserialize into a rule set.
pub fn load_rules(path: &Path) -> Result<RuleSet> {
    let format = RuleFormat::from_path(path).ok_or_else(|| InfrastructureError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let text = std::fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let rules = parse_rules(&text, format)?;
    info!("loaded {} rule(s) from {}", rules.rules.len(), path.display());
    Ok(rules)
}

fn parse_rules(text: &str, format: RuleFormat) -> Result<RuleSet> {
    let rules = match format {
        RuleFormat::Json => serde_json::from_str(text)?,
        // Rule specs are written as `variant: value` maps, not `!variant` tags.
        #[cfg(feature = "yaml")]
        RuleFormat::Yaml => serde_yaml::with::singleton_map_recursive::deserialize(
            serde_yaml::Deserializer::from_str(text),
        )?,
    };
    Ok(rules)
}
