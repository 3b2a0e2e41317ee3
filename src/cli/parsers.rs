// src/cli/parsers.rs
use std::str::FromStr;

/// `NAME=VALUE` pair given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectArg {
    pub name: String,
    pub value: f64,
}

impl FromStr for SubjectArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("missing name in '{s}'"));
        }
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| format!("invalid number '{}' for {name}", value.trim()))?;
        Ok(Self {
            name: name.to_string(),
            value,
        })
    }
}
