// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use super::parsers::SubjectArg;

#[derive(Parser, Debug)]
#[command(
    name = "tiny_checks",
    version,
    about = "Check named numeric values against bounds or a rule file"
)]
pub struct Args {
    /// Name of the value under check, used in failure messages
    #[arg(long, requires = "value")]
    pub name: Option<String>,

    /// Value to check (negative numbers, NaN, inf and -inf are accepted)
    #[arg(long, requires = "name", allow_hyphen_values = true)]
    pub value: Option<f64>,

    /// Must be strictly less than this bound
    #[arg(long, value_name = "BOUND", requires = "name", allow_hyphen_values = true)]
    pub lt: Vec<f64>,

    /// Must be less than or equal to this bound
    #[arg(long, value_name = "BOUND", requires = "name", allow_hyphen_values = true)]
    pub lte: Vec<f64>,

    /// Must be strictly greater than this bound
    #[arg(long, value_name = "BOUND", requires = "name", allow_hyphen_values = true)]
    pub gt: Vec<f64>,

    /// Must be greater than or equal to this bound
    #[arg(long, value_name = "BOUND", requires = "name", allow_hyphen_values = true)]
    pub gte: Vec<f64>,

    /// Must be equal to this value
    #[arg(long, value_name = "EXPECTED", requires = "name", allow_hyphen_values = true)]
    pub eq: Vec<f64>,

    /// Rule file (JSON; YAML when built with the `yaml` feature)
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// NAME=VALUE checked against the rule file; repeatable
    #[arg(long = "subject", value_name = "NAME=VALUE", requires = "rules")]
    pub subjects: Vec<SubjectArg>,

    /// Only report failures
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
