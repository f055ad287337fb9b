use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use maskfield::FieldSpec;

/// Format and progressively validate masked field input
#[derive(Parser, Debug)]
#[command(name = "maskfield", version, about)]
pub struct CliArgs {
    /// Log field setup and trimming to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Treat each input as keystrokes typed one at a time
    #[arg(long, global = true)]
    pub keys: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mask inputs against a template given on the command line
    Format(FormatArgs),
    /// Mask inputs against a field from a YAML or JSON config file
    Run(RunArgs),
    /// Mask inputs against a built-in field
    Preset(PresetArgs),
    /// List built-in fields
    Presets,
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Mask template (X, M, D, Y take digits)
    #[arg(short, long)]
    pub template: String,

    /// Alternate template enabling letter slots (`_`)
    #[arg(short, long)]
    pub charset: Option<String>,

    /// Known-good complete value used to pad partial input
    #[arg(short, long, requires = "pattern")]
    pub example: Option<String>,

    /// Regex a complete value must match
    #[arg(short, long, requires = "example")]
    pub pattern: Option<String>,

    /// Raw values to mask
    #[arg(value_name = "RAW")]
    pub inputs: Vec<String>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Field config file
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Field id within the config, defaults to the first field
    #[arg(short, long)]
    pub field: Option<String>,

    #[arg(value_name = "RAW")]
    pub inputs: Vec<String>,
}

#[derive(Args, Debug)]
pub struct PresetArgs {
    /// Preset name, see `maskfield presets`
    pub name: String,

    #[arg(value_name = "RAW")]
    pub inputs: Vec<String>,
}

impl FormatArgs {
    pub fn to_spec(&self) -> FieldSpec {
        FieldSpec {
            id: None,
            placeholder: self.template.clone(),
            character_set: self.charset.clone(),
            valid_example: self.example.clone(),
            pattern: self.pattern.clone(),
            required: false,
        }
    }
}
