mod cli;
mod logging;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use cli::{CliArgs, Command};
use maskfield::{FieldSpec, FieldUpdate, MaskedField, config};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (field, inputs) = match args.command {
        Command::Format(format) => (MaskedField::new(format.to_spec())?, format.inputs),
        Command::Run(run_args) => {
            let fields = config::load(run_args.config.as_path())?;
            let spec = config::select(fields, run_args.field.as_deref())?;
            (MaskedField::new(spec)?, run_args.inputs)
        }
        Command::Preset(preset) => (MaskedField::preset(preset.name.as_str())?, preset.inputs),
        Command::Presets => {
            let mut out = io::stdout().lock();
            for name in FieldSpec::PRESETS {
                let spec = FieldSpec::preset(name)?;
                writeln!(out, "{name}\t{}", spec.template())?;
            }
            return Ok(());
        }
    };

    let updates: Vec<FieldUpdate> = if args.keys {
        inputs
            .iter()
            .map(|keys| field.type_keys_final(keys.as_str()))
            .collect()
    } else {
        inputs
            .iter()
            .map(|raw| field.handle_change(raw.as_str()))
            .collect()
    };

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &updates)?;
        writeln!(out)?;
    } else {
        for update in &updates {
            writeln!(out, "{}\t{}", update.value, update.guide)?;
        }
    }
    Ok(())
}
