use clap::Parser;
use reflection_dump::cli::Cli;
use reflection_dump::{dump, logging, pipeline};
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.log_json {
        logging::init_tracing_json(cli.verbose);
    } else {
        logging::init_tracing(cli.verbose);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("reflection-dump error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let request = cli.request();
    let mut dumper = dump::dumper_for(&config.output);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    pipeline::run(&request, &config, dumper.as_mut(), &mut out)?;
    Ok(())
}
