use oneshot_classifier::config::{cli, parse_args, CliCommand, RuntimeConfig};
use oneshot_classifier::experiment::ExperimentRunner;
use oneshot_classifier::image::io::write_json_file;
use oneshot_classifier::Error;
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = match parse_args(env::args().skip(1))? {
        CliCommand::Run(config) => config,
        CliCommand::Help => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
    };

    println!("Running one-shot handwritten character classifier");
    let runner = ExperimentRunner::new(config.experiment.clone());
    let report = runner.run()?;

    write_report(&config, &report)?;

    let mean = report.mean_error_rate()?;
    println!(
        "\nAverage error rate across {} of {} runs: {:.1}%",
        report.succeeded, report.attempted, mean
    );
    Ok(())
}

fn write_report(
    config: &RuntimeConfig,
    report: &oneshot_classifier::ExperimentReport,
) -> Result<(), Error> {
    if let Some(path) = &config.output.json_out {
        write_json_file(path, report)?;
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}
