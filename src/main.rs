use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use train_dispatch::cli::Cli;
use train_dispatch::domain::network::select_network;
use train_dispatch::error::Result;
use train_dispatch::report::ReportStyle;
use train_dispatch::{loader, logger, plan_journey, render};

fn main() -> ExitCode {
    logger::init();

    let cli = Cli::parse();
    let style = ReportStyle::colored();

    match run(&cli, &style) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", style.error_line(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, style: &ReportStyle) -> Result<()> {
    let train_count = cli.train_count()?;

    let networks = loader::read_map(&cli.map)?;
    let network = select_network(&networks, &cli.start, &cli.end)?;
    log::info!("selected network '{}' with {} stations", network.name(), network.station_count());

    let plan = plan_journey(network, &cli.start, &cli.end, train_count)?;

    if cli.visualize {
        // Rendering trouble is reported but never sinks the schedule.
        if let Err(err) = render::draw_network(network, &plan.timetable.assignments, Path::new("network.png")) {
            log::error!("could not render the network image: {}", err);
        }
    }

    if plan.timetable.is_partial() {
        eprintln!("{}", style.partial_warning(&plan.timetable));
    }

    for turn in &plan.turns {
        println!("{}", style.turn_line(turn));
    }
    Ok(())
}
