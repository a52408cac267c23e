use std::error::Error;

use clap::{Parser, Subcommand};
use log::info;

use valve_planner::{part1, part2, solve, Config};

/// Reads a valve scan from stdin and prints the most pressure that can be released.
#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    part: Part,

    /// Valve to start from
    #[arg(long, default_value = "AA", global = true)]
    start: String,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Part {
    /// Open valves alone
    Part1 {
        #[arg(long, default_value_t = 30)]
        minutes: u32,
    },
    /// Open valves together with the elephant
    Part2 {
        #[arg(long, default_value_t = 26)]
        minutes: u32,
    },
    /// Both of the above, one answer per line
    Both {
        #[arg(long, default_value_t = 30)]
        minutes: u32,
        #[arg(long, default_value_t = 26)]
        duo_minutes: u32,
    },
}

impl Cli {
    fn config(&self) -> Config {
        let defaults = Config::default();
        let (solo_minutes, duo_minutes) = match self.part {
            Part::Part1 { minutes } => (minutes, defaults.duo_minutes),
            Part::Part2 { minutes } => (defaults.solo_minutes, minutes),
            Part::Both { minutes, duo_minutes } => (minutes, duo_minutes),
        };
        Config { start: self.start.clone(), solo_minutes, duo_minutes }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.config();
    let stdin = std::io::stdin().lock();
    match cli.part {
        Part::Part1 { .. } => {
            let best = part1(stdin, &config)?;
            info!("alone for {} minutes: {best}", config.solo_minutes);
            println!("{best}");
        },
        Part::Part2 { .. } => {
            let best = part2(stdin, &config)?;
            info!("with the elephant for {} minutes: {best}", config.duo_minutes);
            println!("{best}");
        },
        Part::Both { .. } => {
            let answer = solve(stdin, &config)?;
            info!("alone for {} minutes: {}, with the elephant for {} minutes: {}",
                config.solo_minutes, answer.solo, config.duo_minutes, answer.duo);
            println!("{}", answer.solo);
            println!("{}", answer.duo);
        },
    }
    Ok(())
}
