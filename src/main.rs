// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

#![deny(warnings)]

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use futures::Future;
use places::{Client, Config, DetailsReport, DistanceReport, PlaceDetails,
    Protocol, SearchReport, TextSearch};
use std::error::Error;
use std::fmt::{Display, self};
use std::fs::File;
use std::io;
use std::num::ParseIntError;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

type Command = Box<dyn Future<Item = String, Error = places::Error> + Send>;

fn run() -> Result<(), AppError> {
    let key_help = format!("Google API key (default: ${} or the \
        configuration file)", Config::KEY_VAR);
    let matches = App::new(APP_NAME)
        .version(APP_VERSION)
        .author(APP_AUTHORS)
        .about("Google Places search, details and distance")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("CONFIG")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("Path to configuration file")
        )
        .arg(
            Arg::with_name("KEY")
                .short("k")
                .long("key")
                .takes_value(true)
                .help(&key_help)
        )
        .arg(
            Arg::with_name("RAW")
                .long("raw")
                .help("Print the full JSON response")
        )
        .arg(
            Arg::with_name("VERBOSE")
                .short("v")
                .long("verbose")
                .help("Log requests")
        )
        .subcommand(
            SubCommand::with_name("search")
                .about("Search places matching a text")
                .arg(
                    Arg::with_name("QUERY")
                        .required(true)
                        .help("Text to search for")
                )
                .arg(
                    Arg::with_name("LOCATION")
                        .short("l")
                        .long("location")
                        .takes_value(true)
                        .help("Bias results around LAT,LNG")
                )
                .arg(
                    Arg::with_name("RADIUS")
                        .short("r")
                        .long("radius")
                        .takes_value(true)
                        .help("Bias radius in meters")
                )
        )
        .subcommand(
            SubCommand::with_name("details")
                .about("Show the address of a place")
                .arg(Arg::with_name("PLACE_ID").required(true))
        )
        .subcommand(
            SubCommand::with_name("distance")
                .about("Distance and travel time between two places")
                .arg(Arg::with_name("FROM").required(true))
                .arg(Arg::with_name("TO").required(true))
        )
        .get_matches();
    init_logging(matches.is_present("VERBOSE"));
    let config = match matches.value_of("CONFIG") {
        Some(path) => {
            let config_file = File::open(Path::new(path))
                .map_err(AppError::FailedToOpenConfigFile)?;
            Config::from_config(config_file).map_err(AppError::BadConfigFile)?
        }
        None => Config::default(),
    };
    let env_key = std::env::var(Config::KEY_VAR).ok();
    let key = config
        .resolve_key(matches.value_of("KEY"), env_key.as_ref().map(|k| &**k))
        .ok_or(AppError::MissingKey)?;
    let client = Client::new(key).map_err(AppError::PlacesError)?;
    let raw = matches.is_present("RAW");
    let command: Command = match matches.subcommand() {
        ("search", Some(m)) => search(&client, &config, m, raw)?,
        ("details", Some(m)) => {
            let place_id = m.value_of("PLACE_ID").unwrap_or_default();
            details(&client, PlaceDetails::new(place_id), raw)
        }
        ("distance", Some(m)) => {
            let from = m.value_of("FROM").unwrap_or_default();
            let to = m.value_of("TO").unwrap_or_default();
            let distance = client.distance(from, to)
                .map(|d| format!("{}\n", DistanceReport(&d)));
            Box::new(distance)
        }
        _ => return Ok(()),
    };
    let outcome = Arc::new(Mutex::new(None));
    hyper::rt::run({
        let outcome = outcome.clone();
        command.then(move |r| {
            if let Ok(mut outcome) = outcome.lock() {
                *outcome = Some(r);
            }
            Ok::<(), ()>(())
        })
    });
    let outcome = outcome.lock().ok().and_then(|mut outcome| outcome.take());
    match outcome {
        Some(Ok(text)) => {
            print!("{}", text);
            Ok(())
        }
        Some(Err(e)) => {
            if raw {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
            }
            Err(AppError::PlacesError(e))
        }
        None => Err(AppError::Incomplete),
    }
}

fn search(client: &Client, config: &Config, m: &ArgMatches, raw: bool)
    -> Result<Command, AppError>
{
    let mut search = TextSearch::new(m.value_of("QUERY").unwrap_or_default());
    if let Some(location) = m.value_of("LOCATION") {
        search = search.location(location.parse()
            .map_err(AppError::BadLocation)?);
    }
    if let Some(radius) = m.value_of("RADIUS") {
        search = search.radius(radius.parse().map_err(AppError::BadRadius)?);
    }
    let search = config.apply_defaults(search);
    let places = client.fetch_json(&search)
        .and_then(move |body| {
            if raw {
                print_json(&body);
            }
            search.parse(body)
        })
        .map(|places| SearchReport(&places).to_string());
    Ok(Box::new(places))
}

fn details(client: &Client, details: PlaceDetails, raw: bool) -> Command {
    let report = client.fetch_json(&details)
        .and_then(move |body| {
            if raw {
                print_json(&body);
            }
            details.parse(body)
        })
        .map(|details| DetailsReport(&details).to_string());
    Box::new(report)
}

fn print_json(body: &serde_json::Value) {
    if let Ok(text) = serde_json::to_string_pretty(body) {
        println!("{}", text);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {"places=debug"} else {"places=info"};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let code = if let Err(e) = run() {
        print_error(e);
        1
    } else {
        0
    };
    std::process::exit(code)
}

fn print_error(e: AppError) {
    eprintln!("Error: {}", e);
    let mut e: &dyn Error = &e;
    while let Some(cause) = e.source() {
        eprintln!("Because: {}", cause);
        e = cause;
    }
}

#[derive(Debug)]
enum AppError {
    BadConfigFile(serde_json::Error),
    BadLocation(places::Error),
    BadRadius(ParseIntError),
    FailedToOpenConfigFile(io::Error),
    Incomplete,
    MissingKey,
    PlacesError(places::Error),
}

impl Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::BadConfigFile(_) => f.write_str("Bad configuration file"),
            AppError::BadLocation(_) => f.write_str("Bad location"),
            AppError::BadRadius(_) => f.write_str("Bad radius"),
            AppError::FailedToOpenConfigFile(_) =>
                f.write_str("Failed to open configuration file"),
            AppError::Incomplete => f.write_str("Request did not complete"),
            AppError::MissingKey => write!(f, "Missing API key (use --key, \
                ${} or the configuration file)", Config::KEY_VAR),
            AppError::PlacesError(_) => f.write_str("Places error"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::BadConfigFile(e) => Some(e),
            AppError::BadLocation(e) => Some(e),
            AppError::BadRadius(e) => Some(e),
            AppError::FailedToOpenConfigFile(e) => Some(e),
            AppError::Incomplete => None,
            AppError::MissingKey => None,
            AppError::PlacesError(e) => Some(e),
        }
    }
}
