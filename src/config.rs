// Copyright 2026 The cdfplot Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config_file::ConfigFile;
use crate::ingest::Format;
use crate::logger::Level;

use clap::{App, Arg, ArgMatches};

use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// One input file together with its resolved label and optional format
/// override.
#[derive(Clone, Debug)]
pub struct SeriesInput {
    path: PathBuf,
    label: String,
    format: Option<Format>,
}

impl SeriesInput {
    fn new(path: PathBuf, label: Option<String>, format: Option<Format>) -> Self {
        let label = label.unwrap_or_else(|| default_label(&path));
        Self {
            path,
            label,
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn format(&self) -> Option<Format> {
        self.format
    }
}

// label fallback when none is given: the file name without its extension
fn default_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}

#[derive(Clone, Debug)]
pub struct Config {
    inputs: Vec<SeriesInput>,
    output: Option<String>,
    title: Option<String>,
    width: u32,
    height: u32,
    seed: u64,
    logging: Level,
}

impl Config {
    /// parse command line options and return `Config`
    pub fn new() -> Config {
        let matches = App::new(NAME)
            .version(VERSION)
            .about("Latency CDF Plotting")
            .arg(
                Arg::with_name("input")
                    .value_name("FILE")
                    .help("Latency results to plot. Repeat for a comparison chart")
                    .multiple(true)
                    .index(1),
            )
            .arg(
                Arg::with_name("config")
                    .long("config")
                    .value_name("FILE")
                    .help("TOML config file")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("label")
                    .long("label")
                    .value_name("NAME")
                    .help("Label for the matching input file. Repeat once per input")
                    .multiple(true)
                    .number_of_values(1)
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("format")
                    .long("format")
                    .value_name("NAME")
                    .help("Skip detection and parse every input as this format")
                    .possible_value("csv")
                    .possible_value("json")
                    .possible_value("summary")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("output")
                    .long("output")
                    .value_name("FILE")
                    .help("Where to write the PNG")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("title")
                    .long("title")
                    .value_name("TEXT")
                    .help("Chart title")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("width")
                    .long("width")
                    .value_name("PIXELS")
                    .help("Chart width in pixels")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("height")
                    .long("height")
                    .value_name("PIXELS")
                    .help("Chart height in pixels")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("seed")
                    .long("seed")
                    .value_name("INTEGER")
                    .help("Seed for samples synthesized from percentile summaries")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("verbose")
                    .short("v")
                    .long("verbose")
                    .help("Increase verbosity by one level. Can be used more than once")
                    .multiple(true),
            )
            .get_matches();

        let config_file = if let Some(file) = matches.value_of("config") {
            ConfigFile::load_from_file(file)
        } else {
            Default::default()
        };
        let plot = config_file.plot();

        let format = matches.value_of("format").map(|name| match name {
            "csv" => Format::Table,
            "json" => Format::Stream,
            "summary" => Format::Summary,
            _ => {
                println!("ERROR: unknown format: {}", name);
                process::exit(1);
            }
        });

        let inputs: Vec<SeriesInput> = if matches.is_present("input") {
            let labels: Vec<&str> = matches
                .values_of("label")
                .map(|values| values.collect())
                .unwrap_or_default();
            let files: Vec<&str> = matches.values_of("input").unwrap().collect();
            if labels.len() > files.len() {
                println!("ERROR: more labels than input files");
                process::exit(1);
            }
            files
                .iter()
                .enumerate()
                .map(|(i, file)| {
                    SeriesInput::new(
                        PathBuf::from(file),
                        labels.get(i).map(|label| label.to_string()),
                        format,
                    )
                })
                .collect()
        } else {
            config_file
                .series()
                .into_iter()
                .map(|entry| {
                    SeriesInput::new(
                        PathBuf::from(entry.path()),
                        entry.label(),
                        format.or(entry.format()),
                    )
                })
                .collect()
        };

        if inputs.is_empty() {
            println!("ERROR: no input files specified");
            process::exit(1);
        }

        let output = matches
            .value_of("output")
            .map(|v| v.to_string())
            .or_else(|| plot.output());
        let title = matches
            .value_of("title")
            .map(|v| v.to_string())
            .or_else(|| plot.title());

        let width = parse_numeric_arg(&matches, "width").unwrap_or_else(|| plot.width());
        let height = parse_numeric_arg(&matches, "height").unwrap_or_else(|| plot.height());
        let seed: u64 = parse_numeric_arg(&matches, "seed").unwrap_or(0);

        let logging = match matches.occurrences_of("verbose") {
            0 => Level::Info,
            1 => Level::Debug,
            _ => Level::Trace,
        };

        Config {
            inputs,
            output,
            title,
            width,
            height,
            seed,
            logging,
        }
    }

    pub fn inputs(&self) -> &[SeriesInput] {
        &self.inputs
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// seed for samples synthesized from percentile summaries
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// get logging level
    pub fn logging(&self) -> Level {
        self.logging
    }

    /// the output path, either as configured or derived from the labels
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => PathBuf::from(output),
            None => {
                let labels: Vec<&str> = self.inputs.iter().map(|input| input.label()).collect();
                PathBuf::from(format!("latency_cdf_{}.png", labels.join("_vs_")))
            }
        }
    }

    pub fn print(&self) {
        info!("-----");
        for input in &self.inputs {
            info!(
                "Config: Input: {} Label: {} Format: {}",
                input.path().display(),
                input.label(),
                input
                    .format()
                    .map(|format| format!("{:?}", format))
                    .unwrap_or_else(|| "Auto".to_string()),
            );
        }
        info!(
            "Config: Output: {} Size: {}x{}",
            self.output_path().display(),
            self.width(),
            self.height(),
        );
    }
}

/// a helper function to parse a numeric argument by name from `ArgMatches`
fn parse_numeric_arg<T: FromStr>(matches: &ArgMatches, key: &str) -> Option<T> {
    matches.value_of(key).map(|f| {
        f.parse().unwrap_or_else(|_| {
            println!("ERROR: could not parse {}", key);
            process::exit(1);
        })
    })
}
