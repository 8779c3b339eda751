// Copyright 2026 The cdfplot Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ingest::Format;

use serde_derive::*;

use std::io::Read;

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    plot: Plot,
    #[serde(default)]
    series: Vec<SeriesEntry>,
}

impl ConfigFile {
    pub fn plot(&self) -> Plot {
        self.plot.clone()
    }

    pub fn series(&self) -> Vec<SeriesEntry> {
        self.series.clone()
    }

    pub fn load_from_file(filename: &str) -> Self {
        let mut file = std::fs::File::open(filename).expect("failed to open config file");
        let mut content = String::new();
        file.read_to_string(&mut content).expect("failed to read");
        let toml = toml::from_str(&content);
        match toml {
            Ok(toml) => toml,
            Err(e) => {
                println!("Failed to parse TOML config: {}", filename);
                println!("{}", e);
                std::process::exit(1);
            }
        }
    }
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

#[derive(Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Plot {
    output: Option<String>,
    title: Option<String>,
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
}

impl Default for Plot {
    fn default() -> Self {
        Self {
            output: None,
            title: None,
            width: 1280,
            height: 720,
        }
    }
}

impl Plot {
    pub fn output(&self) -> Option<String> {
        self.output.clone()
    }

    pub fn title(&self) -> Option<String> {
        self.title.clone()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[derive(Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct SeriesEntry {
    path: String,
    label: Option<String>,
    format: Option<Format>,
}

impl SeriesEntry {
    pub fn path(&self) -> String {
        self.path.clone()
    }

    pub fn label(&self) -> Option<String> {
        self.label.clone()
    }

    pub fn format(&self) -> Option<Format> {
        self.format
    }
}
