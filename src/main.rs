// Copyright 2026 The cdfplot Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate log;
#[macro_use]
extern crate cdfplot;

use cdfplot::{Config, Logger, NAME, VERSION};

pub fn main() {
    let config = Config::new();

    Logger::new()
        .label(NAME)
        .level(config.logging())
        .init()
        .expect("Failed to initialize logger");

    info!("{} {} initializing...", NAME, VERSION);

    config.print();

    if let Err(e) = cdfplot::run(&config) {
        fatal!("{}", e);
    }
}
