/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Main executable for madelung-rs

use clap::Parser;
use madelung_rs::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    log::info!("madelung-rs v{}", madelung_rs::VERSION);
    cli::run(&cli)
}
