// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gatewire-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gatewire and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gatewire CLI entrypoint.
//!
//! Reads a board from JSON, routes it and prints the wires as JSON. `--text`, `--svg` and
//! `--lengths` switch to the other outputs.

use std::error::Error;
use std::path::PathBuf;

use gatewire::render::{length_labels, render_wires_unicode, to_svg};
use gatewire::{Board, GatewireConfig, Layouter, LineDrawer};

/// Level units per character cell in `--text` output.
const TEXT_CELL: i32 = 25;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <board.json> [--config <file.toml>] [--svg <out.svg>] [--text] [--power] [--lengths]\n\nRoutes every connection of the board and prints the wires as JSON.\n--text prints a Unicode preview instead, --lengths prints one length label per wire.\n--svg additionally writes the drawing; --power colors wires by their origin's output.\nSet RUST_LOG=debug for routing details."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    board: Option<PathBuf>,
    config: Option<PathBuf>,
    svg: Option<PathBuf>,
    text: bool,
    power: bool,
    lengths: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?.into());
            }
            "--svg" => {
                if options.svg.is_some() {
                    return Err(());
                }
                options.svg = Some(args.next().ok_or(())?.into());
            }
            "--text" => {
                if options.text {
                    return Err(());
                }
                options.text = true;
            }
            "--power" => {
                if options.power {
                    return Err(());
                }
                options.power = true;
            }
            "--lengths" => {
                if options.lengths {
                    return Err(());
                }
                options.lengths = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.board.is_some() {
                    return Err(());
                }
                options.board = Some(arg.into());
            }
        }
    }

    if options.board.is_none() || (options.text && options.lengths) {
        return Err(());
    }

    Ok(options)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "gatewire".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };
        let Some(board_path) = options.board else {
            print_usage(&program);
            std::process::exit(2);
        };

        let config = options
            .config
            .as_deref()
            .map(GatewireConfig::load_from_file)
            .unwrap_or_default();
        let board: Board = serde_json::from_str(&std::fs::read_to_string(&board_path)?)?;
        log::info!("loaded {} elements from {}", board.len(), board_path.display());

        let wires = match Layouter::new(config.router).route(&board) {
            Ok(wires) => wires,
            Err(err) => {
                match err.element() {
                    Some(element) => eprintln!("routing failed at element {element}: {err}"),
                    None => eprintln!("routing failed: {err}"),
                }
                std::process::exit(1);
            }
        };

        if let Some(svg_path) = &options.svg {
            let commands = LineDrawer::new(config.render).draw(&board, &wires, options.power);
            std::fs::write(svg_path, to_svg(&commands))?;
            log::info!("wrote {}", svg_path.display());
        }

        if options.text {
            println!("{}", render_wires_unicode(&board, &wires, TEXT_CELL)?);
        } else if options.lengths {
            for label in length_labels(&wires) {
                println!("{} {} {}", label.origin, label.anchor, label.text);
            }
        } else {
            println!("{}", serde_json::to_string_pretty(&wires)?);
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
