// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  parse.rs - Parser demo for SPLICE drum machine pattern files.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use splice::render::render;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print the decoded structure instead of the text rendering.
    #[arg(long)]
    debug: bool,

    /// The files to read.
    #[arg(required = true)]
    files: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut failed = false;
    for file in &args.files {
        let pattern = match splice::decode_file(file) {
            Ok(p) => p,
            Err(error) => {
                eprintln!("Error decoding file {:?}: {}", file, error);
                failed = true;
                continue;
            }
        };

        if args.debug {
            println!("{:#?}", pattern);
        } else {
            print!("{}", render(&pattern));
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
