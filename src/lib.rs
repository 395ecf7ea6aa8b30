// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Decoder library for SPLICE drum machine pattern files.
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

/*!
 * # `splice` Crate
 *
 * A library for decoding SPLICE drum machine pattern files.
 *
 * The pipeline has three stages:
 *
 * 1. [decoder]: Validates the file header and extracts the payload.
 * 2. [parser]: Converts the payload into a [Pattern](parser::Pattern).
 * 3. [render]: Formats a pattern as human-readable text.
 *
 * ## Usage Example
 *
 * ```no_run
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let pattern = splice::decode_file("pattern_1.splice")?;
 *
 *     print!("{}", splice::render::render(&pattern));
 *
 *     Ok(())
 * }
 * ```
 */

use std::path::Path;

pub mod decoder;
pub mod error;
pub mod parser;
pub mod reader;
pub mod render;

pub use error::{Result, SpliceError};
pub use parser::{Pattern, Track};

/// Decodes a complete SPLICE file image.
pub fn decode(data: &[u8]) -> Result<Pattern> {
    let decoded = decoder::DecodedSpliceFile::from_bytes(data)?;
    Pattern::from_decoded(&decoded)
}

/// Reads and decodes the SPLICE file at `path`.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Pattern> {
    let decoded = decoder::DecodedSpliceFile::from_filename(path)?;
    Pattern::from_decoded(&decoded)
}
