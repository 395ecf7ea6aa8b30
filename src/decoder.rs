// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/decoder.rs - Container validation for SPLICE pattern files.
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
 * # `decoder` Module
 *
 * Checks that a buffer looks like a SPLICE file and cuts out the payload
 * whose length is declared in the file header.
 *
 * ```text
 * offset  size  field
 *      0     6  "SPLICE"
 *      6     7  reserved
 *     13     1  remaining-byte count
 *     14     *  payload (remaining-byte count bytes)
 * ```
 *
 * Anything after the declared payload is ignored.
 */

use std::fs::File;
use std::io::BufReader;
use std::io::prelude::*;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, SpliceError};

/// Tag every SPLICE file starts with.
pub const FILE_TAG: &[u8; 6] = b"SPLICE";

const REMAINING_BYTES_OFFSET: usize = 13;
const PAYLOAD_OFFSET: usize = REMAINING_BYTES_OFFSET + 1;

/// Checks that `data` is plausibly a SPLICE file.
///
/// A non-empty buffer shorter than the tag is reported as
/// [SpliceError::BadFileType], since its prefix can never match.
pub fn validate(data: &[u8]) -> Result<()> {
    if data.is_empty() {
        return Err(SpliceError::EmptyFile);
    }

    if !data.starts_with(FILE_TAG) {
        return Err(SpliceError::BadFileType);
    }

    if data.len() < PAYLOAD_OFFSET {
        return Err(SpliceError::MissingLengthField);
    }

    Ok(())
}

/// A validated SPLICE file, reduced to its declared payload.
#[derive(Debug)]
pub struct DecodedSpliceFile {
    /// Exactly as many bytes as the header's remaining-byte count.
    pub payload: Vec<u8>,
}

impl DecodedSpliceFile {
    /// Reads and validates the file at `filename`.
    ///
    /// I/O failures are returned as [SpliceError::Io], separate from format
    /// errors.
    pub fn from_filename<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let file = File::open(filename.as_ref())?;
        let mut reader = BufReader::new(file);

        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;

        debug!(
            "Read {} bytes from {}",
            buffer.len(),
            filename.as_ref().display()
        );

        Self::from_bytes(&buffer)
    }

    /// Validates `data` and copies out the declared payload.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        validate(data)?;

        let declared = usize::from(data[REMAINING_BYTES_OFFSET]);
        let available = data.len() - PAYLOAD_OFFSET;
        debug!(declared, available, "SPLICE header");

        if available < declared {
            return Err(SpliceError::InvalidByteCount {
                declared,
                available,
            });
        }

        if available > declared {
            warn!(
                "Ignoring {} trailing bytes after the declared payload",
                available - declared
            );
        }

        Ok(Self {
            payload: data[PAYLOAD_OFFSET..PAYLOAD_OFFSET + declared].to_vec(),
        })
    }
}
