// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/error.rs - Error types for SPLICE pattern decoding.
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

use std::io;

use thiserror::Error;

/// Result type for SPLICE decoding.
pub type Result<T> = std::result::Result<T, SpliceError>;

/// Everything that can go wrong while loading or decoding a SPLICE file.
#[derive(Debug, Error)]
pub enum SpliceError {
    /// The input contains no bytes at all.
    #[error("file is empty")]
    EmptyFile,

    /// The input does not start with the `SPLICE` tag.
    #[error("not a SPLICE file")]
    BadFileType,

    /// The input ends before the remaining-bytes field.
    #[error("missing remaining-bytes field")]
    MissingLengthField,

    /// The remaining-bytes field claims more data than the file holds.
    #[error("declared {declared} remaining bytes, but only {available} are present")]
    InvalidByteCount {
        /// Byte count stored in the header.
        declared: usize,
        /// Bytes actually present after the count field.
        available: usize,
    },

    /// A field runs past the end of the declared payload.
    #[error("payload truncated at offset {offset}: needed {needed} bytes, {available} left")]
    Truncated {
        /// Payload-relative offset of the read.
        offset: usize,
        /// Size of the attempted read.
        needed: usize,
        /// Bytes left in the payload at that offset.
        available: usize,
    },

    /// Failure while reading the file itself.
    #[error(transparent)]
    Io(#[from] io::Error),
}
