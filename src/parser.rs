// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/parser.rs - Parser library for SPLICE pattern files.
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
 * # `parser` Module
 *
 * This module parses the payload of a decoded SPLICE file into a
 * [Pattern].
 *
 * Payload layout:
 *
 * ```text
 * offset  size  field
 *      0    11  hardware version, zero padded
 *     11     7  reserved
 *     18     4  tempo, f32 little-endian
 *     22     *  track records
 * ```
 *
 * Each track record is a 1-byte id followed by 3 reserved bytes, a 1-byte
 * name length `n`, `n` bytes of name and 16 step bytes.
 *
 * ## Usage Example
 *
 * ```no_run
 * use splice::decoder::DecodedSpliceFile;
 * use splice::parser::Pattern;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let decoded = DecodedSpliceFile::from_filename("pattern_1.splice")?;
 *     let pattern = Pattern::from_decoded(&decoded)?;
 *
 *     for track in &pattern.tracks {
 *         println!("{}: {:?}", track.name, track.active_steps().collect::<Vec<_>>());
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

use tracing::{debug, trace};

use crate::decoder::DecodedSpliceFile;
use crate::error::Result;
use crate::reader::ByteReader;

/// Number of steps in every track.
pub const STEPS_PER_TRACK: usize = 16;

const HW_VERSION_LEN: usize = 11;
const HEADER_RESERVED_LEN: usize = 7;
const TRACK_ID_RESERVED_LEN: usize = 3;

/// One instrument voice of a pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// The track id. Not necessarily unique or sorted.
    pub id: u8,
    /// The instrument name.
    pub name: String,
    /// Raw step values; exactly `1` means the step is active.
    pub steps: [u8; STEPS_PER_TRACK],
}

impl Track {
    /// Parses a single track record, consuming exactly its bytes.
    pub fn from_reader(reader: &mut ByteReader) -> Result<Self> {
        let id = reader.read_u8()?;
        reader.skip(TRACK_ID_RESERVED_LEN)?;

        let name_len = usize::from(reader.read_u8()?);
        let name = String::from_utf8_lossy(reader.read_bytes(name_len)?).to_string();

        let steps = reader.read_array::<STEPS_PER_TRACK>()?;

        Ok(Self { id, name, steps })
    }

    /// Whether `step` is active. Steps outside the track are inactive.
    pub fn is_active(&self, step: usize) -> bool {
        self.steps.get(step).is_some_and(|&s| s == 1)
    }

    /// Indices of the active steps, in order.
    pub fn active_steps(&self) -> impl Iterator<Item = usize> + '_ {
        (0..STEPS_PER_TRACK).filter(|&step| self.is_active(step))
    }
}

/// A decoded drum pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// The hardware version the pattern was saved with.
    pub hardware_version: String,
    /// Tempo in beats per minute.
    pub tempo: f32,
    /// Tracks in file order.
    pub tracks: Vec<Track>,
}

impl Pattern {
    /// Parses a pattern from a decoded SPLICE file.
    pub fn from_decoded(decoded: &DecodedSpliceFile) -> Result<Self> {
        Self::from_payload(decoded.payload.as_slice())
    }

    /// Parses a pattern from the payload bytes.
    ///
    /// Every byte of the payload belongs either to the header or to a track
    /// record; a record that runs past the end fails with
    /// [SpliceError::Truncated](crate::error::SpliceError::Truncated).
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(payload);

        let version = reader.read_bytes(HW_VERSION_LEN)?;
        let hardware_version = String::from_utf8_lossy(trim_zero_padding(version)).to_string();
        reader.skip(HEADER_RESERVED_LEN)?;
        let tempo = reader.read_f32_le()?;

        debug!(%hardware_version, tempo, "Pattern header");

        let mut tracks = Vec::new();
        while !reader.is_empty() {
            let offset = reader.position();
            let track = Track::from_reader(&mut reader)?;
            trace!(offset, id = track.id, name = %track.name, "Track");
            tracks.push(track);
        }

        debug!("Decoded {} tracks", tracks.len());

        Ok(Self {
            hardware_version,
            tempo,
            tracks,
        })
    }

    /// Returns the first track with the given id.
    pub fn track(&self, id: u8) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }
}

fn trim_zero_padding(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}

/// Builds a complete SPLICE file image for tests.
#[cfg(test)]
pub(crate) fn encode(
    hardware_version: &str,
    tempo: f32,
    tracks: &[(u8, &str, [u8; STEPS_PER_TRACK])],
) -> Vec<u8> {
    let mut payload = Vec::new();

    let mut version = [0u8; HW_VERSION_LEN];
    version[..hardware_version.len()].copy_from_slice(hardware_version.as_bytes());
    payload.extend(version);
    payload.extend([0u8; HEADER_RESERVED_LEN]);
    payload.extend(tempo.to_le_bytes());

    for (id, name, steps) in tracks {
        payload.push(*id);
        payload.extend([0u8; TRACK_ID_RESERVED_LEN]);
        payload.push(name.len().try_into().unwrap());
        payload.extend(name.as_bytes());
        payload.extend(steps);
    }

    let mut data = crate::decoder::FILE_TAG.to_vec();
    data.extend([0u8; 7]);
    data.push(payload.len().try_into().unwrap());
    data.extend(payload);
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpliceError;

    const FOUR_ON_FLOOR: [u8; 16] = [1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0];

    fn parse(data: &[u8]) -> Result<Pattern> {
        Pattern::from_decoded(&DecodedSpliceFile::from_bytes(data)?)
    }

    #[test]
    fn test_header_fields() {
        let pattern = parse(&encode("0.808-alpha", 98.4, &[])).unwrap();
        assert_eq!(pattern.hardware_version, "0.808-alpha");
        assert_eq!(pattern.tempo, 98.4);
        assert!(pattern.tracks.is_empty());
    }

    #[test]
    fn test_hardware_version_trims_only_zeros() {
        let pattern = parse(&encode("0.909", 240.0, &[])).unwrap();
        assert_eq!(pattern.hardware_version, "0.909");

        let pattern = parse(&encode("v 1 ", 240.0, &[])).unwrap();
        assert_eq!(pattern.hardware_version, "v 1 ");
    }

    #[test]
    fn test_single_track() {
        let pattern = parse(&encode("0.808-alpha", 120.0, &[(0, "kick", FOUR_ON_FLOOR)])).unwrap();
        assert_eq!(
            pattern.tracks,
            vec![Track {
                id: 0,
                name: "kick".to_string(),
                steps: FOUR_ON_FLOOR,
            }]
        );
    }

    #[test]
    fn test_track_order_preserved() {
        let ids = [40, 1, 3, 5, 12, 9];
        let tracks: Vec<_> = ids.iter().map(|&id| (id, "t", [0u8; 16])).collect();
        let pattern = parse(&encode("0.808-alpha", 118.0, &tracks)).unwrap();
        let decoded_ids: Vec<u8> = pattern.tracks.iter().map(|t| t.id).collect();
        assert_eq!(decoded_ids, ids);
    }

    #[test]
    fn test_reserved_id_bytes_are_ignored() {
        let mut data = encode("0.909", 240.0, &[(255, "Low Conga", [0; 16])]);
        // Reserved bytes after the id in the only track record.
        data[37..40].copy_from_slice(&[0xDE, 0xAD, 0xBE]);
        let pattern = parse(&data).unwrap();
        assert_eq!(pattern.tracks[0].id, 255);
        assert_eq!(pattern.tracks[0].name, "Low Conga");
    }

    #[test]
    fn test_empty_name() {
        let pattern = parse(&encode("0.909", 240.0, &[(7, "", FOUR_ON_FLOOR)])).unwrap();
        assert_eq!(pattern.tracks[0].name, "");
        assert_eq!(pattern.tracks[0].steps, FOUR_ON_FLOOR);
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut data = encode("0.808-alpha", 120.0, &[(0, "kick", FOUR_ON_FLOOR)]);
        data.extend(b"garbage after the payload");
        let pattern = parse(&data).unwrap();
        assert_eq!(pattern.tracks.len(), 1);
    }

    #[test]
    fn test_truncated_track_record() {
        let mut data = encode("0.808-alpha", 120.0, &[(0, "kick", FOUR_ON_FLOOR)]);
        // Drop the last step byte from both the file and the declared count.
        data.pop();
        data[13] -= 1;
        match parse(&data) {
            Err(SpliceError::Truncated {
                offset,
                needed,
                available,
            }) => {
                assert_eq!(offset, 31);
                assert_eq!(needed, 16);
                assert_eq!(available, 15);
            }
            other => panic!("expected Truncated, got {:?}", other),
        }
    }

    #[test]
    fn test_name_length_past_payload() {
        let mut data = encode("0.808-alpha", 120.0, &[(0, "kick", FOUR_ON_FLOOR)]);
        data[40] = 200;
        assert!(matches!(parse(&data), Err(SpliceError::Truncated { .. })));
    }

    #[test]
    fn test_dangling_track_id() {
        let mut data = encode("0.808-alpha", 120.0, &[]);
        data.push(3);
        data[13] += 1;
        assert!(matches!(
            parse(&data),
            Err(SpliceError::Truncated { offset: 23, .. })
        ));
    }

    #[test]
    fn test_payload_too_short_for_tempo() {
        let data = encode("0.808-alpha", 120.0, &[]);
        let short = &data[14..14 + 20];
        assert!(matches!(
            Pattern::from_payload(short),
            Err(SpliceError::Truncated {
                offset: 18,
                needed: 4,
                available: 2
            })
        ));
        assert!(matches!(
            Pattern::from_payload(&[]),
            Err(SpliceError::Truncated { offset: 0, .. })
        ));
    }

    #[test]
    fn test_is_active() {
        let mut steps = [0u8; 16];
        steps[0] = 1;
        steps[1] = 2;
        steps[15] = 1;
        let track = Track {
            id: 1,
            name: "snare".to_string(),
            steps,
        };
        assert!(track.is_active(0));
        assert!(!track.is_active(1));
        assert!(track.is_active(15));
        assert!(!track.is_active(16));
        assert_eq!(track.active_steps().collect::<Vec<_>>(), vec![0, 15]);
    }

    #[test]
    fn test_lookup_by_id_returns_first() {
        let pattern = parse(&encode(
            "0.808-alpha",
            120.0,
            &[(1, "clap", [0; 16]), (1, "snare", [0; 16])],
        ))
        .unwrap();
        assert_eq!(pattern.track(1).map(|t| t.name.as_str()), Some("clap"));
        assert!(pattern.track(2).is_none());
    }

    #[test]
    fn test_trim_zero_padding() {
        assert_eq!(trim_zero_padding(b"abc\0\0"), b"abc");
        assert_eq!(trim_zero_padding(b"\0\0"), b"");
        assert_eq!(trim_zero_padding(b"a\0b"), b"a\0b");
    }
}
