// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/render.rs - Text rendering of SPLICE drum patterns.
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
 * # `render` Module
 *
 * Renders a [Pattern] as text:
 *
 * ```text
 * Saved with HW Version: 0.808-alpha
 * Tempo: 120
 * (0) kick	|x---|x---|x---|x---|
 * ```
 */

use std::fmt;

use crate::parser::{Pattern, STEPS_PER_TRACK, Track};

const STEPS_PER_GROUP: usize = 4;

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}\t|", self.id, self.name)?;
        for step in 0..STEPS_PER_TRACK {
            let cell = if self.is_active(step) { 'x' } else { '-' };
            write!(f, "{}", cell)?;

            if (step + 1) % STEPS_PER_GROUP == 0 {
                write!(f, "|")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f32's Display is the shortest exact form: 120 not 120.0, 98.4 not 98.40000153.
        writeln!(f, "Saved with HW Version: {}", self.hardware_version)?;
        writeln!(f, "Tempo: {}", self.tempo)?;
        for track in &self.tracks {
            writeln!(f, "{}", track)?;
        }
        Ok(())
    }
}

/// Renders `pattern` in the canonical text form.
pub fn render(pattern: &Pattern) -> String {
    pattern.to_string()
}
