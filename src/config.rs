// Vortarkivo – A themed word search game
// Copyright (C) 2025  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::time::Duration;
use rand::SeedableRng;
use rand::rngs::StdRng;
use super::grid;
use super::message;

// Number of times to try generating a grid before giving up
pub const DEFAULT_PLACEMENT_ATTEMPTS: u32 = 8;

#[derive(Debug, Clone)]
pub struct Config {
    pub grid_size: usize,
    pub message_timeout: Duration,
    pub placement_attempts: u32,
    // Fixed seed to make the generated grids reproducible
    pub seed: Option<u64>,
}

impl Config {
    pub fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            grid_size: grid::DEFAULT_SIZE,
            message_timeout: message::DEFAULT_TIMEOUT,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            seed: None,
        }
    }
}
