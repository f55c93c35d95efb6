//! Start and end cave selection under the minimum separation rule.

use super::content::place_monsters;
use crate::dungeon::Dungeon;
use crate::error::GenerationError;
use crate::rng::RandomSource;
use crate::types::LocationId;

/// Every path between start and end must visit at least this many locations.
pub const MIN_PATH_LOCATIONS: usize = 5;
/// Random pair draws attempted before falling back to an exhaustive scan.
pub const MAX_ENDPOINT_DRAWS: usize = 256;

impl Dungeon {
    pub fn is_viable_endpoint_pair(&self, start: LocationId, end: LocationId) -> bool {
        start != end
            && self.location(start).is_cave()
            && self.location(end).is_cave()
            && !self.has_path_shorter_than(start, end, MIN_PATH_LOCATIONS)
    }

    /// Picks two distinct caves no short path joins, commits them and seats the monsters.
    /// Once endpoints are set, further calls return them unchanged.
    ///
    /// Random pairs are tried first; if none qualifies within [`MAX_ENDPOINT_DRAWS`] the
    /// ordered pairs are scanned in id order, and only when that also fails is the dungeon
    /// reported as unusable. Nothing is committed on failure.
    pub fn assign_start_and_end(
        &mut self,
        rng: &mut dyn RandomSource,
    ) -> Result<(LocationId, LocationId), GenerationError> {
        if let (Some(start), Some(end)) = (self.start(), self.end()) {
            return Ok((start, end));
        }

        let (start, end) = self.find_endpoints(rng)?;
        place_monsters(self, start, end, rng)?;
        self.set_endpoints(start, end);
        Ok((start, end))
    }

    fn find_endpoints(
        &self,
        rng: &mut dyn RandomSource,
    ) -> Result<(LocationId, LocationId), GenerationError> {
        let caves = self.caves();
        if caves.len() < 2 {
            return Err(GenerationError::NoViableEndpoints);
        }

        for _ in 0..MAX_ENDPOINT_DRAWS {
            if let [first, second] = rng.unique_sample(2, 0, caves.len())[..] {
                let (start, end) = (caves[first], caves[second]);
                if self.is_viable_endpoint_pair(start, end) {
                    return Ok((start, end));
                }
            }
        }

        caves
            .iter()
            .flat_map(|&start| caves.iter().map(move |&end| (start, end)))
            .find(|&(start, end)| self.is_viable_endpoint_pair(start, end))
            .ok_or(GenerationError::NoViableEndpoints)
    }
}
