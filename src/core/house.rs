//! Seats ("houses") and per-seat data storage.
//!
//! ## House
//!
//! The four seats double as the turn-order ring and as wind context for
//! scoring. East deals every kyoku.
//!
//! ## HouseMap
//!
//! Fixed four-entry storage indexed by `House`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use thiserror::Error;

use super::tile::Tile;

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 4;

/// A seat at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum House {
    East,
    South,
    West,
    North,
}

impl House {
    /// All seats in turn order starting from the dealer.
    pub const ALL: [House; SEAT_COUNT] = [House::East, House::South, House::West, House::North];

    /// Seat index (East = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(House::East),
            1 => Some(House::South),
            2 => Some(House::West),
            3 => Some(House::North),
            _ => None,
        }
    }

    /// Next seat in turn order (the "shimocha").
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            House::East => House::South,
            House::South => House::West,
            House::West => House::North,
            House::North => House::East,
        }
    }

    /// Previous seat in turn order (the "kamicha").
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            House::East => House::North,
            House::South => House::East,
            House::West => House::South,
            House::North => House::West,
        }
    }

    /// The three other seats, in turn order after this one.
    pub fn others(self) -> impl Iterator<Item = House> {
        let first = self.next();
        [first, first.next(), first.next().next()].into_iter()
    }

    /// How many steps after `self` the seat `other` acts (0 for itself).
    #[must_use]
    pub const fn distance_to(self, other: House) -> usize {
        (other.index() + SEAT_COUNT - self.index()) % SEAT_COUNT
    }

    /// The wind tile matching this seat.
    #[must_use]
    pub fn wind_tile(self) -> Tile {
        match self {
            House::East => Tile::EAST,
            House::South => Tile::SOUTH,
            House::West => Tile::WEST,
            House::North => Tile::NORTH,
        }
    }

    #[must_use]
    pub const fn is_dealer(self) -> bool {
        matches!(self, House::East)
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            House::East => "e",
            House::South => "s",
            House::West => "w",
            House::North => "n",
        };
        f.write_str(s)
    }
}

/// Error parsing a seat name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown seat name '{0}'")]
pub struct HouseParseError(pub String);

impl FromStr for House {
    type Err = HouseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "e" => Ok(House::East),
            "s" => Ok(House::South),
            "w" => Ok(House::West),
            "n" => Ok(House::North),
            _ => Err(HouseParseError(s.to_string())),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use mahjong_master::core::{House, HouseMap};
///
/// let mut points: HouseMap<i64> = HouseMap::with_value(25_000);
/// points[House::South] -= 1_000;
/// assert_eq!(points[House::South], 24_000);
/// assert_eq!(points.values().sum::<i64>(), 99_000);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HouseMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> HouseMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl FnMut(House) -> T) -> Self {
        Self {
            data: House::ALL.map(factory),
        }
    }

    /// Create a map with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, house: House) -> &T {
        &self.data[house.index()]
    }

    pub fn get_mut(&mut self, house: House) -> &mut T {
        &mut self.data[house.index()]
    }

    /// Iterate over (House, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (House, &T)> {
        House::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (House, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (House, &mut T)> {
        House::ALL.into_iter().zip(self.data.iter_mut())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// Build a new map by transforming every entry.
    pub fn map<U>(&self, mut f: impl FnMut(House, &T) -> U) -> HouseMap<U> {
        HouseMap {
            data: House::ALL.map(|h| f(h, &self.data[h.index()])),
        }
    }
}

impl<T> Index<House> for HouseMap<T> {
    type Output = T;

    fn index(&self, house: House) -> &Self::Output {
        self.get(house)
    }
}

impl<T> IndexMut<House> for HouseMap<T> {
    fn index_mut(&mut self, house: House) -> &mut Self::Output {
        self.get_mut(house)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_ring() {
        assert_eq!(House::East.next(), House::South);
        assert_eq!(House::North.next(), House::East);
        assert_eq!(House::East.prev(), House::North);
        for house in House::ALL {
            assert_eq!(house.next().prev(), house);
        }
    }

    #[test]
    fn test_others_in_turn_order() {
        let others: Vec<_> = House::West.others().collect();
        assert_eq!(others, vec![House::North, House::East, House::South]);
    }

    #[test]
    fn test_distance() {
        assert_eq!(House::South.distance_to(House::West), 1);
        assert_eq!(House::South.distance_to(House::East), 3);
        assert_eq!(House::North.distance_to(House::North), 0);
    }

    #[test]
    fn test_display_and_parse() {
        for house in House::ALL {
            assert_eq!(house.to_string().parse::<House>().unwrap(), house);
        }
        assert_eq!("x".parse::<House>(), Err(HouseParseError("x".to_string())));
        let err = "haku".parse::<House>().unwrap_err();
        assert_eq!(err.to_string(), "unknown seat name 'haku'");
    }

    #[test]
    fn test_wind_tiles() {
        assert_eq!(House::East.wind_tile(), Tile::EAST);
        assert_eq!(House::North.wind_tile(), Tile::NORTH);
    }

    #[test]
    fn test_house_map_new_and_index() {
        let map: HouseMap<usize> = HouseMap::new(|h| h.index() * 10);
        assert_eq!(map[House::East], 0);
        assert_eq!(map[House::North], 30);
    }

    #[test]
    fn test_house_map_mutation_and_iter() {
        let mut map: HouseMap<i64> = HouseMap::with_value(0);
        map[House::West] = 7;
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[2], (House::West, &7));
        for v in map.values_mut() {
            *v += 1;
        }
        assert_eq!(map.values().sum::<i64>(), 11);
    }

    #[test]
    fn test_house_map_map() {
        let map: HouseMap<i64> = HouseMap::new(|h| h.index() as i64);
        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled[House::North], 6);
    }

    #[test]
    fn test_house_map_serialization() {
        let map: HouseMap<i64> = HouseMap::new(|h| h.index() as i64 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let back: HouseMap<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
