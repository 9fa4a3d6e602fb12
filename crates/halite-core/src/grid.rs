#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Direction, GridError, Location, PlayerId, Site};

/// Read-only access to a toroidal grid snapshot.
///
/// Implementors only need to provide the dimensions and site lookup; the
/// geometry queries have wrap-around defaults. Coordinates outside the grid are
/// resolved modulo the dimensions.
pub trait GridView {
    fn width(&self) -> u16;

    fn height(&self) -> u16;

    fn site(&self, loc: Location) -> Site;

    fn neighbor(&self, loc: Location, dir: Direction) -> Location {
        let (w, h) = (self.width(), self.height());
        let x = loc.x % w;
        let y = loc.y % h;
        match dir {
            Direction::Still => Location::new(x, y),
            Direction::North => Location::new(x, if y == 0 { h - 1 } else { y - 1 }),
            Direction::East => Location::new(if x + 1 == w { 0 } else { x + 1 }, y),
            Direction::South => Location::new(x, if y + 1 == h { 0 } else { y + 1 }),
            Direction::West => Location::new(if x == 0 { w - 1 } else { x - 1 }, y),
        }
    }

    fn site_toward(&self, loc: Location, dir: Direction) -> Site {
        self.site(self.neighbor(loc, dir))
    }

    /// Wrapped Manhattan distance.
    fn distance(&self, a: Location, b: Location) -> f32 {
        let (w, h) = (i32::from(self.width()), i32::from(self.height()));
        let mut dx = (i32::from(a.x) - i32::from(b.x)).abs();
        let mut dy = (i32::from(a.y) - i32::from(b.y)).abs();
        if dx > w / 2 {
            dx = w - dx;
        }
        if dy > h / 2 {
            dy = h - dy;
        }
        (dx + dy) as f32
    }

    /// Bearing from `a` to `b` in radians, `atan2(dy, dx)` over the shortest
    /// wrapped deltas. `y` grows southward.
    fn angle(&self, a: Location, b: Location) -> f32 {
        let (w, h) = (i32::from(self.width()), i32::from(self.height()));
        let dx = shortest_delta(i32::from(b.x) - i32::from(a.x), w);
        let dy = shortest_delta(i32::from(b.y) - i32::from(a.y), h);
        (dy as f32).atan2(dx as f32)
    }
}

fn shortest_delta(mut d: i32, span: i32) -> i32 {
    if d > span - d {
        d -= span;
    } else if -d > span + d {
        d += span;
    }
    d
}

/// All locations of a `width x height` grid in row-major order.
pub fn scan_order(width: u16, height: u16) -> impl Iterator<Item = Location> {
    (0..height).flat_map(move |y| (0..width).map(move |x| Location::new(x, y)))
}

/// Row-major site storage; the grid service the planner reads each turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "MapSnapshot", into = "MapSnapshot")
)]
pub struct GameMap {
    width: u16,
    height: u16,
    sites: Vec<Site>,
}

impl GameMap {
    pub fn new(width: u16, height: u16) -> Result<Self, GridError> {
        Self::filled(width, height, Site::default())
    }

    pub fn filled(width: u16, height: u16, site: Site) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }
        Ok(Self {
            width,
            height,
            sites: vec![site; usize::from(width) * usize::from(height)],
        })
    }

    pub fn from_sites(width: u16, height: u16, sites: Vec<Site>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }
        let expected = usize::from(width) * usize::from(height);
        if sites.len() != expected {
            return Err(GridError::SiteCount {
                expected,
                actual: sites.len(),
            });
        }
        Ok(Self {
            width,
            height,
            sites,
        })
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Row-major mutable view, used by frame decoders.
    pub fn sites_mut(&mut self) -> &mut [Site] {
        &mut self.sites
    }

    pub fn site_mut(&mut self, loc: Location) -> &mut Site {
        let idx = self.idx(loc);
        &mut self.sites[idx]
    }

    pub fn set_site(&mut self, loc: Location, site: Site) {
        *self.site_mut(loc) = site;
    }

    pub fn locations(&self) -> impl Iterator<Item = Location> {
        scan_order(self.width, self.height)
    }

    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = Location> + '_ {
        self.locations()
            .filter(move |&loc| self.site(loc).is_owned_by(player))
    }

    fn idx(&self, loc: Location) -> usize {
        let x = usize::from(loc.x % self.width);
        let y = usize::from(loc.y % self.height);
        y * usize::from(self.width) + x
    }
}

impl GridView for GameMap {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn site(&self, loc: Location) -> Site {
        self.sites[self.idx(loc)]
    }
}

/// Serialized form of a [`GameMap`]; validated on the way in.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapSnapshot {
    width: u16,
    height: u16,
    sites: Vec<Site>,
}

#[cfg(feature = "serde")]
impl TryFrom<MapSnapshot> for GameMap {
    type Error = GridError;

    fn try_from(value: MapSnapshot) -> Result<Self, Self::Error> {
        GameMap::from_sites(value.width, value.height, value.sites)
    }
}

#[cfg(feature = "serde")]
impl From<GameMap> for MapSnapshot {
    fn from(value: GameMap) -> Self {
        Self {
            width: value.width,
            height: value.height,
            sites: value.sites,
        }
    }
}
