//! Top-down world of axis-aligned rectangles, rendered by the ray marcher

mod loader;
mod marcher;

pub use loader::{import_world, parse_world};
pub use marcher::{MarchConfig, RayHit, RayMarcher};

use std::collections::BTreeMap;

use crate::color::PaletteIndex;
use crate::geometry::Point;

pub type ObjectId = u64;

/// Solid rectangle footprint in the top-down view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectWolf {
    /// Key of this object in its world; resolve with [`WorldWolf::get`]
    pub id: ObjectId,
    pub start: Point,
    pub end: Point,
    pub color: PaletteIndex,
}

impl RectWolf {
    pub fn new(id: ObjectId, start: Point, end: Point, color: PaletteIndex) -> Self {
        Self {
            id,
            start,
            end,
            color,
        }
    }

    /// Inclusive on both corners
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.start.x && p.y >= self.start.y && p.x <= self.end.x && p.y <= self.end.y
    }
}

/// All objects in a world, keyed by id.
///
/// Iteration runs in ascending id order, which is also how overlapping
/// objects are ranked: the lowest id wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorldWolf {
    objects: BTreeMap<ObjectId, RectWolf>,
}

impl WorldWolf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, replacing any previous object with the same id
    pub fn insert(&mut self, rect: RectWolf) -> Option<RectWolf> {
        self.objects.insert(rect.id, rect)
    }

    pub fn get(&self, id: ObjectId) -> Option<&RectWolf> {
        self.objects.get(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RectWolf> {
        self.objects.values()
    }

    /// Ids of every object containing `p`, lowest first
    pub fn hits_at(&self, p: Point) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .values()
            .filter(move |rect| rect.contains(p))
            .map(|rect| rect.id)
    }

    /// The object drawn at `p`, if any
    pub fn first_hit(&self, p: Point) -> Option<&RectWolf> {
        self.objects.values().find(|rect| rect.contains(p))
    }
}

impl FromIterator<RectWolf> for WorldWolf {
    fn from_iter<I: IntoIterator<Item = RectWolf>>(iter: I) -> Self {
        let mut world = Self::new();
        for rect in iter {
            world.insert(rect);
        }
        world
    }
}
