use crate::entities::{Cutout, GroutSpec, PatternStyle, TileSpec, Wall};
use crate::error::InputError;
use crate::geometry::geo_enums::GeoRelation;
use itertools::Itertools;
use log::warn;

/// A fully validated tiling job: the walls (in drawing order), the tile and grout to use,
/// the row pattern, the cutouts and whether remnants may be reused.
/// Read-only once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub name: String,
    pub walls: Vec<Wall>,
    pub tile: TileSpec,
    pub grout: GroutSpec,
    pub pattern: PatternStyle,
    pub reuse_scraps: bool,
    pub cutouts: Vec<Cutout>,
}

impl Instance {
    /// Cross-validates the components of an instance.
    /// Cutouts referencing a wall which does not exist are rejected, so that no cutout is silently inert.
    pub fn new(
        name: impl Into<String>,
        walls: Vec<Wall>,
        tile: TileSpec,
        grout: GroutSpec,
        pattern: PatternStyle,
        reuse_scraps: bool,
        cutouts: Vec<Cutout>,
    ) -> Result<Self, InputError> {
        if walls.is_empty() {
            return Err(InputError::NoWalls);
        }
        if let Some(dup) = walls.iter().map(|w| &w.label).duplicates().next() {
            return Err(InputError::DuplicateWallLabel(dup.clone()));
        }
        for cutout in &cutouts {
            let Some(wall) = walls.iter().find(|w| w.label == cutout.wall_label) else {
                return Err(InputError::UnknownCutoutWall {
                    cutout: cutout.name.clone(),
                    wall: cutout.wall_label.clone(),
                });
            };
            match wall.rect().relation_to(cutout.rect()) {
                GeoRelation::Surrounding => {}
                GeoRelation::Intersecting => warn!(
                    "[INST] cutout {} extends beyond the edges of {}",
                    cutout.name, wall.label
                ),
                GeoRelation::Enclosed => warn!(
                    "[INST] cutout {} covers all of {}",
                    cutout.name, wall.label
                ),
                GeoRelation::Disjoint => warn!(
                    "[INST] cutout {} lies outside of {}, it will not affect any tile",
                    cutout.name, wall.label
                ),
            }
        }

        Ok(Instance {
            name: name.into(),
            walls,
            tile,
            grout,
            pattern,
            reuse_scraps,
            cutouts,
        })
    }

    pub fn wall(&self, label: &str) -> Option<&Wall> {
        self.walls.iter().find(|w| w.label == label)
    }

    /// All cutouts bound to the wall with `label`
    pub fn cutouts_on<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Cutout> + 'a {
        self.cutouts.iter().filter(move |c| c.wall_label == label)
    }
}
