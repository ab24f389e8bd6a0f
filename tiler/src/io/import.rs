use crate::entities::{Cutout, GroutSpec, Instance, TileSpec, Wall};
use crate::error::InputError;
use crate::io::dimension::parse_length;
use crate::io::ext_repr::{ExtCutout, ExtInstance, ExtLength, ExtWall};
use log::debug;

/// Converts external representations of instances into validated internal ones.
#[derive(Clone, Debug, Copy, Default)]
pub struct Importer {
    /// Overrides the `reuse_scraps` flag of imported instances, if set
    pub reuse_scraps: Option<bool>,
}

impl Importer {
    pub fn new(reuse_scraps: Option<bool>) -> Importer {
        Importer { reuse_scraps }
    }

    pub fn import_instance(&self, ext_instance: &ExtInstance) -> Result<Instance, InputError> {
        let tile = TileSpec::new(
            import_length(&ext_instance.tile.width)?,
            import_length(&ext_instance.tile.height)?,
        )?;
        let grout = GroutSpec::new(
            import_length(&ext_instance.grout.horizontal)?,
            import_length(&ext_instance.grout.vertical)?,
        )?;
        let walls = ext_instance
            .walls
            .iter()
            .map(import_wall)
            .collect::<Result<Vec<_>, _>>()?;
        let cutouts = ext_instance
            .cutouts
            .iter()
            .map(import_cutout)
            .collect::<Result<Vec<_>, _>>()?;
        let reuse_scraps = self.reuse_scraps.unwrap_or(ext_instance.reuse_scraps);

        debug!(
            "[IMPORT] {}: {} wall(s), {} cutout(s), tile {}x{}, {:?}, reuse scraps: {}",
            ext_instance.name,
            walls.len(),
            cutouts.len(),
            tile.width,
            tile.height,
            ext_instance.pattern,
            reuse_scraps
        );

        Instance::new(
            ext_instance.name.clone(),
            walls,
            tile,
            grout,
            ext_instance.pattern,
            reuse_scraps,
            cutouts,
        )
    }
}

pub fn import_length(length: &ExtLength) -> Result<f32, InputError> {
    match length {
        ExtLength::Inches(inches) => Ok(*inches),
        ExtLength::Text(text) => parse_length(text),
    }
}

fn import_wall(ext_wall: &ExtWall) -> Result<Wall, InputError> {
    Wall::new(
        ext_wall.label.clone(),
        import_length(&ext_wall.width)?,
        import_length(&ext_wall.height)?,
    )
}

fn import_cutout(ext_cutout: &ExtCutout) -> Result<Cutout, InputError> {
    Cutout::new(
        ext_cutout.name.clone(),
        ext_cutout.wall.clone(),
        (import_length(&ext_cutout.x)?, import_length(&ext_cutout.y)?),
        (
            import_length(&ext_cutout.width)?,
            import_length(&ext_cutout.height)?,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PatternStyle;

    const SHOWER: &str = r#"{
        "name": "shower",
        "tile": { "width": "1'0\"", "height": 12 },
        "pattern": "half_offset",
        "walls": [
            { "label": "Wall A", "width": "5'0\"", "height": "7'6\"" },
            { "label": "Wall B", "width": 36, "height": "7'6\"" }
        ],
        "cutouts": [
            { "name": "valve", "wall": "Wall B", "x": "1'3\"", "y": 40, "width": 8, "height": 8 }
        ]
    }"#;

    fn ext_instance() -> ExtInstance {
        serde_json::from_str(SHOWER).unwrap()
    }

    #[test]
    fn imports_mixed_length_notations() {
        let instance = Importer::default().import_instance(&ext_instance()).unwrap();
        assert_eq!(instance.tile, TileSpec::new(12.0, 12.0).unwrap());
        assert_eq!(instance.grout, GroutSpec::default());
        assert_eq!(instance.pattern, PatternStyle::HalfOffset);
        assert!(instance.reuse_scraps);
        assert_eq!(instance.walls[0], Wall::new("Wall A", 60.0, 90.0).unwrap());
        assert_eq!(instance.walls[1].width, 36.0);
        assert_eq!(instance.cutouts[0].x, 15.0);
        assert_eq!(instance.cutouts[0].wall_label, "Wall B");
    }

    #[test]
    fn reuse_flag_can_be_overridden() {
        let instance = Importer::new(Some(false))
            .import_instance(&ext_instance())
            .unwrap();
        assert!(!instance.reuse_scraps);
    }

    #[test]
    fn rejects_invalid_input() {
        let mut ext = ext_instance();
        ext.cutouts[0].wall = "Wall C".into();
        assert!(matches!(
            Importer::default().import_instance(&ext),
            Err(InputError::UnknownCutoutWall { .. })
        ));

        let mut ext = ext_instance();
        ext.tile.width = ExtLength::Inches(0.0);
        assert!(matches!(
            Importer::default().import_instance(&ext),
            Err(InputError::InvalidDimension { .. })
        ));

        let mut ext = ext_instance();
        ext.walls[1].height = ExtLength::Text("tall".into());
        assert_eq!(
            Importer::default().import_instance(&ext).unwrap_err(),
            InputError::UnparsableLength("tall".into())
        );
    }
}
