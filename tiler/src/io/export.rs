use crate::io::ext_repr::{ExtPlacedTile, ExtSolution, ExtSummary, ExtWallStats};
use crate::placement::LayoutSolution;

pub fn export_solution(solution: &LayoutSolution) -> ExtSolution {
    ExtSolution {
        summary: ExtSummary {
            full_tiles: solution.full_tiles,
            cut_tiles: solution.cut_tiles,
            total_tiles: solution.total_tiles(),
            scraps_reused: solution.scraps_reused,
        },
        walls: solution
            .wall_stats
            .iter()
            .map(|s| ExtWallStats {
                label: s.label.clone(),
                full_tiles: s.full_tiles,
                cut_tiles: s.cut_tiles,
                suppressed_tiles: s.suppressed_tiles,
                scraps_reused: s.scraps_reused,
            })
            .collect(),
        tiles: solution
            .tiles
            .iter()
            .map(|t| ExtPlacedTile {
                wall: t.wall_label.clone(),
                x: t.x,
                y: t.y,
                width: t.width,
                height: t.height,
                class: t.class,
            })
            .collect(),
        scrap_pool: solution.residual_scraps.scraps().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{GroutSpec, Instance, PatternStyle, TileSpec, Wall};
    use crate::placement::compute_layout;

    #[test]
    fn exported_solution_serializes_classes_in_snake_case() {
        let instance = Instance::new(
            "export",
            vec![Wall::new("A", 15.0, 10.0).unwrap()],
            TileSpec::new(10.0, 10.0).unwrap(),
            GroutSpec::none(),
            PatternStyle::Straight,
            true,
            vec![],
        )
        .unwrap();
        let ext = export_solution(&compute_layout(&instance));
        assert_eq!(
            ext.summary,
            ExtSummary {
                full_tiles: 1,
                cut_tiles: 1,
                total_tiles: 2,
                scraps_reused: 0
            }
        );
        assert_eq!(ext.scrap_pool, vec![5.0]);

        let json = serde_json::to_value(&ext).unwrap();
        assert_eq!(json["tiles"][1]["class"], "fresh_cut");
        assert_eq!(json["walls"][0]["label"], "A");
    }
}
