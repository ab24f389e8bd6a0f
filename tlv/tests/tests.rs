#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use tiler::entities::TileClass;
    use tiler::io::export::export_solution;
    use tiler::io::ext_repr::ExtSolution;
    use tiler::io::svg::layout_to_svg;
    use tiler::util::assertions;
    use tlv::config::TlvConfig;
    use tlv::io;
    use tlv::io::output::TlvOutput;
    use tlv::layout_instance;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    #[test_case("../assets/shower.json"; "shower")]
    #[test_case("../assets/backsplash.json"; "backsplash")]
    #[test_case("../assets/tub_surround.json"; "tub_surround")]
    fn test_instance(instance_path: &str) {
        init_logger();
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let config = TlvConfig {
            debug_scrap_pool: true,
            ..TlvConfig::default()
        };
        let (instance, solution) = layout_instance(&ext_instance, &config).unwrap();

        assert!(solution.total_tiles() > 0);
        assert!(assertions::solution_counters_match_tiles(&solution));
        assert!(assertions::tiles_within_wall_width(&instance, &solution));
        assert!(assertions::scrap_pool_is_valid(&solution.residual_scraps));
        assert_eq!(solution.wall_stats.len(), instance.walls.len());
        if !instance.reuse_scraps {
            assert_eq!(solution.count(TileClass::ReusedCut), 0);
        }

        // a second run yields exactly the same layout
        let (_, second) = layout_instance(&ext_instance, &config).unwrap();
        assert_eq!(solution, second);

        // write the output files
        let folder = std::env::temp_dir().join("tlv_tests");
        std::fs::create_dir_all(&folder).unwrap();
        let stem = Path::new(instance_path).file_stem().unwrap().to_str().unwrap();

        let output = TlvOutput {
            instance: ext_instance,
            solution: export_solution(&solution),
            config,
        };
        let json_path = folder.join(format!("sol_{stem}.json"));
        io::write_json(&output, &json_path).unwrap();
        let written: serde_json::Value =
            serde_json::from_reader(std::fs::File::open(&json_path).unwrap()).unwrap();
        let ext_solution: ExtSolution =
            serde_json::from_value(written["solution"].clone()).unwrap();
        assert_eq!(ext_solution.summary.total_tiles, solution.total_tiles());
        assert_eq!(ext_solution.tiles.len(), solution.tiles.len());

        let svg = layout_to_svg(&instance, &solution, config.svg_draw_options);
        io::write_svg(&svg, &folder.join(format!("sol_{stem}.svg"))).unwrap();
    }

    #[test_case("../assets/shower.json"; "shower")]
    #[test_case("../assets/backsplash.json"; "backsplash")]
    #[test_case("../assets/tub_surround.json"; "tub_surround")]
    fn reuse_only_changes_where_cuts_come_from(instance_path: &str) {
        init_logger();
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let config_for = |reuse| TlvConfig {
            reuse_scraps: Some(reuse),
            ..TlvConfig::default()
        };
        let (_, with_reuse) = layout_instance(&ext_instance, &config_for(true)).unwrap();
        let (_, without_reuse) = layout_instance(&ext_instance, &config_for(false)).unwrap();

        assert_eq!(without_reuse.scraps_reused, 0);
        assert_eq!(with_reuse.full_tiles, without_reuse.full_tiles);
        assert_eq!(with_reuse.cut_tiles, without_reuse.cut_tiles);
        for (a, b) in with_reuse.tiles.iter().zip(&without_reuse.tiles) {
            assert_eq!((a.x, a.y, a.width), (b.x, b.y, b.width));
        }
        assert!(with_reuse.residual_scraps.len() <= without_reuse.residual_scraps.len());
    }

    #[test]
    fn config_defaults_apply_to_partial_files() {
        let config: TlvConfig = serde_json::from_str(r#"{ "debug_scrap_pool": true }"#).unwrap();
        assert!(config.debug_scrap_pool);
        assert_eq!(config.reuse_scraps, None);
        assert!(config.svg_draw_options.draw_labels);
    }

    #[test]
    fn missing_instance_file_is_reported() {
        let err = io::read_instance(Path::new("../assets/does_not_exist.json")).unwrap_err();
        assert!(err.to_string().contains("could not open instance file"));
    }
}
