use quakemap::prelude::*;
use std::path::PathBuf;

/// End-to-end composition from fixture files and in-memory sources.
/// These exercise the same path the command-line app takes.
#[cfg(test)]
mod integration_tests {
    use super::*;

    fn fixture(name: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
            .display()
            .to_string()
    }

    fn tectonic_config() -> MapConfig {
        MapVariant::Tectonic
            .resolve()
            .with_earthquake_source(fixture("all_day.geojson"))
            .with_boundary_source(fixture("PB2002_boundaries.json"))
    }

    #[tokio::test]
    async fn test_basic_map_from_file() {
        let config = MapVariant::Basic
            .resolve()
            .with_earthquake_source(fixture("all_day.geojson"));
        let view = compose(config).await.unwrap();

        assert_eq!(view.earthquakes.len(), 8);
        assert!(view.boundaries.is_none());
        assert!(view.layer_control.is_none());
        assert_eq!(view.base_layers.len(), 1);
    }

    #[tokio::test]
    async fn test_marker_styling_follows_depth_and_magnitude() {
        let view = compose(tectonic_config()).await.unwrap();
        let markers = view.earthquakes.markers();

        let fills: Vec<String> = markers.iter().map(|m| m.fill_color.to_css()).collect();
        assert_eq!(
            fills,
            vec![
                "rgb(50,255,50)",  // 5 km
                "rgb(157,223,0)",  // exactly 10 km
                "rgb(207,188,0)",  // 45 km
                "rgb(254,103,0)",  // 89.999 km
                "rgb(255,50,50)",  // 120 km
                "rgb(50,255,50)",  // above sea level
                "rgb(255,50,50)",  // no depth reported
                "rgb(255,50,50)",  // null depth
            ]
        );

        assert_eq!(markers[0].radius, 12.5);
        assert!((markers[4].radius - 26.5).abs() < 1e-9);
        assert!((markers[5].radius + 3.0).abs() < 1e-9);
        assert_eq!(markers[6].radius, 0.0);
        assert!((markers[7].radius - 8.5).abs() < 1e-9);
        assert!(markers.iter().all(|m| m.style.color == Color::BLACK));
    }

    #[tokio::test]
    async fn test_tectonic_map_joins_both_datasets() {
        let view = compose(tectonic_config()).await.unwrap();

        let boundaries = view.boundaries.as_ref().unwrap();
        assert_eq!(boundaries.len(), 3);
        assert_eq!(boundaries.style().weight, 5.0);

        let control = view.layer_control.as_ref().unwrap();
        assert_eq!(control.base_layers.len(), 3);
        assert_eq!(control.overlays, vec!["Earthquakes", "Tectonic Boundaries"]);

        let names: Vec<_> = view.overlays().iter().map(|l| l.name().to_string()).collect();
        assert_eq!(names, vec!["Earthquakes", "Tectonic Boundaries"]);
    }

    #[tokio::test]
    async fn test_missing_boundary_file_fails_composition() {
        let config = tectonic_config().with_boundary_source(fixture("nope.json"));
        let result = compose(config).await;
        assert!(matches!(result, Err(MapError::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_feed_names_its_source() {
        let quakes = StaticSource::from_json(
            "inline",
            r#"{ "type": "FeatureCollection", "features": [] }"#,
        )
        .unwrap();
        let bad = FileSource::new(fixture("../integration_tests.rs"));

        let err = MapBuilder::new(MapVariant::Tectonic.resolve())
            .compose_from(&quakes, Some(&bad as &dyn DataSource))
            .await
            .err()
            .unwrap();

        match err {
            MapError::ParseError(msg) => assert!(msg.contains("integration_tests.rs"), "{}", msg),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_bare_geometry_boundary_source() {
        let quakes = FileSource::new(fixture("all_day.geojson"));
        let plates = StaticSource::from_json(
            "inline plates",
            r#"{ "type": "LineString", "coordinates": [[-125.0, 40.0], [-115.0, 32.0]] }"#,
        )
        .unwrap();

        let view = MapBuilder::new(MapVariant::Tectonic.resolve())
            .compose_from(&quakes, Some(&plates as &dyn DataSource))
            .await
            .unwrap();

        assert_eq!(view.boundaries.as_ref().map(|b| b.len()), Some(1));
        assert_eq!(view.earthquakes.len(), 8);
    }

    #[tokio::test]
    async fn test_json_matches_renderer_shape() {
        let view = compose(tectonic_config()).await.unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["center"]["lat"], 37.09);
        assert_eq!(json["center"]["lng"], -95.71);
        assert_eq!(json["base_layers"][0]["active"], true);
        assert_eq!(json["base_layers"][1]["active"], false);
        assert_eq!(json["overlays"][1]["style"]["color"], "rgb(255,165,0)");
        assert_eq!(json["legend"]["entries"].as_array().map(Vec::len), Some(6));
        assert_eq!(json["layer_control"]["collapsed"], false);
    }

    #[test]
    fn test_legend_agrees_with_classifier() {
        let legend = Legend::default();
        for (entry, depth) in legend.entries.iter().zip([9.0, 29.0, 49.0, 69.0, 89.0, 90.0]) {
            assert_eq!(entry.color, classify(depth));
        }
    }
}
