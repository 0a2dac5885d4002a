use super::*;

#[test]
fn defaults_validate() {
    Configuration::default().validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let config: Configuration = serde_json::from_str(
        r#"{ "reflection_opacity": 0.25, "raster_strategy": "column_blit" }"#,
    )
    .unwrap();
    assert_eq!(config.reflection_opacity, 0.25);
    assert_eq!(config.raster_strategy, RasterStrategy::ColumnBlit);
    assert_eq!(config.background_color, Rgba8::BLACK);
    assert_eq!(config.picture_reflection_overlap, 1);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let bad = [
        Configuration {
            darkening_factor: -0.1,
            ..Configuration::default()
        },
        Configuration {
            darkening_factor: f64::NAN,
            ..Configuration::default()
        },
        Configuration {
            reflection_opacity: 1.5,
            ..Configuration::default()
        },
        Configuration {
            active_shape_border_width: -1,
            ..Configuration::default()
        },
        Configuration {
            active_shape_border_width: i64::MAX,
            ..Configuration::default()
        },
        Configuration {
            picture_reflection_overlap: -1,
            ..Configuration::default()
        },
        Configuration {
            picture_reflection_overlap: i64::MIN,
            ..Configuration::default()
        },
        Configuration {
            picture_reflection_overlap: MAX_RASTER_DIM + 1,
            ..Configuration::default()
        },
    ];
    for config in bad {
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("validation error:"));
    }
}

#[test]
fn overlap_accepts_its_full_range() {
    for overlap in [0, 1, MAX_RASTER_DIM] {
        let config = Configuration {
            picture_reflection_overlap: overlap,
            ..Configuration::default()
        };
        config.validate().unwrap();
    }
}
