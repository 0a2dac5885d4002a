use super::*;

fn parse(json: &str) -> SceneFile {
    serde_json::from_str(json).unwrap()
}

#[test]
fn minimal_scene_uses_defaults() {
    let scene = parse(r#"{ "surface": { "width": 320, "height": 200 } }"#);
    scene.validate().unwrap();
    assert_eq!(scene.camera, CameraSpec::default());
    assert_eq!(scene.config, Configuration::default());
    assert_eq!(scene.svg_side, 512);
    assert!(scene.cards.is_empty());

    let built = scene.build_scene();
    assert_eq!(built.camera_location, Point3D::new(0.0, 0.0, -1.0));
    assert_eq!(built.viewer, Point3D::new(0.0, 0.0, 1.0));
    assert_eq!(built.fit, ProjectionFit::Cover);
}

#[test]
fn camera_block_is_applied() {
    let scene = parse(
        r#"{
            "surface": { "width": 64, "height": 64 },
            "camera": { "location": [1, 2, 3], "viewer": [0, 0, 2], "fit": "contain" },
            "config": { "raster_strategy": "column_blit", "reflection_opacity": 0.25 }
        }"#,
    );
    scene.validate().unwrap();
    let built = scene.build_scene();
    assert_eq!(built.camera_location, Point3D::new(1.0, 2.0, 3.0));
    assert_eq!(built.viewer.z, 2.0);
    assert_eq!(built.fit, ProjectionFit::Contain);
    assert_eq!(scene.config.reflection_opacity, 0.25);
    assert_eq!(scene.config.darkening_factor, 0.5);
}

#[test]
fn validation_rejects_bad_values() {
    let bad = [
        r#"{ "surface": { "width": 0, "height": 10 } }"#,
        r#"{ "surface": { "width": 10, "height": 10 }, "camera": { "viewer": [0, 0, 0] } }"#,
        r#"{ "surface": { "width": 10, "height": 10 }, "active": 0 }"#,
        r#"{ "surface": { "width": 10, "height": 10 }, "config": { "darkening_factor": -1 } }"#,
        r#"{ "surface": { "width": 10, "height": 10 },
             "cards": [ { "location": [0, 0, 0], "width": 0 } ] }"#,
    ];
    for json in bad {
        let err = parse(json).validate().unwrap_err();
        assert!(err.to_string().starts_with("validation error:"), "{json}: {err}");
    }
}

#[test]
fn rectangle_cards_are_built_centred() {
    let scene = parse(
        r#"{
            "surface": { "width": 10, "height": 10 },
            "active": 0,
            "cards": [ {
                "location": [0.5, 0, 2],
                "width": 2, "height": 1,
                "rotation": { "yaw": 0.5 },
                "color": { "r": 10, "g": 20, "b": 30, "a": 255 }
            } ]
        }"#,
    );
    scene.validate().unwrap();
    let cards = scene.build_cards(Path::new(".")).unwrap();
    assert_eq!(cards.len(), 1);
    let Card::Rectangle(rect) = &cards[0] else {
        panic!("expected rectangle");
    };
    let g = rect.geometry();
    assert_eq!(g.color, Rgba8::new(10, 20, 30, 255));
    assert_eq!(g.location, Point3D::new(0.5, 0.0, 2.0));
    assert_eq!(g.rotation, RotationMatrix::about_y(0.5));
    assert_eq!(g.points[0], Point3D::new(1.0, 0.5, 0.0));
    assert_eq!(g.points[2], Point3D::new(-1.0, -0.5, 0.0));
}

#[test]
fn picture_cards_derive_missing_size_from_aspect() {
    let dir = PathBuf::from("target").join("scene_file_unit");
    std::fs::create_dir_all(&dir).unwrap();
    image::RgbaImage::from_pixel(4, 2, image::Rgba([1, 2, 3, 255]))
        .save(dir.join("wide.png"))
        .unwrap();

    let scene = parse(
        r#"{
            "surface": { "width": 10, "height": 10 },
            "cards": [
                { "image": "wide.png", "location": [0, 0, 0], "width": 2 },
                { "image": "wide.png", "location": [0, 0, 0] }
            ]
        }"#,
    );
    let cards = scene.build_cards(&dir).unwrap();
    let Card::Picture(p) = &cards[0] else {
        panic!("expected picture");
    };
    assert_eq!(p.label(), Some("wide.png"));
    assert_eq!((p.width(), p.height()), (4, 2));
    assert_eq!(p.geometry().points[0], Point3D::new(1.0, 0.5, 0.0));

    let Card::Picture(p) = &cards[1] else {
        panic!("expected picture");
    };
    assert_eq!(p.geometry().points[0], Point3D::new(0.5, 0.25, 0.0));
}

#[test]
fn missing_image_is_an_error() {
    let scene = parse(
        r#"{
            "surface": { "width": 10, "height": 10 },
            "cards": [ { "image": "nope.png", "location": [0, 0, 0] } ]
        }"#,
    );
    assert!(scene.build_cards(Path::new("target")).is_err());
}

#[test]
fn load_reads_and_validates_file() {
    let dir = PathBuf::from("target").join("scene_file_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let ok = dir.join("ok.json");
    std::fs::write(&ok, r#"{ "surface": { "width": 8, "height": 8 } }"#).unwrap();
    assert_eq!(SceneFile::load(&ok).unwrap().surface, SurfaceSize::new(8, 8).unwrap());

    let bad = dir.join("bad.json");
    std::fs::write(&bad, r#"{ "surface": { "width": 8, "height": 8 }, "active": 3 }"#).unwrap();
    assert!(SceneFile::load(&bad).is_err());
    assert!(SceneFile::load(&dir.join("missing.json")).is_err());
}
