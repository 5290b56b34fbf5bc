use std::thread;
use telem_geometry::{Rotation2d, Rotation3d, Translation3d};
use telem_mappings::*;
use telem_units::Distance;

const DISTANCE_CONFIGS: [Option<&str>; 6] = [
    Some("inches"),
    Some("meters"),
    None,
    Some(""),
    Some("bogus"),
    Some("Inches"),
];

const ROTATION_CONFIGS: [Option<&str>; 7] = [
    Some("degrees"),
    Some("radians"),
    Some("rotations"),
    None,
    Some(""),
    Some("bogus"),
    Some("RADIANS"),
];

const SCALARS: [f64; 8] = [0.0, 1.0, -1.0, 0.0254, 12.5, -273.15, 1e-6, 4096.0];

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "got {actual}, expected {expected}"
    );
}

#[test]
fn distance_roundtrip() {
    for config in DISTANCE_CONFIGS {
        for v in SCALARS {
            let d = Distance::meters(v);
            let back = DISTANCE_MAPPING.to_field(&DISTANCE_MAPPING.to_wire(&d, config), config);
            assert_close(back.in_meters(), v);
        }
    }
}

#[test]
fn rotation2d_roundtrip() {
    for config in ROTATION_CONFIGS {
        for v in SCALARS {
            let r = Rotation2d::from_degrees(v);
            let back =
                ROTATION_2D_MAPPING.to_field(&ROTATION_2D_MAPPING.to_wire(&r, config), config);
            assert_close(back.degrees(), v);
        }
    }
}

#[test]
fn translation3d_roundtrip() {
    for config in DISTANCE_CONFIGS {
        for v in SCALARS {
            let t = Translation3d::new(v, -2.0 * v, v + 0.5);
            let back = TRANSLATION_3D_MAPPING
                .to_field(&TRANSLATION_3D_MAPPING.to_wire(&t, config), config);
            assert_eq!(back, t);
        }
    }
}

#[test]
fn rotation3d_roundtrip() {
    let angles = [-3.0, -1.5, -0.4, 0.0, 0.25, 1.2, 1.5, 3.1];
    for config in ROTATION_CONFIGS {
        for roll in angles {
            for pitch in angles.iter().map(|a| a / 2.0) {
                for yaw in angles {
                    let r = Rotation3d::new(roll, pitch, yaw);
                    let back = ROTATION_3D_MAPPING
                        .to_field(&ROTATION_3D_MAPPING.to_wire(&r, config), config);
                    assert_close(back.x(), roll);
                    assert_close(back.y(), pitch);
                    assert_close(back.z(), yaw);
                    assert_eq!(back, r, "{config:?} ({roll}, {pitch}, {yaw})");
                }
            }
        }
    }
}

#[test]
fn default_equivalence() {
    let d = Distance::inches(17.0);
    let base = DISTANCE_MAPPING.to_wire(&d, None);
    assert_eq!(base, d.base_unit_magnitude());
    for config in [Some(""), Some("bogus")] {
        assert_eq!(DISTANCE_MAPPING.to_wire(&d, config), base);
    }

    let r2 = Rotation2d::from_radians(0.75);
    let degrees = ROTATION_2D_MAPPING.to_wire(&r2, Some(rotation_config::DEGREES));
    let r3 = Rotation3d::new(0.1, -0.2, 0.3);
    let degrees3 = ROTATION_3D_MAPPING.to_wire(&r3, Some(rotation_config::DEGREES));
    for config in [None, Some(""), Some("bogus")] {
        assert_eq!(ROTATION_2D_MAPPING.to_wire(&r2, config), degrees);
        assert_eq!(ROTATION_3D_MAPPING.to_wire(&r3, config), degrees3);
    }
}

#[test]
fn order_preservation() {
    let t = Translation3d::new(1.0, 2.0, 3.0);
    for config in DISTANCE_CONFIGS {
        assert_eq!(TRANSLATION_3D_MAPPING.to_wire(&t, config), [1.0, 2.0, 3.0]);
    }

    let r = Rotation3d::new(0.1, 0.2, 0.3);
    let expected = [0.1, 0.2, 0.3];
    for (config, scale) in [
        (Some("radians"), 1.0),
        (Some("rotations"), 1.0 / std::f64::consts::TAU),
        (None, 180.0 / std::f64::consts::PI),
    ] {
        let wire = ROTATION_3D_MAPPING.to_wire(&r, config);
        for (actual, radians) in wire.iter().zip(expected) {
            assert_close(*actual, radians * scale);
        }
    }
}

#[test]
fn unit_literals() {
    let meter = Distance::meters(1.0);
    assert!((DISTANCE_MAPPING.to_wire(&meter, Some("inches")) - 39.3701).abs() < 1e-4);
    assert!((DISTANCE_MAPPING.to_wire(&meter, Some("meters")) - 1.0).abs() < 1e-12);

    let quarter = Rotation2d::from_degrees(90.0);
    assert!((ROTATION_2D_MAPPING.to_wire(&quarter, Some("radians")) - 1.5708).abs() < 1e-4);
    let turn = Rotation2d::from_rotations(1.0);
    assert!((ROTATION_2D_MAPPING.to_wire(&turn, Some("rotations")) - 1.0).abs() < 1e-12);

    let roll = Rotation3d::new(std::f64::consts::FRAC_PI_2, 0.0, 0.0);
    let [x, y, z] = ROTATION_3D_MAPPING.to_wire(&roll, None);
    assert!((x - 90.0).abs() < 1e-9);
    assert!(y.abs() < 1e-9);
    assert!(z.abs() < 1e-9);

    let t = Translation3d::new(1.0, 2.0, 3.0);
    assert_eq!(TRANSLATION_3D_MAPPING.to_wire(&t, None), [1.0, 2.0, 3.0]);
}

#[test]
fn wire_type_tags() {
    assert_eq!(DistanceMapping::WIRE_TYPE, WireType::Double);
    assert_eq!(Rotation2dMapping::WIRE_TYPE, WireType::Double);
    assert_eq!(Translation3dMapping::WIRE_TYPE, WireType::DoubleArray);
    assert_eq!(Rotation3dMapping::WIRE_TYPE, WireType::DoubleArray);
}

#[test]
#[should_panic(expected = "got 2")]
fn translation_short_array_is_fatal() {
    TRANSLATION_3D_MAPPING.to_field_slice(&[1.0, 2.0], None);
}

#[test]
#[should_panic(expected = "got 4")]
fn translation_long_array_is_fatal() {
    TRANSLATION_3D_MAPPING.to_field_slice(&[1.0, 2.0, 3.0, 4.0], None);
}

#[test]
#[should_panic(expected = "got 2")]
fn rotation3d_short_array_is_fatal() {
    ROTATION_3D_MAPPING.to_field_slice(&[1.0, 2.0], Some("radians"));
}

#[test]
#[should_panic(expected = "got 4")]
fn rotation3d_long_array_is_fatal() {
    ROTATION_3D_MAPPING.to_field_slice(&[1.0, 2.0, 3.0, 4.0], None);
}

#[test]
#[should_panic(expected = "got 4")]
fn registry_long_array_is_fatal() {
    let _ = registry()
        .to_field::<Translation3d>(WireValue::DoubleArray(vec![1.0, 2.0, 3.0, 4.0]), None);
}

#[test]
fn registry_roundtrip_through_wire_values() {
    let registry = registry();

    let wire = registry
        .to_wire(&Translation3d::new(1.0, 2.0, 3.0), None)
        .unwrap();
    assert_eq!(wire, WireValue::DoubleArray(vec![1.0, 2.0, 3.0]));
    assert_eq!(wire.as_double_array(), Some(&[1.0, 2.0, 3.0][..]));
    assert_eq!(wire.to_string(), "[1, 2, 3]");

    let back: Rotation3d = registry
        .to_field(WireValue::DoubleArray(vec![0.0, 0.0, 0.25]), Some("rotations"))
        .unwrap();
    assert!((back.measure_z().in_degrees() - 90.0).abs() < 1e-9);
}

#[test]
fn shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let d = Distance::meters(i as f64);
                let wire = registry().to_wire(&d, Some("inches")).unwrap();
                let back: Distance = registry().to_field(wire, Some("inches")).unwrap();
                assert_close(back.in_meters(), i as f64);
                ROTATION_3D_MAPPING.to_wire(&Rotation3d::new(0.0, 0.0, 0.1 * i as f64), None)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let [_, _, z] = handle.join().unwrap();
        assert_close(z, (0.1 * i as f64).to_degrees());
    }
}
