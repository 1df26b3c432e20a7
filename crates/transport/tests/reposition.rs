//! Integration tests for photon repositioning

use wtools_grid::{read_rtheta_model, Wind};
use wtools_transport::{reposition, reposition_lost_disk_photon, Error, Photon, ScatterKind};

use approx::assert_relative_eq;
use nalgebra::Vector3;
use rstest::{fixture, rstest};
use std::io::Write;

/// A 3x3 polar wind reaching from 10 degrees to just above the disk plane
#[fixture]
fn wind() -> Wind {
    let radii = [1.0e10, 2.0e10, 3.0e10];
    let angles = [10.0, 45.0, 89.999];
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for (i, r) in radii.iter().enumerate() {
        for (j, theta) in angles.iter().enumerate() {
            writeln!(file, "{i} {j} 0 {r:e} {theta} 0.0 0.0 0.0 1.0e-15").unwrap();
        }
    }
    let model = read_rtheta_model(file.path()).unwrap();
    let mut wind = Wind::new();
    wind.materialize(&model).unwrap();
    wind
}

#[rstest]
fn non_resonant_reposition_is_a_no_op(wind: Wind) {
    let mut photon = Photon {
        x: Vector3::new(1.5e10, 0.0, 1.0e10),
        lmn: Vector3::new(0.6, 0.0, 0.8),
        freq: 1.0e15,
        scatter: ScatterKind::NonResonant,
        ..Default::default()
    };
    let before = photon.clone();

    reposition(&wind, &mut photon).unwrap();
    assert_eq!(photon, before);

    reposition_lost_disk_photon(&wind, &mut photon).unwrap();
    assert_eq!(photon, before);
}

#[rstest]
fn resonant_reposition_advances_by_dfudge(mut wind: Wind) {
    // cell (0, 0) encloses this position
    let mut photon = Photon {
        x: Vector3::new(0.75e10, 0.0, 1.3e10),
        lmn: Vector3::new(0.6, 0.0, 0.8),
        scatter: ScatterKind::Resonant(17),
        ..Default::default()
    };
    wind.cells[0].dfudge = 1.0e5;
    let before = photon.x;

    reposition(&wind, &mut photon).unwrap();

    assert_eq!(photon.grid, 0);
    assert_relative_eq!(photon.x[0], before[0] + 6.0e4, max_relative = 1e-12);
    assert_relative_eq!(photon.x[1], before[1]);
    assert_relative_eq!(photon.x[2], before[2] + 8.0e4, max_relative = 1e-12);
    // the move is exactly dfudge long
    assert_relative_eq!((photon.x - before).norm(), 1.0e5, max_relative = 1e-12);
}

#[rstest]
fn disk_rescue_stops_short_of_the_plane(wind: Wind) {
    let mut photon = Photon {
        x: Vector3::new(1.0e10, 0.0, 1.0e6),
        lmn: Vector3::new(0.0, 0.0, -1.0),
        scatter: ScatterKind::Resonant(3),
        ..Default::default()
    };

    reposition_lost_disk_photon(&wind, &mut photon).unwrap();

    // moved 0.999 of the distance to z = 0, staying on the starting side
    assert_relative_eq!(photon.x[2], 1.0e3, max_relative = 1e-9);
    assert!(photon.x[2] > 0.0);
    assert_relative_eq!(photon.x[0], 1.0e10);
}

#[rstest]
fn photon_outside_the_grid_is_not_moved(wind: Wind) {
    let mut photon = Photon {
        x: Vector3::new(9.0e10, 0.0, 1.0e9),
        lmn: Vector3::new(0.0, 0.0, 1.0),
        scatter: ScatterKind::Resonant(5),
        ..Default::default()
    };
    let before = photon.clone();

    let result = reposition(&wind, &mut photon);
    assert!(matches!(result, Err(Error::PhotonNotInGrid { .. })));
    assert_eq!(photon, before);
}

#[rstest]
#[should_panic(expected = "crosses the disk plane")]
fn disk_rescue_rejects_directions_parallel_to_the_disk(wind: Wind) {
    let mut photon = Photon {
        x: Vector3::new(1.5e10, 0.0, 1.0e6),
        lmn: Vector3::new(1.0, 0.0, 0.0),
        scatter: ScatterKind::Resonant(3),
        ..Default::default()
    };
    let _ = reposition_lost_disk_photon(&wind, &mut photon);
}

#[rstest]
#[should_panic(expected = "off the disk plane")]
fn disk_rescue_rejects_photons_already_on_the_plane(wind: Wind) {
    let mut photon = Photon {
        x: Vector3::new(1.5e10, 0.0, 0.0),
        lmn: Vector3::new(0.0, 0.0, -1.0),
        scatter: ScatterKind::Resonant(3),
        ..Default::default()
    };
    let _ = reposition_lost_disk_photon(&wind, &mut photon);
}
