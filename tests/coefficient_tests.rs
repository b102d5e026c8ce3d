/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

mod common;

use approx::assert_relative_eq;
use common::{ascii_wfc, binary_wfc, coefficient, create_test_file, create_test_files, INDEX};
use num_complex::Complex64;
use qewfc_rs::markup::LineBuffer;
use qewfc_rs::readers::{
    parse_ascii_wfc, read_ascii_wfc, read_binary_wfc, read_index, BinaryLayout, PlaneWavePolicy,
    ReadError,
};
use qewfc_rs::wavefunction::{ModelError, Shape, ShapeSource, Wavefunction};

fn assert_coefficients(wfc: &Wavefunction, shape: Shape) {
    for k in 0..shape.nkpts {
        for b in 0..shape.nbands {
            let mo = wfc.mo(k, b).unwrap();
            for g in 0..shape.npw {
                let (re, im) = coefficient(k, b, g);
                assert_relative_eq!(mo.coeff()[g].re, re, epsilon = 1e-9);
                assert_relative_eq!(mo.coeff()[g].im, im, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn test_ascii_alone_shapes_model() {
    let (_dir, file_path) = create_test_file("wfc.1", ascii_wfc(2, 3, 4).as_bytes());
    let mut wfc = Wavefunction::new();
    let shape = read_ascii_wfc(&file_path, &mut wfc).unwrap();

    assert_eq!(shape, Shape::new(2, 3, 4));
    assert_eq!(wfc.shape(), Some(shape));
    assert_eq!(wfc.allocation_source(), Some(ShapeSource::AsciiCoefficients));
    assert_coefficients(&wfc, shape);
}

#[test]
fn test_index_then_ascii() {
    let ascii = ascii_wfc(2, 2, 3);
    let (_dir, paths) = create_test_files(&[
        ("index.xml", INDEX.as_bytes()),
        ("wfc.1", ascii.as_bytes()),
    ]);
    let mut wfc = Wavefunction::new();
    read_index(&paths[0], &mut wfc).unwrap();
    read_ascii_wfc(&paths[1], &mut wfc).unwrap();

    assert_eq!(wfc.allocation_source(), Some(ShapeSource::Header));
    assert_coefficients(&wfc, Shape::new(2, 2, 3));
    assert_eq!(wfc.kpoints()[0].energies(), vec![Some(-0.2), Some(0.1)]);
}

#[test]
fn test_ascii_then_index() {
    let ascii = ascii_wfc(2, 2, 3);
    let (_dir, paths) = create_test_files(&[
        ("index.xml", INDEX.as_bytes()),
        ("wfc.1", ascii.as_bytes()),
    ]);
    let mut wfc = Wavefunction::new();
    read_ascii_wfc(&paths[1], &mut wfc).unwrap();
    let report = read_index(&paths[0], &mut wfc).unwrap();

    assert!(!report.allocated);
    assert!(report.shape_conflict.is_none());
    assert_eq!(wfc.allocation_source(), Some(ShapeSource::AsciiCoefficients));
    // The index read keeps the coefficients and adds the energies
    assert_coefficients(&wfc, Shape::new(2, 2, 3));
    assert_eq!(wfc.kpoints()[1].energies(), vec![Some(-0.15), Some(0.12)]);
}

#[test]
fn test_ascii_shape_conflict_keeps_model() {
    let ascii = ascii_wfc(1, 2, 3);
    let (_dir, paths) = create_test_files(&[
        ("index.xml", INDEX.as_bytes()),
        ("wfc.1", ascii.as_bytes()),
    ]);
    let mut wfc = Wavefunction::new();
    read_index(&paths[0], &mut wfc).unwrap();
    let result = read_ascii_wfc(&paths[1], &mut wfc);

    assert!(matches!(
        result,
        Err(ReadError::Model(ModelError::ShapeMismatch { .. }))
    ));
    assert_eq!(wfc.shape(), Some(Shape::new(2, 2, 3)));
    assert!(wfc.mo(0, 0).unwrap().coeff().iter().all(|c| c.norm() == 0.0));
}

#[test]
fn test_non_uniform_bands() {
    let mut text = ascii_wfc(1, 2, 2);
    text.push_str(&ascii_wfc(1, 1, 2).replace("Kpoint.1", "Kpoint.2"));
    let lines = LineBuffer::from_text(&text);
    let mut wfc = Wavefunction::new();

    assert!(matches!(
        parse_ascii_wfc(&lines, &mut wfc),
        Err(ReadError::NonUniformBands {
            kpoint: 1,
            expected: 2,
            found: 1
        })
    ));
    assert!(!wfc.is_allocated());
}

#[test]
fn test_non_uniform_plane_waves() {
    let text = ascii_wfc(1, 2, 3).replacen("    1.200000e1,-1.000000e0\n", "", 1);
    let lines = LineBuffer::from_text(&text);
    let mut wfc = Wavefunction::new();

    assert!(matches!(
        parse_ascii_wfc(&lines, &mut wfc),
        Err(ReadError::NonUniformPlaneWaves {
            kpoint: 0,
            band: 1,
            expected: 3,
            found: 2
        })
    ));
}

#[test]
fn test_missing_sections() {
    let mut wfc = Wavefunction::new();
    let empty: Vec<&str> = Vec::new();
    assert!(matches!(
        parse_ascii_wfc(&empty, &mut wfc),
        Err(ReadError::MissingSection("Kpoint"))
    ));

    let no_bands = vec!["<Kpoint.1>", "</Kpoint.1>"];
    assert!(matches!(
        parse_ascii_wfc(&no_bands, &mut wfc),
        Err(ReadError::MissingSection("Wfc"))
    ));
    assert!(!wfc.is_allocated());
}

#[test]
fn test_malformed_coefficient_line() {
    // Line 9 holds the second coefficient of the second band
    let mut lines: Vec<String> = ascii_wfc(1, 2, 3).lines().map(str::to_string).collect();
    lines[8] = "    abc".to_string();
    let mut wfc = Wavefunction::new();
    let result = parse_ascii_wfc(&lines, &mut wfc);

    match result {
        Err(ReadError::MalformedLine { line, content, .. }) => {
            assert_eq!(line, 9);
            assert_eq!(content, "    abc");
        }
        other => panic!("expected a malformed line error, got {:?}", other),
    }

    // Coefficients read before the bad line stay in place
    let first = wfc.mo(0, 0).unwrap();
    assert_eq!(first.coeff()[2], Complex64::new(2.0, -1.0));
    let second = wfc.mo(0, 1).unwrap();
    assert_eq!(second.coeff()[0], Complex64::new(10.0, -0.0));
    assert_eq!(second.coeff()[1], Complex64::new(0.0, 0.0));
}

#[test]
fn test_binary_after_index() {
    let (_dir, paths) = create_test_files(&[
        ("index.xml", INDEX.as_bytes()),
        ("wfc.bin", &binary_wfc(12)[..]),
    ]);
    let mut wfc = Wavefunction::new();
    read_index(&paths[0], &mut wfc).unwrap();

    // 6 plane waves per k-point split over 2 bands
    let layout = BinaryLayout::new(2, 2, PlaneWavePolicy::SplitTotal(6));
    read_binary_wfc(&paths[1], &layout, &mut wfc).unwrap();

    assert_eq!(
        wfc.mo(0, 0).unwrap().coeff(),
        &[
            Complex64::new(0.0, -0.0),
            Complex64::new(1.0, -1.0),
            Complex64::new(2.0, -2.0)
        ]
    );
    assert_eq!(wfc.mo(1, 1).unwrap().coeff()[2], Complex64::new(11.0, -11.0));
    // Energies from the index are untouched
    assert_eq!(wfc.kpoints()[0].energies(), vec![Some(-0.2), Some(0.1)]);
}

#[test]
fn test_binary_trailing_values_ignored() {
    let (_dir, paths) = create_test_files(&[
        ("index.xml", INDEX.as_bytes()),
        ("wfc.bin", &binary_wfc(20)[..]),
    ]);
    let mut wfc = Wavefunction::new();
    read_index(&paths[0], &mut wfc).unwrap();

    let layout = BinaryLayout::new(2, 2, PlaneWavePolicy::FromModel);
    read_binary_wfc(&paths[1], &layout, &mut wfc).unwrap();
    assert_eq!(wfc.mo(1, 1).unwrap().coeff()[2], Complex64::new(11.0, -11.0));
}

#[test]
fn test_binary_truncated() {
    let (_dir, paths) = create_test_files(&[
        ("index.xml", INDEX.as_bytes()),
        ("wfc.bin", &binary_wfc(11)[..]),
    ]);
    let mut wfc = Wavefunction::new();
    read_index(&paths[0], &mut wfc).unwrap();

    let layout = BinaryLayout::new(2, 2, PlaneWavePolicy::Explicit(3));
    assert!(matches!(
        read_binary_wfc(&paths[1], &layout, &mut wfc),
        Err(ReadError::TruncatedBinary {
            needed: 192,
            available: 176
        })
    ));
}

#[test]
fn test_binary_layout_mismatch() {
    let (_dir, paths) = create_test_files(&[
        ("index.xml", INDEX.as_bytes()),
        ("wfc.bin", &binary_wfc(12)[..]),
    ]);
    let mut wfc = Wavefunction::new();
    read_index(&paths[0], &mut wfc).unwrap();

    let layout = BinaryLayout::new(1, 2, PlaneWavePolicy::Explicit(6));
    assert!(matches!(
        read_binary_wfc(&paths[1], &layout, &mut wfc),
        Err(ReadError::Model(ModelError::ShapeMismatch { .. }))
    ));
}

#[test]
fn test_normalize_and_overlap() {
    let (_dir, file_path) = create_test_file("wfc.1", ascii_wfc(1, 2, 3).as_bytes());
    let mut wfc = Wavefunction::new();
    read_ascii_wfc(&file_path, &mut wfc).unwrap();
    wfc.normalize();

    for b in 0..2 {
        assert_relative_eq!(wfc.mo(0, b).unwrap().norm(), 1.0, epsilon = 1e-12);
        let self_overlap = wfc.overlap(&wfc, 0, b, b).unwrap();
        assert_relative_eq!(self_overlap.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(self_overlap.im, 0.0, epsilon = 1e-12);
    }

    assert!(matches!(
        wfc.overlap(&wfc, 0, 0, 2),
        Err(ModelError::IndexOutOfRange { what: "band", .. })
    ));
    assert!(matches!(
        wfc.overlap(&Wavefunction::new(), 0, 0, 0),
        Err(ModelError::Unshaped)
    ));
}
