/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

mod common;

use approx::assert_relative_eq;
use common::{ascii_wfc, binary_wfc, create_test_file, create_test_files, GRID, INDEX};
use qewfc_rs::readers::{load, BinaryLayout, PlaneWavePolicy, ReadError, ReaderConfig};
use qewfc_rs::timer::Timer;
use qewfc_rs::wavefunction::{Shape, ShapeSource};
use std::fs;

#[test]
fn test_load_index_ascii_and_grid() {
    let ascii = ascii_wfc(2, 2, 3);
    let (_dir, paths) = create_test_files(&[
        ("index.xml", INDEX.as_bytes()),
        ("wfc.1", ascii.as_bytes()),
        ("grid.xml", GRID.as_bytes()),
    ]);
    let config = ReaderConfig {
        index: Some(paths[0].clone()),
        ascii_wfc: Some(paths[1].clone()),
        grid: Some(paths[2].clone()),
        normalize: true,
        ..Default::default()
    };

    let loaded = load(&config).unwrap();
    let wfc = &loaded.wavefunction;
    assert_eq!(wfc.shape(), Some(Shape::new(2, 2, 3)));
    assert_eq!(wfc.allocation_source(), Some(ShapeSource::Header));
    assert_eq!(wfc.grid().len(), 4);
    assert!(loaded.index_report.unwrap().is_clean());
    for kpoint in wfc.kpoints() {
        for mo in kpoint.mos() {
            assert_relative_eq!(mo.norm(), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_load_from_json_config() {
    let (dir, paths) = create_test_files(&[
        ("index.xml", INDEX.as_bytes()),
        ("wfc.bin", &binary_wfc(12)[..]),
    ]);
    let timing = dir.path().join("timing.txt");
    let json = format!(
        r#"{{
            "index": {:?},
            "binary_wfc": {:?},
            "binary_layout": {{"nkpts": 2, "nbands": 2, "plane_waves": {{"split_total": 6}}}},
            "timing_report": {:?}
        }}"#,
        paths[0].to_str().unwrap(),
        paths[1].to_str().unwrap(),
        timing.to_str().unwrap()
    );
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, json).unwrap();

    let config = ReaderConfig::from_json_file(&config_path).unwrap();
    assert_eq!(
        config.binary_layout,
        Some(BinaryLayout::new(2, 2, PlaneWavePolicy::SplitTotal(6)))
    );

    let loaded = load(&config).unwrap();
    assert_eq!(loaded.wavefunction.mo(1, 0).unwrap().coeff()[0].re, 6.0);

    let report = fs::read_to_string(&timing).unwrap();
    assert!(report.contains("read_binary_wfc"));
    assert!(report.contains("read_index"));
}

#[test]
fn test_load_with_timer_records_blocks() {
    let (_dir, file_path) = create_test_file("index.xml", INDEX.as_bytes());
    let config = ReaderConfig {
        index: Some(file_path),
        ..Default::default()
    };

    let mut timer = Timer::new();
    qewfc_rs::readers::load_with_timer(&config, &mut timer).unwrap();

    assert_eq!(timer.depth(), 0);
    assert_eq!(timer.block("load").unwrap().calls, 1);
    assert_eq!(timer.block("read_index").unwrap().calls, 1);
    assert!(timer.block("read_ascii_wfc").is_none());
}

#[test]
fn test_invalid_configurations() {
    assert!(matches!(
        load(&ReaderConfig::default()),
        Err(ReadError::Config(_))
    ));

    let binary_only = ReaderConfig {
        binary_wfc: Some("wfc.bin".into()),
        binary_layout: Some(BinaryLayout::new(1, 1, PlaneWavePolicy::FromModel)),
        ..Default::default()
    };
    assert!(matches!(load(&binary_only), Err(ReadError::Config(_))));

    let no_layout = ReaderConfig {
        index: Some("index.xml".into()),
        binary_wfc: Some("wfc.bin".into()),
        ..Default::default()
    };
    assert!(matches!(load(&no_layout), Err(ReadError::Config(_))));
}

#[test]
fn test_malformed_json_config() {
    let (_dir, file_path) = create_test_file("config.json", b"{ \"index\": 3 }");
    assert!(matches!(
        ReaderConfig::from_json_file(&file_path),
        Err(ReadError::Config(_))
    ));
}

#[test]
fn test_load_propagates_reader_errors() {
    let (dir, paths) = create_test_files(&[("index.xml", INDEX.as_bytes())]);
    let config = ReaderConfig {
        index: Some(paths[0].clone()),
        ascii_wfc: Some(dir.path().join("missing.wfc")),
        ..Default::default()
    };
    assert!(matches!(load(&config), Err(ReadError::Io { .. })));
}
