/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use netpbm_core::bytestream::ZCursor;

use crate::{sample_path, TestEntry};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_pipelines() {
    let file = sample_path().join("tests/pipelines.json");

    let json_file = read(file).unwrap();

    let entries: Vec<TestEntry> = serde_json::from_slice(&json_file).unwrap();

    assert!(!entries.is_empty());

    let mut failures = Vec::new();

    for entry in &entries {
        let mut image = match netpbm::decode(ZCursor::new(entry.input.as_bytes())) {
            Ok(image) => image,
            Err(e) => {
                eprintln!("{}: decoding failed with {:?}", entry.name, e);
                failures.push(entry.name.clone());
                continue;
            }
        };
        let applied = entry
            .operations
            .iter()
            .try_for_each(|operation| operation.apply(&mut image));

        if let Err(e) = applied {
            eprintln!("{}: operation failed with {:?}", entry.name, e);
            failures.push(entry.name.clone());
            continue;
        }

        let mut output = Vec::new();
        netpbm::encode(&image, &mut output).unwrap();

        if output != entry.expected.as_bytes() {
            let err = format!(
                "Output mismatch for {}\nExpected {:?} but found {:?}\nConfig:{:#?}",
                entry.name,
                entry.expected,
                String::from_utf8_lossy(&output),
                entry
            );
            eprintln!("{}\n", err);
            failures.push(entry.name.clone());
        }
    }
    if !failures.is_empty() {
        panic!("Errors found while running pipelines\n {:#?}", failures);
    }
}
