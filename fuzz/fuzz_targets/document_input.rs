// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for JSON document input.
//!
//! Arbitrary bytes are parsed as a labelled document and applied to both
//! builders. Malformed JSON and unsupported shapes must come back as errors.

#![no_main]

use compkeys::build::{apply_to_filters, apply_to_indexes, DocumentInput};
use compkeys::{Filters, Indexes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(doc) = serde_json::from_slice::<DocumentInput>(data) else {
        return;
    };

    let mut idx = Indexes::default();
    if apply_to_indexes(&mut idx, &doc).is_ok() {
        let _ = idx.build();
    }

    let mut filters = Filters::default();
    if apply_to_filters(&mut filters, &doc).is_ok() {
        let _ = filters.build();
    }
});
