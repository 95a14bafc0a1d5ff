// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::PathBuf;

use log::LevelFilter;

use crate::diagnostics::DebugSettings;

#[test]
fn test_parse_any_value_enables_level_one() {
    let settings = DebugSettings::parse("1");

    assert_eq!(settings.file, None);
    assert_eq!(settings.level, 1);
    assert_eq!(settings.level_filter(), LevelFilter::Debug);
}

#[test]
fn test_parse_file_and_level() {
    let settings = DebugSettings::parse("file:/tmp/osrand.log,level:3");

    assert_eq!(settings.file, Some(PathBuf::from("/tmp/osrand.log")));
    assert_eq!(settings.level, 3);
    assert_eq!(settings.level_filter(), LevelFilter::Trace);
}

#[test]
fn test_parse_level_before_file() {
    let settings = DebugSettings::parse("level:2,file:trace.txt");

    assert_eq!(settings.file, Some(PathBuf::from("trace.txt")));
    assert_eq!(settings.level, 2);
}

#[test]
fn test_parse_invalid_or_zero_level_is_raised_to_one() {
    assert_eq!(DebugSettings::parse("level:zero").level, 1);
    assert_eq!(DebugSettings::parse("level:0").level, 1);
    assert_eq!(DebugSettings::parse("").level, 1);
}

#[test]
fn test_parse_ignores_unknown_tokens() {
    let settings = DebugSettings::parse("color:never,level:1");

    assert_eq!(settings.file, None);
    assert_eq!(settings.level, 1);
}
