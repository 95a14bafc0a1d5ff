// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::Path;

use crate::config::{DEV_LRNG_PATH, DEV_RANDOM_PATH, MODE_SETTING, Mode, ProviderContext};
use crate::error::{OsRandError, Reason};
use crate::report::Reporter;

#[test]
fn test_mode_from_setting_recognized_values() {
    assert_eq!(Mode::from_setting(Some("getrandom")), Mode::Getrandom);
    assert_eq!(Mode::from_setting(Some("devlrng")), Mode::DevLrng);
    assert_eq!(Mode::from_setting(Some("devrandom")), Mode::DevRandom);
}

#[test]
fn test_mode_from_setting_unknown_falls_back_to_getrandom() {
    assert_eq!(Mode::from_setting(Some("bogus")), Mode::Getrandom);
    assert_eq!(Mode::from_setting(Some("")), Mode::Getrandom);
}

#[test]
fn test_mode_from_setting_is_case_sensitive() {
    assert_eq!(Mode::from_setting(Some("DevRandom")), Mode::Getrandom);
    assert_eq!(Mode::from_setting(Some("devrandom ")), Mode::Getrandom);
}

#[test]
fn test_mode_from_setting_absent_defaults_to_getrandom() {
    assert_eq!(Mode::from_setting(None), Mode::Getrandom);
}

#[test]
fn test_mode_from_str_unknown_is_error() {
    let result = "bogus".parse::<Mode>();

    assert!(matches!(&result, Err(OsRandError::UnknownMode(value)) if value == "bogus"));
    assert_eq!(
        result.expect_err("Expected UnknownMode").reason(),
        Reason::UnknownMode
    );
}

#[test]
fn test_mode_name_roundtrips_through_from_str() {
    for mode in Mode::ALL {
        assert_eq!(mode.to_string().parse::<Mode>().expect("Failed to parse"), mode);
    }
}

#[test]
fn test_mode_try_from_code() {
    assert_eq!(Mode::try_from(0u32).expect("Failed to convert 0"), Mode::Getrandom);
    assert_eq!(Mode::try_from(1u32).expect("Failed to convert 1"), Mode::DevLrng);
    assert_eq!(Mode::try_from(2u32).expect("Failed to convert 2"), Mode::DevRandom);
    assert!(matches!(Mode::try_from(3u32), Err(OsRandError::UnknownMode(_))));
}

#[test]
fn test_mode_device_path() {
    assert_eq!(Mode::Getrandom.device_path(), None);
    assert_eq!(Mode::DevLrng.device_path(), Some(Path::new(DEV_LRNG_PATH)));
    assert_eq!(Mode::DevRandom.device_path(), Some(Path::new(DEV_RANDOM_PATH)));
}

#[test]
fn test_provider_context_from_settings_reads_mode_key() {
    let context = ProviderContext::from_settings(
        [("other", "devlrng"), (MODE_SETTING, "devrandom")],
        Reporter::disabled(),
    );

    assert_eq!(context.mode(), Mode::DevRandom);
    assert!(!context.reporter().is_wired());
}

#[test]
fn test_provider_context_from_settings_last_value_wins() {
    let context = ProviderContext::from_settings(
        [(MODE_SETTING, "devrandom"), (MODE_SETTING, "devlrng")],
        Reporter::disabled(),
    );

    assert_eq!(context.mode(), Mode::DevLrng);
}

#[test]
fn test_provider_context_from_settings_without_mode_defaults() {
    let context = ProviderContext::from_settings(Vec::<(&str, &str)>::new(), Reporter::disabled());

    assert_eq!(context.mode(), Mode::Getrandom);
}
