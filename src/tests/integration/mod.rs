//! Integration tests for the mapping layer
//!
//! These tests drive the application use cases with serialized wire payloads
//! and check the resulting domain values.

use crate::{
    application::{MapAccountRestrictionsUseCase, ParseDurationUseCase},
    domain::{
        account::NetworkType,
        duration::DurationUnit,
        restriction::{Direction, Policy, RestrictionFlag, RestrictionValue, TargetType},
    },
    shared::error::AppError,
    tests::{
        config,
        fixtures::{self, ADDRESS, MOSAIC_ID, OTHER_ADDRESS, TRANSFER},
        TestResult,
    },
};
use serde_json::json;

fn use_case() -> MapAccountRestrictionsUseCase {
    config::init();
    MapAccountRestrictionsUseCase::from_config(&config::test_config())
}

#[test]
fn test_operation_restriction_end_to_end() -> TestResult<()> {
    let payload = fixtures::restrictions_info(vec![fixtures::restriction(0x4004, json!([TRANSFER]))]);

    let info = use_case().execute(&fixtures::to_bytes(&payload))?;

    assert_eq!(info.address.encoded(), ADDRESS);
    assert_eq!(info.address.network_type(), Some(NetworkType::PrivateTest));
    assert_eq!(info.restrictions[0].values, vec![RestrictionValue::OperationCode(16724)]);
    Ok(())
}

#[test]
fn test_mosaic_restriction_end_to_end() -> TestResult<()> {
    let payload = fixtures::restrictions_info(vec![fixtures::restriction(0x0002, json!([MOSAIC_ID]))]);

    let info = use_case().execute(&fixtures::to_bytes(&payload))?;

    let restriction = &info.restrictions[0];
    assert_eq!(restriction.flag.target_type()?, TargetType::MosaicId);
    assert_eq!(restriction.flag.direction(), Direction::Incoming);
    assert_eq!(restriction.flag.policy(), Policy::Allow);
    assert_eq!(restriction.values[0].as_mosaic_id().map(|id| id.to_hex()), Some(MOSAIC_ID.to_string()));
    Ok(())
}

#[test]
fn test_mixed_restrictions_keep_order() -> TestResult<()> {
    let info = use_case().execute(&fixtures::to_bytes(&fixtures::mixed_restrictions_info()))?;

    let targets: Vec<TargetType> = info
        .restrictions
        .iter()
        .map(|r| r.values[0].target_type())
        .collect();
    assert_eq!(targets, vec![TargetType::Address, TargetType::MosaicId, TargetType::OperationCode]);

    let address = info.restrictions[0].values[0].as_address().copied();
    assert_eq!(address.map(|a| a.encoded()), Some(OTHER_ADDRESS.to_string()));
    assert_eq!(address.and_then(|a| a.network_type()), Some(NetworkType::MainNet));
    assert_eq!(info.restrictions[1].flag, RestrictionFlag::BLOCK_INCOMING_MOSAIC_ID);
    Ok(())
}

#[test]
fn test_ambiguous_flag_fails_whole_payload() {
    let payload = fixtures::restrictions_info(vec![
        fixtures::restriction(0x4004, json!([TRANSFER])),
        fixtures::restriction(0x0003, json!([MOSAIC_ID])),
    ]);

    let result = use_case().execute(&fixtures::to_bytes(&payload));
    assert_eq!(result, Err(AppError::UnrecognizedRestrictionFlag { flags: 0x0003 }));
}

#[test]
fn test_value_type_mismatch_is_reported() {
    let payload = fixtures::restrictions_info(vec![fixtures::restriction(0x0002, json!([TRANSFER]))]);

    let result = use_case().execute(&fixtures::to_bytes(&payload));
    assert!(matches!(result, Err(AppError::InvalidRestrictionValue { index: 0, .. })));
}

#[test]
fn test_payload_over_configured_limit() {
    let restrictions = (0..200)
        .map(|_| fixtures::restriction(0x4004, json!([TRANSFER])))
        .collect();
    let payload = fixtures::restrictions_info(restrictions);

    let result = use_case().execute(&fixtures::to_bytes(&payload));
    assert!(matches!(result, Err(AppError::PayloadTooLarge { limit: 4096, .. })));
}

#[test]
fn test_mapped_info_serializes_tagged_values() -> TestResult<()> {
    let info = use_case().execute(&fixtures::to_bytes(&fixtures::mixed_restrictions_info()))?;

    let value = serde_json::to_value(&info)?;
    assert_eq!(value["address"], ADDRESS);
    assert_eq!(value["restrictions"][1]["flag"], 0x8002);
    assert_eq!(value["restrictions"][1]["values"][0], json!({ "type": "mosaic_id", "value": MOSAIC_ID }));
    assert_eq!(value["restrictions"][2]["values"][0], json!({ "type": "operation_code", "value": 16724 }));
    Ok(())
}

#[test]
fn test_duration_tokens_end_to_end() -> TestResult<()> {
    config::init();

    let duration = ParseDurationUseCase.execute("12345s")?;
    assert_eq!(duration.seconds(), 12345);
    assert_eq!(duration.unit(), DurationUnit::Seconds);

    let duration = ParseDurationUseCase.execute("12345ms")?;
    assert_eq!(duration.to_millis(), 12345);

    for token in ["12345g", "adfs", "123s45"] {
        assert!(matches!(
            ParseDurationUseCase.execute(token),
            Err(AppError::MalformedDurationToken { .. })
        ));
    }
    Ok(())
}
