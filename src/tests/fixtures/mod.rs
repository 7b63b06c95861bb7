//! Test fixtures for wire payloads

use serde_json::{json, Value};

/// Hex encoded private-test network address
pub const ADDRESS: &str = "A826D27E1D0A26CA4E316F901E23E55C8711DB20DF11A7B2";

/// Second address used as a restriction value
pub const OTHER_ADDRESS: &str = "6826D27E1D0A26CA4E316F901E23E55C8711DB20DF11A7B3";

/// Mosaic id used as a restriction value
pub const MOSAIC_ID: &str = "11F4B1B3AC033DB5";

/// Transfer transaction operation code
pub const TRANSFER: u64 = 16724;

/// Build a single restriction record
pub fn restriction(flags: u16, values: Value) -> Value {
    json!({ "restrictionFlags": flags, "values": values })
}

/// Build an account restrictions info payload for [`ADDRESS`]
pub fn restrictions_info(restrictions: Vec<Value>) -> Value {
    json!({
        "accountRestrictions": {
            "version": 1,
            "address": ADDRESS,
            "restrictions": restrictions
        }
    })
}

/// Payload carrying one restriction of every target type
pub fn mixed_restrictions_info() -> Value {
    restrictions_info(vec![
        restriction(0x0001, json!([OTHER_ADDRESS])),
        restriction(0x8002, json!([MOSAIC_ID])),
        restriction(0x4004, json!([TRANSFER])),
    ])
}

/// Serialize a payload the way the REST client hands it over
pub fn to_bytes(payload: &Value) -> Vec<u8> {
    serde_json::to_vec(payload).unwrap_or_default()
}
