//! FFI bindings for the link core
//!
//! C-compatible entry points for the pure lookups, evaluated against the
//! built-in chain tables. Strings returned inside an [`FfiResult`] are owned by
//! Rust and must be released with [`peanut_free_result`].

use libc::c_char;
use std::ffi::{CStr, CString};
use std::ptr;

use crate::core::gasless::GaslessEligibility;
use crate::core::tokens::resolve_token_details;
use crate::core::value::convert_value;
use crate::domain::entities::UserBalance;
use crate::infrastructure::config::BUILTIN_TABLES;
use crate::shared::error::LinkError;

const MAX_INPUT_LENGTH: usize = 128;
const MAX_JSON_LENGTH: usize = 64 * 1024;

// Error codes
const ERR_INVALID_INPUT: i32 = 1;
const ERR_INVALID_BALANCES: i32 = 2;
const ERR_SERIALIZATION: i32 = 3;
const ERR_STRING_CONVERSION: i32 = 4;

/// FFI result wrapper
#[repr(C)]
pub struct FfiResult {
    success: bool,
    data: *mut c_char,
    error_code: i32,
}

impl FfiResult {
    fn success(data: String) -> Self {
        match CString::new(data) {
            Ok(c_string) => Self {
                success: true,
                data: c_string.into_raw(),
                error_code: 0,
            },
            Err(_) => Self::error(ERR_STRING_CONVERSION),
        }
    }

    fn error(error_code: i32) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error_code,
        }
    }
}

fn read_str(input: *const c_char, max_length: usize) -> Result<String, LinkError> {
    if input.is_null() {
        return Err(LinkError::validation("Null input pointer"));
    }

    let input_str = unsafe {
        CStr::from_ptr(input)
            .to_str()
            .map_err(|_| LinkError::validation("Invalid UTF-8 input"))?
    };

    if input_str.len() > max_length {
        return Err(LinkError::validation("Input too long"));
    }

    Ok(input_str.to_string())
}

/// Identifiers (addresses, chain ids, versions) are short and plain.
fn read_identifier(input: *const c_char) -> Result<String, LinkError> {
    let value = read_str(input, MAX_INPUT_LENGTH)?;
    if value.is_empty() {
        return Err(LinkError::validation("Empty input"));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-') {
        return Err(LinkError::validation("Input contains invalid characters"));
    }
    Ok(value)
}

/// `token_value / token_price`, with IEEE-754 semantics for a zero price.
#[no_mangle]
pub extern "C" fn peanut_convert_value(token_value: f64, token_price: f64) -> f64 {
    convert_value(token_value, token_price)
}

/// Token decimals and type as JSON (`{"tokenDecimals":6,"tokenType":1}`).
/// `user_balances_json` may be null, or a JSON array of user balances.
#[no_mangle]
pub extern "C" fn peanut_token_details(
    token_address: *const c_char,
    chain_id: *const c_char,
    user_balances_json: *const c_char,
) -> FfiResult {
    let (token_address, chain_id) = match (read_identifier(token_address), read_identifier(chain_id)) {
        (Ok(address), Ok(chain)) => (address, chain),
        _ => return FfiResult::error(ERR_INVALID_INPUT),
    };

    let balances: Vec<UserBalance> = if user_balances_json.is_null() {
        Vec::new()
    } else {
        let json = match read_str(user_balances_json, MAX_JSON_LENGTH) {
            Ok(json) => json,
            Err(_) => return FfiResult::error(ERR_INVALID_BALANCES),
        };
        match serde_json::from_str(&json) {
            Ok(balances) => balances,
            Err(e) => {
                log::warn!("Rejected user balances: {}", e);
                return FfiResult::error(ERR_INVALID_BALANCES);
            }
        }
    };

    let details = resolve_token_details(&BUILTIN_TABLES.token_registry, &token_address, &chain_id, &balances);
    match serde_json::to_string(&details) {
        Ok(json) => FfiResult::success(json),
        Err(_) => FfiResult::error(ERR_SERIALIZATION),
    }
}

/// `"true"` or `"false"`. `latest_contract_version` may be null to use the
/// chain's latest normal vault.
#[no_mangle]
pub extern "C" fn peanut_is_gasless_deposit_possible(
    token_address: *const c_char,
    chain_id: *const c_char,
    latest_contract_version: *const c_char,
) -> FfiResult {
    let (token_address, chain_id) = match (read_identifier(token_address), read_identifier(chain_id)) {
        (Ok(address), Ok(chain)) => (address, chain),
        _ => return FfiResult::error(ERR_INVALID_INPUT),
    };
    let version = if latest_contract_version.is_null() {
        None
    } else {
        match read_identifier(latest_contract_version) {
            Ok(version) => Some(version),
            Err(_) => return FfiResult::error(ERR_INVALID_INPUT),
        }
    };

    let tables = &*BUILTIN_TABLES;
    let gasless = GaslessEligibility::new(
        &tables.eip3009_tokens,
        &tables.gasless_vault_versions,
        &tables.contract_deployments,
    );
    let possible = gasless.is_gasless_deposit_possible(&token_address, &chain_id, version.as_deref());
    FfiResult::success(possible.to_string())
}

/// Free a C string returned by this library
#[no_mangle]
pub extern "C" fn peanut_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

/// Free the data held by an FfiResult
#[no_mangle]
pub extern "C" fn peanut_free_result(result: *mut FfiResult) {
    if !result.is_null() {
        unsafe {
            let result_ref = &mut *result;
            if !result_ref.data.is_null() {
                let _ = CString::from_raw(result_ref.data);
                result_ref.data = ptr::null_mut();
            }
        }
    }
}
