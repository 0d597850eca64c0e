//! Native status codes
//!
//! The status values the native layer reports alongside a failure, with
//! their descriptive strings. The descriptions are what backends put into
//! a native error's `error_string` field when nothing more specific is
//! available.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const E_OK: i64 = 0;
// E_INVALID_ARG shares the value of the raw absent-code sentinel, so it is
// indistinguishable from "no code" at the raw boundary. Backends that need
// to report it must use the typed constructors.
pub const E_INVALID_ARG: i64 = -1;
pub const E_INVALID_STATE: i64 = -2;
pub const E_NOT_FOUND: i64 = -3;
pub const E_OPEN_FAILED: i64 = -4;
pub const E_CLOSE_FAILED: i64 = -5;
pub const E_READ_FAILED: i64 = -6;
pub const E_WRITE_FAILED: i64 = -7;
pub const E_SEEK_FAILED: i64 = -8;
pub const E_SYNC_FAILED: i64 = -9;
pub const E_STAT_FAILED: i64 = -10;
pub const E_TRUNC_FAILED: i64 = -11;
pub const E_LOCK_FAILED: i64 = -12;
pub const E_UNLOCK_FAILED: i64 = -13;
pub const E_TRY_AGAIN: i64 = -14;
pub const E_MKDIR_FAILED: i64 = -15;
pub const E_RENAME_FAILED: i64 = -16;
pub const E_REMOVE_FAILED: i64 = -17;
pub const E_SYSCALL_FAILED: i64 = -18;
pub const E_LOAD_FAILED: i64 = -19;
pub const E_UNLOAD_FAILED: i64 = -20;
pub const E_EOF_DETECTED: i64 = -21;
pub const E_NO_MEMORY: i64 = -22;
pub const E_XLATE_FAILED: i64 = -23;
pub const E_INSUFFICIENT_BUFFER: i64 = -24;
pub const E_CONNECT_FAILED: i64 = -25;
pub const E_CONNECTION_RESET: i64 = -26;
pub const E_ACCEPT_FAILED: i64 = -27;
pub const E_BIND_FAILED: i64 = -28;
pub const E_BROKEN_PIPE: i64 = -29;
pub const E_TIMED_OUT: i64 = -30;
pub const E_SSL_ERROR: i64 = -31;

static DESCRIPTIONS: LazyLock<HashMap<i64, &'static str>> = LazyLock::new(|| {
    let mut descriptions = HashMap::new();
    descriptions.insert(E_OK, "no error");
    descriptions.insert(E_INVALID_ARG, "invalid argument");
    descriptions.insert(E_INVALID_STATE, "invalid state");
    descriptions.insert(E_NOT_FOUND, "not found");
    descriptions.insert(E_OPEN_FAILED, "open failed");
    descriptions.insert(E_CLOSE_FAILED, "close failed");
    descriptions.insert(E_READ_FAILED, "read failed");
    descriptions.insert(E_WRITE_FAILED, "write failed");
    descriptions.insert(E_SEEK_FAILED, "seek failed");
    descriptions.insert(E_SYNC_FAILED, "sync failed");
    descriptions.insert(E_STAT_FAILED, "stat failed");
    descriptions.insert(E_TRUNC_FAILED, "truncate failed");
    descriptions.insert(E_LOCK_FAILED, "lock failed");
    descriptions.insert(E_UNLOCK_FAILED, "unlock failed");
    descriptions.insert(E_TRY_AGAIN, "resource temporarily unavailable");
    descriptions.insert(E_MKDIR_FAILED, "mkdir failed");
    descriptions.insert(E_RENAME_FAILED, "rename failed");
    descriptions.insert(E_REMOVE_FAILED, "remove failed");
    descriptions.insert(E_SYSCALL_FAILED, "system call failed");
    descriptions.insert(E_LOAD_FAILED, "load failed");
    descriptions.insert(E_UNLOAD_FAILED, "unload failed");
    descriptions.insert(E_EOF_DETECTED, "end of file detected");
    descriptions.insert(E_NO_MEMORY, "out of memory");
    descriptions.insert(E_XLATE_FAILED, "translation failed");
    descriptions.insert(E_INSUFFICIENT_BUFFER, "insufficient buffer");
    descriptions.insert(E_CONNECT_FAILED, "connect failed");
    descriptions.insert(E_CONNECTION_RESET, "connection reset");
    descriptions.insert(E_ACCEPT_FAILED, "accept failed");
    descriptions.insert(E_BIND_FAILED, "bind failed");
    descriptions.insert(E_BROKEN_PIPE, "broken pipe");
    descriptions.insert(E_TIMED_OUT, "operation timed out");
    descriptions.insert(E_SSL_ERROR, "ssl error");
    descriptions
});

/// Returns the descriptive string for a native status code, if known.
pub fn error_string(code: i64) -> Option<&'static str> {
    DESCRIPTIONS.get(&code).copied()
}
