//! In-process stand-in for a GL library.

use std::collections::HashMap;
use std::ffi::{c_void, CStr};
use std::ptr::NonNull;
use std::sync::Mutex;

use crate::SymbolSource;

pub(crate) extern "system" fn fake_add(a: i32, b: i32) -> i32 {
    a + b
}

pub(crate) extern "system" fn fake_get_error() -> u32 {
    0x0502
}

/// Exports a fixed set of functions and records every lookup.
pub(crate) struct FakeGl {
    exports: HashMap<&'static str, usize>,
    lookups: Mutex<Vec<String>>,
}

impl FakeGl {
    pub(crate) fn new() -> Self {
        let mut exports = HashMap::new();
        exports.insert("glAddEXT", fake_add as usize);
        exports.insert("glGetError", fake_get_error as usize);
        Self {
            exports,
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn lookups_of(&self, name: &str) -> usize {
        self.lookups
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.as_str() == name)
            .count()
    }
}

impl SymbolSource for FakeGl {
    fn lookup(&self, name: &CStr) -> Option<NonNull<c_void>> {
        let name = name.to_str().ok()?;
        self.lookups.lock().unwrap().push(name.to_owned());
        self.exports
            .get(name)
            .and_then(|&address| NonNull::new(address as *mut c_void))
    }

    fn describe(&self) -> &str {
        "fake GL"
    }
}
