//! Drives the generated stubs against a fake driver that records the native
//! arguments it receives.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::{c_void, CStr};
use std::ptr::NonNull;
use std::sync::Once;

use glshim_core::{Args, Value};
use glshim_loader::{load_core_bindings_from, Registry, SymbolSource};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    BlendFunc(u32, u32),
    ColorMask([u8; 4]),
    ClearColor([f32; 4]),
    Viewport(i32, i32, i32, i32),
    TexImage2D {
        target: u32,
        level: i32,
        internal_format: i32,
        size: (i32, i32),
        border: i32,
        format: u32,
        kind: u32,
        pixels: usize,
    },
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
}

fn record(call: Call) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

fn take_calls() -> Vec<Call> {
    CALLS.with(|calls| calls.borrow_mut().drain(..).collect())
}

extern "system" fn blend_func(sfactor: u32, dfactor: u32) {
    record(Call::BlendFunc(sfactor, dfactor));
}

extern "system" fn color_mask(r: u8, g: u8, b: u8, a: u8) {
    record(Call::ColorMask([r, g, b, a]));
}

extern "system" fn clear_color(r: f32, g: f32, b: f32, a: f32) {
    record(Call::ClearColor([r, g, b, a]));
}

extern "system" fn viewport(x: i32, y: i32, width: i32, height: i32) {
    record(Call::Viewport(x, y, width, height));
}

#[allow(clippy::too_many_arguments)]
extern "system" fn tex_image_2d(
    target: u32,
    level: i32,
    internal_format: i32,
    width: i32,
    height: i32,
    border: i32,
    format: u32,
    kind: u32,
    pixels: *const c_void,
) {
    record(Call::TexImage2D {
        target,
        level,
        internal_format,
        size: (width, height),
        border,
        format,
        kind,
        pixels: pixels as usize,
    });
}

extern "system" fn is_enabled(cap: u32) -> u8 {
    (cap == gl::BLEND) as u8
}

extern "system" fn create_shader(kind: u32) -> u32 {
    kind - gl::FRAGMENT_SHADER + 7
}

struct FakeDriver {
    exports: HashMap<&'static str, usize>,
}

impl FakeDriver {
    fn new() -> Self {
        let exports = HashMap::from([
            ("glBlendFunc", blend_func as usize),
            ("glColorMask", color_mask as usize),
            ("glClearColor", clear_color as usize),
            ("glViewport", viewport as usize),
            ("glTexImage2D", tex_image_2d as usize),
            ("glIsEnabled", is_enabled as usize),
            ("glCreateShader", create_shader as usize),
        ]);
        Self { exports }
    }
}

impl SymbolSource for FakeDriver {
    fn lookup(&self, name: &CStr) -> Option<NonNull<c_void>> {
        let address = *self.exports.get(name.to_str().ok()?)?;
        NonNull::new(address as *mut c_void)
    }

    fn describe(&self) -> &str {
        "fake driver"
    }
}

fn load_fake_driver() {
    static LOAD: Once = Once::new();
    LOAD.call_once(|| {
        let registry = Registry::new(FakeDriver::new());
        assert!(load_core_bindings_from(&registry) >= 7);
    });
}

fn enum_value(e: u32) -> Value {
    Value::int(e as isize)
}

#[test]
fn enums_reach_the_driver_unchanged() {
    load_fake_driver();
    let values = [enum_value(gl::SRC_ALPHA), enum_value(gl::ONE_MINUS_SRC_ALPHA)];
    let ret = glshim_gl::call("glBlendFunc", &Args::new(&values)).unwrap();

    assert_eq!(ret, Value::UNIT);
    assert_eq!(
        take_calls(),
        vec![Call::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA)]
    );
}

#[test]
fn booleans_are_normalised_to_gl_true() {
    load_fake_driver();
    let values = [Value::TRUE, Value::FALSE, Value::int(5), Value::int(-1)];
    glshim_gl::call("glColorMask", &Args::new(&values)).unwrap();

    assert_eq!(take_calls(), vec![Call::ColorMask([1, 0, 1, 1])]);
}

#[test]
fn doubles_narrow_to_floats() {
    load_fake_driver();
    let values = [
        Value::Double(0.25),
        Value::Double(0.5),
        Value::Double(1.0),
        Value::Double(1.0 / 3.0),
    ];
    glshim_gl::call("glClearColor", &Args::new(&values)).unwrap();

    assert_eq!(
        take_calls(),
        vec![Call::ClearColor([0.25, 0.5, 1.0, (1.0f64 / 3.0) as f32])]
    );
}

#[test]
fn negative_integers_keep_their_sign() {
    load_fake_driver();
    let values = [Value::int(-10), Value::int(-20), Value::int(640), Value::int(480)];
    glshim_gl::call("glViewport", &Args::new(&values)).unwrap();

    assert_eq!(take_calls(), vec![Call::Viewport(-10, -20, 640, 480)]);
}

#[test]
fn slow_call_forwards_all_nine_arguments() {
    load_fake_driver();
    let mut pixels = [0u8; 16];
    let values = [
        enum_value(gl::TEXTURE_2D),
        Value::int(1),
        Value::int(gl::RGBA8 as isize),
        Value::int(2),
        Value::int(2),
        Value::int(0),
        enum_value(gl::RGBA),
        enum_value(gl::UNSIGNED_BYTE),
        Value::Pointer(pixels.as_mut_ptr().cast()),
    ];
    let args = unsafe { Args::from_raw(values.as_ptr(), values.len()) };
    glshim_gl::call("glTexImage2D", &args).unwrap();

    assert_eq!(
        take_calls(),
        vec![Call::TexImage2D {
            target: gl::TEXTURE_2D,
            level: 1,
            internal_format: gl::RGBA8 as i32,
            size: (2, 2),
            border: 0,
            format: gl::RGBA,
            kind: gl::UNSIGNED_BYTE,
            pixels: pixels.as_ptr() as usize,
        }]
    );
}

#[test]
fn return_values_are_marshalled_back() {
    load_fake_driver();
    let blend = [enum_value(gl::BLEND)];
    let depth = [enum_value(gl::DEPTH_TEST)];
    assert_eq!(
        glshim_gl::call("glIsEnabled", &Args::new(&blend)).unwrap(),
        Value::TRUE
    );
    assert_eq!(
        glshim_gl::call("glIsEnabled", &Args::new(&depth)).unwrap(),
        Value::FALSE
    );

    let shader = [enum_value(gl::FRAGMENT_SHADER)];
    let id = glshim_gl::call("glCreateShader", &Args::new(&shader)).unwrap();
    assert_eq!(id.as_int(), Some(7));
}

#[test]
fn entry_points_missing_from_the_driver_still_error() {
    load_fake_driver();
    let err = glshim_gl::call("glFlush", &Args::new(&[])).unwrap_err();
    assert_eq!(
        err.downcast_ref::<glshim_gl::NotLoaded>(),
        Some(&glshim_gl::NotLoaded("glFlush"))
    );
}
