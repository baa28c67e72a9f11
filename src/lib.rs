use core::ffi::c_int;
use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    ptr, slice, str,
};

pub mod utilities;
use utilities::{
    inspect::{InspectOptions, inspect as inspect_rs},
    minimum_bytes::{minimum_bytes, padded_length},
    parse_value::parse_or_zero,
    structs::{ByteOrder, InputFormat, WordWidth},
    to_bytes::to_bytes,
};

const OK: c_int = 0;
const ERR_INVALID_ARGS: c_int = 1;
const ERR_PANIC: c_int = 2;
const ERR_ENCODE: c_int = 4;

#[repr(C)]
pub struct Buf {
    pub ptr: *mut u8,
    pub len: usize,
}

/// View options as the JS side passes them: integer discriminants, any
/// out-of-range value is an argument error. A null pointer means defaults.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CViewOptions {
    /// 0 = decimal, 1 = hex
    pub format: c_int,
    /// 0 = little, 1 = big
    pub order: c_int,
    /// 16 | 32 | 64
    pub width: c_int,
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn alloc(size: usize) -> *mut u8 {
    if size == 0 {
        return core::ptr::null_mut();
    }
    let mut v = Vec::<u8>::with_capacity(size);
    let p = v.as_mut_ptr();
    core::mem::forget(v);
    p
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_(ptr_raw: *mut u8, size: usize) {
    if !ptr_raw.is_null() {
        let _ = unsafe { Vec::<u8>::from_raw_parts(ptr_raw, size, size) };
    }
}

/// Full view model for one input tuple, as JSON.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn inspect(
    input_ptr: *const u8,
    input_len: usize,
    options: *const CViewOptions,
    out_json: *mut Buf,
) -> c_int {
    if input_ptr.is_null() || out_json.is_null() {
        return ERR_INVALID_ARGS;
    }
    let res = catch_unwind(AssertUnwindSafe(|| -> Result<(), c_int> {
        let raw = unsafe { slice::from_raw_parts(input_ptr, input_len) };
        let input = str::from_utf8(raw).map_err(|_| ERR_INVALID_ARGS)?;
        let opts = build_view_options(options).ok_or(ERR_INVALID_ARGS)?;
        let view = inspect_rs(input, Some(opts));
        let s = serde_json::to_string(&view).map_err(|_| ERR_ENCODE)?;
        write_buf(out_json, s.into_bytes().into_boxed_slice());
        Ok(())
    }));
    match res {
        Ok(Ok(())) => OK,
        Ok(Err(code)) => code,
        Err(_) => ERR_PANIC,
    }
}

/// Raw padded byte sequence for one input tuple, for renderers that draw the
/// buffer directly instead of going through the JSON view.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn encode_value(
    input_ptr: *const u8,
    input_len: usize,
    options: *const CViewOptions,
    out_bytes: *mut Buf,
) -> c_int {
    if input_ptr.is_null() || out_bytes.is_null() {
        return ERR_INVALID_ARGS;
    }
    let res = catch_unwind(AssertUnwindSafe(|| -> Result<(), c_int> {
        let raw = unsafe { slice::from_raw_parts(input_ptr, input_len) };
        let input = str::from_utf8(raw).map_err(|_| ERR_INVALID_ARGS)?;
        let opts = build_view_options(options).ok_or(ERR_INVALID_ARGS)?;
        let value = parse_or_zero(input, opts.format);
        let count = padded_length(minimum_bytes(&value), opts.width);
        let bytes = to_bytes(&value, count, opts.order);
        write_buf(out_bytes, bytes.into_boxed_slice());
        Ok(())
    }));
    match res {
        Ok(Ok(())) => OK,
        Ok(Err(code)) => code,
        Err(_) => ERR_PANIC,
    }
}

fn build_view_options(options: *const CViewOptions) -> Option<InspectOptions> {
    if options.is_null() {
        return Some(InspectOptions::default());
    }
    let o = unsafe { *options };
    let format = match o.format {
        0 => InputFormat::Decimal,
        1 => InputFormat::Hex,
        _ => return None,
    };
    let order = match o.order {
        0 => ByteOrder::Little,
        1 => ByteOrder::Big,
        _ => return None,
    };
    let width = WordWidth::from_bits(usize::try_from(o.width).ok()?)?;
    Some(InspectOptions {
        format,
        order,
        width,
    })
}

fn write_buf(out: *mut Buf, bytes: Box<[u8]>) {
    let len = bytes.len();
    let ptr_bytes = Box::into_raw(bytes) as *mut u8;
    unsafe {
        ptr::write_unaligned(
            out,
            Buf {
                ptr: ptr_bytes,
                len,
            },
        )
    };
}
