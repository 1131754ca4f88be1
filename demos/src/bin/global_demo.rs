// SPDX-License-Identifier: Apache-2.0

// Example demonstrating the non-reentrant global forms over a static buffer

use picowrite::{global, Format, WriteError};

static mut BUF: [u8; 128] = [0; 128];

fn main() -> Result<(), WriteError> {
    // Single-threaded program: the static is not aliased anywhere else
    let buf = unsafe { &mut *core::ptr::addr_of_mut!(BUF) };
    global::init(buf, Format::Normal);

    global::open_object()?;
    global::write_key("uptime_s")?;
    global::write_int(86_400)?;
    global::write_key("ok")?;
    global::write_bool(true)?;
    global::close()?;
    let len = global::finish()?;

    // The writer released the buffer at finish, so reading it is fine here
    let out = unsafe { &*core::ptr::addr_of!(BUF) };
    println!("{} bytes: {}", len, String::from_utf8_lossy(&out[..len]));
    Ok(())
}
