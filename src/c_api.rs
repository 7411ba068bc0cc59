use std::ffi::{CStr, c_char};

use crate::{body::Body, config::Config, render::DrawRequest, simulation::Simulation};

/// Creates the built-in Earth–Moon simulation.
#[unsafe(no_mangle)]
pub extern "C" fn Simulation_Create() -> *mut Simulation {
    match Config::earth_moon().and_then(|config| config.build()) {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(err) => {
            tracing::error!(%err, "failed to build built-in scenario");
            std::ptr::null_mut()
        }
    }
}

/// Creates a simulation from a NUL-terminated TOML scenario.
/// Returns null if the text is not valid UTF-8 or the scenario is rejected.
///
/// # Safety
/// `toml` must be null or point to a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_CreateFromToml(toml: *const c_char) -> *mut Simulation {
    if toml.is_null() {
        return std::ptr::null_mut();
    }
    let text = match unsafe { CStr::from_ptr(toml) }.to_str() {
        Ok(text) => text,
        Err(err) => {
            tracing::error!(%err, "scenario is not valid UTF-8");
            return std::ptr::null_mut();
        }
    };

    match Config::from_toml(text).and_then(|config| config.build()) {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(err) => {
            tracing::error!(%err, "rejected scenario");
            std::ptr::null_mut()
        }
    }
}

/// # Safety
/// `handle` must be null or come from one of the create functions, and must
/// not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_Destroy(handle: *mut Simulation) {
    if !handle.is_null() {
        unsafe { drop(Box::from_raw(handle)) };
    }
}

/// # Safety
/// `handle` must be null or a live simulation handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_Step(handle: *mut Simulation) {
    if let Some(sim) = unsafe { handle.as_mut() } {
        sim.step();
    }
}

/// # Safety
/// `handle` must be null or a live simulation handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_GetBodyCount(handle: *const Simulation) -> usize {
    unsafe { handle.as_ref() }.map_or(0, |sim| sim.bodies().len())
}

/// The returned pointer is valid until the next step or destroy.
///
/// # Safety
/// `handle` must be null or a live simulation handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_GetBodies(handle: *const Simulation) -> *const Body {
    unsafe { handle.as_ref() }.map_or(std::ptr::null(), |sim| sim.bodies().as_ptr())
}

/// # Safety
/// `handle` must be null or a live simulation handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_GetElapsedDays(handle: *const Simulation) -> f64 {
    unsafe { handle.as_ref() }.map_or(0.0, |sim| sim.elapsed_days())
}

/// Writes up to `capacity` draw requests describing the current body
/// positions into `out`, which may be uninitialized. Returns the number
/// written.
///
/// # Safety
/// `handle` must be null or a live simulation handle; `out` must be null or
/// valid for `capacity` writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Simulation_GetDrawRequests(
    handle: *const Simulation,
    out: *mut DrawRequest,
    capacity: usize,
) -> usize {
    let Some(sim) = (unsafe { handle.as_ref() }) else {
        return 0;
    };
    if out.is_null() {
        return 0;
    }

    let mut written = 0;
    for body in sim.bodies().iter().take(capacity) {
        unsafe { out.add(written).write(DrawRequest::for_body(body)) };
        written += 1;
    }
    written
}
