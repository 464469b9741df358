//! C ABI for driving the engine across a foreign-function boundary.
//!
//! Only primitive integers and caller-allocated buffers cross this boundary.
//! Vertex ids and edge weights are `c_int`; distances come back as
//! `c_longlong` so summed weights cannot overflow the return type. Every
//! entry point reports failures synchronously through the `SSSP_*` status
//! codes, all of which are `< -1`, so for [`sssp_get_distance`] the value,
//! the [`SSSP_UNREACHABLE`] sentinel (`-1`, the single convention used by
//! the whole surface) and the error range stay disjoint. Output buffers are
//! never truncated: a too-small buffer fails with
//! [`SSSP_ERR_BUFFER_TOO_SMALL`] and nothing is written.
//!
//! A handle owns one engine instance; there is no process-wide state. Free
//! handles with [`sssp_engine_free`] only.

use libc::{c_int, c_longlong};

use crate::engine::ShortestPathEngine;
use crate::Error;

/// Call completed
pub const SSSP_OK: c_int = 0;
/// Queried vertex exists but no path from the source reaches it
pub const SSSP_UNREACHABLE: c_longlong = -1;
/// Vertex count was zero or negative
pub const SSSP_ERR_INVALID_SIZE: c_int = -2;
/// A vertex id fell outside `[1, V]`
pub const SSSP_ERR_OUT_OF_RANGE: c_int = -3;
/// An edge weight was negative
pub const SSSP_ERR_NEGATIVE_WEIGHT: c_int = -4;
/// A query was issued before any completed run
pub const SSSP_ERR_NOT_COMPUTED: c_int = -5;
/// The caller buffer cannot hold the result
pub const SSSP_ERR_BUFFER_TOO_SMALL: c_int = -6;
/// A required pointer argument was null
pub const SSSP_ERR_NULL_POINTER: c_int = -7;

/// Opaque engine handle passed to every entry point.
#[repr(C)]
pub struct SsspEngine {
    engine: ShortestPathEngine<i64>,
}

fn status(err: &Error) -> c_int {
    match err {
        Error::InvalidSize(_) => SSSP_ERR_INVALID_SIZE,
        Error::OutOfRange(_, _) => SSSP_ERR_OUT_OF_RANGE,
        Error::NegativeWeight(_) => SSSP_ERR_NEGATIVE_WEIGHT,
        Error::NotComputed => SSSP_ERR_NOT_COMPUTED,
        Error::BufferTooSmall(_, _) => SSSP_ERR_BUFFER_TOO_SMALL,
    }
}

/// Maps a C vertex argument onto the engine's id space. Anything below 1
/// becomes 0, which is out of range for every graph, so the engine reports
/// it as such.
fn vertex_arg(v: c_int) -> usize {
    if v < 1 {
        0
    } else {
        v as usize
    }
}

fn engine_ref<'a>(handle: *const SsspEngine) -> Option<&'a ShortestPathEngine<i64>> {
    if handle.is_null() {
        None
    } else {
        Some(unsafe { &(*handle).engine })
    }
}

fn engine_mut<'a>(handle: *mut SsspEngine) -> Option<&'a mut ShortestPathEngine<i64>> {
    if handle.is_null() {
        None
    } else {
        Some(unsafe { &mut (*handle).engine })
    }
}

/// Creates an engine over a graph with `vertex_count` vertices.
///
/// Returns null when `vertex_count <= 0`.
#[no_mangle]
pub extern "C" fn sssp_engine_new(vertex_count: c_int) -> *mut SsspEngine {
    if vertex_count <= 0 {
        return std::ptr::null_mut();
    }
    match ShortestPathEngine::new(vertex_count as usize) {
        Ok(engine) => Box::into_raw(Box::new(SsspEngine { engine })),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Frees a handle created by [`sssp_engine_new`]. Null is a no-op.
#[no_mangle]
pub extern "C" fn sssp_engine_free(handle: *mut SsspEngine) {
    if !handle.is_null() {
        unsafe {
            drop(Box::from_raw(handle));
        }
    }
}

/// Replaces the graph with an empty one of `vertex_count` vertices,
/// discarding edges and stored tables.
#[no_mangle]
pub extern "C" fn sssp_init_graph(handle: *mut SsspEngine, vertex_count: c_int) -> c_int {
    let Some(engine) = engine_mut(handle) else {
        return SSSP_ERR_NULL_POINTER;
    };
    if vertex_count <= 0 {
        return SSSP_ERR_INVALID_SIZE;
    }
    match engine.init_graph(vertex_count as usize) {
        Ok(()) => SSSP_OK,
        Err(err) => status(&err),
    }
}

/// Inserts the undirected edge `u <-> v` (both arcs) with weight `w`.
#[no_mangle]
pub extern "C" fn sssp_add_edge(handle: *mut SsspEngine, u: c_int, v: c_int, w: c_int) -> c_int {
    let Some(engine) = engine_mut(handle) else {
        return SSSP_ERR_NULL_POINTER;
    };
    match engine.add_edge_undirected(vertex_arg(u), vertex_arg(v), w as i64) {
        Ok(()) => SSSP_OK,
        Err(err) => status(&err),
    }
}

/// Inserts the directed arc `u -> v` with weight `w`.
#[no_mangle]
pub extern "C" fn sssp_add_edge_directed(
    handle: *mut SsspEngine,
    u: c_int,
    v: c_int,
    w: c_int,
) -> c_int {
    let Some(engine) = engine_mut(handle) else {
        return SSSP_ERR_NULL_POINTER;
    };
    match engine.add_edge_directed(vertex_arg(u), vertex_arg(v), w as i64) {
        Ok(()) => SSSP_OK,
        Err(err) => status(&err),
    }
}

/// Runs the engine from `source`, computing and storing fresh tables.
#[no_mangle]
pub extern "C" fn sssp_run(handle: *mut SsspEngine, source: c_int) -> c_int {
    let Some(engine) = engine_mut(handle) else {
        return SSSP_ERR_NULL_POINTER;
    };
    match engine.run(vertex_arg(source)) {
        Ok(()) => SSSP_OK,
        Err(err) => status(&err),
    }
}

/// Returns the shortest distance to `dest`, [`SSSP_UNREACHABLE`] when no
/// path exists, or a status code (`< -1`) on error.
#[no_mangle]
pub extern "C" fn sssp_get_distance(handle: *const SsspEngine, dest: c_int) -> c_longlong {
    let Some(engine) = engine_ref(handle) else {
        return SSSP_ERR_NULL_POINTER as c_longlong;
    };
    match engine.distance(vertex_arg(dest)) {
        Ok(Some(distance)) => distance as c_longlong,
        Ok(None) => SSSP_UNREACHABLE,
        Err(err) => status(&err) as c_longlong,
    }
}

/// Writes the source-to-`dest` path into `buffer` and returns its length.
///
/// An unreachable `dest` writes nothing and returns 0. When the path does
/// not fit into `capacity` slots the call fails with
/// [`SSSP_ERR_BUFFER_TOO_SMALL`] and the buffer is untouched; a capacity of
/// `V` always suffices. Negative status codes report the other failures.
#[no_mangle]
pub extern "C" fn sssp_get_path(
    handle: *const SsspEngine,
    dest: c_int,
    buffer: *mut c_int,
    capacity: c_int,
) -> c_int {
    let Some(engine) = engine_ref(handle) else {
        return SSSP_ERR_NULL_POINTER;
    };
    if buffer.is_null() {
        return SSSP_ERR_NULL_POINTER;
    }

    let path = match engine.path(vertex_arg(dest)) {
        Ok(path) => path,
        Err(err) => return status(&err),
    };

    let capacity = capacity.max(0) as usize;
    if path.len() > capacity {
        return SSSP_ERR_BUFFER_TOO_SMALL;
    }

    let out = unsafe { std::slice::from_raw_parts_mut(buffer, path.len()) };
    for (slot, vertex) in out.iter_mut().zip(&path) {
        *slot = *vertex as c_int;
    }
    path.len() as c_int
}

/// Fills `buffer` with the dense distance table: entry `i` is the distance
/// of vertex `i + 1`, [`SSSP_UNREACHABLE`] for unreached vertices.
///
/// `len` must be at least the vertex count or the call fails with
/// [`SSSP_ERR_BUFFER_TOO_SMALL`] and writes nothing.
#[no_mangle]
pub extern "C" fn sssp_get_all_distances(
    handle: *const SsspEngine,
    buffer: *mut c_longlong,
    len: c_int,
) -> c_int {
    let Some(engine) = engine_ref(handle) else {
        return SSSP_ERR_NULL_POINTER;
    };
    if buffer.is_null() {
        return SSSP_ERR_NULL_POINTER;
    }

    let distances = match engine.all_distances() {
        Ok(distances) => distances,
        Err(err) => return status(&err),
    };

    if (len.max(0) as usize) < distances.len() {
        return SSSP_ERR_BUFFER_TOO_SMALL;
    }

    let out = unsafe { std::slice::from_raw_parts_mut(buffer, distances.len()) };
    for (slot, distance) in out.iter_mut().zip(&distances) {
        *slot = match distance {
            Some(d) => *d as c_longlong,
            None => SSSP_UNREACHABLE,
        };
    }
    SSSP_OK
}

/// Removes every edge while keeping the vertex count; stored tables are
/// dropped, so queries fail with [`SSSP_ERR_NOT_COMPUTED`] until the next
/// run.
#[no_mangle]
pub extern "C" fn sssp_clear(handle: *mut SsspEngine) -> c_int {
    let Some(engine) = engine_mut(handle) else {
        return SSSP_ERR_NULL_POINTER;
    };
    engine.clear();
    SSSP_OK
}

/// Returns the vertex count of the handle's graph (always `>= 1`), or a
/// negative status code.
#[no_mangle]
pub extern "C" fn sssp_vertex_count(handle: *const SsspEngine) -> c_int {
    let Some(engine) = engine_ref(handle) else {
        return SSSP_ERR_NULL_POINTER;
    };
    engine.vertex_count() as c_int
}
