#![cfg(feature = "ffi")]

use libc::{c_int, c_longlong};

use sssp_engine::ffi::{
    sssp_add_edge, sssp_add_edge_directed, sssp_clear, sssp_engine_free, sssp_engine_new,
    sssp_get_all_distances, sssp_get_distance, sssp_get_path, sssp_init_graph, sssp_run,
    sssp_vertex_count, SsspEngine, SSSP_ERR_BUFFER_TOO_SMALL, SSSP_ERR_INVALID_SIZE,
    SSSP_ERR_NEGATIVE_WEIGHT, SSSP_ERR_NOT_COMPUTED, SSSP_ERR_NULL_POINTER,
    SSSP_ERR_OUT_OF_RANGE, SSSP_OK, SSSP_UNREACHABLE,
};

// Test helper that builds the classic five-vertex example through the C surface
fn canonical_handle() -> *mut SsspEngine {
    let handle = sssp_engine_new(5);
    assert!(!handle.is_null());

    let edges = [
        (1, 2, 7),
        (1, 4, 2),
        (2, 3, 1),
        (2, 4, 2),
        (3, 5, 4),
        (4, 2, 3),
        (4, 3, 8),
        (4, 5, 5),
        (5, 3, 5),
    ];
    for &(u, v, w) in &edges {
        assert_eq!(sssp_add_edge(handle, u, v, w), SSSP_OK);
    }

    handle
}

// Test the worked example end to end across the C boundary
#[test]
fn test_ffi_canonical_scenario() {
    let handle = canonical_handle();
    assert_eq!(sssp_vertex_count(handle), 5);
    assert_eq!(sssp_run(handle, 1), SSSP_OK);

    assert_eq!(sssp_get_distance(handle, 1), 0);
    assert_eq!(sssp_get_distance(handle, 2), 4);
    assert_eq!(sssp_get_distance(handle, 3), 5);
    assert_eq!(sssp_get_distance(handle, 4), 2);
    assert_eq!(sssp_get_distance(handle, 5), 7);

    let mut path = [0 as c_int; 8];
    let len = sssp_get_path(handle, 3, path.as_mut_ptr(), path.len() as c_int);
    assert_eq!(len, 4);
    assert_eq!(&path[..4], &[1, 4, 2, 3]);

    let len = sssp_get_path(handle, 5, path.as_mut_ptr(), path.len() as c_int);
    assert_eq!(len, 3);
    assert_eq!(&path[..3], &[1, 4, 5]);

    let mut distances = [0 as c_longlong; 5];
    assert_eq!(
        sssp_get_all_distances(handle, distances.as_mut_ptr(), distances.len() as c_int),
        SSSP_OK
    );
    assert_eq!(distances, [0, 4, 5, 2, 7]);

    sssp_engine_free(handle);
}

// Test that non-positive vertex counts never produce a handle
#[test]
fn test_ffi_rejects_invalid_engine_size() {
    assert!(sssp_engine_new(0).is_null());
    assert!(sssp_engine_new(-3).is_null());
}

// Test that each failure mode maps onto its status code
#[test]
fn test_ffi_status_codes() {
    let handle = canonical_handle();

    // Queries before any run
    assert_eq!(
        sssp_get_distance(handle, 2),
        SSSP_ERR_NOT_COMPUTED as c_longlong
    );
    let mut path = [0 as c_int; 8];
    assert_eq!(
        sssp_get_path(handle, 2, path.as_mut_ptr(), path.len() as c_int),
        SSSP_ERR_NOT_COMPUTED
    );

    // Range and weight violations
    assert_eq!(sssp_add_edge(handle, 0, 2, 1), SSSP_ERR_OUT_OF_RANGE);
    assert_eq!(sssp_add_edge(handle, 1, 6, 1), SSSP_ERR_OUT_OF_RANGE);
    assert_eq!(sssp_add_edge_directed(handle, -4, 2, 1), SSSP_ERR_OUT_OF_RANGE);
    assert_eq!(sssp_add_edge(handle, 1, 2, -7), SSSP_ERR_NEGATIVE_WEIGHT);
    assert_eq!(sssp_run(handle, 0), SSSP_ERR_OUT_OF_RANGE);
    assert_eq!(sssp_run(handle, 6), SSSP_ERR_OUT_OF_RANGE);

    // Buffer too small for the four-vertex path to 3
    assert_eq!(sssp_run(handle, 1), SSSP_OK);
    let mut small = [0 as c_int; 2];
    assert_eq!(
        sssp_get_path(handle, 3, small.as_mut_ptr(), small.len() as c_int),
        SSSP_ERR_BUFFER_TOO_SMALL
    );
    assert_eq!(small, [0, 0], "failed call must not write into the buffer");

    let mut short = [0 as c_longlong; 3];
    assert_eq!(
        sssp_get_all_distances(handle, short.as_mut_ptr(), short.len() as c_int),
        SSSP_ERR_BUFFER_TOO_SMALL
    );

    // Re-initialization with a bad size
    assert_eq!(sssp_init_graph(handle, 0), SSSP_ERR_INVALID_SIZE);
    assert_eq!(sssp_init_graph(handle, -1), SSSP_ERR_INVALID_SIZE);

    sssp_engine_free(handle);
}

// Test that unreachable vertices come back as the -1 sentinel everywhere
#[test]
fn test_ffi_unreachable_sentinel() {
    let handle = sssp_engine_new(3);
    assert_eq!(sssp_add_edge(handle, 1, 2, 4), SSSP_OK);
    assert_eq!(sssp_run(handle, 1), SSSP_OK);

    assert_eq!(sssp_get_distance(handle, 3), SSSP_UNREACHABLE);

    let mut path = [0 as c_int; 4];
    assert_eq!(
        sssp_get_path(handle, 3, path.as_mut_ptr(), path.len() as c_int),
        0,
        "an unreachable vertex has an empty path, not an error"
    );

    let mut distances = [0 as c_longlong; 3];
    assert_eq!(
        sssp_get_all_distances(handle, distances.as_mut_ptr(), distances.len() as c_int),
        SSSP_OK
    );
    assert_eq!(distances, [0, 4, SSSP_UNREACHABLE]);

    sssp_engine_free(handle);
}

// Test that every entry point survives null pointers
#[test]
fn test_ffi_null_pointer_handling() {
    let null = std::ptr::null_mut::<SsspEngine>();

    assert_eq!(sssp_init_graph(null, 5), SSSP_ERR_NULL_POINTER);
    assert_eq!(sssp_add_edge(null, 1, 2, 3), SSSP_ERR_NULL_POINTER);
    assert_eq!(sssp_add_edge_directed(null, 1, 2, 3), SSSP_ERR_NULL_POINTER);
    assert_eq!(sssp_run(null, 1), SSSP_ERR_NULL_POINTER);
    assert_eq!(
        sssp_get_distance(null, 1),
        SSSP_ERR_NULL_POINTER as c_longlong
    );
    assert_eq!(sssp_clear(null), SSSP_ERR_NULL_POINTER);
    assert_eq!(sssp_vertex_count(null), SSSP_ERR_NULL_POINTER);

    let mut path = [0 as c_int; 4];
    assert_eq!(
        sssp_get_path(null, 1, path.as_mut_ptr(), path.len() as c_int),
        SSSP_ERR_NULL_POINTER
    );

    // Valid handle, null output buffer
    let handle = canonical_handle();
    assert_eq!(sssp_run(handle, 1), SSSP_OK);
    assert_eq!(
        sssp_get_path(handle, 3, std::ptr::null_mut(), 8),
        SSSP_ERR_NULL_POINTER
    );
    assert_eq!(
        sssp_get_all_distances(handle, std::ptr::null_mut(), 8),
        SSSP_ERR_NULL_POINTER
    );
    sssp_engine_free(handle);

    // Freeing null is a no-op
    sssp_engine_free(null);
}

// Test re-initialization and clearing through the C surface
#[test]
fn test_ffi_init_and_clear() {
    let handle = canonical_handle();
    assert_eq!(sssp_run(handle, 1), SSSP_OK);

    // Clear keeps the vertex count but drops edges and tables
    assert_eq!(sssp_clear(handle), SSSP_OK);
    assert_eq!(sssp_vertex_count(handle), 5);
    assert_eq!(
        sssp_get_distance(handle, 2),
        SSSP_ERR_NOT_COMPUTED as c_longlong
    );

    // After clearing, every vertex except the source is unreachable
    assert_eq!(sssp_run(handle, 1), SSSP_OK);
    assert_eq!(sssp_get_distance(handle, 2), SSSP_UNREACHABLE);

    // Re-initialization replaces the graph wholesale
    assert_eq!(sssp_init_graph(handle, 2), SSSP_OK);
    assert_eq!(sssp_vertex_count(handle), 2);
    assert_eq!(
        sssp_get_distance(handle, 1),
        SSSP_ERR_NOT_COMPUTED as c_longlong
    );
    assert_eq!(sssp_get_distance(handle, 5), SSSP_ERR_OUT_OF_RANGE as c_longlong);

    sssp_engine_free(handle);
}

// Test that a directed arc added over FFI stays one-way
#[test]
fn test_ffi_directed_edge() {
    let handle = sssp_engine_new(2);
    assert_eq!(sssp_add_edge_directed(handle, 1, 2, 3), SSSP_OK);

    assert_eq!(sssp_run(handle, 2), SSSP_OK);
    assert_eq!(sssp_get_distance(handle, 1), SSSP_UNREACHABLE);

    assert_eq!(sssp_run(handle, 1), SSSP_OK);
    assert_eq!(sssp_get_distance(handle, 2), 3);

    sssp_engine_free(handle);
}
