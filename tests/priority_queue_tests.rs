use sssp_engine::data_structures::MinPriorityQueue;

#[test]
fn test_pop_returns_smallest_priority_first() {
    let mut queue: MinPriorityQueue<usize, i64> = MinPriorityQueue::new();
    queue.push(1, 30);
    queue.push(2, 10);
    queue.push(3, 20);

    assert_eq!(queue.pop(), Some((2, 10)));
    assert_eq!(queue.pop(), Some((3, 20)));
    assert_eq!(queue.pop(), Some((1, 30)));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_equal_priorities_pop_smaller_vertex() {
    let mut queue: MinPriorityQueue<usize, i64> = MinPriorityQueue::new();
    queue.push(9, 5);
    queue.push(2, 5);
    queue.push(4, 5);

    assert_eq!(queue.pop(), Some((2, 5)));
    assert_eq!(queue.pop(), Some((4, 5)));
    assert_eq!(queue.pop(), Some((9, 5)));
}

#[test]
fn test_duplicate_vertices_surface_in_priority_order() {
    // Lazy deletion pushes a fresh entry per improvement, so the same vertex
    // can sit in the queue several times
    let mut queue: MinPriorityQueue<usize, i64> = MinPriorityQueue::new();
    queue.push(7, 40);
    queue.push(7, 15);
    queue.push(7, 25);

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.pop(), Some((7, 15)));
    assert_eq!(queue.pop(), Some((7, 25)));
    assert_eq!(queue.pop(), Some((7, 40)));
}

#[test]
fn test_empty_and_len() {
    let mut queue: MinPriorityQueue<usize, i64> = MinPriorityQueue::with_capacity(8);
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.pop(), None);

    queue.push(1, 1);
    assert!(!queue.is_empty());
    assert_eq!(queue.len(), 1);

    queue.pop();
    assert!(queue.is_empty());
}

#[test]
fn test_interleaved_push_and_pop() {
    let mut queue: MinPriorityQueue<usize, i64> = MinPriorityQueue::new();
    queue.push(1, 10);
    queue.push(2, 5);

    assert_eq!(queue.pop(), Some((2, 5)));

    queue.push(3, 1);
    queue.push(4, 20);

    assert_eq!(queue.pop(), Some((3, 1)));
    assert_eq!(queue.pop(), Some((1, 10)));
    assert_eq!(queue.pop(), Some((4, 20)));
    assert_eq!(queue.pop(), None);
}
