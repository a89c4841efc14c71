/*!
 * Identifier allocation for document construction.
 *
 * One allocator is seeded per pipeline invocation; every Element and Line
 * draws the next value, so identifiers are strictly increasing in emission
 * order and two IDs can be compared to recover production order without
 * re-scanning the tree. IDs are not unique across separate invocations;
 * callers needing cross-run uniqueness must namespace externally.
 */

/// Monotonic identifier allocator
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator seeded at 1
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Draw the next identifier
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
