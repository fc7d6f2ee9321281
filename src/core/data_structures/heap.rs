/*!
 * Binary Max-Heap
 * Array-backed heap ordered by an injected comparator
 *
 * The comparator is consulted on every sift step, so the heap always reads
 * keys as they are at comparison time. Nothing re-sorts an element whose key
 * changes while it sits in the heap.
 */

/// Strict "less than" ordering used to build a max-heap
///
/// `less(a, b)` returning true means `b` should be closer to the root.
pub trait Compare<T> {
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Max-heap over a complete binary tree stored in a `Vec`
///
/// Children of index `i` live at `2i + 1` and `2i + 2`.
#[derive(Debug, Clone)]
pub struct BinaryMaxHeap<T, C> {
    data: Vec<T>,
    compare: C,
}

impl<T, C: Compare<T>> BinaryMaxHeap<T, C> {
    pub fn new(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    pub fn with_capacity(compare: C, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            compare,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Insert at the end and sift up. O(log n)
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    /// Greatest element, if any. O(1)
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Remove the greatest element. O(log n)
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }
        top
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Backing array in heap order (root first, not sorted)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn comparator(&self) -> &C {
        &self.compare
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.compare.less(&self.data[parent], &self.data[pos]) {
                break;
            }
            self.data.swap(parent, pos);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.compare.less(&self.data[left], &self.data[right]) {
                right
            } else {
                left
            };

            if !self.compare.less(&self.data[pos], &self.data[child]) {
                break;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryMaxHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
