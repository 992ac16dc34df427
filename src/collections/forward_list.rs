use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::mem;
use core::ptr;

use alloc::boxed::Box;

/// an owning, singly linked list with O(1) front insertion/removal and
/// cursor-based insertion/removal immediately after any position
///
/// the chain starts at a heap-allocated anchor node that precedes the first
/// element and exists for the whole life of the list, so splicing at the
/// front needs no special case. every data node is exclusively owned by its
/// predecessor.
///
/// the list is not safe for concurrent mutation; sharing one across threads
/// requires external synchronization.
pub struct ForwardList<T> {
    /// the before-front anchor node; always present, never holds a value
    anchor: *mut Node<T>,
    /// the number of data nodes in the chain
    len: usize,
}

impl<T> ForwardList<T> {
    /// create a new, empty ForwardList
    pub fn new() -> Self {
        let anchor = Box::into_raw(Box::new(Node::Anchor {
            next: ptr::null_mut(),
        }));
        Self { anchor, len: 0 }
    }

    /// get the length of the list, not including the anchor node
    pub fn len(&self) -> usize {
        self.len
    }

    /// returns true if the length of the list is 0
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// immutably borrow the first element, or None if the list is empty
    pub fn front(&self) -> Option<&T> {
        // SAFETY: the anchor is alive for as long as the list is
        let head = unsafe { (*self.anchor).next() };
        if head.is_null() {
            None
        } else {
            // SAFETY: non-null links always point at live data nodes
            Some(unsafe { (*head).value() })
        }
    }

    /// mutably borrow the first element, or None if the list is empty
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the anchor is alive for as long as the list is
        let head = unsafe { (*self.anchor).next() };
        if head.is_null() {
            None
        } else {
            // SAFETY: non-null links always point at live data nodes
            Some(unsafe { (*head).value_mut() })
        }
    }

    /// push a value onto the front of the list
    ///
    /// existing cursor and iterator positions are unaffected
    pub fn push_front(&mut self, value: T) {
        let anchor = self.anchor;
        // SAFETY: the anchor is alive for as long as the list is
        unsafe {
            self.link_after(anchor, value);
        }
    }

    /// pop the first value off the list, or None if the list is empty
    pub fn pop_front(&mut self) -> Option<T> {
        let anchor = self.anchor;
        // SAFETY: the anchor is alive for as long as the list is
        unsafe { self.unlink_after(anchor) }
    }

    /// drop every element, leaving the list empty
    ///
    /// the chain is freed iteratively so teardown never recurses, no matter
    /// how long the list is
    pub fn clear(&mut self) {
        // SAFETY: the anchor is alive for as long as the list is
        let mut curr = unsafe { (*self.anchor).next() };
        unsafe { (*self.anchor).set_next(ptr::null_mut()) };
        while !curr.is_null() {
            // SAFETY: every data node was allocated via Box::into_raw and is
            // reachable exactly once, so reclaiming it here is the sole free
            let node = unsafe { Box::from_raw(curr) };
            curr = node.next();
            self.len -= 1;
        }
        debug_assert_eq!(self.len, 0);
    }

    /// return an immutable iterator over the elements, front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            _list: self,
            // SAFETY: the anchor is alive for as long as the list is
            curr: unsafe { (*self.anchor).next() },
            remaining: self.len,
        }
    }

    /// return a mutable iterator over the elements, front to back
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        // SAFETY: the anchor is alive for as long as the list is
        let curr = unsafe { (*self.anchor).next() };
        let remaining = self.len;
        IterMut {
            _list: self,
            curr,
            remaining,
        }
    }

    /// return a read-only cursor positioned before the first element
    ///
    /// the cursor sits on the anchor, so `current` is None but inserting or
    /// removing "after" it through the mutable counterpart affects the front
    pub fn cursor_before_front(&self) -> Cursor<'_, T> {
        Cursor {
            _list: self,
            curr: self.anchor,
        }
    }

    /// return a read-only cursor positioned on the first element, or past
    /// the end if the list is empty
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor {
            _list: self,
            // SAFETY: the anchor is alive for as long as the list is
            curr: unsafe { (*self.anchor).next() },
        }
    }

    /// return a mutable cursor positioned before the first element
    pub fn cursor_before_front_mut(&mut self) -> CursorMut<'_, T> {
        let curr = self.anchor;
        CursorMut { list: self, curr }
    }

    /// return a mutable cursor positioned on the first element, or past the
    /// end if the list is empty
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        // SAFETY: the anchor is alive for as long as the list is
        let curr = unsafe { (*self.anchor).next() };
        CursorMut { list: self, curr }
    }

    /// allocate a node for `value` and splice it directly after `pos`,
    /// returning the new node
    ///
    /// all structural growth funnels through here so the len bookkeeping
    /// lives in one place
    ///
    /// # Safety
    /// `pos` must point at a live node of this list (the anchor or data)
    unsafe fn link_after(&mut self, pos: *mut Node<T>, value: T) -> *mut Node<T> {
        debug_assert!(!pos.is_null());
        let node = Box::into_raw(Box::new(Node::Data {
            value,
            next: (*pos).next(),
        }));
        (*pos).set_next(node);
        self.len += 1;
        node
    }

    /// unlink and free the node directly after `pos`, returning its value,
    /// or None if `pos` is the last node in the chain
    ///
    /// all structural shrinkage funnels through here
    ///
    /// # Safety
    /// `pos` must point at a live node of this list (the anchor or data)
    unsafe fn unlink_after(&mut self, pos: *mut Node<T>) -> Option<T> {
        debug_assert!(!pos.is_null());
        let victim = (*pos).next();
        if victim.is_null() {
            return None;
        }
        (*pos).set_next((*victim).next());
        self.len -= 1;
        Some(Box::from_raw(victim).into_value())
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the anchor was allocated in `new` and is freed exactly once
        unsafe { drop(Box::from_raw(self.anchor)) };
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::new();
        list.extend(self.iter().cloned());
        list
    }

    /// the copy is built completely before `self` is touched, so a panicking
    /// element clone leaves `self` unmodified
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        mem::swap(self, &mut fresh);
    }
}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.anchor;
        // SAFETY: `tail` starts at the anchor and only ever follows links of
        // the owned chain, so it always points at a live node
        unsafe {
            while !(*tail).next().is_null() {
                tail = (*tail).next();
            }
            for value in iter {
                tail = self.link_after(tail, value);
            }
        }
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // length first so [a] and [a, a] hash differently from prefixes
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

unsafe impl<T: Send> Send for ForwardList<T> {}
unsafe impl<T: Sync> Sync for ForwardList<T> {}

/// a node in the chain, either the before-front anchor or one element
enum Node<T> {
    Anchor { next: *mut Node<T> },
    Data { value: T, next: *mut Node<T> },
}

impl<T> Node<T> {
    fn is_anchor(&self) -> bool {
        matches!(self, Self::Anchor { .. })
    }

    fn value(&self) -> &T {
        match self {
            Self::Anchor { .. } => {
                unreachable!("ForwardList never exposes the anchor node")
            }
            Self::Data { value, .. } => value,
        }
    }

    fn value_mut(&mut self) -> &mut T {
        match self {
            Self::Anchor { .. } => {
                unreachable!("ForwardList never exposes the anchor node")
            }
            Self::Data { value, .. } => value,
        }
    }

    fn into_value(self) -> T {
        match self {
            Self::Anchor { .. } => {
                unreachable!("ForwardList never exposes the anchor node")
            }
            Self::Data { value, .. } => value,
        }
    }

    fn next(&self) -> *mut Node<T> {
        match self {
            Self::Anchor { next } | Self::Data { next, .. } => *next,
        }
    }

    fn set_next(&mut self, new_next: *mut Node<T>) {
        match self {
            Self::Anchor { ref mut next } | Self::Data { ref mut next, .. } => *next = new_next,
        }
    }
}

/// two cursor positions are the same position iff they sit on the identical
/// node; both sitting past the end (null) counts as the same position. every
/// cursor PartialEq impl delegates here so the rule exists exactly once
fn same_position<T>(a: *const Node<T>, b: *const Node<T>) -> bool {
    ptr::eq(a, b)
}

pub struct Iter<'a, T> {
    _list: &'a ForwardList<T>,
    curr: *mut Node<T>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr.is_null() {
            return None;
        }
        // SAFETY: the shared borrow of the list keeps the chain alive and
        // un-mutated for 'a
        unsafe {
            let node = &*self.curr;
            self.curr = node.next();
            self.remaining -= 1;
            Some(node.value())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            _list: self._list,
            curr: self.curr,
            remaining: self.remaining,
        }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    _list: &'a mut ForwardList<T>,
    curr: *mut Node<T>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr.is_null() {
            return None;
        }
        // SAFETY: the exclusive borrow of the list makes this iterator the
        // only way to reach the chain, and each node is visited once, so the
        // vended &mut references never alias
        unsafe {
            let node = &mut *self.curr;
            self.curr = node.next();
            self.remaining -= 1;
            Some(node.value_mut())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// an owning iterator that drains the list front to back
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// a read-only position in a list: the anchor ("before front"), a data
/// node, or past the end
pub struct Cursor<'a, T> {
    _list: &'a ForwardList<T>,
    curr: *mut Node<T>,
}

impl<'a, T> Cursor<'a, T> {
    /// advance the cursor one position
    ///
    /// panics if the cursor is already past the end
    pub fn move_next(&mut self) {
        assert!(!self.curr.is_null(), "cursor advanced past the end");
        // SAFETY: non-null positions always point at a live node
        self.curr = unsafe { (*self.curr).next() };
    }

    /// the value the cursor sits on, or None on the anchor or past the end
    pub fn current(&self) -> Option<&'a T> {
        if self.curr.is_null() {
            return None;
        }
        // SAFETY: non-null positions always point at a live node
        let node = unsafe { &*self.curr };
        if node.is_anchor() {
            None
        } else {
            Some(node.value())
        }
    }

    /// the value of the node after the cursor, if there is one
    pub fn peek_next(&self) -> Option<&'a T> {
        if self.curr.is_null() {
            return None;
        }
        // SAFETY: non-null positions and non-null links always point at
        // live nodes, and only the anchor can be the first node of a chain
        unsafe {
            let next = (*self.curr).next();
            if next.is_null() {
                None
            } else {
                Some((*next).value())
            }
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            _list: self._list,
            curr: self.curr,
        }
    }
}

/// a mutable position in a list, able to splice in and unlink nodes
/// directly after itself
///
/// splicing through a cursor never moves it and never disturbs other
/// positions, except that removing a node invalidates positions on exactly
/// that node
pub struct CursorMut<'a, T> {
    list: &'a mut ForwardList<T>,
    curr: *mut Node<T>,
}

impl<'a, T> CursorMut<'a, T> {
    /// advance the cursor one position
    ///
    /// panics if the cursor is already past the end
    pub fn move_next(&mut self) {
        assert!(!self.curr.is_null(), "cursor advanced past the end");
        // SAFETY: non-null positions always point at a live node
        self.curr = unsafe { (*self.curr).next() };
    }

    /// the value the cursor sits on, or None on the anchor or past the end
    pub fn current(&self) -> Option<&T> {
        if self.curr.is_null() {
            return None;
        }
        // SAFETY: non-null positions always point at a live node
        let node = unsafe { &*self.curr };
        if node.is_anchor() {
            None
        } else {
            Some(node.value())
        }
    }

    /// mutably borrow the value the cursor sits on
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.curr.is_null() {
            return None;
        }
        // SAFETY: non-null positions always point at a live node, and the
        // borrow is tied to &mut self so it cannot alias
        let node = unsafe { &mut *self.curr };
        if node.is_anchor() {
            None
        } else {
            Some(node.value_mut())
        }
    }

    /// the value of the node after the cursor, if there is one
    pub fn peek_next(&self) -> Option<&T> {
        if self.curr.is_null() {
            return None;
        }
        // SAFETY: non-null positions and non-null links always point at
        // live nodes
        unsafe {
            let next = (*self.curr).next();
            if next.is_null() {
                None
            } else {
                Some((*next).value())
            }
        }
    }

    /// splice a new element in directly after the cursor, growing the list
    /// by one; the cursor does not move, so the new element is `peek_next`
    ///
    /// panics if the cursor is past the end; the anchor position is valid
    /// and inserts at the front
    pub fn insert_after(&mut self, value: T) {
        assert!(!self.curr.is_null(), "cannot insert after the end position");
        let curr = self.curr;
        // SAFETY: non-null positions always point at a live node of this list
        unsafe {
            self.list.link_after(curr, value);
        }
    }

    /// unlink the node directly after the cursor and return its value,
    /// shrinking the list by one; None if the cursor is on the last node.
    /// the cursor does not move, so it now precedes the node that followed
    /// the removed one
    ///
    /// panics if the cursor is past the end; the anchor position is valid
    /// and removes the front element
    pub fn remove_next(&mut self) -> Option<T> {
        assert!(!self.curr.is_null(), "cannot remove after the end position");
        let curr = self.curr;
        // SAFETY: non-null positions always point at a live node of this list
        unsafe { self.list.unlink_after(curr) }
    }

    /// a read-only view of this cursor at the same position
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            _list: &*self.list,
            curr: self.curr,
        }
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_position(self.curr, other.curr)
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        same_position(self.curr, other.curr)
    }
}

impl<T> Eq for CursorMut<'_, T> {}

impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        same_position(self.curr, other.curr)
    }
}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        same_position(self.curr, other.curr)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn forward_lists_are_sendable() {
        fn send<S: Send>(_: S) {}
        send(ForwardList::<u32>::new());
    }

    #[test]
    fn new_list_is_empty() {
        let list = ForwardList::<u32>::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn front_on_empty_list_returns_none() {
        let list = ForwardList::<u32>::new();
        assert!(list.front().is_none());
    }

    #[test]
    fn pop_front_on_empty_list_returns_none() {
        let mut list = ForwardList::<u32>::new();
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn push_front_increases_len() {
        let mut list = ForwardList::new();
        list.push_front(73);
        assert_eq!(list.len(), 1);
        list.push_front(42);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn front_returns_most_recently_pushed() {
        let mut list = ForwardList::new();
        list.push_front(73);
        assert_eq!(list.front(), Some(&73));
        list.push_front(42);
        assert_eq!(list.front(), Some(&42));
    }

    #[test]
    fn front_mut_can_update_the_head() {
        let mut list = ForwardList::new();
        list.push_front(73);
        *list.front_mut().expect("front should be some") += 1;
        assert_eq!(list.front(), Some(&74));
    }

    #[test]
    fn pop_front_returns_values_in_lifo_order() {
        let mut list = ForwardList::new();
        list.push_front(73);
        list.push_front(42);
        assert_eq!(list.pop_front(), Some(42));
        assert_eq!(list.pop_front(), Some(73));
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn push_then_pop_restores_the_prior_sequence() {
        let mut list: ForwardList<u32> = [1, 2, 3].into();
        list.push_front(0);
        assert_eq!(list.len(), 4);
        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.len(), 3);
        assert!(list.iter().eq([1, 2, 3].iter()));
    }

    #[test]
    fn from_iterator_preserves_order_and_len() {
        let list: ForwardList<u32> = (0..5).collect();
        assert_eq!(list.len(), 5);
        assert!(list.iter().copied().eq(0..5));
    }

    #[test]
    fn from_empty_sequence_is_empty() {
        let list: ForwardList<u32> = [].into();
        assert!(list.is_empty());
        assert_eq!(list, ForwardList::new());
    }

    #[test]
    fn extend_appends_at_the_tail() {
        let mut list: ForwardList<u32> = [1, 2].into();
        list.extend([3, 4]);
        assert_eq!(list.len(), 4);
        assert!(list.iter().eq([1, 2, 3, 4].iter()));
    }

    #[test]
    fn clear_resets_len() {
        let mut list: ForwardList<u32> = [1, 2, 3].into();
        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert!(list.front().is_none());
    }

    #[test]
    fn clear_on_empty_list_is_a_no_op() {
        let mut list = ForwardList::<u32>::new();
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn clone_is_a_deep_independent_copy() {
        let source: ForwardList<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let mut copy = source.clone();
        assert_eq!(copy, source);

        copy.push_front("z".to_string());
        *copy.front_mut().expect("front should be some") = "y".to_string();

        assert_eq!(source.len(), 2);
        assert!(source.iter().eq(["a", "b"].iter()));
    }

    #[test]
    fn clone_from_makes_destination_equal_to_source() {
        let source: ForwardList<u32> = [1, 2, 3].into();
        let mut dest: ForwardList<u32> = [9, 9].into();
        dest.clone_from(&source);
        assert_eq!(dest, source);
        assert_eq!(dest.len(), 3);
    }

    #[test]
    fn swap_exchanges_contents_and_is_self_inverse() {
        let mut a: ForwardList<u32> = [1, 2, 3].into();
        let mut b: ForwardList<u32> = [9].into();

        core::mem::swap(&mut a, &mut b);
        assert!(a.iter().eq([9].iter()));
        assert!(b.iter().eq([1, 2, 3].iter()));
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 3);

        core::mem::swap(&mut a, &mut b);
        assert!(a.iter().eq([1, 2, 3].iter()));
        assert!(b.iter().eq([9].iter()));
    }

    #[test]
    fn swap_does_not_move_nodes() {
        let mut a: ForwardList<u32> = [1, 2, 3].into();
        let mut b: ForwardList<u32> = [9].into();
        let a_head = a.front().expect("front should be some") as *const u32;
        core::mem::swap(&mut a, &mut b);
        assert_eq!(b.front().expect("front should be some") as *const u32, a_head);
    }

    #[test]
    fn debug_formats_as_an_element_list() {
        let list: ForwardList<u32> = [1, 2, 3].into();
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }

    #[test]
    fn drop_frees_a_long_list_without_recursing() {
        // long enough to blow the stack if teardown were recursive
        let list: ForwardList<u32> = (0..1_000_000).collect();
        drop(list);
    }
}



#[cfg(test)]
mod cmp_tests {
    use super::*;

    #[test]
    fn equal_lists_compare_equal() {
        let a: ForwardList<u32> = [1, 2, 3].into();
        let b: ForwardList<u32> = [1, 2, 3].into();
        assert_eq!(a, b);
    }

    #[test]
    fn equality_is_reflexive_and_symmetric() {
        let a: ForwardList<u32> = [1, 2, 3].into();
        let b: ForwardList<u32> = [1, 2, 4].into();
        assert_eq!(a, a);
        assert_eq!(a == b, b == a);
    }

    #[test]
    fn lists_of_different_lengths_are_not_equal() {
        let a: ForwardList<u32> = [1, 2].into();
        let b: ForwardList<u32> = [1, 2, 3].into();
        assert_ne!(a, b);
    }

    #[test]
    fn empty_lists_compare_equal() {
        let a = ForwardList::<u32>::new();
        let b: ForwardList<u32> = [].into();
        assert_eq!(a, b);
        assert!(!(a < b));
        assert!(!(b < a));
    }

    #[test]
    fn a_prefix_is_lexicographically_less() {
        let a: ForwardList<u32> = [1, 2].into();
        let b: ForwardList<u32> = [1, 2, 3].into();
        assert!(a < b);
    }

    #[test]
    fn the_first_differing_element_dominates_ordering() {
        let a: ForwardList<u32> = [2].into();
        let b: ForwardList<u32> = [1, 9, 9].into();
        assert!(!(a < b));
        assert!(a > b);
    }

    #[test]
    fn the_empty_list_is_less_than_any_non_empty_list() {
        let empty = ForwardList::<u32>::new();
        let non_empty: ForwardList<u32> = [0].into();
        assert!(empty < non_empty);
    }

    #[test]
    fn derived_operators_agree_with_the_strict_order() {
        let a: ForwardList<u32> = [1, 2].into();
        let b: ForwardList<u32> = [1, 3].into();
        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(b >= a);
        assert!(a != b);
        assert!(a <= a.clone());
        assert!(a >= a.clone());
    }

    #[test]
    fn ord_agrees_with_partial_ord() {
        let a: ForwardList<u32> = [1, 2].into();
        let b: ForwardList<u32> = [1, 3].into();
        assert_eq!(Some(a.cmp(&b)), a.partial_cmp(&b));
    }

    #[test]
    fn equal_lists_hash_identically() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of(list: &ForwardList<u32>) -> u64 {
            let mut hasher = DefaultHasher::new();
            list.hash(&mut hasher);
            hasher.finish()
        }

        let a: ForwardList<u32> = [1, 2, 3].into();
        let b: ForwardList<u32> = [1, 2, 3].into();
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use std::collections::VecDeque;

    use proptest::prelude::*;
    use proptest::test_runner::Config;
    use proptest_state_machine::{ReferenceStateMachine, StateMachineTest};

    use super::*;

    proptest_state_machine::prop_state_machine! {
        #![proptest_config(Config {
            failure_persistence: None,
            .. Config::default()
        })]

        #[test]
        fn forward_list_state_machine_test(sequential 100..500 => ForwardList<u32>);
    }

    /// the possible transitions of the state machine. positions for the
    /// cursor transitions are reduced modulo len + 1, so every reachable
    /// cursor position (anchor through last element) gets exercised
    #[derive(Clone, Debug)]
    pub enum Transition {
        PushFront(u32),
        PopFront,
        InsertAfter(usize, u32),
        RemoveNext(usize),
        Clear,
    }

    pub struct ForwardListStateMachine;

    impl ReferenceStateMachine for ForwardListStateMachine {
        type State = VecDeque<u32>;
        type Transition = Transition;

        fn init_state() -> BoxedStrategy<Self::State> {
            Just(VecDeque::new()).boxed()
        }

        fn transitions(_state: &Self::State) -> BoxedStrategy<Self::Transition> {
            prop_oneof![
                3 => (any::<u32>()).prop_map(Transition::PushFront),
                2 => Just(Transition::PopFront),
                3 => (any::<usize>(), any::<u32>())
                    .prop_map(|(at, value)| Transition::InsertAfter(at, value)),
                2 => (any::<usize>()).prop_map(Transition::RemoveNext),
                1 => Just(Transition::Clear),
            ]
            .boxed()
        }

        fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
            match transition {
                Transition::PushFront(value) => state.push_front(*value),
                Transition::PopFront => {
                    state.pop_front();
                }
                Transition::InsertAfter(at, value) => {
                    // a cursor advanced `at` steps from the anchor inserts
                    // at element index `at`
                    let at = at % (state.len() + 1);
                    state.insert(at, *value);
                }
                Transition::RemoveNext(at) => {
                    let at = at % (state.len() + 1);
                    if at < state.len() {
                        state.remove(at);
                    }
                }
                Transition::Clear => state.clear(),
            }
            state
        }
    }

    impl StateMachineTest for ForwardList<u32> {
        type SystemUnderTest = Self;
        type Reference = ForwardListStateMachine;

        fn init_test(
            _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        ) -> Self::SystemUnderTest {
            Self::new()
        }

        fn apply(
            mut state: Self::SystemUnderTest,
            _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
            transition: Transition,
        ) -> Self::SystemUnderTest {
            match transition {
                Transition::PushFront(value) => state.push_front(value),
                Transition::PopFront => {
                    state.pop_front();
                }
                Transition::InsertAfter(at, value) => {
                    let at = at % (state.len() + 1);
                    let mut cursor = state.cursor_before_front_mut();
                    for _ in 0..at {
                        cursor.move_next();
                    }
                    cursor.insert_after(value);
                }
                Transition::RemoveNext(at) => {
                    let at = at % (state.len() + 1);
                    let mut cursor = state.cursor_before_front_mut();
                    for _ in 0..at {
                        cursor.move_next();
                    }
                    cursor.remove_next();
                }
                Transition::Clear => state.clear(),
            }
            state
        }

        fn check_invariants(
            state: &Self::SystemUnderTest,
            ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        ) {
            assert_eq!(state.len(), ref_state.len());

            for (value, ref_value) in state.iter().zip(ref_state.iter()) {
                assert_eq!(value, ref_value);
            }
        }
    }
}

#[cfg(all(not(miri), test))]
mod randomized_test {
    use std::collections::VecDeque;

    use rand::Rng;

    use super::*;

    #[test]
    fn random_ops_match_a_vecdeque_reference() {
        let mut rng = rand::thread_rng();
        let mut list = ForwardList::new();
        let mut reference = VecDeque::new();

        for _ in 0..10_000 {
            match rng.gen_range(0..100) {
                0..=39 => {
                    let value: u32 = rng.gen();
                    list.push_front(value);
                    reference.push_front(value);
                }
                40..=59 => {
                    assert_eq!(list.pop_front(), reference.pop_front());
                }
                60..=79 => {
                    let at = rng.gen_range(0..reference.len() + 1);
                    let value: u32 = rng.gen();
                    let mut cursor = list.cursor_before_front_mut();
                    for _ in 0..at {
                        cursor.move_next();
                    }
                    cursor.insert_after(value);
                    reference.insert(at, value);
                }
                80..=98 => {
                    let at = rng.gen_range(0..reference.len() + 1);
                    let mut cursor = list.cursor_before_front_mut();
                    for _ in 0..at {
                        cursor.move_next();
                    }
                    let removed = cursor.remove_next();
                    let ref_removed = if at < reference.len() {
                        reference.remove(at)
                    } else {
                        None
                    };
                    assert_eq!(removed, ref_removed);
                }
                _ => {
                    list.clear();
                    reference.clear();
                }
            }

            assert_eq!(list.len(), reference.len());
        }

        assert!(list.iter().eq(reference.iter()));
    }
}
