// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Dereference Holders
//!
//! Lazy adaptors frequently need to keep "the value produced by the last
//! dereference" around. Depending on the cursor that value is either a
//! reference into the underlying sequence, which must not be copied, or a
//! freshly produced value (a `char` decoded from a string, a tuple combining
//! two elements), which has to be owned by someone.
//!
//! `DerefHolder` gives adaptor code one interface for both cases, and
//! `Holdable` chooses the storage per element type at compile time:
//!
//! - `&'a T` is held by `BorrowingHolder<'a, T>`: a back-reference that is
//!   `Copy` and never clones the referent.
//! - Value types are held by `OwningHolder<T>`: at most one owned instance,
//!   deep-copied when the holder is cloned, released on `reset`/`clear`/drop.
//!
//! `Holdable` is implemented for shared references, the primitive types,
//! `String`, the standard owning containers and tuples of up to six
//! elements.
//!
//! ## Usage
//!
//! ```rust
//! use lazyseq_core::holder::{DerefHolder, HolderFor};
//!
//! let data = String::from("borrowed");
//! let mut by_ref: HolderFor<&String> = Default::default();
//! by_ref.reset(&data);
//! assert!(std::ptr::eq(by_ref.get(), &data));
//!
//! let mut by_value: HolderFor<(char, u32)> = Default::default();
//! assert!(by_value.is_empty());
//! by_value.reset(('x', 7));
//! assert_eq!(by_value.get(), &('x', 7));
//! ```

use crate::cursor::Cursor;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

/// Uniform storage for the result of a dereference.
pub trait DerefHolder<T>: Default {
    /// The type `get` hands out a reference to.
    type Target: ?Sized;

    /// Replaces the held content with `item`.
    fn reset(&mut self, item: T);

    /// Returns a reference to the held value.
    ///
    /// # Panics
    ///
    /// Panics if the holder is empty.
    fn get(&self) -> &Self::Target;

    /// Returns a reference to the held value, or `None` if the holder is
    /// empty.
    fn get_ptr(&self) -> Option<&Self::Target>;

    /// Returns `true` if nothing is held.
    fn is_empty(&self) -> bool;

    /// Releases the held content, leaving the holder empty.
    fn clear(&mut self);
}

/// Associates a dereference result type with the holder that stores it.
pub trait Holdable: Sized {
    /// The holder used for values of this type.
    type Holder: DerefHolder<Self>;
}

/// Shorthand for the holder selected for `T`.
pub type HolderFor<T> = <T as Holdable>::Holder;

/// A holder that owns the value it stores.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_core::holder::{DerefHolder, OwningHolder};
/// let mut holder = OwningHolder::new();
/// holder.reset(vec![1, 2, 3]);
///
/// let copy = holder.clone();
/// holder.reset(vec![4]);
///
/// assert_eq!(copy.get(), &vec![1, 2, 3]);
/// assert_eq!(holder.get(), &vec![4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwningHolder<T> {
    item: Option<T>,
}

impl<T> OwningHolder<T> {
    /// Creates an empty holder.
    #[inline]
    pub const fn new() -> Self {
        Self { item: None }
    }

    /// Returns a mutable reference to the held value, or `None` if empty.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.item.as_mut()
    }

    /// Moves the held value out, leaving the holder empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.item.take()
    }
}

impl<T> Default for OwningHolder<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DerefHolder<T> for OwningHolder<T> {
    type Target = T;

    #[inline]
    fn reset(&mut self, item: T) {
        self.item = Some(item);
    }

    #[inline]
    fn get(&self) -> &T {
        self.item
            .as_ref()
            .expect("OwningHolder: called `get` on an empty holder")
    }

    #[inline]
    fn get_ptr(&self) -> Option<&T> {
        self.item.as_ref()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    #[inline]
    fn clear(&mut self) {
        self.item = None;
    }
}

/// A holder that keeps a back-reference to storage owned elsewhere.
///
/// Copying the holder copies the reference only.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_core::holder::{BorrowingHolder, DerefHolder};
/// let value = 5;
/// let mut holder = BorrowingHolder::new();
/// holder.reset(&value);
///
/// let copy = holder;
/// assert!(std::ptr::eq(copy.get(), holder.get()));
/// ```
pub struct BorrowingHolder<'a, T>
where
    T: ?Sized,
{
    item: Option<&'a T>,
}

impl<'a, T> BorrowingHolder<'a, T>
where
    T: ?Sized,
{
    /// Creates an empty holder.
    #[inline]
    pub const fn new() -> Self {
        Self { item: None }
    }

    /// Returns the held reference with its full lifetime, or `None` if empty.
    #[inline]
    pub fn get_ref(&self) -> Option<&'a T> {
        self.item
    }
}

impl<T> Default for BorrowingHolder<'_, T>
where
    T: ?Sized,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for BorrowingHolder<'_, T>
where
    T: ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BorrowingHolder<'_, T> where T: ?Sized {}

impl<T> std::fmt::Debug for BorrowingHolder<'_, T>
where
    T: ?Sized + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BorrowingHolder")
            .field("item", &self.item)
            .finish()
    }
}

impl<'a, T> DerefHolder<&'a T> for BorrowingHolder<'a, T>
where
    T: ?Sized,
{
    type Target = T;

    #[inline]
    fn reset(&mut self, item: &'a T) {
        self.item = Some(item);
    }

    #[inline]
    fn get(&self) -> &T {
        self.item
            .expect("BorrowingHolder: called `get` on an empty holder")
    }

    #[inline]
    fn get_ptr(&self) -> Option<&T> {
        self.item
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    #[inline]
    fn clear(&mut self) {
        self.item = None;
    }
}

impl<'a, T> Holdable for &'a T
where
    T: ?Sized,
{
    type Holder = BorrowingHolder<'a, T>;
}

macro_rules! impl_owned_holdable {
    ($($t:ty),* $(,)?) => {
        $(
            impl Holdable for $t {
                type Holder = OwningHolder<$t>;
            }
        )*
    };
}

impl_owned_holdable!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
);

macro_rules! impl_owned_holdable_generic {
    ($($name:ident<$($p:ident),+>),* $(,)?) => {
        $(
            impl<$($p),+> Holdable for $name<$($p),+> {
                type Holder = OwningHolder<$name<$($p),+>>;
            }
        )*
    };
}

impl_owned_holdable_generic!(
    Vec<T>,
    VecDeque<T>,
    LinkedList<T>,
    BTreeSet<T>,
    HashSet<T>,
    Option<T>,
    Box<T>,
    BTreeMap<K, V>,
    HashMap<K, V>,
);

macro_rules! impl_tuple_holdable {
    ($($p:ident),+) => {
        impl<$($p),+> Holdable for ($($p,)+) {
            type Holder = OwningHolder<($($p,)+)>;
        }
    };
}

impl_tuple_holdable!(A);
impl_tuple_holdable!(A, B);
impl_tuple_holdable!(A, B, C);
impl_tuple_holdable!(A, B, C, D);
impl_tuple_holdable!(A, B, C, D, E);
impl_tuple_holdable!(A, B, C, D, E, F);

/// Dereferences `cursor` into a fresh holder of the matching kind.
///
/// Adaptors use this to remember the current element: a reference-yielding
/// cursor produces a `BorrowingHolder`, a value-yielding cursor an
/// `OwningHolder`.
///
/// # Examples
///
/// ```rust
/// # use lazyseq_core::holder::{capture, DerefHolder};
/// # use lazyseq_core::sequence::Sequence;
/// let data = vec![1, 2, 3];
/// let held = capture(&data.cursor_begin());
/// assert!(std::ptr::eq(held.get(), &data[0]));
///
/// let held = capture(&"xyz".cursor_begin());
/// assert_eq!(*held.get(), 'x');
/// ```
pub fn capture<C>(cursor: &C) -> HolderFor<C::Item>
where
    C: Cursor,
    C::Item: Holdable,
{
    let mut holder: HolderFor<C::Item> = Default::default();
    holder.reset(cursor.get());
    holder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::iter::IterCursor;
    use crate::sequence::Sequence;

    // Deliberately neither `Clone` nor `Copy`.
    #[derive(Debug, PartialEq)]
    struct Unclonable(u32);

    #[test]
    fn test_owning_starts_empty() {
        let holder: OwningHolder<u32> = OwningHolder::new();
        assert!(holder.is_empty());
        assert_eq!(holder.get_ptr(), None);
    }

    #[test]
    fn test_owning_reset_replaces() {
        let mut holder = OwningHolder::default();
        holder.reset(String::from("first"));
        holder.reset(String::from("second"));
        assert_eq!(holder.get(), "second");
        assert!(!holder.is_empty());
    }

    #[test]
    fn test_owning_move_only_value() {
        let mut holder = OwningHolder::new();
        holder.reset(Unclonable(3));
        assert_eq!(holder.get(), &Unclonable(3));
        assert_eq!(holder.take(), Some(Unclonable(3)));
        assert!(holder.is_empty());
    }

    #[test]
    fn test_owning_clone_is_deep() {
        let mut original = OwningHolder::new();
        original.reset(vec![1, 2]);
        let copy = original.clone();

        original.get_mut().unwrap().push(3);
        assert_eq!(original.get(), &vec![1, 2, 3]);
        assert_eq!(copy.get(), &vec![1, 2]);

        let empty: OwningHolder<Vec<i32>> = OwningHolder::new();
        assert!(empty.clone().is_empty());
    }

    #[test]
    fn test_owning_value_is_independent_of_source() {
        let mut source = String::from("abc");
        let mut holder: HolderFor<String> = Default::default();
        holder.reset(source.clone());
        source.push('d');
        assert_eq!(holder.get(), "abc");
    }

    #[test]
    fn test_borrowing_never_copies() {
        let value = Unclonable(9);
        let mut holder: HolderFor<&Unclonable> = Default::default();
        assert!(holder.is_empty());

        holder.reset(&value);
        assert!(std::ptr::eq(holder.get(), &value));
        assert!(std::ptr::eq(holder.get_ptr().unwrap(), &value));

        let copy = holder;
        assert!(std::ptr::eq(copy.get(), &value));
    }

    #[test]
    fn test_borrowing_rebinds() {
        let a = 1;
        let b = 2;
        let mut holder = BorrowingHolder::new();
        holder.reset(&a);
        holder.reset(&b);
        assert!(std::ptr::eq(holder.get_ref().unwrap(), &b));
        holder.clear();
        assert!(holder.is_empty());
    }

    #[test]
    fn test_borrowing_unsized() {
        let text = String::from("slice me");
        let mut holder: BorrowingHolder<'_, str> = BorrowingHolder::new();
        holder.reset(&text[..5]);
        assert_eq!(holder.get(), "slice");
    }

    #[test]
    #[should_panic(expected = "called `get` on an empty holder")]
    fn test_owning_get_empty_panics() {
        let holder: OwningHolder<u8> = OwningHolder::new();
        let _ = holder.get();
    }

    #[test]
    #[should_panic(expected = "called `get` on an empty holder")]
    fn test_borrowing_get_empty_panics() {
        let holder: BorrowingHolder<'_, u8> = BorrowingHolder::new();
        let _ = holder.get();
    }

    #[test]
    fn test_capture_selects_holder_by_item() {
        let data = vec![10, 20];
        let by_ref: BorrowingHolder<'_, i32> = capture(&data.cursor_begin());
        assert!(std::ptr::eq(by_ref.get(), &data[0]));

        let pairs = vec![(1, 'a'), (2, 'b')];
        let zipped = IterCursor::new(pairs.iter().map(|&(n, c)| (c, n)));
        let by_value: OwningHolder<(char, i32)> = capture(&zipped);
        assert_eq!(by_value.get(), &('a', 1));
    }
}
