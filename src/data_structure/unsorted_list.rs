use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::interface::list::List;

/// 挿入順を保つリスト(ソートはしない)
///
/// 要素は循環配列に保持する。x(i)は a[(j + i) % a.len()] にある
/// insert(x, i), remove(i)はiより短い側の要素だけをずらすので
/// resize()のコストを無視すると実行時間はO(1 + min(i, n - i))
/// prepend, append, pop, pop_lastはいずれも償却O(1)
///
/// 生きている範囲の外のスロットは常にNone
#[derive(Clone)]
pub struct UnsortedList<T> {
    a: Box<[Option<T>]>, // 循環配列
    j: usize,            // 先頭の要素の位置
    n: usize,            // リストの要素数
}

impl<T> UnsortedList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(size: usize) -> Self {
        Self {
            a: Self::slots(size),
            j: 0,
            n: 0,
        }
    }

    /// 与えられた列の順で要素を並べたリストを作る
    ///
    /// `unsorted_list!`, `From`, `FromIterator`も全てここを通る
    pub fn of<I>(xs: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let a: Box<[Option<T>]> = xs.into_iter().map(Some).collect();
        let n = a.len();
        Self { a, j: 0, n }
    }

    fn slots(size: usize) -> Box<[Option<T>]> {
        std::iter::repeat_with(|| None).take(size).collect()
    }

    // x(i)の物理的な位置
    fn slot(&self, i: usize) -> Option<usize> {
        if i < self.n {
            Some((self.j + i) % self.a.len())
        } else {
            None
        }
    }

    // 配列の長さを2nにして、先頭をa[0]に詰め直す
    fn resize(&mut self) {
        let len = std::cmp::max(2 * self.n, 1);
        trace!(from = self.a.len(), to = len, n = self.n, "resizing slot array");
        let mut b = Self::slots(len);
        for k in 0..self.n {
            b[k] = self.a[(self.j + k) % self.a.len()].take();
        }
        self.a = b;
        self.j = 0;
    }

    fn out_of_bounds(&self, op: &'static str, index: usize) -> Error {
        debug!(op, index, size = self.n, "position out of bounds");
        Error::OutOfBounds {
            index,
            size: self.n,
        }
    }

    fn empty(&self, op: &'static str) -> Error {
        debug!(op, "list is empty");
        Error::EmptyCollection
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// 循環配列の長さ
    pub fn capacity(&self) -> usize {
        self.a.len()
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.slot(i).and_then(|k| self.a[k].as_ref())
    }

    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        let k = self.slot(i)?;
        self.a[k].as_mut()
    }

    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn last(&self) -> Option<&T> {
        self.n.checked_sub(1).and_then(|i| self.get(i))
    }

    /// x(i)の値をxにし、以前の値を返す
    pub fn set(&mut self, i: usize, x: T) -> Result<T> {
        match self.get_mut(i) {
            Some(y) => Ok(std::mem::replace(y, x)),
            None => Err(self.out_of_bounds("set", i)),
        }
    }

    pub fn append(&mut self, x: T) {
        let n = self.n;
        self.add_at(n, x);
    }

    pub fn prepend(&mut self, x: T) {
        self.add_at(0, x);
    }

    /// xをi番目として追加し、x(i)..x(n-1)を後ろにずらす
    ///
    /// iはnまで許される(末尾への追加)
    pub fn insert(&mut self, x: T, i: usize) -> Result<()> {
        if i > self.n {
            return Err(self.out_of_bounds("insert", i));
        }
        self.add_at(i, x);
        Ok(())
    }

    // i <= n は呼び出し側で保証する
    fn add_at(&mut self, i: usize, x: T) {
        if self.n >= self.a.len() {
            self.resize();
        }
        let len = self.a.len();

        if i < self.n / 2 {
            // x(0)..x(i-1)を左に1つずらす
            self.j = (self.j + len - 1) % len;
            for k in 0..i {
                self.a[(self.j + k) % len] = self.a[(self.j + k + 1) % len].take();
            }
        } else {
            // x(i)..x(n-1)を右に1つずらす
            for k in (i + 1..=self.n).rev() {
                self.a[(self.j + k) % len] = self.a[(self.j + k - 1) % len].take();
            }
        }
        self.a[(self.j + i) % len] = Some(x);
        self.n += 1;
    }

    /// x(i)を削除して返し、x(i+1)..x(n-1)を前にずらす
    pub fn remove(&mut self, i: usize) -> Result<T> {
        let x = self
            .slot(i)
            .and_then(|k| self.a[k].take())
            .ok_or_else(|| self.out_of_bounds("remove", i))?;
        let len = self.a.len();

        if i < self.n / 2 {
            // x(0)..x(i-1)を右に1つずらす
            for k in (1..=i).rev() {
                self.a[(self.j + k) % len] = self.a[(self.j + k - 1) % len].take();
            }
            self.j = (self.j + 1) % len;
        } else {
            // x(i+1)..x(n-1)を左に1つずらす
            for k in i..self.n - 1 {
                self.a[(self.j + k) % len] = self.a[(self.j + k + 1) % len].take();
            }
        }

        self.n -= 1;
        // 配列の長さに対して要素が少なすぎる場合はresizeする
        if 3 * self.n < self.a.len() {
            self.resize();
        }
        Ok(x)
    }

    /// 先頭の要素を削除して返す
    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(self.empty("pop"));
        }
        self.remove(0)
    }

    /// 末尾の要素を削除して返す
    pub fn pop_last(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(self.empty("pop_last"));
        }
        self.remove(self.n - 1)
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: 0,
            back: self.n,
        }
    }
}

impl<T> Default for UnsortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> for UnsortedList<T> {
    fn size(&self) -> usize {
        self.n
    }

    fn get(&self, i: usize) -> Option<&T> {
        UnsortedList::get(self, i)
    }

    fn set(&mut self, i: usize, x: T) -> Result<T> {
        UnsortedList::set(self, i, x)
    }

    fn add(&mut self, i: usize, x: T) -> Result<()> {
        self.insert(x, i)
    }

    fn remove(&mut self, i: usize) -> Result<T> {
        UnsortedList::remove(self, i)
    }
}

// 循環配列の配置には依存せず、論理的な並びだけを比べる
impl<T: PartialEq> PartialEq for UnsortedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for UnsortedList<T> {}

impl<T: Hash> Hash for UnsortedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.n.hash(state);
        for x in self.iter() {
            x.hash(state);
        }
    }
}

impl<T: Debug> fmt::Debug for UnsortedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnsortedList(size = {}) ", self.n)?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> From<[T; N]> for UnsortedList<T> {
    fn from(xs: [T; N]) -> Self {
        Self::of(xs)
    }
}

impl<T> From<Vec<T>> for UnsortedList<T> {
    fn from(xs: Vec<T>) -> Self {
        Self::of(xs)
    }
}

impl<T> FromIterator<T> for UnsortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

/// 先頭から順に要素の参照を返す
pub struct Iter<'a, T> {
    list: &'a UnsortedList<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front < self.back {
            let x = self.list.get(self.front);
            self.front += 1;
            x
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.back - self.front;
        (rest, Some(rest))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front < self.back {
            self.back -= 1;
            self.list.get(self.back)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a UnsortedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// 先頭から順に要素を取り出す
pub struct IntoIter<T> {
    list: UnsortedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.list.is_empty() {
            None
        } else {
            self.list.pop().ok()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.n, Some(self.list.n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.list.is_empty() {
            None
        } else {
            self.list.pop_last().ok()
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for UnsortedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for UnsortedList<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for UnsortedList<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

/// 並べた順に要素を持つリストを作る
///
/// ```
/// use unsorted_list::{unsorted_list, UnsortedList};
///
/// let list = unsorted_list![1, 2, 3];
/// assert_eq!(list, UnsortedList::of(vec![1, 2, 3]));
/// ```
#[macro_export]
macro_rules! unsorted_list {
    ($($x:expr),* $(,)?) => {
        $crate::UnsortedList::of([$($x),*])
    };
}
