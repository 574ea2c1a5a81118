//! In-place k-th order statistics.
//!
//! The self-collision broad pass splits particle sets at the median of a
//! projection axis; a full sort is wasted work when only the partition
//! point matters. These helpers rearrange a slice so element `k` is in
//! its sorted position with everything smaller before it.

use std::cmp::Ordering;

/// Partition `data[lo..=hi]` around a pivot, returning the pivot's final index.
fn partition<T, F>(data: &mut [T], lo: usize, hi: usize, key: &F) -> usize
where
    F: Fn(&T) -> f32,
{
    let mid = lo + (hi - lo) / 2;
    data.swap(mid, hi);
    let pivot = key(&data[hi]);
    let mut store = lo;
    for i in lo..hi {
        if key(&data[i]) < pivot {
            data.swap(i, store);
            store += 1;
        }
    }
    data.swap(store, hi);
    store
}

/// Rearrange `data` so `data[k]` holds the k-th smallest element by `key`.
///
/// Elements before index `k` compare less-or-equal, elements after it
/// greater-or-equal. Average O(n), worst case O(n^2) like any
/// unrandomized quick-select; inputs here are particle projections, not
/// adversarial.
///
/// # Panics
///
/// Panics if `k` is out of range for `data`.
pub fn quick_select_by<T, F>(data: &mut [T], k: usize, key: &F)
where
    F: Fn(&T) -> f32,
{
    assert!(k < data.len(), "selection index out of range");
    let mut lo = 0;
    let mut hi = data.len() - 1;
    while lo < hi {
        let p = partition(data, lo, hi, key);
        match k.cmp(&p) {
            Ordering::Equal => return,
            Ordering::Less => hi = p - 1,
            Ordering::Greater => lo = p + 1,
        }
    }
}

/// [`quick_select_by`] specialized to plain `f32` slices.
///
/// # Panics
///
/// Panics if `k` is out of range for `data`.
pub fn quick_select(data: &mut [f32], k: usize) {
    quick_select_by(data, k, &|x| *x);
}

/// Median split: after the call, the lower half of `data` precedes the
/// upper half by `key`. Returns the split index.
pub fn median_split_by<T, F>(data: &mut [T], key: &F) -> usize
where
    F: Fn(&T) -> f32,
{
    let mid = data.len() / 2;
    if data.len() > 1 {
        quick_select_by(data, mid, key);
    }
    mid
}
