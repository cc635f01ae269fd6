// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identity of slots in the tripled virtual sequence.

use alloc::format;
use alloc::string::String;

/// Which of the three content-identical copies a virtual slot belongs to.
///
/// A looping carousel lays its items out three times in a row. The scroll
/// position normally rests in the [`Middle`](Band::Middle) band; the
/// [`Leading`](Band::Leading) and [`Trailing`](Band::Trailing) bands exist so
/// that a swipe past either end always has real content to land on before the
/// position is silently pulled back to the middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// The first copy, indices `0..len`.
    Leading,
    /// The second copy, indices `len..2 * len`. Rest positions live here.
    Middle,
    /// The third copy, indices `2 * len..3 * len`.
    Trailing,
}

impl Band {
    /// All bands in layout order.
    pub const ALL: [Self; 3] = [Self::Leading, Self::Middle, Self::Trailing];

    /// Returns this band's position in layout order: `0`, `1`, or `2`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Leading => 0,
            Self::Middle => 1,
            Self::Trailing => 2,
        }
    }

    /// Returns the band at `index` in layout order, if `index < 3`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Leading),
            1 => Some(Self::Middle),
            2 => Some(Self::Trailing),
            _ => None,
        }
    }
}

/// Stable identity of one slot in the tripled virtual sequence.
///
/// Two slots showing the same item in different bands get distinct ids, which
/// is what lets view-recycling hosts keep three live views of one item
/// without aliasing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    /// The copy this slot belongs to.
    pub band: Band,
    /// Index of the item within the original (untripled) sequence.
    pub original: usize,
}

impl SlotId {
    /// Creates a slot id.
    #[must_use]
    pub const fn new(band: Band, original: usize) -> Self {
        Self { band, original }
    }

    /// Returns the flat virtual index of this slot in a sequence of `len`
    /// original items: `band * len + original`.
    #[must_use]
    pub const fn flat(self, len: usize) -> usize {
        self.band.index() * len + self.original
    }

    /// Splits a flat virtual index back into a slot id.
    ///
    /// Returns `None` when `len` is zero or `index` is not in `0..3 * len`.
    #[must_use]
    pub const fn from_flat(index: usize, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let band = match Band::from_index(index / len) {
            Some(band) => band,
            None => return None,
        };
        Some(Self {
            band,
            original: index % len,
        })
    }

    /// Renders the `"band-original-label"` identity string for hosts with
    /// string-keyed view recycling.
    #[must_use]
    pub fn key(&self, label: &str) -> String {
        format!("{}-{}-{label}", self.band.index(), self.original)
    }
}

/// One element of the tripled virtual sequence.
///
/// The borrowed `item` is value-equal across the three bands; only
/// [`Slot::id`] and [`Slot::index`] distinguish the copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a, T> {
    /// Flat virtual index, `0..3 * len`.
    pub index: usize,
    /// Stable identity of this slot.
    pub id: SlotId,
    /// The item this slot displays.
    pub item: &'a T,
}

#[cfg(test)]
mod tests {
    use super::{Band, SlotId};
    use alloc::string::String;

    #[test]
    fn bands_round_trip_their_indices() {
        for band in Band::ALL {
            assert_eq!(Band::from_index(band.index()), Some(band));
        }
        assert_eq!(Band::from_index(3), None);
    }

    #[test]
    fn flat_indices_round_trip() {
        let len = 5;
        for index in 0..3 * len {
            let id = SlotId::from_flat(index, len).unwrap();
            assert_eq!(id.flat(len), index);
            assert_eq!(id.original, index % len);
        }
        assert_eq!(SlotId::from_flat(15, 5), None);
        assert_eq!(SlotId::from_flat(0, 0), None);
    }

    #[test]
    fn keys_name_band_original_and_label() {
        let id = SlotId::new(Band::Middle, 3);
        assert_eq!(id.key("Solar Wind"), String::from("1-3-Solar Wind"));
    }
}
