use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use serde::{Deserialize, Serialize};

use crate::{Color, Palette, PaletteSource, Slice, SliceError, SliceResult};

/// One palette position: a color and its transparency flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub color: Color,
    pub transparent: bool,
}

impl Entry {
    pub fn new(color: Color, transparent: bool) -> Self {
        Entry { color, transparent }
    }

    pub fn opaque(color: Color) -> Self {
        Entry {
            color,
            transparent: false,
        }
    }
}

impl From<Color> for Entry {
    fn from(color: Color) -> Self {
        Entry::opaque(color)
    }
}

impl From<(Color, bool)> for Entry {
    fn from(value: (Color, bool)) -> Self {
        Entry::new(value.0, value.1)
    }
}

/// Selects either a single palette position or a slice of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Index(isize),
    Slice(Slice),
}

impl From<isize> for Key {
    fn from(index: isize) -> Self {
        Key::Index(index)
    }
}

impl From<Slice> for Key {
    fn from(slice: Slice) -> Self {
        Key::Slice(slice)
    }
}

impl From<Range<isize>> for Key {
    fn from(range: Range<isize>) -> Self {
        Key::Slice(range.into())
    }
}

impl From<RangeFrom<isize>> for Key {
    fn from(range: RangeFrom<isize>) -> Self {
        Key::Slice(range.into())
    }
}

impl From<RangeTo<isize>> for Key {
    fn from(range: RangeTo<isize>) -> Self {
        Key::Slice(range.into())
    }
}

impl From<RangeFull> for Key {
    fn from(range: RangeFull) -> Self {
        Key::Slice(range.into())
    }
}

/// Replacement colors for a slice assignment. Plain color values are
/// taken as opaque; entries carry their own transparency, for example
/// when sourced from another palette or adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    Colors(Vec<Color>),
    Entries(Vec<Entry>),
}

impl Replacement {
    /// Captures every (color, transparency) pair of `source`.
    pub fn from_source(source: &impl PaletteSource) -> Self {
        Replacement::Entries(
            (0..source.len())
                .map(|i| Entry::new(source.color_at(i), source.transparent_at(i)))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            Replacement::Colors(colors) => colors.len(),
            Replacement::Entries(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn into_entries(self) -> Vec<Entry> {
        match self {
            Replacement::Colors(colors) => colors.into_iter().map(Entry::opaque).collect(),
            Replacement::Entries(entries) => entries,
        }
    }
}

impl From<Vec<Color>> for Replacement {
    fn from(colors: Vec<Color>) -> Self {
        Replacement::Colors(colors)
    }
}

impl From<&[Color]> for Replacement {
    fn from(colors: &[Color]) -> Self {
        Replacement::Colors(colors.to_vec())
    }
}

impl From<Vec<u32>> for Replacement {
    fn from(values: Vec<u32>) -> Self {
        Replacement::Colors(values.into_iter().map(Color::from).collect())
    }
}

impl From<Vec<Entry>> for Replacement {
    fn from(entries: Vec<Entry>) -> Self {
        Replacement::Entries(entries)
    }
}

/// Wraps a fixed-size indexed color palette with list-style slicing,
/// mutation and search while preserving per-index transparency.
///
/// The adapter keeps an ordered reference list of [`Entry`] values and a
/// materialized [`Palette`] mirroring it. Every mutation funnels through
/// one rebuild step, so after any operation `palette()[i]` matches
/// `entries()[i]` in both color and transparency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteSlice {
    reference: Vec<Entry>,
    palette: Palette,
}

impl PaletteSlice {
    /// Copies every (color, transparency) pair out of `source` and builds
    /// the initial materialized palette from them.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::InvalidSource`] if the source is empty.
    pub fn from_source(source: &impl PaletteSource) -> SliceResult<Self> {
        if source.is_empty() {
            return Err(SliceError::InvalidSource);
        }
        let reference: Vec<Entry> = (0..source.len())
            .map(|i| Entry::new(source.color_at(i), source.transparent_at(i)))
            .collect();
        let palette = materialize(&reference);
        Ok(PaletteSlice { reference, palette })
    }

    /// Number of entries in the materialized palette.
    pub fn len(&self) -> usize {
        self.palette.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }

    /// The materialized palette mirroring the reference list.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The reference list of (color, transparency) entries.
    pub fn entries(&self) -> &[Entry] {
        &self.reference
    }

    /// Returns a palette holding the selected entries in selection order.
    /// A single index yields a one-entry palette; a slice may select in
    /// reverse or with a stride. Does not mutate the reference list.
    pub fn get(&self, key: impl Into<Key>) -> SliceResult<Palette> {
        match key.into() {
            Key::Index(index) => {
                let pos = self.resolve_index(index)?;
                Ok(materialize(&self.reference[pos..=pos]))
            }
            Key::Slice(slice) => {
                let resolved = slice.resolve(self.reference.len())?;
                let selected: Vec<Entry> =
                    resolved.indices().map(|i| self.reference[i]).collect();
                Ok(materialize(&selected))
            }
        }
    }

    /// Replaces the selected entries with `value`.
    ///
    /// A step-1 slice may be replaced by any number of entries and the
    /// list grows or shrinks accordingly. Extended slices (step != 1) and
    /// single indices require the replacement length to match the
    /// selection exactly. The reference list is untouched on error.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Replacement>) -> SliceResult<()> {
        let entries = value.into().into_entries();
        match key.into() {
            Key::Index(index) => {
                let pos = self.resolve_index(index)?;
                if entries.len() != 1 {
                    return Err(SliceError::SliceLengthMismatch {
                        expected: 1,
                        got: entries.len(),
                    });
                }
                self.reference[pos] = entries[0];
            }
            Key::Slice(slice) => {
                let resolved = slice.resolve(self.reference.len())?;
                if resolved.step == 1 {
                    // An inverted selection like [3:1] inserts at the
                    // slice's start index.
                    let start = resolved.start as usize;
                    let stop = resolved.stop.max(resolved.start) as usize;
                    self.reference.splice(start..stop, entries);
                } else {
                    if entries.len() != resolved.count() {
                        return Err(SliceError::SliceLengthMismatch {
                            expected: resolved.count(),
                            got: entries.len(),
                        });
                    }
                    for (i, entry) in resolved.indices().zip(entries) {
                        self.reference[i] = entry;
                    }
                }
            }
        }
        self.rebuild();
        Ok(())
    }

    /// Removes the selected entries without replacement.
    pub fn delete(&mut self, key: impl Into<Key>) -> SliceResult<()> {
        match key.into() {
            Key::Index(index) => {
                let pos = self.resolve_index(index)?;
                self.reference.remove(pos);
            }
            Key::Slice(slice) => {
                let resolved = slice.resolve(self.reference.len())?;
                if resolved.step == 1 {
                    let start = resolved.start as usize;
                    let stop = resolved.stop.max(resolved.start) as usize;
                    self.reference.drain(start..stop);
                } else {
                    let mut removed = vec![false; self.reference.len()];
                    for i in resolved.indices() {
                        removed[i] = true;
                    }
                    let mut pos = 0;
                    self.reference.retain(|_| {
                        let keep = !removed[pos];
                        pos += 1;
                        keep
                    });
                }
            }
        }
        self.rebuild();
        Ok(())
    }

    /// Adds one opaque entry at the end.
    pub fn append(&mut self, color: Color) {
        self.reference.push(Entry::opaque(color));
        self.rebuild();
    }

    /// Adds entries at the end, keeping their transparency flags.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = Entry>) {
        self.reference.extend(entries);
        self.rebuild();
    }

    /// Inserts one opaque entry before `index`. Negative indices count
    /// from the end; out-of-range indices clamp to the list bounds.
    pub fn insert(&mut self, index: isize, color: Color) {
        let len = self.reference.len() as isize;
        let pos = if index < 0 { index + len } else { index };
        if pos < 0 || pos > len {
            log::warn!("insert index {index} outside palette of length {len}, clamping");
        }
        let pos = pos.clamp(0, len) as usize;
        self.reference.insert(pos, Entry::opaque(color));
        self.rebuild();
    }

    /// Removes the entry at `index` and returns its color. The
    /// transparency flag is removed along with it.
    pub fn pop(&mut self, index: isize) -> SliceResult<Color> {
        let pos = self.resolve_index(index)?;
        let entry = self.reference.remove(pos);
        self.rebuild();
        Ok(entry.color)
    }

    /// Whether any entry has the given color. Transparency is ignored.
    pub fn contains(&self, color: impl Into<Color>) -> bool {
        let color = color.into();
        self.reference.iter().any(|entry| entry.color == color)
    }

    /// Number of entries with the given color.
    pub fn count(&self, color: impl Into<Color>) -> usize {
        let color = color.into();
        self.reference
            .iter()
            .filter(|entry| entry.color == color)
            .count()
    }

    /// Position of the first entry within `[start, stop)` whose color
    /// matches, or `None`. Omitted bounds default to the whole list.
    pub fn index_of(
        &self,
        color: impl Into<Color>,
        start: Option<usize>,
        stop: Option<usize>,
    ) -> Option<usize> {
        let color = color.into();
        let start = start.unwrap_or(0).min(self.reference.len());
        let stop = stop.unwrap_or(self.reference.len()).min(self.reference.len());
        if start >= stop {
            return None;
        }
        self.reference[start..stop]
            .iter()
            .position(|entry| entry.color == color)
            .map(|pos| pos + start)
    }

    /// Whether the entry at `index` is transparent.
    pub fn is_transparent(&self, index: isize) -> SliceResult<bool> {
        let pos = self.resolve_index(index)?;
        Ok(self.reference[pos].transparent)
    }

    /// Marks the entry at `index` transparent. The color is unchanged.
    pub fn make_transparent(&mut self, index: isize) -> SliceResult<()> {
        self.set_transparency(index, true)
    }

    /// Marks the entry at `index` opaque. The color is unchanged.
    pub fn make_opaque(&mut self, index: isize) -> SliceResult<()> {
        self.set_transparency(index, false)
    }

    fn set_transparency(&mut self, index: isize, transparent: bool) -> SliceResult<()> {
        let pos = self.resolve_index(index)?;
        self.reference[pos].transparent = transparent;
        self.rebuild();
        Ok(())
    }

    /// Maps a possibly negative index into `0..len`.
    fn resolve_index(&self, index: isize) -> SliceResult<usize> {
        let len = self.reference.len();
        let pos = if index < 0 {
            index + len as isize
        } else {
            index
        };
        if pos < 0 || pos >= len as isize {
            return Err(SliceError::IndexOutOfRange { index, len });
        }
        Ok(pos as usize)
    }

    /// Discards the materialized palette and rebuilds it from the full
    /// reference list. Every mutation ends here.
    fn rebuild(&mut self) {
        self.palette = materialize(&self.reference);
    }
}

impl PaletteSource for PaletteSlice {
    fn len(&self) -> usize {
        self.reference.len()
    }

    fn color_at(&self, index: usize) -> Color {
        self.reference[index].color
    }

    fn transparent_at(&self, index: usize) -> bool {
        self.reference[index].transparent
    }
}

/// Builds a palette sized to `entries`, with each position's color set
/// and its transparency flag applied.
fn materialize(entries: &[Entry]) -> Palette {
    let mut palette = Palette::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        palette.set_color(idx, entry.color);
        if entry.transparent {
            palette.make_transparent(idx);
        }
    }
    palette
}
