//! Native record store client.
//!
//! Loads the pre-built shared library at runtime and forwards every store
//! operation to it. Search results come back through a caller-allocated
//! fixed-size grid of NUL-terminated byte rows; the grid is allocated per
//! call and decoded into owned values before returning, so no raw buffer
//! ever escapes this module.

use std::ffi::{c_char, c_int, CString};
use std::path::Path;

use chrono::{Datelike, NaiveDateTime, Timelike};
use libloading::{Library, Symbol};

use crate::store::RecordStore;
use crate::{CriminalRecord, RecordSummary, SearchQuery, StoreError};

/// Result grid dimensions, fixed by the native ABI.
const RESULT_ROWS: usize = 100;
const RESULT_COLS: usize = 100;

/// Field separator inside one result row.
const FIELD_SEPARATOR: char = '|';

// Native entry points. Names and parameter layouts are fixed by the shared
// library; all datetimes cross the boundary as five integers.
type NewCriminalFn = unsafe extern "C" fn(
    *const c_char, // crime kind
    *const c_char, // description
    c_int,         // year
    c_int,         // month
    c_int,         // day
    c_int,         // hour
    c_int,         // minute
    *const c_char, // id
    *const c_char, // birth
    *const c_char, // gender
    *const c_char, // location
    *const c_char, // name
);
type DeleteCriminalFn =
    unsafe extern "C" fn(*const c_char, c_int, c_int, c_int, c_int, c_int);
type SearchByTimeFn = unsafe extern "C" fn(
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    *mut *mut c_char,
    c_int,
    c_int,
) -> c_int;
type SearchByIntervalFn = unsafe extern "C" fn(
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    *mut *mut c_char,
    c_int,
    c_int,
) -> c_int;
type SearchByTimeKindFn = unsafe extern "C" fn(
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    *const c_char,
    *mut *mut c_char,
    c_int,
    c_int,
) -> c_int;
type SearchByIntervalKindFn = unsafe extern "C" fn(
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    c_int,
    *const c_char,
    *mut *mut c_char,
    c_int,
    c_int,
) -> c_int;
type SearchByNameFn =
    unsafe extern "C" fn(*const c_char, *mut *mut c_char, c_int, c_int) -> c_int;

/// `RecordStore` implementation backed by the native shared library.
pub struct NativeStore {
    lib: Library,
}

impl NativeStore {
    /// Load the record-store shared library.
    ///
    /// Symbols are resolved per call, so a library missing one entry point
    /// fails only when that operation is used.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let lib = unsafe { Library::new(path) }?;
        tracing::debug!(path = %path.display(), "loaded record store library");
        Ok(Self { lib })
    }

    fn symbol<T>(&self, name: &'static str) -> Result<Symbol<'_, T>, StoreError> {
        unsafe { self.lib.get(name.as_bytes()) }
            .map_err(|source| StoreError::Symbol { name, source })
    }
}

impl RecordStore for NativeStore {
    fn create(&mut self, record: &CriminalRecord) -> Result<(), StoreError> {
        let func: Symbol<'_, NewCriminalFn> = self.symbol("newCriminal")?;
        let kind = CString::new(record.kind.as_str())?;
        let description = CString::new(record.description.as_str())?;
        let id = CString::new(record.id.as_str())?;
        let birth = CString::new(record.birth.as_str())?;
        let gender = CString::new(record.gender.as_str())?;
        let location = CString::new(record.location.as_str())?;
        let name = CString::new(record.name.as_str())?;
        let (year, month, day, hour, minute) = clock(record.time);

        tracing::debug!(name = %record.name, kind = %record.kind, "newCriminal");
        unsafe {
            func(
                kind.as_ptr(),
                description.as_ptr(),
                year,
                month,
                day,
                hour,
                minute,
                id.as_ptr(),
                birth.as_ptr(),
                gender.as_ptr(),
                location.as_ptr(),
                name.as_ptr(),
            );
        }
        Ok(())
    }

    fn delete(&mut self, name: &str, time: NaiveDateTime) -> Result<(), StoreError> {
        let func: Symbol<'_, DeleteCriminalFn> = self.symbol("deleteCriminal")?;
        let c_name = CString::new(name)?;
        let (year, month, day, hour, minute) = clock(time);

        tracing::debug!(name, "deleteCriminal");
        unsafe {
            func(c_name.as_ptr(), year, month, day, hour, minute);
        }
        Ok(())
    }

    fn search(&self, query: &SearchQuery) -> Result<Vec<RecordSummary>, StoreError> {
        let mut grid = ResultGrid::new();
        let rows = RESULT_ROWS as c_int;
        let cols = RESULT_COLS as c_int;

        let count = match query {
            SearchQuery::At(time) => {
                let func: Symbol<'_, SearchByTimeFn> = self.symbol("searchbyTime")?;
                let (year, month, day, hour, minute) = clock(*time);
                unsafe { func(year, month, day, hour, minute, grid.as_mut_ptr(), rows, cols) }
            }
            SearchQuery::Between(start, end) => {
                let func: Symbol<'_, SearchByIntervalFn> =
                    self.symbol("searchbyIntervalTime")?;
                let (y1, mo1, d1, h1, mi1) = clock(*start);
                let (y2, mo2, d2, h2, mi2) = clock(*end);
                unsafe {
                    func(
                        y1,
                        mo1,
                        d1,
                        h1,
                        mi1,
                        y2,
                        mo2,
                        d2,
                        h2,
                        mi2,
                        grid.as_mut_ptr(),
                        rows,
                        cols,
                    )
                }
            }
            SearchQuery::AtWithKind(time, kind) => {
                let func: Symbol<'_, SearchByTimeKindFn> = self.symbol("searchbyTimeCrime")?;
                let c_kind = CString::new(kind.as_str())?;
                let (year, month, day, hour, minute) = clock(*time);
                unsafe {
                    func(
                        year,
                        month,
                        day,
                        hour,
                        minute,
                        c_kind.as_ptr(),
                        grid.as_mut_ptr(),
                        rows,
                        cols,
                    )
                }
            }
            SearchQuery::BetweenWithKind(start, end, kind) => {
                let func: Symbol<'_, SearchByIntervalKindFn> =
                    self.symbol("searchbyIntervalTimeCrime")?;
                let c_kind = CString::new(kind.as_str())?;
                let (y1, mo1, d1, h1, mi1) = clock(*start);
                let (y2, mo2, d2, h2, mi2) = clock(*end);
                unsafe {
                    func(
                        y1,
                        mo1,
                        d1,
                        h1,
                        mi1,
                        y2,
                        mo2,
                        d2,
                        h2,
                        mi2,
                        c_kind.as_ptr(),
                        grid.as_mut_ptr(),
                        rows,
                        cols,
                    )
                }
            }
            SearchQuery::ByName(name) => {
                let func: Symbol<'_, SearchByNameFn> = self.symbol("searchbyName")?;
                let c_name = CString::new(name.as_str())?;
                unsafe { func(c_name.as_ptr(), grid.as_mut_ptr(), rows, cols) }
            }
        };

        tracing::debug!(count, "record store search returned");
        grid.decode(count)
    }
}

/// Split a datetime into the five integers the native ABI expects.
fn clock(time: NaiveDateTime) -> (c_int, c_int, c_int, c_int, c_int) {
    (
        time.year() as c_int,
        time.month() as c_int,
        time.day() as c_int,
        time.hour() as c_int,
        time.minute() as c_int,
    )
}

/// Caller-allocated result buffer: a row-pointer array over fixed-length
/// byte rows, as the native search functions expect.
struct ResultGrid {
    rows: Vec<[u8; RESULT_COLS]>,
    ptrs: Vec<*mut c_char>,
}

impl ResultGrid {
    fn new() -> Self {
        let mut rows = vec![[0u8; RESULT_COLS]; RESULT_ROWS];
        let ptrs = rows
            .iter_mut()
            .map(|row| row.as_mut_ptr() as *mut c_char)
            .collect();
        Self { rows, ptrs }
    }

    fn as_mut_ptr(&mut self) -> *mut *mut c_char {
        self.ptrs.as_mut_ptr()
    }

    /// Decode the first `count` rows. Rows at or after `count` are stale and
    /// never read.
    fn decode(&self, count: c_int) -> Result<Vec<RecordSummary>, StoreError> {
        let mut count = count.max(0) as usize;
        if count > RESULT_ROWS {
            tracing::warn!(count, "native store reported more rows than the grid holds");
            count = RESULT_ROWS;
        }
        self.rows[..count]
            .iter()
            .map(|row| decode_row(row_text(row)?))
            .collect()
    }
}

/// The text of one row: bytes up to the first NUL, as UTF-8.
fn row_text(row: &[u8]) -> Result<&str, StoreError> {
    let end = row.iter().position(|&b| b == 0).unwrap_or(row.len());
    std::str::from_utf8(&row[..end])
        .map_err(|_| StoreError::MalformedRow(String::from_utf8_lossy(&row[..end]).into_owned()))
}

/// Parse one `'|'`-separated row in display order.
fn decode_row(line: &str) -> Result<RecordSummary, StoreError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    match fields[..] {
        [name, id, gender, birth, kind, location, time] => Ok(RecordSummary {
            name: name.to_owned(),
            id: id.to_owned(),
            gender: gender.to_owned(),
            birth: birth.to_owned(),
            kind: kind.to_owned(),
            location: location.to_owned(),
            time: time.to_owned(),
        }),
        _ => Err(StoreError::MalformedRow(line.to_owned())),
    }
}
