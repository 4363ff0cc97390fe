//! Zero-Cost Safety Macros
//!
//! Cell reads in the neighbour loop run `columns * rows * 8` times per
//! generation, so they go through `fast!`:
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Usage:
//! ```rust
//! use lifeboard_engine::fast;
//!
//! let cells = vec![0u8, 1, 0, 1];
//! let idx = 3;
//! // Read: fast!(slice, [index])
//! assert_eq!(*fast!(cells, [idx]), 1);
//!
//! let mut next = vec![0u8; 4];
//! // Write: fast!(slice, [index] = value)
//! fast!(next, [idx] = 1);
//! assert_eq!(next[idx], 1);
//! ```

/// Bounds-checked in debug, `get_unchecked` in release.
///
/// Callers must have already proven the index is in range (the grid does this
/// with `in_bounds` before every read).
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn fast_read_matches_indexing() {
        let cells = vec![0u8, 1, 1, 0];
        assert_eq!(*fast!(cells, [1]), 1);
        assert_eq!(*fast!(cells, [3]), 0);
    }

    #[test]
    fn fast_write_stores_value() {
        let mut cells = vec![0u8; 4];
        fast!(cells, [2] = 1);
        assert_eq!(cells, vec![0, 0, 1, 0]);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fast_read_panics_out_of_range_in_debug() {
        let cells = vec![0u8; 3];
        let _ = *fast!(cells, [10]);
    }
}
