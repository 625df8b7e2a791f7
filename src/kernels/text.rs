/// Unit appended by [`string_concat`].
pub const CONCAT_UNIT: &str = "a";

/// Fixed 14-character phrase appended by [`string_alloc`].
pub const ALLOC_PHRASE: &str = "Hello, World! ";

/// Appends `"a"` to an initially empty string `iterations` times; returns its length.
pub fn string_concat(iterations: usize) -> u64 {
    let mut s = String::new();
    for _ in 0..iterations {
        s.push_str(CONCAT_UNIT);
    }
    s.len() as u64
}

/// Appends [`ALLOC_PHRASE`] `iterations` times; returns the final length.
pub fn string_alloc(iterations: usize) -> u64 {
    let mut s = String::new();
    for _ in 0..iterations {
        s.push_str(ALLOC_PHRASE);
    }
    s.len() as u64
}
