//! Default grammar symbols

pub mod syntax {
    /// Separates single values and ranges within one listing
    pub const LISTING_DELIMITER: &str = ",";

    /// Separates the two endpoints of a range
    pub const RANGE_DELIMITER: &str = "~";

    /// Opens a deeper level that must be closed explicitly
    pub const LEVEL_OPENER: &str = ":[";

    /// Closes a level opened with the strict opener
    pub const LEVEL_CLOSER: &str = "]";

    /// Opens a deeper level whose closer may be omitted
    pub const LAZY_OPENER: &str = ":";

    /// Separates sibling level groups at the same depth
    pub const LEVEL_DELIMITER: &str = ",";
}

pub mod markers {
    /// Prefixes an index; doubled it denotes the size of the value space
    pub const INDEX_MARKER: &str = "#";

    /// Alone denotes a random element, followed by digits a sample size;
    /// doubled it excludes the original value
    pub const RANDOM_MARKER: &str = "?";

    /// Denotes every element of the value space
    pub const ALL_MARKER: &str = "*";
}
