/// Direction in which a column participates in reads and writes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapType {
    /// The column is both written to and read back from storage.
    #[default]
    TwoSides,

    /// The column is written on insert/update but never scanned back.
    OnlyToStorage,

    /// The column is scanned from query results but never written.
    OnlyFromStorage,
}

impl MapType {
    pub const fn writes_to_storage(self) -> bool {
        matches!(self, Self::TwoSides | Self::OnlyToStorage)
    }

    pub const fn reads_from_storage(self) -> bool {
        matches!(self, Self::TwoSides | Self::OnlyFromStorage)
    }
}
