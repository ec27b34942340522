#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodesCount(pub usize);

/// Pixel width of a single cell, may be fractional.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct Width(pub f64);
/// Pixel height of a single cell, may be fractional.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct Height(pub f64);
