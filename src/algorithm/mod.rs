/// Connectivity engine: marked-tile test, flood fill and reveal rule
pub mod connectivity;
/// Connected region representation with set semantics
pub mod region;
/// Whole-map enumeration of marked regions
pub mod survey;
