/// Possible relations between two geometric entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeoRelation {
    /// The entities do not share any area
    Disjoint,
    /// The entities share some area, but neither contains the other
    Intersecting,
    /// The first entity contains the second
    Surrounding,
    /// The first entity is contained by the second
    Enclosed,
}
