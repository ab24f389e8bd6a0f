/// Trait for types that can detect collisions between `self` and `other` of type `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}
