/// Composition link from a derived record to its embedded base record.
///
/// Records model inheritance by embedding the base as a field; implementing
/// this trait lets [`Fields::bind_base`](crate::archive::Fields::bind_base)
/// convert that slice under its own key.
pub trait Inherits<B> {
	/// Borrow the base slice.
	fn base(&self) -> &B;

	/// Mutably borrow the base slice.
	fn base_mut(&mut self) -> &mut B;
}

/// View a derived record as its base record.
pub fn base_object<B, D: Inherits<B>>(derived: &D) -> &B {
	derived.base()
}

/// Mutably view a derived record as its base record.
pub fn base_object_mut<B, D: Inherits<B>>(derived: &mut D) -> &mut B {
	derived.base_mut()
}
