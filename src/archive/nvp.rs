/// A key bound to a field reference for one conversion step.
///
/// `F` is either `&T` (output direction) or `&mut T` (input direction), so a
/// binding never grants more access than the archive that consumes it.
#[derive(Debug)]
pub struct Nvp<'k, F> {
	name: &'k str,
	field: F,
}

/// Bind `name` to a field reference.
pub fn bind<F>(name: &str, field: F) -> Nvp<'_, F> {
	Nvp { name, field }
}

impl<'k, F> Nvp<'k, F> {
	/// Key the field is stored under.
	pub fn name(&self) -> &'k str {
		self.name
	}
}

impl<T: ?Sized> Nvp<'_, &T> {
	/// Read-only view of the bound field.
	pub fn const_value(&self) -> &T {
		self.field
	}
}

impl<T: ?Sized> Nvp<'_, &mut T> {
	/// Mutable view of the bound field.
	pub fn value(&mut self) -> &mut T {
		&mut *self.field
	}

	/// Read-only view of the bound field.
	pub fn const_value(&self) -> &T {
		&*self.field
	}
}
