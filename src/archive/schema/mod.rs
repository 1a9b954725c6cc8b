use crate::archive::shape::short_type_name;
use crate::archive::{Field, FieldAs, Fields, Inherits, Member, Record, RecordDef, Shape};

/// One registered field of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
	/// Key the field is stored under.
	pub key: String,
	/// Static shape of the field type.
	pub shape: Shape,
	/// Whether the field is the record's base slice.
	pub base: bool,
}

/// Registered fields of a record type, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
	/// Record type name without module path.
	pub name: &'static str,
	/// Fields in conversion order.
	pub fields: Vec<FieldInfo>,
}

impl Schema {
	/// Collect the schema of a type-bound record.
	pub fn of<R: Record>() -> Self {
		Self::of_def::<Member, R>()
	}

	/// Collect the schema `D` registers for `T`.
	pub fn of_def<D: RecordDef<T>, T>() -> Self {
		let mut collector = Collector { fields: Vec::new() };
		<D as RecordDef<T>>::register::<Collector>(&mut collector);
		Self {
			name: short_type_name::<T>(),
			fields: collector.fields,
		}
	}

	/// Registered keys in order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|field| field.key.as_str())
	}

	/// Look up a field by key.
	pub fn field(&self, key: &str) -> Option<&FieldInfo> {
		self.fields.iter().find(|field| field.key == key)
	}
}

struct Collector {
	fields: Vec<FieldInfo>,
}

impl Collector {
	fn push(&mut self, key: &str, shape: Shape, base: bool) -> &mut Self {
		self.fields.push(FieldInfo {
			key: key.to_owned(),
			shape,
			base,
		});
		self
	}
}

impl<R> Fields<R> for Collector {
	fn bind<T: Field>(&mut self, key: &str, _get: impl Fn(&R) -> &T, _get_mut: impl FnOnce(&mut R) -> &mut T) -> &mut Self {
		self.push(key, T::shape(), false)
	}

	fn bind_with<D: FieldAs<T>, T>(&mut self, key: &str, _get: impl Fn(&R) -> &T, _get_mut: impl FnOnce(&mut R) -> &mut T) -> &mut Self {
		self.push(key, <D as FieldAs<T>>::shape(), false)
	}

	fn bind_base<B: Record>(&mut self, key: &str) -> &mut Self
	where
		R: Inherits<B>,
	{
		self.push(key, <B as Field>::shape(), true)
	}

	fn bind_base_with<D: RecordDef<B>, B>(&mut self, key: &str) -> &mut Self
	where
		R: Inherits<B>,
	{
		self.push(key, <D as RecordDef<B>>::shape(), true)
	}
}
