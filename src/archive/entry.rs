use crate::archive::shape::short_type_name;
use crate::archive::{Field, FieldAs, Inherits, Shape, base_object, base_object_mut};

/// A record type with a type-bound field registration.
///
/// `register` lists every serialized field once; both archive directions and
/// schema introspection walk the same list.
pub trait Record: Sized {
	/// Register this record's fields in conversion order.
	fn register<F: Fields<Self>>(fields: &mut F);
}

/// A field registration for `T` defined outside of `T`.
///
/// Implement this on a local marker type to convert a record type that cannot
/// implement [`Record`] itself, then reach it through [`Fields::bind_with`]
/// (directly, or wrapped as `Option<Def>` / `Vec<Def>` for wrapped fields),
/// [`Fields::bind_base_with`], or the `*_with` entry points. A type-bound [`Record`] impl always wins for
/// plain [`Fields::bind`]; external definitions are only consulted when named.
pub trait RecordDef<T> {
	/// Register the fields of `T` in conversion order.
	fn register<F: Fields<T>>(fields: &mut F);

	/// Shape reported for fields converted through this definition.
	fn shape() -> Shape {
		Shape::External(short_type_name::<T>())
	}
}

/// Definition that resolves to the type-bound [`Record`] impl.
#[derive(Debug, Clone, Copy, Default)]
pub struct Member;

impl<T: Record> RecordDef<T> for Member {
	fn register<F: Fields<T>>(fields: &mut F) {
		T::register(fields);
	}

	fn shape() -> Shape {
		Shape::Record(short_type_name::<T>())
	}
}

/// Field registration visitor implemented by each archive direction.
///
/// Accessor pairs give the output archive shared access and the input archive
/// mutable access to the same field.
pub trait Fields<R> {
	/// Register a field under `key`.
	fn bind<T: Field>(&mut self, key: &str, get: impl Fn(&R) -> &T, get_mut: impl FnOnce(&mut R) -> &mut T) -> &mut Self;

	/// Register a field that converts through converter `D`.
	///
	/// `D` is a [`RecordDef`] for the field type, or a std wrapper around one:
	/// `bind_with::<Vec<HumanDef>, _>` converts a `Vec<Human>`.
	fn bind_with<D: FieldAs<T>, T>(&mut self, key: &str, get: impl Fn(&R) -> &T, get_mut: impl FnOnce(&mut R) -> &mut T) -> &mut Self;

	/// Register the base-record slice of `R` as a nested record under `key`.
	fn bind_base<B: Record>(&mut self, key: &str) -> &mut Self
	where
		R: Inherits<B>,
	{
		self.bind(key, base_object::<B, R>, base_object_mut::<B, R>)
	}

	/// Register the base-record slice of `R` under `key`, converted through `D`.
	fn bind_base_with<D: RecordDef<B>, B>(&mut self, key: &str) -> &mut Self
	where
		R: Inherits<B>,
	{
		self.bind_with::<D, B>(key, base_object::<B, R>, base_object_mut::<B, R>)
	}
}

/// Register fields whose keys are their own identifiers.
///
/// `bind!(fields; legs, name)` expands to
/// `fields.bind("legs", |r| &r.legs, |r| &mut r.legs).bind("name", ...)`.
#[macro_export]
macro_rules! bind {
	($fields:expr; $($name:ident),+ $(,)?) => {
		$fields$(.bind(::core::stringify!($name), |r| &r.$name, |r| &mut r.$name))+
	};
}
