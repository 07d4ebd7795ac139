//! Declaration macro for mapped entities

/// Declare the mapped fields of a struct.
///
/// Lists each field with its column name in declared order. A field that is
/// not listed, or is listed with column `"-"`, is not mapped. Every listed
/// field type must implement [`FieldType`](crate::model::FieldType), and the
/// struct must implement `Default`.
///
/// Generates [`Mapped`](crate::model::Mapped) and
/// [`FromRow`](crate::model::FromRow), and makes the struct (and `Vec` of it)
/// a decode destination.
///
/// ```
/// use nebula_ogm::mapped;
/// use nebula_ogm::model::VertexKey;
///
/// #[derive(Debug, Default)]
/// pub struct Person {
///     pub key: VertexKey,
///     pub name: String,
///     pub age: i64,
/// }
///
/// mapped!(Person {
///     name => "name",
///     age => "age",
/// });
/// ```
#[macro_export]
macro_rules! mapped {
    ($ty:ty { $($field:ident => $column:literal),* $(,)? }) => {
        impl $crate::model::Mapped for $ty {
            fn field_specs(&self) -> &'static [$crate::model::FieldSpec] {
                <$ty as $crate::model::FromRow>::specs()
            }

            fn field_values(&self) -> ::std::vec::Vec<$crate::model::FieldValue> {
                ::std::vec![$($crate::model::FieldType::to_field_value(&self.$field)),*]
            }
        }

        impl $crate::model::FromRow for $ty {
            fn specs() -> &'static [$crate::model::FieldSpec] {
                const SPECS: &[$crate::model::FieldSpec] = &[
                    $($crate::model::FieldSpec::new(::std::stringify!($field), $column)),*
                ];
                SPECS
            }

            #[allow(unused_assignments, unused_mut, unused_variables)]
            fn set_field(
                &mut self,
                pos: usize,
                value: &$crate::result::Value,
            ) -> $crate::error::OgmResult<()> {
                let mut index = 0usize;
                $(
                    if index == pos {
                        return $crate::model::FieldType::assign(&mut self.$field, value);
                    }
                    index += 1;
                )*
                Ok(())
            }
        }

        impl $crate::result::DecodeRow for $ty {
            fn decode_rows(
                rs: &$crate::result::ResultSet,
            ) -> $crate::error::OgmResult<::std::vec::Vec<Self>> {
                $crate::result::decode::decode_structs::<$ty>(rs)
            }
        }

        impl $crate::result::Decode for $ty {
            fn decode_into(
                &mut self,
                rs: &$crate::result::ResultSet,
            ) -> $crate::error::OgmResult<()> {
                $crate::result::decode::decode_struct(self, rs)
            }
        }
    };
}
