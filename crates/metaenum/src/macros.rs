/// Declare an enum together with its reflection table.
///
/// ```
/// metaenum::meta_enum! {
///     /// Compression levels.
///     #[derive(Debug, Hash)]
///     pub enum Compression: i32 {
///         Off,
///         /// Fast but weak
///         Fast = 3,
///         Balanced,
///         Best = 9,
///     }
/// }
///
/// use metaenum::MetaEnum;
///
/// let table = Compression::meta_enum();
/// assert_eq!(table.size(), 4);
/// assert_eq!(table.name_of(Compression::Balanced), "Balanced");
/// assert_eq!("Best".parse::<Compression>(), Ok(Compression::Best));
/// assert_eq!(Compression::Fast.to_string(), "Fast");
/// ```
///
/// The generated enum is `#[repr($repr)]` and derives `Clone`, `Copy`,
/// `PartialEq` and `Eq`; further derives go in the attributes. It also
/// implements [`MetaEnum`](crate::MetaEnum), `Display` (the member name)
/// and `FromStr` (by exact member name, failing with
/// [`ParseEnumError`](crate::ParseEnumError)).
///
/// The table is built from the member list exactly as written, on the first
/// lookup. Initializer expressions are handed to the compiler as the native
/// discriminants and never inspected by the table builder.
#[macro_export]
macro_rules! meta_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $value:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        #[derive(Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $(= $value)?
            ),*
        }

        impl $crate::MetaEnum for $name {
            type Repr = $repr;

            const NAME: &'static str = ::core::stringify!($name);

            const VARIANTS: &'static [Self] = &[$(Self::$variant),*];

            #[inline]
            fn to_repr(self) -> $repr {
                self as $repr
            }

            fn meta_enum() -> &'static $crate::MetaEnumTable<'static, Self> {
                fn build() -> $crate::MetaEnumTable<'static, $name> {
                    $crate::build_enum_table::<$name>(
                        ::core::stringify!($($(#[$variant_meta])* $variant $(= $value)?),*),
                        &[$(::core::stringify!($variant)),*],
                        &[$($crate::__explicit_value!($repr $(, $value)?)),*],
                    )
                }
                static TABLE: $crate::LazyTable<$name> = $crate::LazyTable::new(build);
                TABLE.get()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::enum_to_string(*self))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ParseEnumError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::string_to_enum::<Self>(s).ok_or_else(|| $crate::ParseEnumError {
                    enum_name: ::core::stringify!($name),
                    input: ::std::string::ToString::to_string(s),
                })
            }
        }
    };
}

/// One explicit-value slot: `Some(value)` if the member has an initializer.
#[doc(hidden)]
#[macro_export]
macro_rules! __explicit_value {
    ($repr:ident) => {
        ::core::option::Option::None::<$repr>
    };
    ($repr:ident, $value:expr) => {
        ::core::option::Option::Some::<$repr>($value)
    };
}
