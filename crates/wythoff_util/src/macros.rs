/// Declares integer newtypes that implement
/// [`TypedIndex`](crate::ti::TypedIndex). They print as `#` followed by the
/// number.
///
/// ```
/// wythoff_util::typed_index_struct! {
///     /// ID of a vertex.
///     pub struct VertexId(pub u32);
/// }
/// assert_eq!(VertexId(3).to_string(), "#3");
/// assert_eq!(format!("{:?}", [VertexId(0)]), "[#0]");
/// ```
#[macro_export]
macro_rules! typed_index_struct {
    ($(
        $(#[$attr:meta])*
        $vis:vis struct $name:ident($inner_vis:vis $inner:ty);
    )+) => {$(
        $(#[$attr])*
        #[derive(Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        $vis struct $name($inner_vis $inner);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }

        impl $crate::ti::TypedIndex for $name {
            const MAX_INDEX: usize = <$inner>::MAX as usize;
            const TYPE_NAME: &'static str = stringify!($name);

            fn to_index(self) -> usize {
                self.0 as usize
            }

            fn try_from_index(index: usize) -> ::std::result::Result<Self, $crate::error::IndexOverflow> {
                <$inner>::try_from(index)
                    .map(Self)
                    .map_err(|_| $crate::error::IndexOverflow::new::<Self>())
            }
        }
    )+};
}
