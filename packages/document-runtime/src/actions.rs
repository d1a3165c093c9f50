//! Declarative action enums.
//!
//! [`document_actions!`] turns an operation table into:
//! - a closed enum, one variant per operation, wrapping its input struct
//! - serde as `{ "type": "<NAME>", "input": { ... } }`
//! - an [`Action`](crate::Action) impl with the type string and scope of each variant
//! - one action creator per operation (`Enum::add_service(input)`)
//! - `From<Input>` for every input type
//!
//! Input types must be distinct per enum, since each gets its own `From` impl.

/// Generate an action enum for a document type.
///
/// ```ignore
/// document_actions! {
///     /// Operations of the counter document.
///     pub enum CounterAction {
///         global "INCREMENT" => Increment(IncrementInput) as increment,
///         local "SET_VIEW" => SetView(SetViewInput) as set_view,
///     }
/// }
///
/// let action = CounterAction::increment(IncrementInput { by: 2 });
/// assert_eq!(action.action_type(), "INCREMENT");
/// ```
#[macro_export]
macro_rules! document_actions {
    (@scope global) => {
        $crate::Scope::Global
    };
    (@scope local) => {
        $crate::Scope::Local
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $scope:ident $type_name:literal => $variant:ident ( $input:ty ) as $creator:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(tag = "type", content = "input")]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $type_name)]
                $variant($input),
            )+
        }

        impl $crate::Action for $name {
            fn action_type(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $type_name, )+
                }
            }

            fn scope(&self) -> $crate::Scope {
                match self {
                    $( Self::$variant(_) => $crate::document_actions!(@scope $scope), )+
                }
            }
        }

        impl $name {
            $(
                #[doc = concat!("Builds a `", $type_name, "` action.")]
                pub fn $creator(input: $input) -> Self {
                    Self::$variant(input)
                }
            )+
        }

        $(
            impl ::std::convert::From<$input> for $name {
                fn from(input: $input) -> Self {
                    Self::$variant(input)
                }
            }
        )+
    };
}
