mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any kind of struct, except tuple structs.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use symnet_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("cannot take the logarithm of {}", self.value),
///     labels = ["this logarithm"],
///     help = "the argument must be positive",
/// )]
/// pub struct NonPositiveLog {
///     value: f64,
/// }
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                  |
/// | --------- | ---------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the error when it is displayed.          |
/// | `labels`  | An iterable of label texts, one for each span of the error, in order.        |
/// | `help`    | Optional help text for the error, describing what the user can do to fix it. |
///
/// `message` is required. If `labels` is omitted, the first span is labelled with
/// `"this expression"`. Labels beyond the number of spans are ignored, and empty labels highlight
/// their span without any text.
///
/// Each tag accepts an expression. For structs with named fields, the expression is evaluated
/// with the members of the struct in scope, so they can be used in the expression.
///
/// [`ErrorKind`]: https://docs.rs/symnet-error/latest/symnet_error/trait.ErrorKind.html
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ::symnet_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
            #target
        }
    }.into()
}
