use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    meta::ParseNestedMeta,
    parse::{Parse, ParseStream},
    Data,
    DeriveInput,
    Expr,
    Fields,
    Ident,
    Result,
};

/// The tags given to the `#[error(...)]` attribute.
#[derive(Default)]
struct Tags {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Tags {
    /// Stores one `tag = expr` pair.
    fn tag(&mut self, meta: ParseNestedMeta) -> Result<()> {
        let slot = if meta.path.is_ident("message") {
            &mut self.message
        } else if meta.path.is_ident("labels") {
            &mut self.labels
        } else if meta.path.is_ident("help") {
            &mut self.help
        } else {
            return Err(meta.error("unknown tag, expected `message`, `labels` or `help`"));
        };

        if slot.is_some() {
            return Err(meta.error("duplicate tag"));
        }
        *slot = Some(meta.value()?.parse()?);
        Ok(())
    }
}

/// A struct deriving [`ErrorKind`].
pub struct ErrorKindTarget {
    pub name: Ident,
    fields: Vec<Ident>,
    message: Expr,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let input: DeriveInput = input.parse()?;

        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named.named.iter().filter_map(|field| field.ident.clone()).collect(),
                Fields::Unit => Vec::new(),
                Fields::Unnamed(unnamed) => return Err(syn::Error::new_spanned(
                    unnamed,
                    "`ErrorKind` cannot be derived for tuple structs",
                )),
            },
            _ => return Err(syn::Error::new_spanned(
                &input.ident,
                "`ErrorKind` can only be derived for structs",
            )),
        };

        let mut tags = Tags::default();
        for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("error")) {
            attr.parse_nested_meta(|meta| tags.tag(meta))?;
        }

        let message = tags.message.ok_or_else(|| syn::Error::new_spanned(
            &input.ident,
            "missing `message` tag in `#[error(...)]` attribute",
        ))?;

        Ok(Self {
            name: input.ident,
            fields,
            message,
            labels: tags.labels,
            help: tags.help,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let fields = &self.fields;
        let message = &self.message;
        let labels = match &self.labels {
            Some(labels) => quote! { #labels },
            None => quote! { ["this expression"] },
        };
        let help = self.help.as_ref().map(|help| quote! { report.set_help(#help); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> ::ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                // bring the fields into scope for the tag expressions
                #[allow(unused_variables)]
                let Self { #(#fields,)* } = self;

                let labels = #labels
                    .into_iter()
                    .zip(spans)
                    .map(|(text, span)| {
                        let text = ::std::string::ToString::to_string(&text);
                        let label = ::ariadne::Label::new((src_id, span.clone()))
                            .with_color(::symnet_error::EXPR);
                        if text.is_empty() {
                            label
                        } else {
                            label.with_message(text)
                        }
                    })
                    .collect::<::std::vec::Vec<_>>();

                let offset = spans.first().map_or(0, |span| span.start);
                #[allow(unused_mut)]
                let mut report = ::ariadne::Report::build(::ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message)
                    .with_labels(labels);
                #help
                report.finish()
            }
        });
    }
}
