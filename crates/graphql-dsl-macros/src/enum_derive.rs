use crate::trim_raw;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Data;
use syn::DeriveInput;
use syn::Fields;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let type_name = trim_raw(&ident.to_string()).to_string();

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "`GraphQLEnum` can only be derived for enums",
            ));
        }
    };

    let values = variants
        .iter()
        .map(|variant| {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    variant,
                    "`GraphQLEnum` only supports unit variants",
                ));
            }
            Ok(trim_raw(&variant.ident.to_string()).to_string())
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl graphql_dsl::GraphQLTypeInfo for #ident {
            fn graphql_name() -> ::std::string::String {
                #type_name.to_string()
            }
        }

        impl graphql_dsl::GraphQLEnumInfo for #ident {
            fn values() -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![#(#values.to_string()),*]
            }
        }
    })
}
