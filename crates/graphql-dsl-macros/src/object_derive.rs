use crate::trim_raw;
use graphql_dsl_core::type_info::camel_case;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Data;
use syn::DeriveInput;
use syn::Fields;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let type_name = trim_raw(&ident.to_string()).to_string();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "`GraphQLObject` requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "`GraphQLObject` can only be derived for structs",
            ));
        }
    };

    let field_infos = fields
        .iter()
        .map(|field| {
            let field_ident = field
                .ident
                .as_ref()
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
            let field_name = camel_case(trim_raw(&field_ident.to_string()));
            let field_type = &field.ty;
            Ok(quote! {
                graphql_dsl::FieldInfo::new(
                    #field_name,
                    <#field_type as graphql_dsl::GraphQLTypeInfo>::type_annotation(),
                )
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl graphql_dsl::GraphQLTypeInfo for #ident {
            fn graphql_name() -> ::std::string::String {
                #type_name.to_string()
            }
        }

        impl graphql_dsl::GraphQLObjectInfo for #ident {
            fn fields() -> ::std::vec::Vec<graphql_dsl::FieldInfo> {
                ::std::vec![#(#field_infos),*]
            }
        }
    })
}
