//! Derive macro for strict keyword-style struct construction

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::{format_ident, quote, ToTokens};
use syn::ext::IdentExt;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields};

/// `#[derive(StructBase)]`: generates the declared field set and the
/// name-to-field dispatch behind `construct` and `assign`.
///
/// Supports structs with named fields and unit structs. Every field type must
/// implement `sugars_struct::FieldValue`, which holds for any
/// `DeserializeOwned + Default` type.
///
/// Example:
/// ```ignore
/// use sugars_struct::StructBase;
///
/// #[derive(StructBase)]
/// struct Point {
///     x: Option<i64>,
///     y: Option<i64>,
/// }
///
/// let p = Point::construct([("x", 3)])?;
/// ```
#[proc_macro_derive(StructBase)]
pub fn derive_struct_base(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct FieldInfo {
    ident: syn::Ident,
    name: String,
    ty: syn::Type,
    slot: syn::Ident,
}

fn expand(mut input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let private = quote!(::sugars_struct::__private);
    let name = input.ident.clone();
    let type_name = name.unraw().to_string();

    let (fields, is_unit) = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => (
                named
                    .named
                    .iter()
                    .enumerate()
                    .map(|(index, field)| {
                        let ident = field.ident.clone().ok_or_else(|| {
                            syn::Error::new_spanned(field, "Field must have a name")
                        })?;
                        Ok(FieldInfo {
                            name: ident.unraw().to_string(),
                            ident,
                            ty: field.ty.clone(),
                            slot: format_ident!("__slot_{}", index),
                        })
                    })
                    .collect::<syn::Result<Vec<_>>>()?,
                false,
            ),
            Fields::Unit => (Vec::new(), true),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "StructBase requires named fields; tuple structs have no field names",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "StructBase can only be derived for structs",
            ))
        }
    };

    if !input.generics.params.is_empty() {
        let where_clause = input.generics.make_where_clause();
        for field in &fields {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::sugars_struct::FieldValue));
        }
    }
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let field_count = fields.len();
    let descriptors = fields.iter().map(|field| {
        let field_name = &field.name;
        let label = type_label(&field.ty);
        quote!(#private::Field::new(#field_name, #label))
    });

    let slots = fields.iter().map(|field| {
        let slot = &field.slot;
        let ty = &field.ty;
        quote!(let mut #slot: ::core::option::Option<#ty> = ::core::option::Option::None;)
    });

    let construct_arms = fields.iter().map(|field| {
        let field_name = &field.name;
        let slot = &field.slot;
        quote! {
            #field_name => #slot = #private::decode(schema, #field_name, value)?,
        }
    });

    let build = if is_unit {
        quote!(Self)
    } else {
        let inits = fields.iter().map(|field| {
            let ident = &field.ident;
            let slot = &field.slot;
            quote!(#ident: #private::or_null(#slot))
        });
        quote!(Self { #(#inits),* })
    };

    let assign_arms = fields.iter().map(|field| {
        let field_name = &field.name;
        let ident = &field.ident;
        quote! {
            #field_name => {
                self.#ident = #private::or_null(#private::decode(schema, #field_name, value)?);
                ::core::result::Result::Ok(())
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::sugars_struct::StructBase for #name #ty_generics #where_clause {
            fn schema() -> &'static #private::Schema {
                static FIELDS: [#private::Field; #field_count] = [#(#descriptors),*];
                static SCHEMA: #private::Schema = #private::Schema::new(#type_name, &FIELDS);
                &SCHEMA
            }

            #[allow(unused_variables)]
            fn from_arguments(arguments: #private::Arguments) -> #private::Result<Self> {
                let schema = <Self as ::sugars_struct::StructBase>::schema();
                #(#slots)*
                for (name, value) in arguments {
                    match name.as_str() {
                        #(#construct_arms)*
                        _ => return ::core::result::Result::Err(#private::undeclared(schema, &name)),
                    }
                }
                ::core::result::Result::Ok(#build)
            }

            #[allow(unused_variables)]
            fn assign_value(&mut self, field: &str, value: #private::Supplied) -> #private::Result<()> {
                let schema = <Self as ::sugars_struct::StructBase>::schema();
                match field {
                    #(#assign_arms)*
                    _ => ::core::result::Result::Err(#private::undeclared(schema, field)),
                }
            }
        }
    })
}

/// Source spelling of a type with the token spacing tidied up.
fn type_label(ty: &syn::Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace("& ", "&")
        .replace("[ ", "[")
        .replace(" ]", "]")
        .replace(" ;", ";")
}
