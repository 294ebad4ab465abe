//! Macros backing the extensible records of `c8y-model`.
//!
//! `#[derive(ExtensibleRecord)]` turns the serde attributes of a record into a static dispatch table from wire
//! name to field, and generates the accessors, `Deserialize` and `Display` implementations. It is only meant to
//! be used inside `c8y-model` itself as the generated code refers to `crate::record`.
//!
//! `#[register_fragment(Record, "name")]` registers the annotated type as the target type of a custom fragment
//! when the process starts. The expansion uses `#[ctor::ctor]`, so the calling crate needs `ctor` as a dependency.

use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, Data, DeriveInput, Error, Fields, GenericArgument, Ident, LitStr, Path, PathArguments, Token, Type, parenthesized, parse_macro_input};

#[proc_macro_derive(ExtensibleRecord, attributes(serde))]
pub fn derive_extensible_record(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    expand_extensible_record(&input).unwrap_or_else(Error::into_compile_error).into()
}

#[proc_macro_attribute]
pub fn register_fragment(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as RegisterFragmentArgs);
    let input = parse_macro_input!(item as DeriveInput);

    if !input.generics.params.is_empty() {
        return Error::new_spanned(&input.generics, "generic types cannot be registered as a fragment")
            .into_compile_error()
            .into();
    }

    let name = &input.ident;
    let record = &args.record;
    let property = &args.property;

    let record_name = record.segments.last().map(|segment| segment.ident.to_string()).unwrap_or_default();
    let raw_fn_name: String = format!("{}_{}_{}", record_name, name, property.value())
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let fn_name = format_ident!("register_{}", raw_fn_name.to_case(Case::Snake));

    let expanded = quote! {
        #input

        #[ctor::ctor]
        fn #fn_name() {
            #record::register_fragment::<#name>(#property);
        }
    };

    expanded.into()
}

struct RegisterFragmentArgs {
    record: Path,
    property: LitStr,
}

impl Parse for RegisterFragmentArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let record = input.parse()?;
        input.parse::<Token![,]>()?;
        let property = input.parse()?;
        Ok(RegisterFragmentArgs { record, property })
    }
}

struct DeclaredField<'a> {
    ident: &'a Ident,
    inner: &'a Type,
    wire_name: String,
}

fn expand_extensible_record(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(&input.generics, "extensible records cannot be generic"));
    }

    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(name, "ExtensibleRecord can only be derived for structs"));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(Error::new_spanned(name, "ExtensibleRecord requires named fields"));
    };

    let container = serde_attributes(&input.attrs)?;
    let mut open_field: Option<&Ident> = None;
    let mut declared = Vec::new();

    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else { continue };
        let attributes = serde_attributes(&field.attrs)?;
        if attributes.skip {
            continue;
        }

        if attributes.flatten {
            if open_field.is_some() {
                return Err(Error::new_spanned(field, "an extensible record has exactly one #[serde(flatten)] open field"));
            }
            open_field = Some(ident);
            continue;
        }

        let inner = option_inner(&field.ty).ok_or_else(|| Error::new_spanned(&field.ty, "declared fields of an extensible record must be an Option"))?;
        let wire_name = wire_name(ident, &attributes, &container)?;
        declared.push(DeclaredField { ident, inner, wire_name });
    }

    let open_field = open_field.ok_or_else(|| Error::new_spanned(name, "missing the #[serde(flatten)] open field"))?;
    let type_name = name.to_string();
    let wire_names = declared.iter().map(|field| &field.wire_name);

    let arms = declared.iter().map(|field| {
        let ident = field.ident;
        let wire_name = &field.wire_name;
        quote! {
            #wire_name => match ::serde_json::from_value(value) {
                Ok(converted) => {
                    self.#ident = converted;
                    crate::record::Assignment::Assigned
                }
                Err(err) => crate::record::Assignment::Invalid(err),
            },
        }
    });

    let accessors = declared.iter().map(|field| {
        let ident = field.ident;
        let inner = field.inner;
        let setter = format_ident!("set_{}", ident);
        let take = format_ident!("take_{}", ident);
        let getter_doc = format!("The `{}` property, if present.", field.wire_name);
        quote! {
            #[doc = #getter_doc]
            pub fn #ident(&self) -> Option<&#inner> {
                self.#ident.as_ref()
            }

            pub fn #setter(&mut self, #ident: impl Into<#inner>) -> &mut Self {
                self.#ident = Some(#ident.into());
                self
            }

            pub fn #take(&mut self) -> Option<#inner> {
                self.#ident.take()
            }
        }
    });

    let open_setter = format_ident!("set_{}", open_field);

    Ok(quote! {
        impl crate::record::ExtensibleRecord for #name {
            const TYPE_NAME: &'static str = #type_name;
            const DECLARED_FIELDS: &'static [&'static str] = &[#(#wire_names),*];

            fn assign_declared(&mut self, property: &str, value: ::serde_json::Value) -> crate::record::Assignment {
                match property {
                    #(#arms)*
                    _ => crate::record::Assignment::Undeclared(value),
                }
            }

            fn fragments(&self) -> &crate::record::CustomFragments {
                &self.#open_field
            }

            fn fragments_mut(&mut self) -> &mut crate::record::CustomFragments {
                &mut self.#open_field
            }
        }

        impl #name {
            #(#accessors)*

            /// Custom fragments captured next to the declared fields.
            pub fn #open_field(&self) -> &crate::record::CustomFragments {
                &self.#open_field
            }

            /// Replaces all custom fragments. Entries named after a declared field are discarded.
            pub fn #open_setter(&mut self, fragments: crate::record::CustomFragments) -> &mut Self {
                self.#open_field = crate::record::retain_undeclared::<Self>(fragments);
                self
            }

            /// Registers `T` as the type of the custom fragment `name` for every record deserialized afterwards.
            pub fn register_fragment<T>(name: &str)
            where
                T: crate::record::Fragment + ::serde::de::DeserializeOwned,
            {
                crate::record::register_fragment::<Self, T>(name);
            }
        }

        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                crate::record::deserialize_with_global_registry(deserializer)
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&crate::record::debug_string(self, #type_name))
            }
        }
    })
}

#[derive(Default)]
struct SerdeAttributes {
    rename: Option<String>,
    rename_all: Option<String>,
    flatten: bool,
    skip: bool,
}

fn serde_attributes(attrs: &[Attribute]) -> syn::Result<SerdeAttributes> {
    let mut parsed = SerdeAttributes::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                parsed.rename = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("rename_all") {
                parsed.rename_all = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("flatten") {
                parsed.flatten = true;
            } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_deserializing") {
                parsed.skip = true;
            } else if meta.input.peek(Token![=]) {
                meta.value()?.parse::<syn::Expr>()?;
            } else if meta.input.peek(syn::token::Paren) {
                let content;
                parenthesized!(content in meta.input);
                content.parse::<TokenStream2>()?;
            }
            Ok(())
        })?;
    }

    Ok(parsed)
}

fn wire_name(ident: &Ident, attributes: &SerdeAttributes, container: &SerdeAttributes) -> syn::Result<String> {
    if let Some(rename) = &attributes.rename {
        return Ok(rename.clone());
    }

    let name = ident.unraw().to_string();
    match container.rename_all.as_deref() {
        None | Some("snake_case") => Ok(name),
        Some("camelCase") => Ok(name.from_case(Case::Snake).to_case(Case::Camel)),
        Some("PascalCase") => Ok(name.from_case(Case::Snake).to_case(Case::Pascal)),
        Some(other) => Err(Error::new_spanned(ident, format!("unsupported rename_all rule '{}'", other))),
    }
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else { return None };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }

    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    match arguments.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
