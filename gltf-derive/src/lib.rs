//! Derives `gltf_json::validation::Validate` for a struct by recursively
//! validating every field, in the same spirit as `validator_derive`
//! (<https://github.com/Keats/validator>), which the original macro in
//! this crate was adapted from.

use inflections::Inflect;
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

/// Derives `Validate` for a struct, generating a `validate_minimally` and a
/// `validate_completely` that call through to every field in declaration
/// order, naming each field's `Path` segment after its camelCase JSON key.
///
/// An optional `#[gltf(validate_hook = "function_name")]` attribute on the
/// struct additionally calls `function_name(self, root, path, report)` after
/// the per-field validation, for invariants that span more than one field
/// (e.g. "either `sparse` or `bufferView` must be present").
#[proc_macro_derive(Validate, attributes(gltf))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    expand(&ast).into()
}

fn expand(ast: &DeriveInput) -> proc_macro2::TokenStream {
    let fields = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                panic!("#[derive(Validate)] does not support tuple structs")
            }
        },
        _ => panic!("#[derive(Validate)] only supports structs"),
    };

    let ident = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let field_idents: Vec<_> = fields.iter().map(|f| f.ident.as_ref().unwrap()).collect();
    let field_names: Vec<_> = field_idents
        .iter()
        .map(|ident| ident.to_string().to_camel_case())
        .collect();

    let hook = validate_hook(ast);
    let minimal_hook_call = hook.as_ref().map(|hook| {
        quote!(#hook(self, _root, _path, _report);)
    });
    let complete_hook_call = hook.as_ref().map(|hook| {
        quote!(#hook(self, _root, _path, _report);)
    });

    quote! {
        impl #impl_generics gltf_json::validation::Validate for #ident #ty_generics #where_clause {
            fn validate_minimally<P, R>(&self, _root: &gltf_json::Asset, _path: P, _report: &mut R)
            where
                P: Fn() -> gltf_json::Path,
                R: FnMut(&dyn Fn() -> gltf_json::Path, gltf_json::validation::Error),
            {
                #(
                    self.#field_idents.validate_minimally(
                        _root,
                        || _path().field(#field_names),
                        _report,
                    );
                )*
                #minimal_hook_call
            }

            fn validate_completely<P, R>(&self, _root: &gltf_json::Asset, _path: P, _report: &mut R)
            where
                P: Fn() -> gltf_json::Path,
                R: FnMut(&dyn Fn() -> gltf_json::Path, gltf_json::validation::Error),
            {
                #(
                    self.#field_idents.validate_completely(
                        _root,
                        || _path().field(#field_names),
                        _report,
                    );
                )*
                #complete_hook_call
            }
        }
    }
}

fn validate_hook(ast: &DeriveInput) -> Option<syn::Path> {
    for attr in &ast.attrs {
        if !attr.path().is_ident("gltf") {
            continue;
        }
        let mut hook = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("validate_hook") {
                let value: LitStr = meta.value()?.parse()?;
                hook = Some(value.parse()?);
            }
            Ok(())
        });
        if hook.is_some() {
            return hook;
        }
    }
    None
}
