//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro for automatically registering solvers with the plugin system
///
/// Submits a `SolverPlugin` to the inventory, named after the type. Discovery
/// only accepts names of the form `DayNN` with `NN` in 01-25, so the type name
/// is the registration key.
///
/// # Requirements
///
/// The type must be a unit struct implementing the `Solver` trait. If the trait
/// is not implemented, you will get a clear compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `Day01: Solver` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use aoc_solver::{AocSolver, AutoRegisterSolver};
///
/// #[derive(AocSolver, AutoRegisterSolver)]
/// pub struct Day01;
/// ```
#[proc_macro_derive(AutoRegisterSolver)]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_auto_register(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<TokenStream2> {
    require_unit_struct(input, "AutoRegisterSolver")?;

    let name = &input.ident;
    let name_str = name.to_string();

    Ok(quote! {
        // Compile-time check that the type implements Solver trait
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                name: #name_str,
                constructor: || ::std::boxed::Box::new(#name),
            }
        }
    })
}

/// Derive macro implementing `Solver` from the two-phase traits
///
/// The type must implement `AocParser`, `PartSolver<1>` and `PartSolver<2>`.
/// Each level parses the raw input afresh, so the levels stay independent.
///
/// # Example
///
/// ```ignore
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
///
/// #[derive(AocSolver)]
/// pub struct Day04;
///
/// impl AocParser for Day04 {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl PartSolver<1> for Day04 {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// impl PartSolver<2> for Day04 {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().map(|l| l.len()).sum::<usize>().to_string())
///     }
/// }
/// ```
#[proc_macro_derive(AocSolver)]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            fn solve_level1(
                &self,
                input: &str,
            ) -> ::std::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                let mut shared = <Self as ::aoc_solver::AocParser>::parse(input)?;
                <Self as ::aoc_solver::PartSolver<1>>::solve(&mut shared)
            }

            fn solve_level2(
                &self,
                input: &str,
            ) -> ::std::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                let mut shared = <Self as ::aoc_solver::AocParser>::parse(input)?;
                <Self as ::aoc_solver::PartSolver<2>>::solve(&mut shared)
            }
        }
    };

    TokenStream::from(expanded)
}

fn require_unit_struct(input: &DeriveInput, derive: &str) -> syn::Result<()> {
    match &input.data {
        Data::Struct(data) if matches!(data.fields, Fields::Unit) => Ok(()),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{} can only be derived for unit structs", derive),
        )),
    }
}
