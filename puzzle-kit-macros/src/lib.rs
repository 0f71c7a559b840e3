//! Procedural macros for the `puzzle-kit` crate.

use proc_macro::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// Properties collected from a `#[puzzle_runner(...)]` attribute.
#[derive(Default)]
struct RunnerProperties {
    /// Expression resolving to the puzzle title as `&'static str`.
    title: Option<Expr>,
    /// Type implementing `ParseData`.
    parsed: Option<Type>,
    /// Type implementing `Solution<PartOne>`.
    part_one: Option<Type>,
    /// Type implementing `Solution<PartTwo>`.
    part_two: Option<Type>,
    /// Expression resolving to the recorded part one answer as `&'static str`.
    answer_one: Option<Expr>,
    /// Expression resolving to the recorded part two answer as `&'static str`.
    answer_two: Option<Expr>,
}

/// Parse a property value into `slot`, erroring if the property was already given.
fn set_once<T: syn::parse::Parse>(
    slot: &mut Option<T>,
    meta: &ParseNestedMeta<'_>,
    key: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate '{key}' property")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}

impl RunnerProperties {
    fn parse_property(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("title") {
            set_once(&mut self.title, meta, "title")
        } else if meta.path.is_ident("parsed") {
            set_once(&mut self.parsed, meta, "parsed")
        } else if meta.path.is_ident("part_one") {
            set_once(&mut self.part_one, meta, "part_one")
        } else if meta.path.is_ident("part_two") {
            set_once(&mut self.part_two, meta, "part_two")
        } else if meta.path.is_ident("answer_one") {
            set_once(&mut self.answer_one, meta, "answer_one")
        } else if meta.path.is_ident("answer_two") {
            set_once(&mut self.answer_two, meta, "answer_two")
        } else {
            Err(meta.error("unsupported puzzle runner property"))
        }
    }
}

/// Wrap an optional answer expression as tokens for an `Option<&'static str>`.
fn answer_tokens(answer: Option<&Expr>) -> proc_macro2::TokenStream {
    match answer {
        Some(expr) => quote! { ::core::option::Option::Some(#expr) },
        None => quote! { ::core::option::Option::None },
    }
}

/// Attribute macro that implements `PuzzleRunner` for a struct or the self type of an impl block.
///
/// The generated `run` routes to the matching `puzzle_kit::runner` driver depending on which
/// properties are given.
///
/// # Properties
///
/// - `title` (required): An expression for the puzzle title as `&'static str`.
/// - `part_one` (required): The type implementing `Solution<PartOne>`.
/// - `part_two` (optional): The type implementing `Solution<PartTwo>`. If omitted, only part one
///   runs.
/// - `parsed` (optional): A type implementing `ParseData` to parse input before solving. If
///   omitted, solutions receive the input string.
/// - `answer_one`, `answer_two` (optional): Expressions for recorded answers as `&'static str`,
///   compared to each part's displayed output when verifying.
///
/// # Errors
///
/// Emits a compile error if applied to anything other than a struct or impl block, if `title` or
/// `part_one` is missing, if a property repeats, or if a property is unknown.
///
/// # Examples
///
/// ```ignore
/// #[puzzle_runner(title = "Day 1: Sonar Sweep", parsed = Depths, part_one = Day01, part_two = Day01)]
/// impl super::AdventOfCode2021<1> {}
///
/// #[puzzle_runner(title = TITLE, part_one = Markers, answer_one = "1275")]
/// struct MarkersRunner;
/// ```
#[proc_macro_attribute]
pub fn puzzle_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut properties = RunnerProperties::default();
    let property_parser = syn::meta::parser(|meta| properties.parse_property(&meta));
    parse_macro_input!(args with property_parser);

    let Some(title_expr) = properties.title else {
        return Error::new(
            proc_macro2::Span::call_site(),
            "missing required property: 'title'",
        )
        .to_compile_error()
        .into();
    };
    let Some(part_one_ty) = properties.part_one else {
        return Error::new(
            proc_macro2::Span::call_site(),
            "missing required property: 'part_one'",
        )
        .to_compile_error()
        .into();
    };

    let answer_one = answer_tokens(properties.answer_one.as_ref());
    let answer_two = answer_tokens(properties.answer_two.as_ref());
    let info = quote! {
        puzzle_kit::runner::PuzzleInfo {
            title: #title_expr,
            answers: puzzle_kit::runner::KnownAnswers {
                part_one: #answer_one,
                part_two: #answer_two,
            },
        }
    };

    let driver_call = match (properties.parsed, properties.part_two) {
        (None, None) => quote! {
            puzzle_kit::runner::solve_single_part::<#part_one_ty>(
                #info, input, handler, settings
            )
        },
        (None, Some(part_two_ty)) => quote! {
            puzzle_kit::runner::solve_both_parts::<#part_one_ty, #part_two_ty>(
                #info, input, handler, settings
            )
        },
        (Some(parsed_ty), None) => quote! {
            puzzle_kit::runner::solve_parsed_single_part::<#parsed_ty, #part_one_ty>(
                #info, input, handler, settings
            )
        },
        (Some(parsed_ty), Some(part_two_ty)) => quote! {
            puzzle_kit::runner::solve_parsed_both_parts::<#parsed_ty, #part_one_ty, #part_two_ty>(
                #info, input, handler, settings
            )
        },
    };

    let original_input = proc_macro2::TokenStream::from(input.clone());
    let item = parse_macro_input!(input as Item);

    let self_ty = match item {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "the #[puzzle_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    TokenStream::from(quote! {
        #original_input

        impl puzzle_kit::runner::PuzzleRunner for #self_ty {
            fn run(
                input: &str,
                handler: &mut dyn puzzle_kit::runner::OutputHandler,
                settings: puzzle_kit::runner::RunSettings,
            ) -> puzzle_kit::DynamicResult<()> {
                #driver_call
            }
        }
    })
}
