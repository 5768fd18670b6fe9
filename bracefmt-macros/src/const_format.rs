use bracefmt::{Argument, FormatOptions, try_format};
use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{
    Expr, ExprLit, ExprUnary, Lit, LitStr, Token, UnOp,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// `"template", arg, arg, ...` with an optional trailing comma
struct ConstFormatInput {
    template: LitStr,
    args: Vec<Expr>,
}

impl Parse for ConstFormatInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let template: LitStr = input.parse()?;
        let mut args = Vec::new();
        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            args.push(input.parse()?);
        }
        Ok(Self { template, args })
    }
}

/// Entry point for `const_format!`.
pub fn const_format(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as ConstFormatInput);
    match expand(&input) {
        Ok(text) => {
            let literal = Literal::string(&text);
            quote!(#literal).into()
        }
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &ConstFormatInput) -> syn::Result<String> {
    let args = input
        .args
        .iter()
        .map(to_argument)
        .collect::<syn::Result<Vec<_>>>()?;

    try_format(&input.template.value(), &args, &FormatOptions::strict())
        .map_err(|e| syn::Error::new(input.template.span(), e.to_string()))
}

/// Convert a literal expression into an argument
fn to_argument(expr: &Expr) -> syn::Result<Argument> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => lit_to_argument(lit),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match &**inner {
            Expr::Lit(ExprLit {
                lit: Lit::Int(int), ..
            }) => {
                let magnitude: i128 = int.base10_parse()?;
                i64::try_from(-magnitude)
                    .map(Argument::Int)
                    .map_err(|_| syn::Error::new_spanned(expr, "integer does not fit in i64"))
            }
            _ => Err(syn::Error::new_spanned(
                expr,
                "only integer literals can be negated",
            )),
        },
        Expr::Array(array) => {
            let is_map = !array.elems.is_empty()
                && array
                    .elems
                    .iter()
                    .all(|e| matches!(e, Expr::Tuple(t) if t.elems.len() == 2));
            if is_map {
                let entries = array
                    .elems
                    .iter()
                    .filter_map(|e| match e {
                        Expr::Tuple(t) => Some(t),
                        _ => None,
                    })
                    .map(|t| Ok((to_argument(&t.elems[0])?, to_argument(&t.elems[1])?)))
                    .collect::<syn::Result<Vec<_>>>()?;
                Ok(Argument::Map(entries))
            } else {
                let items = array
                    .elems
                    .iter()
                    .map(to_argument)
                    .collect::<syn::Result<Vec<_>>>()?;
                Ok(Argument::Seq(items))
            }
        }
        // Expressions forwarded through macro_rules arrive wrapped
        Expr::Group(group) => to_argument(&group.expr),
        Expr::Paren(paren) => to_argument(&paren.expr),
        other => Err(syn::Error::new_spanned(
            other,
            "const_format! arguments must be literals, arrays of literals or arrays of pairs",
        )),
    }
}

fn lit_to_argument(lit: &Lit) -> syn::Result<Argument> {
    match lit {
        Lit::Int(int) => match int.base10_parse::<i64>() {
            Ok(value) => Ok(Argument::Int(value)),
            Err(_) => int.base10_parse::<u64>().map(Argument::UInt),
        },
        Lit::Str(s) => Ok(Argument::Str(s.value())),
        Lit::Char(c) => Ok(Argument::Str(c.value().to_string())),
        Lit::Byte(b) => Ok(Argument::UInt(u64::from(b.value()))),
        other => Err(syn::Error::new_spanned(
            other,
            "unsupported literal; expected an integer, string or char",
        )),
    }
}
