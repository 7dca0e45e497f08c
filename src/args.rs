//! Command-line parsing for the filterwand binaries.
//!
//! `fw-colorblind` takes single-dash options (`-input`, `-type`), which the
//! usual derive-based parsers cannot express, so both grammars are parsed by
//! hand against the same tiny helper set.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use strum::{EnumString, IntoStaticStr, VariantArray};

use crate::arg_parsers::{parse_number, KernelSize};
use crate::colorspace::Condition;
use crate::error::WandError;
use crate::fw_err;
use crate::operations::Operation;
use crate::plan::FilterPlan;

pub const DEFAULT_KERNEL_SIZE: u32 = 21;
pub const DEFAULT_ANGLE: f32 = 45.0;
pub const DEFAULT_DEGREE: f32 = 1.0;

/// Blur flavors selectable on the `fw-blur` command line.
#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum BlurKind {
    Gaussian,
    Directional,
}

/// Parses `fw-blur <gaussian|directional> <input> <output> [options]`.
/// Options and positionals may be interleaved.
pub fn parse_blur_args(args: Vec<OsString>) -> Result<FilterPlan, WandError> {
    let mut positional: Vec<OsString> = Vec::new();
    let mut blur_amount = None;
    let mut kernel_size = None;
    let mut angle = None;

    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    while let Some(raw_arg) = iter.next() {
        let name = option_name(&raw_arg, "--").map(str::to_owned);
        match name.as_deref() {
            Some("blur_amount") => {
                let width = parse_number(&expect_value(&mut iter, "--blur_amount")?, "--blur_amount")?;
                let height =
                    parse_number(&expect_value(&mut iter, "--blur_amount")?, "--blur_amount")?;
                blur_amount = Some(KernelSize::new(width, height)?);
            }
            Some("kernel_size") => {
                kernel_size = Some(parse_number(
                    &expect_value(&mut iter, "--kernel_size")?,
                    "--kernel_size",
                )?);
            }
            Some("angle") => {
                angle = Some(parse_number(&expect_value(&mut iter, "--angle")?, "--angle")?);
            }
            Some(other) => {
                return Err(fw_err!(InvalidParameter, "unrecognized option `--{other}'"));
            }
            None => positional.push(raw_arg),
        }
    }

    let [kind, input, output]: [OsString; 3] = positional.try_into().map_err(|_| {
        fw_err!(
            InvalidParameter,
            "expected exactly three arguments: <{}> <input> <output>",
            variant_list::<BlurKind>("|")
        )
    })?;

    let kind = kind
        .to_str()
        .and_then(|s| BlurKind::try_from(s).ok())
        .ok_or_else(|| {
            fw_err!(
                InvalidParameter,
                "unrecognized blur type `{}', expected one of: {}",
                kind.to_string_lossy(),
                variant_list::<BlurKind>(", ")
            )
        })?;

    let operation = match kind {
        BlurKind::Gaussian => Operation::GaussianBlur(blur_amount.unwrap_or_default()),
        BlurKind::Directional => Operation::DirectionalBlur {
            size: kernel_size.unwrap_or(DEFAULT_KERNEL_SIZE),
            angle: angle.unwrap_or(DEFAULT_ANGLE),
        },
    };

    Ok(FilterPlan {
        input: PathBuf::from(input),
        output: PathBuf::from(output),
        operation,
    })
}

/// Parses `fw-colorblind -input PATH -output PATH -type CONDITION [-degree D]`.
pub fn parse_colorblind_args(args: Vec<OsString>) -> Result<FilterPlan, WandError> {
    let mut input = None;
    let mut output = None;
    let mut condition = None;
    let mut degree = None;

    let mut iter = args.into_iter().skip(1);
    while let Some(raw_arg) = iter.next() {
        let Some(name) = option_name(&raw_arg, "-") else {
            return Err(fw_err!(
                InvalidParameter,
                "unexpected argument `{}'",
                raw_arg.to_string_lossy()
            ));
        };
        match name {
            "input" => input = Some(PathBuf::from(expect_value(&mut iter, "-input")?)),
            "output" => output = Some(PathBuf::from(expect_value(&mut iter, "-output")?)),
            "type" => {
                let value = expect_value(&mut iter, "-type")?;
                let parsed = value
                    .to_str()
                    .and_then(|s| Condition::try_from(s).ok())
                    .ok_or_else(|| {
                        fw_err!(
                            InvalidParameter,
                            "invalid argument for option `-type': {}, expected one of: {}",
                            value.to_string_lossy(),
                            variant_list::<Condition>(", ")
                        )
                    })?;
                condition = Some(parsed);
            }
            "degree" => {
                degree = Some(parse_number(&expect_value(&mut iter, "-degree")?, "-degree")?);
            }
            other => {
                return Err(fw_err!(InvalidParameter, "unrecognized option `-{other}'"));
            }
        }
    }

    let input = input.ok_or_else(|| fw_err!(InvalidParameter, "missing required option `-input'"))?;
    let output =
        output.ok_or_else(|| fw_err!(InvalidParameter, "missing required option `-output'"))?;
    let condition =
        condition.ok_or_else(|| fw_err!(InvalidParameter, "missing required option `-type'"))?;

    Ok(FilterPlan {
        input,
        output,
        operation: Operation::SimulateDeficiency {
            condition,
            degree: degree.unwrap_or(DEFAULT_DEGREE),
        },
    })
}

/// The option name if `arg` starts with `prefix`, e.g. `--angle` -> `angle`.
fn option_name<'a>(arg: &'a OsStr, prefix: &str) -> Option<&'a str> {
    let name = arg.to_str()?.strip_prefix(prefix)?;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

fn expect_value(
    iter: &mut impl Iterator<Item = OsString>,
    option: &str,
) -> Result<OsString, WandError> {
    iter.next()
        .ok_or_else(|| fw_err!(InvalidParameter, "argument requires a value: {option}"))
}

/// The lowercase names of an option enum's variants, joined by `separator`.
fn variant_list<E>(separator: &str) -> String
where
    E: VariantArray + Copy + 'static,
    &'static str: From<E>,
{
    E::VARIANTS
        .iter()
        .map(|v| <&'static str>::from(*v))
        .collect::<Vec<_>>()
        .join(separator)
}
