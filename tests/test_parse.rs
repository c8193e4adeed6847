use anyhow::Error;
use chinacolor::{
    ColorError, Gradient, LchError, lch_approx_srgb, lchuv_to_srgb, named, parse_color,
    srgb_to_hex, to_hex, validate_colors,
};

#[test]
fn hex_forms() -> Result<(), Error> {
    assert_eq!(to_hex("#abc")?, "#AABBCC");
    assert_eq!(to_hex("abc")?, "#AABBCC");
    assert_eq!(to_hex("#ED5126")?, "#ED5126");
    assert_eq!(to_hex("  #AbCdEf  ")?, "#ABCDEF");
    assert_eq!(to_hex("#11223344")?, "#112233");
    assert_eq!(to_hex("789262")?, "#789262");
    Ok(())
}

#[test]
fn hex_invalid() {
    assert!(matches!(
        to_hex("#abcde"),
        Err(ColorError::InvalidColorFormat(_))
    ));
    assert!(matches!(
        to_hex("#abcd"),
        Err(ColorError::InvalidColorFormat(_))
    ));
    assert!(matches!(to_hex(""), Err(ColorError::InvalidColorFormat(_))));
    assert!(matches!(
        to_hex("#ggg"),
        Err(ColorError::InvalidColorFormat(_))
    ));
}

#[test]
fn rgb_forms() -> Result<(), Error> {
    assert_eq!(to_hex("rgb(255, 0, 0)")?, "#FF0000");
    assert_eq!(to_hex("rgb(1, 0, 0)")?, "#FF0000");
    assert_eq!(to_hex("RGB(0,0,255)")?, "#0000FF");
    assert_eq!(to_hex("rgba(0, 128, 255, 0.5)")?, "#0080FF");
    assert_eq!(to_hex("rgb(100%, 50%, 0%)")?, "#FF8000");
    // 0..1 unless any component is above 1
    assert_eq!(to_hex("rgb(0.5, 0.5, 0.5)")?, "#808080");
    assert_eq!(to_hex("rgb(2, 0, 0)")?, "#020000");
    Ok(())
}

#[test]
fn rgb_invalid() {
    assert!(to_hex("rgb(1, 2)").is_err());
    assert!(to_hex("rgb(a, b, c)").is_err());
    assert!(to_hex("rgb(1, 2, 3").is_err());
}

#[test]
fn hsv_hsl() -> Result<(), Error> {
    assert_eq!(to_hex("hsv(0, 1, 1)")?, "#FF0000");
    assert_eq!(to_hex("hsv(120, 100%, 100%)")?, "#00FF00");
    // hue as fraction
    assert_eq!(to_hex("hsv(0.5, 1, 1)")?, "#00FFFF");
    assert_eq!(to_hex("hsv(0, 0, 0)")?, "#000000");

    assert_eq!(to_hex("hsl(240, 1, 0.5)")?, "#0000FF");
    assert_eq!(to_hex("hsl(0, 0%, 50%)")?, "#808080");
    assert_eq!(to_hex("hsl(0, 0, 1)")?, "#FFFFFF");
    Ok(())
}

#[test]
fn hcl() -> Result<(), Error> {
    assert_eq!(to_hex("hcl(0, 0, 100)")?, "#FFFFFF");
    assert_eq!(to_hex("hcl(0, 0, 0)")?, "#000000");

    assert_eq!(to_hex("hcl(260, 80, 30)")?, "#023FA5");
    assert_eq!(to_hex("hcl(20, 60, 50)")?, "#AF6253");
    // chroma and lightness as fractions
    assert_eq!(to_hex("hcl(20, 0.6, 0.5)")?, "#AF6253");
    Ok(())
}

#[test]
fn hcl_approximation() -> Result<(), Error> {
    assert_eq!(srgb_to_hex(lch_approx_srgb(50.0, 100.0, 0.0)), "#FF0000");
    assert_eq!(srgb_to_hex(lch_approx_srgb(50.0, 100.0, 480.0)), "#00FF00");
    assert_eq!(srgb_to_hex(lch_approx_srgb(50.0, 0.0, 200.0)), "#808080");
    assert_eq!(srgb_to_hex(lch_approx_srgb(100.0, 40.0, f64::NAN)), "#FFFFFF");

    assert!(matches!(
        lchuv_to_srgb(50.0, f64::INFINITY, 0.0),
        Err(LchError::NonFiniteInput)
    ));
    assert_eq!(srgb_to_hex(lchuv_to_srgb(30.0, 80.0, 260.0)?), "#023FA5");
    Ok(())
}

#[test]
fn names() -> Result<(), Error> {
    assert_eq!(to_hex("red")?, "#FF0000");
    assert_eq!(to_hex("RED")?, "#FF0000");
    assert_eq!(to_hex("tab:blue")?, "#1F77B4");
    assert_eq!(to_hex("k")?, "#000000");
    assert_eq!(to_hex("navy")?, "#000080");

    assert!(named::lookup_common("white").is_some());
    assert!(named::lookup("nosuchcolor").is_none());
    assert!(matches!(
        to_hex("nosuchcolor"),
        Err(ColorError::InvalidColorFormat(v)) if v == "nosuchcolor"
    ));
    Ok(())
}

#[test]
fn rounding() -> Result<(), Error> {
    let c = parse_color("rgb(0.5, 0.25, 1)")?;
    assert_eq!(srgb_to_hex(c), "#8040FF");

    // clamped
    let g = Gradient::new(["#000000", "#FFFFFF"])?;
    assert_eq!(g.hex_at(2.0), "#FFFFFF");
    assert_eq!(g.hex_at(-1.0), "#000000");
    Ok(())
}

#[test]
fn validate() -> Result<(), Error> {
    assert_eq!(
        validate_colors(["#abc", "red", "rgb(0,0,255)"])?,
        vec!["#AABBCC", "#FF0000", "#0000FF"]
    );
    assert!(validate_colors(Vec::<String>::new())?.is_empty());
    assert!(matches!(
        validate_colors(["#abc", "bogus"]),
        Err(ColorError::InvalidColorFormat(v)) if v == "bogus"
    ));
    Ok(())
}
