use anyhow::Error;
use chinacolor::{
    ColorError, Colormap, PaletteIdent, PaletteKind, PaletteRecord, PaletteRequest, PaletteTable,
    find_palette, get_cmap, get_palette, install_palettes, list_palettes, load_palettes,
    palette_title,
};

fn setup() -> Result<(), Error> {
    let palettes = PaletteTable::from_json(include_str!("data/palette_list.json"))?;
    // already installed by another test
    _ = install_palettes(palettes);
    Ok(())
}

#[test]
fn identity() -> Result<(), Error> {
    setup()?;
    assert_eq!(
        get_palette("qual01", None, 1)?,
        vec!["#E60012", "#00A0E9", "#F39800"]
    );
    assert_eq!(
        get_palette("div01", None, 1)?,
        vec!["#0000FF", "#3333FF", "#6666FF", "#FFFFFF", "#FF6666", "#FF3333", "#FF0000"]
    );
    assert_eq!(
        get_palette("seq01", None, -1)?,
        vec!["#FFFFFF", "#C0C0C0", "#808080", "#404040", "#000000"]
    );
    Ok(())
}

#[test]
fn ident_forms() -> Result<(), Error> {
    setup()?;
    let by_index = find_palette(PaletteIdent::Index(1))?;
    let by_key = find_palette(PaletteIdent::Key("seq01".into()))?;
    let by_name = find_palette(PaletteIdent::Name("青绿".into()))?;
    let by_name_e = find_palette(PaletteIdent::Name("blue green".into()))?;
    assert_eq!(by_index, by_key);
    assert_eq!(by_index, by_name);
    assert_eq!(by_index, by_name_e);

    // key falls back to the names
    assert_eq!(find_palette("Cold Warm")?.key, "div01");
    assert_eq!(find_palette(4usize)?.key, "qual01");

    assert_eq!("3".parse::<PaletteIdent>()?, PaletteIdent::Index(3));
    assert_eq!(
        "div01".parse::<PaletteIdent>()?,
        PaletteIdent::Key("div01".into())
    );
    assert!("  ".parse::<PaletteIdent>().is_err());
    Ok(())
}

#[test]
fn name_in_declaration_order() -> Result<(), Error> {
    let rec = |key: &str, name: &str, name_e: &str| PaletteRecord {
        key: key.into(),
        name: name.into(),
        name_e: name_e.into(),
        ..Default::default()
    };
    let t = PaletteTable::new([rec("a", "Alpha", "Shared"), rec("b", "Shared", "Beta")]);

    // the secondary name of the earlier palette wins
    assert_eq!(t.resolve(&PaletteIdent::Name("shared".into()))?.key, "a");
    assert_eq!(t.resolve(&PaletteIdent::Key("SHARED".into()))?.key, "a");
    assert_eq!(t.resolve(&PaletteIdent::Name("beta".into()))?.key, "b");
    assert_eq!(
        t.title(&PaletteIdent::Name("Shared".into())),
        "[01 a] Alpha Shared"
    );
    Ok(())
}

#[test]
fn not_found() -> Result<(), Error> {
    setup()?;
    assert!(matches!(
        find_palette(999999usize),
        Err(ColorError::IndexOutOfRange {
            index: 999999,
            len: 7
        })
    ));
    assert!(matches!(
        find_palette(0usize),
        Err(ColorError::IndexOutOfRange { index: 0, .. })
    ));
    assert!(matches!(
        find_palette("nope"),
        Err(ColorError::PaletteNotFound(v)) if v == "nope"
    ));
    assert!(matches!(
        find_palette(PaletteIdent::Name("seq01".into())),
        Err(ColorError::PaletteNotFound(_))
    ));
    Ok(())
}

#[test]
fn sequential() -> Result<(), Error> {
    setup()?;
    assert_eq!(get_palette("seq01", Some(2), 1)?, vec!["#000000", "#404040"]);
    assert_eq!(
        get_palette("seq02", Some(3), 1)?,
        vec!["#000000", "#808080", "#FFFFFF"]
    );
    assert_eq!(
        get_palette("seq02", Some(5), 1)?,
        vec!["#000000", "#404040", "#808080", "#BFBFBF", "#FFFFFF"]
    );
    assert_eq!(
        get_palette("seq02", Some(3), -1)?,
        vec!["#FFFFFF", "#808080", "#000000"]
    );
    assert!(get_palette("seq02", Some(0), 1)?.is_empty());
    Ok(())
}

#[test]
fn diverging() -> Result<(), Error> {
    setup()?;
    assert_eq!(
        get_palette("div01", Some(3), 1)?,
        vec!["#6666FF", "#FFFFFF", "#FF6666"]
    );
    assert_eq!(
        get_palette("div01", Some(4), 1)?,
        vec!["#3333FF", "#6666FF", "#FFFFFF", "#FF6666"]
    );
    assert_eq!(get_palette("div01", Some(1), 1)?, vec!["#FFFFFF"]);
    assert_eq!(
        get_palette("div01", Some(3), -1)?,
        vec!["#FF6666", "#FFFFFF", "#6666FF"]
    );

    let c = get_palette("div01", Some(13), 1)?;
    assert_eq!(c.len(), 13);
    assert_eq!(c[0], "#0000FF");
    assert_eq!(c[6], "#FFFFFF");
    assert_eq!(c[12], "#FF0000");
    Ok(())
}

#[test]
fn qualitative() -> Result<(), Error> {
    setup()?;
    assert_eq!(
        get_palette("qual01", Some(5), 1)?,
        vec!["#E60012", "#00A0E9", "#F39800", "#E60012", "#00A0E9"]
    );
    assert_eq!(
        get_palette("qual01", Some(5), -1)?,
        vec!["#00A0E9", "#E60012", "#F39800", "#00A0E9", "#E60012"]
    );
    assert_eq!(
        get_palette("qual01", Some(2), 1)?,
        vec!["#E60012", "#00A0E9"]
    );
    Ok(())
}

#[test]
fn listing() -> Result<(), Error> {
    setup()?;
    let info = list_palettes()?;
    assert_eq!(info.len(), 7);
    assert_eq!(info[2].key, "div01");
    assert_eq!(info[2].index, 3);
    assert_eq!(info[2].kind, PaletteKind::Diverging);

    let (map, keys) = load_palettes()?;
    assert_eq!(keys.len(), map.len());
    assert_eq!(keys[0], "seq01");
    assert_eq!(map["qual15"].colors.len(), 2);
    Ok(())
}

#[test]
fn titles() -> Result<(), Error> {
    setup()?;
    assert_eq!(palette_title(1usize)?, "[01 seq01] 青绿 Blue Green");
    assert_eq!(palette_title("div10")?, "[06 div10] 胭脂松绿 Rouge Pine");
    assert_eq!(palette_title(999999usize)?, "999999");
    Ok(())
}

#[test]
fn request() -> Result<(), Error> {
    setup()?;
    let req = PaletteRequest::BuiltIn {
        palette: PaletteIdent::Key("div01".into()),
        n: Some(3),
        direction: 1,
    };
    assert_eq!(
        chinacolor::ctc_palette(&req)?,
        get_palette("div01", Some(3), 1)?
    );
    Ok(())
}

#[test]
fn cmap() -> Result<(), Error> {
    setup()?;
    let Colormap::Continuous(g) = get_cmap("seq02", None, 1)? else {
        panic!("expected continuous colormap");
    };
    assert_eq!(g.samples(3), vec!["#000000", "#808080", "#FFFFFF"]);
    assert_eq!(g.stops(), vec!["#000000", "#FFFFFF"]);
    assert_eq!(g.reversed().hex_at(0.0), "#FFFFFF");

    let m = get_cmap("seq02", None, -1)?;
    assert_eq!(m.colors(3), vec!["#FFFFFF", "#808080", "#000000"]);

    let m = get_cmap("qual01", Some(4), 1)?;
    assert_eq!(
        m,
        Colormap::Listed(vec![
            "#E60012".into(),
            "#00A0E9".into(),
            "#F39800".into(),
            "#E60012".into()
        ])
    );
    assert_eq!(m.colors(2), vec!["#E60012", "#00A0E9"]);
    Ok(())
}
