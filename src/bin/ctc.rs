//!
//! Command line access to the palettes.
//!
//! ```text
//! ctc [--data dir] [--verbose] list [--json]
//! ctc [--data dir] [--verbose] get <palette> [-n N] [--reverse]
//! ctc [--data dir] [--verbose] hex <color>...
//! ctc [--data dir] [--verbose] pick [--ids 1,5] [--group 3:-1] [--order keep|asc|desc] [-n N] [--reverse]
//! ```
//!

use anyhow::{Error, anyhow};
use chinacolor::{
    ColorPick, Config, OrderRule, PaletteIdent, SubgroupSel, custom_palette_pick, get_palette,
    list_palettes, palette_title, set_config, to_hex,
};
use std::env::args;
use std::io;
use std::path::PathBuf;
use std::process::exit;

fn main() -> Result<(), Error> {
    let args = parse_arg();
    setup_logging(args.verbose)?;

    if let Some(data) = &args.data {
        set_config(Config::with_data_dir(data))?;
    }

    match args.cmd {
        Cmd::List { json } => list(json)?,
        Cmd::Get {
            palette,
            n,
            direction,
        } => {
            let palette = palette.parse::<PaletteIdent>()?;
            log::info!("{}", palette_title(&palette)?);
            for c in get_palette(palette, n, direction)? {
                println!("{}", c);
            }
        }
        Cmd::Hex { colors } => {
            for c in colors {
                println!("{}", to_hex(&c)?);
            }
        }
        Cmd::Pick { pick, n, direction } => {
            for c in custom_palette_pick(&pick, n, direction)? {
                println!("{}", c);
            }
        }
    }

    Ok(())
}

fn list(json: bool) -> Result<(), Error> {
    let palettes = list_palettes()?;
    if json {
        serde_json::to_writer_pretty(io::stdout(), &palettes)?;
        println!();
    } else {
        for p in palettes {
            println!(
                "{:3} {:8} {:12} {:3} {} {}",
                p.index, p.key, p.kind, p.color_count, p.name, p.name_e
            );
        }
    }
    Ok(())
}

#[derive(Debug)]
enum Cmd {
    List {
        json: bool,
    },
    Get {
        palette: String,
        n: Option<usize>,
        direction: i32,
    },
    Hex {
        colors: Vec<String>,
    },
    Pick {
        pick: ColorPick,
        n: Option<usize>,
        direction: i32,
    },
}

#[derive(Debug)]
struct Args {
    data: Option<PathBuf>,
    verbose: bool,
    cmd: Cmd,
}

const USAGE: &str = "\
ctc [--data dir] [--verbose] list [--json]
ctc [--data dir] [--verbose] get <palette> [-n N] [--reverse]
ctc [--data dir] [--verbose] hex <color>...
ctc [--data dir] [--verbose] pick [--ids 1,5] [--group 3:-1] [--order keep|asc|desc] [-n N] [--reverse]";

fn fail(msg: impl AsRef<str>) -> ! {
    eprintln!("{}", msg.as_ref());
    eprintln!();
    eprintln!("{}", USAGE);
    exit(1)
}

fn parse_arg() -> Args {
    let mut data = None;
    let mut verbose = false;
    let mut cmd = None::<String>;
    let mut json = false;
    let mut palette = None;
    let mut n = None;
    let mut direction = 1;
    let mut colors = Vec::new();
    let mut pick = ColorPick::new();

    let mut args = args();
    _ = args.next();

    enum S {
        Start,
        Data,
        Count,
        Ids,
        Group,
        Order,
    }
    let mut s = S::Start;
    for arg in args {
        match s {
            S::Start => {
                if arg == "--help" || arg == "-h" {
                    eprintln!("{}", USAGE);
                    exit(0);
                } else if arg == "--data" {
                    s = S::Data;
                } else if arg == "--verbose" || arg == "-v" {
                    verbose = true;
                } else if arg == "--json" {
                    json = true;
                } else if arg == "--reverse" || arg == "-r" {
                    direction = -1;
                } else if arg == "-n" {
                    s = S::Count;
                } else if arg == "--ids" {
                    s = S::Ids;
                } else if arg == "--group" {
                    s = S::Group;
                } else if arg == "--order" {
                    s = S::Order;
                } else if cmd.is_none() {
                    cmd = Some(arg);
                } else if cmd.as_deref() == Some("get") && palette.is_none() {
                    palette = Some(arg);
                } else if cmd.as_deref() == Some("hex") {
                    colors.push(arg);
                } else {
                    fail(format!("unexpected argument {:?}", arg));
                }
            }
            S::Data => {
                data = Some(PathBuf::from(arg));
                s = S::Start;
            }
            S::Count => {
                match arg.parse::<usize>() {
                    Ok(v) => n = Some(v),
                    Err(_) => fail(format!("-n expects a count, not {:?}", arg)),
                }
                s = S::Start;
            }
            S::Ids => {
                match parse_list(&arg) {
                    Ok(v) => pick = pick.color_ids(v),
                    Err(e) => fail(format!("--ids: {}", e)),
                }
                s = S::Start;
            }
            S::Group => {
                match parse_group(&arg) {
                    Ok((g, sub)) => pick = pick.group(g, sub),
                    Err(e) => fail(format!("--group: {}", e)),
                }
                s = S::Start;
            }
            S::Order => {
                let order = match arg.as_str() {
                    "keep" => OrderRule::PreserveInput,
                    "asc" => OrderRule::Ascending,
                    "desc" => OrderRule::Descending,
                    v => match v.parse::<i32>().map(OrderRule::from_code) {
                        Ok(Ok(v)) => v,
                        _ => fail(format!("--order expects keep, asc or desc, not {:?}", v)),
                    },
                };
                pick = pick.order(order);
                s = S::Start;
            }
        }
    }
    if !matches!(s, S::Start) {
        fail("missing value for the last option");
    }

    let cmd = match cmd.as_deref() {
        Some("list") => Cmd::List { json },
        Some("get") => match palette {
            Some(palette) => Cmd::Get {
                palette,
                n,
                direction,
            },
            None => fail("get needs a palette index, key or name"),
        },
        Some("hex") => Cmd::Hex { colors },
        Some("pick") => Cmd::Pick { pick, n, direction },
        Some(v) => fail(format!("unknown command {:?}", v)),
        None => fail("no command"),
    };

    Args { data, verbose, cmd }
}

/// Comma separated ids.
fn parse_list(arg: &str) -> Result<Vec<u32>, Error> {
    arg.split(',')
        .filter(|v| !v.trim().is_empty())
        .map(|v| {
            v.trim()
                .parse::<u32>()
                .map_err(|e| anyhow!("{:?}: {}", v, e))
        })
        .collect()
}

/// `group` or `group:sub,sub` or `group:-1`.
fn parse_group(arg: &str) -> Result<(u32, SubgroupSel), Error> {
    let (group, sub) = match arg.split_once(':') {
        Some((g, s)) => (g, Some(s)),
        None => (arg, None),
    };
    let group = group
        .trim()
        .parse::<u32>()
        .map_err(|e| anyhow!("{:?}: {}", group, e))?;
    let sub = match sub {
        None => SubgroupSel::default(),
        Some(sub) => {
            let codes = sub
                .split(',')
                .map(|v| {
                    v.trim()
                        .parse::<i32>()
                        .map_err(|e| anyhow!("{:?}: {}", v, e))
                })
                .collect::<Result<Vec<_>, _>>()?;
            SubgroupSel::from_codes(&codes)?
        }
    };
    Ok((group, sub))
}

fn setup_logging(verbose: bool) -> Result<(), Error> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{}: {}", record.level(), message)) //
        })
        .level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .chain(io::stderr())
        .apply()?;
    Ok(())
}
