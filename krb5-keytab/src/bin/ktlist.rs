use chrono::Utc;
use clap::Parser;
use krb5_keytab::{
    prefix_progname_to_error, Context, EncType, Keytab, ParseObserver, StrConv, BUFSIZ,
};
use once_cell::sync::Lazy;
use std::{fs, process::ExitCode};
use tracing_subscriber::EnvFilter;

const PROGNAME: &str = "ktlist";
const DUMP_WIDTH: usize = 16;

static ARGS: Lazy<Args> = Lazy::new(Args::parse);
static TIMESTAMP_WIDTH: Lazy<usize> =
    Lazy::new(|| StrConv::timestamp_to_sfstring(Utc::now()).len());

#[derive(Parser)]
#[command(name = PROGNAME, version)]
struct Args {
    /// shows keytab entry timestamps
    #[arg(short = 't', default_value_t = false)]
    show_time: bool,
    /// shows keytab entry keys
    #[arg(short = 'K', default_value_t = false)]
    show_keys: bool,
    /// shows the encryption type
    #[arg(short = 'e', default_value_t = false)]
    show_etype: bool,
    /// dumps every record and principal component while scanning
    #[arg(short = 'x', default_value_t = false)]
    dump: bool,

    name: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    prefix_progname_to_error(PROGNAME, run())
}

fn run() -> anyhow::Result<()> {
    let name = match &ARGS.name {
        Some(name) => name.to_owned(),
        None => Context::init()
            .map_err(|e| anyhow::anyhow!("{} while initializing krb5", e))?
            .default_keytab_name()
            .map_err(|e| anyhow::anyhow!("{} while getting default keytab", e))?,
    };
    let path = Context::resolve_keytab_path(&name)
        .map_err(|e| anyhow::anyhow!("{} while resolving keytab {}", e, name))?;

    let name = format!("FILE:{}", path.display());
    if name.len() > BUFSIZ {
        return Err(anyhow::anyhow!(
            "Keytab name too long while getting keytab name"
        ));
    }
    println!("Keytab name: {}", name);

    let data =
        fs::read(&path).map_err(|e| anyhow::anyhow!("{} while starting keytab scan", e))?;
    let keytab = if ARGS.dump {
        Keytab::parse_with_observer(&data, &mut HexDumper)
    } else {
        Keytab::parse(&data)
    }
    .map_err(|e| anyhow::anyhow!("{} while scanning keytab", e))?;

    if ARGS.show_time {
        println!(
            "KVNO Timestamp{} Principal",
            vec![" "; *TIMESTAMP_WIDTH - "Timestamp".len()].join("")
        );
        println!(
            "{} {} {}",
            ["-"; 4].join(""),
            vec!["-"; *TIMESTAMP_WIDTH].join(""),
            vec!["-"; 73 - *TIMESTAMP_WIDTH].join("")
        );
    } else {
        println!("KVNO Principal");
        println!("{} {}", ["-"; 4].join(""), ["-"; 74].join(""));
    }

    for entry in &keytab {
        print!("{:>4} ", entry.vno);
        if ARGS.show_time {
            let timestamp = entry
                .timestamp_datetime()
                .map(StrConv::timestamp_to_sfstring)
                .unwrap_or_else(|| entry.timestamp.to_string());
            print!("{} ", timestamp);
        }
        print!("{}", entry.principal);
        if ARGS.show_etype {
            print!(" ({}) ", etype_string(entry.enctype));
        }
        if ARGS.show_keys {
            let key = entry
                .key
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect::<Vec<String>>()
                .join("");
            print!(" (0x{})", key);
        }
        println!();
    }

    Ok(())
}

fn etype_string(enctype: EncType) -> String {
    let mut name = enctype.deprecated_name(false);
    if name.len() > 100 {
        name.truncate(100);
    }
    name
}

struct HexDumper;

impl ParseObserver for HexDumper {
    fn record(&mut self, offset: usize, body: &[u8]) {
        eprintln!("Entry at offset {}:\n{}", offset, hex_dump(body));
    }

    fn hole(&mut self, offset: usize, size: usize) {
        eprintln!("Hole at offset {}: {} bytes\n", offset, size);
    }

    fn component(&mut self, index: usize, data: &[u8]) {
        eprintln!("Data[{}]:\n{}", index, hex_dump(data));
    }
}

// Same layout as `hexdump -C`.
fn hex_dump(data: &[u8]) -> String {
    data.chunks(DUMP_WIDTH)
        .enumerate()
        .map(|(i, chunk)| {
            let hex = chunk
                .iter()
                .enumerate()
                .map(|(j, b)| {
                    if j == DUMP_WIDTH / 2 {
                        format!(" {:02x}", b)
                    } else {
                        format!("{:02x}", b)
                    }
                })
                .collect::<Vec<String>>()
                .join(" ");
            let ascii = chunk
                .iter()
                .map(|b| {
                    if b.is_ascii_graphic() || *b == b' ' {
                        *b as char
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            format!("{:08x}  {:<49} |{}|\n", i * DUMP_WIDTH, hex, ascii)
        })
        .collect()
}
