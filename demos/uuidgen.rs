//! Simple command that prints one or '-n count' UUID strings of a chosen version

use std::{env, io, io::Write, process::ExitCode};

use rfc4122::{Domain, Uuid};

const USAGE: &str = "[-n count] [-v 1|2|3|4|5|6] [--ns dns|url|oid|x500] [--name NAME]";

#[derive(Debug, Default)]
struct Args {
    count: Option<usize>,
    version: Option<u8>,
    namespace: Option<Uuid>,
    name: Option<String>,
}

fn main() -> io::Result<ExitCode> {
    let mut args = env::args();
    let program = args.next();
    let args = match parse_args(args) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!(
                "Usage: {} {}",
                program.as_deref().unwrap_or("uuidgen"),
                USAGE
            );
            return Ok(ExitCode::FAILURE);
        }
    };

    let namespace = args.namespace.unwrap_or(rfc4122::NAMESPACE_DNS);
    let name = args.name.as_deref().unwrap_or_default();
    let generate = || match args.version.unwrap_or(4) {
        1 => rfc4122::new_v1(),
        2 => rfc4122::new_v2(Domain::Person),
        3 => rfc4122::new_v3(&namespace, name),
        5 => rfc4122::new_v5(&namespace, name),
        6 => rfc4122::new_v6(),
        _ => rfc4122::new_v4(),
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..args.count.unwrap_or(1) {
        writeln!(buf, "{}", generate())?;
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        let opt = match arg.as_str() {
            "-n" => "n",
            "-v" => "v",
            "--ns" => "ns",
            "--name" => "name",
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        };
        let Some(value) = args.next() else {
            return Err(format!("argument to option '{}' missing", opt));
        };
        let given_twice = match opt {
            "n" => parsed.count.replace(parse_count(&value)?).is_some(),
            "v" => parsed.version.replace(parse_version(&value)?).is_some(),
            "ns" => parsed.namespace.replace(parse_namespace(&value)?).is_some(),
            _ => parsed.name.replace(value).is_some(),
        };
        if given_twice {
            return Err(format!("option '{}' given more than once", opt));
        }
    }

    if matches!(parsed.version, Some(3 | 5)) && parsed.name.is_none() {
        return Err("option 'name' required for versions 3 and 5".to_owned());
    }
    Ok(parsed)
}

fn parse_count(value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("invalid argument to option 'n': '{}'", value))
}

fn parse_version(value: &str) -> Result<u8, String> {
    match value.parse() {
        Ok(v @ 1..=6) => Ok(v),
        _ => Err(format!("invalid argument to option 'v': '{}'", value)),
    }
}

fn parse_namespace(value: &str) -> Result<Uuid, String> {
    match value {
        "dns" => Ok(rfc4122::NAMESPACE_DNS),
        "url" => Ok(rfc4122::NAMESPACE_URL),
        "oid" => Ok(rfc4122::NAMESPACE_OID),
        "x500" => Ok(rfc4122::NAMESPACE_X500),
        _ => Uuid::parse_str(value)
            .map_err(|_| format!("invalid argument to option 'ns': '{}'", value)),
    }
}
