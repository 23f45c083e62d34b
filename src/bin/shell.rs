//! scullstore Shell
//!
//! Creates a device table and drives it with line commands from stdin.

use std::io::{self, BufRead, Write};

use clap::Parser;
use scullstore::{Config, Devices, Handle, OpenMode, ScullError, Whence};
use tracing_subscriber::{fmt, EnvFilter};

/// scullstore shell
#[derive(Parser, Debug)]
#[command(name = "scull-shell")]
#[command(about = "Interactive shell over in-memory scull devices")]
#[command(version)]
struct Args {
    /// Number of devices
    #[arg(short, long, default_value_t = scullstore::config::DEFAULT_DEVICE_COUNT)]
    devices: usize,

    /// Index of the first device
    #[arg(short, long, default_value_t = scullstore::config::DEFAULT_FIRST_INDEX)]
    first_index: usize,

    /// Bytes per chunk
    #[arg(short, long, default_value_t = scullstore::config::DEFAULT_QUANTUM)]
    quantum: usize,

    /// Chunks per segment
    #[arg(short = 's', long, default_value_t = scullstore::config::DEFAULT_QSET)]
    qset: usize,
}

const HELP: &str = "\
commands:
  open <dev> <r|w|rw>          open a device (w resets it)
  read <n>                     read up to n bytes at the position
  write <text>                 write text at the position
  seek <delta> <set|cur|end>   move the position
  trim                         release the device's contents
  stat                         show position and store usage
  close                        close the open device
  help                         show this text
  quit                         exit";

fn main() {
    // Logs go to stderr so command output stays on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,scullstore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("scullstore shell v{}", scullstore::VERSION);

    let config = Config::builder()
        .device_count(args.devices)
        .first_index(args.first_index)
        .quantum(args.quantum)
        .qset(args.qset)
        .build();

    let devices = match Devices::new(&config) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("Failed to create devices: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&devices) {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }

    devices.trim_all();
}

/// Read commands until EOF or `quit`
fn run(devices: &Devices) -> scullstore::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle: Option<Handle> = None;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        match execute(devices, &mut handle, line) {
            Ok(output) => writeln!(stdout, "{}", output)?,
            Err(e) => writeln!(stdout, "error: {}", e)?,
        }
        stdout.flush()?;
    }

    Ok(())
}

fn execute(devices: &Devices, handle: &mut Option<Handle>, line: &str) -> scullstore::Result<String> {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "help" => Ok(HELP.to_string()),
        "open" => {
            let mut parts = rest.split_whitespace();
            let index = parse_arg::<usize>(parts.next(), "device index")?;
            let mode = match parts.next() {
                Some("r") => OpenMode::ReadOnly,
                Some("w") => OpenMode::WriteOnly,
                Some("rw") | None => OpenMode::ReadWrite,
                Some(other) => {
                    return Err(ScullError::InvalidArgument(format!("unknown mode: {}", other)))
                }
            };
            *handle = Some(devices.open(index, mode)?);
            Ok(format!("opened device {} ({:?})", index, mode))
        }
        "close" => match handle.take() {
            Some(h) => Ok(format!("closed device {}", h.device())),
            None => Ok("no device open".to_string()),
        },
        "read" => {
            let h = open_handle(handle)?;
            let max_len = parse_arg::<usize>(Some(rest), "byte count")?;
            let data = h.read(max_len)?;
            if data.is_empty() {
                Ok("<end of data>".to_string())
            } else {
                Ok(format!("{} bytes: {}", data.len(), String::from_utf8_lossy(&data)))
            }
        }
        "write" => {
            let h = open_handle(handle)?;
            let written = h.write(rest.as_bytes())?;
            Ok(format!(
                "wrote {} of {} bytes, position {}",
                written,
                rest.len(),
                h.position()
            ))
        }
        "seek" => {
            let h = open_handle(handle)?;
            let mut parts = rest.split_whitespace();
            let delta = parse_arg::<i64>(parts.next(), "seek delta")?;
            let whence = match parts.next() {
                Some("set") | None => Whence::Set,
                Some("cur") => Whence::Current,
                Some("end") => Whence::End,
                Some(other) => Whence::try_from(parse_arg::<i32>(Some(other), "whence")?)?,
            };
            Ok(format!("position {}", h.seek(delta, whence)?))
        }
        "trim" => {
            let h = open_handle(handle)?;
            h.trim()?;
            Ok(format!("trimmed device {}", h.device()))
        }
        "stat" => {
            let h = open_handle(handle)?;
            let stats = devices.stats(h.device())?;
            Ok(format!(
                "device {} position {} size {} segments {} chunks {} bytes {} quantum {} qset {}",
                h.device(),
                h.position(),
                stats.size,
                stats.segments,
                stats.allocated_chunks,
                stats.allocated_bytes,
                stats.layout.quantum(),
                stats.layout.qset()
            ))
        }
        other => Err(ScullError::InvalidArgument(format!(
            "unknown command: {} (try help)",
            other
        ))),
    }
}

fn open_handle(handle: &mut Option<Handle>) -> scullstore::Result<&mut Handle> {
    handle
        .as_mut()
        .ok_or_else(|| ScullError::InvalidArgument("no device open".to_string()))
}

fn parse_arg<T: std::str::FromStr>(value: Option<&str>, what: &str) -> scullstore::Result<T> {
    let value = value.ok_or_else(|| ScullError::InvalidArgument(format!("missing {}", what)))?;
    value
        .parse()
        .map_err(|_| ScullError::InvalidArgument(format!("invalid {}: {}", what, value)))
}
